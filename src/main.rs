//! Wordle Constraints - CLI
//!
//! Play against a seeded secret, replay guesses against a known word, or
//! audit how a guess fares against every remaining candidate.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use wordle_constraints::{
    commands::{audit_guess, check_guesses, run_play},
    game::{
        DEFAULT_MAX_ROWS, DEFAULT_WORD_LENGTH, GameConfig,
        secret::{DEFAULT_UNIT_MILLIS, session_seed},
    },
    output::{print_audit_result, print_check_result},
    solver::Engine,
    wordlists::Vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_constraints",
    about = "Constraint engine for word-guessing puzzles: play, replay and audit guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list file (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Extra accepted guesses file, used with --wordlist
    #[arg(short = 'x', long, global = true, requires = "wordlist")]
    extra: Option<PathBuf>,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Guesses per game
    #[arg(short = 'r', long, global = true, default_value_t = DEFAULT_MAX_ROWS)]
    rows: usize,

    /// Require each guess to reuse the previous row's clues
    #[arg(long, global = true)]
    hard: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play {
        /// Seed for the secret word (default: the current second)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Replay guesses against a known secret
    Check {
        /// The secret word
        secret: String,

        /// Guesses in play order
        guesses: Vec<String>,
    },

    /// Score a guess against every remaining candidate
    Audit {
        /// The guess to score
        guess: String,

        /// Earlier rows as word:feedback, e.g. train:-G---
        history: Vec<String>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// Load the vocabulary based on the -w/-x flags
fn load_vocabulary(cli: &Cli) -> Result<Vocabulary> {
    match &cli.wordlist {
        None if cli.length == DEFAULT_WORD_LENGTH => Ok(Vocabulary::embedded()),
        None => anyhow::bail!(
            "the embedded list only has {DEFAULT_WORD_LENGTH}-letter words; use --wordlist for {}",
            cli.length
        ),
        Some(path) => Vocabulary::from_files(cli.length, path, cli.extra.as_deref())
            .with_context(|| format!("failed to load word list {}", path.display())),
    }
}

fn default_seed() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
    session_seed(now, DEFAULT_UNIT_MILLIS)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let vocabulary = load_vocabulary(&cli)?;
    if vocabulary.answers().is_empty() {
        anyhow::bail!("no {}-letter answers in the word list", cli.length);
    }
    let engine = Engine::new(&vocabulary);
    let config = GameConfig::new(cli.length, cli.rows).with_hard_mode(cli.hard);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    match command {
        Commands::Play { seed } => run_play(engine, config, seed.unwrap_or_else(default_seed)),
        Commands::Check { secret, guesses } => {
            let result = check_guesses(&engine, config, &secret, &guesses)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Audit {
            guess,
            history,
            quiet,
        } => {
            let result = audit_guess(&engine, config, &guess, &history, !quiet)?;
            print_audit_result(&result);
            Ok(())
        }
    }
}
