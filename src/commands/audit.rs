//! Score a guess against every remaining candidate
//!
//! Builds the board from `word:feedback` history entries, then tries each
//! surviving answer as the secret and counts what the guess would leave
//! unresolved.

use super::{parse_guess, parse_row};
use crate::core::Word;
use crate::game::{Board, GameConfig};
use crate::solver::{Engine, pick_hardest, remaining_after};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Score table for one guess
#[derive(Debug)]
pub struct AuditResult {
    pub guess: String,
    pub history: usize,
    /// `(candidate, remaining)` in answer-list order
    pub scores: Vec<(String, usize)>,
    pub hardest: Option<(String, usize)>,
    pub duration: Duration,
}

impl AuditResult {
    /// Scores ordered from hardest to easiest, ties in list order
    #[must_use]
    pub fn ranked(&self) -> Vec<&(String, usize)> {
        let mut ranked: Vec<_> = self.scores.iter().collect();
        ranked.sort_by_key(|(_, remaining)| std::cmp::Reverse(*remaining));
        ranked
    }

    /// Mean remaining count over all candidates
    #[must_use]
    pub fn average_remaining(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        let total: usize = self.scores.iter().map(|(_, n)| n).sum();
        total as f64 / self.scores.len() as f64
    }
}

/// Score `guess` after the rows in `history`
///
/// # Errors
///
/// Returns an error if:
/// - The guess or a history word is not in the vocabulary
/// - A history entry is not `word:feedback` or has the wrong length
/// - The history holds more rows than the board allows
pub fn audit_guess(
    engine: &Engine<'_>,
    config: GameConfig,
    guess: &str,
    history: &[String],
    show_progress: bool,
) -> anyhow::Result<AuditResult> {
    let vocabulary = engine.vocabulary();
    let guess = parse_guess(vocabulary, guess)?;
    let rows = history
        .iter()
        .map(|entry| parse_row(vocabulary, entry))
        .collect::<Result<Vec<_>, _>>()?;
    let board = Board::with_rows(config, rows)?;

    let start = Instant::now();
    let state = board.constraints()?;
    let candidates = engine.filter_candidates(&board)?;

    let pb = if show_progress {
        ProgressBar::new(candidates.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("scoring {}", guess.text().to_uppercase()));

    let scores: Vec<(&Word, usize)> = candidates
        .par_iter()
        .map(|&goal| {
            let remaining = remaining_after(&state, &candidates, &guess, goal);
            pb.inc(1);
            (goal, remaining)
        })
        .collect();
    pb.finish_and_clear();

    let hardest = pick_hardest(scores.iter().copied());
    log::debug!(
        "audited {} against {} candidates in {:?}",
        guess,
        scores.len(),
        start.elapsed()
    );

    Ok(AuditResult {
        guess: guess.text().to_string(),
        history: board.len(),
        hardest: hardest.map(|(w, n)| (w.text().to_string(), n)),
        scores: scores
            .into_iter()
            .map(|(w, n)| (w.text().to_string(), n))
            .collect(),
        duration: start.elapsed(),
    })
}
