//! Display functions for command results

use super::formatters::{create_progress_bar, plural, row_tiles};
use crate::commands::{AuditResult, CheckResult};
use crate::core::Word;
use crate::game::Board;
use colored::Colorize;

/// How many audit rows to print before eliding the rest
const AUDIT_TABLE_ROWS: usize = 15;

/// Print every row of the board as colored tiles
pub fn print_board(board: &Board) {
    println!();
    for (i, row) in board.rows().iter().enumerate() {
        println!(
            "  {} {}",
            (i + 1).to_string().bright_black(),
            row_tiles(row)
        );
    }
    println!();
}

/// Print the closing banner of an interactive game
pub fn print_game_over(board: &Board, secret: &Word) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if board.is_solved() {
        println!(
            "  {} in {} guess{}",
            "Solved".bright_green().bold(),
            board.len().to_string().bright_cyan().bold(),
            if board.len() == 1 { "" } else { "es" }
        );
        println!();
        for row in board.rows() {
            println!("    {}", row.pattern().to_emoji());
        }
    } else {
        println!(
            "  {} The word was {}",
            "Out of guesses.".red().bold(),
            secret.text().to_uppercase().bright_yellow().bold()
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print a replayed board with per-row candidate counts
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}",
        result.secret.to_uppercase().bright_yellow().bold()
    );
    if !result.secret_is_answer {
        println!("{}", "(not in the answer list)".bright_black());
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let status = match step.hard_mode.violation() {
            Some(violation) => format!("  hard mode: {violation}").red(),
            None => String::new().normal(),
        };
        println!(
            "\n{} {}  {} → {}{}",
            (i + 1).to_string().bright_black(),
            row_tiles(&step.row),
            step.candidates_before,
            step.candidates_after,
            status
        );
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guess{}",
                result.steps.len(),
                if result.steps.len() == 1 { "" } else { "es" }
            )
            .green()
            .bold()
        );
    } else {
        let count = result.candidates.len();
        println!("{count} candidate{} remaining", plural(count));
        if (1..=10).contains(&count) {
            for word in &result.candidates {
                println!("  • {}", word.to_uppercase());
            }
        }
    }

    let violations = result.violations().count();
    if violations > 0 {
        println!(
            "{}",
            format!("⚠ {violations} hard-mode violation{}", plural(violations)).yellow()
        );
    }
}

/// Print the score table for an audited guess
pub fn print_audit_result(result: &AuditResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS AUDIT:".bright_cyan().bold(),
        result.guess.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let count = result.scores.len();
    println!(
        "\n📊 Against {count} candidate{} after {} row{}:",
        plural(count),
        result.history,
        plural(result.history)
    );

    let Some((hardest, worst)) = &result.hardest else {
        println!("   No candidates remain.");
        return;
    };

    println!(
        "   Hardest secret: {} ({worst} left)",
        hardest.to_uppercase().bright_red().bold()
    );
    println!("   Average left:   {:.2}", result.average_remaining());
    println!("   Time taken:     {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Worst cases:".bright_cyan().bold());
    let ranked = result.ranked();
    for (word, remaining) in ranked.iter().take(AUDIT_TABLE_ROWS) {
        let bar = create_progress_bar(*remaining as f64, *worst as f64, 30);
        println!(
            "   {} {} {remaining:4}",
            word.to_uppercase(),
            bar.green()
        );
    }
    if ranked.len() > AUDIT_TABLE_ROWS {
        println!(
            "   {}",
            format!("… {} more", ranked.len() - AUDIT_TABLE_ROWS).bright_black()
        );
    }
}
