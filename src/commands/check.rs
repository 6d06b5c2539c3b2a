//! Replay a list of guesses against a known secret
//!
//! Scores each guess, records how many answers survive it and whether it
//! kept to the hard-mode rule.

use super::parse_guess;
use crate::core::Row;
use crate::game::{Board, GameConfig, HardModeCheck};
use crate::solver::Engine;

/// One replayed guess
pub struct CheckStep {
    pub row: Row,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub hard_mode: HardModeCheck,
}

/// Result of replaying guesses
pub struct CheckResult {
    pub secret: String,
    /// False when the secret is only an extra guess and so never a candidate
    pub secret_is_answer: bool,
    pub steps: Vec<CheckStep>,
    pub solved: bool,
    /// Answers still consistent with the final board, in list order
    pub candidates: Vec<String>,
}

impl CheckResult {
    /// Steps that broke the hard-mode rule
    pub fn violations(&self) -> impl Iterator<Item = (usize, &CheckStep)> {
        self.steps
            .iter()
            .enumerate()
            .filter(|(_, step)| !step.hard_mode.is_valid())
    }
}

/// Score `guesses` against `secret` in order
///
/// Replay stops early once a guess solves the board.
///
/// # Errors
///
/// Returns an error if:
/// - The secret or a guess is not a word in the vocabulary
/// - More guesses are given than the board has rows
pub fn check_guesses(
    engine: &Engine<'_>,
    config: GameConfig,
    secret: &str,
    guesses: &[String],
) -> anyhow::Result<CheckResult> {
    let vocabulary = engine.vocabulary();
    let secret = parse_guess(vocabulary, secret)?;
    let secret_is_answer = vocabulary.is_answer(secret.text());
    if !secret_is_answer {
        log::warn!("{secret} is not in the answer list, so it never shows up as a candidate");
    }

    let mut board = Board::new(config);
    let mut steps = Vec::with_capacity(guesses.len());
    let mut candidates_before = engine.count_candidates(&board)?;

    for text in guesses {
        let guess = parse_guess(vocabulary, text)?;
        let row = board.play(&secret, guess)?.clone();
        let hard_mode = board.validate_hard_mode(board.len() - 1)?;
        let candidates_after = engine.count_candidates(&board)?;

        log::debug!("{row}: {candidates_before} -> {candidates_after}");
        steps.push(CheckStep {
            row,
            candidates_before,
            candidates_after,
            hard_mode,
        });
        candidates_before = candidates_after;

        if board.is_solved() {
            break;
        }
    }

    let candidates = engine
        .filter_candidates(&board)?
        .into_iter()
        .map(|w| w.text().to_string())
        .collect();

    Ok(CheckResult {
        secret: secret.text().to_string(),
        secret_is_answer,
        steps,
        solved: board.is_solved(),
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::ViolationKind;
    use crate::wordlists::Vocabulary;

    fn vocabulary() -> Vocabulary {
        let answers = ["crane", "trace", "train", "drain", "fjord", "dress", "grace"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        Vocabulary::new(5, answers, Vec::new()).unwrap()
    }

    fn guesses(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn replays_until_solved() {
        let vocab = vocabulary();
        let engine = Engine::new(&vocab);

        let result = check_guesses(
            &engine,
            GameConfig::default(),
            "crane",
            &guesses(&["trace", "crane", "drain"]),
        )
        .unwrap();

        assert!(result.solved);
        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.steps[0].row.pattern().to_string(), "-GGYG");
        assert_eq!(result.steps[0].candidates_before, 7);
        assert_eq!(result.candidates, ["crane"]);
    }

    #[test]
    fn candidate_counts_never_grow() {
        let vocab = vocabulary();
        let engine = Engine::new(&vocab);

        let result = check_guesses(
            &engine,
            GameConfig::default(),
            "grace",
            &guesses(&["fjord", "train", "crane"]),
        )
        .unwrap();

        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert!(!result.solved);
    }

    #[test]
    fn reports_hard_mode_violations() {
        let vocab = vocabulary();
        let engine = Engine::new(&vocab);

        let result = check_guesses(
            &engine,
            GameConfig::default(),
            "dress",
            &guesses(&["train", "fjord", "drain"]),
        )
        .unwrap();

        let violations: Vec<_> = result.violations().collect();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].0, 1);
        let violation = violations[0].1.hard_mode.violation().unwrap();
        assert_eq!(violation.kind, ViolationKind::MustBeHit);
        assert_eq!(violation.letter, 'r');
    }

    #[test]
    fn extra_word_secret_is_never_a_candidate() {
        let answers = ["crane", "trace"].iter().map(|w| Word::new(*w).unwrap()).collect();
        let vocab = Vocabulary::new(5, answers, vec![Word::new("fjord").unwrap()]).unwrap();
        let engine = Engine::new(&vocab);

        let result = check_guesses(
            &engine,
            GameConfig::default(),
            "fjord",
            &guesses(&["crane", "fjord"]),
        )
        .unwrap();

        assert!(!result.secret_is_answer);
        assert!(result.solved);
        assert!(result.candidates.is_empty());

        let result = check_guesses(&engine, GameConfig::default(), "crane", &[]).unwrap();
        assert!(result.secret_is_answer);
    }

    #[test]
    fn unknown_secret_is_error() {
        let vocab = vocabulary();
        let engine = Engine::new(&vocab);
        assert!(check_guesses(&engine, GameConfig::default(), "zzzzz", &[]).is_err());
    }

    #[test]
    fn too_many_guesses_is_error() {
        let vocab = vocabulary();
        let engine = Engine::new(&vocab);
        let result = check_guesses(
            &engine,
            GameConfig::new(5, 1),
            "crane",
            &guesses(&["train", "drain"]),
        );
        assert!(result.is_err());
    }
}
