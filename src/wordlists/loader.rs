//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of `word_length` letters from a file, one word per line
///
/// Blank lines are ignored; entries that are not valid words of the right
/// length are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_constraints::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_lines(&content, word_length);
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slices to words of `word_length` letters
///
/// # Examples
/// ```
/// use wordle_constraints::wordlists::loader::words_from_slice;
/// use wordle_constraints::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS, 5);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| parse_entry(s, word_length))
        .collect()
}

fn parse_lines(content: &str, word_length: usize) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| parse_entry(line, word_length))
        .collect()
}

fn parse_entry(entry: &str, word_length: usize) -> Option<Word> {
    match Word::with_length(entry, word_length) {
        Ok(word) => Some(word),
        Err(e) => {
            log::warn!("skipping word list entry {entry:?}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "sl4te", "slate"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_other_length() {
        let input = &["crane", "quartz", "planet"];
        let words = words_from_slice(input, 6);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn parse_lines_ignores_blanks_and_whitespace() {
        let words = parse_lines("  crane \n\n slate\r\n", 5);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn load_missing_file_is_error() {
        assert!(load_from_file("definitely/not/here.txt", 5).is_err());
    }

    #[test]
    fn load_from_data_directory() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/extra.txt");
        let words = load_from_file(path, 5).unwrap();
        assert_eq!(words.len(), crate::wordlists::EXTRA_COUNT);
    }
}
