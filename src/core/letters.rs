//! Letter bitsets
//!
//! Every set of letters in the engine is a `u32` where bit `i` stands for the
//! `i`-th letter of the alphabet. Only the low 26 bits are ever set.

use super::EngineError;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

const ALPHABET_MASK: u32 = (1 << ALPHABET_SIZE) - 1;

/// A set of letters encoded as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    /// Build a set from raw bits, discarding anything above bit 25
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & ALPHABET_MASK)
    }

    /// Singleton set for a letter index (0-25)
    #[inline]
    #[must_use]
    pub const fn single(index: u8) -> Self {
        debug_assert!((index as usize) < ALPHABET_SIZE, "letter index out of range");
        Self(1 << index)
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, index: u8) -> bool {
        self.0 & (1 << index) != 0
    }

    /// True when the two sets share at least one letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True when every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn contains_all(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters of `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterate the letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = char> {
        (0..ALPHABET_SIZE as u8)
            .filter(move |&i| self.contains(i))
            .map(letter_char)
    }
}

impl BitOr for LetterSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for LetterSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LetterSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&decode_set(*self))
    }
}

/// Map a letter to its index in the alphabet (0-25)
///
/// Upper-case letters map to the same index as their lower-case form.
///
/// # Errors
/// Returns `EngineError::InvalidLetter` for anything outside `a..=z`.
///
/// # Examples
/// ```
/// use wordle_constraints::core::letter_bit;
///
/// assert_eq!(letter_bit('a'), Ok(0));
/// assert_eq!(letter_bit('Z'), Ok(25));
/// assert!(letter_bit('é').is_err());
/// ```
pub fn letter_bit(c: char) -> Result<u8, EngineError> {
    let lower = c.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Ok(lower as u8 - b'a')
    } else {
        Err(EngineError::InvalidLetter(c))
    }
}

/// Inverse of [`letter_bit`]
#[inline]
#[must_use]
pub const fn letter_char(index: u8) -> char {
    (b'a' + index) as char
}

/// Set of distinct letters in `word`
///
/// # Errors
/// Returns `EngineError::InvalidLetter` on the first character outside the alphabet.
pub fn encode_set(word: &str) -> Result<LetterSet, EngineError> {
    word.chars()
        .try_fold(LetterSet::EMPTY, |set, c| Ok(set | LetterSet::single(letter_bit(c)?)))
}

/// One singleton set per position of `word`
///
/// # Errors
/// Returns `EngineError::InvalidLetter` on the first character outside the alphabet.
pub fn encode_positional(word: &str) -> Result<Vec<LetterSet>, EngineError> {
    word.chars()
        .map(|c| letter_bit(c).map(LetterSet::single))
        .collect()
}

/// Sorted letters of a set, for diagnostics
///
/// # Examples
/// ```
/// use wordle_constraints::core::{decode_set, encode_set};
///
/// let set = encode_set("speed").unwrap();
/// assert_eq!(decode_set(set), "deps");
/// ```
#[must_use]
pub fn decode_set(set: LetterSet) -> String {
    set.letters().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_bit_covers_alphabet() {
        for (i, c) in ('a'..='z').enumerate() {
            assert_eq!(letter_bit(c), Ok(i as u8));
        }
    }

    #[test]
    fn letter_bit_rejects_non_letters() {
        assert_eq!(letter_bit('1'), Err(EngineError::InvalidLetter('1')));
        assert_eq!(letter_bit(' '), Err(EngineError::InvalidLetter(' ')));
        assert_eq!(letter_bit('ß'), Err(EngineError::InvalidLetter('ß')));
    }

    #[test]
    fn encode_set_collapses_duplicates() {
        let set = encode_set("llama").unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set, encode_set("lam").unwrap());
    }

    #[test]
    fn encode_set_reports_bad_letter() {
        assert_eq!(encode_set("cr4ne"), Err(EngineError::InvalidLetter('4')));
    }

    #[test]
    fn encode_positional_keeps_order() {
        let positions = encode_positional("robot").unwrap();
        assert_eq!(positions.len(), 5);
        assert_eq!(positions[1], positions[3]);
        assert_eq!(positions[0], LetterSet::single(17));
    }

    #[test]
    fn decode_set_round_trip_is_sorted_and_distinct() {
        assert_eq!(decode_set(encode_set("crane").unwrap()), "acenr");
        assert_eq!(decode_set(encode_set("geese").unwrap()), "egs");
        assert_eq!(decode_set(LetterSet::EMPTY), "");
    }

    #[test]
    fn from_bits_masks_high_bits() {
        let set = LetterSet::from_bits(u32::MAX);
        assert_eq!(set.len(), 26);
        assert_eq!(set.bits(), ALPHABET_MASK);
    }

    #[test]
    fn set_operations() {
        let a = encode_set("abc").unwrap();
        let b = encode_set("bcd").unwrap();

        assert_eq!(decode_set(a | b), "abcd");
        assert_eq!(decode_set(a & b), "bc");
        assert_eq!(decode_set(a.difference(b)), "a");
        assert!(a.intersects(b));
        assert!((a | b).contains_all(a));
        assert!(!a.contains_all(b));
    }
}
