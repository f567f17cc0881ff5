//! Compact sets of lowercase ASCII letters
//!
//! A `LetterSet` is a 26-bit mask. It backs the grey, yellow and repeat
//! constraints of a knowledge state as well as the distinct-letter set of a word.

use std::fmt;

/// A set of letters `a`..=`z`, stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
        1 << (letter - b'a')
    }

    /// Build a set from a string, ignoring anything that isn't a lowercase letter
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::LetterSet;
    ///
    /// let set = LetterSet::from_letters("cn");
    /// assert!(set.contains(b'c'));
    /// assert_eq!(set.len(), 2);
    /// ```
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        letters
            .bytes()
            .map(|b| b.to_ascii_lowercase())
            .filter(u8::is_ascii_lowercase)
            .collect()
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    #[inline]
    pub fn remove(&mut self, letter: u8) {
        self.0 &= !Self::bit(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
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

    /// Letters in `self` but not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());

        set.insert(b'a');
        set.insert(b'z');
        set.insert(b'a');

        assert!(set.contains(b'a'));
        assert!(set.contains(b'z'));
        assert!(!set.contains(b'm'));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn remove_letter() {
        let mut set = LetterSet::from_letters("abc");
        set.remove(b'b');
        assert_eq!(set, LetterSet::from_letters("ac"));
    }

    #[test]
    fn non_letters_are_never_members() {
        let set = LetterSet::from_letters("ab1_C");
        assert_eq!(set.len(), 3);
        assert!(set.contains(b'c'));
        assert!(!set.contains(b'1'));
        assert!(!set.contains(b'A'));
    }

    #[test]
    fn set_algebra() {
        let a = LetterSet::from_letters("crane");
        let b = LetterSet::from_letters("stare");

        assert_eq!(a.intersection(b), LetterSet::from_letters("rae"));
        assert_eq!(a.union(b).len(), 7);
        assert_eq!(a.difference(b), LetterSet::from_letters("cn"));
        assert!(LetterSet::from_letters("ra").is_subset(a));
        assert!(!b.is_subset(a));
        assert!(LetterSet::EMPTY.is_subset(a));
    }

    #[test]
    fn display_is_alphabetical() {
        let set = LetterSet::from_letters("zca");
        assert_eq!(set.to_string(), "acz");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![b'a', b'c', b'z']);
    }
}
