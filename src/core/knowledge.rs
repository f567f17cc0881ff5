//! Accumulated knowledge about the hidden word
//!
//! The knowledge state is always rebuilt from the complete guess history, never
//! patched turn by turn. With at most eight guesses of five letters this costs nothing.

use super::feedback::{Feedback, Tile};
use super::word::WORD_LENGTH;
use super::{LetterSet, Word};
use std::fmt;

/// Everything known about the target after some guesses
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KnowledgeState {
    /// Confirmed letter per position
    pub greens: [Option<u8>; WORD_LENGTH],
    /// Letters known to be present but not at that position
    pub yellows: [LetterSet; WORD_LENGTH],
    /// Letters absent from the target
    pub greys: LetterSet,
    /// Letters occurring at least twice
    pub repeated: LetterSet,
    /// Letters occurring exactly once
    pub not_repeated: LetterSet,
}

/// Error type for hand-entered knowledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeError {
    Greens(String),
    Yellows(String),
}

impl fmt::Display for KnowledgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Greens(input) => write!(
                f,
                "Greens must be 5 characters of letters or '_' (e.g. \"__a_e\"), got \"{input}\""
            ),
            Self::Yellows(input) => write!(
                f,
                "Yellows must be 5 comma-separated letter groups (e.g. \",r,,,\"), got \"{input}\""
            ),
        }
    }
}

impl std::error::Error for KnowledgeError {}

impl KnowledgeState {
    /// Derive knowledge from observed feedback
    ///
    /// Tiles are read as follows:
    /// - Green fixes the letter at that position.
    /// - Yellow records the letter as present but not at that position.
    /// - Grey, when the same letter scored green or yellow elsewhere in the same guess,
    ///   is an excess copy: the letter is not at that position and the target holds
    ///   exactly as many copies as were matched. It is never added to `greys`.
    /// - Any other grey letter is absent.
    ///
    /// A letter matched twice in one guess is `repeated`; a letter pinned to exactly
    /// one copy is `not_repeated`.
    #[must_use]
    pub fn from_history(history: &[(Word, Feedback)]) -> Self {
        Self::from_observations(history.iter().map(|(guess, feedback)| (guess, *feedback)))
    }

    fn from_observations<'a>(observations: impl IntoIterator<Item = (&'a Word, Feedback)>) -> Self {
        let mut state = Self::default();
        let mut min_count = [0u8; 26];
        let mut exact_count: [Option<u8>; 26] = [None; 26];

        for (guess, feedback) in observations {
            let tiles = feedback.tiles();

            let mut matched = [0u8; 26];
            for (&letter, tile) in guess.chars().iter().zip(tiles) {
                if tile != Tile::Grey {
                    matched[usize::from(letter - b'a')] += 1;
                }
            }

            for (position, (&letter, tile)) in guess.chars().iter().zip(tiles).enumerate() {
                let idx = usize::from(letter - b'a');
                match tile {
                    Tile::Green => state.greens[position] = Some(letter),
                    Tile::Yellow => state.yellows[position].insert(letter),
                    Tile::Grey if matched[idx] > 0 => {
                        state.yellows[position].insert(letter);
                        exact_count[idx] = Some(matched[idx]);
                    }
                    Tile::Grey => state.greys.insert(letter),
                }
            }

            for (min, &seen) in min_count.iter_mut().zip(&matched) {
                *min = (*min).max(seen);
            }
        }

        for (letter, (&min, &exact)) in (b'a'..=b'z').zip(min_count.iter().zip(&exact_count)) {
            if min >= 2 {
                state.repeated.insert(letter);
            }
            if exact == Some(1) {
                state.not_repeated.insert(letter);
            }
        }

        state
    }

    /// Build a knowledge state from hand-entered strings
    ///
    /// - `greens`: five characters, a letter or one of `_`, `.`, `-`, `?` for unknown
    /// - `yellows`: five comma-separated groups of letters (empty groups allowed)
    /// - the remaining sets: plain strings of letters
    ///
    /// # Errors
    /// Returns `KnowledgeError` if greens or yellows are malformed.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::KnowledgeState;
    ///
    /// let state = KnowledgeState::from_parts("__a_e", ",r,,,", "cn", "", "").unwrap();
    /// assert_eq!(state.greens[2], Some(b'a'));
    /// assert!(state.yellows[1].contains(b'r'));
    /// ```
    pub fn from_parts(
        greens: &str,
        yellows: &str,
        greys: &str,
        repeated: &str,
        not_repeated: &str,
    ) -> Result<Self, KnowledgeError> {
        let mut state = Self::default();

        let green_chars: Vec<char> = greens.trim().to_lowercase().chars().collect();
        if !greens.trim().is_empty() {
            if green_chars.len() != WORD_LENGTH {
                return Err(KnowledgeError::Greens(greens.to_string()));
            }
            for (slot, ch) in state.greens.iter_mut().zip(green_chars) {
                *slot = match ch {
                    '_' | '.' | '-' | '?' => None,
                    c if c.is_ascii_lowercase() => Some(c as u8),
                    _ => return Err(KnowledgeError::Greens(greens.to_string())),
                };
            }
        }

        if !yellows.trim().is_empty() {
            let groups: Vec<&str> = yellows.split(',').collect();
            if groups.len() != WORD_LENGTH {
                return Err(KnowledgeError::Yellows(yellows.to_string()));
            }
            for (slot, group) in state.yellows.iter_mut().zip(groups) {
                let group = group.trim().to_lowercase();
                if !group.chars().all(|c| c.is_ascii_lowercase()) {
                    return Err(KnowledgeError::Yellows(yellows.to_string()));
                }
                *slot = LetterSet::from_letters(&group);
            }
        }

        state.greys = LetterSet::from_letters(greys);
        state.repeated = LetterSet::from_letters(repeated);
        state.not_repeated = LetterSet::from_letters(not_repeated);

        Ok(state)
    }

    /// Letters marked yellow at any position
    #[must_use]
    pub fn yellow_letters(&self) -> LetterSet {
        self.yellows
            .iter()
            .fold(LetterSet::EMPTY, |acc, &slot| acc.union(slot))
    }

    /// Letters known to be in the target (green or yellow anywhere)
    #[must_use]
    pub fn required_letters(&self) -> LetterSet {
        let greens: LetterSet = self.greens.iter().flatten().copied().collect();
        greens.union(self.yellow_letters())
    }

    /// True when nothing is known yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Derive the knowledge state for `guesses` played against `target`
///
/// # Examples
/// ```
/// use wordle_assist::core::{derive_knowledge, LetterSet, Word};
///
/// let target = Word::new("stare").unwrap();
/// let guesses = [Word::new("crane").unwrap()];
/// let state = derive_knowledge(&guesses, &target);
///
/// assert_eq!(state.greens, [None, None, Some(b'a'), None, Some(b'e')]);
/// assert_eq!(state.greys, LetterSet::from_letters("cn"));
/// ```
#[must_use]
pub fn derive_knowledge<'a>(
    guesses: impl IntoIterator<Item = &'a Word>,
    target: &Word,
) -> KnowledgeState {
    KnowledgeState::from_observations(
        guesses
            .into_iter()
            .map(|guess| (guess, Feedback::calculate(guess, target))),
    )
}

impl fmt::Display for KnowledgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let greens: String = self
            .greens
            .iter()
            .map(|slot| slot.map_or('_', char::from))
            .collect();
        let yellows: Vec<String> = self.yellows.iter().map(ToString::to_string).collect();

        write!(
            f,
            "greens={greens} yellows={} greys={} repeated={} not_repeated={}",
            yellows.join(","),
            self.greys,
            self.repeated,
            self.not_repeated
        )
    }
}
