//! Per-letter feedback for a guess
//!
//! Feedback is stored base-3 in a single byte:
//! - 0 = Grey (letter not in the target, net of matched copies)
//! - 1 = Yellow (letter in the target, wrong position)
//! - 2 = Green (letter in the correct position)
//!
//! Each position contributes digit × 3^position, so the value range is 0-242.

use super::Word;
use super::word::WORD_LENGTH;
use std::fmt;

/// Colour of a single feedback tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Grey,
    Yellow,
    Green,
}

impl Tile {
    const fn digit(self) -> u8 {
        match self {
            Self::Grey => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Green,
            1 => Self::Yellow,
            _ => Self::Grey,
        }
    }

    /// Emoji square for this tile
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Grey => '⬜',
        }
    }
}

/// Feedback for one guess against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(u8);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create feedback from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Feedback value must be < 243");
        Self(value)
    }

    /// Build feedback from explicit tiles
    #[must_use]
    pub fn from_tiles(tiles: [Tile; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for tile in tiles {
            value += tile.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Raw base-3 value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// True when every tile is green
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == Self::SOLVED.0
    }

    /// Tile at `position` (0-4)
    #[must_use]
    pub const fn tile(self, position: usize) -> Tile {
        let mut val = self.0;
        let mut i = 0;
        while i < position {
            val /= 3;
            i += 1;
        }
        Tile::from_digit(val % 3)
    }

    /// All five tiles in position order
    #[must_use]
    pub fn tiles(self) -> [Tile; WORD_LENGTH] {
        std::array::from_fn(|position| self.tile(position))
    }

    /// Compute the feedback for `guess` when `target` is hidden
    ///
    /// Duplicate letters follow a consume-by-position-then-by-count policy:
    /// 1. Exact position matches are green and use up one copy of the target letter.
    /// 2. Remaining guess letters, left to right, are yellow while unused copies remain.
    /// 3. Everything else is grey.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Tile, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("stare").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.to_string(), "-YG-G");
    /// assert_eq!(feedback.tile(1), Tile::Yellow);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut tiles = [Tile::Grey; WORD_LENGTH];
        let mut available = target.letter_counts();

        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                tiles[i] = Tile::Green;
                available[usize::from(g - b'a')] -= 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            let remaining = &mut available[usize::from(g - b'a')];
            if tiles[i] == Tile::Grey && *remaining > 0 {
                tiles[i] = Tile::Yellow;
                *remaining -= 1;
            }
        }

        Self::from_tiles(tiles)
    }

    /// Parse feedback from a string like "GY-G_" or "🟩🟨⬜🟩⬜"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/'.'/⬜/⬛ for grey
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Feedback;
    ///
    /// let a = Feedback::parse("GY-GY").unwrap();
    /// let b = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.trim().chars().collect();
        let chars: [char; WORD_LENGTH] = chars.try_into().ok()?;

        let mut tiles = [Tile::Grey; WORD_LENGTH];
        for (tile, ch) in tiles.iter_mut().zip(chars) {
            *tile = match ch {
                'G' | 'g' | '🟩' => Tile::Green,
                'Y' | 'y' | '🟨' => Tile::Yellow,
                '-' | '_' | '.' | '⬜' | '⬛' => Tile::Grey,
                _ => return None,
            };
        }

        Some(Self::from_tiles(tiles))
    }

    /// Emoji rendering, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.tiles().iter().map(|tile| tile.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in self.tiles() {
            let ch = match tile {
                Tile::Green => 'G',
                Tile::Yellow => 'Y',
                Tile::Grey => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn solved_constant() {
        assert!(Feedback::SOLVED.is_solved());
        assert_eq!(Feedback::SOLVED.tiles(), [Tile::Green; 5]);
        assert_eq!(Feedback::from_tiles([Tile::Green; 5]), Feedback::SOLVED);
    }

    #[test]
    fn all_grey() {
        let fb = feedback("abcde", "fghij");
        assert_eq!(fb.value(), 0);
        assert_eq!(fb.tiles(), [Tile::Grey; 5]);
    }

    #[test]
    fn word_against_itself_is_solved() {
        for word in ["crane", "slate", "geese", "aaaaa"] {
            assert!(feedback(word, word).is_solved());
        }
    }

    #[test]
    fn crane_against_stare() {
        let fb = feedback("crane", "stare");
        assert_eq!(
            fb.tiles(),
            [Tile::Grey, Tile::Yellow, Tile::Green, Tile::Grey, Tile::Green]
        );
    }

    #[test]
    fn green_takes_priority_over_earlier_yellow() {
        // ROBOT vs FLOOR: second O is green, first O is yellow
        assert_eq!(feedback("robot", "floor").to_string(), "YY-G-");
    }

    #[test]
    fn excess_copies_are_grey() {
        // SPEED vs ABIDE: only one E in the target, the first E takes it
        assert_eq!(feedback("speed", "abide").to_string(), "--Y-Y");
        // EERIE vs STARE: single E is green at the end, both earlier Es grey
        assert_eq!(feedback("eerie", "stare").to_string(), "--Y-G");
    }

    #[test]
    fn yellows_consumed_left_to_right() {
        // SPEED vs ERASE: target has two Es, both guess Es are yellow
        assert_eq!(feedback("speed", "erase").to_string(), "Y-YY-");
    }

    #[test]
    fn parse_accepts_letters_and_emoji() {
        let p1 = Feedback::parse("GYG--").unwrap();
        let p2 = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Feedback::parse("gyg._").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Feedback::parse("GYGGYX").is_none());
        assert!(Feedback::parse("GYG").is_none());
        assert!(Feedback::parse("GXGGY").is_none());
        assert!(Feedback::parse("").is_none());
        assert!("nope!".parse::<Feedback>().is_err());
    }

    #[test]
    fn emoji_rendering() {
        let fb = Feedback::parse("GY-GY").unwrap();
        assert_eq!(fb.to_emoji(), "🟩🟨⬜🟩🟨");
    }
}
