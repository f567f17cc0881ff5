//! Repeated-letter penalty
//!
//! Words with repeated letters probe fewer distinct letters, so their score is
//! multiplied down. Degeneracy counts ordered pairs of positions holding the same
//! letter: a letter occurring `k` times contributes `k * (k - 1)`.
//!
//! | letters       | degeneracy | multiplier  |
//! |---------------|-----------:|-------------|
//! | all distinct  | 0          | 1.0         |
//! | one pair      | 2          | penalty 1   |
//! | two pairs     | 4          | penalty 2   |
//! | triple or more| 6, 8, 12, 20 | penalty 3 |

use super::Parameters;
use crate::core::Word;

/// Ordered pairs of positions sharing a letter
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::degeneracy;
///
/// assert_eq!(degeneracy(&Word::new("crane").unwrap()), 0);
/// assert_eq!(degeneracy(&Word::new("speed").unwrap()), 2);
/// assert_eq!(degeneracy(&Word::new("geese").unwrap()), 6);
/// ```
#[must_use]
pub fn degeneracy(word: &Word) -> u32 {
    word.letter_counts()
        .iter()
        .map(|&k| u32::from(k) * u32::from(k).saturating_sub(1))
        .sum()
}

/// Score multiplier for `word`
#[must_use]
pub fn degeneracy_multiplier(word: &Word, params: &Parameters) -> f64 {
    multiplier_for(degeneracy(word), params)
}

/// Map a degeneracy count to its multiplier
///
/// Total over every count: odd values, which five letters cannot produce, fall
/// into the tier of the next even value.
#[must_use]
pub const fn multiplier_for(degeneracy: u32, params: &Parameters) -> f64 {
    match degeneracy {
        0 => 1.0,
        1..=2 => params.degeneracy_penalty_1,
        3..=4 => params.degeneracy_penalty_2,
        _ => params.degeneracy_penalty_3,
    }
}
