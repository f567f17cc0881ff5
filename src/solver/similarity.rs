//! Pairwise word similarity
//!
//! For every unordered pair of dictionary words two counts are recorded:
//! - shared letters: distinct letters the words have in common, positions ignored
//! - shared positions: positions at which both words hold the same letter
//!
//! The counts are independent of the scoring constants, so they are tallied once
//! per dictionary ([`SimilarityTally`]) and then weighted into a
//! [`SimilarityMatrix`] for each parameter set. Only the upper triangle is stored,
//! packed row by row; lookups accept either index order.

use super::Parameters;
use crate::core::{Dictionary, WORD_LENGTH, Word};
use rayon::prelude::*;

/// Offset of cell `(i, j)`, `i < j`, in a packed upper triangle of size `n`
#[inline]
const fn triangle_index(n: usize, i: usize, j: usize) -> usize {
    debug_assert!(i < j && j < n);
    i * n - i * (i + 1) / 2 + (j - i - 1)
}

/// Order a pair so the smaller index comes first
#[inline]
const fn ordered(i: usize, j: usize) -> (usize, usize) {
    if i < j { (i, j) } else { (j, i) }
}

/// Shared-letter and shared-position counts, packed as `shared << 4 | positional`
#[inline]
fn tally_pair(a: &Word, b: &Word) -> u8 {
    let shared = a.letters().intersection(b.letters()).len() as u8;
    let positional = a
        .chars()
        .iter()
        .zip(b.chars())
        .filter(|(x, y)| x == y)
        .count() as u8;
    (shared << 4) | positional
}

/// Raw similarity counts for every pair of dictionary words
pub struct SimilarityTally {
    len: usize,
    cells: Vec<u8>,
    distinct_letters: Vec<u8>,
}

impl SimilarityTally {
    /// Count shared letters and positions for every pair
    ///
    /// O(n²) time and space. Rows are independent and filled in parallel;
    /// each row writes a disjoint slice of the table.
    #[must_use]
    pub fn build(dictionary: &Dictionary) -> Self {
        let words = dictionary.words();
        let len = words.len();

        let cells: Vec<u8> = (0..len)
            .into_par_iter()
            .flat_map_iter(|i| {
                let a = &words[i];
                words[i + 1..].iter().map(move |b| tally_pair(a, b))
            })
            .collect();

        let distinct_letters = words.iter().map(|w| w.letters().len() as u8).collect();

        log::info!(
            "tallied similarity for {len} words ({} pairs)",
            cells.len()
        );

        Self {
            len,
            cells,
            distinct_letters,
        }
    }

    /// Number of words covered
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distinct letters shared by words `i` and `j`
    ///
    /// For `i == j` this is the word's own distinct-letter count.
    #[must_use]
    pub fn shared_letters(&self, i: usize, j: usize) -> u8 {
        if i == j {
            return self.distinct_letters[i];
        }
        let (i, j) = ordered(i, j);
        self.cells[triangle_index(self.len, i, j)] >> 4
    }

    /// Positions at which words `i` and `j` hold the same letter
    #[must_use]
    pub fn shared_positions(&self, i: usize, j: usize) -> u8 {
        if i == j {
            return WORD_LENGTH as u8;
        }
        let (i, j) = ordered(i, j);
        self.cells[triangle_index(self.len, i, j)] & 0x0f
    }
}

/// Weighted similarity scores over dictionary indices
///
/// `score = shared_letters * common_letter_weight + shared_positions * common_letter_same_index_weight`
pub struct SimilarityMatrix {
    len: usize,
    cells: Vec<f32>,
    diagonal: Vec<f32>,
}

impl SimilarityMatrix {
    /// Apply the two similarity weights to a tally
    #[must_use]
    pub fn weighted(tally: &SimilarityTally, params: &Parameters) -> Self {
        let common = params.common_letter_weight;
        let same_index = params.common_letter_same_index_weight;
        let weigh = |shared: u8, positional: u8| {
            (f64::from(shared) * common + f64::from(positional) * same_index) as f32
        };

        // Every packed cell holds two counts in 0..=5
        let mut lookup = [0f32; 256];
        for (packed, score) in lookup.iter_mut().enumerate() {
            *score = weigh((packed >> 4) as u8, (packed & 0x0f) as u8);
        }

        let cells = tally
            .cells
            .par_iter()
            .map(|&packed| lookup[usize::from(packed)])
            .collect();

        let diagonal = tally
            .distinct_letters
            .iter()
            .map(|&distinct| weigh(distinct, WORD_LENGTH as u8))
            .collect();

        Self {
            len: tally.len,
            cells,
            diagonal,
        }
    }

    /// Tally and weigh in one step
    #[must_use]
    pub fn build(dictionary: &Dictionary, params: &Parameters) -> Self {
        Self::weighted(&SimilarityTally::build(dictionary), params)
    }

    /// Number of words covered
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Similarity of words `i` and `j`, in either order
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    #[must_use]
    pub fn score(&self, i: usize, j: usize) -> f64 {
        if i == j {
            return f64::from(self.diagonal[i]);
        }
        let (i, j) = ordered(i, j);
        assert!(j < self.len, "similarity index {j} out of range");
        f64::from(self.cells[triangle_index(self.len, i, j)])
    }
}

/// Build the weighted similarity table for a dictionary
///
/// # Examples
/// ```
/// use wordle_assist::core::{Dictionary, Word};
/// use wordle_assist::solver::{Parameters, build_similarity};
///
/// let dictionary = Dictionary::new(["crane", "stare"].map(|w| Word::new(w).unwrap())).unwrap();
/// let params = Parameters {
///     common_letter_weight: 1.0,
///     common_letter_same_index_weight: 3.0,
///     ..Parameters::default()
/// };
/// let matrix = build_similarity(&dictionary, &params);
///
/// // shared {r, a, e} = 3, same position {a, e} = 2
/// assert_eq!(matrix.score(0, 1), 3.0 + 2.0 * 3.0);
/// assert_eq!(matrix.score(1, 0), matrix.score(0, 1));
/// ```
#[must_use]
pub fn build_similarity(dictionary: &Dictionary, params: &Parameters) -> SimilarityMatrix {
    SimilarityMatrix::build(dictionary, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(list: &[&str]) -> Dictionary {
        Dictionary::new(list.iter().map(|w| Word::new(*w).unwrap())).unwrap()
    }

    fn unit_params() -> Parameters {
        Parameters {
            common_letter_weight: 1.0,
            common_letter_same_index_weight: 10.0,
            ..Parameters::default()
        }
    }

    #[test]
    fn triangle_layout_is_dense() {
        let n = 6;
        let mut expected = 0;
        for i in 0..n {
            for j in i + 1..n {
                assert_eq!(triangle_index(n, i, j), expected);
                expected += 1;
            }
        }
        assert_eq!(expected, n * (n - 1) / 2);
    }

    #[test]
    fn tally_counts_letters_and_positions() {
        let dict = dictionary(&["crane", "stare", "speed", "geese"]);
        let tally = SimilarityTally::build(&dict);

        // crane/stare: letters {r,a,e}, positions {2,4}
        assert_eq!(tally.shared_letters(0, 1), 3);
        assert_eq!(tally.shared_positions(0, 1), 2);

        // speed/geese: distinct letters shared {s,e}; positions: e at 2
        assert_eq!(tally.shared_letters(2, 3), 2);
        assert_eq!(tally.shared_positions(2, 3), 1);

        // repeated letters count once
        assert_eq!(tally.shared_letters(3, 3), 3);
        assert_eq!(tally.shared_positions(3, 3), 5);
    }

    #[test]
    fn score_combines_weights() {
        let dict = dictionary(&["crane", "stare", "fghij"]);
        let matrix = build_similarity(&dict, &unit_params());

        assert_eq!(matrix.score(0, 1), 3.0 + 20.0);
        assert_eq!(matrix.score(0, 2), 0.0);
        assert_eq!(matrix.score(1, 1), 5.0 + 50.0);
    }

    #[test]
    fn score_is_symmetric() {
        let dict = dictionary(&["crane", "slate", "store", "stare", "scare", "geese"]);
        let matrix = build_similarity(&dict, &Parameters::default());

        for i in 0..dict.len() {
            for j in 0..dict.len() {
                assert_eq!(matrix.score(i, j), matrix.score(j, i));
            }
        }
    }

    #[test]
    fn reweighting_a_tally_matches_direct_build() {
        let dict = dictionary(&["crane", "slate", "store", "stare", "scare"]);
        let tally = SimilarityTally::build(&dict);
        let params = unit_params();

        let reweighted = SimilarityMatrix::weighted(&tally, &params);
        let direct = SimilarityMatrix::build(&dict, &params);

        for i in 0..dict.len() {
            for j in i..dict.len() {
                assert_eq!(reweighted.score(i, j), direct.score(i, j));
            }
        }
    }

    #[test]
    fn single_word_dictionary() {
        let dict = dictionary(&["crane"]);
        let matrix = build_similarity(&dict, &unit_params());
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix.score(0, 0), 55.0);
    }
}
