//! Candidate ranking
//!
//! A candidate's raw score is its summed similarity to every remaining candidate,
//! itself included. The final score is the raw score times the candidate's
//! degeneracy multiplier. The word most similar on average to the rest of the field
//! is expected to split it most evenly.

use super::degeneracy::degeneracy_multiplier;
use super::{Parameters, SimilarityMatrix};
use crate::core::Word;
use rayon::prelude::*;

/// A filtered word with its dictionary index and degeneracy multiplier
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub word: &'a Word,
    pub index: usize,
    pub multiplier: f64,
}

impl<'a> Candidate<'a> {
    #[must_use]
    pub fn new(index: usize, word: &'a Word, params: &Parameters) -> Self {
        Self {
            word,
            index,
            multiplier: degeneracy_multiplier(word, params),
        }
    }
}

/// A candidate with its scores for the current turn
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub word: &'a Word,
    pub index: usize,
    pub multiplier: f64,
    /// Summed similarity to every candidate
    pub raw_score: f64,
    /// `raw_score * multiplier`
    pub score: f64,
}

/// Score every candidate against the whole candidate set
///
/// Output order matches input order. Each candidate's sum is accumulated in
/// candidate order, so results do not depend on thread scheduling.
#[must_use]
pub fn rank<'a>(candidates: &[Candidate<'a>], matrix: &SimilarityMatrix) -> Vec<ScoredCandidate<'a>> {
    candidates
        .par_iter()
        .map(|candidate| {
            let raw_score: f64 = candidates
                .iter()
                .map(|other| matrix.score(candidate.index, other.index))
                .sum();

            ScoredCandidate {
                word: candidate.word,
                index: candidate.index,
                multiplier: candidate.multiplier,
                raw_score,
                score: raw_score * candidate.multiplier,
            }
        })
        .collect()
}

/// The first candidate with the strictly highest score
#[must_use]
pub fn best_of<'s, 'a>(scored: &'s [ScoredCandidate<'a>]) -> Option<&'s ScoredCandidate<'a>> {
    let mut best: Option<&ScoredCandidate<'a>> = None;
    for candidate in scored {
        if best.is_none_or(|current| candidate.score > current.score) {
            best = Some(candidate);
        }
    }
    best
}

/// Select the best next guess, or `None` when no candidates remain
///
/// Ties go to the earliest candidate.
///
/// # Examples
/// ```
/// use wordle_assist::core::{Dictionary, Word};
/// use wordle_assist::solver::{Candidate, Parameters, build_similarity, select_best};
///
/// let dictionary = Dictionary::new(
///     ["store", "stare", "scare"].map(|w| Word::new(w).unwrap()),
/// ).unwrap();
/// let params = Parameters::default();
/// let matrix = build_similarity(&dictionary, &params);
///
/// let candidates: Vec<Candidate> = dictionary
///     .iter()
///     .enumerate()
///     .map(|(i, w)| Candidate::new(i, w, &params))
///     .collect();
///
/// assert_eq!(select_best(&candidates, &matrix).unwrap().text(), "stare");
/// assert!(select_best(&[], &matrix).is_none());
/// ```
#[must_use]
pub fn select_best<'a>(candidates: &[Candidate<'a>], matrix: &SimilarityMatrix) -> Option<&'a Word> {
    best_of(&rank(candidates, matrix)).map(|best| best.word)
}

/// Candidates sorted by descending score, ties kept in candidate order
#[must_use]
pub fn sorted_by_score<'a>(mut scored: Vec<ScoredCandidate<'a>>) -> Vec<ScoredCandidate<'a>> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
