//! Main solver interface

use super::filter::filter_indices;
use super::ranking::{self, Candidate, ScoredCandidate};
use super::{Parameters, SimilarityMatrix, SimilarityTally};
use crate::core::{Dictionary, KnowledgeState, Word};

/// Solver context
///
/// Bundles the working dictionary, its similarity table and the scoring constants.
/// Construction order is fixed: load the dictionary, build the table, then play.
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    similarity: SimilarityMatrix,
    params: Parameters,
}

impl<'a> Solver<'a> {
    /// Build a solver, computing the similarity table for `dictionary`
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, params: Parameters) -> Self {
        let similarity = SimilarityMatrix::build(dictionary, &params);
        Self {
            dictionary,
            similarity,
            params,
        }
    }

    /// Build a solver by re-weighting an existing tally of the same dictionary
    ///
    /// # Panics
    /// Panics if the tally was built for a dictionary of a different size.
    #[must_use]
    pub fn from_tally(dictionary: &'a Dictionary, tally: &SimilarityTally, params: Parameters) -> Self {
        assert_eq!(
            tally.len(),
            dictionary.len(),
            "similarity tally does not match dictionary"
        );
        Self {
            dictionary,
            similarity: SimilarityMatrix::weighted(tally, &params),
            params,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn parameters(&self) -> &Parameters {
        &self.params
    }

    #[must_use]
    pub const fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Words consistent with `knowledge`, with their degeneracy multipliers
    #[must_use]
    pub fn candidates(&self, knowledge: &KnowledgeState) -> Vec<Candidate<'a>> {
        filter_indices(self.dictionary, knowledge)
            .into_iter()
            .map(|index| Candidate::new(index, &self.dictionary.words()[index], &self.params))
            .collect()
    }

    /// Pick the best guess from an already filtered candidate set
    #[must_use]
    pub fn select(&self, candidates: &[Candidate<'a>]) -> Option<&'a Word> {
        ranking::select_best(candidates, &self.similarity)
    }

    /// Best next guess for `knowledge`, or `None` if nothing fits
    #[must_use]
    pub fn best_guess(&self, knowledge: &KnowledgeState) -> Option<&'a Word> {
        let candidates = self.candidates(knowledge);
        let best = self.select(&candidates);
        log::debug!(
            "{} candidates for [{knowledge}], best: {}",
            candidates.len(),
            best.map_or("none", Word::text)
        );
        best
    }

    /// All candidates for `knowledge`, highest score first
    #[must_use]
    pub fn ranked(&self, knowledge: &KnowledgeState) -> Vec<ScoredCandidate<'a>> {
        let candidates = self.candidates(knowledge);
        ranking::sorted_by_score(ranking::rank(&candidates, &self.similarity))
    }
}
