//! Candidate filtering and guess ranking
//!
//! Filter the dictionary against a knowledge state, weight each survivor by its
//! summed similarity to the rest, discount repeated letters, pick the top word.

mod degeneracy;
mod engine;
mod filter;
mod params;
mod ranking;
mod similarity;

pub use degeneracy::{degeneracy, degeneracy_multiplier, multiplier_for};
pub use engine::Solver;
pub use filter::{filter, filter_indices, is_consistent};
pub use params::{ParameterError, Parameters};
pub use ranking::{Candidate, ScoredCandidate, best_of, rank, select_best, sorted_by_score};
pub use similarity::{SimilarityMatrix, SimilarityTally, build_similarity};
