//! Word solving command
//!
//! Plays one simulated game against a chosen target.

use crate::core::Word;
use crate::game::{GameTrace, simulate};
use crate::solver::Solver;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub first_word: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            first_word: None,
        }
    }
}

/// Solve a specific word with the given solver
///
/// # Errors
///
/// Returns an error if the target or first word is not a valid word, or if
/// the target is not in the solver's dictionary.
pub fn solve_word(config: &SolveConfig, solver: &Solver<'_>) -> Result<GameTrace, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;
    if !solver.dictionary().contains(&target) {
        return Err(format!("'{target}' is not in the word list"));
    }

    let opening = config
        .first_word
        .as_deref()
        .map(Word::new)
        .transpose()
        .map_err(|e| format!("Invalid first word: {e}"))?;

    Ok(simulate(solver, &target, opening))
}
