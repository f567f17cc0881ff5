//! Random search over scoring constants
//!
//! The similarity tally is built once; every trial only re-weights it and
//! plays the sampled targets in parallel.

use super::benchmark::progress_bar;
use crate::core::{Dictionary, Word};
use crate::game::simulate;
use crate::solver::{Parameters, SimilarityTally, Solver};
use rand::Rng;
use rayon::prelude::*;
use std::ops::RangeInclusive;

const SAME_INDEX_WEIGHT: RangeInclusive<f64> = 2.5..=3.5;
const PENALTY_1: RangeInclusive<f64> = 0.7..=1.0;
const PENALTY_2: RangeInclusive<f64> = 0.6..=1.0;
const PENALTY_3: RangeInclusive<f64> = 0.4..=1.0;

/// Configuration for a tuning run
pub struct TuneConfig {
    pub trials: usize,
}

/// One evaluated parameter set
#[derive(Debug, Clone, Copy)]
pub struct Trial {
    pub params: Parameters,
    /// Mean game cost over the sampled targets
    pub cost: f64,
}

/// Every trial in the order run, and the cheapest one
pub struct TuneResult {
    pub trials: Vec<Trial>,
    pub best: Trial,
}

/// Draw a parameter set from the search space
#[must_use]
pub fn random_parameters<R: Rng>(rng: &mut R) -> Parameters {
    Parameters {
        common_letter_weight: 1.0,
        common_letter_same_index_weight: rng.random_range(SAME_INDEX_WEIGHT),
        degeneracy_penalty_1: rng.random_range(PENALTY_1),
        degeneracy_penalty_2: rng.random_range(PENALTY_2),
        degeneracy_penalty_3: rng.random_range(PENALTY_3),
    }
}

/// Mean cost of playing every target with `solver`
///
/// A game costs its guess count if solved, otherwise one more than the cap.
#[must_use]
pub fn evaluate(solver: &Solver<'_>, targets: &[Word]) -> f64 {
    if targets.is_empty() {
        return 0.0;
    }
    let total: usize = targets
        .par_iter()
        .map(|target| simulate(solver, target, None).cost())
        .sum();
    total as f64 / targets.len() as f64
}

/// Run the search
///
/// The first trial always uses `Parameters::default()`, so the result is never
/// worse than the defaults on the same sample. Ties keep the earlier trial.
///
/// # Errors
///
/// Returns an error if `trials` is zero.
pub fn run_tune<R: Rng>(
    dictionary: &Dictionary,
    targets: &[Word],
    config: &TuneConfig,
    rng: &mut R,
) -> Result<TuneResult, String> {
    if config.trials == 0 {
        return Err("At least one trial is required".to_string());
    }

    let tally = SimilarityTally::build(dictionary);
    let bar = progress_bar(config.trials, "tuning");

    let mut trials = Vec::with_capacity(config.trials);
    let mut best: Option<Trial> = None;

    for index in 0..config.trials {
        let params = if index == 0 {
            Parameters::default()
        } else {
            random_parameters(rng)
        };
        let solver = Solver::from_tally(dictionary, &tally, params);
        let trial = Trial {
            params,
            cost: evaluate(&solver, targets),
        };
        log::debug!("trial {}: cost {:.4} with {params}", index + 1, trial.cost);

        if best.is_none_or(|current| trial.cost < current.cost) {
            best = Some(trial);
            bar.set_message(format!("best {:.4}", trial.cost));
        }
        trials.push(trial);
        bar.inc(1);
    }
    bar.finish_and_clear();

    let best = best.ok_or_else(|| "No trials were run".to_string())?;
    log::info!("best cost {:.4} after {} trials", best.cost, trials.len());
    Ok(TuneResult { trials, best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_GUESSES;
    use crate::wordlists::SOLUTIONS;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_parameters_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let params = random_parameters(&mut rng);
            assert_eq!(params.common_letter_weight, 1.0);
            assert!(SAME_INDEX_WEIGHT.contains(&params.common_letter_same_index_weight));
            assert!(PENALTY_1.contains(&params.degeneracy_penalty_1));
            assert!(PENALTY_2.contains(&params.degeneracy_penalty_2));
            assert!(PENALTY_3.contains(&params.degeneracy_penalty_3));
            assert!(params.validate().is_ok());
        }
    }

    #[test]
    fn first_trial_uses_defaults_and_best_is_minimal() {
        let dict = Dictionary::new(words_from_slice(&SOLUTIONS[..60])).unwrap();
        let targets = words_from_slice(&SOLUTIONS[..12]);
        let mut rng = StdRng::seed_from_u64(5);

        let result = run_tune(&dict, &targets, &TuneConfig { trials: 4 }, &mut rng).unwrap();

        assert_eq!(result.trials.len(), 4);
        assert_eq!(result.trials[0].params, Parameters::default());
        assert!(result.trials.iter().all(|t| result.best.cost <= t.cost));
        assert!(result.best.cost >= 1.0);
        assert!(result.best.cost <= (MAX_GUESSES + 1) as f64);
    }

    #[test]
    fn zero_trials_is_an_error() {
        let dict = Dictionary::new(words_from_slice(&SOLUTIONS[..10])).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(run_tune(&dict, &[], &TuneConfig { trials: 0 }, &mut rng).is_err());
    }

    #[test]
    fn evaluation_of_trivial_games() {
        let dict = Dictionary::new(words_from_slice(&["crane"])).unwrap();
        let solver = Solver::new(&dict, Parameters::default());
        let targets = words_from_slice(&["crane"]);

        assert_eq!(evaluate(&solver, &targets), 1.0);
        assert_eq!(evaluate(&solver, &[]), 0.0);
    }
}
