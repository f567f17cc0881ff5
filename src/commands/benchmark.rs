//! Benchmark command
//!
//! Plays many simulated games in parallel and summarises the outcomes.

use crate::core::{Dictionary, Word};
use crate::game::{GameStatus, GameTrace, MAX_GUESSES, simulate};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Average guesses over solved games
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Games per terminal state
    pub outcomes: FxHashMap<GameStatus, usize>,
    /// Solved games per guess count
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Progress bar shared by the long-running commands
pub(crate) fn progress_bar(len: usize, what: &str) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));
    bar.set_style(style);
    bar.set_message(what.to_string());
    bar
}

/// Pick up to `count` distinct targets from `solutions` that the dictionary contains
#[must_use]
pub fn sample_targets<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    solutions: &[Word],
    count: usize,
    rng: &mut R,
) -> Vec<Word> {
    let pool: Vec<&Word> = solutions
        .iter()
        .filter(|word| dictionary.contains(word))
        .collect();
    if pool.len() < solutions.len() {
        log::info!(
            "{} of {} solutions are outside the working dictionary",
            solutions.len() - pool.len(),
            solutions.len()
        );
    }
    pool.choose_multiple(rng, count)
        .map(|&word| word.clone())
        .collect()
}

/// Play every target, optionally forcing the opening word
#[must_use]
pub fn run_benchmark(
    solver: &Solver<'_>,
    targets: &[Word],
    opening: Option<&Word>,
) -> BenchmarkResult {
    let start = Instant::now();
    let bar = progress_bar(targets.len(), "playing");

    let traces: Vec<GameTrace> = targets
        .par_iter()
        .map(|target| {
            let trace = simulate(solver, target, opening.cloned());
            bar.inc(1);
            trace
        })
        .collect();
    bar.finish_and_clear();

    let duration = start.elapsed();
    summarize(&traces, duration)
}

fn summarize(traces: &[GameTrace], duration: Duration) -> BenchmarkResult {
    let mut outcomes: FxHashMap<GameStatus, usize> = FxHashMap::default();
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    for trace in traces {
        *outcomes.entry(trace.status).or_insert(0) += 1;
        if trace.is_solved() {
            let guesses = trace.guesses();
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        }
    }

    let solved = outcomes.get(&GameStatus::Solved).copied().unwrap_or(0);
    let total_words = traces.len();

    BenchmarkResult {
        total_words,
        solved,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        outcomes,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

impl BenchmarkResult {
    /// Games that ended without finding the target
    #[must_use]
    pub fn failed(&self) -> usize {
        self.total_words - self.solved
    }

    /// Solved-game counts for 1..=`MAX_GUESSES` guesses
    #[must_use]
    pub fn distribution_rows(&self) -> Vec<(usize, usize)> {
        (1..=MAX_GUESSES)
            .map(|guesses| (guesses, self.distribution.get(&guesses).copied().unwrap_or(0)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Parameters;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{ALLOWED, SOLUTIONS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&SOLUTIONS[..100])).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let dict = small_dictionary();
        let solver = Solver::new(&dict, Parameters::default());
        let targets = words_from_slice(&SOLUTIONS[..10]);

        let result = run_benchmark(&solver, &targets, None);

        assert_eq!(result.total_words, 10);
        assert!(result.max_guesses <= MAX_GUESSES);
        if result.solved > 0 {
            assert!(result.min_guesses >= 1);
            assert!(result.average_guesses >= result.min_guesses as f64);
            assert!(result.average_guesses <= result.max_guesses as f64);
        }
    }

    #[test]
    fn counts_add_up() {
        let dict = small_dictionary();
        let solver = Solver::new(&dict, Parameters::default());
        let targets = words_from_slice(&SOLUTIONS[20..40]);

        let result = run_benchmark(&solver, &targets, None);

        assert_eq!(result.outcomes.values().sum::<usize>(), result.total_words);
        assert_eq!(result.distribution.values().sum::<usize>(), result.solved);
        assert_eq!(result.solved + result.failed(), result.total_words);
        assert_eq!(result.distribution_rows().len(), MAX_GUESSES);
    }

    #[test]
    fn forced_opening_word() {
        let dict = small_dictionary();
        let solver = Solver::new(&dict, Parameters::default());
        let targets = words_from_slice(&SOLUTIONS[..5]);
        let opening = Word::new(SOLUTIONS[0]).unwrap();

        let result = run_benchmark(&solver, &targets, Some(&opening));

        assert_eq!(result.total_words, 5);
        assert_eq!(result.distribution.get(&1).copied(), Some(1));
    }

    #[test]
    fn empty_target_list() {
        let dict = small_dictionary();
        let solver = Solver::new(&dict, Parameters::default());

        let result = run_benchmark(&solver, &[], None);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.solved, 0);
        assert_eq!(result.average_guesses, 0.0);
    }

    #[test]
    fn sampling_is_seeded_and_restricted_to_dictionary() {
        let dict = small_dictionary();
        let solutions = words_from_slice(SOLUTIONS);

        let a = sample_targets(&dict, &solutions, 20, &mut StdRng::seed_from_u64(1));
        let b = sample_targets(&dict, &solutions, 20, &mut StdRng::seed_from_u64(1));

        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
        assert!(a.iter().all(|word| dict.contains(word)));

        let everything = sample_targets(&dict, &solutions, 10_000, &mut StdRng::seed_from_u64(2));
        assert_eq!(everything.len(), dict.len());
    }

    #[test]
    fn sampling_from_allowed_only_words() {
        let dict = Dictionary::new(words_from_slice(&ALLOWED[..50])).unwrap();
        let solutions = words_from_slice(SOLUTIONS);

        let targets = sample_targets(&dict, &solutions, 50, &mut StdRng::seed_from_u64(3));
        assert!(targets.iter().all(|word| dict.contains(word)));
    }
}
