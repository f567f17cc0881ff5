//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod guide;
pub mod play;
pub mod solve;
pub mod tune;

pub use assist::{AssistResult, Suggestion, assist};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use guide::{GuideInput, parse_guide_input, run_guide};
pub use play::run_play;
pub use solve::{SolveConfig, solve_word};
pub use tune::{Trial, TuneConfig, TuneResult, evaluate, random_parameters, run_tune};

use std::io::{self, Write};

/// Prompt on stdout and read one trimmed, lowercased line
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_lowercase()))
}
