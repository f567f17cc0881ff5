//! Wordle assistant - CLI
//!
//! Suggests guesses, plays simulated games and tunes the scoring constants.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordle_assist::{
    commands::{
        SolveConfig, TuneConfig, assist, run_benchmark, run_guide, run_play, run_tune,
        sample_targets, solve_word,
    },
    core::{Dictionary, KnowledgeState, Word},
    game::Session,
    output::{print_assist, print_benchmark_result, print_trace, print_tune_result},
    solver::{Parameters, Solver},
    wordlists::{
        ALLOWED, SOLUTIONS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant ranking candidates by pairwise letter similarity",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess list: 'all' (default), 'solutions', or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Path to a file of possible solutions (default: embedded list)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Only use the first N words of the guess list
    #[arg(short, long, global = true)]
    limit: Option<usize>,

    /// JSON file with the five scoring constants
    #[arg(short, long, global = true)]
    params: Option<PathBuf>,

    /// Override the shared-letter weight
    #[arg(long, global = true)]
    common_letter_weight: Option<f64>,

    /// Override the same-position weight
    #[arg(long, global = true)]
    same_index_weight: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant for a game played elsewhere (default)
    Guide,

    /// Best next guess for a set of known constraints
    Assist {
        /// Known letters by position, '_' for unknown (e.g. "__a_e")
        #[arg(short, long, default_value = "")]
        greens: String,

        /// Five comma-separated groups of misplaced letters (e.g. ",r,,,")
        #[arg(short, long, default_value = "")]
        yellows: String,

        /// Letters not in the word
        #[arg(short = 'x', long, default_value = "")]
        greys: String,

        /// Letters occurring at least twice
        #[arg(short, long, default_value = "")]
        repeated: String,

        /// Letters occurring exactly once
        #[arg(short, long, default_value = "")]
        not_repeated: String,

        /// List every remaining option
        #[arg(short, long)]
        choices: bool,
    },

    /// Guess a hidden word yourself
    Play {
        /// Show the solver's suggestion before each guess
        #[arg(long)]
        hint: bool,

        /// Play against this word instead of a random one
        #[arg(short, long)]
        target: Option<String>,

        /// Seed for choosing the hidden word
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Simulate a game against a specific target
    Solve {
        /// The target word to solve
        word: String,

        /// Force the opening guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Benchmark the solver on random solutions
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Force the opening guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Seed for sampling targets
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Random search for better scoring constants
    Tune {
        /// Parameter sets to try
        #[arg(short, long, default_value = "20")]
        trials: usize,

        /// Targets played per trial
        #[arg(short = 'n', long, default_value = "100")]
        sample: usize,

        /// Seed for sampling targets and parameters
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write the best constants to this JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Load word lists based on the -w and --solutions flags
///
/// Returns (`guess_list`, `solutions`)
/// - "all": every allowed word for guessing, embedded solutions as targets
/// - "solutions": embedded solutions for both
/// - "<path>": guess list from file, embedded solutions as targets
fn load_wordlists(cli: &Cli) -> Result<(Vec<Word>, Vec<Word>)> {
    let guesses = match cli.wordlist.as_str() {
        "all" => words_from_slice(ALLOWED),
        "solutions" => words_from_slice(SOLUTIONS),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}"))?,
    };

    let solutions = match &cli.solutions {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read solutions {}", path.display()))?,
        None => words_from_slice(SOLUTIONS),
    };

    Ok((guesses, solutions))
}

fn load_dictionary(cli: &Cli, guesses: Vec<Word>) -> Result<Dictionary> {
    let dictionary = Dictionary::new(guesses)?;
    let dictionary = match cli.limit {
        Some(limit) => dictionary.truncated(limit)?,
        None => dictionary,
    };
    log::info!("working dictionary has {} words", dictionary.len());
    Ok(dictionary)
}

fn load_parameters(cli: &Cli) -> Result<Parameters> {
    let mut params = match &cli.params {
        Some(path) => Parameters::load(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?,
        None => Parameters::default(),
    };
    if let Some(weight) = cli.common_letter_weight {
        params.common_letter_weight = weight;
    }
    if let Some(weight) = cli.same_index_weight {
        params.common_letter_same_index_weight = weight;
    }
    Ok(params.validate()?)
}

fn rng_from(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (guesses, solutions) = load_wordlists(&cli)?;
    let dictionary = load_dictionary(&cli, guesses)?;
    let params = load_parameters(&cli)?;

    match cli.command.unwrap_or(Commands::Guide) {
        Commands::Guide => {
            let solver = Solver::new(&dictionary, params);
            run_guide(&solver).map_err(|e| anyhow!(e))
        }
        Commands::Assist {
            greens,
            yellows,
            greys,
            repeated,
            not_repeated,
            choices,
        } => {
            let knowledge =
                KnowledgeState::from_parts(&greens, &yellows, &greys, &repeated, &not_repeated)?;
            let solver = Solver::new(&dictionary, params);
            print_assist(&assist(&solver, &knowledge), choices);
            Ok(())
        }
        Commands::Play { hint, target, seed } => {
            let session = match target {
                Some(text) => Session::new(&dictionary, Word::new(text)?),
                None => {
                    let pool: Vec<Word> = solutions
                        .into_iter()
                        .filter(|word| dictionary.contains(word))
                        .collect();
                    Session::random(&dictionary, &pool, &mut rng_from(seed))
                        .context("no solutions are in the word list")?
                }
            };
            let solver = hint.then(|| Solver::new(&dictionary, params));
            run_play(session, solver.as_ref()).map_err(|e| anyhow!(e))
        }
        Commands::Solve { word, first_word } => {
            let solver = Solver::new(&dictionary, params);
            let config = SolveConfig {
                target: word,
                first_word,
            };
            let trace = solve_word(&config, &solver).map_err(|e| anyhow!(e))?;
            print_trace(&trace);
            Ok(())
        }
        Commands::Benchmark {
            count,
            first_word,
            seed,
        } => {
            let opening = first_word.map(Word::new).transpose()?;
            let targets = sample_targets(&dictionary, &solutions, count, &mut rng_from(seed));
            if targets.is_empty() {
                bail!("no solutions are in the word list");
            }

            match &opening {
                Some(word) => println!(
                    "Running benchmark on {} random words with forced first word: {word}...",
                    targets.len()
                ),
                None => println!("Running benchmark on {} random words...", targets.len()),
            }

            let solver = Solver::new(&dictionary, params);
            print_benchmark_result(&run_benchmark(&solver, &targets, opening.as_ref()));
            Ok(())
        }
        Commands::Tune {
            trials,
            sample,
            seed,
            output,
        } => {
            let mut rng = rng_from(seed);
            let targets = sample_targets(&dictionary, &solutions, sample, &mut rng);
            if targets.is_empty() {
                bail!("no solutions are in the word list");
            }

            println!(
                "Tuning over {trials} trials of {} games each...",
                targets.len()
            );
            let result = run_tune(&dictionary, &targets, &TuneConfig { trials }, &mut rng)
                .map_err(|e| anyhow!(e))?;
            print_tune_result(&result);

            if let Some(path) = output {
                result.best.params.save(&path)?;
                println!("\nSaved to {}", path.display());
            }
            Ok(())
        }
    }
}
