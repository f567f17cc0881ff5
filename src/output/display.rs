//! Display functions for command results

use super::formatters::{create_progress_bar, format_feedback};
use crate::commands::{AssistResult, BenchmarkResult, TuneResult};
use crate::core::{Feedback, Word};
use crate::game::{GameStatus, GameTrace};
use crate::solver::ScoredCandidate;
use colored::Colorize;

/// Print the top `limit` candidates with their scores
pub fn print_ranked(ranked: &[ScoredCandidate<'_>], limit: usize) {
    for (i, candidate) in ranked.iter().take(limit).enumerate() {
        println!(
            "  {:>3}. {}  {:>10.2}  (x{:.3})",
            i + 1,
            candidate.word.text().to_uppercase(),
            candidate.score,
            candidate.multiplier
        );
    }
    if ranked.len() > limit {
        println!("  ... and {} more", ranked.len() - limit);
    }
    println!();
}

/// Print the assistant's recommendation, and every option if `choices` is set
pub fn print_assist(result: &AssistResult<'_>, choices: bool) {
    println!("\n{}", result.suggestion.to_string().bright_yellow().bold());
    if choices && !result.ranked.is_empty() {
        println!("\nAll options, best first:");
        print_ranked(&result.ranked, result.ranked.len());
    }
}

/// Print a simulated game turn by turn
pub fn print_trace(trace: &GameTrace) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        trace.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in trace.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {} candidates",
            i + 1,
            format_feedback(&turn.guess, turn.feedback),
            turn.candidates
        );
    }

    println!();
    let guesses = trace.guesses();
    let summary = match trace.status {
        GameStatus::Solved => format!("✅ Solved in {guesses} guesses!").green().bold(),
        GameStatus::Abandoned => format!("❌ Abandoned after {guesses} guesses").red().bold(),
        GameStatus::Stalled => format!("⚠ Stalled after {guesses} guesses").yellow().bold(),
        GameStatus::InProgress => format!("Still playing after {guesses} guesses").normal(),
    };
    println!("{summary}");
}

/// Print the win banner and the guesses that led to it
pub fn print_solved_banner(history: &[(Word, Feedback)]) {
    let turns = history.len();

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "            🎉  S O L V E D !  🎉".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!();
    for (i, (word, feedback)) in history.iter().enumerate() {
        println!(
            "    {}. {}  {}",
            (i + 1).to_string().bright_black(),
            format_feedback(word, *feedback),
            feedback.to_emoji()
        );
    }
    println!("\n{}\n", "═".repeat(60).bright_cyan());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    for status in [GameStatus::Abandoned, GameStatus::Stalled] {
        if let Some(&count) = result.outcomes.get(&status)
            && count > 0
        {
            println!("   {:<18}{}", format!("{status}:"), count.to_string().red());
        }
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Best case:        {}", result.min_guesses);
    println!("   Worst case:       {}", result.max_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, count) in result.distribution_rows() {
        let pct = count as f64 / result.solved as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print the outcome of a tuning run
pub fn print_tune_result(result: &TuneResult) {
    let baseline = result.trials.first().map_or(result.best.cost, |t| t.cost);

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TUNING RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\n   Trials:          {}", result.trials.len());
    println!("   Default cost:    {baseline:.4}");
    println!(
        "   Best cost:       {}",
        format!("{:.4}", result.best.cost).bright_yellow().bold()
    );
    println!("\n   {}", result.best.params);
}
