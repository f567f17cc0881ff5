//! Interactive assistant
//!
//! Suggests a guess, reads back the colours the game showed, re-ranks.

use super::get_user_input;
use crate::core::{Feedback, KnowledgeState, Word};
use crate::output::{print_ranked, print_solved_banner};
use crate::solver::Solver;

/// A line typed at the feedback prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideInput {
    Feedback(Feedback),
    Undo,
    New,
    Quit,
}

/// Parse feedback (`G/Y/-`, emoji, `win`) or a command
///
/// # Examples
/// ```
/// use wordle_assist::commands::{GuideInput, parse_guide_input};
/// use wordle_assist::core::Feedback;
///
/// assert_eq!(parse_guide_input("win"), Some(GuideInput::Feedback(Feedback::SOLVED)));
/// assert_eq!(parse_guide_input("q"), Some(GuideInput::Quit));
/// assert!(parse_guide_input("bogus").is_none());
/// ```
#[must_use]
pub fn parse_guide_input(input: &str) -> Option<GuideInput> {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Some(GuideInput::Quit),
        "new" | "n" => Some(GuideInput::New),
        "undo" | "u" => Some(GuideInput::Undo),
        "win" | "correct" | "solved" => Some(GuideInput::Feedback(Feedback::SOLVED)),
        other => Feedback::parse(other).map(GuideInput::Feedback),
    }
}

/// Run the interactive assistant until the user quits
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn run_guide(solver: &Solver<'_>) -> Result<(), String> {
    println!("\nI'll suggest a guess each turn. After playing it, enter the colours:\n");
    println!("  - G/g/🟩 for green (right letter, right place)");
    println!("  - Y/y/🟨 for yellow (right letter, wrong place)");
    println!("  - -/_/⬜ for grey (letter not in the word)");
    println!("  - or 'win' if it was right\n");
    println!("Commands: 'undo', 'new', 'quit'\n");

    let mut history: Vec<(Word, Feedback)> = Vec::new();

    loop {
        let knowledge = KnowledgeState::from_history(&history);
        let ranked = solver.ranked(&knowledge);

        let Some(best) = ranked.first() else {
            println!("\nNo words match this set of conditions. Your feedback may be wrong.");
            println!("Type 'undo' to go back, 'new' to start over or 'quit'.\n");
            match get_user_input("Command")?.as_deref().and_then(parse_guide_input) {
                Some(GuideInput::Undo) => {
                    history.pop();
                }
                Some(GuideInput::New) => history.clear(),
                None | Some(GuideInput::Quit) => return Ok(()),
                Some(GuideInput::Feedback(_)) => {}
            }
            continue;
        };
        let guess = best.word.clone();

        println!("{}", "─".repeat(60));
        println!("Turn {}: {} candidates remaining", history.len() + 1, ranked.len());
        println!("{}", "─".repeat(60));
        println!("\nSuggested guess: {}\n", guess.text().to_uppercase());
        if ranked.len() <= 10 {
            print_ranked(&ranked, 10);
        }

        let feedback = loop {
            let Some(input) = get_user_input("Feedback (G/Y/-, 'win', or command)")? else {
                return Ok(());
            };
            match parse_guide_input(&input) {
                Some(GuideInput::Quit) => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
                Some(GuideInput::New) => {
                    history.clear();
                    println!("\nNew game started!\n");
                    break None;
                }
                Some(GuideInput::Undo) => {
                    if history.pop().is_some() {
                        println!("Undone. Back to turn {}\n", history.len() + 1);
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                Some(GuideInput::Feedback(feedback)) => break Some(feedback),
                None => println!("Invalid feedback! Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'\n"),
            }
        };

        if let Some(feedback) = feedback {
            history.push((guess, feedback));
            log::debug!("guide history: {} guesses", history.len());

            if feedback.is_solved() {
                print_solved_banner(&history);
                match get_user_input("Play again? (yes/no)")?.as_deref() {
                    Some("yes" | "y") => {
                        history.clear();
                        println!("\nNew game started!\n");
                    }
                    _ => {
                        println!("\nThanks for playing!\n");
                        return Ok(());
                    }
                }
            }
        }
    }
}
