//! Play a game against a hidden word

use super::get_user_input;
use crate::game::Session;
use crate::output::{format_feedback, print_solved_banner};
use crate::solver::Solver;

/// Run an interactive game until it is won or the player quits
///
/// With `hint` set, the solver's pick for the current board is shown before
/// each guess.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn run_play(mut session: Session<'_>, hint: Option<&Solver<'_>>) -> Result<(), String> {
    println!("\nGuess the five-letter word. Type 'quit' to give up.\n");

    while !session.is_won() {
        if let Some(solver) = hint
            && let Some(best) = solver.best_guess(&session.knowledge())
        {
            println!("Hint: {}", best.text().to_uppercase());
        }

        let eliminated = session.eliminated_letters();
        let prompt = if eliminated.is_empty() {
            format!("Guess {}", session.guesses_used() + 1)
        } else {
            format!(
                "Guess {} (eliminated: {eliminated})",
                session.guesses_used() + 1
            )
        };

        let Some(input) = get_user_input(&prompt)? else {
            return Ok(());
        };
        if matches!(input.as_str(), "quit" | "q" | "exit") {
            println!("\nThe word was {}.\n", session.target().text().to_uppercase());
            return Ok(());
        }

        match session.submit_guess(&input) {
            Ok(feedback) => {
                if let Some((guess, _)) = session.history().last() {
                    println!("  {}\n", format_feedback(guess, feedback));
                }
            }
            Err(e) => println!("{e}\n"),
        }
    }

    print_solved_banner(session.history());
    Ok(())
}
