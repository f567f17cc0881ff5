//! Simulated games
//!
//! The solver plays against a known target: filter, select, guess, derive
//! knowledge again from the full history, repeat until a terminal state.

use crate::core::{Feedback, KnowledgeState, Word, derive_knowledge};
use crate::solver::Solver;
use std::fmt;

/// Guess cap for a simulated game
pub const MAX_GUESSES: usize = 8;

/// State of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    /// The target was guessed
    Solved,
    /// Guess cap reached, or no candidates left
    Abandoned,
    /// The selector proposed a word it had already guessed
    Stalled,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InProgress => "in progress",
            Self::Solved => "solved",
            Self::Abandoned => "abandoned",
            Self::Stalled => "stalled",
        };
        f.write_str(label)
    }
}

/// One guess and what it revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    /// Candidates consistent with the knowledge held before this guess
    pub candidates: usize,
}

/// Record of a game, complete once `status` is terminal
#[derive(Debug, Clone)]
pub struct GameTrace {
    pub target: Word,
    pub turns: Vec<Turn>,
    pub status: GameStatus,
}

impl GameTrace {
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status == GameStatus::Solved
    }

    /// Guesses used if solved, otherwise one past the cap
    #[must_use]
    pub fn cost(&self) -> usize {
        if self.is_solved() {
            self.guesses()
        } else {
            MAX_GUESSES + 1
        }
    }
}

/// A game in progress
pub struct Game<'s, 'a> {
    solver: &'s Solver<'a>,
    opening: Option<Word>,
    trace: GameTrace,
}

impl<'s, 'a> Game<'s, 'a> {
    #[must_use]
    pub fn new(solver: &'s Solver<'a>, target: Word) -> Self {
        Self {
            solver,
            opening: None,
            trace: GameTrace {
                target,
                turns: Vec::new(),
                status: GameStatus::InProgress,
            },
        }
    }

    /// Play `opening` as the first guess instead of asking the selector
    #[must_use]
    pub fn with_opening(mut self, opening: Word) -> Self {
        self.opening = Some(opening);
        self
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.trace.status
    }

    #[must_use]
    pub const fn trace(&self) -> &GameTrace {
        &self.trace
    }

    /// Knowledge implied by every guess so far
    #[must_use]
    pub fn knowledge(&self) -> KnowledgeState {
        derive_knowledge(
            self.trace.turns.iter().map(|turn| &turn.guess),
            &self.trace.target,
        )
    }

    /// Play one turn and return the resulting state
    ///
    /// Does nothing once the game is over.
    pub fn step(&mut self) -> GameStatus {
        if self.trace.status.is_terminal() {
            return self.trace.status;
        }
        if self.trace.turns.len() >= MAX_GUESSES {
            self.trace.status = GameStatus::Abandoned;
            return self.trace.status;
        }

        let candidates = self.solver.candidates(&self.knowledge());
        let guess = if let Some(opening) = self.opening.take() {
            opening
        } else if let Some(best) = self.solver.select(&candidates) {
            best.clone()
        } else {
            log::debug!("no candidates left for {}", self.trace.target);
            self.trace.status = GameStatus::Abandoned;
            return self.trace.status;
        };

        if self.trace.turns.iter().any(|turn| turn.guess == guess) {
            log::warn!("selector repeated {guess} while solving {}", self.trace.target);
            self.trace.status = GameStatus::Stalled;
            return self.trace.status;
        }

        let feedback = Feedback::calculate(&guess, &self.trace.target);
        log::debug!(
            "turn {}: {guess} {feedback} ({} candidates)",
            self.trace.turns.len() + 1,
            candidates.len()
        );
        self.trace.turns.push(Turn {
            guess,
            feedback,
            candidates: candidates.len(),
        });

        if feedback.is_solved() {
            self.trace.status = GameStatus::Solved;
        } else if self.trace.turns.len() >= MAX_GUESSES {
            self.trace.status = GameStatus::Abandoned;
        }
        self.trace.status
    }

    /// Play to the end
    #[must_use]
    pub fn run(mut self) -> GameTrace {
        while !self.step().is_terminal() {}
        self.trace
    }
}

/// Play a full game against `target`, optionally with a fixed opening word
///
/// # Examples
/// ```
/// use wordle_assist::core::{Dictionary, Word};
/// use wordle_assist::game::{GameStatus, simulate};
/// use wordle_assist::solver::{Parameters, Solver};
///
/// let dictionary = Dictionary::new(
///     ["crane", "slate", "store", "stare", "scare"].map(|w| Word::new(w).unwrap()),
/// ).unwrap();
/// let solver = Solver::new(&dictionary, Parameters::default());
///
/// let trace = simulate(&solver, &Word::new("stare").unwrap(), Word::new("crane").ok());
/// assert_eq!(trace.status, GameStatus::Solved);
/// assert_eq!(trace.turns[0].guess.text(), "crane");
/// assert_eq!(trace.guesses(), 2);
/// ```
#[must_use]
pub fn simulate(solver: &Solver<'_>, target: &Word, opening: Option<Word>) -> GameTrace {
    let game = Game::new(solver, target.clone());
    match opening {
        Some(word) => game.with_opening(word),
        None => game,
    }
    .run()
}
