//! Game loop and interactive sessions

mod session;
mod simulation;

pub use session::{GuessError, Session};
pub use simulation::{Game, GameStatus, GameTrace, MAX_GUESSES, Turn, simulate};
