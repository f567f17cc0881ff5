//! Core domain types for Wordle
//!
//! Words, per-letter feedback, the accumulated knowledge state and the dictionary.
//! Everything here is pure and independent of the scoring constants.

mod dictionary;
mod feedback;
mod knowledge;
mod letters;
mod word;

pub use dictionary::{Dictionary, DictionaryError};
pub use feedback::{Feedback, Tile};
pub use knowledge::{KnowledgeError, KnowledgeState, derive_knowledge};
pub use letters::LetterSet;
pub use word::{WORD_LENGTH, Word, WordError};
