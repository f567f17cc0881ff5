//! Wordle Assistant
//!
//! Filters a dictionary against what is known about the hidden word and ranks the
//! survivors by how similar each is to all the others, discounting repeated letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::{Dictionary, Word, derive_knowledge};
//! use wordle_assist::solver::{Parameters, Solver};
//!
//! let dictionary = Dictionary::new(
//!     ["crane", "slate", "store", "stare", "scare"].map(|w| Word::new(w).unwrap()),
//! ).unwrap();
//! let solver = Solver::new(&dictionary, Parameters::default());
//!
//! // After guessing CRANE against STARE only one word fits
//! let knowledge = derive_knowledge(&[Word::new("crane").unwrap()], &Word::new("stare").unwrap());
//! assert_eq!(solver.best_guess(&knowledge).unwrap().text(), "stare");
//! ```

// Core domain types
pub mod core;

// Filtering and ranking
pub mod solver;

// Simulated and interactive games
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
