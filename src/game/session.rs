//! Interactive play against a hidden target

use crate::core::{Dictionary, Feedback, KnowledgeState, LetterSet, Word, WordError};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Reasons a submitted guess is refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidWord(WordError),
    NotInWordList(String),
    /// The guess reuses letters already shown to be absent
    EliminatedLetters(LetterSet),
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(WordError::InvalidLength(_)) => {
                write!(f, "Invalid guess. Make sure your guess is 5 letters long.")
            }
            Self::InvalidWord(e) => write!(f, "Invalid guess. {e}"),
            Self::NotInWordList(word) => write!(f, "Invalid guess. '{word}' is not in the word list."),
            Self::EliminatedLetters(letters) => write!(
                f,
                "Invalid guess. Make sure your guess doesn't use any eliminated letters ({letters})."
            ),
            Self::GameOver => write!(f, "The game is already won."),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<WordError> for GuessError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

/// A game played by a person
///
/// Guesses are checked against the allowed-word dictionary and may not reuse
/// letters already shown grey.
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    target: Word,
    history: Vec<(Word, Feedback)>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, target: Word) -> Self {
        Self {
            dictionary,
            target,
            history: Vec::new(),
        }
    }

    /// Start a session with a target drawn from `solutions`
    ///
    /// Returns `None` if `solutions` is empty.
    pub fn random<R: Rng + ?Sized>(
        dictionary: &'a Dictionary,
        solutions: &[Word],
        rng: &mut R,
    ) -> Option<Self> {
        let target = solutions.choose(rng)?.clone();
        log::debug!("session target chosen from {} solutions", solutions.len());
        Some(Self::new(dictionary, target))
    }

    /// Check a guess and score it against the target
    ///
    /// # Errors
    /// Returns a `GuessError` if the game is already won, the text is not a
    /// five-letter word, the word is not allowed, or it uses eliminated letters.
    /// A refused guess does not count.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Dictionary, Word};
    /// use wordle_assist::game::{GuessError, Session};
    ///
    /// let dictionary = Dictionary::new(
    ///     ["crane", "stare", "coast"].map(|w| Word::new(w).unwrap()),
    /// ).unwrap();
    /// let mut session = Session::new(&dictionary, Word::new("stare").unwrap());
    ///
    /// assert_eq!(session.submit_guess("crane").unwrap().to_string(), "-YG-G");
    /// assert!(matches!(session.submit_guess("coast"), Err(GuessError::EliminatedLetters(_))));
    /// assert!(Session::is_solved(session.submit_guess("STARE").unwrap()));
    /// ```
    pub fn submit_guess(&mut self, text: &str) -> Result<Feedback, GuessError> {
        if self.is_won() {
            return Err(GuessError::GameOver);
        }

        let guess = Word::new(text.trim())?;
        if !self.dictionary.contains(&guess) {
            return Err(GuessError::NotInWordList(guess.text().to_string()));
        }

        let reused = self.eliminated_letters().intersection(guess.letters());
        if !reused.is_empty() {
            return Err(GuessError::EliminatedLetters(reused));
        }

        let feedback = Feedback::calculate(&guess, &self.target);
        self.history.push((guess, feedback));
        Ok(feedback)
    }

    #[must_use]
    pub const fn is_solved(feedback: Feedback) -> bool {
        feedback.is_solved()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(_, feedback)| feedback.is_solved())
    }

    /// Knowledge shown on the board so far
    #[must_use]
    pub fn knowledge(&self) -> KnowledgeState {
        KnowledgeState::from_history(&self.history)
    }

    /// Letters shown to be absent from the target
    #[must_use]
    pub fn eliminated_letters(&self) -> LetterSet {
        self.knowledge().greys
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}
