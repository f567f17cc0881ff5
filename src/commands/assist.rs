//! One-shot assistant
//!
//! Takes the constraints a player has collected and names the best next guess.

use crate::core::{KnowledgeState, Word};
use crate::solver::{ScoredCandidate, Solver};
use std::fmt;

/// What the assistant recommends
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Suggestion<'a> {
    NoMatch,
    Solution(&'a Word),
    Best { word: &'a Word, options: usize },
}

impl fmt::Display for Suggestion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => write!(f, "No words match this set of conditions"),
            Self::Solution(word) => write!(f, "{word} is the solution"),
            Self::Best { word, options } => write!(
                f,
                "Out of {options} options, I think '{word}' is the best choice"
            ),
        }
    }
}

/// Recommendation plus every remaining option, best first
pub struct AssistResult<'a> {
    pub suggestion: Suggestion<'a>,
    pub ranked: Vec<ScoredCandidate<'a>>,
}

/// Rank the words matching `knowledge`
///
/// # Examples
/// ```
/// use wordle_assist::commands::{Suggestion, assist};
/// use wordle_assist::core::{Dictionary, KnowledgeState, Word};
/// use wordle_assist::solver::{Parameters, Solver};
///
/// let dictionary = Dictionary::new(
///     ["crane", "slate", "store", "stare", "scare"].map(|w| Word::new(w).unwrap()),
/// ).unwrap();
/// let solver = Solver::new(&dictionary, Parameters::default());
///
/// let knowledge = KnowledgeState::from_parts("__a_e", ",r,,,", "cn", "", "").unwrap();
/// let result = assist(&solver, &knowledge);
/// assert_eq!(result.suggestion.to_string(), "stare is the solution");
/// ```
#[must_use]
pub fn assist<'a>(solver: &Solver<'a>, knowledge: &KnowledgeState) -> AssistResult<'a> {
    let ranked = solver.ranked(knowledge);
    let suggestion = match ranked.as_slice() {
        [] => Suggestion::NoMatch,
        [only] => Suggestion::Solution(only.word),
        [best, ..] => Suggestion::Best {
            word: best.word,
            options: ranked.len(),
        },
    };
    log::debug!("assist [{knowledge}]: {suggestion}");
    AssistResult { suggestion, ranked }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::solver::Parameters;

    fn dictionary(list: &[&str]) -> Dictionary {
        Dictionary::new(list.iter().map(|w| Word::new(*w).unwrap())).unwrap()
    }

    #[test]
    fn no_match_message() {
        let dict = dictionary(&["crane", "slate"]);
        let solver = Solver::new(&dict, Parameters::default());
        let knowledge = KnowledgeState::from_parts("", "", "ae", "", "").unwrap();

        let result = assist(&solver, &knowledge);
        assert_eq!(result.suggestion, Suggestion::NoMatch);
        assert_eq!(
            result.suggestion.to_string(),
            "No words match this set of conditions"
        );
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn best_choice_reports_option_count() {
        let dict = dictionary(&["crane", "slate", "store", "stare", "scare"]);
        let solver = Solver::new(&dict, Parameters::default());
        let knowledge = KnowledgeState::from_parts("s___e", "", "", "", "").unwrap();

        let result = assist(&solver, &knowledge);
        let Suggestion::Best { word, options } = result.suggestion else {
            panic!("expected a best choice, got {:?}", result.suggestion);
        };
        assert_eq!(options, 4);
        assert_eq!(word, result.ranked[0].word);
        assert!(
            result
                .suggestion
                .to_string()
                .starts_with("Out of 4 options, I think '")
        );
    }

    #[test]
    fn single_option_is_the_solution() {
        let dict = dictionary(&["crane", "slate", "store", "stare", "scare"]);
        let solver = Solver::new(&dict, Parameters::default());
        let knowledge = KnowledgeState::from_parts("st__e", "", "o", "", "").unwrap();

        let result = assist(&solver, &knowledge);
        assert_eq!(result.suggestion.to_string(), "stare is the solution");
    }
}
