//! Candidate filtering
//!
//! Keeps the dictionary words consistent with a knowledge state. Output follows
//! dictionary order; ranking is a separate step.

use crate::core::{Dictionary, KnowledgeState, Word};

/// Check a word against every constraint in `knowledge`
///
/// A word is kept iff:
/// 1. it has each green letter at its position;
/// 2. no position holds a letter listed as yellow for that position;
/// 3. it contains every yellow letter somewhere;
/// 4. it contains no grey letter, unless that letter is also green, yellow or repeated;
/// 5. each `not_repeated` letter occurs exactly once;
/// 6. each `repeated` letter occurs at least twice.
///
/// # Examples
/// ```
/// use wordle_assist::core::{KnowledgeState, Word};
/// use wordle_assist::solver::is_consistent;
///
/// let knowledge = KnowledgeState::from_parts("__a_e", ",r,,,", "cn", "", "").unwrap();
/// assert!(is_consistent(&Word::new("stare").unwrap(), &knowledge));
/// assert!(!is_consistent(&Word::new("crane").unwrap(), &knowledge));
/// ```
#[must_use]
pub fn is_consistent(word: &Word, knowledge: &KnowledgeState) -> bool {
    let chars = word.chars();

    for (&letter, green) in chars.iter().zip(&knowledge.greens) {
        if let Some(expected) = *green
            && letter != expected
        {
            return false;
        }
    }

    if chars
        .iter()
        .zip(&knowledge.yellows)
        .any(|(&letter, slot)| slot.contains(letter))
    {
        return false;
    }

    if !knowledge.yellow_letters().is_subset(word.letters()) {
        return false;
    }

    let banned = knowledge
        .greys
        .difference(knowledge.required_letters())
        .difference(knowledge.repeated);
    if !banned.intersection(word.letters()).is_empty() {
        return false;
    }

    if knowledge
        .not_repeated
        .iter()
        .any(|letter| word.count_of(letter) != 1)
    {
        return false;
    }

    knowledge
        .repeated
        .iter()
        .all(|letter| word.count_of(letter) >= 2)
}

/// Dictionary indices of every word consistent with `knowledge`, in dictionary order
#[must_use]
pub fn filter_indices(dictionary: &Dictionary, knowledge: &KnowledgeState) -> Vec<usize> {
    dictionary
        .iter()
        .enumerate()
        .filter(|(_, word)| is_consistent(word, knowledge))
        .map(|(index, _)| index)
        .collect()
}

/// Every dictionary word consistent with `knowledge`, in dictionary order
#[must_use]
pub fn filter<'a>(dictionary: &'a Dictionary, knowledge: &KnowledgeState) -> Vec<&'a Word> {
    dictionary
        .iter()
        .filter(|word| is_consistent(word, knowledge))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterSet, derive_knowledge};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dictionary(list: &[&str]) -> Dictionary {
        Dictionary::new(list.iter().map(|w| word(w))).unwrap()
    }

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn empty_knowledge_keeps_everything_in_order() {
        let dict = dictionary(&["stare", "crane", "slate"]);
        let kept = filter(&dict, &KnowledgeState::default());
        assert_eq!(texts(&kept), vec!["stare", "crane", "slate"]);
    }

    #[test]
    fn green_letters_must_match() {
        let dict = dictionary(&["crane", "slate", "store"]);
        let knowledge = KnowledgeState::from_parts("s___e", "", "", "", "").unwrap();
        assert_eq!(texts(&filter(&dict, &knowledge)), vec!["slate", "store"]);
    }

    #[test]
    fn yellow_letter_excluded_at_its_position_but_required() {
        let dict = dictionary(&["roast", "crane", "sport", "stole"]);
        // R is present but not at position 0
        let knowledge = KnowledgeState::from_parts("", "r,,,,", "", "", "").unwrap();
        assert_eq!(texts(&filter(&dict, &knowledge)), vec!["crane", "sport"]);
    }

    #[test]
    fn yellow_letter_satisfied_by_green_elsewhere() {
        let dict = dictionary(&["elder", "eerie"]);
        // E yellow at 1, green at 0: ELDER has E at 0 only, still fine
        let knowledge = KnowledgeState::from_parts("e____", ",e,,,", "", "", "").unwrap();
        assert_eq!(texts(&filter(&dict, &knowledge)), vec!["elder"]);
    }

    #[test]
    fn grey_letters_are_excluded() {
        let dict = dictionary(&["crane", "stare", "scare"]);
        let knowledge = KnowledgeState::from_parts("", "", "cn", "", "").unwrap();
        assert_eq!(texts(&filter(&dict, &knowledge)), vec!["stare"]);
    }

    #[test]
    fn grey_letter_allowed_when_also_confirmed() {
        let dict = dictionary(&["speed", "abide", "ebony"]);
        // E both grey (an extra copy) and green at position 4
        let knowledge = KnowledgeState::from_parts("____e", "", "e", "", "").unwrap();
        assert_eq!(texts(&filter(&dict, &knowledge)), vec!["abide"]);
    }

    #[test]
    fn not_repeated_means_exactly_once() {
        let dict = dictionary(&["speed", "spend", "spray"]);
        let knowledge = KnowledgeState {
            not_repeated: LetterSet::from_letters("e"),
            ..KnowledgeState::default()
        };
        assert_eq!(texts(&filter(&dict, &knowledge)), vec!["spend"]);
    }

    #[test]
    fn repeated_means_at_least_twice() {
        let dict = dictionary(&["speed", "spend", "geese"]);
        let knowledge = KnowledgeState {
            repeated: LetterSet::from_letters("e"),
            ..KnowledgeState::default()
        };
        assert_eq!(texts(&filter(&dict, &knowledge)), vec!["speed", "geese"]);
    }

    #[test]
    fn indices_follow_dictionary_order() {
        let dict = dictionary(&["crane", "slate", "store", "stare", "scare"]);
        let knowledge = KnowledgeState::from_parts("s___e", "", "", "", "").unwrap();
        assert_eq!(filter_indices(&dict, &knowledge), vec![1, 2, 3, 4]);
    }

    #[test]
    fn crane_against_stare_narrows_the_field() {
        let dict = dictionary(&["crane", "slate", "store", "stare", "scare"]);
        let knowledge = derive_knowledge(&[word("crane")], &word("stare"));

        let kept = texts(&filter(&dict, &knowledge));
        assert!(!kept.contains(&"crane"));
        assert!(!kept.contains(&"slate"));
        assert_eq!(kept, vec!["stare"]);
    }

    #[test]
    fn target_always_survives_its_own_feedback() {
        let dict = dictionary(&[
            "crane", "slate", "store", "stare", "scare", "speed", "geese", "eerie", "abide",
            "erase", "llama", "teeth",
        ]);

        for target in dict.iter() {
            for guess in dict.iter() {
                let knowledge = derive_knowledge(std::slice::from_ref(guess), target);
                assert!(
                    is_consistent(target, &knowledge),
                    "{target} rejected after guessing {guess}: {knowledge}"
                );
            }
        }
    }

    #[test]
    fn filter_is_sound_and_complete() {
        let dict = dictionary(&[
            "crane", "slate", "store", "stare", "scare", "speed", "geese", "eerie", "abide",
        ]);
        let knowledge = derive_knowledge(&[word("slate")], &word("scare"));

        let kept: Vec<usize> = filter_indices(&dict, &knowledge);
        for (index, candidate) in dict.iter().enumerate() {
            assert_eq!(
                kept.contains(&index),
                is_consistent(candidate, &knowledge),
                "{candidate}"
            );
        }
        assert!(kept.contains(&dict.index_of(&word("scare")).unwrap()));
    }
}
