use std::collections::{HashSet, VecDeque};

use crate::ladder::dictionary::Dictionary;
use crate::ladder::edit::neighbors;

/// Find a shortest word ladder from `begin` to `end`.
///
/// Breadth-first search over partial ladders. Each frontier entry is the
/// full sequence of words built so far; a popped ladder is extended by the
/// constructed one-edit neighbors of its last word, so the work per node
/// scales with word length rather than dictionary size. Every word after
/// the first must be in the dictionary, including `end`.
///
/// Returns an empty vector when `begin == end` (a word is never its own
/// ladder) or when no ladder exists. Among equal-shortest ladders the one
/// returned is fixed by processing candidates in ascending lexical order;
/// that tie-break is deterministic but not part of the contract.
#[tracing::instrument(skip(dictionary), fields(dictionary_words = dictionary.len()))]
pub fn generate_ladder(begin: &str, end: &str, dictionary: &Dictionary) -> Vec<String> {
    if begin == end {
        return Vec::new();
    }

    let mut frontier: VecDeque<Vec<String>> = VecDeque::new();
    frontier.push_back(vec![begin.to_string()]);

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(begin.to_string());

    while let Some(ladder) = frontier.pop_front() {
        // Every enqueued ladder carries at least its seed word.
        let Some(last) = ladder.last() else {
            continue;
        };

        for candidate in neighbors(last) {
            if visited.contains(&candidate) || !dictionary.contains(&candidate) {
                continue;
            }

            let mut extended = ladder.clone();
            extended.push(candidate.clone());

            if candidate == end {
                tracing::debug!(rungs = extended.len(), "ladder_found");
                return extended;
            }

            visited.insert(candidate);
            frontier.push_back(extended);
        }
    }

    tracing::debug!(visited = visited.len(), "no_ladder");
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::edit::is_adjacent;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().copied())
    }

    /// Ladder invariants: endpoints, adjacency of consecutive words, and
    /// dictionary membership of everything after the first word.
    fn assert_valid_ladder(ladder: &[String], begin: &str, end: &str, dictionary: &Dictionary) {
        assert_eq!(ladder.first().map(String::as_str), Some(begin));
        assert_eq!(ladder.last().map(String::as_str), Some(end));
        for pair in ladder.windows(2) {
            assert!(
                is_adjacent(&pair[0], &pair[1]),
                "'{}' and '{}' are not one edit apart",
                pair[0],
                pair[1]
            );
        }
        for word in &ladder[1..] {
            assert!(dictionary.contains(word), "'{word}' not in dictionary");
        }
    }

    #[test]
    fn test_cat_to_dog() {
        let dictionary = dict(&["cat", "cot", "cog", "dog", "bat", "bog"]);
        let ladder = generate_ladder("cat", "dog", &dictionary);
        assert_eq!(ladder.len(), 4);
        assert_valid_ladder(&ladder, "cat", "dog", &dictionary);
    }

    #[test]
    fn test_same_word_returns_empty() {
        let dictionary = dict(&["cat", "cot"]);
        assert!(generate_ladder("cat", "cat", &dictionary).is_empty());
    }

    #[test]
    fn test_disconnected_words_return_empty() {
        let dictionary = dict(&["cat", "cot", "zzz"]);
        assert!(generate_ladder("cat", "zzz", &dictionary).is_empty());
    }

    #[test]
    fn test_end_word_not_in_dictionary_returns_empty() {
        let dictionary = dict(&["cat", "cot"]);
        assert!(generate_ladder("cat", "dog", &dictionary).is_empty());
    }

    #[test]
    fn test_begin_word_need_not_be_in_dictionary() {
        let dictionary = dict(&["cot", "dog", "cog"]);
        let ladder = generate_ladder("cat", "dog", &dictionary);
        assert_valid_ladder(&ladder, "cat", "dog", &dictionary);
    }

    #[test]
    fn test_direct_neighbors_give_two_word_ladder() {
        let dictionary = dict(&["cat", "cot"]);
        let ladder = generate_ladder("cat", "cot", &dictionary);
        assert_eq!(ladder, vec!["cat".to_string(), "cot".to_string()]);
    }

    #[test]
    fn test_ladder_uses_deletions() {
        let dictionary = dict(&["cat", "at"]);
        let ladder = generate_ladder("cats", "at", &dictionary);
        assert_eq!(
            ladder,
            vec!["cats".to_string(), "cat".to_string(), "at".to_string()]
        );
    }

    #[test]
    fn test_ladder_uses_insertions() {
        let dictionary = dict(&["cat", "cats"]);
        let ladder = generate_ladder("at", "cats", &dictionary);
        assert_eq!(
            ladder,
            vec!["at".to_string(), "cat".to_string(), "cats".to_string()]
        );
    }

    #[test]
    fn test_returns_shortest_among_alternatives() {
        // Long route cat-bat-bot-bog-dog exists alongside cat-cot-cog-dog.
        let dictionary = dict(&["cat", "bat", "bot", "bog", "dog", "cot", "cog"]);
        let ladder = generate_ladder("cat", "dog", &dictionary);
        assert_eq!(ladder.len(), 4);
        assert_valid_ladder(&ladder, "cat", "dog", &dictionary);
    }

    #[test]
    fn test_lexical_tie_break_is_deterministic() {
        // "cog" and "dot" both reach "dog" in the same number of rungs;
        // candidates are generated in lexical order, so the "cog" branch
        // is expanded first and wins.
        let dictionary = dict(&["cot", "cog", "dot", "dog"]);
        let ladder = generate_ladder("cat", "dog", &dictionary);
        assert_eq!(
            ladder,
            vec!["cat", "cot", "cog", "dog"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_empty_begin_word() {
        let dictionary = dict(&["a", "at", "cat"]);
        let ladder = generate_ladder("", "cat", &dictionary);
        assert_valid_ladder(&ladder, "", "cat", &dictionary);
        assert_eq!(ladder.len(), 4);
    }

    #[test]
    fn test_empty_dictionary_returns_empty() {
        let dictionary = Dictionary::from_words(Vec::<&str>::new());
        assert!(generate_ladder("cat", "dog", &dictionary).is_empty());
    }
}
