//! The single-edit relation between words
//!
//! Two words are adjacent when one substitution, insertion, or deletion
//! turns one into the other. This is a restricted single-pass metric, not
//! full Levenshtein: equal-length words are compared position by position,
//! and words whose lengths differ by one are compared with a two-pointer
//! scan allowing a single skip in the longer word.

use std::collections::BTreeSet;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// True iff the restricted edit distance between `a` and `b` is at most `d`
pub fn edit_distance_within(a: &str, b: &str, d: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > d {
        return false;
    }

    if a.len() == b.len() {
        let mismatches = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
        return mismatches <= d;
    }

    // Lengths differ by at most d: scan both, skipping in the longer word
    // on each mismatch.
    let (longer, shorter) = if a.len() > b.len() { (&a, &b) } else { (&b, &a) };
    let mut i = 0;
    let mut j = 0;
    let mut mismatches = 0;
    while i < longer.len() && j < shorter.len() {
        if longer[i] == shorter[j] {
            i += 1;
            j += 1;
        } else {
            mismatches += 1;
            if mismatches > d {
                return false;
            }
            i += 1;
        }
    }
    mismatches += longer.len() - i;
    mismatches <= d
}

/// True iff `a` and `b` are one edit apart (or identical)
pub fn is_adjacent(a: &str, b: &str) -> bool {
    edit_distance_within(a, b, 1)
}

/// Every word one edit away from `word`, built directly from the alphabet
/// rather than by scanning a dictionary.
///
/// The candidates are all single-letter substitutions (skipping no-ops),
/// all insertions at every position, and all single-character deletions.
/// Collecting into a `BTreeSet` deduplicates and fixes ascending lexical
/// order, which is what makes ladder search deterministic.
pub fn neighbors(word: &str) -> BTreeSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut candidates = BTreeSet::new();

    // Substitutions
    for i in 0..chars.len() {
        for letter in ALPHABET.chars() {
            if letter == chars[i] {
                continue;
            }
            let mut candidate: String = chars[..i].iter().collect();
            candidate.push(letter);
            candidate.extend(&chars[i + 1..]);
            candidates.insert(candidate);
        }
    }

    // Insertions
    for i in 0..=chars.len() {
        for letter in ALPHABET.chars() {
            let mut candidate: String = chars[..i].iter().collect();
            candidate.push(letter);
            candidate.extend(&chars[i..]);
            candidates.insert(candidate);
        }
    }

    // Deletions (no-op for the empty word)
    for i in 0..chars.len() {
        let mut candidate: String = chars[..i].iter().collect();
        candidate.extend(&chars[i + 1..]);
        candidates.insert(candidate);
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution_is_adjacent() {
        assert!(is_adjacent("cat", "cot"));
    }

    #[test]
    fn test_identical_words_are_adjacent() {
        assert!(is_adjacent("cat", "cat"));
    }

    #[test]
    fn test_two_substitutions_not_adjacent() {
        assert!(!is_adjacent("cat", "dog"));
    }

    #[test]
    fn test_insertion_is_adjacent() {
        assert!(is_adjacent("cat", "cats"));
    }

    #[test]
    fn test_deletion_is_adjacent() {
        assert!(is_adjacent("cat", "at"));
    }

    #[test]
    fn test_single_insertion_mid_word_is_adjacent() {
        // Deleting the "s" from "cast" yields "cat", so the one-skip scan
        // accepts the pair.
        assert!(is_adjacent("cat", "cast"));
    }

    #[test]
    fn test_one_length_apart_but_two_edits() {
        // "bats" needs a deletion and a substitution to reach "cat", which
        // the one-skip scan rejects.
        assert!(!is_adjacent("cat", "bats"));
        assert!(!is_adjacent("dog", "cogs"));
    }

    #[test]
    fn test_length_gap_of_two_never_adjacent() {
        assert!(!is_adjacent("cat", "c"));
        assert!(!is_adjacent("a", "abc"));
    }

    #[test]
    fn test_empty_word_cases() {
        assert!(is_adjacent("", "a"));
        assert!(is_adjacent("", ""));
        assert!(!is_adjacent("", "ab"));
    }

    #[test]
    fn test_edit_distance_within_larger_threshold() {
        assert!(edit_distance_within("cat", "dog", 3));
        assert!(!edit_distance_within("cat", "dog", 2));
    }

    #[test]
    fn test_neighbors_of_empty_word() {
        let candidates = neighbors("");
        // Only the 26 single-letter insertions; the deletion step is
        // skipped for empty words.
        assert_eq!(candidates.len(), 26);
        assert!(candidates.contains("a"));
        assert!(candidates.contains("z"));
    }

    #[test]
    fn test_neighbors_excludes_word_itself() {
        assert!(!neighbors("cat").contains("cat"));
    }

    #[test]
    fn test_neighbors_contains_each_edit_kind() {
        let candidates = neighbors("cat");
        assert!(candidates.contains("cot")); // substitution
        assert!(candidates.contains("cats")); // insertion
        assert!(candidates.contains("at")); // deletion
    }

    #[test]
    fn test_neighbors_all_satisfy_adjacency() {
        for candidate in neighbors("word") {
            assert!(
                is_adjacent("word", &candidate),
                "constructed candidate '{candidate}' not adjacent to 'word'"
            );
        }
    }

    #[test]
    fn test_neighbors_iterate_in_lexical_order() {
        let candidates: Vec<String> = neighbors("ab").into_iter().collect();
        let mut sorted = candidates.clone();
        sorted.sort();
        assert_eq!(candidates, sorted);
    }
}
