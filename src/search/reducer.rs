//! Cross-category length compatibility
//!
//! A word is only worth showing if some word on the other side has exactly
//! the remaining length. Both sides are filtered against the length sets of
//! the unreduced inputs in a single pass.

use std::collections::HashSet;

use crate::catalog::WordEntry;

/// Distinct letter counts present in a candidate list
pub fn length_set(words: &[&WordEntry]) -> HashSet<usize> {
    words.iter().map(|w| w.letter_count()).collect()
}

/// Drop adjectives and nouns that have no complementary-length partner.
///
/// Because "a pairs with n" is symmetric in the lengths, one pass already
/// leaves every survivor with a surviving partner.
pub fn reduce<'c>(
    adjectives: Vec<&'c WordEntry>,
    nouns: Vec<&'c WordEntry>,
    total_length: usize,
) -> (Vec<&'c WordEntry>, Vec<&'c WordEntry>) {
    let noun_lengths = length_set(&nouns);
    let adjective_lengths = length_set(&adjectives);

    let has_partner = |word: &WordEntry, partner_lengths: &HashSet<usize>| {
        total_length
            .checked_sub(word.letter_count())
            .map_or(false, |rest| partner_lengths.contains(&rest))
    };

    let adjectives = adjectives
        .into_iter()
        .filter(|a| has_partner(*a, &noun_lengths))
        .collect();
    let nouns = nouns
        .into_iter()
        .filter(|n| has_partner(*n, &adjective_lengths))
        .collect();

    (adjectives, nouns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(words: &[&str]) -> Vec<WordEntry> {
        words.iter().map(|w| WordEntry::new(*w)).collect()
    }

    fn names<'a>(words: &[&'a WordEntry]) -> Vec<&'a str> {
        words.iter().map(|w| w.surface_form()).collect()
    }

    #[test]
    fn test_reduce_keeps_only_pairable_lengths() {
        let adjectives = entries(&["FUZZY", "BIG", "FIZZY"]);
        let nouns = entries(&["BALL", "BELL", "LANTERN"]);

        let (adj, noun) = reduce(adjectives.iter().collect(), nouns.iter().collect(), 9);
        assert_eq!(names(&adj), vec!["FUZZY", "FIZZY"]);
        assert_eq!(names(&noun), vec!["BALL", "BELL"]);
    }

    #[test]
    fn test_empty_side_empties_both() {
        let adjectives = entries(&["FUZZY", "HAZY"]);
        let (adj, noun) = reduce(adjectives.iter().collect(), Vec::new(), 9);
        assert!(adj.is_empty());
        assert!(noun.is_empty());
    }

    #[test]
    fn test_full_length_word_never_pairs() {
        let adjectives = entries(&["ABCDEFGHI"]);
        let nouns = entries(&["ABCDEFGHI"]);
        let (adj, noun) = reduce(adjectives.iter().collect(), nouns.iter().collect(), 9);
        assert!(adj.is_empty());
        assert!(noun.is_empty());
    }

    #[test]
    fn test_survivors_have_surviving_partners() {
        let adjectives = entries(&["AB", "ABC", "ABCD", "ABCDEF"]);
        let nouns = entries(&["XY", "XYZ", "XYZW", "XYZWVU", "XYZWV"]);
        let total = 7;

        let (adj, noun) = reduce(adjectives.iter().collect(), nouns.iter().collect(), total);
        let noun_lengths = length_set(&noun);
        let adj_lengths = length_set(&adj);
        for a in &adj {
            assert!(noun_lengths.contains(&(total - a.letter_count())));
        }
        for n in &noun {
            assert!(adj_lengths.contains(&(total - n.letter_count())));
        }
        assert_eq!(names(&adj), vec!["AB", "ABC", "ABCD"]);
        assert_eq!(names(&noun), vec!["XYZ", "XYZW", "XYZWV"]);
    }
}
