//! Per-document term counting.

use std::collections::HashMap;

use crate::types::TermStat;

/// Group words by exact text and compute each term's frequency.
///
/// The frequency is `occurrences / distinct_terms`, where `distinct_terms`
/// is the number of different words in the input, not the total word count.
/// Terms come out in order of first appearance.
pub fn count_terms<'a, I>(words: I) -> Vec<TermStat>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, u32)> = Vec::new();

    for word in words {
        match slots.get(word) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    let distinct = counts.len() as f64;
    counts
        .into_iter()
        .map(|(term, occurrences)| TermStat {
            term: term.to_string(),
            occurrences,
            term_frequency: occurrences as f64 / distinct,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_divides_by_distinct_terms() {
        let stats = count_terms(["a", "b", "a", "a"]);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].term, "a");
        assert_eq!(stats[0].occurrences, 3);
        assert_eq!(stats[0].term_frequency, 1.5);
        assert_eq!(stats[1].term, "b");
        assert_eq!(stats[1].occurrences, 1);
        assert_eq!(stats[1].term_frequency, 0.5);
    }

    #[test]
    fn test_first_appearance_order() {
        let stats = count_terms(["sat", "the", "cat", "the"]);
        let terms: Vec<&str> = stats.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(terms, vec!["sat", "the", "cat"]);
    }

    #[test]
    fn test_case_sensitive_grouping() {
        let stats = count_terms(["Cat", "cat"]);
        assert_eq!(stats.len(), 2);
        assert!(stats.iter().all(|s| s.occurrences == 1));
    }

    #[test]
    fn test_empty_input() {
        assert!(count_terms(std::iter::empty()).is_empty());
    }
}
