//! Typeahead suggestion merging.

use std::collections::HashMap;

use crate::model::TypeaheadSuggestion;

/// Upper bound on suggestions returned to the caller.
pub const MAX_SUGGESTIONS: usize = 10;

/// Merge per-source suggestion lists: group by value, sum occurrence counts,
/// rank by summed count descending (value ascending as tie-break for a
/// deterministic order), keep the top [`MAX_SUGGESTIONS`].
pub fn merge_suggestions(lists: Vec<Vec<TypeaheadSuggestion>>) -> Vec<TypeaheadSuggestion> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for suggestion in lists.into_iter().flatten() {
        *counts.entry(suggestion.value).or_insert(0) += suggestion.occurrences;
    }

    let mut merged: Vec<TypeaheadSuggestion> = counts
        .into_iter()
        .map(|(value, occurrences)| TypeaheadSuggestion { value, occurrences })
        .collect();
    merged.sort_by(|a, b| {
        b.occurrences
            .cmp(&a.occurrences)
            .then_with(|| a.value.cmp(&b.value))
    });
    merged.truncate(MAX_SUGGESTIONS);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(value: &str, occurrences: u64) -> TypeaheadSuggestion {
        TypeaheadSuggestion {
            value: value.to_string(),
            occurrences,
        }
    }

    #[test]
    fn duplicate_values_sum_their_occurrences() {
        let merged = merge_suggestions(vec![
            vec![suggestion("jobb", 3)],
            vec![suggestion("jobb", 2)],
        ]);
        assert_eq!(merged, vec![suggestion("jobb", 5)]);
    }

    #[test]
    fn ranking_is_by_summed_count_descending() {
        let merged = merge_suggestions(vec![
            vec![suggestion("deltid", 1), suggestion("student", 4)],
            vec![suggestion("deltid", 2)],
        ]);
        assert_eq!(merged[0].value, "student");
        assert_eq!(merged[1], suggestion("deltid", 3));
    }

    #[test]
    fn output_is_capped_at_ten() {
        let many: Vec<TypeaheadSuggestion> = (0..25)
            .map(|n| suggestion(&format!("term{n:02}"), 25 - n))
            .collect();
        let merged = merge_suggestions(vec![many]);
        assert_eq!(merged.len(), MAX_SUGGESTIONS);
        assert_eq!(merged[0].occurrences, 25);
    }

    #[test]
    fn failed_source_contributes_nothing() {
        // A source error reaches the combiner as an empty list.
        let merged = merge_suggestions(vec![Vec::new(), vec![suggestion("jobb", 2)]]);
        assert_eq!(merged, vec![suggestion("jobb", 2)]);
    }
}
