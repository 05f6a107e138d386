//! Merging, deduplication and ranking of candidate sets

use std::collections::HashSet;

use crate::types::GeneratedName;

/// Merge candidate streams into a ranked, bounded list.
///
/// Order of operations matters: threshold first, then case-insensitive
/// deduplication keeping the first occurrence, then a stable sort by score
/// (highest first), then truncation.
pub fn aggregate<I>(streams: I, min_score: u8, count: usize) -> Vec<GeneratedName>
where
    I: IntoIterator<Item = Vec<GeneratedName>>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<GeneratedName> = streams
        .into_iter()
        .flatten()
        .filter(|name| name.score >= min_score)
        .filter(|name| seen.insert(name.name.to_lowercase()))
        .collect();

    sort_by_score(&mut merged);
    merged.truncate(count);
    merged
}

/// Stable sort, highest score first
pub fn sort_by_score(names: &mut [GeneratedName]) {
    names.sort_by(|a, b| b.score.cmp(&a.score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PatternType;

    fn name(text: &str, score: u8) -> GeneratedName {
        GeneratedName {
            name: text.to_string(),
            pattern: PatternType::Compound,
            sources: Vec::new(),
            score,
            reasoning: None,
        }
    }

    fn names(list: &[GeneratedName]) -> Vec<&str> {
        list.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_case_insensitively() {
        let ranked = aggregate(
            vec![vec![name("DataHub", 70)], vec![name("datahub", 90), name("Other", 60)]],
            0,
            10,
        );
        assert_eq!(names(&ranked), vec!["DataHub", "Other"]);
        assert_eq!(ranked[0].score, 70);
    }

    #[test]
    fn test_threshold_applies_before_dedup() {
        // the low-scoring first copy is filtered out, so the second survives
        let ranked = aggregate(vec![vec![name("Nova", 40), name("NOVA", 80)]], 50, 10);
        assert_eq!(names(&ranked), vec!["NOVA"]);
    }

    #[test]
    fn test_sort_is_stable_and_descending() {
        let ranked = aggregate(
            vec![vec![name("A1", 60), name("B1", 80), name("A2", 60), name("B2", 80)]],
            0,
            10,
        );
        assert_eq!(names(&ranked), vec!["B1", "B2", "A1", "A2"]);
    }

    #[test]
    fn test_truncates_to_count() {
        let stream: Vec<GeneratedName> = (0..30).map(|i| name(&format!("N{}", i), 50 + i as u8)).collect();
        let ranked = aggregate(vec![stream], 0, 5);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].score, 79);
    }

    #[test]
    fn test_empty_result_is_valid() {
        assert!(aggregate(vec![vec![name("Low", 10)]], 90, 5).is_empty());
        assert!(aggregate(Vec::<Vec<GeneratedName>>::new(), 0, 5).is_empty());
        assert!(aggregate(vec![vec![name("Any", 90)]], 0, 0).is_empty());
    }
}
