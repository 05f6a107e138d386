//! Deterministic quality heuristic for candidate names

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

const BASE_SCORE: i32 = 50;
const MAX_SCORE: i32 = 100;

/// Per-profile scoring constants
#[derive(Debug, Clone, Copy)]
pub struct ScoringRules {
    /// Inclusive vowel/length ratio band that earns the balance bonus
    pub vowel_ratio: (f32, f32),
    /// Case-insensitive endings that earn the suffix bonus
    pub good_suffixes: &'static [&'static str],
    /// +5 for an internal capital (`DataHub`)
    pub camel_case_bonus: bool,
    /// +5 when the name starts with a vowel or one of these consonants
    pub leading_consonants: Option<&'static [char]>,
}

/// Score a candidate name into 0..=100.
///
/// Starts at 50:
/// - length 4..=12 earns +15, otherwise 3..=15 earns +10; longer than 20 costs 10
/// - vowel ratio inside the band earns +10
/// - a recognised ending earns +10, an internal capital +5 when enabled
/// - no run of four or more consonants earns +5
/// - a favoured first letter earns +5 when enabled
pub fn score(name: &str, rules: &ScoringRules) -> u8 {
    let len = name.chars().count();
    let mut total = BASE_SCORE;

    if (4..=12).contains(&len) {
        total += 15;
    } else if (3..=15).contains(&len) {
        total += 10;
    }
    if len > 20 {
        total -= 10;
    }

    if len > 0 {
        let ratio = vowel_count(name) as f32 / len as f32;
        let (low, high) = rules.vowel_ratio;
        if (low..=high).contains(&ratio) {
            total += 10;
        }
    }

    let lower = name.to_lowercase();
    if rules.good_suffixes.iter().any(|suffix| lower.ends_with(suffix)) {
        total += 10;
    }

    if rules.camel_case_bonus && has_internal_capital(name) {
        total += 5;
    }

    if longest_consonant_run(name) < 4 {
        total += 5;
    }

    if let Some(consonants) = rules.leading_consonants {
        if let Some(first) = lower.chars().next() {
            if VOWELS.contains(&first) || consonants.contains(&first) {
                total += 5;
            }
        }
    }

    total.clamp(0, MAX_SCORE) as u8
}

fn vowel_count(name: &str) -> usize {
    name.chars()
        .filter(|c| VOWELS.contains(&c.to_ascii_lowercase()))
        .count()
}

fn has_internal_capital(name: &str) -> bool {
    name.chars().skip(1).any(|c| c.is_uppercase())
}

fn longest_consonant_run(name: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in name.chars() {
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_alphabetic() && !VOWELS.contains(&lower) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::profile::{PRODUCT, STARTUP};

    #[test]
    fn test_balanced_name_with_suffix_scores_high() {
        // 50 + 15 length + 10 ratio + 10 suffix + 5 camel + 5 consonants
        assert_eq!(score("DataHub", &STARTUP.scoring), 95);
        assert!(score("DataHub", &PRODUCT.scoring) >= 80);
    }

    #[test]
    fn test_padding_past_twenty_chars_costs_points() {
        let short = score("DataHub", &STARTUP.scoring);
        let padded = score("DataHubDataHubDataHub", &STARTUP.scoring);
        assert!(padded + 10 <= short, "{} vs {}", padded, short);
    }

    #[test]
    fn test_length_bands() {
        let rules = ScoringRules {
            vowel_ratio: (2.0, 3.0),
            good_suffixes: &[],
            camel_case_bonus: false,
            leading_consonants: None,
        };
        // only length and consonant-run bonuses can apply
        assert_eq!(score("Abc", &rules), 50 + 10 + 5);
        assert_eq!(score("Abcd", &rules), 50 + 15 + 5);
        assert_eq!(score("Abababababababa", &rules), 50 + 10 + 5);
        assert_eq!(score("Ababababababababa", &rules), 50 + 5);
        assert_eq!(score("Abababababababababababa", &rules), 50 - 10 + 5);
    }

    #[test]
    fn test_consonant_run_penalty() {
        assert_eq!(longest_consonant_run("Strngth"), 7);
        assert_eq!(longest_consonant_run("Flickr"), 3);
        assert_eq!(longest_consonant_run("Cloudify"), 2);
        assert!(score("Flickr", &STARTUP.scoring) < score("Flicker", &STARTUP.scoring));
    }

    #[test]
    fn test_leading_letter_bonus_only_when_enabled() {
        let with = ScoringRules {
            leading_consonants: Some(&['b']),
            ..STARTUP.scoring
        };
        assert_eq!(score("Bolt", &with), score("Bolt", &STARTUP.scoring) + 5);
        assert_eq!(score("Wolt", &with), score("Wolt", &STARTUP.scoring));
        assert_eq!(score("Oslo", &with), score("Oslo", &STARTUP.scoring) + 5);
    }

    #[test]
    fn test_score_is_always_bounded() {
        for name in ["", "x", "Aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "Zzzzzzzzzzzzzzzzzzzzzzzz", "EasyFlowIo"] {
            assert!(score(name, &STARTUP.scoring) <= 100);
            assert!(score(name, &PRODUCT.scoring) <= 100);
        }
    }
}
