//! Heuristic domain suggestions for generated names
//!
//! Availability here is a guess based on length and how contested a TLD is.
//! No network lookup happens.

use crate::types::{DomainSuggestion, GeneratedName, NameWithDomain};

/// TLDs offered for the bare name, in output order
pub const SUGGESTED_TLDS: &[&str] = &[".com", ".io", ".co", ".ai", ".app"];

/// Discovery prefixes combined with `.com`
pub const DISCOVERY_PREFIXES: &[&str] = &["get", "try", "use"];

/// Discovery suffix combined with `.com`
pub const DISCOVERY_SUFFIX: &str = "hq";

/// Bare `.io`, `.co` and `.app` names up to this length are guessed available
const SHORT_NAME_LIMIT: usize = 12;
/// `.ai` is busier, so the cut-off is tighter
const AI_NAME_LIMIT: usize = 8;

/// Lowercase and strip a name down to a usable domain label
pub fn domain_label(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Synthesize the fixed set of domain suggestions for one name.
///
/// Returns an empty list if nothing of the name survives sanitising.
pub fn suggest_domains(name: &str) -> Vec<DomainSuggestion> {
    let base = domain_label(name);
    if base.is_empty() {
        return Vec::new();
    }

    let len = base.len();
    let mut suggestions: Vec<DomainSuggestion> = SUGGESTED_TLDS
        .iter()
        .map(|&tld| DomainSuggestion {
            domain: format!("{}{}", base, tld),
            tld: tld.to_string(),
            likely_available: bare_name_available(tld, len),
        })
        .collect();

    for prefix in DISCOVERY_PREFIXES {
        suggestions.push(DomainSuggestion {
            domain: format!("{}{}.com", prefix, base),
            tld: ".com".to_string(),
            likely_available: true,
        });
    }

    suggestions.push(DomainSuggestion {
        domain: format!("{}{}.com", base, DISCOVERY_SUFFIX),
        tld: ".com".to_string(),
        likely_available: true,
    });

    suggestions
}

fn bare_name_available(tld: &str, len: usize) -> bool {
    match tld {
        ".com" => false,
        ".ai" => len <= AI_NAME_LIMIT,
        _ => len <= SHORT_NAME_LIMIT,
    }
}

/// Attach domain suggestions to each name
pub fn enrich(names: Vec<GeneratedName>) -> Vec<NameWithDomain> {
    names
        .into_iter()
        .map(|name| {
            let domains = suggest_domains(&name.name);
            NameWithDomain { name, domains }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_shape() {
        let suggestions = suggest_domains("DataHub");
        let domains: Vec<&str> = suggestions.iter().map(|s| s.domain.as_str()).collect();
        assert_eq!(
            domains,
            vec![
                "datahub.com",
                "datahub.io",
                "datahub.co",
                "datahub.ai",
                "datahub.app",
                "getdatahub.com",
                "trydatahub.com",
                "usedatahub.com",
                "datahubhq.com",
            ]
        );
        for suggestion in &suggestions {
            assert!(!suggestion.tld.is_empty());
            assert!(suggestion.domain.ends_with(&suggestion.tld));
        }
    }

    #[test]
    fn test_availability_guesses() {
        let suggestions = suggest_domains("DataHub");
        assert!(!suggestions[0].likely_available, "bare .com is assumed taken");
        assert!(suggestions[1].likely_available);
        assert!(suggestions[3].likely_available);
        assert!(suggestions[5..].iter().all(|s| s.likely_available));

        let long = suggest_domains("ExtraordinaryWidgets");
        assert!(!long[1].likely_available);
        assert!(!long[3].likely_available);
    }

    #[test]
    fn test_sanitises_name() {
        assert_eq!(domain_label("Data Hub!"), "datahub");
        assert_eq!(suggest_domains("Café 42")[0].domain, "caf42.com");
        assert!(suggest_domains("!!!").is_empty());
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(suggest_domains("Taskify"), suggest_domains("Taskify"));
    }
}
