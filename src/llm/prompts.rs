//! Prompt construction and response parsing for the naming collaborator

use crate::error::{NameForgeError, Result};
use crate::types::{CreativeName, CreativeRequest, RankedName, SeedWords};
use regex::Regex;
use serde::de::DeserializeOwned;

/// Prompt asking for categorised seed words
pub fn seed_words_prompt(concept: &str) -> String {
    format!(
        "Brainstorm seed words for naming this business concept: {}

Return ONLY a JSON object with this format:
{{
  \"core\": [\"words that directly describe the concept\"],
  \"related\": [\"adjacent ideas and metaphors\"],
  \"emotional\": [\"feelings the brand should evoke\"],
  \"action\": [\"verbs users perform\"],
  \"modifier\": [\"short adjectives or intensifiers\"]
}}

Use single lowercase words, 5 to 10 per list.",
        concept
    )
}

/// Prompt asking for invented brand names
pub fn creative_names_prompt(request: &CreativeRequest) -> String {
    format!(
        "Invent {} original {} brand names for: {}

Return ONLY a JSON array of objects with this format:
[
  {{
    \"name\": \"Brandname\",
    \"meaning\": \"what the name evokes\",
    \"style\": \"invented, metaphor, blend, ...\"
  }}
]

Names must be one word, easy to spell and pronounce, and not existing famous brands.",
        request.count, request.style, request.concept
    )
}

/// Prompt asking the collaborator to score a list of candidates
pub fn rank_names_prompt(concept: &str, names: &[String]) -> String {
    let list: Vec<String> = names.iter().map(|n| format!("- {}", n)).collect();
    format!(
        "Evaluate these candidate names for: {}

{}

Return ONLY a JSON array with one object per candidate, using the exact name as given:
[
  {{
    \"name\": \"Candidate\",
    \"score\": 0-100,
    \"reasoning\": \"one sentence on memorability, relevance and pronunciation\"
  }}
]",
        concept,
        list.join("\n")
    )
}

pub fn parse_seed_words(content: &str) -> Result<SeedWords> {
    parse_json(content, '{', '}')
}

pub fn parse_creative_names(content: &str) -> Result<Vec<CreativeName>> {
    let names: Vec<CreativeName> = parse_json(content, '[', ']')?;
    Ok(names
        .into_iter()
        .filter(|n| !n.name.trim().is_empty())
        .map(|n| CreativeName {
            name: n.name.trim().to_string(),
            ..n
        })
        .collect())
}

pub fn parse_ranked_names(content: &str) -> Result<Vec<RankedName>> {
    parse_json(content, '[', ']')
}

/// Pull the JSON payload out of a reply that may be fenced or wrapped in prose
fn extract_json(content: &str, open: char, close: char) -> Result<String> {
    let fence = Regex::new(r"(?s)```(?:json)?\s*(.*?)```")
        .map_err(|e| NameForgeError::internal(e.to_string()))?;
    let body = fence
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map_or(content, |m| m.as_str());

    let start = body.find(open);
    let end = body.rfind(close);
    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(body[start..=end].to_string()),
        _ => Err(NameForgeError::parse(
            format!("No JSON {} found in AI response", if open == '[' { "array" } else { "object" }),
            Some(content.to_string()),
        )),
    }
}

fn parse_json<T: DeserializeOwned>(content: &str, open: char, close: char) -> Result<T> {
    let json = extract_json(content, open, close)?;
    serde_json::from_str(&json).map_err(|e| {
        NameForgeError::parse(format!("Failed to parse AI response as JSON: {}", e), Some(json))
    })
}
