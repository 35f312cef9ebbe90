//! Find and classify URLs in pasted free text.
//!
//! Editors often paste a whole announcement or lesson description
//! rather than a bare link. The scanner pulls every HTTP/HTTPS URL out
//! of such text, handling markdown links, wrapped tokens and trailing
//! punctuation, and runs each hit through the classifier.

use std::collections::HashSet;

use serde::Serialize;
use url::Url;

use crate::classifier::{Classification, classify};

/// One URL found in scanned text, paired with its classification.
#[derive(Debug, Clone, Serialize)]
pub struct ScannedLink {
    pub url: String,
    pub classification: Classification,
}

/// Scan text for HTTP/HTTPS URLs and classify each one. Duplicates
/// are dropped; first-appearance order is kept.
#[must_use]
pub fn scan_text(text: &str) -> Vec<ScannedLink> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for token in text.split_whitespace() {
        let Some(candidate) = candidate_url(token) else {
            continue;
        };
        let Some(parsed) = parse_http_url(&candidate) else {
            continue;
        };
        if seen.insert(parsed.to_string()) {
            links.push(ScannedLink {
                classification: classify(Some(&candidate)),
                url: candidate,
            });
        }
    }

    links
}

/// Pull a URL candidate out of one whitespace-delimited token.
fn candidate_url(token: &str) -> Option<String> {
    // markdown link: the URL sits between "](" and ")"
    if let Some(start) = token.find("](")
        && let Some(end) = token[start..].find(')')
    {
        return Some(token[start + 2..start + end].to_string());
    }

    let stripped = token
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(token);

    let stripped = stripped
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(stripped);

    let stripped = stripped.trim_end_matches(['.', ',', ';', '!', '?', ')']);

    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

fn parse_http_url(candidate: &str) -> Option<Url> {
    let url = Url::parse(candidate).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}
