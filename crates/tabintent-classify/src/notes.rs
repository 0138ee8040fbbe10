//! Keyword extraction and note synthesis

use crate::tokenize::significant_tokens;
use std::collections::HashMap;
use tabintent_core::{Intent, PageSignals};

pub const NOTE_MAX_CHARS: usize = 90;
pub const NOTE_KEYWORDS: usize = 5;
const LONG_TERM_LEN: usize = 7;
const LONG_TERM_WEIGHT: f64 = 1.25;
const PLACEHOLDER_TOPIC: &str = "this page";

/// Most salient terms from title, heading and description (URL excluded).
///
/// Score is term frequency, weighted up for terms of 7+ characters. Ties
/// keep first-seen order.
pub fn extract_keywords(signals: &PageSignals, max_words: usize) -> Vec<String> {
    let text = format!(
        "{} {} {}",
        signals.title, signals.heading, signals.description
    );

    let mut order: Vec<String> = Vec::new();
    let mut freq: HashMap<String, usize> = HashMap::new();
    for token in significant_tokens(&text) {
        let count = freq.entry(token.clone()).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    let mut scored: Vec<(String, f64)> = order
        .into_iter()
        .map(|term| {
            let weight = if term.len() >= LONG_TERM_LEN {
                LONG_TERM_WEIGHT
            } else {
                1.0
            };
            let score = freq[&term] as f64 * weight;
            (term, score)
        })
        .collect();

    // sort_by is stable, so equal scores stay in first-seen order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(max_words);
    scored.into_iter().map(|(term, _)| term).collect()
}

pub fn note_prefix(intent: Intent) -> &'static str {
    match intent {
        Intent::WorkTask => "Work: follow up on ",
        Intent::Research => "Research: ",
        Intent::Shopping => "Compare options: ",
        Intent::ReadLater => "Read later: ",
        Intent::JustCurious => "Revisit: ",
    }
}

/// Short note: label prefix + top keywords (or title), at most 90 chars
pub fn synthesize_note(intent: Intent, signals: &PageSignals) -> String {
    let keywords = extract_keywords(signals, NOTE_KEYWORDS);
    let topic = if !keywords.is_empty() {
        keywords.join(" ")
    } else {
        let clean_title = signals.title.split_whitespace().collect::<Vec<_>>().join(" ");
        if clean_title.is_empty() {
            PLACEHOLDER_TOPIC.to_string()
        } else {
            clean_title
        }
    };

    format!("{}{}", note_prefix(intent), topic)
        .chars()
        .take(NOTE_MAX_CHARS)
        .collect()
}
