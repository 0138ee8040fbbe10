//! Lightweight tokenizer shared by the classifier and keyword extraction

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

static EMBEDDED_URL_RE: OnceLock<Regex> = OnceLock::new();
static STOP_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

pub const MIN_TOKEN_LEN: usize = 2;

static STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "to", "of", "in", "on", "for", "with", "as", "by", "at",
    "from", "is", "are", "was", "were", "be", "been", "it", "this", "that", "these", "those",
    "you", "your", "we", "our", "they", "their", "i", "me", "my", "how", "what", "why", "when",
    "where", "which", "who", "can", "could", "should", "would", "will", "just", "also", "more",
    "most", "new", "about", "into", "over", "under", "page", "home", "official", "site",
    "online", "learn",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_SET
        .get_or_init(|| STOP_WORDS.iter().copied().collect())
        .contains(token)
}

/// Lowercase, drop embedded `http(s)://` URLs, replace everything outside
/// `[a-z0-9]` and whitespace with a space, split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    let re = EMBEDDED_URL_RE.get_or_init(|| Regex::new(r"https?://\S+").unwrap());
    let lowered = text.to_lowercase();
    let without_urls = re.replace_all(&lowered, " ");

    let cleaned: String = without_urls
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Tokens of at least [`MIN_TOKEN_LEN`] characters that are not stop words
pub fn significant_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.len() >= MIN_TOKEN_LEN && !is_stop_word(t))
        .collect()
}
