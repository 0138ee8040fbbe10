//! URL scope checks

/// True when `url` parses and its scheme is exactly `http` or `https`
pub fn is_real_web_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    match url::Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
