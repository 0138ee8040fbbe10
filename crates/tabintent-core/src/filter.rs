//! History filtering for the summary view

use crate::types::{Entry, Intent};

#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub intent: Option<Intent>,
    /// Case-insensitive substring over intent, note, title and URL
    pub query: Option<String>,
}

impl EntryFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(intent) = self.intent {
            if entry.intent != intent {
                return false;
            }
        }
        match self.query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => {
                let haystack = format!(
                    "{} {} {} {}",
                    entry.intent, entry.note, entry.title, entry.url
                )
                .to_lowercase();
                haystack.contains(&q.to_lowercase())
            }
            _ => true,
        }
    }
}

/// Matching entries, most recently seen first
pub fn filter_entries<'a>(entries: &'a [Entry], filter: &EntryFilter) -> Vec<&'a Entry> {
    let mut matched: Vec<&Entry> = entries.iter().filter(|e| filter.matches(e)).collect();
    matched.sort_by_key(|e| std::cmp::Reverse(recency(e)));
    matched
}

fn recency(entry: &Entry) -> i64 {
    if entry.last_seen_at > 0 {
        entry.last_seen_at
    } else {
        entry.created_at
    }
}
