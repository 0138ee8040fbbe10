//! Core types for intent capture

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Browser tab identifier
pub type TabId = u32;

/// Epoch timestamp in milliseconds
pub type EpochMs = i64;

/// Why the user opened a page. The variant order is the fixed label order
/// used for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Intent {
    #[serde(rename = "Read later")]
    ReadLater,
    #[serde(rename = "Research")]
    Research,
    #[serde(rename = "Work task")]
    WorkTask,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Just curious")]
    JustCurious,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::ReadLater,
        Intent::Research,
        Intent::WorkTask,
        Intent::Shopping,
        Intent::JustCurious,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Intent::ReadLater => "Read later",
            Intent::Research => "Research",
            Intent::WorkTask => "Work task",
            Intent::Shopping => "Shopping",
            Intent::JustCurious => "Just curious",
        }
    }

    /// Position in [`Intent::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown intent label: {0:?}")]
pub struct UnknownIntent(pub String);

impl FromStr for Intent {
    type Err = UnknownIntent;

    /// Accepts the display label in any case, with spaces, dashes or
    /// underscores between words ("Work task", "work-task", "WORK_TASK").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        Intent::ALL
            .into_iter()
            .find(|intent| intent.label().to_lowercase() == normalized)
            .ok_or_else(|| UnknownIntent(s.to_string()))
    }
}

/// Raw textual signals collected from a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSignals {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// First heading on the page
    #[serde(default, alias = "h1")]
    pub heading: String,
    #[serde(default)]
    pub url: String,
}

/// Classifier output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub intent: Intent,
    pub confidence: f64,
}

/// One captured intent record (compatible with the `intentsHistory` store value)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    pub intent: Intent,
    #[serde(default)]
    pub note: String,
    pub created_at: EpochMs,
    pub last_seen_at: EpochMs,
    #[serde(default)]
    pub reminded: bool,
    #[serde(default)]
    pub stale_notified: bool,
    #[serde(default)]
    pub last_tab_id: Option<TabId>,
}

impl Entry {
    /// Title when known, otherwise the URL
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }

    pub fn age_ms(&self, now: EpochMs) -> i64 {
        now - self.created_at
    }

    /// Set the reminder flag. Returns false if it was already set.
    pub fn mark_reminded(&mut self) -> bool {
        !std::mem::replace(&mut self.reminded, true)
    }

    /// Set the stale flag. Returns false if it was already set.
    pub fn mark_stale_notified(&mut self) -> bool {
        !std::mem::replace(&mut self.stale_notified, true)
    }
}

/// Saved/skipped counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    #[serde(default)]
    pub saved: u64,
    #[serde(default)]
    pub skipped: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> Entry {
        Entry {
            id: "e1".to_string(),
            url: "https://example.com/a".to_string(),
            title: String::new(),
            intent: Intent::Research,
            note: String::new(),
            created_at: 1_000,
            last_seen_at: 1_000,
            reminded: false,
            stale_notified: false,
            last_tab_id: Some(7),
        }
    }

    #[test]
    fn test_intent_order_matches_index() {
        for (i, intent) in Intent::ALL.iter().enumerate() {
            assert_eq!(intent.index(), i);
        }
        assert_eq!(Intent::ALL[0], Intent::ReadLater);
    }

    #[test]
    fn test_intent_from_str_variants() {
        assert_eq!("Work task".parse::<Intent>().unwrap(), Intent::WorkTask);
        assert_eq!("work-task".parse::<Intent>().unwrap(), Intent::WorkTask);
        assert_eq!("JUST_CURIOUS".parse::<Intent>().unwrap(), Intent::JustCurious);
        assert_eq!(" shopping ".parse::<Intent>().unwrap(), Intent::Shopping);
        assert!("".parse::<Intent>().is_err());
        assert!("Gaming".parse::<Intent>().is_err());
    }

    #[test]
    fn test_intent_serializes_as_label() {
        let json = serde_json::to_string(&Intent::ReadLater).unwrap();
        assert_eq!(json, "\"Read later\"");
        let parsed: Intent = serde_json::from_str("\"Just curious\"").unwrap();
        assert_eq!(parsed, Intent::JustCurious);
    }

    #[test]
    fn test_entry_flags_transition_once() {
        let mut entry = sample_entry();
        assert!(entry.mark_reminded());
        assert!(!entry.mark_reminded());
        assert!(entry.reminded);

        assert!(entry.mark_stale_notified());
        assert!(!entry.mark_stale_notified());
        assert!(entry.stale_notified);
    }

    #[test]
    fn test_entry_display_title_falls_back_to_url() {
        let mut entry = sample_entry();
        assert_eq!(entry.display_title(), "https://example.com/a");
        entry.title = "Example".to_string();
        assert_eq!(entry.display_title(), "Example");
    }

    #[test]
    fn test_entry_camel_case_shape() {
        let json = serde_json::to_value(sample_entry()).unwrap();
        assert_eq!(json["createdAt"], 1_000);
        assert_eq!(json["staleNotified"], false);
        assert_eq!(json["lastTabId"], 7);
        assert_eq!(json["intent"], "Research");
    }

    #[test]
    fn test_entry_backwards_compatible() {
        let old_json = r#"{"id":"x","url":"https://a.b","intent":"Shopping","createdAt":5,"lastSeenAt":5}"#;
        let parsed: Entry = serde_json::from_str(old_json).unwrap();
        assert!(!parsed.reminded);
        assert!(!parsed.stale_notified);
        assert_eq!(parsed.last_tab_id, None);
        assert_eq!(parsed.title, "");
    }

    #[test]
    fn test_signals_accept_h1_alias() {
        let parsed: PageSignals =
            serde_json::from_str(r#"{"title":"t","h1":"Heading","url":"https://x.y"}"#).unwrap();
        assert_eq!(parsed.heading, "Heading");
        assert_eq!(parsed.description, "");
    }
}
