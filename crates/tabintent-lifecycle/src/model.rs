//! Requests and outcomes exchanged with the capture and summary surfaces

use serde::{Deserialize, Serialize};
use tabintent_core::{Analytics, Entry, EpochMs, Settings};

/// Maximum stored note length, in characters
pub const NOTE_MAX_LEN: usize = 120;

/// User confirmation of a label for a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRequest {
    pub url: String,
    #[serde(default)]
    pub title: String,
    /// Intent label as shown to the user, e.g. "Work task"
    pub label: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureStatus {
    pub already_bound_for_this_tab: bool,
    pub suppressed: bool,
}

impl CaptureStatus {
    /// Whether the capture prompt should be shown
    pub fn should_prompt(&self) -> bool {
        !self.already_bound_for_this_tab && !self.suppressed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOutcome {
    pub entry: Entry,
    pub analytics: Analytics,
    /// When the reminder alarm was scheduled for, if reminders are on
    pub reminder_at: Option<EpochMs>,
}

/// Navigation notification for a tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabChange {
    /// New URL when the navigation changed it
    pub url: Option<String>,
    /// The tab finished loading
    pub complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderOutcome {
    /// Notification shown and flag set
    Sent,
    /// Reminders disabled: nothing shown, flag still consumed
    Suppressed,
    AlreadyReminded,
    /// No entry with that id
    Missing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub enabled: bool,
    /// Entries notified on this run
    pub notified: Vec<String>,
    /// Notifications that could not be shown; retried on a later run
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlarmOutcome {
    Reminder(ReminderOutcome),
    Sweep(SweepReport),
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationOutcome {
    Closed { tabs: usize },
    /// Close requested but no matching tab was open
    NotOpen,
    Kept,
    /// Not a stale notification, unknown action, or entry gone
    Ignored,
}

/// Everything the summary view shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub entries: Vec<Entry>,
    pub analytics: Analytics,
    pub settings: Settings,
}
