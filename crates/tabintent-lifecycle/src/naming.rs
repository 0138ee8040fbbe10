//! Alarm names, notification ids and notification text

use crate::services::Notification;
use tabintent_core::Entry;

pub const STALE_SWEEP_ALARM: &str = "staleSweep";
pub const STALE_SWEEP_PERIOD_MINUTES: u32 = 360;

const REMIND_ALARM_PREFIX: &str = "remind:";
const REMINDER_NOTIFICATION_PREFIX: &str = "reminder:";
const STALE_NOTIFICATION_PREFIX: &str = "stale:";

pub const CLOSE_TAB_ACTION: usize = 0;
pub const KEEP_ACTION: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlarmKind<'a> {
    Reminder { entry_id: &'a str },
    StaleSweep,
    Unknown,
}

pub fn reminder_alarm(entry_id: &str) -> String {
    format!("{REMIND_ALARM_PREFIX}{entry_id}")
}

pub fn parse_alarm(name: &str) -> AlarmKind<'_> {
    if name == STALE_SWEEP_ALARM {
        return AlarmKind::StaleSweep;
    }
    match name.strip_prefix(REMIND_ALARM_PREFIX) {
        Some(entry_id) if !entry_id.is_empty() => AlarmKind::Reminder { entry_id },
        _ => AlarmKind::Unknown,
    }
}

pub fn reminder_notification_id(entry_id: &str) -> String {
    format!("{REMINDER_NOTIFICATION_PREFIX}{entry_id}")
}

pub fn stale_notification_id(entry_id: &str) -> String {
    format!("{STALE_NOTIFICATION_PREFIX}{entry_id}")
}

/// Entry id of a stale notification, `None` for any other id
pub fn parse_stale_notification(id: &str) -> Option<&str> {
    id.strip_prefix(STALE_NOTIFICATION_PREFIX)
        .filter(|entry_id| !entry_id.is_empty())
}

pub fn reminder_notification(entry: &Entry) -> Notification {
    let note = entry.note.trim();
    let note_line = if note.is_empty() {
        "No note was added.".to_string()
    } else {
        format!("You wrote: “{note}”")
    };

    Notification {
        title: "TabIntent reminder".to_string(),
        body: format!(
            "You opened this to: {}\n{}\n\n{}",
            entry.intent,
            entry.display_title(),
            note_line
        ),
        actions: Vec::new(),
    }
}

pub fn stale_notification(entry: &Entry) -> Notification {
    Notification {
        title: "TabIntent: stale tab?".to_string(),
        body: format!(
            "This tab is stale: {}\nIntent: {}",
            entry.display_title(),
            entry.intent
        ),
        actions: vec!["Close tab (if open)".to_string(), "Keep".to_string()],
    }
}
