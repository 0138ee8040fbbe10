//! User-facing settings for reminders and stale suggestions

use serde::{Deserialize, Serialize};

pub const DEFAULT_REMIND_AFTER_MINUTES: u32 = 120;
pub const DEFAULT_STALE_AFTER_DAYS: u32 = 2;

/// Settings snapshot (compatible with the `settings` store value).
///
/// Missing fields deserialize to their defaults, so a stored partial
/// object behaves as an override merged over [`Settings::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Delay between capture and the reminder notification
    pub remind_after_minutes: u32,

    /// Age after which an entry counts as stale
    pub stale_after_days: u32,

    /// Reminder notifications toggle
    pub enable_reminders: bool,

    /// Stale-tab notifications toggle
    pub enable_stale_suggestions: bool,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            remind_after_minutes: DEFAULT_REMIND_AFTER_MINUTES,
            stale_after_days: DEFAULT_STALE_AFTER_DAYS,
            enable_reminders: true,
            enable_stale_suggestions: true,
        }
    }

    /// Replace zero durations with the defaults
    pub fn sanitized(mut self) -> Self {
        if self.remind_after_minutes == 0 {
            self.remind_after_minutes = DEFAULT_REMIND_AFTER_MINUTES;
        }
        if self.stale_after_days == 0 {
            self.stale_after_days = DEFAULT_STALE_AFTER_DAYS;
        }
        self
    }

    pub fn remind_after_ms(&self) -> i64 {
        ms_from_minutes(self.remind_after_minutes)
    }

    pub fn stale_after_ms(&self) -> i64 {
        ms_from_days(self.stale_after_days)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

pub fn ms_from_minutes(minutes: u32) -> i64 {
    i64::from(minutes) * 60 * 1000
}

pub fn ms_from_days(days: u32) -> i64 {
    i64::from(days) * 24 * 60 * 60 * 1000
}
