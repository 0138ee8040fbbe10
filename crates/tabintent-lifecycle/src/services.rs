//! Interfaces to the host: alarms, notifications and tabs

use crate::error::ServiceError;
use serde::{Deserialize, Serialize};
use tabintent_core::{EpochMs, TabId};

/// Named timers that fire back into [`crate::LifecycleManager::on_alarm`]
pub trait AlarmScheduler {
    /// Create or replace a one-shot alarm
    fn schedule_once(&mut self, name: &str, at: EpochMs) -> Result<(), ServiceError>;

    /// Create or replace a recurring alarm
    fn schedule_recurring(&mut self, name: &str, period_minutes: u32) -> Result<(), ServiceError>;

    /// Returns whether an alarm with that name existed
    fn cancel(&mut self, name: &str) -> Result<bool, ServiceError>;
}

/// A user-facing notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

pub trait Notifier {
    fn show(&mut self, id: &str, notification: &Notification) -> Result<(), ServiceError>;
}

/// A live browser tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub url: String,
    #[serde(default)]
    pub title: String,
}

pub trait TabSource {
    fn get_tab(&self, id: TabId) -> Result<Option<Tab>, ServiceError>;

    /// Open tabs whose URL equals `url` exactly
    fn query_tabs_by_url(&self, url: &str) -> Result<Vec<Tab>, ServiceError>;

    fn close_tab(&mut self, id: TabId) -> Result<(), ServiceError>;
}
