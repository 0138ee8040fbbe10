#![allow(dead_code)]

use serde_json::Value;
use std::collections::BTreeMap;
use tabintent_core::{EpochMs, PageSignals, Settings, TabId};
use tabintent_lifecycle::{
    AlarmScheduler, CaptureRequest, LifecycleManager, Notification, Notifier, Service,
    ServiceError, Tab, TabSource,
};
use tabintent_store::{KeyValueStore, MemoryStore, StoreError};

pub const T0: EpochMs = 1_700_000_000_000;
pub const HOUR_MS: EpochMs = 60 * 60 * 1000;
pub const DAY_MS: EpochMs = 24 * HOUR_MS;

#[derive(Debug, Default)]
pub struct RecordingAlarms {
    pub once: BTreeMap<String, EpochMs>,
    pub recurring: BTreeMap<String, u32>,
    pub fail: bool,
}

impl AlarmScheduler for RecordingAlarms {
    fn schedule_once(&mut self, name: &str, at: EpochMs) -> Result<(), ServiceError> {
        if self.fail {
            return Err(ServiceError::new(Service::Alarms, "scheduler offline"));
        }
        self.once.insert(name.to_string(), at);
        Ok(())
    }

    fn schedule_recurring(&mut self, name: &str, period_minutes: u32) -> Result<(), ServiceError> {
        if self.fail {
            return Err(ServiceError::new(Service::Alarms, "scheduler offline"));
        }
        self.recurring.insert(name.to_string(), period_minutes);
        Ok(())
    }

    fn cancel(&mut self, name: &str) -> Result<bool, ServiceError> {
        if self.fail {
            return Err(ServiceError::new(Service::Alarms, "scheduler offline"));
        }
        Ok(self.once.remove(name).is_some() || self.recurring.remove(name).is_some())
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub shown: Vec<(String, Notification)>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn ids(&self) -> Vec<&str> {
        self.shown.iter().map(|(id, _)| id.as_str()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&mut self, id: &str, notification: &Notification) -> Result<(), ServiceError> {
        if self.fail {
            return Err(ServiceError::new(Service::Notifications, "permission denied"));
        }
        self.shown.push((id.to_string(), notification.clone()));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeTabs {
    pub open: BTreeMap<TabId, Tab>,
    pub closed: Vec<TabId>,
    pub fail_lookup: bool,
    /// Tabs that stay open when asked to close.
    pub refuse_close: Vec<TabId>,
}

impl FakeTabs {
    pub fn open_tab(&mut self, id: TabId, url: &str) {
        self.open.insert(
            id,
            Tab {
                id,
                url: url.to_string(),
                title: String::new(),
            },
        );
    }
}

impl TabSource for FakeTabs {
    fn get_tab(&self, id: TabId) -> Result<Option<Tab>, ServiceError> {
        if self.fail_lookup {
            return Err(ServiceError::new(Service::Tabs, "no such tab"));
        }
        Ok(self.open.get(&id).cloned())
    }

    fn query_tabs_by_url(&self, url: &str) -> Result<Vec<Tab>, ServiceError> {
        Ok(self.open.values().filter(|t| t.url == url).cloned().collect())
    }

    fn close_tab(&mut self, id: TabId) -> Result<(), ServiceError> {
        if self.refuse_close.contains(&id) {
            return Err(ServiceError::new(Service::Tabs, format!("tab {id} refused to close")));
        }
        if self.open.remove(&id).is_none() {
            return Err(ServiceError::new(Service::Tabs, format!("tab {id} not open")));
        }
        self.closed.push(id);
        Ok(())
    }
}

/// Store that refuses every operation
#[derive(Debug, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn set(&mut self, _key: &str, _value: Value) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn remove(&mut self, _keys: &[&str]) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }
}

pub type TestManager = LifecycleManager<MemoryStore, RecordingAlarms, RecordingNotifier, FakeTabs>;

pub fn manager() -> TestManager {
    LifecycleManager::new(
        MemoryStore::new(),
        RecordingAlarms::default(),
        RecordingNotifier::default(),
        FakeTabs::default(),
    )
}

pub fn request(url: &str, label: &str) -> CaptureRequest {
    CaptureRequest {
        url: url.to_string(),
        title: "Fix issue #12".to_string(),
        label: label.to_string(),
        note: String::new(),
    }
}

pub fn github_signals() -> PageSignals {
    PageSignals {
        title: "Fix issue #12".to_string(),
        description: "Pull request review for the parser".to_string(),
        heading: "Fix issue #12".to_string(),
        url: "https://github.com/foo/bar/issues/12".to_string(),
    }
}

pub fn settings() -> Settings {
    Settings::new()
}
