//! Capture, tab tracking, reminders and stale-tab sweeps for saved intents

pub mod error;
pub mod manager;
pub mod model;
pub mod naming;
pub mod repo;
pub mod services;

pub use error::{LifecycleError, Result, Service, ServiceError};
pub use manager::LifecycleManager;
pub use model::{
    AlarmOutcome, CaptureOutcome, CaptureRequest, CaptureStatus, NotificationOutcome,
    ReminderOutcome, Summary, SweepReport, TabChange, NOTE_MAX_LEN,
};
pub use naming::{STALE_SWEEP_ALARM, STALE_SWEEP_PERIOD_MINUTES};
pub use repo::Repository;
pub use services::{AlarmScheduler, Notification, Notifier, Tab, TabSource};
