//! Shared types, settings and helpers for intent capture

mod config;
mod filter;
mod time;
mod types;
mod web;

pub use config::{ms_from_days, ms_from_minutes, Settings};
pub use filter::{filter_entries, EntryFilter};
pub use time::{now_ms, time_ago, to_datetime};
pub use types::{Analytics, Entry, EpochMs, Intent, PageSignals, Prediction, TabId, UnknownIntent};
pub use web::is_real_web_url;
