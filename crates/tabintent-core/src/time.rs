//! Epoch-millisecond helpers

use crate::types::EpochMs;
use chrono::{DateTime, Utc};

pub fn now_ms() -> EpochMs {
    Utc::now().timestamp_millis()
}

pub fn to_datetime(ts: EpochMs) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ts)
}

/// Coarse relative age: `3d ago`, `5h ago`, `12m ago` or `just now`
pub fn time_ago(ts: EpochMs, now: EpochMs) -> String {
    let elapsed = chrono::Duration::milliseconds(now - ts);
    let days = elapsed.num_days();
    let hours = elapsed.num_hours();
    let minutes = elapsed.num_minutes();

    if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if minutes > 0 {
        format!("{minutes}m ago")
    } else {
        "just now".to_string()
    }
}
