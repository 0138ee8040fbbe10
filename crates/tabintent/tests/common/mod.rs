#![allow(dead_code)]

use tabintent::host::{self, App};
use tabintent_core::{EpochMs, TabId};
use tabintent_lifecycle::CaptureRequest;
use tabintent_store::Paths;
use tempfile::TempDir;

pub const T0: EpochMs = 1_700_000_000_000;
pub const HOUR_MS: EpochMs = 60 * 60 * 1000;
pub const DAY_MS: EpochMs = 24 * HOUR_MS;

pub fn workspace() -> (TempDir, Paths) {
    let temp = TempDir::new().unwrap();
    let paths = Paths::at(temp.path());
    (temp, paths)
}

/// Open the app the way each CLI invocation does
pub fn open_at(paths: &Paths, now: EpochMs) -> App {
    let mut app = host::open(paths, now).unwrap();
    *app.notifier_mut() = host::ConsoleNotifier::new(paths.notifications_log()).quiet();
    app
}

pub fn capture(app: &mut App, url: &str, label: &str, tab: Option<TabId>, now: EpochMs) -> String {
    let settings = app.settings().unwrap();
    let request = CaptureRequest {
        url: url.to_string(),
        title: format!("Page at {url}"),
        label: label.to_string(),
        note: String::new(),
    };
    app.capture(request, tab, &settings, now).unwrap().entry.id
}

/// Fire whatever is due, like `tabintent tick --at <now>`
pub fn tick(paths: &Paths, now: EpochMs) -> Vec<String> {
    let mut app = open_at(paths, now);
    let due = app.alarms_mut().take_due(now).unwrap();
    let settings = app.settings().unwrap();
    for name in &due {
        app.on_alarm(name, &settings, now).unwrap();
    }
    due
}
