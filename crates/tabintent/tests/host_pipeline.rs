mod common;

use common::*;
use serial_test::serial;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tabintent::host::{self, ConsoleNotifier, FileAlarms, FileTabs};
use tabintent_lifecycle::{NotificationOutcome, Tab, TabSource, STALE_SWEEP_ALARM};
use tabintent_store::{DirLock, Paths, HOME_ENV};

#[test]
fn test_capture_remind_sweep_close() {
    let (_temp, paths) = workspace();

    let mut app = open_at(&paths, T0);
    app.install().unwrap();
    let id = capture(&mut app, "https://github.com/foo/bar", "Work task", Some(5), T0);
    app.tabs_mut()
        .upsert(Tab {
            id: 5,
            url: "https://github.com/foo/bar".to_string(),
            title: String::new(),
        })
        .unwrap();
    drop(app);

    // reminder after two hours, sweep first runs after six
    assert_eq!(tick(&paths, T0 + 2 * HOUR_MS), vec![format!("remind:{id}")]);
    assert_eq!(tick(&paths, T0 + 6 * HOUR_MS), vec![STALE_SWEEP_ALARM.to_string()]);

    // not stale yet at the sweep just before two days
    assert_eq!(tick(&paths, T0 + 42 * HOUR_MS), vec![STALE_SWEEP_ALARM.to_string()]);
    assert_eq!(tick(&paths, T0 + 48 * HOUR_MS), vec![STALE_SWEEP_ALARM.to_string()]);

    let history = ConsoleNotifier::new(paths.notifications_log())
        .history()
        .unwrap();
    let ids: Vec<&str> = history.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec![format!("reminder:{id}"), format!("stale:{id}")]);

    let mut app = open_at(&paths, T0 + 48 * HOUR_MS);
    let outcome = app
        .on_notification_action(&format!("stale:{id}"), 0)
        .unwrap();
    assert_eq!(outcome, NotificationOutcome::Closed { tabs: 1 });
    drop(app);

    let tabs = FileTabs::load(paths.tabs_file()).unwrap();
    assert!(tabs.get_tab(5).unwrap().is_none());
}

#[test]
fn test_clear_cancels_file_alarms() {
    let (_temp, paths) = workspace();
    let mut app = open_at(&paths, T0);
    app.install().unwrap();
    capture(&mut app, "https://a.example/", "Research", None, T0);
    capture(&mut app, "https://b.example/", "Shopping", None, T0);
    drop(app);
    assert_eq!(FileAlarms::load(paths.alarms_file(), T0).unwrap().len(), 3);

    open_at(&paths, T0).clear_all().unwrap();

    let alarms = FileAlarms::load(paths.alarms_file(), T0).unwrap();
    assert_eq!(alarms.len(), 1);
    assert!(alarms.get(STALE_SWEEP_ALARM).is_some());
    assert!(tick(&paths, T0 + 3 * HOUR_MS).is_empty());
}

#[test]
fn test_settings_changes_apply_to_later_captures() {
    let (_temp, paths) = workspace();
    let mut app = open_at(&paths, T0);
    let mut settings = app.settings().unwrap();
    settings.enable_reminders = false;
    app.update_settings(settings).unwrap();
    capture(&mut app, "https://a.example/", "Read later", None, T0);
    drop(app);

    assert!(FileAlarms::load(paths.alarms_file(), T0).unwrap().is_empty());
    assert!(tick(&paths, T0 + 10 * DAY_MS).is_empty());
}

#[test]
fn test_overlapping_invocations_do_not_lose_alarms() {
    let (_temp, paths) = workspace();
    open_at(&paths, T0).install().unwrap();

    // `tick` holds the directory while a `capture` starts in parallel
    let mut ticking = open_at(&paths, T0 + 400 * 60 * 1000);

    let (done_tx, done_rx) = mpsc::channel();
    let capture_paths = paths.clone();
    let capturing = thread::spawn(move || {
        let mut app = open_at(&capture_paths, T0);
        let id = capture(&mut app, "https://a.example/", "Research", None, T0);
        done_tx.send(()).unwrap();
        id
    });

    assert!(
        done_rx.recv_timeout(Duration::from_millis(200)).is_err(),
        "capture must wait for the directory lock"
    );
    let fired = ticking.alarms_mut().take_due(T0 + 400 * 60 * 1000).unwrap();
    assert_eq!(fired, vec![STALE_SWEEP_ALARM.to_string()]);
    drop(ticking);

    let id = capturing.join().unwrap();
    let alarms = FileAlarms::load(paths.alarms_file(), T0).unwrap();
    assert!(alarms.get(&format!("remind:{id}")).is_some(), "reminder alarm lost");
    assert!(alarms.get(STALE_SWEEP_ALARM).is_some());
}

#[test]
fn test_second_invocation_sees_locked_directory() {
    let (_temp, paths) = workspace();
    let held = open_at(&paths, T0);
    assert!(DirLock::try_acquire(paths.lock_file()).unwrap().is_none());
    drop(held);
    assert!(DirLock::try_acquire(paths.lock_file()).unwrap().is_some());
}

#[test]
#[serial]
fn test_data_dir_from_environment() {
    let (temp, _) = workspace();
    std::env::set_var(HOME_ENV, temp.path());
    let paths = Paths::new().unwrap();
    std::env::remove_var(HOME_ENV);

    let mut app = host::open(&paths, T0).unwrap();
    app.skip().unwrap();
    assert!(temp.path().join("store").join("analytics.json").exists());
}
