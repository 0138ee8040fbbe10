//! File-backed host services for running the lifecycle from a terminal

mod alarms;
mod notifier;
mod tabs;

pub use alarms::{Alarm, FileAlarms};
pub use notifier::{ConsoleNotifier, ShownNotification};
pub use tabs::FileTabs;

use anyhow::Context;
use std::ops::{Deref, DerefMut};
use tabintent_core::EpochMs;
use tabintent_lifecycle::LifecycleManager;
use tabintent_store::{DirLock, JsonFileStore, Paths};

pub type Manager = LifecycleManager<JsonFileStore, FileAlarms, ConsoleNotifier, FileTabs>;

/// A manager over one data directory, holding that directory's lock until
/// dropped. Every file is read after the lock is taken, so one invocation
/// never writes back a table another invocation changed meanwhile.
pub struct App {
    manager: Manager,
    _lock: DirLock,
}

impl Deref for App {
    type Target = Manager;

    fn deref(&self) -> &Manager {
        &self.manager
    }
}

impl DerefMut for App {
    fn deref_mut(&mut self) -> &mut Manager {
        &mut self.manager
    }
}

/// Lock the data directory, then open the store and host services under it.
/// Blocks while another invocation holds the directory.
pub fn open(paths: &Paths, now: EpochMs) -> anyhow::Result<App> {
    let lock = DirLock::acquire(paths.lock_file())
        .with_context(|| format!("locking {}", paths.root.display()))?;

    let store = JsonFileStore::open(paths.store_dir())
        .with_context(|| format!("opening store in {}", paths.store_dir().display()))?;
    let alarms = FileAlarms::load(paths.alarms_file(), now)
        .with_context(|| format!("reading {}", paths.alarms_file().display()))?;
    let tabs = FileTabs::load(paths.tabs_file())
        .with_context(|| format!("reading {}", paths.tabs_file().display()))?;
    let notifier = ConsoleNotifier::new(paths.notifications_log());

    Ok(App {
        manager: LifecycleManager::new(store, alarms, notifier, tabs),
        _lock: lock,
    })
}
