//! Typed collections over the key-value store
//!
//! Every collection is read and written whole under its own key.

use std::collections::BTreeMap;
use tabintent_core::{Analytics, Entry, Settings, TabId};
use tabintent_store::{KeyValueStore, StoreError};

pub const ENTRIES_KEY: &str = "intentsHistory";
pub const TAB_MAP_KEY: &str = "tabToEntry";
pub const SUPPRESSED_KEY: &str = "doNotAskAgain";
pub const SETTINGS_KEY: &str = "settings";
pub const ANALYTICS_KEY: &str = "analytics";

pub type TabMap = BTreeMap<TabId, String>;
pub type SuppressionMap = BTreeMap<String, bool>;

#[derive(Debug)]
pub struct Repository<S> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn entries(&self) -> Result<Vec<Entry>, StoreError> {
        Ok(self.store.get_as(ENTRIES_KEY)?.unwrap_or_default())
    }

    pub fn save_entries(&mut self, entries: &[Entry]) -> Result<(), StoreError> {
        self.store.set_as(ENTRIES_KEY, &entries)
    }

    pub fn tab_map(&self) -> Result<TabMap, StoreError> {
        Ok(self.store.get_as(TAB_MAP_KEY)?.unwrap_or_default())
    }

    pub fn save_tab_map(&mut self, map: &TabMap) -> Result<(), StoreError> {
        self.store.set_as(TAB_MAP_KEY, map)
    }

    pub fn suppressed(&self) -> Result<SuppressionMap, StoreError> {
        Ok(self.store.get_as(SUPPRESSED_KEY)?.unwrap_or_default())
    }

    pub fn save_suppressed(&mut self, map: &SuppressionMap) -> Result<(), StoreError> {
        self.store.set_as(SUPPRESSED_KEY, map)
    }

    /// Stored settings without defaults applied
    pub fn stored_settings(&self) -> Result<Option<Settings>, StoreError> {
        self.store.get_as(SETTINGS_KEY)
    }

    /// Stored settings merged over the defaults
    pub fn settings(&self) -> Result<Settings, StoreError> {
        Ok(self.stored_settings()?.unwrap_or_default())
    }

    pub fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.store.set_as(SETTINGS_KEY, settings)
    }

    pub fn stored_analytics(&self) -> Result<Option<Analytics>, StoreError> {
        self.store.get_as(ANALYTICS_KEY)
    }

    pub fn analytics(&self) -> Result<Analytics, StoreError> {
        Ok(self.stored_analytics()?.unwrap_or_default())
    }

    pub fn save_analytics(&mut self, analytics: &Analytics) -> Result<(), StoreError> {
        self.store.set_as(ANALYTICS_KEY, analytics)
    }

    /// Wipe entries, tab bindings and suppressions; zero the counters
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.store
            .remove(&[ENTRIES_KEY, TAB_MAP_KEY, SUPPRESSED_KEY])?;
        self.save_analytics(&Analytics::default())
    }
}
