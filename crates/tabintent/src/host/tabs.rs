//! Tab table persisted in `tabs.json`

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tabintent_core::TabId;
use tabintent_lifecycle::{Service, ServiceError, Tab, TabSource};
use tabintent_store::{read_json, write_json};

#[derive(Debug)]
pub struct FileTabs {
    path: PathBuf,
    tabs: BTreeMap<TabId, Tab>,
}

fn tab_error(e: std::io::Error) -> ServiceError {
    ServiceError::new(Service::Tabs, e.to_string())
}

impl FileTabs {
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let tabs = read_json(&path)?.unwrap_or_default();
        Ok(Self { path, tabs })
    }

    /// Insert or replace a tab. Returns the previous state.
    pub fn upsert(&mut self, tab: Tab) -> Result<Option<Tab>, ServiceError> {
        let previous = self.tabs.insert(tab.id, tab);
        self.save()?;
        Ok(previous)
    }

    pub fn remove(&mut self, id: TabId) -> Result<Option<Tab>, ServiceError> {
        let removed = self.tabs.remove(&id);
        if removed.is_some() {
            self.save()?;
        }
        Ok(removed)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.values()
    }

    fn save(&self) -> Result<(), ServiceError> {
        write_json(&self.path, &self.tabs).map_err(tab_error)
    }
}

impl TabSource for FileTabs {
    fn get_tab(&self, id: TabId) -> Result<Option<Tab>, ServiceError> {
        Ok(self.tabs.get(&id).cloned())
    }

    fn query_tabs_by_url(&self, url: &str) -> Result<Vec<Tab>, ServiceError> {
        Ok(self.tabs.values().filter(|t| t.url == url).cloned().collect())
    }

    fn close_tab(&mut self, id: TabId) -> Result<(), ServiceError> {
        if self.tabs.remove(&id).is_none() {
            return Err(ServiceError::new(Service::Tabs, format!("no tab with id {id}")));
        }
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tab(id: TabId, url: &str) -> Tab {
        Tab {
            id,
            url: url.to_string(),
            title: String::new(),
        }
    }

    #[test]
    fn test_upsert_and_query() {
        let temp = TempDir::new().unwrap();
        let mut tabs = FileTabs::load(temp.path().join("tabs.json")).unwrap();
        assert!(tabs.upsert(tab(1, "https://a.example/")).unwrap().is_none());
        tabs.upsert(tab(2, "https://a.example/")).unwrap();
        tabs.upsert(tab(3, "https://a.example/x")).unwrap();

        let previous = tabs.upsert(tab(3, "https://b.example/")).unwrap().unwrap();
        assert_eq!(previous.url, "https://a.example/x");

        let matching = tabs.query_tabs_by_url("https://a.example/").unwrap();
        assert_eq!(matching.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(tabs.get_tab(3).unwrap().unwrap().url, "https://b.example/");
    }

    #[test]
    fn test_close_persists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tabs.json");
        let mut tabs = FileTabs::load(&path).unwrap();
        tabs.upsert(tab(1, "https://a.example/")).unwrap();
        tabs.close_tab(1).unwrap();
        assert!(tabs.close_tab(1).is_err());

        let reloaded = FileTabs::load(&path).unwrap();
        assert!(reloaded.get_tab(1).unwrap().is_none());
    }
}
