//! Path resolution for the local data directory

use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "TABINTENT_HOME";

/// Resolves standard paths under the data directory
#[derive(Debug, Clone)]
pub struct Paths {
    pub root: PathBuf,
}

impl Paths {
    /// `$TABINTENT_HOME` when set, otherwise `~/.tabintent`
    pub fn new() -> std::io::Result<Self> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::at(PathBuf::from(dir)));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self::at(home.join(".tabintent")))
    }

    pub fn at(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory holding one JSON file per store key
    pub fn store_dir(&self) -> PathBuf {
        self.root.join("store")
    }

    pub fn alarms_file(&self) -> PathBuf {
        self.root.join("alarms.json")
    }

    pub fn tabs_file(&self) -> PathBuf {
        self.root.join("tabs.json")
    }

    pub fn notifications_log(&self) -> PathBuf {
        self.root.join("notifications.jsonl")
    }

    /// Held exclusively by whichever process is mutating the directory
    pub fn lock_file(&self) -> PathBuf {
        self.root.join(".lock")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_paths_at_root() {
        let paths = Paths::at("/tmp/tabintent-test");
        assert_eq!(paths.store_dir(), PathBuf::from("/tmp/tabintent-test/store"));
        assert!(paths.alarms_file().ends_with("alarms.json"));
        assert!(paths.tabs_file().ends_with("tabs.json"));
        assert!(paths.notifications_log().ends_with("notifications.jsonl"));
        assert!(paths.lock_file().ends_with(".lock"));
    }

    #[test]
    #[serial]
    fn test_paths_env_override() {
        let temp = tempfile::TempDir::new().unwrap();
        std::env::set_var(HOME_ENV, temp.path());
        let paths = Paths::new().unwrap();
        std::env::remove_var(HOME_ENV);

        assert_eq!(paths.root, temp.path());
    }

    #[test]
    #[serial]
    fn test_paths_default_under_home() {
        std::env::remove_var(HOME_ENV);
        let paths = Paths::new().unwrap();
        assert!(paths.root.ends_with(".tabintent"));
    }
}
