//! Exclusive advisory lock over a data directory

use std::fs::{File, OpenOptions, TryLockError};
use std::path::{Path, PathBuf};

/// Released when dropped
#[derive(Debug)]
pub struct DirLock {
    file: File,
    path: PathBuf,
}

fn open_lock_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)
}

impl DirLock {
    /// Block until the lock at `path` is free
    pub fn acquire(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = open_lock_file(&path)?;
        file.lock()?;
        tracing::debug!(path = %path.display(), "data directory locked");
        Ok(Self { file, path })
    }

    /// `None` when another holder has the lock
    pub fn try_acquire(path: impl AsRef<Path>) -> std::io::Result<Option<Self>> {
        let path = path.as_ref().to_path_buf();
        let file = open_lock_file(&path)?;
        match file.try_lock() {
            Ok(()) => Ok(Some(Self { file, path })),
            Err(TryLockError::WouldBlock) => Ok(None),
            Err(TryLockError::Error(e)) => Err(e),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for DirLock {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            tracing::debug!(path = %self.path.display(), error = %e, "unlock failed");
        }
    }
}
