//! Key-value persistence and local file helpers

mod error;
mod io;
mod kv;
mod lock;
mod paths;

pub use error::StoreError;
pub use io::{append_jsonl, atomic_write, read_json, read_jsonl, write_json};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use lock::DirLock;
pub use paths::{Paths, HOME_ENV};
