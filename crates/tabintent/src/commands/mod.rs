pub mod capture;
pub mod clear;
pub mod init;
pub mod list;
pub mod respond;
pub mod settings;
pub mod status;
pub mod suggest;
pub mod tab;
pub mod tick;
pub mod version;

use tabintent_core::now_ms;
use tabintent_store::Paths;
use tabintent::host::{self, App};

/// Open the app against the data directory at the current time
pub(crate) fn open(paths: &Paths) -> anyhow::Result<App> {
    host::open(paths, now_ms())
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
