//! Notifications printed to the terminal and kept in `notifications.jsonl`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tabintent_lifecycle::{Notification, Notifier, Service, ServiceError};
use tabintent_store::{append_jsonl, read_jsonl};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShownNotification {
    pub id: String,
    pub shown_at: DateTime<Utc>,
    #[serde(flatten)]
    pub notification: Notification,
}

#[derive(Debug, Clone)]
pub struct ConsoleNotifier {
    log: PathBuf,
    echo: bool,
}

impl ConsoleNotifier {
    pub fn new(log: impl AsRef<Path>) -> Self {
        Self {
            log: log.as_ref().to_path_buf(),
            echo: true,
        }
    }

    /// Record to the log without printing
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    pub fn history(&self) -> std::io::Result<Vec<ShownNotification>> {
        read_jsonl(&self.log)
    }
}

impl Notifier for ConsoleNotifier {
    fn show(&mut self, id: &str, notification: &Notification) -> Result<(), ServiceError> {
        let record = ShownNotification {
            id: id.to_string(),
            shown_at: Utc::now(),
            notification: notification.clone(),
        };
        append_jsonl(&self.log, &record)
            .map_err(|e| ServiceError::new(Service::Notifications, e.to_string()))?;

        if self.echo {
            println!("{}", render(id, notification));
        }
        Ok(())
    }
}

fn render(id: &str, notification: &Notification) -> String {
    let mut out = format!("🔔 {} [{id}]\n{}", notification.title, notification.body);
    for (index, action) in notification.actions.iter().enumerate() {
        out.push_str(&format!("\n  [{index}] {action}"));
    }
    out
}
