//! Alarm table persisted in `alarms.json`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tabintent_core::{ms_from_minutes, EpochMs};
use tabintent_lifecycle::{AlarmScheduler, Service, ServiceError};
use tabintent_store::{read_json, write_json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Alarm {
    Once {
        at: EpochMs,
    },
    #[serde(rename_all = "camelCase")]
    Recurring {
        period_minutes: u32,
        next_at: EpochMs,
    },
}

impl Alarm {
    pub fn due_at(&self) -> EpochMs {
        match self {
            Alarm::Once { at } => *at,
            Alarm::Recurring { next_at, .. } => *next_at,
        }
    }
}

/// Alarms fire when the host calls [`FileAlarms::take_due`]
#[derive(Debug)]
pub struct FileAlarms {
    path: PathBuf,
    alarms: BTreeMap<String, Alarm>,
    now: EpochMs,
}

fn alarm_error(e: std::io::Error) -> ServiceError {
    ServiceError::new(Service::Alarms, e.to_string())
}

impl FileAlarms {
    /// Load the table. `now` anchors the first period of recurring alarms.
    pub fn load(path: impl AsRef<Path>, now: EpochMs) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let alarms = read_json(&path)?.unwrap_or_default();
        Ok(Self { path, alarms, now })
    }

    pub fn get(&self, name: &str) -> Option<&Alarm> {
        self.alarms.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Alarm)> {
        self.alarms.iter().map(|(name, alarm)| (name.as_str(), alarm))
    }

    pub fn len(&self) -> usize {
        self.alarms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alarms.is_empty()
    }

    /// Names of alarms due at `now`, earliest first. One-shot alarms are
    /// dropped; recurring alarms move to their next period after `now`, so
    /// missed periods coalesce into a single firing.
    pub fn take_due(&mut self, now: EpochMs) -> Result<Vec<String>, ServiceError> {
        let mut due: Vec<(EpochMs, String)> = self
            .alarms
            .iter()
            .filter(|(_, alarm)| alarm.due_at() <= now)
            .map(|(name, alarm)| (alarm.due_at(), name.clone()))
            .collect();
        if due.is_empty() {
            return Ok(Vec::new());
        }
        due.sort();

        for (_, name) in &due {
            match self.alarms.get_mut(name) {
                Some(Alarm::Once { .. }) => {
                    self.alarms.remove(name);
                }
                Some(Alarm::Recurring {
                    period_minutes,
                    next_at,
                }) => {
                    let period = ms_from_minutes(*period_minutes).max(1);
                    let missed = (now - *next_at) / period + 1;
                    *next_at += missed * period;
                }
                None => {}
            }
        }

        self.save()?;
        Ok(due.into_iter().map(|(_, name)| name).collect())
    }

    fn save(&self) -> Result<(), ServiceError> {
        write_json(&self.path, &self.alarms).map_err(alarm_error)
    }
}

impl AlarmScheduler for FileAlarms {
    fn schedule_once(&mut self, name: &str, at: EpochMs) -> Result<(), ServiceError> {
        self.alarms.insert(name.to_string(), Alarm::Once { at });
        self.save()
    }

    fn schedule_recurring(&mut self, name: &str, period_minutes: u32) -> Result<(), ServiceError> {
        if period_minutes == 0 {
            return Err(ServiceError::new(
                Service::Alarms,
                format!("alarm {name} needs a period of at least one minute"),
            ));
        }
        let next_at = self.now + ms_from_minutes(period_minutes);
        self.alarms.insert(
            name.to_string(),
            Alarm::Recurring {
                period_minutes,
                next_at,
            },
        );
        self.save()
    }

    fn cancel(&mut self, name: &str) -> Result<bool, ServiceError> {
        if self.alarms.remove(name).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }
}
