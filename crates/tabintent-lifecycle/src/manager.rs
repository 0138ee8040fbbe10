//! Entry lifecycle: capture, tab tracking, reminders and stale sweeps

use crate::error::{LifecycleError, Result};
use crate::model::{
    AlarmOutcome, CaptureOutcome, CaptureRequest, CaptureStatus, NotificationOutcome,
    ReminderOutcome, Summary, SweepReport, TabChange, NOTE_MAX_LEN,
};
use crate::naming::{
    parse_alarm, parse_stale_notification, reminder_alarm, reminder_notification,
    reminder_notification_id, stale_notification, stale_notification_id, AlarmKind,
    CLOSE_TAB_ACTION, KEEP_ACTION, STALE_SWEEP_ALARM, STALE_SWEEP_PERIOD_MINUTES,
};
use crate::repo::Repository;
use crate::services::{AlarmScheduler, Notifier, Tab, TabSource};
use tabintent_classify::{synthesize_note, Classifier};
use tabintent_core::{
    is_real_web_url, Analytics, Entry, EpochMs, Intent, PageSignals, Prediction, Settings, TabId,
};
use tabintent_store::KeyValueStore;
use tracing::{debug, info, warn};

/// Owns the entry collections and drives every state transition.
///
/// Each handler takes `&mut self` and finishes its read-modify-write of a
/// collection before returning, so two handlers never interleave on the
/// same collection. Hosts that dispatch events from several threads wrap
/// the manager in a `Mutex`.
pub struct LifecycleManager<S, A, N, T> {
    repo: Repository<S>,
    alarms: A,
    notifier: N,
    tabs: T,
    classifier: Classifier,
}

impl<S, A, N, T> LifecycleManager<S, A, N, T>
where
    S: KeyValueStore,
    A: AlarmScheduler,
    N: Notifier,
    T: TabSource,
{
    pub fn new(store: S, alarms: A, notifier: N, tabs: T) -> Self {
        Self {
            repo: Repository::new(store),
            alarms,
            notifier,
            tabs,
            classifier: Classifier::new(),
        }
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn store(&self) -> &S {
        self.repo.store()
    }

    pub fn alarms(&self) -> &A {
        &self.alarms
    }

    pub fn alarms_mut(&mut self) -> &mut A {
        &mut self.alarms
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn tabs(&self) -> &T {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut T {
        &mut self.tabs
    }

    /// First-run setup: default settings, the recurring sweep, counters
    pub fn install(&mut self) -> Result<Settings> {
        let settings = match self.repo.stored_settings()? {
            Some(s) => s,
            None => {
                let defaults = Settings::new();
                self.repo.save_settings(&defaults)?;
                defaults
            }
        };

        self.alarms
            .schedule_recurring(STALE_SWEEP_ALARM, STALE_SWEEP_PERIOD_MINUTES)?;

        if self.repo.stored_analytics()?.is_none() {
            self.repo.save_analytics(&Analytics::default())?;
        }

        info!(
            period_minutes = STALE_SWEEP_PERIOD_MINUTES,
            "installed stale sweep"
        );
        Ok(settings)
    }

    /// Current settings with defaults applied
    pub fn settings(&self) -> Result<Settings> {
        Ok(self.repo.settings()?)
    }

    /// Persist new settings. Only decisions made after this call see them.
    pub fn update_settings(&mut self, settings: Settings) -> Result<Settings> {
        let settings = settings.sanitized();
        self.repo.save_settings(&settings)?;
        info!(?settings, "settings updated");
        Ok(settings)
    }

    // Capture surface

    pub fn request_suggestion(&self, signals: &PageSignals) -> Prediction {
        self.classifier.classify(signals)
    }

    pub fn request_note(&self, intent: Intent, signals: &PageSignals) -> String {
        synthesize_note(intent, signals)
    }

    pub fn status(&self, url: &str, tab_id: Option<TabId>) -> Result<CaptureStatus> {
        let already_bound_for_this_tab = match tab_id {
            Some(id) => self.repo.tab_map()?.contains_key(&id),
            None => false,
        };
        let suppressed = self
            .repo
            .suppressed()?
            .get(url)
            .copied()
            .unwrap_or(false);

        Ok(CaptureStatus {
            already_bound_for_this_tab,
            suppressed,
        })
    }

    pub fn capture(
        &mut self,
        request: CaptureRequest,
        tab_id: Option<TabId>,
        settings: &Settings,
        now: EpochMs,
    ) -> Result<CaptureOutcome> {
        let (url, intent) = validate_capture(&request)?;

        let entry = Entry {
            id: uuid::Uuid::new_v4().to_string(),
            url,
            title: request.title,
            intent,
            note: request.note.trim().chars().take(NOTE_MAX_LEN).collect(),
            created_at: now,
            last_seen_at: now,
            reminded: false,
            stale_notified: false,
            last_tab_id: tab_id,
        };

        // Scheduled before any write so a scheduler failure leaves no state
        let alarm = reminder_alarm(&entry.id);
        let reminder_at = if settings.enable_reminders {
            let at = now + settings.remind_after_ms();
            self.alarms.schedule_once(&alarm, at)?;
            Some(at)
        } else {
            None
        };

        let analytics = match self.commit_capture(&entry, tab_id) {
            Ok(analytics) => analytics,
            Err(e) => {
                if reminder_at.is_some() {
                    if let Err(cancel) = self.alarms.cancel(&alarm) {
                        warn!(entry_id = %entry.id, error = %cancel, "could not cancel reminder");
                    }
                }
                return Err(e);
            }
        };

        info!(
            entry_id = %entry.id,
            intent = %entry.intent,
            tab_id = ?tab_id,
            "captured intent"
        );

        Ok(CaptureOutcome {
            entry,
            analytics,
            reminder_at,
        })
    }

    /// Entry first, then the tab binding, then the counter
    fn commit_capture(&mut self, entry: &Entry, tab_id: Option<TabId>) -> Result<Analytics> {
        let mut entries = self.repo.entries()?;
        entries.push(entry.clone());
        self.repo.save_entries(&entries)?;

        if let Some(id) = tab_id {
            let mut map = self.repo.tab_map()?;
            map.insert(id, entry.id.clone());
            self.repo.save_tab_map(&map)?;
        }

        let mut analytics = self.repo.analytics()?;
        analytics.saved += 1;
        self.repo.save_analytics(&analytics)?;
        Ok(analytics)
    }

    pub fn skip(&mut self) -> Result<Analytics> {
        let mut analytics = self.repo.analytics()?;
        analytics.skipped += 1;
        self.repo.save_analytics(&analytics)?;
        debug!(skipped = analytics.skipped, "capture skipped");
        Ok(analytics)
    }

    /// Never prompt again for exactly this URL
    pub fn suppress(&mut self, url: &str) -> Result<()> {
        if url.trim().is_empty() {
            return Err(LifecycleError::Validation("missing url".to_string()));
        }
        let mut map = self.repo.suppressed()?;
        map.insert(url.to_string(), true);
        self.repo.save_suppressed(&map)?;
        debug!(url, "url suppressed");
        Ok(())
    }

    // Tab events

    /// Refresh the bound entry from a tab navigation. Returns the updated
    /// entry, or `None` when nothing qualified.
    pub fn on_tab_updated(
        &mut self,
        tab: &Tab,
        change: &TabChange,
        now: EpochMs,
    ) -> Result<Option<Entry>> {
        if change.url.is_none() && !change.complete {
            return Ok(None);
        }
        let url = if tab.url.is_empty() {
            change.url.clone().unwrap_or_default()
        } else {
            tab.url.clone()
        };
        if !is_real_web_url(&url) {
            return Ok(None);
        }

        let Some(entry_id) = self.repo.tab_map()?.get(&tab.id).cloned() else {
            return Ok(None);
        };

        let mut entries = self.repo.entries()?;
        let Some(entry) = entries.iter_mut().find(|e| e.id == entry_id) else {
            return Ok(None);
        };

        entry.url = url;
        if !tab.title.is_empty() {
            entry.title = tab.title.clone();
        }
        entry.last_seen_at = now;
        entry.last_tab_id = Some(tab.id);
        let updated = entry.clone();

        self.repo.save_entries(&entries)?;
        debug!(entry_id = %updated.id, tab_id = tab.id, "entry refreshed from tab");
        Ok(Some(updated))
    }

    /// Drop the binding for a closed tab. The entry keeps `last_tab_id`.
    pub fn on_tab_removed(&mut self, tab_id: TabId) -> Result<bool> {
        let mut map = self.repo.tab_map()?;
        if map.remove(&tab_id).is_none() {
            return Ok(false);
        }
        self.repo.save_tab_map(&map)?;
        debug!(tab_id, "tab binding removed");
        Ok(true)
    }

    // Timers

    pub fn on_alarm(&mut self, name: &str, settings: &Settings, now: EpochMs) -> Result<AlarmOutcome> {
        match parse_alarm(name) {
            AlarmKind::Reminder { entry_id } => Ok(AlarmOutcome::Reminder(
                self.on_reminder_due(entry_id, settings)?,
            )),
            AlarmKind::StaleSweep => Ok(AlarmOutcome::Sweep(self.on_stale_sweep(settings, now)?)),
            AlarmKind::Unknown => {
                debug!(alarm = name, "ignoring unknown alarm");
                Ok(AlarmOutcome::Unknown)
            }
        }
    }

    pub fn on_reminder_due(&mut self, entry_id: &str, settings: &Settings) -> Result<ReminderOutcome> {
        let mut entries = self.repo.entries()?;
        let Some(entry) = entries.iter_mut().find(|e| e.id == entry_id) else {
            debug!(entry_id, "reminder for missing entry");
            return Ok(ReminderOutcome::Missing);
        };
        if entry.reminded {
            return Ok(ReminderOutcome::AlreadyReminded);
        }

        // The flag is consumed even when reminders are off, so turning them
        // back on never fires a reminder whose window already passed.
        let outcome = if settings.enable_reminders {
            self.notifier
                .show(&reminder_notification_id(entry_id), &reminder_notification(entry))?;
            ReminderOutcome::Sent
        } else {
            ReminderOutcome::Suppressed
        };

        entry.mark_reminded();
        self.repo.save_entries(&entries)?;
        info!(entry_id, ?outcome, "reminder handled");
        Ok(outcome)
    }

    pub fn on_stale_sweep(&mut self, settings: &Settings, now: EpochMs) -> Result<SweepReport> {
        if !settings.enable_stale_suggestions {
            return Ok(SweepReport::default());
        }

        let stale_ms = settings.stale_after_ms();
        let mut entries = self.repo.entries()?;
        let mut report = SweepReport {
            enabled: true,
            ..Default::default()
        };

        for entry in entries.iter_mut() {
            if entry.stale_notified || entry.age_ms(now) < stale_ms {
                continue;
            }
            let id = stale_notification_id(&entry.id);
            match self.notifier.show(&id, &stale_notification(entry)) {
                Ok(()) => {
                    entry.mark_stale_notified();
                    report.notified.push(entry.id.clone());
                }
                Err(e) => {
                    warn!(entry_id = %entry.id, error = %e, "stale notification failed");
                    report.failed += 1;
                }
            }
        }

        if !report.notified.is_empty() {
            self.repo.save_entries(&entries)?;
        }
        info!(
            notified = report.notified.len(),
            failed = report.failed,
            "stale sweep finished"
        );
        Ok(report)
    }

    // Notification responses

    pub fn on_notification_action(
        &mut self,
        notification_id: &str,
        action: usize,
    ) -> Result<NotificationOutcome> {
        let Some(entry_id) = parse_stale_notification(notification_id) else {
            return Ok(NotificationOutcome::Ignored);
        };
        let entries = self.repo.entries()?;
        let Some(entry) = entries.iter().find(|e| e.id == entry_id) else {
            return Ok(NotificationOutcome::Ignored);
        };

        match action {
            CLOSE_TAB_ACTION => {
                let closed = self.close_tab_if_open(entry.last_tab_id, &entry.url)?;
                info!(entry_id, closed, "close requested from stale notification");
                if closed == 0 {
                    Ok(NotificationOutcome::NotOpen)
                } else {
                    Ok(NotificationOutcome::Closed { tabs: closed })
                }
            }
            KEEP_ACTION => Ok(NotificationOutcome::Kept),
            _ => Ok(NotificationOutcome::Ignored),
        }
    }

    /// Close the last known tab if it still exists, otherwise every tab
    /// showing exactly `url`. Returns how many tabs were closed.
    fn close_tab_if_open(&mut self, tab_id: Option<TabId>, url: &str) -> Result<usize> {
        let mut refused = None;
        if let Some(id) = tab_id {
            match self.tabs.get_tab(id) {
                Ok(Some(_)) => match self.tabs.close_tab(id) {
                    Ok(()) => return Ok(1),
                    Err(e) => {
                        debug!(tab_id = id, error = %e, "tab close failed, falling back to url");
                        refused = Some(id);
                    }
                },
                Ok(None) => {}
                Err(e) => debug!(tab_id = id, error = %e, "tab lookup failed, falling back to url"),
            }
        }

        if url.is_empty() {
            return Ok(0);
        }
        let matches: Vec<TabId> = self
            .tabs
            .query_tabs_by_url(url)?
            .into_iter()
            .filter(|t| t.url == url && Some(t.id) != refused)
            .map(|t| t.id)
            .collect();
        for id in &matches {
            self.tabs.close_tab(*id)?;
        }
        Ok(matches.len())
    }

    // Summary surface

    pub fn list_all(&self) -> Result<Summary> {
        Ok(Summary {
            entries: self.repo.entries()?,
            analytics: self.repo.analytics()?,
            settings: self.repo.settings()?,
        })
    }

    pub fn clear_all(&mut self) -> Result<()> {
        let pending: Vec<String> = match self.repo.entries() {
            Ok(entries) => entries
                .into_iter()
                .filter(|e| !e.reminded)
                .map(|e| e.id)
                .collect(),
            Err(e) => {
                warn!(error = %e, "could not read entries before clearing");
                Vec::new()
            }
        };

        self.repo.clear_all()?;

        for entry_id in pending {
            if let Err(e) = self.alarms.cancel(&reminder_alarm(&entry_id)) {
                warn!(entry_id = %entry_id, error = %e, "could not cancel reminder");
            }
        }
        info!("all data cleared");
        Ok(())
    }
}

fn validate_capture(request: &CaptureRequest) -> Result<(String, Intent)> {
    let url = request.url.trim();
    if url.is_empty() {
        return Err(LifecycleError::Validation("missing url".to_string()));
    }
    if !is_real_web_url(url) {
        return Err(LifecycleError::Validation(format!(
            "not an http(s) url: {url}"
        )));
    }
    if request.label.trim().is_empty() {
        return Err(LifecycleError::Validation("missing intent label".to_string()));
    }
    let intent = request
        .label
        .parse::<Intent>()
        .map_err(|e| LifecycleError::Validation(e.to_string()))?;
    Ok((url.to_string(), intent))
}
