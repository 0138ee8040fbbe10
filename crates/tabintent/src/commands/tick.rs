use tabintent_core::{ms_from_minutes, now_ms, EpochMs};
use tabintent_lifecycle::naming::{parse_alarm, AlarmKind};
use tabintent_lifecycle::{AlarmOutcome, AlarmScheduler, ReminderOutcome};
use tabintent_store::Paths;

/// Delay before a reminder whose handler failed fires again
const REMINDER_RETRY_MINUTES: u32 = 5;

pub fn run(paths: &Paths, at: Option<EpochMs>) -> anyhow::Result<()> {
    let now = at.unwrap_or_else(now_ms);
    let mut app = tabintent::host::open(paths, now)?;
    let due = app.alarms_mut().take_due(now)?;
    if due.is_empty() {
        println!("No alarms due");
        return Ok(());
    }

    let settings = app.settings()?;
    for name in due {
        match app.on_alarm(&name, &settings, now) {
            Ok(outcome) => report(&name, &outcome),
            Err(e) => {
                tracing::warn!(alarm = %name, error = %e, "alarm handler failed");
                // take_due already dropped the one-shot; put it back so the
                // reminder is delivered on a later tick
                if let AlarmKind::Reminder { .. } = parse_alarm(&name) {
                    let retry_at = now + ms_from_minutes(REMINDER_RETRY_MINUTES);
                    match app.alarms_mut().schedule_once(&name, retry_at) {
                        Ok(()) => tracing::info!(alarm = %name, retry_at, "reminder rescheduled"),
                        Err(e) => tracing::warn!(alarm = %name, error = %e, "could not reschedule reminder"),
                    }
                }
            }
        }
    }
    Ok(())
}

fn report(name: &str, outcome: &AlarmOutcome) {
    match outcome {
        AlarmOutcome::Reminder(ReminderOutcome::Sent) => {}
        AlarmOutcome::Reminder(other) => {
            tracing::debug!(alarm = name, outcome = ?other, "reminder not shown");
        }
        AlarmOutcome::Sweep(report) if report.enabled => {
            println!(
                "Stale sweep: {} notified, {} failed",
                report.notified.len(),
                report.failed
            );
        }
        AlarmOutcome::Sweep(_) => println!("Stale sweep: disabled"),
        AlarmOutcome::Unknown => tracing::debug!(alarm = name, "unknown alarm"),
    }
}
