use super::init::on_off;
use crate::cli::SettingsAction;
use tabintent_core::Settings;
use tabintent_store::Paths;

pub fn run(paths: &Paths, action: Option<SettingsAction>) -> anyhow::Result<()> {
    let mut app = super::open(paths)?;
    let current = app.settings()?;

    let settings = match action {
        Some(SettingsAction::Set {
            remind_after_minutes,
            stale_after_days,
            reminders,
            stale_suggestions,
        }) => {
            let updated = Settings {
                remind_after_minutes: remind_after_minutes.unwrap_or(current.remind_after_minutes),
                stale_after_days: stale_after_days.unwrap_or(current.stale_after_days),
                enable_reminders: reminders.unwrap_or(current.enable_reminders),
                enable_stale_suggestions: stale_suggestions
                    .unwrap_or(current.enable_stale_suggestions),
            };
            let saved = app.update_settings(updated)?;
            println!("✓ Saved");
            saved
        }
        Some(SettingsAction::Show) | None => current,
    };

    println!("remindAfterMinutes:     {}", settings.remind_after_minutes);
    println!("staleAfterDays:         {}", settings.stale_after_days);
    println!("enableReminders:        {}", on_off(settings.enable_reminders));
    println!(
        "enableStaleSuggestions: {}",
        on_off(settings.enable_stale_suggestions)
    );
    Ok(())
}
