use tabintent_lifecycle::{STALE_SWEEP_ALARM, STALE_SWEEP_PERIOD_MINUTES};
use tabintent_store::Paths;

pub fn run(paths: &Paths) -> anyhow::Result<()> {
    let mut app = super::open(paths)?;
    let settings = app.install()?;

    println!("✓ Initialized TabIntent in {}", paths.root.display());
    println!(
        "\nReminders: {} (after {} min)",
        on_off(settings.enable_reminders),
        settings.remind_after_minutes
    );
    println!(
        "Stale suggestions: {} (after {} days)",
        on_off(settings.enable_stale_suggestions),
        settings.stale_after_days
    );
    println!("Sweep alarm: {STALE_SWEEP_ALARM} every {STALE_SWEEP_PERIOD_MINUTES} min");
    Ok(())
}

pub(crate) fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabintent::host::FileAlarms;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_settings_and_sweep() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::at(temp.path());

        run(&paths).unwrap();
        run(&paths).unwrap();

        assert!(paths.store_dir().join("settings.json").exists());
        assert!(paths.store_dir().join("analytics.json").exists());
        let alarms = FileAlarms::load(paths.alarms_file(), 0).unwrap();
        assert_eq!(alarms.len(), 1);
        assert!(alarms.get(STALE_SWEEP_ALARM).is_some());
    }
}
