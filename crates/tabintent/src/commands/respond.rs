use tabintent_lifecycle::NotificationOutcome;
use tabintent_store::Paths;

pub fn run(paths: &Paths, notification: &str, action: usize) -> anyhow::Result<()> {
    let mut app = super::open(paths)?;
    match app.on_notification_action(notification, action)? {
        NotificationOutcome::Closed { tabs } => println!("Closed {tabs} tab(s)"),
        NotificationOutcome::NotOpen => println!("Tab is no longer open"),
        NotificationOutcome::Kept => println!("Kept"),
        NotificationOutcome::Ignored => {
            tracing::debug!(notification, action, "notification action ignored")
        }
    }
    Ok(())
}
