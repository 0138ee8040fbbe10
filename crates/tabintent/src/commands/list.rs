use tabintent_core::{filter_entries, now_ms, time_ago, EntryFilter, Intent};
use tabintent_store::Paths;

pub fn run(paths: &Paths, intent: Option<Intent>, query: Option<String>, json: bool) -> anyhow::Result<()> {
    let app = super::open(paths)?;
    let summary = app.list_all()?;
    let filter = EntryFilter { intent, query };
    let entries = filter_entries(&summary.entries, &filter);

    if json {
        return super::print_json(&serde_json::json!({
            "entries": entries,
            "analytics": summary.analytics,
            "settings": summary.settings,
        }));
    }

    println!(
        "Saved: {}  Skipped: {}",
        summary.analytics.saved, summary.analytics.skipped
    );
    if entries.is_empty() {
        println!("\nNo saved intents.");
        return Ok(());
    }

    let now = now_ms();
    println!();
    for entry in entries {
        let seen = entry.last_seen_at.max(entry.created_at);
        println!(
            "{:<12} {:>10}  {}",
            entry.intent.label(),
            time_ago(seen, now),
            entry.display_title()
        );
        if entry.display_title() != entry.url {
            println!("{:24}{}", "", entry.url);
        }
        if !entry.note.is_empty() {
            println!("{:24}{}", "", entry.note);
        }
    }
    Ok(())
}
