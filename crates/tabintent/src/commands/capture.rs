use tabintent_core::{now_ms, TabId};
use tabintent_lifecycle::{CaptureRequest, Tab};
use tabintent_store::Paths;

pub struct CaptureArgs {
    pub url: String,
    pub title: String,
    pub intent: String,
    pub note: String,
    pub tab: Option<TabId>,
}

pub fn run(paths: &Paths, args: CaptureArgs) -> anyhow::Result<()> {
    let mut app = super::open(paths)?;
    let settings = app.settings()?;

    let request = CaptureRequest {
        url: args.url,
        title: args.title,
        label: args.intent,
        note: args.note,
    };
    let outcome = app.capture(request, args.tab, &settings, now_ms())?;

    // The capture came from that tab, so it is open on this page
    if let Some(id) = args.tab {
        app.tabs_mut().upsert(Tab {
            id,
            url: outcome.entry.url.clone(),
            title: outcome.entry.title.clone(),
        })?;
    }

    super::print_json(&outcome)
}

pub fn run_skip(paths: &Paths) -> anyhow::Result<()> {
    let mut app = super::open(paths)?;
    let analytics = app.skip()?;
    println!("Skipped ({} skipped, {} saved)", analytics.skipped, analytics.saved);
    Ok(())
}

pub fn run_suppress(paths: &Paths, url: &str) -> anyhow::Result<()> {
    let mut app = super::open(paths)?;
    app.suppress(url)?;
    println!("Won't ask again for {url}");
    Ok(())
}
