use crate::cli::TabAction;
use tabintent_core::now_ms;
use tabintent_lifecycle::{Tab, TabChange};
use tabintent_store::Paths;

pub fn run(paths: &Paths, action: TabAction) -> anyhow::Result<()> {
    let mut app = super::open(paths)?;

    match action {
        TabAction::Update {
            id,
            url,
            title,
            loading,
        } => {
            let tab = Tab { id, url, title };
            let previous = app.tabs_mut().upsert(tab.clone())?;
            let change = TabChange {
                url: match previous {
                    Some(prev) if prev.url == tab.url => None,
                    _ => Some(tab.url.clone()),
                },
                complete: !loading,
            };

            match app.on_tab_updated(&tab, &change, now_ms())? {
                Some(entry) => println!("Updated {} ({})", entry.display_title(), entry.intent),
                None => tracing::debug!(tab_id = id, "no bound entry updated"),
            }
        }
        TabAction::Close { id } => {
            app.tabs_mut().remove(id)?;
            if app.on_tab_removed(id)? {
                println!("Unbound tab {id}");
            }
        }
    }
    Ok(())
}
