use serde_json::json;
use tabintent_core::TabId;
use tabintent_store::Paths;

pub fn run(paths: &Paths, url: &str, tab: Option<TabId>) -> anyhow::Result<()> {
    let app = super::open(paths)?;
    let status = app.status(url, tab)?;
    super::print_json(&json!({
        "alreadyBoundForThisTab": status.already_bound_for_this_tab,
        "suppressed": status.suppressed,
        "shouldPrompt": status.should_prompt(),
    }))
}
