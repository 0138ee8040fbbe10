use crate::cli::PageArgs;
use serde_json::json;
use tabintent_core::Intent;
use tabintent_store::Paths;

pub fn run_suggest(paths: &Paths, page: &PageArgs, explain: bool) -> anyhow::Result<()> {
    let signals = page.signals()?;
    let app = super::open(paths)?;
    let prediction = app.request_suggestion(&signals);

    let mut output = json!({
        "intent": prediction.intent,
        "confidence": (prediction.confidence * 100.0).round() / 100.0,
    });
    if explain {
        output["scores"] = serde_json::to_value(app.classifier().score(&signals).breakdown())?;
    }
    super::print_json(&output)
}

pub fn run_note(paths: &Paths, intent: Intent, page: &PageArgs) -> anyhow::Result<()> {
    let signals = page.signals()?;
    let app = super::open(paths)?;
    println!("{}", app.request_note(intent, &signals));
    Ok(())
}
