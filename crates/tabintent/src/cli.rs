use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tabintent_core::{Intent, PageSignals, TabId};

#[derive(Parser)]
#[command(name = "tabintent")]
#[command(version)]
#[command(about = "Remember why you opened a tab")]
pub struct Cli {
    /// Data directory (defaults to $TABINTENT_HOME or ~/.tabintent)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Page text used for suggestions and notes
#[derive(Args, Debug, Default)]
pub struct PageArgs {
    #[arg(long, default_value = "")]
    pub url: String,

    #[arg(long, default_value = "")]
    pub title: String,

    /// Meta description
    #[arg(long, default_value = "")]
    pub description: String,

    /// First heading on the page
    #[arg(long, default_value = "")]
    pub heading: String,

    /// Read page signals as JSON from stdin instead
    #[arg(long, conflicts_with_all = ["url", "title", "description", "heading"])]
    pub stdin: bool,
}

impl PageArgs {
    pub fn signals(&self) -> anyhow::Result<PageSignals> {
        if self.stdin {
            return Ok(serde_json::from_reader(std::io::stdin().lock())?);
        }
        Ok(PageSignals {
            title: self.title.clone(),
            description: self.description.clone(),
            heading: self.heading.clone(),
            url: self.url.clone(),
        })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create default settings and schedule the stale sweep
    Init,

    /// Suggest an intent for a page
    Suggest {
        #[command(flatten)]
        page: PageArgs,

        /// Show the per-label score breakdown
        #[arg(long)]
        explain: bool,
    },

    /// Draft a note for a page and intent
    Note {
        #[arg(long)]
        intent: Intent,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Whether the capture prompt should show for a page
    Status {
        #[arg(long)]
        url: String,

        #[arg(long)]
        tab: Option<TabId>,
    },

    /// Save an intent for a page
    Capture {
        #[arg(long)]
        url: String,

        #[arg(long, default_value = "")]
        title: String,

        /// Intent label, e.g. "Work task"
        #[arg(long)]
        intent: String,

        #[arg(long, default_value = "")]
        note: String,

        #[arg(long)]
        tab: Option<TabId>,
    },

    /// Dismiss the capture prompt without saving
    Skip,

    /// Never ask again for this URL
    Suppress {
        #[arg(long)]
        url: String,
    },

    /// Show saved intents, newest first
    List {
        #[arg(long)]
        intent: Option<Intent>,

        /// Case-insensitive match on title, URL or note
        #[arg(short, long)]
        query: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Delete all history, tab bindings and suppressions
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },

    /// Report tab events
    Tab {
        #[command(subcommand)]
        action: TabAction,
    },

    /// Fire alarms that are due
    Tick {
        /// Evaluate as of this epoch-millisecond time instead of now
        #[arg(long)]
        at: Option<i64>,
    },

    /// Answer a notification button
    Respond {
        /// Notification id, e.g. stale:<entry id>
        notification: String,

        /// Button index (0 = close tab, 1 = keep)
        action: usize,
    },

    /// Print version information
    Version,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    Show,
    Set {
        #[arg(long)]
        remind_after_minutes: Option<u32>,

        #[arg(long)]
        stale_after_days: Option<u32>,

        #[arg(long)]
        reminders: Option<bool>,

        #[arg(long)]
        stale_suggestions: Option<bool>,
    },
}

#[derive(Subcommand)]
pub enum TabAction {
    /// A tab navigated or finished loading
    Update {
        #[arg(long)]
        id: TabId,

        #[arg(long)]
        url: String,

        #[arg(long, default_value = "")]
        title: String,

        /// The page is still loading
        #[arg(long)]
        loading: bool,
    },

    /// A tab was closed
    Close {
        #[arg(long)]
        id: TabId,
    },
}
