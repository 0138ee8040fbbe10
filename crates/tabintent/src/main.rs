mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use commands::capture::CaptureArgs;
use tabintent_store::Paths;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let paths = match cli.data_dir {
        Some(dir) => Paths::at(dir),
        None => Paths::new()?,
    };

    match cli.command {
        Commands::Init => commands::init::run(&paths),
        Commands::Suggest { page, explain } => {
            commands::suggest::run_suggest(&paths, &page, explain)
        }
        Commands::Note { intent, page } => commands::suggest::run_note(&paths, intent, &page),
        Commands::Status { url, tab } => commands::status::run(&paths, &url, tab),
        Commands::Capture {
            url,
            title,
            intent,
            note,
            tab,
        } => commands::capture::run(
            &paths,
            CaptureArgs {
                url,
                title,
                intent,
                note,
                tab,
            },
        ),
        Commands::Skip => commands::capture::run_skip(&paths),
        Commands::Suppress { url } => commands::capture::run_suppress(&paths, &url),
        Commands::List {
            intent,
            query,
            json,
        } => commands::list::run(&paths, intent, query, json),
        Commands::Clear { yes } => commands::clear::run(&paths, yes),
        Commands::Settings { action } => commands::settings::run(&paths, action),
        Commands::Tab { action } => commands::tab::run(&paths, action),
        Commands::Tick { at } => commands::tick::run(&paths, at),
        Commands::Respond {
            notification,
            action,
        } => commands::respond::run(&paths, &notification, action),
        Commands::Version => commands::version::run(),
    }
}
