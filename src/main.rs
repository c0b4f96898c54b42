use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use dictpage::cli::{Cli, Commands, FetchArgs};
use dictpage::codes::FilterKind;
use dictpage::config::{read_api_key, write_api_key};
use dictpage::process::{process_query, StopReason};
use dictpage::prompt::{prompt_api_key, prompt_filters};
use dictpage::{info_time, warn_time, Result};

#[tokio::main]
async fn main() -> ExitCode {
    let start_time = Local::now();
    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(()) => {
            info_time!(start_time, "Full program time:");
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.page() {
                Some(page) => warn_time!("Aborted at page {page}: {err}"),
                None => warn_time!("Aborted: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Fetch(args) => fetch(args).await,
        Commands::Init { key_file } => {
            let current = read_api_key(&key_file).await.ok();
            let key = prompt_api_key(current.as_deref())?;
            write_api_key(&key_file, &key).await?;
            info_time!("Stored api key in {}", key_file.display());
            Ok(())
        }
        Commands::Codes { kind } => {
            let kinds = match kind {
                Some(kind) => vec![kind],
                None => FilterKind::ALL_KINDS.to_vec(),
            };
            for kind in kinds {
                println!("{}", kind.menu());
            }
            Ok(())
        }
    }
}

async fn fetch(args: FetchArgs) -> Result<()> {
    let prepared = args.prepare().await?;
    let mut filters = prepared.filters;
    prompt_filters(&prepared.missing, &mut filters)?;

    let summary = process_query(&prepared.config, prepared.key, &args.term, filters).await?;
    match summary.stop {
        StopReason::ShortPage { page, items } => {
            info_time!("Wrote {} files, page {page} had {items} items.", summary.files.len())
        }
        StopReason::PageBound { page } => {
            info_time!("Wrote {} files, stopped at page bound {page}.", summary.files.len())
        }
    }
    Ok(())
}
