use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::codes::{FilterCodes, FilterKind};
use crate::config::{read_api_key, FetchConfig};
use crate::query::Filters;
use crate::{Result, API_ENDPOINT, KEY_FILE_PATH, PAGE_BOUND, PAGE_SIZE, RESULT_DIR};

/// Dumps opendict search results page by page
#[derive(Parser, Debug)]
#[command(name = "dictpage", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every page of a search into the output directory
    Fetch(FetchArgs),
    /// Store the API key
    Init {
        #[arg(long, default_value = KEY_FILE_PATH)]
        key_file: PathBuf,
    },
    /// Print the filter code tables
    Codes {
        /// Only print this table
        #[arg(value_enum)]
        kind: Option<FilterKind>,
    },
}

#[derive(clap::Args, Debug)]
pub struct FetchArgs {
    /// Search term
    pub term: String,
    /// Part of speech codes, asked for when absent
    #[arg(long)]
    pub pos: Option<String>,
    /// Dialect region codes, asked for when absent
    #[arg(long)]
    pub region: Option<String>,
    /// Subject category codes, asked for when absent
    #[arg(long)]
    pub cat: Option<String>,
    #[arg(long, default_value = KEY_FILE_PATH)]
    pub key_file: PathBuf,
    #[arg(long, default_value = RESULT_DIR)]
    pub out: PathBuf,
    #[arg(long, default_value = API_ENDPOINT)]
    pub endpoint: String,
    /// Items per page (`num`)
    #[arg(long, default_value_t = PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..=PAGE_SIZE as i64))]
    pub page_size: u32,
    /// Last page that will be requested
    #[arg(long, default_value_t = PAGE_BOUND, value_parser = clap::value_parser!(u32).range(1..=PAGE_BOUND as i64))]
    pub max_pages: u32,
}

/// A fetch run with the key loaded and the flag filters parsed.
#[derive(Debug)]
pub struct PreparedFetch {
    pub config: FetchConfig,
    pub key: String,
    pub filters: Filters,
    /// Filters that still have to be asked for.
    pub missing: Vec<FilterKind>,
}

impl FetchArgs {
    pub fn config(&self) -> FetchConfig {
        FetchConfig {
            endpoint: self.endpoint.clone(),
            key_file: self.key_file.clone(),
            output_dir: self.out.clone(),
            page_size: self.page_size,
            max_pages: self.max_pages,
        }
    }

    /// Everything that can fail without asking the operator anything.
    /// Runs before the prompts so a bad key file or flag is reported first.
    pub async fn prepare(&self) -> Result<PreparedFetch> {
        let config = self.config();
        let (filters, missing) = self.given_filters()?;
        let key = read_api_key(&config.key_file).await?;
        Ok(PreparedFetch {
            config,
            key,
            filters,
            missing,
        })
    }

    /// Filters given as flags, plus the kinds still left to ask for.
    pub fn given_filters(&self) -> Result<(Filters, Vec<FilterKind>)> {
        let mut filters = Filters::default();
        let mut missing = Vec::new();
        for kind in FilterKind::ALL_KINDS {
            let flag = match kind {
                FilterKind::Pos => &self.pos,
                FilterKind::Region => &self.region,
                FilterKind::Category => &self.cat,
            };
            match flag {
                Some(input) => filters.set(kind, FilterCodes::parse(kind, input)?),
                None => missing.push(kind),
            }
        }
        Ok((filters, missing))
    }
}
