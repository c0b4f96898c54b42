use std::path::PathBuf;

use chrono::Local;

use crate::config::FetchConfig;
use crate::output::OutputDir;
use crate::parse::count_items;
use crate::query::{Filters, QueryParams};
use crate::request::{HttpPageSource, PageSource};
use crate::{info_time, Result};

/// Why the page loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// `page` held fewer than `num` items, there is nothing after it.
    ShortPage { page: u32, items: usize },
    /// Every page up to the bound was full.
    PageBound { page: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    pub pages: u32,
    pub files: Vec<PathBuf>,
    pub stop: StopReason,
}

/// Sets up the HTTP source and the output directory, and fetches every page of `term`.
pub async fn process_query(
    config: &FetchConfig,
    key: String,
    term: &str,
    filters: Filters,
) -> Result<FetchSummary> {
    let params = QueryParams::new(key, term, config.page_size, filters);
    let source = HttpPageSource::new(&config.endpoint)?;
    let out = OutputDir::create(&config.output_dir).await?;

    fetch_pages(&source, params, &out, config.max_pages).await
}

/// Requests pages `1..=max_pages` one after another and writes every body to its own file.
/// Stops after the first page with fewer than `params.num` items.
///
/// A page that cannot be counted aborts the run. Its file is already on disk at that point,
/// so a rerun can look at what the server sent.
pub async fn fetch_pages<S>(
    source: &S,
    mut params: QueryParams,
    out: &OutputDir,
    max_pages: u32,
) -> Result<FetchSummary>
where
    S: PageSource + ?Sized,
{
    let start_time = Local::now();
    let page_size = params.num as usize;
    let mut files = Vec::new();

    info_time!(
        "Started fetching {:?} (pos {}, region {}, cat {}) into {}",
        params.q,
        params.filters.pos,
        params.filters.region,
        params.filters.cat,
        out.path().display()
    );

    for page in 1..=max_pages {
        let page_time = Local::now();
        params.start = page;

        let body = source.fetch_page(&params).await?;
        let path = out.write_page(&params, &body).await?;
        files.push(path);

        let items = count_items(page, &body)?;
        info_time!(page_time, "Fetched page {page}: {items} items");

        if items < page_size {
            info_time!(start_time, "DONE: {page} pages, last one was short.");
            return Ok(FetchSummary {
                pages: page,
                files,
                stop: StopReason::ShortPage { page, items },
            });
        }
    }

    info_time!(start_time, "DONE: reached the page bound {max_pages}.");
    Ok(FetchSummary {
        pages: max_pages,
        files,
        stop: StopReason::PageBound { page: max_pages },
    })
}
