use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{Error, Result, API_ENDPOINT, KEY_FILE_PATH, PAGE_BOUND, PAGE_SIZE, RESULT_DIR};

/// Settings of one fetch run, everything except the query itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub endpoint: String,
    pub key_file: PathBuf,
    pub output_dir: PathBuf,
    /// Sent as `num`, a page with fewer items ends the run.
    pub page_size: u32,
    /// Last `start` that will be requested.
    pub max_pages: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: API_ENDPOINT.to_owned(),
            key_file: PathBuf::from(KEY_FILE_PATH),
            output_dir: PathBuf::from(RESULT_DIR),
            page_size: PAGE_SIZE,
            max_pages: PAGE_BOUND,
        }
    }
}

/// Reads the API key, surrounding whitespace is not part of it.
pub async fn read_api_key(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .await
        .map_err(Error::filesystem(path))?;
    let key = raw.trim();
    if key.is_empty() {
        return Err(Error::MissingKey { path: path.into() });
    }
    Ok(key.to_owned())
}

pub async fn write_api_key(path: impl AsRef<Path>, key: &str) -> Result<()> {
    let path = path.as_ref();
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::MissingKey { path: path.into() });
    }
    fs::write(path, key).await.map_err(Error::filesystem(path))?;
    Ok(())
}
