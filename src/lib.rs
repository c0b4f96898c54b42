//! OPENDICT PAGE FETCHER
//! Walks the opendict search API page by page and dumps every raw page to disk.

pub mod cli;
pub mod codes;
pub mod config;
mod error;
mod macros;
pub mod output;
pub mod parse;
pub mod process;
pub mod prompt;
pub mod query;
pub mod request;

pub use error::{Error, Result};

const API_ENDPOINT: &str = "https://opendict.korean.go.kr/api/search";
const KEY_FILE_PATH: &str = "api_key.txt";
const RESULT_DIR: &str = "result";
/// The API refuses `num` above this.
const PAGE_SIZE: u32 = 100;
/// The API refuses `start` above this.
const PAGE_BOUND: u32 = 1000;
const REQUEST_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("dictpage/", env!("CARGO_PKG_VERSION"));
