use std::path::PathBuf;

use thiserror::Error;

use crate::codes::FilterKind;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request for page {page} failed: {source}")]
    Network {
        page: u32,
        #[source]
        source: reqwest::Error,
    },
    #[error("Server answered page {page} with HTTP status {status}")]
    HttpStatus { page: u32, status: u16 },

    #[error("Page {page} is not a valid search response: {reason}")]
    MalformedResponse { page: u32, reason: String },
    #[error("The dictionary API rejected page {page} (error code {code}): {message}")]
    Api {
        page: u32,
        code: String,
        message: String,
    },

    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("The API key file {} is empty, run `dictpage init` first.", path.display())]
    MissingKey { path: PathBuf },

    #[error("Invalid {kind} filter {input:?}: {reason}")]
    InvalidFilter {
        kind: FilterKind,
        input: String,
        reason: String,
    },
    #[error("Prompt Error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl Error {
    /// Request never produced a usable body.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network { .. } | Error::HttpStatus { .. })
    }

    /// The body arrived but is not something the fetch loop can count.
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Error::MalformedResponse { .. } | Error::Api { .. })
    }

    /// Page index the error happened at, if it is tied to one.
    pub fn page(&self) -> Option<u32> {
        match self {
            Error::Network { page, .. }
            | Error::HttpStatus { page, .. }
            | Error::MalformedResponse { page, .. }
            | Error::Api { page, .. } => Some(*page),
            _ => None,
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
        let path = path.into();
        move |source| Error::Filesystem { path, source }
    }
}
