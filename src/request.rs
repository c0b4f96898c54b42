use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::query::QueryParams;
use crate::{Error, Result, REQUEST_TIMEOUT_SECS, USER_AGENT};

/// Something that can answer one search request with the raw response body.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, params: &QueryParams) -> Result<String>;
}

/// Talks to the real API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
    endpoint: String,
}

impl HttpPageSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    /// Requests a page and returns the body untouched.
    async fn fetch_page(&self, params: &QueryParams) -> Result<String> {
        let page = params.start;
        let res = self
            .client
            .get(&self.endpoint)
            .query(&params.pairs())
            .send()
            .await
            .map_err(|source| Error::Network { page, source })?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                page,
                status: status.as_u16(),
            });
        }

        let body = res
            .text()
            .await
            .map_err(|source| Error::Network { page, source })?;
        Ok(body)
    }
}
