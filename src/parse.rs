use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

/// The part of a search response the fetch loop looks at.
#[derive(Debug, Deserialize)]
struct SearchPage {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    item: Vec<IgnoredAny>,
}

/// What the API sends instead of a result, e.g. for an unknown key.
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error_code: Value,
    #[serde(default)]
    message: String,
}

/// Counts the entries in `channel.item` of a page body.
pub fn count_items(page: u32, body: &str) -> Result<usize> {
    match serde_json::from_str::<SearchPage>(body) {
        Ok(parsed) => Ok(parsed.channel.item.len()),
        Err(err) => {
            if let Ok(ApiErrorEnvelope { error }) = serde_json::from_str(body) {
                let code = match error.error_code {
                    Value::String(s) => s,
                    Value::Null => "unknown".to_owned(),
                    other => other.to_string(),
                };
                return Err(Error::Api {
                    page,
                    code,
                    message: error.message,
                });
            }
            Err(Error::MalformedResponse {
                page,
                reason: err.to_string(),
            })
        }
    }
}
