//! Server functions bridging the dashboard to the upstream presence feed.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Wire shape of the proxy response: the raw CSV payload on success, a
/// human-readable message on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEnvelope {
    pub success: bool,
    pub data: Option<String>,
    pub error: Option<String>,
}

impl FeedEnvelope {
    pub fn ok(data: String) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Collector export polled by the proxy when `AFFLUENCE_FEED_URL` is unset.
#[cfg(feature = "server")]
const DEFAULT_FEED_URL: &str = "http://4.211.255.87/people_daily_remote.csv";

/// Forward the upstream CSV export to the client, verbatim.
///
/// Upstream failures are folded into the envelope (`success: false`) instead
/// of a transport error, so the dashboard can tell "the collector is down"
/// apart from "the proxy is unreachable".
#[server(endpoint = "get")]
pub async fn fetch_presence_feed() -> Result<FeedEnvelope, ServerFnError> {
    let url =
        std::env::var("AFFLUENCE_FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());

    let envelope = match fetch_upstream(&url).await {
        Ok(body) => FeedEnvelope::ok(body),
        Err(err) => {
            eprintln!("[feed] upstream fetch failed: {err}");
            FeedEnvelope::failure(err.to_string())
        }
    };

    Ok(envelope)
}

#[cfg(feature = "server")]
async fn fetch_upstream(url: &str) -> Result<String, reqwest::Error> {
    let response = reqwest::get(url).await?.error_for_status()?;
    response.text().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_constructors_set_the_flag() {
        let ok = FeedEnvelope::ok("a,b\n".to_string());
        assert!(ok.success);
        assert_eq!(ok.data.as_deref(), Some("a,b\n"));
        assert!(ok.error.is_none());

        let failed = FeedEnvelope::failure("timeout");
        assert!(!failed.success);
        assert!(failed.data.is_none());
        assert_eq!(failed.error.as_deref(), Some("timeout"));
    }
}
