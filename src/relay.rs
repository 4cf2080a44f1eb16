//! Outbound form relay: one JSON POST per contact submission.

use std::{future::Future, time::Duration};

use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::telemetry::{log_event, LogLevel};

pub const RELAY_ENDPOINT: &str = "https://formspree.io/f/mqarddvp";
pub const RELAY_SUBJECT: &str = "New Message from Portfolio Website";
pub const RELAY_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay answered with non-success status {0}")]
    Rejected(u16),
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("relay request timed out after {0:?}")]
    TimedOut(Duration),
    #[error("relay endpoint is not a usable http(s) URL: {0}")]
    InvalidEndpoint(String),
    #[error("failed to encode submission: {0}")]
    Encode(String),
}

impl RelayError {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Rejected(_) => "rejected",
            Self::Transport(_) => "transport",
            Self::TimedOut(_) => "timeout",
            Self::InvalidEndpoint(_) => "invalid_endpoint",
            Self::Encode(_) => "encode",
        }
    }

    fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected(status) => Some(*status),
            _ => None,
        }
    }
}

/// Sends a payload and reports the HTTP status the relay answered with.
/// Implementations apply [`RELAY_TIMEOUT`] themselves.
pub trait RelayTransport {
    fn send(&self, payload: &ContactPayload) -> impl Future<Output = Result<u16, RelayError>>;
}

/// Only a 2xx answer counts as delivered.
pub fn classify_status(status: u16) -> Result<(), RelayError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RelayError::Rejected(status))
    }
}

/// Sends once, classifies, and logs failures. The caller only learns
/// whether the relay accepted the message.
pub async fn transmit<T: RelayTransport>(transport: &T, payload: &ContactPayload) -> Result<(), RelayError> {
    let outcome = transport
        .send(payload)
        .await
        .and_then(classify_status);

    match &outcome {
        Ok(()) => log_event(LogLevel::Info, "contact_relay_delivered", json!({})),
        Err(error) => log_event(
            LogLevel::Warn,
            "contact_relay_failed",
            json!({
                "error_class": error.class(),
                "status": error.status(),
                "detail": error.to_string(),
            }),
        ),
    }

    outcome
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserRelay;

#[cfg(target_arch = "wasm32")]
mod browser {
    use futures_util::future::{select, Either};
    use gloo_net::http::Request;
    use gloo_timers::future::TimeoutFuture;

    use super::{ContactPayload, RelayError, RelayTransport, RELAY_ENDPOINT, RELAY_TIMEOUT};

    /// `fetch`-backed relay used by the page.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct BrowserRelay;

    impl RelayTransport for BrowserRelay {
        async fn send(&self, payload: &ContactPayload) -> Result<u16, RelayError> {
            let request = Request::post(RELAY_ENDPOINT)
                .header("Accept", "application/json")
                .json(payload)
                .map_err(|error| RelayError::Encode(error.to_string()))?;

            let send = Box::pin(request.send());
            let deadline = Box::pin(TimeoutFuture::new(RELAY_TIMEOUT.as_millis() as u32));

            match select(send, deadline).await {
                Either::Left((Ok(response), _)) => Ok(response.status()),
                Either::Left((Err(error), _)) => Err(RelayError::Transport(error.to_string())),
                Either::Right(((), _)) => Err(RelayError::TimedOut(RELAY_TIMEOUT)),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::HttpRelay;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::Duration;

    use reqwest::header::{ACCEPT, CONTENT_TYPE};
    use url::Url;

    use super::{ContactPayload, RelayError, RelayTransport, RELAY_ENDPOINT, RELAY_TIMEOUT};

    const USER_AGENT: &str = "orbit-portfolio-relay/1.0";

    /// reqwest-backed relay for native callers.
    #[derive(Clone)]
    pub struct HttpRelay {
        client: reqwest::Client,
        endpoint: Url,
    }

    impl HttpRelay {
        pub fn new(endpoint: &str) -> Result<Self, RelayError> {
            Self::with_timeout(endpoint, RELAY_TIMEOUT)
        }

        pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self, RelayError> {
            let endpoint = parse_http_url(endpoint)?;
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .user_agent(USER_AGENT)
                .build()
                .map_err(|error| RelayError::Transport(error.to_string()))?;

            Ok(Self { client, endpoint })
        }

        pub fn default_endpoint() -> Result<Self, RelayError> {
            Self::new(RELAY_ENDPOINT)
        }

        pub fn endpoint(&self) -> &Url {
            &self.endpoint
        }
    }

    impl RelayTransport for HttpRelay {
        async fn send(&self, payload: &ContactPayload) -> Result<u16, RelayError> {
            let body = serde_json::to_vec(payload).map_err(|error| RelayError::Encode(error.to_string()))?;

            let response = self
                .client
                .post(self.endpoint.clone())
                .header(CONTENT_TYPE, "application/json")
                .header(ACCEPT, "application/json")
                .body(body)
                .send()
                .await
                .map_err(|error| {
                    if error.is_timeout() {
                        RelayError::TimedOut(RELAY_TIMEOUT)
                    } else {
                        RelayError::Transport(error.to_string())
                    }
                })?;

            Ok(response.status().as_u16())
        }
    }

    fn parse_http_url(value: &str) -> Result<Url, RelayError> {
        let parsed = Url::parse(value.trim()).map_err(|_| RelayError::InvalidEndpoint(value.to_string()))?;

        if parsed.scheme() == "http" || parsed.scheme() == "https" {
            Ok(parsed)
        } else {
            Err(RelayError::InvalidEndpoint(value.to_string()))
        }
    }
}
