//! HTTP client layer for the form
//!
//! Two tiny clients over one shared [`ApiContext`]: a one-shot config fetch
//! and the link-creation call. Both are synchronous ureq requests; the TUI
//! runs them on the tokio blocking pool and receives results over a channel,
//! so the event loop never blocks on the network.
//!
//! Status handling is part of the domain here: 409 is a first-class outcome
//! (custom id taken), not an error, so the agent is configured to hand back
//! non-2xx responses instead of failing on them.

mod config_client;
mod link_client;

pub use config_client::{ConfigClient, ServiceLimits};
pub use link_client::{CreationOutcome, LinkClient};

use std::fmt;
use std::time::Duration;

use ureq::Agent;

/// Shared connection context: base URL plus a configured agent.
pub struct ApiContext {
    base_url: String,
    agent: Agent,
}

impl ApiContext {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub(crate) fn agent(&self) -> &Agent {
        &self.agent
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// ============ ClientError ============

/// Errors from the client layer.
#[derive(Debug, Clone)]
pub enum ClientError {
    /// The request never produced an HTTP response (DNS, refused, timeout).
    Transport(String),
    /// The response arrived but its body was not what the endpoint promised.
    Decode(String),
    /// An endpoint with no domain meaning for this status answered with it.
    Status { status: u16, body: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "request failed: {}", msg),
            ClientError::Decode(msg) => write!(f, "unexpected response: {}", msg),
            // Mirrors what the form surfaces for an opaque service error.
            ClientError::Status { status, body } => write!(f, "{}: {}", status, body),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}
