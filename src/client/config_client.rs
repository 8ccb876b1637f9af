//! Config service client (one-shot fetch at start-up)

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use super::{ApiContext, ClientError};

/// Input bounds advertised by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ServiceLimits {
    pub max_link_length: usize,
    pub max_custom_id_length: usize,
}

pub struct ConfigClient {
    ctx: Arc<ApiContext>,
}

impl ConfigClient {
    pub fn new(ctx: Arc<ApiContext>) -> Self {
        Self { ctx }
    }

    /// `GET /config`. Any non-200 is reported as `{status}: {body}` and the
    /// caller keeps running without limits.
    pub fn fetch_limits(&self) -> Result<ServiceLimits, ClientError> {
        let url = self.ctx.endpoint("/config");
        let resp = self.ctx.agent().get(&url).call()?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body = resp.into_body().read_to_string().unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        let limits: ServiceLimits = resp
            .into_body()
            .read_json()
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        debug!(
            max_link_length = limits.max_link_length,
            max_custom_id_length = limits.max_custom_id_length,
            "fetched service limits"
        );
        Ok(limits)
    }
}
