//! Link-creation client

use std::sync::Arc;

use tracing::debug;

use super::{ApiContext, ClientError};
use crate::form::CreationRequest;

/// What a completed creation call means for the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationOutcome {
    /// 200: the body is the short link.
    Created(String),
    /// 409: the requested custom id is already taken.
    Conflict,
    /// Any other status, surfaced verbatim.
    Failed { status: u16, body: String },
}

pub struct LinkClient {
    ctx: Arc<ApiContext>,
}

impl LinkClient {
    pub fn new(ctx: Arc<ApiContext>) -> Self {
        Self { ctx }
    }

    /// `POST /custom` with the JSON creation payload.
    ///
    /// Only transport and body-read failures are `Err`; every HTTP status
    /// maps to a [`CreationOutcome`] the state machine knows how to apply.
    pub fn create_link(&self, request: &CreationRequest) -> Result<CreationOutcome, ClientError> {
        let url = self.ctx.endpoint("/custom");
        let resp = self.ctx.agent().post(&url).send_json(request)?;

        let status = resp.status().as_u16();
        let body = resp
            .into_body()
            .read_to_string()
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        debug!(status, "creation request completed");

        Ok(match status {
            200 => CreationOutcome::Created(body.trim().to_string()),
            409 => CreationOutcome::Conflict,
            _ => CreationOutcome::Failed { status, body },
        })
    }
}
