//! Creation request payload
//!
//! Assembled from a validated form snapshot at submit time. Optional fields
//! are omitted from the JSON body entirely rather than sent as null.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::validation::FormFields;
use crate::errors::{Result, ShortformError};
use crate::utils::parse_expiry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationRequest {
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u64>,
    /// Lifetime in milliseconds, from either expiry mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_for: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
}

impl CreationRequest {
    /// Build the payload from a form snapshot the validation gate has
    /// already passed. `now` anchors the absolute-expiry conversion.
    pub fn from_fields(fields: &FormFields<'_>, now: DateTime<Utc>) -> Result<Self> {
        let max_uses = if fields.advanced && !fields.max_uses.is_empty() {
            let parsed = fields
                .max_uses
                .parse::<u64>()
                .map_err(|e| ShortformError::validation(format!("max uses: {}", e)))?;
            Some(parsed)
        } else {
            None
        };

        let valid_for = if !fields.advanced {
            None
        } else if fields.date_mode {
            if fields.expiry_date.trim().is_empty() {
                None
            } else {
                let target =
                    parse_expiry(fields.expiry_date).map_err(ShortformError::date_parse)?;
                Some((target - now).num_milliseconds())
            }
        } else if fields.duration.is_zero() {
            // All zeros means no countdown was supplied.
            None
        } else {
            Some(fields.duration.total_millis() as i64)
        };

        let custom_id = (fields.advanced && !fields.custom_id.is_empty())
            .then(|| fields.custom_id.to_string());

        Ok(Self {
            link: fields.link.to_string(),
            max_uses,
            valid_for,
            custom_id,
        })
    }
}
