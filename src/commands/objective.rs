//! Objective Commands
//!
//! Bindings for the add/update and lookup endpoints.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{get_text, post_form};
use crate::config::ModalConfig;
use crate::error::SaveError;
use crate::models::{Objective, ServerResult};
use crate::payload::FormPayload;

/// Send the form to the add/update endpoint
pub async fn save_objective(config: &ModalConfig, payload: &FormPayload) -> Result<ServerResult, SaveError> {
    let body = post_form(&config.save_url, &payload.to_body()).await?;
    parse_server_result(&body)
}

/// Fetch one objective for the edit form
pub async fn get_objective(config: &ModalConfig, id: u32) -> Result<Objective, SaveError> {
    let body = get_text(&config.objective_url(id)).await?;
    parse_json_body(&body)
}

/// Parse the add/update response body
pub fn parse_server_result(body: &str) -> Result<ServerResult, SaveError> {
    parse_json_body(body)
}

/// Parse a JSON body. A body that is a JSON string wrapping a document
/// (legacy double encoding) is unwrapped once.
fn parse_json_body<T: DeserializeOwned>(body: &str) -> Result<T, SaveError> {
    let value: Value = serde_json::from_str(body.trim())?;
    let value = match value {
        Value::String(inner) => serde_json::from_str(&inner)?,
        other => other,
    };
    Ok(serde_json::from_value(value)?)
}
