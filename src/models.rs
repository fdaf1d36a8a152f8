//! Frontend Models
//!
//! Data structures exchanged with the objective endpoints.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Learning objective as seeded by the page or returned by `objective-get`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Objective {
    /// Absent when the objective has not been created yet
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    /// Names of other objectives, in display order
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

/// Validation result returned by the add/update endpoint
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ServerResult {
    #[serde(default)]
    pub savedsuccess: bool,
    #[serde(default)]
    pub edit_objective_name: Option<Vec<String>>,
    #[serde(default)]
    pub new_prerequisite: Option<Vec<String>>,
    /// Error keys this form has no slot for (csrf_token etc.)
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

impl ServerResult {
    /// First name error, if the key was present.
    /// A present but empty list yields an empty message.
    pub fn name_error(&self) -> Option<String> {
        first_message(&self.edit_objective_name)
    }

    /// First prerequisite error, if the key was present
    pub fn prerequisite_error(&self) -> Option<String> {
        first_message(&self.new_prerequisite)
    }

    /// Keys that carry no recognized field
    pub fn ignored_keys(&self) -> Vec<&str> {
        self.other.keys().map(String::as_str).collect()
    }
}

fn first_message(messages: &Option<Vec<String>>) -> Option<String> {
    messages
        .as_ref()
        .map(|list| list.first().cloned().unwrap_or_default())
}
