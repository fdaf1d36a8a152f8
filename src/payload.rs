//! Form Payload
//!
//! `application/x-www-form-urlencoded` body for the add/update endpoint.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const ID_FIELD: &str = "edit_objective_id";
pub const NAME_FIELD: &str = "edit_objective_name";
pub const CSRF_FIELD: &str = "csrf_token";
pub const PREREQUISITES_FIELD: &str = "prerequisites";

/// Separator the server splits the prerequisite field on
const PREREQUISITE_SEPARATOR: &str = ",";

/// Bytes left unescaped by browsers when serializing forms
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Ordered key/value pairs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        self.fields.push((key.to_string(), value.into()));
    }

    /// Add the prerequisite sequence as a single comma-joined field
    pub fn push_prerequisites(&mut self, prerequisites: &[String]) {
        self.push(PREREQUISITES_FIELD, prerequisites.join(PREREQUISITE_SEPARATOR));
    }

    /// First value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Encode as a request body
    pub fn to_body(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode(value: &str) -> String {
    // Spaces travel as '+' like a browser-submitted form
    utf8_percent_encode(value, FORM_VALUE)
        .to_string()
        .replace("%20", "+")
}
