//! Modal Configuration
//!
//! Endpoint URLs, CSRF token and widget texts. Defaults are compiled in;
//! the hosting page overrides them with `<meta name=... content=...>` tags.

/// Default add/update endpoint
pub const DEFAULT_SAVE_URL: &str = "/objective-add-update";
/// Default single-objective lookup endpoint
pub const DEFAULT_GET_URL: &str = "/objective-get";
pub const DEFAULT_LIST_HEADING: &str = "Prerequisites";
pub const DEFAULT_NEW_ITEM_LABEL: &str = "Enter new prerequisite for this objective";

/// Meta tag names read from the page
pub const META_SAVE_URL: &str = "objective-add-update-url";
pub const META_GET_URL: &str = "objective-get-url";
pub const META_CSRF_TOKEN: &str = "csrf-token";
pub const META_LIST_HEADING: &str = "objective-prerequisites-heading";
pub const META_NEW_ITEM_LABEL: &str = "objective-prerequisites-label";

#[derive(Debug, Clone, PartialEq)]
pub struct ModalConfig {
    pub save_url: String,
    pub get_url: String,
    /// Sent as the `csrf_token` form field when present
    pub csrf_token: Option<String>,
    pub list_heading: String,
    pub new_item_label: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            save_url: DEFAULT_SAVE_URL.to_string(),
            get_url: DEFAULT_GET_URL.to_string(),
            csrf_token: None,
            list_heading: DEFAULT_LIST_HEADING.to_string(),
            new_item_label: DEFAULT_NEW_ITEM_LABEL.to_string(),
        }
    }
}

impl ModalConfig {
    /// Build from a key lookup; blank values fall back to the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();
        Self {
            save_url: read(META_SAVE_URL).unwrap_or(defaults.save_url),
            get_url: read(META_GET_URL).unwrap_or(defaults.get_url),
            csrf_token: read(META_CSRF_TOKEN),
            list_heading: read(META_LIST_HEADING).unwrap_or(defaults.list_heading),
            new_item_label: read(META_NEW_ITEM_LABEL).unwrap_or(defaults.new_item_label),
        }
    }

    /// Read overrides from the current document's meta tags
    pub fn from_document() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        Self::from_lookup(|key| {
            let doc = document.as_ref()?;
            let selector = format!("meta[name=\"{}\"]", key);
            doc.query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"))
        })
    }

    /// URL for fetching one objective
    pub fn objective_url(&self, id: u32) -> String {
        let sep = if self.get_url.contains('?') { '&' } else { '?' };
        format!("{}{}objective_id={}", self.get_url, sep, id)
    }
}
