//! Server Command Wrappers
//!
//! Frontend bindings to the objective endpoints, organized by domain.

mod objective;
mod page;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::error::SaveError;

// Re-export all public items
pub use objective::*;
pub use page::*;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// POST a form-encoded body and return the response text
async fn post_form(url: &str, body: &str) -> Result<String, SaveError> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_credentials(RequestCredentials::SameOrigin);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init)?;
    request.headers().set("Content-Type", FORM_CONTENT_TYPE)?;
    request.headers().set("X-Requested-With", "XMLHttpRequest")?;
    fetch_text(&request).await
}

/// GET a URL and return the response text
async fn get_text(url: &str) -> Result<String, SaveError> {
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_credentials(RequestCredentials::SameOrigin);

    let request = Request::new_with_str_and_init(url, &init)?;
    request.headers().set("X-Requested-With", "XMLHttpRequest")?;
    fetch_text(&request).await
}

async fn fetch_text(request: &Request) -> Result<String, SaveError> {
    let window = web_sys::window().ok_or_else(|| SaveError::Network("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(request))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(SaveError::Status(response.status()));
    }
    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| SaveError::Malformed("response body is not text".to_string()))
}
