//! Page Commands
//!
//! Hosting-page side effects.

use wasm_bindgen::prelude::*;

/// Full reload so server-rendered lists pick up the saved objective
pub fn reload_page() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.location().reload()
}
