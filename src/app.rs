//! Objective Modal App
//!
//! Root component: builds the modal context and wires it to the page.

use leptos::prelude::*;

use crate::components::{NewObjectiveButton, ObjectiveModal};
use crate::config::ModalConfig;
use crate::context::ModalContext;
use crate::entry;

#[component]
pub fn App() -> impl IntoView {
    let config = ModalConfig::from_document();
    web_sys::console::log_1(&format!("[APP] Objective modal posting to {}", config.save_url).into());

    let ctx = ModalContext::new(config);
    provide_context(ctx);
    ctx.register();
    if let Err(e) = entry::expose_on_window() {
        web_sys::console::warn_1(&e);
    }

    let page_has_button = entry::bind_create_button(ctx);

    view! {
        <Show when=move || !page_has_button>
            <NewObjectiveButton />
        </Show>
        <ObjectiveModal />
    }
}
