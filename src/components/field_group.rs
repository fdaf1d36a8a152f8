//! Field Group Component
//!
//! Labelled form group with an inline error slot.

use leptos::prelude::*;

/// Form group marked `has-error` while `error` holds a message
#[component]
pub fn FieldGroup(
    #[prop(into)] label: String,
    #[prop(into)] error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || if error.get().is_some() { "form-group has-error" } else { "form-group" }>
            <label class="control-label">{label}</label>
            {children()}
            <span class="help-block">{move || error.get().unwrap_or_default()}</span>
        </div>
    }
}
