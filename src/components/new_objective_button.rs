//! New Objective Button Component
//!
//! Fallback trigger for pages without their own `#create_objective` element.

use leptos::prelude::*;

use crate::context::use_modal;

#[component]
pub fn NewObjectiveButton() -> impl IntoView {
    let ctx = use_modal();

    view! {
        <button
            type="button"
            class="btn btn-primary new-objective-btn"
            on:click=move |_| ctx.open_create()
        >
            "New objective"
        </button>
    }
}
