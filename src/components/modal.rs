//! Modal Shell Component
//!
//! Dialog overlay with title, body and footer. Visibility is owned by the caller.

use leptos::html;
use leptos::prelude::*;

/// True on the update where the dialog goes from hidden to shown
fn just_opened(previous: Option<bool>, open: bool) -> bool {
    open && previous != Some(true)
}

/// Dialog overlay
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `title` - Header text
/// * `on_close` - Called for the × button, Escape, and backdrop clicks
/// * `footer` - Footer content (action buttons)
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] footer: ViewFn,
    children: Children,
) -> impl IntoView {
    // Focus moves into the dialog on open so Escape reaches it
    let dialog_ref = NodeRef::<html::Div>::new();
    Effect::new(move |previous: Option<bool>| {
        let is_open = open.get();
        if just_opened(previous, is_open) {
            if let Some(dialog) = dialog_ref.get() {
                let _ = dialog.focus();
            }
        }
        is_open
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div
            class=move || if open.get() { "modal-backdrop open" } else { "modal-backdrop" }
            style:display=move || if open.get() { "block" } else { "none" }
            on:click=move |_| on_close.run(())
        >
            <div
                class="modal-dialog"
                node_ref=dialog_ref
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                on:click=|ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="modal-header">
                    <h4 class="modal-title">{move || title.get()}</h4>
                    <button type="button" class="close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
                <div class="modal-footer">{footer.run()}</div>
            </div>
        </div>
    }
}
