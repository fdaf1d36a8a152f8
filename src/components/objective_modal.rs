//! Objective Modal Component
//!
//! Create/edit form for an objective and its prerequisites.

use leptos::prelude::*;
use leptos_dynamic_list::DynamicListView;

use crate::components::{FieldGroup, Modal};
use crate::context::use_modal;
use crate::state::{FormMode, ObjectiveModalStateStoreFields};

#[component]
pub fn ObjectiveModal() -> impl IntoView {
    let ctx = use_modal();
    let store = ctx.store;
    let config = ctx.config.get_value();

    let phase = store.phase();
    let open = Signal::derive(move || phase.get().is_visible());
    let submitting = Signal::derive(move || phase.get().is_submitting());
    let title = Signal::derive(move || match phase.get().mode() {
        Some(FormMode::Edit) => "Edit objective".to_string(),
        _ => "New objective".to_string(),
    });

    let name_error = Signal::derive(move || store.errors().get().name);
    let prerequisite_error = Signal::derive(move || store.errors().get().prerequisites);
    let general_error = move || store.errors().get().general;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.save();
    };

    view! {
        <Modal
            open=open
            title=title
            on_close=Callback::new(move |_| ctx.close())
            footer=move || view! {
                <button
                    type="button"
                    class="btn btn-default"
                    disabled=move || submitting.get()
                    on:click=move |_| ctx.close()
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    form="edit_objective_form"
                    class="btn btn-primary"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Saving..." } else { "Save" }}
                </button>
            }
        >
            <form id="edit_objective_form" on:submit=on_submit>
                {move || general_error().map(|message| view! {
                    <div class="alert alert-danger" role="alert">{message}</div>
                })}

                <FieldGroup label="Objective name" error=name_error>
                    <input
                        type="text"
                        class="form-control"
                        autocomplete="off"
                        disabled=move || submitting.get()
                        prop:value=move || store.name().get()
                        on:input=move |ev| store.name().set(event_target_value(&ev))
                    />
                </FieldGroup>

                <DynamicListView
                    handle=ctx.list
                    heading=config.list_heading.clone()
                    new_item_label=config.new_item_label.clone()
                    error=prerequisite_error
                    disabled=submitting
                />
            </form>
        </Modal>
    }
}
