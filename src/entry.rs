//! Page Entry Points
//!
//! Functions exported to the hosting page's JavaScript, plus binding of the
//! page's own "create objective" trigger.
//!
//! Exports of a binary crate only land on the bundler's bindings object, so
//! [`expose_on_window`] also installs them as `window` globals for page
//! templates that call e.g. `loadEditObjectiveModal(objective)` directly.

use wasm_bindgen::prelude::*;

use crate::context::ModalContext;
use crate::models::Objective;

/// Id of the page's create button, when it renders one
pub const CREATE_BUTTON_ID: &str = "create_objective";

/// Global names installed on `window`
pub const LOAD_EDIT_GLOBAL: &str = "loadEditObjectiveModal";
pub const LOAD_EDIT_BY_ID_GLOBAL: &str = "loadEditObjectiveModalById";
pub const OPEN_CREATE_GLOBAL: &str = "openCreateObjectiveModal";

fn active_modal() -> Result<ModalContext, JsValue> {
    ModalContext::active().ok_or_else(|| JsValue::from_str("objective modal is not mounted"))
}

/// Open the modal prefilled with `objective` (`{ id?, name, prerequisites? }`)
#[wasm_bindgen(js_name = loadEditObjectiveModal)]
pub fn load_edit_objective_modal(objective: JsValue) -> Result<(), JsValue> {
    let objective: Objective = serde_wasm_bindgen::from_value(objective)?;
    active_modal()?.open_edit(&objective);
    Ok(())
}

/// Fetch the objective with `id` and open it for editing
#[wasm_bindgen(js_name = loadEditObjectiveModalById)]
pub fn load_edit_objective_modal_by_id(id: u32) -> Result<(), JsValue> {
    active_modal()?.open_edit_by_id(id);
    Ok(())
}

/// Open the empty create form
#[wasm_bindgen(js_name = openCreateObjectiveModal)]
pub fn open_create_objective_modal() -> Result<(), JsValue> {
    active_modal()?.open_create();
    Ok(())
}

/// Attach the create form to the page's own button.
/// Returns false when the page has no such button.
pub fn bind_create_button(ctx: ModalContext) -> bool {
    let Some(button) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CREATE_BUTTON_ID))
    else {
        return false;
    };

    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.open_create();
    });
    let bound = button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .is_ok();
    on_click.forget();
    bound
}

/// Install the entry points as `window` globals. Errors are thrown back to the caller in JS.
pub fn expose_on_window() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let load_edit = Closure::<dyn Fn(JsValue)>::new(|objective: JsValue| {
        if let Err(e) = load_edit_objective_modal(objective) {
            wasm_bindgen::throw_val(e);
        }
    });
    let load_edit_by_id = Closure::<dyn Fn(u32)>::new(|id: u32| {
        if let Err(e) = load_edit_objective_modal_by_id(id) {
            wasm_bindgen::throw_val(e);
        }
    });
    let open_create = Closure::<dyn Fn()>::new(|| {
        if let Err(e) = open_create_objective_modal() {
            wasm_bindgen::throw_val(e);
        }
    });

    js_sys::Reflect::set(&window, &JsValue::from_str(LOAD_EDIT_GLOBAL), load_edit.as_ref())?;
    js_sys::Reflect::set(&window, &JsValue::from_str(LOAD_EDIT_BY_ID_GLOBAL), load_edit_by_id.as_ref())?;
    js_sys::Reflect::set(&window, &JsValue::from_str(OPEN_CREATE_GLOBAL), open_create.as_ref())?;

    load_edit.forget();
    load_edit_by_id.forget();
    open_create.forget();
    Ok(())
}
