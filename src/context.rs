//! Modal Context
//!
//! Shared handles for the objective modal, provided via Leptos Context API
//! and registered for the page-level entry points.

use std::cell::Cell;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dynamic_list::DynamicListHandle;
use reactive_stores::Store;

use crate::commands;
use crate::config::ModalConfig;
use crate::models::Objective;
use crate::state::{ObjectiveModalState, SaveOutcome};

thread_local! {
    static ACTIVE_MODAL: Cell<Option<ModalContext>> = const { Cell::new(None) };
}

/// Modal-wide handles
#[derive(Clone, Copy)]
pub struct ModalContext {
    pub store: Store<ObjectiveModalState>,
    /// Prerequisite list widget state
    pub list: DynamicListHandle,
    pub config: StoredValue<ModalConfig>,
}

impl ModalContext {
    pub fn new(config: ModalConfig) -> Self {
        Self {
            store: Store::new(ObjectiveModalState::new()),
            list: DynamicListHandle::new(),
            config: StoredValue::new(config),
        }
    }

    /// Make this context reachable from the page entry points
    pub fn register(self) {
        ACTIVE_MODAL.with(|active| active.set(Some(self)));
    }

    /// Context registered by the mounted app
    pub fn active() -> Option<Self> {
        ACTIVE_MODAL.with(|active| active.get())
    }

    pub fn open_create(&self) {
        self.store.write().open_create(&self.list);
    }

    pub fn open_edit(&self, objective: &Objective) {
        web_sys::console::log_1(
            &format!(
                "[OBJECTIVE] Editing {:?} with {} prerequisites",
                objective.id,
                objective.prerequisites.len()
            )
            .into(),
        );
        self.store.write().open_edit(objective, &self.list);
    }

    /// Fetch an objective by id, then open it for editing.
    /// Dropped if the form is opened again before the fetch resolves.
    pub fn open_edit_by_id(&self, id: u32) {
        let Some(ticket) = self.store.write().begin_load() else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            let config = ctx.config.get_value();
            match commands::get_objective(&config, id).await {
                Ok(objective) => {
                    if !ctx.store.write().finish_load(ticket, &objective, &ctx.list) {
                        web_sys::console::log_1(&format!("[OBJECTIVE] Dropping stale load of {}", id).into());
                    }
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("[OBJECTIVE] Failed to load objective {}: {}", id, e).into());
                }
            }
        });
    }

    pub fn close(&self) {
        self.store.write().close();
    }

    /// Submit the form. No-op while a save is in flight.
    pub fn save(&self) {
        let config = self.config.get_value();
        let Some(request) = self.store.write().begin_save(&self.list, &config) else {
            return;
        };
        let store = self.store;
        spawn_local(async move {
            let result = commands::save_objective(&config, &request.payload).await;
            match &result {
                Ok(server) if !server.ignored_keys().is_empty() => {
                    web_sys::console::log_1(
                        &format!("[OBJECTIVE] Ignoring error keys {:?}", server.ignored_keys()).into(),
                    );
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("[OBJECTIVE] Save failed: {}", e).into());
                }
                _ => {}
            }

            let outcome = store.write().finish_save(request.ticket, result);
            web_sys::console::log_1(&format!("[OBJECTIVE] Save settled: {:?}", outcome).into());
            if outcome == SaveOutcome::Reload {
                if let Err(e) = commands::reload_page() {
                    web_sys::console::warn_1(&e);
                }
            }
        });
    }
}

/// Get the modal context provided by [`crate::app::App`]
pub fn use_modal() -> ModalContext {
    expect_context::<ModalContext>()
}
