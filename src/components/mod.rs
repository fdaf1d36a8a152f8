//! UI Components
//!
//! Leptos components for the objective modal.

mod modal;
mod field_group;
mod objective_modal;
mod new_objective_button;

pub use modal::Modal;
pub use field_group::FieldGroup;
pub use objective_modal::ObjectiveModal;
pub use new_objective_button::NewObjectiveButton;
