//! Objective Modal State
//!
//! Form state and transitions for the create/edit objective modal.
//! The prerequisite entries live in the injected [`DynamicList`]; everything
//! else the modal shows is held here.

use leptos_dynamic_list::DynamicList;
use reactive_stores::Store;

use crate::config::ModalConfig;
use crate::error::SaveError;
use crate::models::{Objective, ServerResult};
use crate::payload::{FormPayload, CSRF_FIELD, ID_FIELD, NAME_FIELD};

/// Which kind of save the form will issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open(FormMode),
    /// A save request is in flight
    Submitting(FormMode),
}

impl ModalPhase {
    pub fn is_visible(&self) -> bool {
        !matches!(self, ModalPhase::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ModalPhase::Submitting(_))
    }

    pub fn mode(&self) -> Option<FormMode> {
        match self {
            ModalPhase::Closed => None,
            ModalPhase::Open(mode) | ModalPhase::Submitting(mode) => Some(*mode),
        }
    }
}

/// Error text per field. A field group is marked errored while its slot is `Some`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub prerequisites: Option<String>,
    /// Transport failures
    pub general: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.prerequisites.is_none() && self.general.is_none()
    }
}

/// A save ready to be sent. `ticket` must be handed back to [`ObjectiveModalState::finish_save`].
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub ticket: u32,
    pub payload: FormPayload,
}

/// What the caller has to do after a save settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Saved; the page must be reloaded
    Reload,
    /// Server rejected the form; errors are painted
    Rejected,
    /// Request failed; the banner is shown
    Failed,
    /// Response belongs to a form that is no longer shown
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct ObjectiveModalState {
    pub phase: ModalPhase,
    pub id: Option<u32>,
    pub name: String,
    pub errors: FieldErrors,
    /// Bumped on every submission, load and reset
    pub ticket: u32,
}

impl ObjectiveModalState {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self, list: &impl DynamicList) {
        self.id = None;
        self.name.clear();
        self.errors = FieldErrors::default();
        self.ticket = self.ticket.wrapping_add(1);
        list.clear_items();
    }

    /// Empty form in create mode
    pub fn open_create(&mut self, list: &impl DynamicList) {
        self.reset(list);
        self.phase = ModalPhase::Open(FormMode::Create);
    }

    /// Form prefilled from an existing objective
    pub fn open_edit(&mut self, objective: &Objective, list: &impl DynamicList) {
        self.reset(list);
        self.id = objective.id;
        self.name = objective.name.clone();
        for prerequisite in &objective.prerequisites {
            list.add_item(prerequisite.clone());
        }
        let mode = if objective.id.is_some() { FormMode::Edit } else { FormMode::Create };
        self.phase = ModalPhase::Open(mode);
    }

    /// Claim a ticket for fetching an objective to edit.
    /// Returns `None` while a save is in flight.
    pub fn begin_load(&mut self) -> Option<u32> {
        if self.phase.is_submitting() {
            return None;
        }
        self.ticket = self.ticket.wrapping_add(1);
        Some(self.ticket)
    }

    /// Open the fetched objective unless the form changed since `begin_load`
    pub fn finish_load(&mut self, ticket: u32, objective: &Objective, list: &impl DynamicList) -> bool {
        if ticket != self.ticket || self.phase.is_submitting() {
            return false;
        }
        self.open_edit(objective, list);
        true
    }

    /// Hide the modal. Returns false while a save is in flight.
    pub fn close(&mut self) -> bool {
        if self.phase.is_submitting() {
            return false;
        }
        self.phase = ModalPhase::Closed;
        true
    }

    /// Collect the form and enter the submitting phase.
    /// Returns `None` when the modal is closed or a save is already in flight.
    pub fn begin_save(&mut self, list: &impl DynamicList, config: &ModalConfig) -> Option<SaveRequest> {
        let mode = match self.phase {
            ModalPhase::Open(mode) => mode,
            _ => return None,
        };

        let mut payload = FormPayload::new();
        payload.push(ID_FIELD, self.id.map(|id| id.to_string()).unwrap_or_default());
        payload.push(NAME_FIELD, self.name.clone());
        if let Some(token) = &config.csrf_token {
            payload.push(CSRF_FIELD, token.clone());
        }
        payload.push_prerequisites(&list.get_items());

        self.ticket = self.ticket.wrapping_add(1);
        self.phase = ModalPhase::Submitting(mode);
        Some(SaveRequest { ticket: self.ticket, payload })
    }

    /// Apply the result of the request issued with `ticket`
    pub fn finish_save(&mut self, ticket: u32, result: Result<ServerResult, SaveError>) -> SaveOutcome {
        let mode = match self.phase {
            ModalPhase::Submitting(mode) if ticket == self.ticket => mode,
            _ => return SaveOutcome::Stale,
        };

        match result {
            Ok(server) => {
                self.errors = FieldErrors::default();
                if server.savedsuccess {
                    self.phase = ModalPhase::Closed;
                    return SaveOutcome::Reload;
                }
                self.errors.name = server.name_error();
                self.errors.prerequisites = server.prerequisite_error();
                self.phase = ModalPhase::Open(mode);
                SaveOutcome::Rejected
            }
            Err(err) => {
                self.errors.general = Some(err.banner_text());
                self.phase = ModalPhase::Open(mode);
                SaveOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::PREREQUISITES_FIELD;
    use leptos_dynamic_list::DynamicListHandle;
    use std::cell::RefCell;

    /// In-memory stand-in for the list widget
    #[derive(Default)]
    struct MemoryList(RefCell<Vec<String>>);

    impl MemoryList {
        fn with(items: &[&str]) -> Self {
            Self(RefCell::new(items.iter().map(|s| s.to_string()).collect()))
        }
    }

    impl DynamicList for MemoryList {
        fn add_item(&self, text: String) {
            self.0.borrow_mut().push(text);
        }
        fn clear_items(&self) {
            self.0.borrow_mut().clear();
        }
        fn get_items(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    fn objective(id: Option<u32>, name: &str, prerequisites: &[&str]) -> Objective {
        Objective {
            id,
            name: name.to_string(),
            prerequisites: prerequisites.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn rejected(json: &str) -> ServerResult {
        serde_json::from_str(json).unwrap()
    }

    fn submitted(state: &mut ObjectiveModalState, list: &MemoryList) -> SaveRequest {
        submitted_with(state, list)
    }

    fn submitted_with(state: &mut ObjectiveModalState, list: &impl DynamicList) -> SaveRequest {
        state.begin_save(list, &ModalConfig::default()).unwrap()
    }

    #[test]
    fn test_open_create_clears_previous_state() {
        let list = MemoryList::with(&["Old"]);
        let mut state = ObjectiveModalState::new();
        state.open_edit(&objective(Some(3), "Ratios", &["Fractions"]), &list);
        let request = submitted(&mut state, &list);
        state.finish_save(
            request.ticket,
            Ok(rejected(r#"{"savedsuccess":false,"edit_objective_name":["Taken"],"new_prerequisite":["Missing"]}"#)),
        );

        state.open_create(&list);

        assert_eq!(state.phase, ModalPhase::Open(FormMode::Create));
        assert_eq!(state.id, None);
        assert_eq!(state.name, "");
        assert!(list.get_items().is_empty());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_open_edit_preserves_prerequisite_order() {
        let list = MemoryList::with(&["Leftover"]);
        let mut state = ObjectiveModalState::new();
        state.open_edit(&objective(Some(9), "Percentages", &["A", "B", "C"]), &list);

        assert_eq!(state.phase, ModalPhase::Open(FormMode::Edit));
        assert_eq!(state.id, Some(9));
        assert_eq!(state.name, "Percentages");
        assert_eq!(list.get_items(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_open_edit_round_trips_prerequisites_through_widget() {
        let list = DynamicListHandle::new();
        let mut state = ObjectiveModalState::new();
        state.open_edit(&objective(Some(1), "X", &["A", " B ", "", "C"]), &list);

        assert_eq!(list.get_items(), vec!["A", " B ", "", "C"]);
        let request = submitted_with(&mut state, &list);
        assert_eq!(request.payload.get(PREREQUISITES_FIELD), Some("A, B ,,C"));
    }

    #[test]
    fn test_open_edit_without_id_is_create() {
        let list = MemoryList::default();
        let mut state = ObjectiveModalState::new();
        state.open_edit(&objective(None, "Draft", &[]), &list);
        assert_eq!(state.phase, ModalPhase::Open(FormMode::Create));
    }

    #[test]
    fn test_save_success_closes_and_reloads() {
        let list = MemoryList::default();
        let mut state = ObjectiveModalState::new();
        state.open_create(&list);
        state.errors.general = Some("earlier failure".to_string());

        let request = submitted(&mut state, &list);
        assert!(state.phase.is_submitting());

        let outcome = state.finish_save(request.ticket, Ok(rejected(r#"{"savedsuccess":true}"#)));
        assert_eq!(outcome, SaveOutcome::Reload);
        assert_eq!(state.phase, ModalPhase::Closed);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_name_error_marks_only_name() {
        let list = MemoryList::default();
        let mut state = ObjectiveModalState::new();
        state.open_create(&list);
        let request = submitted(&mut state, &list);

        let outcome = state.finish_save(
            request.ticket,
            Ok(rejected(r#"{"savedsuccess":false,"edit_objective_name":["Name required"]}"#)),
        );
        assert_eq!(outcome, SaveOutcome::Rejected);
        assert_eq!(state.phase, ModalPhase::Open(FormMode::Create));
        assert_eq!(state.errors.name.as_deref(), Some("Name required"));
        assert_eq!(state.errors.prerequisites, None);
    }

    #[test]
    fn test_prerequisite_error_marks_only_list() {
        let list = MemoryList::default();
        let mut state = ObjectiveModalState::new();
        state.open_edit(&objective(Some(1), "Ratios", &["Fractions", "Fractions"]), &list);

        // A name error from the previous attempt must not linger
        let first = submitted(&mut state, &list);
        state.finish_save(first.ticket, Ok(rejected(r#"{"edit_objective_name":["Taken"]}"#)));

        let second = submitted(&mut state, &list);
        let outcome = state.finish_save(
            second.ticket,
            Ok(rejected(r#"{"savedsuccess":false,"new_prerequisite":["Duplicate prerequisite"]}"#)),
        );
        assert_eq!(outcome, SaveOutcome::Rejected);
        assert_eq!(state.errors.name, None);
        assert_eq!(state.errors.prerequisites.as_deref(), Some("Duplicate prerequisite"));
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let list = MemoryList::default();
        let mut state = ObjectiveModalState::new();
        state.open_create(&list);
        let request = submitted(&mut state, &list);
        let outcome = state.finish_save(
            request.ticket,
            Ok(rejected(r#"{"savedsuccess":false,"csrf_token":["CSRF token missing"]}"#)),
        );
        assert_eq!(outcome, SaveOutcome::Rejected);
        assert!(state.errors.is_empty());
        assert!(state.phase.is_visible());
    }

    #[test]
    fn test_collected_prerequisites_match_list() {
        let list = MemoryList::default();
        let mut state = ObjectiveModalState::new();
        state.open_edit(&objective(Some(4), "Algebra", &["Zeta", "Alpha"]), &list);
        list.add_item("Middle, with comma".to_string());
        state.name = "Algebra II".to_string();

        let config = ModalConfig {
            csrf_token: Some("tok".to_string()),
            ..ModalConfig::default()
        };
        let request = state.begin_save(&list, &config).unwrap();
        let payload = &request.payload;

        assert_eq!(payload.get(ID_FIELD), Some("4"));
        assert_eq!(payload.get(NAME_FIELD), Some("Algebra II"));
        assert_eq!(payload.get(CSRF_FIELD), Some("tok"));
        assert_eq!(payload.get(PREREQUISITES_FIELD), Some("Zeta,Alpha,Middle, with comma"));
        let keys: Vec<&str> = payload.fields().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec![ID_FIELD, NAME_FIELD, CSRF_FIELD, PREREQUISITES_FIELD]);
    }

    #[test]
    fn test_create_sends_empty_id() {
        let list = MemoryList::default();
        let mut state = ObjectiveModalState::new();
        state.open_create(&list);
        let request = submitted(&mut state, &list);
        assert_eq!(request.payload.get(ID_FIELD), Some(""));
        assert_eq!(request.payload.get(CSRF_FIELD), None);
    }

    #[test]
    fn test_second_save_while_submitting_is_ignored() {
        let list = MemoryList::default();
        let mut state = ObjectiveModalState::new();
        state.open_create(&list);
        assert!(state.begin_save(&list, &ModalConfig::default()).is_some());
        assert!(state.begin_save(&list, &ModalConfig::default()).is_none());
    }

    #[test]
    fn test_save_requires_open_modal() {
        let list = MemoryList::default();
        let mut state = ObjectiveModalState::new();
        assert!(state.begin_save(&list, &ModalConfig::default()).is_none());
    }

    #[test]
    fn test_transport_failure_shows_banner_and_reenables_save() {
        let list = MemoryList::default();
        let mut state = ObjectiveModalState::new();
        state.open_create(&list);
        let first = submitted(&mut state, &list);
        state.finish_save(first.ticket, Ok(rejected(r#"{"edit_objective_name":["Name required"]}"#)));

        let second = submitted(&mut state, &list);
        let outcome = state.finish_save(second.ticket, Err(SaveError::Network("offline".to_string())));

        assert_eq!(outcome, SaveOutcome::Failed);
        assert_eq!(state.phase, ModalPhase::Open(FormMode::Create));
        assert!(state.errors.general.as_deref().unwrap().contains("offline"));
        assert_eq!(state.errors.name.as_deref(), Some("Name required"));
        assert!(state.begin_save(&list, &ModalConfig::default()).is_some());
    }

    #[test]
    fn test_response_after_reopen_is_stale() {
        let list = MemoryList::default();
        let mut state = ObjectiveModalState::new();
        state.open_edit(&objective(Some(2), "Old", &[]), &list);
        let request = submitted(&mut state, &list);

        state.open_create(&list);
        let outcome = state.finish_save(request.ticket, Ok(rejected(r#"{"savedsuccess":true}"#)));

        assert_eq!(outcome, SaveOutcome::Stale);
        assert_eq!(state.phase, ModalPhase::Open(FormMode::Create));
    }

    #[test]
    fn test_loaded_objective_opens_edit_form() {
        let list = MemoryList::default();
        let mut state = ObjectiveModalState::new();
        let ticket = state.begin_load().unwrap();
        assert!(state.finish_load(ticket, &objective(Some(8), "Loaded", &["A"]), &list));
        assert_eq!(state.phase, ModalPhase::Open(FormMode::Edit));
        assert_eq!(state.name, "Loaded");
        assert_eq!(list.get_items(), vec!["A"]);
    }

    #[test]
    fn test_load_finishing_after_create_is_dropped() {
        let list = MemoryList::default();
        let mut state = ObjectiveModalState::new();
        let ticket = state.begin_load().unwrap();

        state.open_create(&list);
        assert!(!state.finish_load(ticket, &objective(Some(8), "Late", &["A"]), &list));

        assert_eq!(state.phase, ModalPhase::Open(FormMode::Create));
        assert_eq!(state.id, None);
        assert_eq!(state.name, "");
        assert!(list.get_items().is_empty());
    }

    #[test]
    fn test_load_refused_while_submitting() {
        let list = MemoryList::default();
        let mut state = ObjectiveModalState::new();
        state.open_create(&list);
        let request = submitted(&mut state, &list);
        assert_eq!(state.begin_load(), None);
        assert_eq!(
            state.finish_save(request.ticket, Ok(rejected(r#"{"savedsuccess":true}"#))),
            SaveOutcome::Reload
        );
    }

    #[test]
    fn test_close_blocked_while_submitting() {
        let list = MemoryList::default();
        let mut state = ObjectiveModalState::new();
        state.open_create(&list);
        let request = submitted(&mut state, &list);
        assert!(!state.close());
        assert!(state.phase.is_submitting());

        state.finish_save(request.ticket, Ok(rejected(r#"{"savedsuccess":false}"#)));
        assert!(state.close());
        assert_eq!(state.phase, ModalPhase::Closed);
    }
}
