//! Leptos Dynamic List
//!
//! Editable ordered list of free-text entries for Leptos forms.
//! The owning form talks to the list through the [`DynamicList`] trait and
//! renders it with [`DynamicListView`].

use leptos::prelude::*;

/// Typed interface the owning form uses to drive a list
pub trait DynamicList {
    /// Append an entry at the end of the list, text kept as given
    fn add_item(&self, text: String);
    /// Remove every entry and the pending input text
    fn clear_items(&self);
    /// Current entries in display order
    fn get_items(&self) -> Vec<String>;
}

/// One rendered entry. `key` is stable for the lifetime of the entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ListEntry {
    pub key: u32,
    pub text: String,
}

/// Trim an entry and reject blank ones
pub fn normalize_entry(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Signal-backed list state, cheap to copy into closures
#[derive(Clone, Copy)]
pub struct DynamicListHandle {
    entries: RwSignal<Vec<ListEntry>>,
    next_key: RwSignal<u32>,
    /// Text typed into the new-entry input but not yet added
    pub pending: RwSignal<String>,
}

impl DynamicListHandle {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_key: RwSignal::new(0),
            pending: RwSignal::new(String::new()),
        }
    }

    /// Entries for rendering (tracked)
    pub fn entries(&self) -> Vec<ListEntry> {
        self.entries.get()
    }

    /// Remove the entry with the given key
    pub fn remove(&self, key: u32) {
        self.entries.update(|entries| entries.retain(|e| e.key != key));
    }

    /// Move the pending input text into the list.
    /// Returns false when the pending text is blank.
    pub fn commit_pending(&self) -> bool {
        let pending = self.pending.get_untracked();
        match normalize_entry(&pending) {
            Some(text) => {
                self.push(text);
                self.pending.set(String::new());
                true
            }
            None => false,
        }
    }

    fn push(&self, text: String) {
        let key = self.next_key.get_untracked();
        self.next_key.set(key.wrapping_add(1));
        self.entries.update(|entries| entries.push(ListEntry { key, text }));
    }
}

impl Default for DynamicListHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicList for DynamicListHandle {
    fn add_item(&self, text: String) {
        self.push(text);
    }

    fn clear_items(&self) {
        self.entries.set(Vec::new());
        self.pending.set(String::new());
    }

    fn get_items(&self) -> Vec<String> {
        self.entries
            .get_untracked()
            .into_iter()
            .map(|e| e.text)
            .collect()
    }
}

/// Renders a [`DynamicListHandle`] as a form group
///
/// # Arguments
/// * `handle` - List state shared with the owning form
/// * `heading` - Text shown above the entries
/// * `new_item_label` - Label for the new-entry input
/// * `error` - Help/error line; the group is marked errored while it is `Some`
/// * `disabled` - Disables editing (e.g. while the form is submitting)
#[component]
pub fn DynamicListView(
    handle: DynamicListHandle,
    #[prop(into, default = "Prerequisites".to_string())] heading: String,
    #[prop(into, default = "Enter new prerequisite for this objective".to_string())] new_item_label: String,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into, default = Signal::derive(|| false))] disabled: Signal<bool>,
) -> impl IntoView {
    let group_class = move || {
        if error.get().is_some() {
            "form-group dynamic-list-form has-error"
        } else {
            "form-group dynamic-list-form"
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        // Enter adds the entry instead of submitting the surrounding form
        if ev.key() == "Enter" {
            ev.prevent_default();
            handle.commit_pending();
        }
    };

    view! {
        <div class=group_class>
            <label class="control-label dynamic-list-heading">{heading}</label>
            <ul class="dynamic-list">
                <For
                    each=move || handle.entries()
                    key=|entry| entry.key
                    children=move |entry| {
                        let key = entry.key;
                        view! {
                            <li class="dynamic-list-item">
                                <span class="dynamic-list-item-data">{entry.text}</span>
                                <button
                                    type="button"
                                    class="dynamic-list-remove"
                                    disabled=move || disabled.get()
                                    on:click=move |_| handle.remove(key)
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <label class="dynamic-list-new-item-label">{new_item_label}</label>
            <div class="dynamic-list-new-row">
                <input
                    type="text"
                    class="form-control dynamic-list-new-item"
                    autocomplete="off"
                    disabled=move || disabled.get()
                    prop:value=move || handle.pending.get()
                    on:input=move |ev| handle.pending.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    type="button"
                    class="dynamic-list-add"
                    disabled=move || disabled.get()
                    on:click=move |_| { handle.commit_pending(); }
                >
                    "+"
                </button>
            </div>
            <span class="help-block dynamic-list-help">{move || error.get().unwrap_or_default()}</span>
        </div>
    }
}
