//! Task Actions
//!
//! Mutation entry points for the task list, handed to child components
//! as an explicit prop instead of an ambient context lookup. Each call
//! applies a pure store operation and swaps the new snapshot into the
//! signal, which re-renders every reader.

use leptos::prelude::*;

use crate::store::TaskStore;

/// Injected mutation service for the task list
#[derive(Clone, Copy)]
pub struct TaskActions {
    store: ReadSignal<TaskStore>,
    set_store: WriteSignal<TaskStore>,
}

impl TaskActions {
    pub fn new(store: (ReadSignal<TaskStore>, WriteSignal<TaskStore>)) -> Self {
        Self {
            store: store.0,
            set_store: store.1,
        }
    }

    /// Append a new task (empty titles are ignored by the store)
    pub fn add(&self, title: &str) {
        web_sys::console::log_1(&format!("[TASKS] add: {:?}", title).into());
        self.set_store.set(self.store.get_untracked().add(title));
    }

    /// Flip the completion flag of a task
    pub fn toggle_completed(&self, id: u32) {
        web_sys::console::log_1(&format!("[TASKS] toggle: id={}", id).into());
        self.set_store
            .set(self.store.get_untracked().toggle_completed(id));
    }

    /// Remove a task from the list
    pub fn delete(&self, id: u32) {
        web_sys::console::log_1(&format!("[TASKS] delete: id={}", id).into());
        self.set_store.set(self.store.get_untracked().delete(id));
    }
}
