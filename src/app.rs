//! Todo List App
//!
//! Root component. Owns the task store signal and injects the mutation
//! service into the form and list components as explicit props.

use leptos::prelude::*;

use crate::actions::TaskActions;
use crate::components::{TaskForm, TaskList};
use crate::store::TaskStore;

#[component]
pub fn App() -> impl IntoView {
    // State: one snapshot, replaced wholesale on every mutation
    let (store, set_store) = signal(TaskStore::seeded());
    let actions = TaskActions::new((store, set_store));

    let tasks = Signal::derive(move || store.get().tasks().to_vec());

    view! {
        <div class="app-container">
            <h1>"My Todo List"</h1>

            <TaskForm actions=actions />

            <TaskList tasks=tasks actions=actions />

            <p class="task-count">{move || format!("{} tasks", tasks.get().len())}</p>
        </div>
    }
}
