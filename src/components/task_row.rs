//! Task Row Component
//!
//! A single task in the list with toggle and delete controls.

use leptos::prelude::*;

use crate::actions::TaskActions;
use crate::models::Task;

/// One task row: checkbox, title, delete button
#[component]
pub fn TaskRow(task: Task, actions: TaskActions) -> impl IntoView {
    let id = task.id;
    let completed = task.completed;
    let title = task.title.clone();

    view! {
        <li class=if completed { "task-row completed" } else { "task-row" }>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| actions.toggle_completed(id)
            />
            <span class="task-title">{title}</span>
            <button class="delete-btn" on:click=move |_| actions.delete(id)>"×"</button>
        </li>
    }
}
