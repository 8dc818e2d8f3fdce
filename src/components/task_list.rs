//! Task List Component
//!
//! Read path: projects the current task list into rows. Holds no state
//! of its own.

use leptos::prelude::*;

use crate::actions::TaskActions;
use crate::models::Task;
use crate::components::TaskRow;

/// Keyed list of task rows
#[component]
pub fn TaskList(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    actions: TaskActions,
) -> impl IntoView {
    view! {
        <ul class="task-list">
            <For
                each=move || tasks.get()
                // Key on every mutable field so a toggle re-renders the row
                key=|task| (task.id, task.title.clone(), task.completed)
                children=move |task| view! { <TaskRow task=task actions=actions /> }
            />
        </ul>
    }
}
