//! Task Form Component
//!
//! Write path: captures a new task title and submits it to the actions
//! service. The empty-title guard lives in the store, not here.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::actions::TaskActions;

/// Form for adding a new task
#[component]
pub fn TaskForm(actions: TaskActions) -> impl IntoView {
    let (title, set_title) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions.add(&title.get());
        // Clear the field whether or not the store accepted the title
        set_title.set(String::new());
    };

    view! {
        <form class="task-form" on:submit=submit>
            <input
                type="text"
                placeholder="Add a task..."
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
