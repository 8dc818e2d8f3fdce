//! UI Components
//!
//! Leptos components for the task list views.

mod task_form;
mod task_list;
mod task_row;

pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
