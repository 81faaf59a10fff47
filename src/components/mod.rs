//! UI Components
//!
//! Reusable Leptos components.

mod new_task_modal;
mod notice_stack;
mod task_fields;
mod task_item;

pub use new_task_modal::NewTaskModal;
pub use notice_stack::NoticeStack;
pub use task_fields::TaskFields;
pub use task_item::TaskItem;
