//! Task Item Component
//!
//! One task card. Switches locally between display and inline edit; all
//! changes go up through the controller.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TaskFields;
use crate::context::use_app_context;
use crate::error::ValidationError;
use crate::form::TaskDraft;
use crate::models::Task;

/// How a task renders in display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CardLook {
    card_class: &'static str,
    title_class: &'static str,
    /// Completed tasks can be deleted or un-checked, not edited
    edit_disabled: bool,
    checked: bool,
}

impl CardLook {
    fn of(task: &Task) -> Self {
        if task.completed {
            Self {
                card_class: "task-card completed",
                title_class: "task-title struck",
                edit_disabled: true,
                checked: true,
            }
        } else {
            Self {
                card_class: "task-card",
                title_class: "task-title",
                edit_disabled: false,
                checked: false,
            }
        }
    }
}

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = use_app_context();

    let id = task.id;
    let look = CardLook::of(&task);
    let task = StoredValue::new(task);

    let (editing, set_editing) = signal(false);
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal::<Option<ValidationError>>(None);
    // Re-set on a failed toggle so the checkbox snaps back
    let (checked, set_checked) = signal(look.checked);

    let start_edit = move |_: web_sys::MouseEvent| {
        let draft = task.with_value(TaskDraft::from_task);
        set_title.set(draft.title);
        set_description.set(draft.description);
        set_error.set(None);
        set_editing.set(true);
    };

    let on_toggle = move |ev: web_sys::Event| {
        let value = event_target_checked(&ev);
        spawn_local(async move {
            if ctx.controller.toggle_complete(id, value).await.is_err() {
                set_checked.try_set(look.checked);
            }
        });
    };

    let on_delete = move |_: web_sys::MouseEvent| {
        spawn_local(async move {
            let _ = ctx.controller.delete_task(id).await;
        });
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let patch = match TaskDraft::new(title.get(), description.get()).to_patch() {
            Ok(patch) => patch,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        spawn_local(async move {
            // On failure stay in edit mode with the user's text intact
            if ctx.controller.update_task(id, patch).await.is_ok() {
                set_editing.try_set(false);
            }
        });
    };

    let display_view = move || {
        let t = task.get_value();
        view! {
            <div class=look.card_class>
                <div class="task-row">
                    <input
                        type="checkbox"
                        class="task-check"
                        prop:checked=move || checked.get()
                        on:change=on_toggle
                    />
                    <div class="task-body">
                        <h3 class=look.title_class>{t.title.clone()}</h3>
                        {t.description_text().map(|d| view! { <p class="task-description">{d.to_string()}</p> })}
                        <div class="task-meta">{t.created_at_display()}</div>
                    </div>
                    <div class="task-buttons">
                        <button
                            class="icon-btn"
                            title="Edit"
                            disabled=look.edit_disabled
                            on:click=start_edit
                        >
                            "✎"
                        </button>
                        <button class="icon-btn danger" title="Delete" on:click=on_delete>
                            "🗑"
                        </button>
                    </div>
                </div>
            </div>
        }
    };

    let edit_view = move || {
        view! {
            <div class="task-card editing">
                <form class="task-form" on:submit=on_save>
                    <TaskFields
                        title=title
                        set_title=set_title
                        description=description
                        set_description=set_description
                        error=error
                        set_error=set_error
                        rows=3
                    />
                    <div class="form-actions">
                        <button type="button" on:click=move |_| set_editing.set(false)>"✗ Cancel"</button>
                        <button type="submit" class="primary-btn">"✓ Save"</button>
                    </div>
                </form>
            </div>
        }
    };

    view! {
        {move || if editing.get() {
            edit_view().into_any()
        } else {
            display_view().into_any()
        }}
    }
}
