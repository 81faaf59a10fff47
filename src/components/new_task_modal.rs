//! New Task Modal Component
//!
//! Creation form shown over the list while `creating` is set.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TaskFields;
use crate::context::use_app_context;
use crate::error::ValidationError;
use crate::form::TaskDraft;
use crate::store::AppStateStoreFields;

/// One POST at a time; a double click must not create two tasks.
/// Returns false while a submission is already pending.
fn claim_submit(in_flight: RwSignal<bool>) -> bool {
    if in_flight.get_untracked() {
        return false;
    }
    in_flight.set(true);
    true
}

#[component]
pub fn NewTaskModal() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal::<Option<ValidationError>>(None);
    let in_flight = RwSignal::new(false);

    let reset = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_error.set(None);
    };

    let on_cancel = move |_: web_sys::MouseEvent| {
        ctx.set_creating(false);
        reset();
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = TaskDraft::new(title.get(), description.get());
        if let Err(e) = draft.validate() {
            set_error.set(Some(e));
            return;
        }
        if !claim_submit(in_flight) {
            return;
        }
        spawn_local(async move {
            // Closing happens in the controller; keep the fields on failure
            if ctx.controller.add_task(draft).await.is_ok() {
                reset();
            }
            in_flight.set(false);
        });
    };

    view! {
        {move || ctx.store.creating().get().then(|| view! {
            <div class="modal-backdrop" on:click=on_cancel>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2 class="modal-title">"Add New Task"</h2>
                    <form class="task-form" on:submit=on_submit>
                        <TaskFields
                            title=title
                            set_title=set_title
                            description=description
                            set_description=set_description
                            error=error
                            set_error=set_error
                        />
                        <div class="form-actions">
                            <button type="button" on:click=on_cancel>"Cancel"</button>
                            <button type="submit" class="primary-btn" disabled=move || in_flight.get()>
                                {move || if in_flight.get() { "Adding..." } else { "Add Task" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        })}
    }
}
