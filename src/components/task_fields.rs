//! Task Fields Component
//!
//! Title/description inputs shared by the create and edit forms.

use leptos::prelude::*;

use crate::error::ValidationError;

#[component]
pub fn TaskFields(
    title: ReadSignal<String>,
    set_title: WriteSignal<String>,
    description: ReadSignal<String>,
    set_description: WriteSignal<String>,
    error: ReadSignal<Option<ValidationError>>,
    set_error: WriteSignal<Option<ValidationError>>,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">"Title"</label>
            <input
                type="text"
                class=move || if error.get().is_some() { "field-input invalid" } else { "field-input" }
                placeholder="Enter task title"
                prop:value=move || title.get()
                on:input=move |ev| {
                    set_title.set(event_target_value(&ev));
                    set_error.set(None);
                }
            />
            {move || error.get().map(|e| view! { <div class="field-error">{e.to_string()}</div> })}
        </div>
        <div class="field">
            <label class="field-label">"Description"</label>
            <textarea
                class="field-input"
                rows=rows.to_string()
                placeholder="Enter task description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
