//! Notice Stack Component
//!
//! Renders pending notices; click one to dismiss it early.

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn NoticeStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notice-stack">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = notice.class();
                    view! {
                        <div class=class on:click=move |_| store_dismiss_notice(&store, id)>
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
