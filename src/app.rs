//! Task Manager App
//!
//! Top-level component: action bar, task list and creation modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{NewTaskModal, NoticeStack, TaskItem};
use crate::config::Config;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: Config) -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(&config, store);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load tasks on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let _ = ctx.controller.fetch_tasks().await;
        });
    });

    let is_empty = move || store.tasks().read().is_empty();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Task Manager"</h1>
            </header>

            <NoticeStack />

            <main class="app-content">
                <div class="task-actions">
                    <button class="primary-btn" on:click=move |_| ctx.set_creating(true)>
                        "+ Add Task"
                    </button>
                </div>

                <div class="task-list">
                    <Show
                        when=move || !is_empty()
                        fallback=|| view! {
                            <div class="empty-state">
                                <p>"No tasks yet. Add your first task to get started!"</p>
                            </div>
                        }
                    >
                        <For
                            each=move || store.tasks().get()
                            // Key on every mutable field so a server update re-renders the card
                            key=|task| (
                                task.id,
                                task.title.clone(),
                                task.description.clone(),
                                task.completed,
                            )
                            children=move |task| view! { <TaskItem task=task /> }
                        />
                    </Show>
                </div>
            </main>

            <NewTaskModal />
        </div>
    }
}
