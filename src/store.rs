//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::controller::TaskListState;
use crate::models::Task;
use crate::notify::Notice;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks as last reported by the server, newest additions first
    pub tasks: Vec<Task>,
    /// Whether the creation modal is open
    pub creating: bool,
    /// Visible notifications, oldest first
    pub notices: Vec<Notice>,
    pub next_notice_id: u64,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// List Operations
// ========================

pub fn prepend_task(tasks: &mut Vec<Task>, task: Task) {
    tasks.insert(0, task);
}

/// Swap in the server's copy of a task. Unknown ids are ignored.
pub fn replace_task(tasks: &mut [Task], updated: Task) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == updated.id) {
        *task = updated;
    }
}

pub fn remove_task(tasks: &mut Vec<Task>, id: u32) {
    tasks.retain(|t| t.id != id);
}

// ========================
// Store Helper Functions
// ========================

/// Add a notice with a fresh id, returning that id
pub fn store_add_notice(store: &AppStore, mut notice: Notice) -> u64 {
    let counter = store.next_notice_id();
    let id = {
        let mut next = counter.write();
        *next += 1;
        *next
    };
    notice.id = id;
    store.notices().write().push(notice);
    id
}

/// Push a notice and schedule its removal
pub fn store_push_notice(store: &AppStore, notice: Notice, ttl_ms: u32) {
    let id = store_add_notice(store, notice);
    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(ttl_ms).await;
        store_dismiss_notice(&store, id);
    });
}

pub fn store_dismiss_notice(store: &AppStore, id: u64) {
    store.notices().write().retain(|n| n.id != id);
}

/// [`TaskListState`] backed by the reactive store
#[derive(Clone, Copy)]
pub struct StoreState {
    store: AppStore,
    notice_ttl_ms: u32,
}

impl StoreState {
    pub fn new(store: AppStore, notice_ttl_ms: u32) -> Self {
        Self { store, notice_ttl_ms }
    }
}

impl TaskListState for StoreState {
    fn replace_tasks(&self, tasks: Vec<Task>) {
        self.store.tasks().set(tasks);
    }

    fn update_tasks(&self, f: impl FnOnce(&mut Vec<Task>)) {
        let field = self.store.tasks();
        let mut tasks = field.write();
        f(&mut *tasks);
    }

    fn set_creating(&self, open: bool) {
        self.store.creating().set(open);
    }

    fn notify(&self, notice: Notice) {
        store_push_notice(&self.store, notice, self.notice_ttl_ms);
    }
}
