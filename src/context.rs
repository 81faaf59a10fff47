//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpTaskApi;
use crate::config::Config;
use crate::controller::TaskController;
use crate::store::{AppStateStoreFields, AppStore, StoreState};

pub type AppController = TaskController<HttpTaskApi, StoreState>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub controller: AppController,
    pub store: AppStore,
}

impl AppContext {
    pub fn new(config: &Config, store: AppStore) -> Self {
        Self {
            controller: TaskController::new(
                HttpTaskApi::new(config.api_base),
                StoreState::new(store, config.notice_ttl_ms),
            ),
            store,
        }
    }

    /// Open or close the creation modal
    pub fn set_creating(&self, open: bool) {
        self.store.creating().set(open);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
