//! Task API
//!
//! The four REST endpoints the UI talks to, behind a trait so the controller
//! can run against a recording fake in tests.

mod http;

use crate::error::ApiError;
use crate::models::{NewTask, Task, TaskPatch};

pub use http::HttpTaskApi;

#[allow(async_fn_in_trait)]
pub trait TaskApi {
    /// GET /tasks
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;
    /// POST /tasks
    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError>;
    /// PUT /tasks/{id}
    async fn update_task(&self, id: u32, patch: &TaskPatch) -> Result<Task, ApiError>;
    /// DELETE /tasks/{id}
    async fn delete_task(&self, id: u32) -> Result<(), ApiError>;
}
