//! HTTP implementation of [`TaskApi`] on top of `reqwest` (browser `fetch` on wasm32).

use reqwest::{Client, Response};

use super::TaskApi;
use crate::error::ApiError;
use crate::models::{NewTask, Task, TaskPatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTaskApi {
    base: &'static str,
}

impl HttpTaskApi {
    pub fn new(base: &'static str) -> Self {
        Self { base }
    }

    pub fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base)
    }

    pub fn task_url(&self, id: u32) -> String {
        format!("{}/tasks/{}", self.base, id)
    }
}

/// Turn non-2xx responses into `ApiError::Status`
fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = Client::new().get(self.tasks_url()).send().await?;
        Ok(check(response)?.json().await?)
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        let response = Client::new().post(self.tasks_url()).json(task).send().await?;
        Ok(check(response)?.json().await?)
    }

    async fn update_task(&self, id: u32, patch: &TaskPatch) -> Result<Task, ApiError> {
        let response = Client::new().put(self.task_url(id)).json(patch).send().await?;
        Ok(check(response)?.json().await?)
    }

    async fn delete_task(&self, id: u32) -> Result<(), ApiError> {
        let response = Client::new().delete(self.task_url(id)).send().await?;
        check(response)?;
        Ok(())
    }
}
