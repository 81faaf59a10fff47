//! Task List Controller
//!
//! Issues the API calls behind each user action and patches the local list
//! from the server's responses. Failures are logged and surfaced as notices;
//! nothing is retried.

use crate::api::TaskApi;
use crate::error::{TaskError, ValidationError};
use crate::form::TaskDraft;
use crate::models::{Task, TaskPatch};
use crate::notify::Notice;
use crate::store::{prepend_task, remove_task, replace_task};

/// Where controller results land
pub trait TaskListState {
    fn replace_tasks(&self, tasks: Vec<Task>);
    fn update_tasks(&self, f: impl FnOnce(&mut Vec<Task>));
    fn set_creating(&self, open: bool);
    fn notify(&self, notice: Notice);
}

#[derive(Clone, Copy)]
pub struct TaskController<A, S> {
    api: A,
    state: S,
}

impl<A: TaskApi, S: TaskListState> TaskController<A, S> {
    pub fn new(api: A, state: S) -> Self {
        Self { api, state }
    }

    /// Replace the local list with the server's
    pub async fn fetch_tasks(&self) -> Result<(), TaskError> {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                log::info!("Loaded {} tasks", tasks.len());
                self.state.replace_tasks(tasks);
                Ok(())
            }
            Err(e) => {
                log::error!("Error fetching tasks: {}", e);
                self.state.notify(Notice::error("Failed to fetch tasks"));
                Err(e.into())
            }
        }
    }

    /// Create a task from the creation form.
    /// An invalid draft never reaches the network; the form shows the error.
    pub async fn add_task(&self, draft: TaskDraft) -> Result<Task, TaskError> {
        let body = draft.to_new_task()?;
        match self.api.create_task(&body).await {
            Ok(task) => {
                log::info!("Created task {}", task.id);
                self.state.update_tasks(|tasks| prepend_task(tasks, task.clone()));
                self.state.set_creating(false);
                self.state.notify(Notice::success("Task added successfully"));
                Ok(task)
            }
            Err(e) => {
                log::error!("Error adding task: {}", e);
                self.state.notify(Notice::error("Failed to add task"));
                Err(e.into())
            }
        }
    }

    pub async fn update_task(&self, id: u32, patch: TaskPatch) -> Result<Task, TaskError> {
        if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ValidationError::EmptyTitle.into());
        }
        match self.api.update_task(id, &patch).await {
            Ok(task) => {
                log::info!("Updated task {}", task.id);
                self.state.update_tasks(|tasks| replace_task(tasks, task.clone()));
                self.state.notify(Notice::success("Task updated successfully"));
                Ok(task)
            }
            Err(e) => {
                log::error!("Error updating task {}: {}", id, e);
                self.state.notify(Notice::error("Failed to update task"));
                Err(e.into())
            }
        }
    }

    /// Checkbox handler
    pub async fn toggle_complete(&self, id: u32, completed: bool) -> Result<Task, TaskError> {
        self.update_task(id, TaskPatch::completed(completed)).await
    }

    pub async fn delete_task(&self, id: u32) -> Result<(), TaskError> {
        match self.api.delete_task(id).await {
            Ok(()) => {
                log::info!("Deleted task {}", id);
                self.state.update_tasks(|tasks| remove_task(tasks, id));
                self.state.notify(Notice::success("Task deleted successfully"));
                Ok(())
            }
            Err(e) => {
                log::error!("Error deleting task {}: {}", id, e);
                self.state.notify(Notice::error("Failed to delete task"));
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::NewTask;
    use crate::notify::NoticeKind;
    use chrono::{TimeZone, Utc};
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Create(NewTask),
        Update(u32, TaskPatch),
        Delete(u32),
    }

    /// In-memory server that records every request
    #[derive(Default)]
    struct MockApi {
        tasks: RefCell<Vec<Task>>,
        calls: RefCell<Vec<Call>>,
        next_id: Cell<u32>,
        fail: Cell<bool>,
    }

    impl MockApi {
        fn with_tasks(tasks: Vec<Task>) -> Self {
            let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
            let api = Self::default();
            *api.tasks.borrow_mut() = tasks;
            api.next_id.set(next_id);
            api
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn outage(&self) -> ApiError {
            ApiError::Status { status: 500, url: "http://test/api/tasks".into() }
        }
    }

    impl TaskApi for &MockApi {
        async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
            self.calls.borrow_mut().push(Call::List);
            if self.fail.get() {
                return Err(ApiError::Network("connection refused".into()));
            }
            Ok(self.tasks.borrow().clone())
        }

        async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
            self.calls.borrow_mut().push(Call::Create(task.clone()));
            if self.fail.get() {
                return Err(self.outage());
            }
            self.next_id.set(self.next_id.get() + 1);
            let created = Task {
                id: self.next_id.get(),
                title: task.title.clone(),
                description: task.description.clone(),
                completed: false,
                created_at: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            };
            self.tasks.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn update_task(&self, id: u32, patch: &TaskPatch) -> Result<Task, ApiError> {
            self.calls.borrow_mut().push(Call::Update(id, patch.clone()));
            if self.fail.get() {
                return Err(self.outage());
            }
            let mut tasks = self.tasks.borrow_mut();
            let task = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(ApiError::Status { status: 404, url: format!("http://test/api/tasks/{}", id) })?;
            if let Some(title) = &patch.title {
                task.title = title.clone();
            }
            if let Some(description) = &patch.description {
                task.description = Some(description.clone());
            }
            if let Some(completed) = patch.completed {
                task.completed = completed;
            }
            Ok(task.clone())
        }

        async fn delete_task(&self, id: u32) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Delete(id));
            if self.fail.get() {
                return Err(self.outage());
            }
            self.tasks.borrow_mut().retain(|t| t.id != id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockState {
        tasks: RefCell<Vec<Task>>,
        creating: Cell<bool>,
        notices: RefCell<Vec<Notice>>,
    }

    impl MockState {
        fn ids(&self) -> Vec<u32> {
            self.tasks.borrow().iter().map(|t| t.id).collect()
        }

        fn last_notice(&self) -> Option<Notice> {
            self.notices.borrow().last().cloned()
        }
    }

    impl TaskListState for &MockState {
        fn replace_tasks(&self, tasks: Vec<Task>) {
            *self.tasks.borrow_mut() = tasks;
        }

        fn update_tasks(&self, f: impl FnOnce(&mut Vec<Task>)) {
            f(&mut *self.tasks.borrow_mut());
        }

        fn set_creating(&self, open: bool) {
            self.creating.set(open);
        }

        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    fn make_task(id: u32, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: Some(format!("about {}", title)),
            completed: false,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        }
    }

    fn seeded() -> (MockApi, MockState) {
        let api = MockApi::with_tasks(vec![make_task(1, "Laundry"), make_task(2, "Groceries")]);
        (api, MockState::default())
    }

    #[tokio::test]
    async fn test_fetch_replaces_list() {
        let (api, state) = seeded();
        *state.tasks.borrow_mut() = vec![make_task(99, "stale")];
        let controller = TaskController::new(&api, &state);

        controller.fetch_tasks().await.expect("fetch");

        assert_eq!(state.ids(), vec![1, 2]);
        assert!(state.notices.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_notifies_and_keeps_list() {
        let (api, state) = seeded();
        *state.tasks.borrow_mut() = vec![make_task(5, "cached")];
        api.fail.set(true);
        let controller = TaskController::new(&api, &state);

        let result = controller.fetch_tasks().await;

        assert!(matches!(result, Err(TaskError::Api(ApiError::Network(_)))));
        assert_eq!(state.ids(), vec![5]);
        let notice = state.last_notice().expect("notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Failed to fetch tasks");
    }

    #[tokio::test]
    async fn test_add_empty_title_makes_no_request() {
        let (api, state) = seeded();
        state.creating.set(true);
        let controller = TaskController::new(&api, &state);

        let result = controller.add_task(TaskDraft::new("   ", "details")).await;

        assert_eq!(result, Err(TaskError::Invalid(ValidationError::EmptyTitle)));
        assert!(api.calls().is_empty());
        assert!(state.creating.get());
        assert!(state.notices.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_add_prepends_and_closes_form() {
        let (api, state) = seeded();
        let controller = TaskController::new(&api, &state);
        controller.fetch_tasks().await.expect("fetch");
        state.creating.set(true);

        let created = controller.add_task(TaskDraft::new("Call mum", "")).await.expect("add");

        assert_eq!(created.id, 3);
        assert_eq!(state.ids(), vec![3, 1, 2]);
        assert!(!state.creating.get());
        assert_eq!(
            api.calls().last(),
            Some(&Call::Create(NewTask { title: "Call mum".into(), description: None }))
        );
        assert_eq!(state.last_notice().map(|n| n.kind), Some(NoticeKind::Success));
    }

    #[tokio::test]
    async fn test_add_failure_keeps_form_open() {
        let (api, state) = seeded();
        let controller = TaskController::new(&api, &state);
        controller.fetch_tasks().await.expect("fetch");
        state.creating.set(true);
        api.fail.set(true);

        let result = controller.add_task(TaskDraft::new("Call mum", "")).await;

        assert!(matches!(result, Err(TaskError::Api(_))));
        assert!(state.creating.get());
        assert_eq!(state.ids(), vec![1, 2]);
        assert_eq!(state.last_notice().map(|n| n.text), Some("Failed to add task".to_string()));
    }

    #[tokio::test]
    async fn test_toggle_complete_replaces_record() {
        let (api, state) = seeded();
        let controller = TaskController::new(&api, &state);
        controller.fetch_tasks().await.expect("fetch");

        controller.toggle_complete(2, true).await.expect("toggle");

        assert_eq!(api.calls().last(), Some(&Call::Update(2, TaskPatch::completed(true))));
        let tasks = state.tasks.borrow();
        assert!(tasks[1].completed);
        assert!(!tasks[0].completed);
        assert_eq!(tasks[1].title, "Groceries");
    }

    #[tokio::test]
    async fn test_failed_update_leaves_task_unchanged() {
        let (api, state) = seeded();
        let controller = TaskController::new(&api, &state);
        controller.fetch_tasks().await.expect("fetch");
        let before = state.tasks.borrow().clone();
        api.fail.set(true);

        let patch = TaskDraft::new("Renamed", "new words").to_patch().unwrap();
        let result = controller.update_task(1, patch).await;

        assert!(result.is_err());
        assert_eq!(*state.tasks.borrow(), before);
        assert_eq!(state.last_notice().map(|n| n.text), Some("Failed to update task".to_string()));
    }

    #[tokio::test]
    async fn test_update_with_blank_title_rejected() {
        let (api, state) = seeded();
        let controller = TaskController::new(&api, &state);

        let patch = TaskPatch { title: Some(" ".into()), ..Default::default() };
        let result = controller.update_task(1, patch).await;

        assert_eq!(result, Err(TaskError::Invalid(ValidationError::EmptyTitle)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_and_sends_one_request() {
        let (api, state) = seeded();
        let controller = TaskController::new(&api, &state);
        controller.fetch_tasks().await.expect("fetch");

        controller.delete_task(1).await.expect("delete");

        assert_eq!(state.ids(), vec![2]);
        let deletes: Vec<_> = api.calls().into_iter().filter(|c| matches!(c, Call::Delete(_))).collect();
        assert_eq!(deletes, vec![Call::Delete(1)]);
        assert_eq!(state.last_notice().map(|n| n.text), Some("Task deleted successfully".to_string()));
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_task() {
        let (api, state) = seeded();
        let controller = TaskController::new(&api, &state);
        controller.fetch_tasks().await.expect("fetch");
        api.fail.set(true);

        assert!(controller.delete_task(2).await.is_err());
        assert_eq!(state.ids(), vec![1, 2]);
        assert_eq!(state.last_notice().map(|n| n.kind), Some(NoticeKind::Error));
    }
}
