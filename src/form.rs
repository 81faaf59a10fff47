//! Form Drafts
//!
//! Raw create/edit form contents and the checks run before any request.

use crate::error::ValidationError;
use crate::models::{NewTask, Task, TaskPatch};

/// Unvalidated title/description as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Edit form pre-population
    pub fn from_task(task: &Task) -> Self {
        Self::new(task.title.clone(), task.description.clone().unwrap_or_default())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Body for POST /tasks; a blank description is left out
    pub fn to_new_task(&self) -> Result<NewTask, ValidationError> {
        self.validate()?;
        let description = self.description.trim();
        Ok(NewTask {
            title: self.title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }

    /// Body for PUT /tasks/{id} from the edit form.
    /// The description is always sent so clearing it sticks.
    pub fn to_patch(&self) -> Result<TaskPatch, ValidationError> {
        self.validate()?;
        Ok(TaskPatch {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            completed: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_rejected() {
        assert_eq!(TaskDraft::new("", "x").validate(), Err(ValidationError::EmptyTitle));
        assert_eq!(TaskDraft::new("  \t", "").to_new_task(), Err(ValidationError::EmptyTitle));
        assert_eq!(TaskDraft::new(" ", "").to_patch(), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_new_task_trims_and_drops_blank_description() {
        let body = TaskDraft::new("  Buy milk ", "   ").to_new_task().unwrap();
        assert_eq!(body.title, "Buy milk");
        assert_eq!(body.description, None);

        let body = TaskDraft::new("Buy milk", "2 litres").to_new_task().unwrap();
        assert_eq!(body.description.as_deref(), Some("2 litres"));
    }

    #[test]
    fn test_patch_keeps_cleared_description() {
        let patch = TaskDraft::new("Title", "").to_patch().unwrap();
        assert_eq!(patch.title.as_deref(), Some("Title"));
        assert_eq!(patch.description.as_deref(), Some(""));
        assert_eq!(patch.completed, None);
    }
}
