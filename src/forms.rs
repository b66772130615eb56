//! Form Drafts and Validation
//!
//! In-progress user input for each form, checked locally before any request.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::dates;
use crate::models::{LoginRequest, ProjectCreate, RegisterRequest, TaskPatch};

pub const PROJECT_TITLE_MIN: usize = 3;
pub const PROJECT_TITLE_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 500;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Local validation failures; these never reach the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Title required (3-100 chars)")]
    ProjectTitleLength,
    #[error("Description must be at most 500 characters")]
    DescriptionTooLong,
    #[error("Title required")]
    TaskTitleRequired,
    #[error("Invalid due date")]
    InvalidDueDate,
}

pub fn validate_project_title(title: &str) -> Result<(), ValidationError> {
    let len = title.trim().chars().count();
    if (PROJECT_TITLE_MIN..=PROJECT_TITLE_MAX).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::ProjectTitleLength)
    }
}

pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(())
}

pub fn validate_task_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::TaskTitleRequired);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_SHAPE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

fn validate_due_date(draft: &str) -> Result<(), ValidationError> {
    if dates::is_valid_due_date(draft) {
        Ok(())
    } else {
        Err(ValidationError::InvalidDueDate)
    }
}

// ========================
// Drafts
// ========================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginDraft {
    pub user_name: String,
    pub password: String,
}

impl LoginDraft {
    pub fn to_request(&self) -> Result<LoginRequest, ValidationError> {
        if self.user_name.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(LoginRequest {
            user_name: self.user_name.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterDraft {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterDraft {
    pub fn to_request(&self) -> Result<RegisterRequest, ValidationError> {
        if self.user_name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        validate_email(&self.email)?;
        Ok(RegisterRequest {
            user_name: self.user_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
}

impl ProjectDraft {
    pub fn to_request(&self) -> Result<ProjectCreate, ValidationError> {
        validate_project_title(&self.title)?;
        validate_description(&self.description)?;
        let description = self.description.trim();
        Ok(ProjectCreate {
            title: self.title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

/// New task input; `due_date` is whatever the date picker holds
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub due_date: String,
}

impl TaskDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_task_title(&self.title)?;
        validate_due_date(&self.due_date)
    }
}

/// Inline edit of an existing task
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskEditDraft {
    pub title: String,
    pub due_date: String,
}

impl TaskEditDraft {
    pub fn from_task(task: &crate::models::Task) -> Self {
        Self {
            title: task.title.clone(),
            due_date: task.due_date.as_deref().map(dates::date_part).unwrap_or_default(),
        }
    }

    pub fn to_patch(&self, is_completed: bool) -> Result<TaskPatch, ValidationError> {
        validate_task_title(&self.title)?;
        validate_due_date(&self.due_date)?;
        Ok(TaskPatch {
            title: Some(self.title.trim().to_string()),
            due_date: Some(self.due_date.clone()),
            is_completed,
        })
    }
}
