//! Project Services

use crate::api::{ApiClient, ApiError};
use crate::models::{Project, ProjectCreate};

use super::settle;

pub async fn list_projects(api: &ApiClient) -> Result<Vec<Project>, ApiError> {
    settle(api.session(), api.get("/projects").await)
}

pub async fn create_project(api: &ApiClient, project: &ProjectCreate) -> Result<Project, ApiError> {
    settle(api.session(), api.post("/projects", project).await)
}

/// Detail fetch; the returned project carries its tasks
pub async fn get_project(api: &ApiClient, id: i64) -> Result<Project, ApiError> {
    settle(api.session(), api.get(&format!("/projects/{}", id)).await)
}

pub async fn delete_project(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    settle(api.session(), api.delete(&format!("/projects/{}", id)).await)
}
