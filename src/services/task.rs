//! Task Services
//!
//! Due-date drafts are normalized here, right before transmission.

use crate::api::{ApiClient, ApiError};
use crate::dates::normalize_due_date;
use crate::forms::TaskDraft;
use crate::models::{Task, TaskCreate, TaskPatch, TaskUpdate};

use super::settle;

pub async fn create_task(api: &ApiClient, project_id: i64, draft: &TaskDraft) -> Result<Task, ApiError> {
    let payload = TaskCreate {
        title: draft.title.trim().to_string(),
        due_date: normalize_due_date(&draft.due_date),
    };
    settle(api.session(), api.post(&format!("/projects/{}/tasks", project_id), &payload).await)
}

pub async fn update_task(api: &ApiClient, task_id: i64, patch: &TaskPatch) -> Result<Task, ApiError> {
    let payload = TaskUpdate {
        title: patch.title.clone(),
        due_date: patch.due_date.as_deref().and_then(normalize_due_date),
        is_completed: patch.is_completed,
    };
    settle(api.session(), api.put(&format!("/projects/tasks/{}", task_id), &payload).await)
}

pub async fn delete_task(api: &ApiClient, task_id: i64) -> Result<(), ApiError> {
    settle(api.session(), api.delete(&format!("/projects/tasks/{}", task_id)).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpMethod;
    use crate::testing::{client_with, task_json, FakeTransport};

    fn sent_json(fake: &FakeTransport) -> serde_json::Value {
        let body = fake.requests()[0].body.clone().unwrap();
        serde_json::from_str(&body).unwrap()
    }

    #[tokio::test]
    async fn test_empty_due_date_is_omitted() {
        let fake = FakeTransport::new();
        fake.push_ok(201, &task_json(1, "Plan", None, false).to_string());
        let (api, _) = client_with(&fake, Some("tok"));

        let draft = TaskDraft { title: "Plan".into(), due_date: "".into() };
        create_task(&api, 3, &draft).await.unwrap();

        let body = sent_json(&fake);
        assert!(fake.requests()[0].url.ends_with("/projects/3/tasks"));
        assert_eq!(body, serde_json::json!({"title": "Plan"}));
        assert!(body.get("dueDate").is_none());
    }

    #[tokio::test]
    async fn test_due_date_is_normalized() {
        let fake = FakeTransport::new();
        fake.push_ok(201, &task_json(1, "Plan", Some("2024-01-05T00:00:00Z"), false).to_string());
        let (api, _) = client_with(&fake, Some("tok"));

        let draft = TaskDraft { title: "Plan".into(), due_date: "2024-01-05".into() };
        create_task(&api, 3, &draft).await.unwrap();

        assert_eq!(sent_json(&fake)["dueDate"], "2024-01-05T00:00:00.000Z");
    }

    #[tokio::test]
    async fn test_update_uses_task_path() {
        let fake = FakeTransport::new();
        fake.push_ok(200, &task_json(12, "Plan", None, true).to_string());
        let (api, _) = client_with(&fake, Some("tok"));

        let patch = TaskPatch { title: None, due_date: Some("  ".into()), is_completed: true };
        let task = update_task(&api, 12, &patch).await.unwrap();

        assert!(task.is_completed);
        let sent = &fake.requests()[0];
        assert_eq!(sent.method, HttpMethod::Put);
        assert!(sent.url.ends_with("/projects/tasks/12"));
        assert_eq!(sent_json(&fake), serde_json::json!({"isCompleted": true}));
    }

    #[tokio::test]
    async fn test_delete_task_401_clears_session() {
        let fake = FakeTransport::new();
        fake.push_ok(401, r#"{"message":"Token expired"}"#);
        let (api, session) = client_with(&fake, Some("tok"));

        let err = delete_task(&api, 4).await.unwrap_err();
        assert_eq!(err.to_string(), "Token expired");
        assert_eq!(session.token(), None);
    }
}
