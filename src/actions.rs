//! User Actions
//!
//! What each form or button does, independent of the UI: validate locally,
//! take the component's pending gate, then call the service. Drafts are only
//! borrowed, so a failure leaves them exactly as the user typed them.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

use crate::api::{ApiClient, ApiError};
use crate::forms::{LoginDraft, ProjectDraft, RegisterDraft, TaskDraft, TaskEditDraft, ValidationError};
use crate::models::{Project, Task, TaskPatch};
use crate::services;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Another request from the same component is still in flight
    #[error("A request is already in progress")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ActionError {
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ActionError::Api(err) if err.is_auth_expired())
    }
}

type Observer = Rc<dyn Fn(bool)>;

/// At most one in-flight request per component instance
#[derive(Clone, Default)]
pub struct PendingGate {
    pending: Rc<Cell<bool>>,
    observer: Option<Observer>,
}

impl PendingGate {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate that reports every acquire (`true`) and release (`false`)
    pub fn observed(observer: impl Fn(bool) + 'static) -> Self {
        Self {
            pending: Rc::default(),
            observer: Some(Rc::new(observer)),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// `None` while a request is in flight
    pub fn try_begin(&self) -> Option<PendingGuard> {
        if self.pending.replace(true) {
            return None;
        }
        self.notify(true);
        Some(PendingGuard { gate: self.clone() })
    }

    fn notify(&self, pending: bool) {
        if let Some(observer) = &self.observer {
            observer(pending);
        }
    }
}

/// Releases the gate on drop
pub struct PendingGuard {
    gate: PendingGate,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.gate.pending.set(false);
        self.gate.notify(false);
    }
}

fn begin(gate: &PendingGate) -> Result<PendingGuard, ActionError> {
    gate.try_begin().ok_or(ActionError::Busy)
}

pub async fn sign_in(api: &ApiClient, gate: &PendingGate, draft: &LoginDraft) -> Result<(), ActionError> {
    let request = draft.to_request()?;
    let _guard = begin(gate)?;
    services::login(api, &request).await?;
    Ok(())
}

pub async fn sign_up(api: &ApiClient, gate: &PendingGate, draft: &RegisterDraft) -> Result<(), ActionError> {
    let request = draft.to_request()?;
    let _guard = begin(gate)?;
    services::register(api, &request).await?;
    Ok(())
}

pub async fn create_project(api: &ApiClient, gate: &PendingGate, draft: &ProjectDraft) -> Result<Project, ActionError> {
    let request = draft.to_request()?;
    let _guard = begin(gate)?;
    Ok(services::create_project(api, &request).await?)
}

pub async fn delete_project(api: &ApiClient, gate: &PendingGate, id: i64) -> Result<(), ActionError> {
    let _guard = begin(gate)?;
    Ok(services::delete_project(api, id).await?)
}

pub async fn create_task(
    api: &ApiClient,
    gate: &PendingGate,
    project_id: i64,
    draft: &TaskDraft,
) -> Result<Task, ActionError> {
    draft.validate()?;
    let _guard = begin(gate)?;
    Ok(services::create_task(api, project_id, draft).await?)
}

/// Flip completion, leaving title and due date untouched
pub async fn toggle_task(api: &ApiClient, gate: &PendingGate, task: &Task) -> Result<Task, ActionError> {
    let _guard = begin(gate)?;
    let patch = TaskPatch {
        title: None,
        due_date: None,
        is_completed: !task.is_completed,
    };
    Ok(services::update_task(api, task.id, &patch).await?)
}

pub async fn save_task_edit(
    api: &ApiClient,
    gate: &PendingGate,
    task: &Task,
    draft: &TaskEditDraft,
) -> Result<Task, ActionError> {
    let patch = draft.to_patch(task.is_completed)?;
    let _guard = begin(gate)?;
    Ok(services::update_task(api, task.id, &patch).await?)
}

pub async fn delete_task(api: &ApiClient, gate: &PendingGate, task_id: i64) -> Result<(), ActionError> {
    let _guard = begin(gate)?;
    Ok(services::delete_task(api, task_id).await?)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::testing::{client_with, task_json, FakeTransport};

    fn project_json() -> String {
        r#"{"id": 1, "title": "Roadmap", "description": null, "creationDate": "2024-01-01T00:00:00Z"}"#.to_string()
    }

    #[test]
    fn test_gate_releases_on_drop() {
        let gate = PendingGate::new();
        let guard = gate.try_begin().unwrap();
        assert!(gate.is_pending());
        assert!(gate.try_begin().is_none());
        drop(guard);
        assert!(!gate.is_pending());
        assert!(gate.try_begin().is_some());
    }

    #[tokio::test]
    async fn test_observer_sees_only_acquired_gate() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let gate = PendingGate::observed(move |pending| sink.borrow_mut().push(pending));
        let fake = FakeTransport::new();
        fake.push_ok(201, &project_json());
        let (api, _) = client_with(&fake, Some("tok"));

        let invalid = ProjectDraft { title: "ab".into(), description: String::new() };
        assert!(create_project(&api, &gate, &invalid).await.is_err());
        assert!(seen.borrow().is_empty());

        let valid = ProjectDraft { title: "Roadmap".into(), description: String::new() };
        create_project(&api, &gate, &valid).await.unwrap();
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_invalid_submit_leaves_held_gate_alone() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let gate = PendingGate::observed(move |pending| sink.borrow_mut().push(pending));
        let fake = FakeTransport::new();
        let (api, _) = client_with(&fake, Some("tok"));

        let held = gate.try_begin().unwrap();
        let invalid = ProjectDraft { title: "ab".into(), description: String::new() };
        assert!(create_project(&api, &gate, &invalid).await.is_err());
        assert!(gate.is_pending());
        assert_eq!(*seen.borrow(), vec![true]);

        drop(held);
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_short_title_never_reaches_network() {
        let fake = FakeTransport::new();
        let (api, _) = client_with(&fake, Some("tok"));
        let gate = PendingGate::new();

        let draft = ProjectDraft { title: "ab".into(), description: String::new() };
        let err = create_project(&api, &gate, &draft).await.unwrap_err();

        assert_eq!(err, ActionError::Invalid(ValidationError::ProjectTitleLength));
        assert_eq!(fake.call_count(), 0);
        assert!(!gate.is_pending());
    }

    #[tokio::test]
    async fn test_title_bounds_accepted() {
        for len in [3, 100] {
            let fake = FakeTransport::new();
            fake.push_ok(201, &project_json());
            let (api, _) = client_with(&fake, Some("tok"));

            let draft = ProjectDraft { title: "t".repeat(len), description: String::new() };
            create_project(&api, &PendingGate::new(), &draft).await.unwrap();
            assert_eq!(fake.call_count(), 1);
        }

        let fake = FakeTransport::new();
        let (api, _) = client_with(&fake, Some("tok"));
        let draft = ProjectDraft { title: "t".repeat(101), description: String::new() };
        assert!(create_project(&api, &PendingGate::new(), &draft).await.is_err());
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn test_double_submit_issues_one_request() {
        let fake = FakeTransport::slow();
        fake.push_ok(201, &project_json());
        fake.push_ok(201, &project_json());
        let (api, _) = client_with(&fake, Some("tok"));
        let gate = PendingGate::new();
        let draft = ProjectDraft { title: "Roadmap".into(), description: String::new() };

        let (first, second) = tokio::join!(
            create_project(&api, &gate, &draft),
            create_project(&api, &gate, &draft),
        );

        let results = [first, second];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results.iter().any(|r| r == &Err(ActionError::Busy)));
        assert_eq!(fake.call_count(), 1);
        assert!(!gate.is_pending());
    }

    #[tokio::test]
    async fn test_failed_create_task_keeps_draft() {
        let fake = FakeTransport::new();
        fake.push_ok(500, "boom");
        let (api, _) = client_with(&fake, Some("tok"));
        let draft = TaskDraft { title: "Buy seeds".into(), due_date: "2024-04-01".into() };
        let before = draft.clone();

        let err = create_task(&api, &PendingGate::new(), 2, &draft).await.unwrap_err();

        assert_eq!(err.to_string(), "boom");
        assert_eq!(draft, before);
    }

    #[tokio::test]
    async fn test_toggle_sends_flipped_flag() {
        let fake = FakeTransport::new();
        fake.push_ok(200, &task_json(7, "Water", None, true).to_string());
        let (api, _) = client_with(&fake, Some("tok"));
        let task: Task = serde_json::from_value(task_json(7, "Water", None, false)).unwrap();

        toggle_task(&api, &PendingGate::new(), &task).await.unwrap();

        let body = fake.requests()[0].body.clone().unwrap();
        assert_eq!(body, r#"{"isCompleted":true}"#);
    }

    #[tokio::test]
    async fn test_auth_expiry_is_reported() {
        let fake = FakeTransport::new();
        fake.push_ok(401, "");
        let (api, session) = client_with(&fake, Some("tok"));

        let err = delete_project(&api, &PendingGate::new(), 1).await.unwrap_err();
        assert!(err.is_auth_expired());
        assert_eq!(session.token(), None);
    }
}
