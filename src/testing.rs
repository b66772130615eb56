//! Test doubles shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{ApiClient, HttpRequest, HttpResponse, Transport};
use crate::config::ApiConfig;
use crate::session::Session;

#[derive(Default)]
struct FakeState {
    responses: RefCell<VecDeque<Result<HttpResponse, String>>>,
    requests: RefCell<Vec<HttpRequest>>,
    yield_before_reply: Cell<bool>,
}

/// Scripted transport that records every request it sees
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Rc<FakeState>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replies only after yielding once, so concurrent callers overlap
    pub fn slow() -> Self {
        let fake = Self::default();
        fake.state.yield_before_reply.set(true);
        fake
    }

    pub fn push(&self, response: Result<HttpResponse, String>) {
        self.state.responses.borrow_mut().push_back(response);
    }

    pub fn push_ok(&self, status: u16, body: &str) {
        self.push(Ok(HttpResponse { status, body: body.to_string() }));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.requests.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.state.requests.borrow_mut().push(request);
        if self.state.yield_before_reply.get() {
            tokio::task::yield_now().await;
        }
        self.state
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted response".to_string()))
    }
}

/// Client over `fake` with an in-memory session, optionally already signed in
pub fn client_with(fake: &FakeTransport, token: Option<&str>) -> (ApiClient, Session) {
    let session = Session::in_memory();
    if let Some(token) = token {
        session.store_token(token);
    }
    let client = ApiClient::new(ApiConfig::new("http://test.local/api"), session.clone(), Rc::new(fake.clone()));
    (client, session)
}

pub fn task_json(id: i64, title: &str, due_date: Option<&str>, done: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "dueDate": due_date,
        "isCompleted": done,
        "projectId": 1,
    })
}
