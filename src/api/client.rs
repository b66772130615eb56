//! API Client
//!
//! Sends requests relative to the configured base URL, attaching the session's
//! bearer token. Non-2xx responses come back as normalized [`ApiError`]s.
//! The client never navigates and never touches the session on failure;
//! callers decide what a 401 means.

use std::rc::Rc;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use super::transport::{HttpMethod, HttpRequest, ReqwestTransport, Transport};
use crate::config::ApiConfig;
use crate::session::Session;

#[derive(Clone)]
pub struct ApiClient {
    config: Rc<ApiConfig>,
    session: Session,
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: Session, transport: Rc<dyn Transport>) -> Self {
        Self {
            config: Rc::new(config),
            session,
            transport,
        }
    }

    /// Client backed by the browser's fetch
    pub fn browser(config: ApiConfig, session: Session) -> Self {
        Self::new(config, session, Rc::new(ReqwestTransport::new()))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(HttpMethod::Get, path, None).await?;
        decode(&body)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, payload: &B) -> Result<T, ApiError> {
        let body = self.send(HttpMethod::Post, path, Some(encode(payload)?)).await?;
        decode(&body)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, payload: &B) -> Result<T, ApiError> {
        let body = self.send(HttpMethod::Put, path, Some(encode(payload)?)).await?;
        decode(&body)
    }

    /// Response body is ignored
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(HttpMethod::Delete, path, None).await.map(|_| ())
    }

    /// Raw send: the response body on 2xx, a normalized error otherwise
    pub async fn send(&self, method: HttpMethod, path: &str, body: Option<String>) -> Result<String, ApiError> {
        let request = HttpRequest {
            method,
            url: self.config.url(path),
            bearer_token: self.session.token(),
            body,
        };
        debug!("{} {} (auth: {})", method, path, request.bearer_token.is_some());

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(cause) => {
                warn!("{} {} failed without response: {}", method, path, cause);
                return Err(ApiError::transport(&cause));
            }
        };

        if response.is_success() {
            Ok(response.body)
        } else {
            let err = ApiError::from_response(response.status, &response.body);
            warn!("{} {} -> {}: {}", method, path, response.status, err);
            Err(err)
        }
    }
}

fn encode<B: Serialize>(payload: &B) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Payload(format!("Could not encode request: {}", e)))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Payload(format!("Unexpected response from server: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpResponse;
    use crate::testing::{client_with, FakeTransport};

    #[tokio::test]
    async fn test_bearer_attached_only_when_token_present() {
        let fake = FakeTransport::new();
        fake.push_ok(200, "[]");
        fake.push_ok(200, "[]");
        let (client, session) = client_with(&fake, None);

        let _: Vec<serde_json::Value> = client.get("/projects").await.unwrap();
        session.store_token("tok-1");
        let _: Vec<serde_json::Value> = client.get("/projects").await.unwrap();

        let requests = fake.requests();
        assert_eq!(requests[0].bearer_token, None);
        assert_eq!(requests[1].bearer_token.as_deref(), Some("tok-1"));
        assert_eq!(requests[1].url, "http://test.local/api/projects");
    }

    #[tokio::test]
    async fn test_non_success_is_normalized() {
        let fake = FakeTransport::new();
        fake.push(Ok(HttpResponse { status: 500, body: r#"{"message":"db down"}"#.into() }));
        let (client, _) = client_with(&fake, Some("tok"));

        let err = client.delete("/projects/1").await.unwrap_err();
        assert_eq!(err, ApiError::Server { status: 500, message: "db down".into() });
    }

    #[tokio::test]
    async fn test_transport_failure_and_401_leave_session_alone() {
        let fake = FakeTransport::new();
        fake.push(Err("network unreachable".into()));
        fake.push_ok(401, "");
        let (client, session) = client_with(&fake, Some("tok"));

        let err = client.get::<Vec<serde_json::Value>>("/projects").await.unwrap_err();
        assert_eq!(err, ApiError::Transport("network unreachable".into()));

        let err = client.get::<Vec<serde_json::Value>>("/projects").await.unwrap_err();
        assert!(err.is_auth_expired());
        assert_eq!(session.token().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_payload_error() {
        let fake = FakeTransport::new();
        fake.push_ok(200, "<html>");
        let (client, _) = client_with(&fake, Some("tok"));

        let err = client.get::<Vec<serde_json::Value>>("/projects").await.unwrap_err();
        assert!(matches!(err, ApiError::Payload(_)));
    }
}
