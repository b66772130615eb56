//! Auth Services

use crate::api::{ApiClient, ApiError};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::session::Session;

use super::settle;

/// Stores the returned token on success
pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<(), ApiError> {
    let response: AuthResponse = settle(api.session(), api.post("/auth/login", request).await)?;
    api.session().store_token(&response.token);
    Ok(())
}

/// Stores the returned token on success
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<(), ApiError> {
    let response: AuthResponse = settle(api.session(), api.post("/auth/register", request).await)?;
    api.session().store_token(&response.token);
    Ok(())
}

/// Local only; the backend keeps no session
pub fn logout(session: &Session) {
    session.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpMethod;
    use crate::session::SessionState;
    use crate::testing::{client_with, FakeTransport};

    #[tokio::test]
    async fn test_login_stores_token() {
        let fake = FakeTransport::new();
        fake.push_ok(200, r#"{"token":"jwt-123"}"#);
        let (api, session) = client_with(&fake, None);

        let request = LoginRequest { user_name: "ada".into(), password: "pw".into() };
        login(&api, &request).await.unwrap();

        assert_eq!(session.token().as_deref(), Some("jwt-123"));
        let sent = &fake.requests()[0];
        assert_eq!(sent.method, HttpMethod::Post);
        assert!(sent.url.ends_with("/auth/login"));
        assert_eq!(sent.body.as_deref(), Some(r#"{"userName":"ada","password":"pw"}"#));
    }

    #[tokio::test]
    async fn test_failed_register_propagates_message() {
        let fake = FakeTransport::new();
        fake.push_ok(400, r#""Username already taken""#);
        let (api, session) = client_with(&fake, None);

        let request = RegisterRequest { user_name: "ada".into(), email: "ada@x.io".into(), password: "pw".into() };
        let err = register(&api, &request).await.unwrap_err();

        assert_eq!(err.to_string(), "Username already taken");
        assert_eq!(session.state(), SessionState::Unauthenticated);
    }

    #[test]
    fn test_logout_clears_session() {
        let session = Session::in_memory();
        session.store_token("t");
        logout(&session);
        assert_eq!(session.state(), SessionState::Unauthenticated);
    }
}
