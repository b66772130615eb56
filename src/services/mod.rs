//! Domain Service Functions
//!
//! One async function per backend endpoint, organized by domain.

mod auth;
mod project;
mod task;

use crate::api::ApiError;
use crate::session::Session;

// Re-export all public items
pub use auth::*;
pub use project::*;
pub use task::*;

/// A rejected credential is dropped here, before the error reaches the view.
/// Navigating away stays the view's decision.
fn settle<T>(session: &Session, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        if err.is_auth_expired() {
            log::info!("Credential rejected by backend, clearing session");
            session.clear();
        }
    }
    result
}
