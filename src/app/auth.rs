//! Authentication Flow
//!
//! In-memory authentication state plus the login call. The flow is driven
//! from [`crate::app::state::AppState`]: submit spawns a worker thread that
//! runs [`login`] and reports over a channel; the frame loop applies the
//! result, persists the session, and routes by role.

use tracing::info;

use crate::app::api::ApiClient;
use crate::app::error::ApiError;
use crate::app::types::User;

/// Authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<User>,
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }
}

/// Exchange credentials for a token and user.
///
/// A 2xx response without a user object is a failed login: the attempt
/// surfaces the server's message (or a generic one) and nothing is
/// persisted. The token may legitimately be absent on success.
pub fn login(api: &ApiClient, email: &str, password: &str) -> Result<(Option<String>, User), ApiError> {
    let response = api.login(email, password)?;
    match response.user {
        Some(user) => {
            info!("login accepted for {}", user.display_name());
            Ok((response.token, user))
        }
        None => Err(ApiError::server(
            200,
            response
                .message
                .unwrap_or_else(|| "Login failed".to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_new() {
        let state = AuthState::new();
        assert!(!state.authenticated);
        assert!(state.user.is_none());
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_auth_state_set_and_clear_error() {
        let mut state = AuthState::new();
        state.set_error("Login failed".to_string());
        assert_eq!(state.error.as_deref(), Some("Login failed"));

        state.clear_error();
        assert!(state.error.is_none());
    }
}
