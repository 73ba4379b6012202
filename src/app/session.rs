//! Durable Session Storage
//!
//! Persists the authentication token and user record across app restarts,
//! as two files under the platform data directory. Reads never fail: any
//! missing or unreadable value is simply absent. Writes are best-effort;
//! a failure is logged and the in-memory session stays valid for the rest
//! of the run.
//!
//! Callers must re-read [`SessionStore::load`] before every privileged
//! request instead of trusting only in-memory state; the store may have
//! been written by a prior app session.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::app::types::User;

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user.json";

/// The client-held proof of authentication
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn is_librarian(&self) -> bool {
        self.user.as_ref().map(User::is_librarian).unwrap_or(false)
    }
}

/// File-backed store for the session, injected into everything that needs
/// token or user state.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Store under the platform data directory
    pub fn new() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("librovia");
        Self { dir }
    }

    /// Store under an explicit directory (tests, alternate profiles)
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read token and user from disk. Treats any read failure as "absent".
    pub fn load(&self) -> Session {
        let token = fs::read_to_string(self.dir.join(TOKEN_FILE))
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let user = fs::read_to_string(self.dir.join(USER_FILE))
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok());

        Session { token, user }
    }

    /// Write both values durably. A token-less login still persists the
    /// user; the stale token file is removed so later requests degrade to
    /// unauthenticated instead of sending an old token.
    pub fn save(&self, token: Option<&str>, user: &User) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            warn!("failed to create session dir {:?}: {}", self.dir, err);
            return;
        }

        match token {
            Some(token) => {
                if let Err(err) = fs::write(self.dir.join(TOKEN_FILE), token) {
                    warn!("failed to persist token: {}", err);
                }
            }
            None => {
                let _ = fs::remove_file(self.dir.join(TOKEN_FILE));
            }
        }

        match serde_json::to_string(user) {
            Ok(json) => {
                if let Err(err) = fs::write(self.dir.join(USER_FILE), json) {
                    warn!("failed to persist user: {}", err);
                }
            }
            Err(err) => warn!("failed to serialize user: {}", err),
        }
    }

    /// Remove both values (logout)
    pub fn clear(&self) {
        for file in [TOKEN_FILE, USER_FILE] {
            if let Err(err) = fs::remove_file(self.dir.join(file)) {
                debug!("session clear, {}: {}", file, err);
            }
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
