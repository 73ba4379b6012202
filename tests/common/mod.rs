//! Shared helpers for the integration tests

use std::time::{Duration, Instant};

use librovia::app::config::Config;
use librovia::app::session::SessionStore;
use librovia::app::state::AppState;
use librovia::app::types::User;

pub fn librarian() -> User {
    User {
        id: Some("u1".to_string()),
        name: Some("Ada".to_string()),
        email: Some("ada@example.com".to_string()),
        role: Some("Librarian".to_string()),
    }
}

/// App state wired to a mock server and a throwaway session dir
pub fn app_state(server_url: &str, dir: &std::path::Path) -> AppState {
    AppState::with_parts(
        Config::with_base_url(server_url),
        SessionStore::with_dir(dir),
    )
}

/// Poll the state until `done` holds, the way the frame loop would.
/// Panics after five seconds so a hung worker fails the test instead of
/// wedging it.
pub fn wait_until(state: &mut AppState, done: impl Fn(&AppState) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        state.poll();
        if done(state) {
            return;
        }
        if Instant::now() > deadline {
            panic!("timed out waiting for app state condition");
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}
