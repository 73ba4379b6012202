use std::env;

/// Environment variable that overrides all runtime detection.
const API_URL_OVERRIDE: &str = "LIBROVIA_API_URL";

/// Environment variable carrying a development host hint ("host" or
/// "host:port"), the desktop analogue of a packager/debugger host.
const DEV_HOST_HINT: &str = "LIBROVIA_DEV_HOST";

/// Loopback alias reaching the host machine from the Android emulator.
const EMULATOR_LOOPBACK_URL: &str = "http://10.0.2.2:8000";

/// Hosted backend used when nothing else applies.
const HOSTED_BACKEND_URL: &str = "https://librovia-backend.onrender.com";

/// Port a locally running backend listens on.
const DEV_BACKEND_PORT: u16 = 8000;

/// Pick the API base URL for the current runtime environment.
///
/// Precedence: explicit env override, Android emulator loopback alias,
/// dev-host hint, hosted default. Every branch has a fallback; this never
/// fails. The returned URL does not include the `/api` prefix; see
/// [`Config::api_url`].
pub fn detect_base_url() -> String {
    resolve_base_url(
        env::var(API_URL_OVERRIDE).ok().as_deref(),
        cfg!(target_os = "android"),
        env::var(DEV_HOST_HINT).ok().as_deref(),
    )
}

fn resolve_base_url(override_url: Option<&str>, android: bool, dev_host: Option<&str>) -> String {
    if let Some(url) = override_url {
        let url = url.trim();
        if !url.is_empty() {
            return url.to_string();
        }
    }

    if android {
        return EMULATOR_LOOPBACK_URL.to_string();
    }

    if let Some(hint) = dev_host {
        // Hints arrive as "host" or "host:port"; only the host matters.
        let host = hint.split(':').next().unwrap_or("").trim();
        if !host.is_empty() && host != "localhost" && host != "127.0.0.1" {
            return format!("http://{}:{}", host, DEV_BACKEND_PORT);
        }
    }

    HOSTED_BACKEND_URL.to_string()
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: detect_base_url(),
        }
    }
}

impl Config {
    /// Create a configuration from the current environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with a fixed base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the full URL for an API endpoint, e.g. `api_url("/books")`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_on_every_platform() {
        assert_eq!(resolve_base_url(Some("http://x:1"), false, None), "http://x:1");
        assert_eq!(resolve_base_url(Some("http://x:1"), true, None), "http://x:1");
        assert_eq!(
            resolve_base_url(Some("http://x:1"), false, Some("192.168.1.20:19000")),
            "http://x:1"
        );
    }

    #[test]
    fn test_blank_override_is_ignored() {
        assert_eq!(resolve_base_url(Some("   "), false, None), HOSTED_BACKEND_URL);
    }

    #[test]
    fn test_android_uses_emulator_loopback() {
        assert_eq!(resolve_base_url(None, true, None), EMULATOR_LOOPBACK_URL);
        assert_eq!(
            resolve_base_url(None, true, Some("192.168.1.20")),
            EMULATOR_LOOPBACK_URL
        );
    }

    #[test]
    fn test_dev_host_hint_builds_local_url() {
        assert_eq!(
            resolve_base_url(None, false, Some("192.168.1.20:19000")),
            "http://192.168.1.20:8000"
        );
        assert_eq!(
            resolve_base_url(None, false, Some("devbox")),
            "http://devbox:8000"
        );
    }

    #[test]
    fn test_loopback_hint_falls_through() {
        assert_eq!(resolve_base_url(None, false, Some("localhost:19000")), HOSTED_BACKEND_URL);
        assert_eq!(resolve_base_url(None, false, Some("127.0.0.1")), HOSTED_BACKEND_URL);
        assert_eq!(resolve_base_url(None, false, Some("")), HOSTED_BACKEND_URL);
    }

    #[test]
    fn test_default_is_hosted_backend() {
        assert_eq!(resolve_base_url(None, false, None), HOSTED_BACKEND_URL);
    }

    #[test]
    fn test_api_url() {
        let config = Config::with_base_url("http://127.0.0.1:8000");
        assert_eq!(config.api_url("/login"), "http://127.0.0.1:8000/api/login");
        assert_eq!(config.api_url("/books"), "http://127.0.0.1:8000/api/books");
    }

    #[test]
    fn test_api_url_trailing_slash() {
        let config = Config::with_base_url("http://127.0.0.1:8000/");
        assert_eq!(config.api_url("/books"), "http://127.0.0.1:8000/api/books");
    }
}
