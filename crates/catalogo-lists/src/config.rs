//! Client Configuration
//!
//! Backend location, login page and which auth scheme is active.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api/";
pub const DEFAULT_LOGIN_URL: &str = "/login/";
pub const DEFAULT_TOKEN_KEY: &str = "accessToken";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";

/// How requests are authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// CSRF cookie mirrored into a header plus the session cookie
    #[default]
    Session,
    /// `Authorization: Bearer` from client-side storage
    Bearer,
}

impl AuthMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "session" | "csrf" | "cookie" => Some(AuthMode::Session),
            "bearer" | "token" | "jwt" => Some(AuthMode::Bearer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base of the REST API, e.g. `http://127.0.0.1:8000/api/`
    pub api_base: String,
    /// Where to send the user when the session is gone
    pub login_url: String,
    pub auth: AuthMode,
    /// Local storage key holding the bearer token
    pub token_key: String,
    /// Cookie carrying the CSRF token
    pub csrf_cookie: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
            auth: AuthMode::default(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `CATALOGO_*` variables set at build time
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base) = option_env!("CATALOGO_API_BASE") {
            config.api_base = base.to_string();
        }
        if let Some(login) = option_env!("CATALOGO_LOGIN_URL") {
            config.login_url = login.to_string();
        }
        if let Some(mode) = option_env!("CATALOGO_AUTH_MODE").and_then(AuthMode::parse) {
            config.auth = mode;
        }
        config
    }

    pub fn with_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    /// `{base}/listas/`
    pub fn lists_url(&self) -> String {
        format!("{}/listas/", self.base())
    }

    /// `{base}/listas/{id}/`
    pub fn list_url(&self, id: u32) -> String {
        format!("{}/listas/{}/", self.base(), id)
    }

    /// `{base}/listas/{id}/{action}/`, action being `add-movie` or `remove-movie`
    pub fn list_action_url(&self, id: u32, action: &str) -> String {
        format!("{}/listas/{}/{}/", self.base(), id, action)
    }

    /// `{base}/peliculas/`
    pub fn movies_url(&self) -> String {
        format!("{}/peliculas/", self.base())
    }

    /// `{base}/peliculas/{id}/`
    pub fn movie_url(&self, id: u32) -> String {
        format!("{}/peliculas/{}/", self.base(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_with_and_without_trailing_slash() {
        let config = ClientConfig::default();
        assert_eq!(config.lists_url(), "http://127.0.0.1:8000/api/listas/");
        assert_eq!(config.list_url(5), "http://127.0.0.1:8000/api/listas/5/");

        let config = config.with_base("https://example.org/api");
        assert_eq!(
            config.list_action_url(5, "remove-movie"),
            "https://example.org/api/listas/5/remove-movie/"
        );
        assert_eq!(config.movies_url(), "https://example.org/api/peliculas/");
        assert_eq!(config.movie_url(4), "https://example.org/api/peliculas/4/");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"auth": "bearer"}"#).unwrap();
        assert_eq!(config.auth, AuthMode::Bearer);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.csrf_cookie, "csrftoken");
    }

    #[test]
    fn test_auth_mode_parse() {
        assert_eq!(AuthMode::parse("Bearer"), Some(AuthMode::Bearer));
        assert_eq!(AuthMode::parse(" csrf "), Some(AuthMode::Session));
        assert_eq!(AuthMode::parse("basic"), None);
    }
}
