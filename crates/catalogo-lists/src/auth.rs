//! Auth Schemes
//!
//! Two interchangeable ways of authenticating requests. Callers hold a
//! `dyn AuthScheme` and never assume which one is active.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Method;

use crate::domain::AuthError;

pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Produces the headers a request needs
pub trait AuthScheme {
    fn headers(&self, method: &Method) -> Result<HeaderMap, AuthError>;

    /// Whether the browser should attach its cookies
    fn sends_credentials(&self) -> bool;
}

/// Source of a bearer token (local storage in the browser)
pub trait TokenStore {
    fn token(&self) -> Option<String>;
}

/// Source of the raw `name=value; ...` cookie string
pub trait CookieJar {
    fn cookie_string(&self) -> String;
}

impl<F: Fn() -> Option<String>> TokenStore for F {
    fn token(&self) -> Option<String> {
        self()
    }
}

impl<F: Fn() -> String> CookieJar for F {
    fn cookie_string(&self) -> String {
        self()
    }
}

/// Methods that never change server state and need no CSRF token
pub fn is_safe_method(method: &Method) -> bool {
    [Method::GET, Method::HEAD, Method::OPTIONS, Method::TRACE].contains(method)
}

/// Value of cookie `name` in a `document.cookie` style string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

fn header_value(value: &str) -> Result<HeaderValue, AuthError> {
    HeaderValue::from_str(value).map_err(|_| AuthError::NotLoggedIn)
}

// ========================
// Bearer
// ========================

pub struct BearerAuth<S> {
    store: S,
}

impl<S: TokenStore> BearerAuth<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: TokenStore> AuthScheme for BearerAuth<S> {
    fn headers(&self, _method: &Method) -> Result<HeaderMap, AuthError> {
        let token = self
            .store
            .token()
            .filter(|t| !t.trim().is_empty())
            .ok_or(AuthError::NotLoggedIn)?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", token))?);
        Ok(headers)
    }

    fn sends_credentials(&self) -> bool {
        false
    }
}

// ========================
// CSRF + session cookie
// ========================

pub struct CsrfSessionAuth<J> {
    jar: J,
    cookie_name: String,
}

impl<J: CookieJar> CsrfSessionAuth<J> {
    pub fn new(jar: J, cookie_name: impl Into<String>) -> Self {
        Self {
            jar,
            cookie_name: cookie_name.into(),
        }
    }
}

impl<J: CookieJar> AuthScheme for CsrfSessionAuth<J> {
    fn headers(&self, method: &Method) -> Result<HeaderMap, AuthError> {
        let mut headers = HeaderMap::new();
        if is_safe_method(method) {
            return Ok(headers);
        }

        let Some(token) = cookie_value(&self.jar.cookie_string(), &self.cookie_name) else {
            log::warn!("CSRF token is missing for a {} request", method);
            return Err(AuthError::MissingCsrf(self.cookie_name.clone()));
        };

        let value = HeaderValue::from_str(&token)
            .map_err(|_| AuthError::MissingCsrf(self.cookie_name.clone()))?;
        headers.insert(HeaderName::from_static("x-csrftoken"), value);
        Ok(headers)
    }

    fn sends_credentials(&self) -> bool {
        true
    }
}

impl<A: AuthScheme + ?Sized> AuthScheme for Box<A> {
    fn headers(&self, method: &Method) -> Result<HeaderMap, AuthError> {
        (**self).headers(method)
    }

    fn sends_credentials(&self) -> bool {
        (**self).sends_credentials()
    }
}
