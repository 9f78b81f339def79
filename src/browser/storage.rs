//! Client-Side Storage
//!
//! Token and cookie sources for the auth schemes.

use catalogo_lists::{CookieJar, TokenStore};
use wasm_bindgen::JsCast;

/// Bearer token kept in `localStorage`
#[derive(Debug, Clone)]
pub struct LocalStorageToken {
    key: String,
}

impl LocalStorageToken {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for LocalStorageToken {
    fn token(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(&self.key).ok()?
    }
}

/// `document.cookie`
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCookies;

impl CookieJar for DocumentCookies {
    fn cookie_string(&self) -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default()
    }
}
