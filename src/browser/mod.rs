//! Browser Bindings
//!
//! Window dialogs, client-side storage and console logging, organized by
//! concern.

mod dialogs;
mod logger;
mod storage;

use catalogo_lists::{AuthMode, AuthScheme, BearerAuth, ClientConfig, CsrfSessionAuth};

// Re-export all public items
pub use dialogs::*;
pub use logger::*;
pub use storage::*;

/// Auth scheme selected by configuration, backed by browser storage
pub fn auth_for(config: &ClientConfig) -> Box<dyn AuthScheme> {
    match config.auth {
        AuthMode::Session => Box::new(CsrfSessionAuth::new(DocumentCookies, config.csrf_cookie.clone())),
        AuthMode::Bearer => Box::new(BearerAuth::new(LocalStorageToken::new(config.token_key.clone()))),
    }
}
