//! Window Dialogs
//!
//! `alert`, `confirm` and navigation through `window`.

use catalogo_lists::Dialogs;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(message);
        }
    }

    fn redirect(&self, url: &str) {
        if let Some(w) = web_sys::window() {
            if w.location().set_href(url).is_err() {
                log::error!("failed to navigate to {}", url);
            }
        }
    }
}
