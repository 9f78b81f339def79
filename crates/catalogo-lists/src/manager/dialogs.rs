//! User Dialogs
//!
//! Blocking prompts the list flow needs from its host.

/// Alerts, confirmations and navigation, provided by the browser in the
/// app and by a recorder in tests.
pub trait Dialogs {
    /// Ask a yes/no question
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);

    /// Leave the page, e.g. for the login screen
    fn redirect(&self, url: &str);
}

impl<D: Dialogs + ?Sized> Dialogs for &D {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn redirect(&self, url: &str) {
        (**self).redirect(url)
    }
}
