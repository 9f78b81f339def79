//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use catalogo_lists::{MovieDetails, MoviePreview, UiSession};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Rendered lists panel, edit modal and selection
    pub session: UiSession,
    /// Local movie catalog
    pub movies: Vec<MoviePreview>,
    /// Set when the catalog could not be loaded
    pub catalog_error: Option<String>,
    /// Movie shown in the details modal
    pub details: Option<MovieDetails>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<CatalogState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy of the session for an async action. Once its request settles the
/// action hands the copy to `store_settle`.
pub fn store_session(store: &AppStore) -> UiSession {
    let mut session = store.session().get_untracked();
    session.take_changes();
    session
}

/// Replay only what the action changed on its copy, so anything the user
/// did while the request was in flight survives.
pub fn store_settle(store: &AppStore, mut action: UiSession) {
    let changes = action.take_changes();
    store.session().update(|s| s.replay(changes));
}

/// Apply a synchronous change to the session
pub fn store_update_session(store: &AppStore, f: impl FnOnce(&mut UiSession)) {
    store.session().update(|s| {
        f(s);
        s.take_changes();
    });
}
