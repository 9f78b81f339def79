//! Catalogo Lists
//!
//! Client-side management of a user's movie lists against the Catalogo
//! REST backend. Layered like the rest of the app:
//! - domain: lists, movies, errors
//! - auth / config: how to reach and authenticate against the backend
//! - api: backend trait with REST and in-memory implementations
//! - view / session: what the screens show and the current selection
//! - manager: the list-management flow tying them together

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod manager;
pub mod session;
pub mod view;

pub use api::{HttpListsApi, ListsApi, MemoryListsApi};
pub use auth::{AuthScheme, BearerAuth, CookieJar, CsrfSessionAuth, TokenStore};
pub use config::{AuthMode, ClientConfig};
pub use domain::{
    ApiError, AuthError, ListError, ListResult, MovieDetails, MovieList, MoviePreview,
};
pub use manager::{Dialogs, ListManager};
pub use session::{Selection, SessionChange, UiSession};
pub use view::{CoverSlot, EditModalView, ListCardView, ListOption, ListsPanel, MovieTile};
