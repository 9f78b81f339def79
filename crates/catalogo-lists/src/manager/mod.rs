//! List Manager
//!
//! The list-management flow: fetch, render, mutate, then refetch so the
//! displayed state always comes from the server. Failures are surfaced
//! through `Dialogs` and also returned to the caller.

mod dialogs;
#[cfg(test)]
mod tests;

pub use dialogs::Dialogs;

use crate::api::ListsApi;
use crate::domain::{
    ApiError, AuthError, ListError, ListResult, MovieDetails, MovieList, MoviePreview,
};
use crate::session::UiSession;
use crate::view::{edit_modal, list_option, ListOption, ListsPanel};

/// User action, used to pick the wording of failure messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Open,
    Create,
    Rename,
    Delete,
    AddMovie,
    RemoveMovie,
}

impl Action {
    fn login_message(self) -> &'static str {
        match self {
            Action::Open => "Sesión expirada o no iniciada. Redirigiendo a login...",
            Action::Create => "Debes iniciar sesión para crear listas o tu sesión ha expirado.",
            Action::Rename => "Debes iniciar sesión para actualizar listas o tu sesión ha expirado.",
            Action::Delete => "Debes iniciar sesión para eliminar listas o tu sesión ha expirado.",
            Action::AddMovie | Action::RemoveMovie => {
                "Debes iniciar sesión para modificar listas o tu sesión ha expirado."
            }
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Action::Open => "Hubo un error al cargar los detalles de la lista",
            Action::Create => "Hubo un error al crear la lista",
            Action::Rename => "Hubo un error al actualizar la lista",
            Action::Delete => "Hubo un error al eliminar la lista",
            Action::AddMovie => "Hubo un error al añadir la película",
            Action::RemoveMovie => "Hubo un error al intentar quitar la película",
        }
    }
}

const EMPTY_NAME: &str = "El nombre de la lista no puede estar vacío.";
const INVALID_MOVIE_ID: &str = "Error: ID de película inválido.";
const MISSING_CSRF: &str = "Error: Token CSRF no encontrado. Asegúrate de que estás logueado.";
const DETAILS_FAILED: &str = "No se pudieron cargar los detalles de la película.";
const NOTHING_SELECTED: &str = "Por favor, selecciona una lista y una película.";
const CONFIRM_DELETE: &str =
    "¿Estás seguro de que quieres eliminar esta lista? Esta acción es irreversible.";
const CONFIRM_REMOVE_MOVIE: &str = "¿Estás seguro de que quieres quitar esta película de la lista?";

pub struct ListManager<A, D> {
    api: A,
    dialogs: D,
    login_url: String,
}

impl<A: ListsApi, D: Dialogs> ListManager<A, D> {
    pub fn new(api: A, dialogs: D, login_url: impl Into<String>) -> Self {
        Self {
            api,
            dialogs,
            login_url: login_url.into(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    // ========================
    // Reads
    // ========================

    /// Reload every list and replace the panel. Never fails: auth problems
    /// show a login prompt and anything else a generic error.
    pub async fn fetch_lists(&self, session: &mut UiSession) -> Vec<MovieList> {
        session.set_panel(ListsPanel::Loading);
        let (panel, lists) = match self.api.list_all().await {
            Ok(lists) => {
                log::debug!("loaded {} lists", lists.len());
                (ListsPanel::from_lists(&lists), lists)
            }
            Err(e) if e.is_auth() => {
                log::info!("lists unavailable without login: {}", e);
                (ListsPanel::LoginRequired, Vec::new())
            }
            Err(e) => {
                log::error!("failed to load lists: {}", e);
                (ListsPanel::Failed, Vec::new())
            }
        };
        session.set_panel(panel);
        lists
    }

    /// Load one list in full and show it in the edit modal
    pub async fn open_edit_modal(&self, session: &mut UiSession, list_id: u32) -> ListResult<()> {
        match self.api.get(list_id).await {
            Ok(list) => {
                session.open_modal(edit_modal(&list));
                Ok(())
            }
            Err(e) => {
                let err = ListError::from(e);
                self.report(Action::Open, &err);
                if err.is_auth() {
                    self.dialogs.redirect(&self.login_url);
                }
                Err(err)
            }
        }
    }

    /// Lists offered as destinations in the add-to-list dialog
    pub async fn load_add_targets(&self) -> ListResult<Vec<ListOption>> {
        let lists = self.api.list_all().await?;
        Ok(lists.iter().map(list_option).collect())
    }

    /// The local movie catalog
    pub async fn fetch_catalog(&self) -> ListResult<Vec<MoviePreview>> {
        Ok(self.api.list_movies().await?)
    }

    /// Full details of one catalog movie, the starting point of an add
    pub async fn show_movie(&self, movie_id: u32) -> ListResult<MovieDetails> {
        self.api.fetch_movie(movie_id).await.map_err(|e| {
            log::error!("failed to load movie {}: {}", movie_id, e);
            self.dialogs.alert(DETAILS_FAILED);
            ListError::from(e)
        })
    }

    // ========================
    // Mutations
    // ========================

    pub async fn create_list(&self, session: &mut UiSession, name: &str) -> ListResult<MovieList> {
        let name = self.valid_name(name)?;
        match self.api.create(name).await {
            Ok(list) => {
                log::info!("created list {} ({})", list.id, list.name);
                self.fetch_lists(session).await;
                Ok(list)
            }
            Err(e) => Err(self.fail(Action::Create, e)),
        }
    }

    pub async fn rename_list(
        &self,
        session: &mut UiSession,
        list_id: u32,
        new_name: &str,
    ) -> ListResult<MovieList> {
        let name = self.valid_name(new_name)?;
        match self.api.rename(list_id, name).await {
            Ok(list) => {
                self.dialogs.alert("Nombre de la lista actualizado con éxito.");
                session.close_modal_of(list_id);
                self.fetch_lists(session).await;
                Ok(list)
            }
            Err(e) => Err(self.fail(Action::Rename, e)),
        }
    }

    /// Rename whichever list the edit modal has open
    pub async fn rename_current(&self, session: &mut UiSession, new_name: &str) -> ListResult<MovieList> {
        let list_id = session.editing_list().ok_or(ListError::NothingSelected)?;
        self.rename_list(session, list_id, new_name).await
    }

    /// Delete after confirmation. The card goes away at once; the refetch
    /// that follows brings the panel back in line with the server.
    pub async fn delete_list(&self, session: &mut UiSession, list_id: u32) -> ListResult<()> {
        if !self.dialogs.confirm(CONFIRM_DELETE) {
            return Err(ListError::Cancelled);
        }
        match self.api.delete(list_id).await {
            Ok(()) => {
                session.remove_card(list_id);
                session.close_modal_of(list_id);
                self.fetch_lists(session).await;
                Ok(())
            }
            Err(e) => Err(self.fail(Action::Delete, e)),
        }
    }

    /// Remove a movie from a list. `movie_id` comes from markup and must be
    /// an integer; anything else is refused before a request is made.
    pub async fn remove_movie(
        &self,
        session: &mut UiSession,
        list_id: u32,
        movie_id: &str,
    ) -> ListResult<()> {
        let movie_id = match parse_movie_id(movie_id) {
            Ok(id) => id,
            Err(err) => {
                log::error!("{}", err);
                self.dialogs.alert(INVALID_MOVIE_ID);
                return Err(err);
            }
        };
        if !self.dialogs.confirm(CONFIRM_REMOVE_MOVIE) {
            return Err(ListError::Cancelled);
        }
        match self.api.remove_movie(list_id, movie_id).await {
            Ok(()) => {
                session.remove_tile(list_id, movie_id);
                self.fetch_lists(session).await;
                self.dialogs.alert("Película eliminada de la lista exitosamente.");
                Ok(())
            }
            Err(e) => Err(self.fail(Action::RemoveMovie, e)),
        }
    }

    /// Add a movie to a list. Local state is left alone; the next fetch
    /// picks the change up.
    pub async fn add_movie(&self, list_id: u32, movie_id: u32) -> ListResult<()> {
        match self.api.add_movie(list_id, movie_id).await {
            Ok(()) => {
                log::info!("added movie {} to list {}", movie_id, list_id);
                self.dialogs.alert("¡Película añadida con éxito a tu lista!");
                Ok(())
            }
            Err(e) => Err(self.fail(Action::AddMovie, e)),
        }
    }

    /// Add the pending movie to the chosen list. The pending selection is
    /// cleared whatever the outcome.
    pub async fn confirm_add(&self, session: &mut UiSession, list_id: Option<u32>) -> ListResult<()> {
        let pending = session.pending_movie().map(|m| m.id);
        let result = match (list_id, pending) {
            (Some(list_id), Some(movie_id)) => self.add_movie(list_id, movie_id).await,
            _ => {
                self.dialogs.alert(NOTHING_SELECTED);
                Err(ListError::NothingSelected)
            }
        };
        session.clear_pending();
        result
    }

    // ========================
    // Helpers
    // ========================

    fn valid_name<'a>(&self, name: &'a str) -> ListResult<&'a str> {
        let name = name.trim();
        if name.is_empty() {
            self.dialogs.alert(EMPTY_NAME);
            return Err(ListError::EmptyName);
        }
        Ok(name)
    }

    fn fail(&self, action: Action, e: ApiError) -> ListError {
        let err = ListError::from(e);
        self.report(action, &err);
        err
    }

    fn report(&self, action: Action, err: &ListError) {
        log::error!("{:?} failed: {}", action, err);
        let message = match err {
            ListError::Api(ApiError::Auth(AuthError::MissingCsrf(_))) => MISSING_CSRF.to_string(),
            e if e.is_auth() => action.login_message().to_string(),
            ListError::Api(ApiError::Rejected { detail, .. }) => {
                format!("{}: {}", action.failure_message(), detail)
            }
            _ => format!("{}.", action.failure_message()),
        };
        self.dialogs.alert(&message);
    }
}

pub fn parse_movie_id(raw: &str) -> ListResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ListError::InvalidMovieId(raw.to_string()))
}
