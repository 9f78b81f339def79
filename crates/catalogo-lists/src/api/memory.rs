//! In-Memory Lists API
//!
//! Behaves like the REST backend (per-user lists, unique names, four-movie
//! previews in the collection response) and records every request it
//! receives.

use std::cell::RefCell;
use std::collections::BTreeMap;

use async_trait::async_trait;

use super::traits::ListsApi;
use crate::domain::{ApiError, ApiResult, MovieDetails, MovieList, MoviePreview};

/// Movies embedded per list in the collection response
const PREVIEW_LEN: usize = 4;

/// A request as seen by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListAll,
    Get(u32),
    Create(String),
    Rename(u32, String),
    Delete(u32),
    AddMovie(u32, u32),
    RemoveMovie(u32, u32),
    ListMovies,
    FetchMovie(u32),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Call::ListAll | Call::Get(_) | Call::ListMovies | Call::FetchMovie(_)
        )
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    lists: BTreeMap<u32, MovieList>,
    catalog: Vec<MoviePreview>,
    next_id: u32,
    logged_in: bool,
    calls: Vec<Call>,
}

#[derive(Debug)]
pub struct MemoryListsApi {
    state: RefCell<MemoryState>,
}

impl Default for MemoryListsApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryListsApi {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(MemoryState {
                next_id: 1,
                logged_in: true,
                ..Default::default()
            }),
        }
    }

    /// Movies that may be added to lists
    pub fn with_catalog(self, movies: Vec<MoviePreview>) -> Self {
        self.state.borrow_mut().catalog = movies;
        self
    }

    /// Seed a list holding the given catalog movies
    pub fn seed_list(&self, name: &str, movie_ids: &[u32]) -> u32 {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;

        let movies = movie_ids
            .iter()
            .filter_map(|mid| state.catalog.iter().find(|m| m.id == *mid).cloned())
            .collect();
        state.lists.insert(
            id,
            MovieList {
                id,
                name: name.to_string(),
                movies,
                movie_count: None,
            },
        );
        id
    }

    /// Simulate an expired or missing session
    pub fn set_logged_in(&self, logged_in: bool) {
        self.state.borrow_mut().logged_in = logged_in;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Stored list, with all its movies
    pub fn stored(&self, id: u32) -> Option<MovieList> {
        self.state.borrow().lists.get(&id).cloned()
    }

    fn begin(&self, call: Call) -> ApiResult<std::cell::RefMut<'_, MemoryState>> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        if state.logged_in {
            Ok(state)
        } else {
            Err(ApiError::Unauthorized(401))
        }
    }
}

fn not_found() -> ApiError {
    ApiError::Rejected {
        status: 404,
        detail: "Not found.".to_string(),
    }
}

fn bad_request(detail: &str) -> ApiError {
    ApiError::Rejected {
        status: 400,
        detail: detail.to_string(),
    }
}

fn with_full_count(list: &MovieList) -> MovieList {
    MovieList {
        movie_count: Some(list.movies.len() as u32),
        ..list.clone()
    }
}

fn name_taken(state: &MemoryState, name: &str, except: Option<u32>) -> bool {
    state
        .lists
        .values()
        .any(|l| l.name == name && Some(l.id) != except)
}

#[async_trait(?Send)]
impl ListsApi for MemoryListsApi {
    async fn list_all(&self) -> ApiResult<Vec<MovieList>> {
        let state = self.begin(Call::ListAll)?;
        Ok(state
            .lists
            .values()
            .map(|l| {
                let mut preview = with_full_count(l);
                preview.movies.truncate(PREVIEW_LEN);
                preview
            })
            .collect())
    }

    async fn get(&self, id: u32) -> ApiResult<MovieList> {
        let state = self.begin(Call::Get(id))?;
        state.lists.get(&id).map(with_full_count).ok_or_else(not_found)
    }

    async fn create(&self, name: &str) -> ApiResult<MovieList> {
        let mut state = self.begin(Call::Create(name.to_string()))?;
        if name_taken(&state, name, None) {
            return Err(bad_request("The fields usuario, nombre must make a unique set."));
        }
        let id = state.next_id;
        state.next_id += 1;
        let list = MovieList::new(id, name);
        state.lists.insert(id, list.clone());
        Ok(with_full_count(&list))
    }

    async fn rename(&self, id: u32, name: &str) -> ApiResult<MovieList> {
        let mut state = self.begin(Call::Rename(id, name.to_string()))?;
        if name_taken(&state, name, Some(id)) {
            return Err(bad_request("The fields usuario, nombre must make a unique set."));
        }
        let list = state.lists.get_mut(&id).ok_or_else(not_found)?;
        list.name = name.to_string();
        Ok(with_full_count(list))
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let mut state = self.begin(Call::Delete(id))?;
        state.lists.remove(&id).map(|_| ()).ok_or_else(not_found)
    }

    async fn add_movie(&self, list_id: u32, movie_id: u32) -> ApiResult<()> {
        let mut state = self.begin(Call::AddMovie(list_id, movie_id))?;
        let movie = state
            .catalog
            .iter()
            .find(|m| m.id == movie_id)
            .cloned()
            .ok_or_else(not_found)?;
        let list = state.lists.get_mut(&list_id).ok_or_else(not_found)?;
        if list.movies.iter().any(|m| m.id == movie_id) {
            return Err(bad_request("La película ya está en esta lista."));
        }
        list.movies.push(movie);
        Ok(())
    }

    async fn remove_movie(&self, list_id: u32, movie_id: u32) -> ApiResult<()> {
        let mut state = self.begin(Call::RemoveMovie(list_id, movie_id))?;
        let list = state.lists.get_mut(&list_id).ok_or_else(not_found)?;
        let before = list.movies.len();
        list.movies.retain(|m| m.id != movie_id);
        if list.movies.len() == before {
            return Err(bad_request("La película no está en esta lista."));
        }
        Ok(())
    }

    async fn list_movies(&self) -> ApiResult<Vec<MoviePreview>> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::ListMovies);
        Ok(state.catalog.clone())
    }

    async fn fetch_movie(&self, id: u32) -> ApiResult<MovieDetails> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::FetchMovie(id));
        state
            .catalog
            .iter()
            .find(|m| m.id == id)
            .map(MovieDetails::from)
            .ok_or_else(not_found)
    }
}
