//! Lists API - Core Trait
//!
//! The REST surface the list manager consumes.

use async_trait::async_trait;

use crate::domain::{ApiResult, MovieDetails, MovieList, MoviePreview};

/// Backend operations on the authenticated user's lists.
///
/// Futures are `?Send`: in the browser they wrap `fetch` promises.
#[async_trait(?Send)]
pub trait ListsApi {
    /// All lists, each carrying at most four movies for the collage
    async fn list_all(&self) -> ApiResult<Vec<MovieList>>;

    /// One list with every movie in it
    async fn get(&self, id: u32) -> ApiResult<MovieList>;

    async fn create(&self, name: &str) -> ApiResult<MovieList>;

    async fn rename(&self, id: u32, name: &str) -> ApiResult<MovieList>;

    /// Succeeds only on `204 No Content`
    async fn delete(&self, id: u32) -> ApiResult<()>;

    async fn add_movie(&self, list_id: u32, movie_id: u32) -> ApiResult<()>;

    /// Succeeds on `200` or `204`
    async fn remove_movie(&self, list_id: u32, movie_id: u32) -> ApiResult<()>;

    /// The local movie catalog, source of movies to add
    async fn list_movies(&self) -> ApiResult<Vec<MoviePreview>>;

    /// One catalog movie with description and genre
    async fn fetch_movie(&self, id: u32) -> ApiResult<MovieDetails>;
}
