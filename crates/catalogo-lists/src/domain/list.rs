//! List Entities
//!
//! User-owned movie lists and the movie previews embedded in them.

use serde::{Deserialize, Serialize};

/// A movie as embedded in a list or listed in the catalog.
///
/// The backend names fields differently per endpoint and the catalog sends
/// several spellings side by side, so decoding goes through `MovieWire`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MovieWire")]
pub struct MoviePreview {
    pub id: u32,
    #[serde(rename = "titulo")]
    pub title: String,
    /// Poster URL, absent when the movie has no cover
    #[serde(rename = "portada")]
    pub poster_url: Option<String>,
    #[serde(rename = "anioLanzamiento", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Every spelling of a movie the backend sends
#[derive(Debug, Deserialize)]
pub(crate) struct MovieWire {
    pub id: u32,
    pub titulo: Option<String>,
    pub title: Option<String>,
    pub descripcion: Option<String>,
    pub description: Option<String>,
    pub portada: Option<String>,
    #[serde(rename = "portadaUrl")]
    pub portada_url: Option<String>,
    #[serde(rename = "posterUrl")]
    pub poster_url: Option<String>,
    #[serde(rename = "anioLanzamiento")]
    pub anio_lanzamiento: Option<i32>,
    pub year: Option<i32>,
    /// Genre on the detail endpoint
    pub nombre: Option<String>,
}

impl From<MovieWire> for MoviePreview {
    fn from(wire: MovieWire) -> Self {
        Self {
            id: wire.id,
            title: wire.titulo.or(wire.title).unwrap_or_default(),
            poster_url: wire.portada.or(wire.portada_url).or(wire.poster_url),
            year: wire.anio_lanzamiento.or(wire.year),
        }
    }
}

impl MoviePreview {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_url: None,
            year: None,
        }
    }

    pub fn with_poster(id: u32, title: impl Into<String>, poster_url: impl Into<String>) -> Self {
        Self {
            poster_url: Some(poster_url.into()),
            ..Self::new(id, title)
        }
    }
}

/// A named list of movies owned by the authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieList {
    pub id: u32,
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    /// Movies in the list. The collection endpoint only sends the first four.
    #[serde(rename = "peliculas", alias = "movies", default)]
    pub movies: Vec<MoviePreview>,
    /// Total number of movies, which may exceed `movies.len()`
    #[serde(
        rename = "pelicula_count",
        alias = "peliculaCount",
        alias = "movieCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub movie_count: Option<u32>,
}

impl MovieList {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            movies: Vec::new(),
            movie_count: None,
        }
    }

    /// Count reported by the server, or the embedded movies when it sent none
    pub fn count(&self) -> u32 {
        self.movie_count.unwrap_or(self.movies.len() as u32)
    }
}

// ========================
// Request Bodies
// ========================

/// Body for create and rename
#[derive(Debug, Clone, Serialize)]
pub struct ListNameBody<'a> {
    pub nombre: &'a str,
}

/// Body for the add-movie and remove-movie actions
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MovieIdBody {
    pub pelicula_id: u32,
}
