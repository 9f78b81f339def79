//! Movie Details
//!
//! Full record of one catalog movie, shown before adding it to a list.

use serde::Deserialize;

use super::list::{MoviePreview, MovieWire};

const NO_TITLE: &str = "Título no disponible";
const NO_DESCRIPTION: &str = "Sin descripción disponible.";
const UNKNOWN: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "MovieWire")]
pub struct MovieDetails {
    pub id: u32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
}

impl From<MovieWire> for MovieDetails {
    fn from(wire: MovieWire) -> Self {
        let non_empty = |s: Option<String>| s.filter(|s| !s.trim().is_empty());
        Self {
            id: wire.id,
            title: non_empty(wire.title.or(wire.titulo)),
            description: non_empty(wire.description.or(wire.descripcion)),
            poster_url: wire.portada_url.or(wire.portada).or(wire.poster_url),
            year: wire.year.or(wire.anio_lanzamiento),
            genre: non_empty(wire.nombre),
        }
    }
}

impl From<&MoviePreview> for MovieDetails {
    fn from(movie: &MoviePreview) -> Self {
        Self {
            id: movie.id,
            title: Some(movie.title.clone()).filter(|t| !t.is_empty()),
            description: None,
            poster_url: movie.poster_url.clone(),
            year: movie.year,
            genre: None,
        }
    }
}

impl MovieDetails {
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or(NO_TITLE)
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }

    pub fn year_text(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn genre_text(&self) -> &str {
        self.genre.as_deref().unwrap_or(UNKNOWN)
    }

    /// The movie as a pending add-to-list choice
    pub fn preview(&self) -> MoviePreview {
        MoviePreview {
            id: self.id,
            title: self.title_text().to_string(),
            poster_url: self.poster_url.clone(),
            year: self.year,
        }
    }
}
