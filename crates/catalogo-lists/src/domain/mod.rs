//! Domain Layer
//!
//! Lists, movies, request bodies and the error taxonomy.
//! No I/O happens here.

mod error;
mod list;
mod movie;

pub use error::{detail_from_body, ApiError, ApiResult, AuthError, ListError, ListResult};
pub use list::{ListNameBody, MovieIdBody, MovieList, MoviePreview};
pub use movie::MovieDetails;
