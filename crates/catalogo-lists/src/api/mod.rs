//! Lists API Layer
//!
//! Abstract backend interface plus its implementations:
//! - http: the REST backend via reqwest (fetch in the browser)
//! - memory: in-process backend used by tests and offline demos

mod traits;
mod http;
pub mod memory;

pub use traits::ListsApi;
pub use http::HttpListsApi;
pub use memory::MemoryListsApi;
