//! Request extractors
//!
//! Type-safe extraction of path parameters, query strings, and
//! validated JSON bodies.

mod path;
mod query;
mod validated;

pub use path::{BookIdPath, ChapterIdPath, UserIdPath};
pub use query::ValidatedQuery;
pub use validated::ValidatedJson;
