//! Value objects - immutable domain primitives

mod id;

pub use id::{EntityId, EntityIdParseError};
