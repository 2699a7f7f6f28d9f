//! Integration test support
//!
//! In-memory repository implementations and helpers for exercising the
//! service layer and the full router without a live database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::MemoryStore;
pub use helpers::{get_json, post_json, test_app, test_context};
