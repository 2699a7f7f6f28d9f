//! Service layer
//!
//! Business logic built on top of the repository traits.

mod context;
mod error;
mod like;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use like::LikeService;
