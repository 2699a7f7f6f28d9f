//! # story-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{LikeService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
