//! HTTP REST API interfaces
//!
//! - `middleware`: Authentication middleware (JWT + role guard)
//! - `modules`: Request handlers per resource (dto.rs + handlers.rs)
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::create_api_router;
