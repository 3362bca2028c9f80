//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches, where the entity
//!   supports partial updates

pub mod auth;
pub mod chat;
pub mod platform;
pub mod request;
pub mod step;
pub mod subscription;
pub mod user;
pub mod user_platform;
