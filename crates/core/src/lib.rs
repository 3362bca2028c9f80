//! Domain logic for the SlettMeg account-deletion assistant.
//!
//! Everything in this crate is pure computation: GDPR letter generation,
//! the platform catalog and its curated GDPR contacts, checklist step
//! generation, and the deletion-request lifecycle rules. No I/O happens
//! here; the `db` and `api` crates own persistence and HTTP.

pub mod catalog;
pub mod contacts;
pub mod error;
pub mod hashing;
pub mod letter;
pub mod lifecycle;
pub mod status;
pub mod steps;
pub mod tokens;
pub mod types;
