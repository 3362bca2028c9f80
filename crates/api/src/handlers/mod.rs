//! HTTP request handlers, grouped by resource.

pub mod auth;
pub mod billing;
pub mod chat;
pub mod letters;
pub mod platforms;
pub mod requests;
pub mod user_platforms;
