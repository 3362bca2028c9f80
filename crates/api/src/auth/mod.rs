//! Authentication building blocks: JWT access tokens and magic links.

pub mod jwt;
pub mod magic_link;
