//! Stripe billing integration.
//!
//! Talks to the Stripe REST API directly over HTTPS (customers, checkout
//! sessions, billing portal) and verifies + interprets incoming webhook
//! events. Database writes stay in the API layer; this crate only speaks
//! Stripe.

pub mod client;
pub mod config;
pub mod event;
pub mod webhook;

use thiserror::Error;

/// Errors from the billing integration.
#[derive(Debug, Error)]
pub enum BillingError {
    #[error("stripe request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("stripe returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("webhook signature invalid: {0}")]
    InvalidSignature(&'static str),

    #[error("webhook payload invalid: {0}")]
    InvalidPayload(String),

    #[error("billing is not configured: missing {0}")]
    Unconfigured(&'static str),
}
