use std::sync::Arc;

use slettmeg_assistant::client::AssistantClient;
use slettmeg_billing::client::StripeClient;

use crate::config::ServerConfig;
use crate::email::Mailer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
///
/// The optional services are `None` when their credentials are absent from
/// the environment: the server runs without email, billing, or chat rather
/// than refusing to start. Handlers return 503 for endpoints whose service
/// is disabled.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: slettmeg_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outbound email (magic links, welcome mail, GDPR letters).
    pub mailer: Option<Arc<Mailer>>,
    /// Stripe billing client.
    pub billing: Option<Arc<StripeClient>>,
    /// LLM chat assistant client.
    pub assistant: Option<Arc<AssistantClient>>,
}
