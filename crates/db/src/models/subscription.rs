//! Billing subscription entity model and DTOs.

use serde::Serialize;
use slettmeg_core::status::{Plan, SubscriptionStatus};
use slettmeg_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A subscription row from the `subscriptions` table. One row per user;
/// every user gets a `free`/`active` row at signup.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subscription {
    pub id: DbId,
    pub user_id: DbId,
    #[sqlx(try_from = "String")]
    pub plan: Plan,
    #[sqlx(try_from = "String")]
    pub status: SubscriptionStatus,
    #[serde(skip_serializing)]
    pub stripe_customer_id: Option<String>,
    #[serde(skip_serializing)]
    pub stripe_subscription_id: Option<String>,
    #[serde(skip_serializing)]
    pub stripe_price_id: Option<String>,
    pub current_period_end: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for applying a webhook-driven subscription change.
#[derive(Debug)]
pub struct ApplySubscriptionChange {
    pub plan: Plan,
    pub status: SubscriptionStatus,
    pub stripe_subscription_id: Option<String>,
    pub stripe_price_id: Option<String>,
    pub current_period_end: Option<Timestamp>,
}
