//! Repository for the `subscriptions` table.

use slettmeg_core::types::DbId;
use sqlx::PgPool;

use crate::models::subscription::{ApplySubscriptionChange, Subscription};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, plan, status, stripe_customer_id, \
                        stripe_subscription_id, stripe_price_id, current_period_end, \
                        created_at, updated_at";

/// Provides operations on billing subscriptions.
pub struct SubscriptionRepo;

impl SubscriptionRepo {
    /// Ensure the user has a subscription row, creating a free one if not.
    ///
    /// Idempotent; called on every signup.
    pub async fn ensure_free(pool: &PgPool, user_id: DbId) -> Result<Subscription, sqlx::Error> {
        let query = format!(
            "INSERT INTO subscriptions (user_id)
             VALUES ($1)
             ON CONFLICT ON CONSTRAINT uq_subscriptions_user
             DO UPDATE SET user_id = EXCLUDED.user_id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subscription>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a user's subscription.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Subscription>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subscriptions WHERE user_id = $1");
        sqlx::query_as::<_, Subscription>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a subscription by Stripe customer ID (webhook lookups).
    pub async fn find_by_stripe_customer(
        pool: &PgPool,
        customer_id: &str,
    ) -> Result<Option<Subscription>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subscriptions WHERE stripe_customer_id = $1");
        sqlx::query_as::<_, Subscription>(&query)
            .bind(customer_id)
            .fetch_optional(pool)
            .await
    }

    /// Attach a Stripe customer ID to a user's subscription, if not set.
    pub async fn set_stripe_customer(
        pool: &PgPool,
        user_id: DbId,
        customer_id: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE subscriptions SET stripe_customer_id = $2
             WHERE user_id = $1 AND stripe_customer_id IS NULL",
        )
        .bind(user_id)
        .bind(customer_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Apply a webhook-driven change, keyed by Stripe customer ID.
    ///
    /// Returns the updated row, or `None` if no subscription carries that
    /// customer ID.
    pub async fn apply_change(
        pool: &PgPool,
        customer_id: &str,
        change: &ApplySubscriptionChange,
    ) -> Result<Option<Subscription>, sqlx::Error> {
        let query = format!(
            "UPDATE subscriptions SET
                plan = $2,
                status = $3,
                stripe_subscription_id = $4,
                stripe_price_id = $5,
                current_period_end = $6
             WHERE stripe_customer_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subscription>(&query)
            .bind(customer_id)
            .bind(change.plan.as_str())
            .bind(change.status.as_str())
            .bind(&change.stripe_subscription_id)
            .bind(&change.stripe_price_id)
            .bind(change.current_period_end)
            .fetch_optional(pool)
            .await
    }
}
