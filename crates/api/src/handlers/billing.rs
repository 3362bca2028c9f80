//! Handlers for the `/billing` resource: subscription state, Stripe
//! checkout/portal redirects, and the webhook endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use slettmeg_billing::client::StripeClient;
use slettmeg_billing::event::{parse_event, StripeEvent};
use slettmeg_billing::webhook::verify_signature;
use slettmeg_billing::BillingError;
use slettmeg_core::status::{Plan, SubscriptionStatus};
use slettmeg_db::models::subscription::{ApplySubscriptionChange, Subscription};
use slettmeg_db::repositories::SubscriptionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /billing/checkout`.
#[derive(Debug, Deserialize)]
pub struct CheckoutBody {
    /// `pro` or `business`.
    pub plan: Plan,
}

/// Hosted-page redirect returned by checkout and portal.
#[derive(Debug, Serialize)]
pub struct RedirectResponse {
    pub url: String,
}

/// Webhook acknowledgement body.
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub received: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/billing/subscription
///
/// The user's subscription. Every account has one; a missing row is
/// repaired to the free plan on read.
pub async fn get_subscription(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Subscription>>> {
    let subscription = SubscriptionRepo::ensure_free(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: subscription }))
}

/// POST /api/v1/billing/checkout
///
/// Create a Stripe checkout session for a paid plan and return the
/// hosted payment URL. Creates the Stripe customer on first use.
pub async fn create_checkout(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CheckoutBody>,
) -> AppResult<Json<DataResponse<RedirectResponse>>> {
    let billing = require_billing(&state)?;

    let price_id = match input.plan {
        Plan::Pro => billing.config().price_pro.clone(),
        Plan::Business => billing.config().price_business.clone(),
        Plan::Free => {
            return Err(AppError::BadRequest(
                "The free plan does not require checkout".to_string(),
            ))
        }
    };

    // 1. Every paying user needs a Stripe customer; create one lazily.
    let subscription = SubscriptionRepo::ensure_free(&state.pool, auth_user.user_id).await?;
    let customer_id = match subscription.stripe_customer_id {
        Some(id) => id,
        None => {
            let id = billing
                .create_customer(&auth_user.email, None, auth_user.user_id)
                .await?;
            SubscriptionRepo::set_stripe_customer(&state.pool, auth_user.user_id, &id).await?;
            id
        }
    };

    // 2. Hosted checkout; Stripe redirects back to the app either way.
    let success_url = format!("{}/billing?checkout=success", state.config.app_url);
    let cancel_url = format!("{}/billing?checkout=cancelled", state.config.app_url);
    let url = billing
        .create_checkout_session(
            &customer_id,
            &price_id,
            auth_user.user_id,
            &success_url,
            &cancel_url,
        )
        .await?;

    Ok(Json(DataResponse {
        data: RedirectResponse { url },
    }))
}

/// POST /api/v1/billing/portal
///
/// Create a Stripe billing-portal session. Only meaningful once the
/// user has a Stripe customer, i.e. has been through checkout.
pub async fn create_portal(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<RedirectResponse>>> {
    let billing = require_billing(&state)?;

    let subscription = SubscriptionRepo::find_by_user(&state.pool, auth_user.user_id).await?;
    let customer_id = subscription
        .and_then(|s| s.stripe_customer_id)
        .ok_or_else(|| AppError::NotFound("No billing account exists yet".to_string()))?;

    let return_url = format!("{}/billing", state.config.app_url);
    let url = billing.create_portal_session(&customer_id, &return_url).await?;

    Ok(Json(DataResponse {
        data: RedirectResponse { url },
    }))
}

/// POST /api/v1/billing/webhook
///
/// Stripe webhook endpoint. Verifies the `Stripe-Signature` header
/// against the raw body before parsing, then applies the event to the
/// subscription row keyed by Stripe customer id. Unknown event types are
/// acknowledged without action so Stripe does not retry them.
pub async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<WebhookAck>> {
    let billing = require_billing(&state)?;

    // 1. Signature check on the raw bytes.
    let signature = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Billing(BillingError::InvalidSignature(
            "missing Stripe-Signature header",
        )))?;
    verify_signature(
        &body,
        signature,
        &billing.config().webhook_secret,
        Utc::now().timestamp(),
    )?;

    // 2. Parse and apply.
    let event = parse_event(&body)?;
    apply_event(&state, billing, event).await?;

    Ok(Json(WebhookAck { received: true }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn require_billing(state: &AppState) -> AppResult<&StripeClient> {
    state
        .billing
        .as_deref()
        .ok_or(AppError::ServiceUnavailable("Billing"))
}

/// Apply one webhook event to the subscription table.
async fn apply_event(
    state: &AppState,
    billing: &StripeClient,
    event: StripeEvent,
) -> AppResult<()> {
    match event {
        // Checkout links the customer id to the user when metadata made
        // the round trip; the plan itself arrives on the subscription
        // created/updated event that follows.
        StripeEvent::CheckoutCompleted {
            customer,
            subscription,
            user_id,
        } => {
            if let Some(user_id) = user_id {
                SubscriptionRepo::set_stripe_customer(&state.pool, user_id, &customer).await?;
            }
            tracing::info!(customer, subscription, "checkout completed");
        }
        StripeEvent::SubscriptionChanged {
            customer,
            subscription,
            status,
            price_id,
            current_period_end,
        } => {
            let plan = price_id
                .as_deref()
                .map(|id| billing.config().plan_for_price(id))
                .unwrap_or(Plan::Free);
            let change = ApplySubscriptionChange {
                plan,
                status: SubscriptionStatus::from_stripe(&status),
                stripe_subscription_id: Some(subscription),
                stripe_price_id: price_id,
                current_period_end,
            };
            apply_change(state, &customer, &change).await?;
        }
        StripeEvent::SubscriptionDeleted { customer } => {
            let change = ApplySubscriptionChange {
                plan: Plan::Free,
                status: SubscriptionStatus::Canceled,
                stripe_subscription_id: None,
                stripe_price_id: None,
                current_period_end: None,
            };
            apply_change(state, &customer, &change).await?;
        }
        StripeEvent::PaymentSucceeded { customer } => {
            mark_status(state, &customer, SubscriptionStatus::Active).await?;
        }
        StripeEvent::PaymentFailed { customer } => {
            mark_status(state, &customer, SubscriptionStatus::PastDue).await?;
        }
        StripeEvent::Ignored => {}
    }
    Ok(())
}

async fn apply_change(
    state: &AppState,
    customer: &str,
    change: &ApplySubscriptionChange,
) -> AppResult<()> {
    let updated = SubscriptionRepo::apply_change(&state.pool, customer, change).await?;
    if updated.is_none() {
        // An event for a customer we never issued; log and acknowledge so
        // Stripe stops retrying.
        tracing::warn!(customer, "webhook event for unknown Stripe customer");
    }
    Ok(())
}

/// Update only the status, keeping plan and period fields as they are.
async fn mark_status(
    state: &AppState,
    customer: &str,
    status: SubscriptionStatus,
) -> AppResult<()> {
    let Some(existing) = SubscriptionRepo::find_by_stripe_customer(&state.pool, customer).await?
    else {
        tracing::warn!(customer, "webhook event for unknown Stripe customer");
        return Ok(());
    };
    let change = ApplySubscriptionChange {
        plan: existing.plan,
        status,
        stripe_subscription_id: existing.stripe_subscription_id,
        stripe_price_id: existing.stripe_price_id,
        current_period_end: existing.current_period_end,
    };
    SubscriptionRepo::apply_change(&state.pool, customer, &change).await?;
    Ok(())
}
