//! Parsing of incoming Stripe webhook events.
//!
//! Maps the raw JSON envelope into the handful of events the billing
//! flow cares about; everything else parses to [`StripeEvent::Ignored`]
//! so new event types never break the endpoint.

use serde::Deserialize;
use slettmeg_core::types::{DbId, Timestamp};

use crate::BillingError;

/// A webhook event reduced to the fields the billing flow acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripeEvent {
    /// `checkout.session.completed` with a subscription attached.
    CheckoutCompleted {
        customer: String,
        subscription: String,
        user_id: Option<DbId>,
    },
    /// `customer.subscription.created` / `customer.subscription.updated`.
    SubscriptionChanged {
        customer: String,
        subscription: String,
        status: String,
        price_id: Option<String>,
        current_period_end: Option<Timestamp>,
    },
    /// `customer.subscription.deleted`.
    SubscriptionDeleted { customer: String },
    /// `invoice.payment_succeeded` for a subscription invoice.
    PaymentSucceeded { customer: String },
    /// `invoice.payment_failed` for a subscription invoice.
    PaymentFailed { customer: String },
    /// Any event type (or shape) the billing flow does not act on.
    Ignored,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    event_type: String,
    data: EnvelopeData,
}

#[derive(Deserialize)]
struct EnvelopeData {
    object: serde_json::Value,
}

#[derive(Deserialize)]
struct CheckoutSession {
    customer: Option<String>,
    subscription: Option<String>,
    #[serde(default)]
    metadata: Metadata,
}

#[derive(Deserialize, Default)]
struct Metadata {
    user_id: Option<String>,
}

#[derive(Deserialize)]
struct SubscriptionObject {
    id: String,
    customer: String,
    status: String,
    current_period_end: Option<i64>,
    #[serde(default)]
    items: SubscriptionItems,
}

#[derive(Deserialize, Default)]
struct SubscriptionItems {
    #[serde(default)]
    data: Vec<SubscriptionItem>,
}

#[derive(Deserialize)]
struct SubscriptionItem {
    price: Price,
}

#[derive(Deserialize)]
struct Price {
    id: String,
}

#[derive(Deserialize)]
struct Invoice {
    customer: Option<String>,
    subscription: Option<String>,
}

/// Parse a raw webhook body into a [`StripeEvent`].
pub fn parse_event(payload: &[u8]) -> Result<StripeEvent, BillingError> {
    let envelope: Envelope = serde_json::from_slice(payload)
        .map_err(|e| BillingError::InvalidPayload(e.to_string()))?;

    let event = match envelope.event_type.as_str() {
        "checkout.session.completed" => {
            let session: CheckoutSession = from_object(envelope.data.object)?;
            match (session.customer, session.subscription) {
                (Some(customer), Some(subscription)) => StripeEvent::CheckoutCompleted {
                    customer,
                    subscription,
                    user_id: session.metadata.user_id.and_then(|id| id.parse().ok()),
                },
                // One-off payments carry no subscription; nothing to do.
                _ => StripeEvent::Ignored,
            }
        }
        "customer.subscription.created" | "customer.subscription.updated" => {
            let sub: SubscriptionObject = from_object(envelope.data.object)?;
            StripeEvent::SubscriptionChanged {
                customer: sub.customer,
                subscription: sub.id,
                status: sub.status,
                price_id: sub.items.data.first().map(|item| item.price.id.clone()),
                current_period_end: sub
                    .current_period_end
                    .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0)),
            }
        }
        "customer.subscription.deleted" => {
            let sub: SubscriptionObject = from_object(envelope.data.object)?;
            StripeEvent::SubscriptionDeleted {
                customer: sub.customer,
            }
        }
        "invoice.payment_succeeded" => match invoice_customer(envelope.data.object)? {
            Some(customer) => StripeEvent::PaymentSucceeded { customer },
            None => StripeEvent::Ignored,
        },
        "invoice.payment_failed" => match invoice_customer(envelope.data.object)? {
            Some(customer) => StripeEvent::PaymentFailed { customer },
            None => StripeEvent::Ignored,
        },
        _ => StripeEvent::Ignored,
    };
    Ok(event)
}

fn from_object<T: serde::de::DeserializeOwned>(
    object: serde_json::Value,
) -> Result<T, BillingError> {
    serde_json::from_value(object).map_err(|e| BillingError::InvalidPayload(e.to_string()))
}

/// Customer of a subscription invoice; `None` for non-subscription invoices.
fn invoice_customer(object: serde_json::Value) -> Result<Option<String>, BillingError> {
    let invoice: Invoice = from_object(object)?;
    Ok(match (invoice.customer, invoice.subscription) {
        (Some(customer), Some(_)) => Some(customer),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_completed_parsed() {
        let payload = serde_json::json!({
            "type": "checkout.session.completed",
            "data": { "object": {
                "customer": "cus_123",
                "subscription": "sub_456",
                "metadata": { "user_id": "42" }
            }}
        });
        let event = parse_event(payload.to_string().as_bytes()).unwrap();
        assert_eq!(
            event,
            StripeEvent::CheckoutCompleted {
                customer: "cus_123".into(),
                subscription: "sub_456".into(),
                user_id: Some(42),
            }
        );
    }

    #[test]
    fn test_checkout_without_subscription_ignored() {
        let payload = serde_json::json!({
            "type": "checkout.session.completed",
            "data": { "object": { "customer": "cus_123" } }
        });
        let event = parse_event(payload.to_string().as_bytes()).unwrap();
        assert_eq!(event, StripeEvent::Ignored);
    }

    #[test]
    fn test_subscription_updated_parsed() {
        let payload = serde_json::json!({
            "type": "customer.subscription.updated",
            "data": { "object": {
                "id": "sub_456",
                "customer": "cus_123",
                "status": "past_due",
                "current_period_end": 1_700_000_000,
                "items": { "data": [ { "price": { "id": "price_pro_123" } } ] }
            }}
        });
        let event = parse_event(payload.to_string().as_bytes()).unwrap();
        match event {
            StripeEvent::SubscriptionChanged {
                customer,
                status,
                price_id,
                current_period_end,
                ..
            } => {
                assert_eq!(customer, "cus_123");
                assert_eq!(status, "past_due");
                assert_eq!(price_id.as_deref(), Some("price_pro_123"));
                assert!(current_period_end.is_some());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_non_subscription_invoice_ignored() {
        let payload = serde_json::json!({
            "type": "invoice.payment_failed",
            "data": { "object": { "customer": "cus_123" } }
        });
        let event = parse_event(payload.to_string().as_bytes()).unwrap();
        assert_eq!(event, StripeEvent::Ignored);
    }

    #[test]
    fn test_unknown_event_type_ignored() {
        let payload = serde_json::json!({
            "type": "charge.refunded",
            "data": { "object": {} }
        });
        let event = parse_event(payload.to_string().as_bytes()).unwrap();
        assert_eq!(event, StripeEvent::Ignored);
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(parse_event(b"not json").is_err());
    }
}
