//! Thin Stripe REST client.
//!
//! Speaks the form-encoded Stripe API directly; only the three calls the
//! billing flow needs are implemented.

use serde::Deserialize;
use slettmeg_core::types::DbId;

use crate::config::BillingConfig;
use crate::BillingError;

const API_BASE: &str = "https://api.stripe.com/v1";

/// Client for the Stripe REST API.
pub struct StripeClient {
    http: reqwest::Client,
    config: BillingConfig,
}

#[derive(Debug, Deserialize)]
struct StripeObject {
    id: String,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

impl StripeClient {
    pub fn new(config: BillingConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    /// Create a Stripe customer for a user, returning the customer ID.
    pub async fn create_customer(
        &self,
        email: &str,
        name: Option<&str>,
        user_id: DbId,
    ) -> Result<String, BillingError> {
        let user_id = user_id.to_string();
        let mut form: Vec<(&str, &str)> =
            vec![("email", email), ("metadata[user_id]", &user_id)];
        if let Some(name) = name {
            form.push(("name", name));
        }
        let object = self.post("customers", &form).await?;
        Ok(object.id)
    }

    /// Create a subscription checkout session, returning the hosted URL.
    pub async fn create_checkout_session(
        &self,
        customer_id: &str,
        price_id: &str,
        user_id: DbId,
        success_url: &str,
        cancel_url: &str,
    ) -> Result<String, BillingError> {
        let user_id = user_id.to_string();
        let form: Vec<(&str, &str)> = vec![
            ("customer", customer_id),
            ("mode", "subscription"),
            ("payment_method_types[0]", "card"),
            ("line_items[0][price]", price_id),
            ("line_items[0][quantity]", "1"),
            ("success_url", success_url),
            ("cancel_url", cancel_url),
            ("metadata[user_id]", &user_id),
        ];
        let object = self.post("checkout/sessions", &form).await?;
        object.url.ok_or(BillingError::Api {
            status: 200,
            message: "checkout session has no url".to_string(),
        })
    }

    /// Create a billing-portal session, returning the hosted URL.
    pub async fn create_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> Result<String, BillingError> {
        let form: Vec<(&str, &str)> = vec![("customer", customer_id), ("return_url", return_url)];
        let object = self.post("billing_portal/sessions", &form).await?;
        object.url.ok_or(BillingError::Api {
            status: 200,
            message: "portal session has no url".to_string(),
        })
    }

    async fn post(&self, path: &str, form: &[(&str, &str)]) -> Result<StripeObject, BillingError> {
        let response = self
            .http
            .post(format!("{API_BASE}/{path}"))
            .bearer_auth(&self.config.secret_key)
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<StripeErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| "unknown error".to_string());
            tracing::warn!(%status, path, "stripe request rejected");
            return Err(BillingError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<StripeObject>().await?)
    }
}
