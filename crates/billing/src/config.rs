//! Billing configuration loaded from the environment.

use slettmeg_core::status::Plan;

use crate::BillingError;

/// Stripe configuration.
///
/// | Variable                | Required | Description                          |
/// |-------------------------|----------|--------------------------------------|
/// | `STRIPE_SECRET_KEY`     | yes      | API secret key (`sk_...`)            |
/// | `STRIPE_WEBHOOK_SECRET` | yes      | Webhook signing secret (`whsec_...`) |
/// | `STRIPE_PRICE_PRO`      | yes      | Price ID for the Pro plan            |
/// | `STRIPE_PRICE_BUSINESS` | yes      | Price ID for the Business plan       |
#[derive(Debug, Clone)]
pub struct BillingConfig {
    pub secret_key: String,
    pub webhook_secret: String,
    pub price_pro: String,
    pub price_business: String,
}

impl BillingConfig {
    /// Load from environment variables. Returns `None` when
    /// `STRIPE_SECRET_KEY` is absent, which disables billing entirely.
    pub fn from_env() -> Result<Option<Self>, BillingError> {
        let secret_key = match std::env::var("STRIPE_SECRET_KEY") {
            Ok(key) => key,
            Err(_) => return Ok(None),
        };
        let webhook_secret = std::env::var("STRIPE_WEBHOOK_SECRET")
            .map_err(|_| BillingError::Unconfigured("STRIPE_WEBHOOK_SECRET"))?;
        let price_pro = std::env::var("STRIPE_PRICE_PRO")
            .map_err(|_| BillingError::Unconfigured("STRIPE_PRICE_PRO"))?;
        let price_business = std::env::var("STRIPE_PRICE_BUSINESS")
            .map_err(|_| BillingError::Unconfigured("STRIPE_PRICE_BUSINESS"))?;
        Ok(Some(Self {
            secret_key,
            webhook_secret,
            price_pro,
            price_business,
        }))
    }

    /// Map a Stripe price ID to a plan; unknown prices fall back to free.
    pub fn plan_for_price(&self, price_id: &str) -> Plan {
        if price_id == self.price_pro {
            Plan::Pro
        } else if price_id == self.price_business {
            Plan::Business
        } else {
            Plan::Free
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BillingConfig {
        BillingConfig {
            secret_key: "sk_test_123".into(),
            webhook_secret: "whsec_123".into(),
            price_pro: "price_pro_123".into(),
            price_business: "price_biz_123".into(),
        }
    }

    #[test]
    fn test_plan_for_price() {
        let cfg = config();
        assert_eq!(cfg.plan_for_price("price_pro_123"), Plan::Pro);
        assert_eq!(cfg.plan_for_price("price_biz_123"), Plan::Business);
        assert_eq!(cfg.plan_for_price("price_unknown"), Plan::Free);
    }
}
