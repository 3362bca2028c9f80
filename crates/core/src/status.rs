//! Canonical status and type enums for requests, platforms, and billing.
//!
//! There is exactly one spelling for each value: lower-case snake_case,
//! used in JSON, in the database, and in logs. `as_str`/`TryFrom<String>`
//! convert at the storage boundary; serde converts at the HTTP boundary.

use serde::{Deserialize, Serialize};

/// The kind of deletion request a user opens against a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    AccountDeletion,
    DataExport,
    GdprRequest,
    PartialDeletion,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::AccountDeletion => "account_deletion",
            RequestType::DataExport => "data_export",
            RequestType::GdprRequest => "gdpr_request",
            RequestType::PartialDeletion => "partial_deletion",
        }
    }
}

impl TryFrom<String> for RequestType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "account_deletion" => Ok(RequestType::AccountDeletion),
            "data_export" => Ok(RequestType::DataExport),
            "gdpr_request" => Ok(RequestType::GdprRequest),
            "partial_deletion" => Ok(RequestType::PartialDeletion),
            other => Err(format!("unknown request type '{other}'")),
        }
    }
}

/// Lifecycle status of a deletion request.
///
/// `pending → in_progress → completed`, with `submitted` once a letter has
/// gone out, `action_required` as a side branch, and `rejected` terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Submitted,
    InProgress,
    Completed,
    Rejected,
    ActionRequired,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Submitted => "submitted",
            RequestStatus::InProgress => "in_progress",
            RequestStatus::Completed => "completed",
            RequestStatus::Rejected => "rejected",
            RequestStatus::ActionRequired => "action_required",
        }
    }
}

impl TryFrom<String> for RequestStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "submitted" => Ok(RequestStatus::Submitted),
            "in_progress" => Ok(RequestStatus::InProgress),
            "completed" => Ok(RequestStatus::Completed),
            "rejected" => Ok(RequestStatus::Rejected),
            "action_required" => Ok(RequestStatus::ActionRequired),
            other => Err(format!("unknown request status '{other}'")),
        }
    }
}

/// Per-user cached status of a platform, derived from its deletion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformStatus {
    NotStarted,
    InProgress,
    Completed,
    ActionRequired,
}

impl PlatformStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformStatus::NotStarted => "not_started",
            PlatformStatus::InProgress => "in_progress",
            PlatformStatus::Completed => "completed",
            PlatformStatus::ActionRequired => "action_required",
        }
    }
}

impl TryFrom<String> for PlatformStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "not_started" => Ok(PlatformStatus::NotStarted),
            "in_progress" => Ok(PlatformStatus::InProgress),
            "completed" => Ok(PlatformStatus::Completed),
            "action_required" => Ok(PlatformStatus::ActionRequired),
            other => Err(format!("unknown platform status '{other}'")),
        }
    }
}

/// How hard it is to delete an account on a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

/// Billing plan tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Free,
    Pro,
    Business,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
            Plan::Business => "business",
        }
    }
}

impl TryFrom<String> for Plan {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "free" => Ok(Plan::Free),
            "pro" => Ok(Plan::Pro),
            "business" => Ok(Plan::Business),
            other => Err(format!("unknown plan '{other}'")),
        }
    }
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

impl TryFrom<String> for ChatRole {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            other => Err(format!("unknown chat role '{other}'")),
        }
    }
}

/// Billing subscription status, mapped from the payment provider's states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    PastDue,
    Canceled,
    Unpaid,
    Inactive,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Canceled => "canceled",
            SubscriptionStatus::Unpaid => "unpaid",
            SubscriptionStatus::Inactive => "inactive",
        }
    }

    /// Map a Stripe subscription status string to our taxonomy.
    ///
    /// Anything we do not track explicitly (`trialing`, `paused`, ...)
    /// collapses to `inactive`; those states all mean "not billable".
    pub fn from_stripe(status: &str) -> Self {
        match status {
            "active" => SubscriptionStatus::Active,
            "past_due" => SubscriptionStatus::PastDue,
            "canceled" => SubscriptionStatus::Canceled,
            "unpaid" => SubscriptionStatus::Unpaid,
            _ => SubscriptionStatus::Inactive,
        }
    }
}

impl TryFrom<String> for SubscriptionStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "active" => Ok(SubscriptionStatus::Active),
            "past_due" => Ok(SubscriptionStatus::PastDue),
            "canceled" => Ok(SubscriptionStatus::Canceled),
            "unpaid" => Ok(SubscriptionStatus::Unpaid),
            "inactive" => Ok(SubscriptionStatus::Inactive),
            other => Err(format!("unknown subscription status '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_status_round_trips() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Submitted,
            RequestStatus::InProgress,
            RequestStatus::Completed,
            RequestStatus::Rejected,
            RequestStatus::ActionRequired,
        ] {
            let parsed = RequestStatus::try_from(status.as_str().to_string())
                .expect("canonical spelling must parse");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_upper_case_spellings_rejected() {
        // Upper-case spellings are not an accepted alias.
        assert!(RequestStatus::try_from("COMPLETED".to_string()).is_err());
        assert!(RequestType::try_from("ACCOUNT_DELETION".to_string()).is_err());
        assert!(PlatformStatus::try_from("NOT_STARTED".to_string()).is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&RequestStatus::ActionRequired).unwrap();
        assert_eq!(json, "\"action_required\"");

        let back: RequestType = serde_json::from_str("\"data_export\"").unwrap();
        assert_eq!(back, RequestType::DataExport);
    }

    #[test]
    fn test_stripe_status_mapping() {
        assert_eq!(
            SubscriptionStatus::from_stripe("active"),
            SubscriptionStatus::Active
        );
        assert_eq!(
            SubscriptionStatus::from_stripe("past_due"),
            SubscriptionStatus::PastDue
        );
        assert_eq!(
            SubscriptionStatus::from_stripe("trialing"),
            SubscriptionStatus::Inactive
        );
    }
}
