//! Magic-link login helpers.
//!
//! Login is passwordless: the user submits an email address, receives a
//! single-use link, and following it exchanges the embedded token for a
//! JWT session. The pure pieces live here; storage is in the handlers.

/// Normalize an email address for lookup and storage.
///
/// Addresses are case-folded and trimmed so `Kari@Example.no` and
/// `kari@example.no` are the same account.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Build the verification URL embedded in the login email.
pub fn build_verify_url(app_url: &str, token: &str) -> String {
    format!("{app_url}/auth/verify?token={token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Kari@Example.NO "), "kari@example.no");
    }

    #[test]
    fn test_verify_url() {
        assert_eq!(
            build_verify_url("https://slettmeg.no", "abc123"),
            "https://slettmeg.no/auth/verify?token=abc123"
        );
    }
}
