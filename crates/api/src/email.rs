//! Outbound email via SMTP.
//!
//! [`Mailer`] wraps the `lettre` async SMTP transport and knows the three
//! messages the service sends: magic-link logins, welcome mail, and GDPR
//! letters addressed to platform privacy contacts. Configuration is loaded
//! from environment variables; if `SMTP_HOST` is not set,
//! [`EmailConfig::from_env`] returns `None` and no mailer is constructed.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@slettmeg.local";

/// Configuration for the SMTP mailer.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable        | Required | Default                   |
    /// |-----------------|----------|---------------------------|
    /// | `SMTP_HOST`     | yes      | —                         |
    /// | `SMTP_PORT`     | no       | `587`                     |
    /// | `SMTP_FROM`     | no       | `noreply@slettmeg.local`  |
    /// | `SMTP_USER`     | no       | —                         |
    /// | `SMTP_PASSWORD` | no       | —                         |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// Sends the service's transactional email via SMTP.
pub struct Mailer {
    config: EmailConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl Mailer {
    /// Create a mailer from the given configuration.
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            config,
        })
    }

    /// Send a magic-link login email.
    pub async fn send_magic_link(&self, to: &str, verify_url: &str) -> Result<(), EmailError> {
        let body = format!(
            "Hei!\n\n\
             Klikk på lenken under for å logge inn på SlettMeg:\n\n\
             {verify_url}\n\n\
             Lenken er gyldig i 24 timer og kan bare brukes én gang.\n\
             Hvis du ikke ba om denne e-posten, kan du trygt ignorere den.\n\n\
             Vennlig hilsen\n\
             SlettMeg"
        );
        self.send_plain(to, None, "Logg inn på SlettMeg", body).await?;
        tracing::info!(to, "magic link email sent");
        Ok(())
    }

    /// Send the welcome email after first login.
    pub async fn send_welcome(&self, to: &str, name: Option<&str>) -> Result<(), EmailError> {
        let greeting = match name {
            Some(name) => format!("Velkommen til SlettMeg, {name}!"),
            None => "Velkommen til SlettMeg!".to_string(),
        };
        let body = format!(
            "{greeting}\n\n\
             Vi er glade for å ha deg her. SlettMeg hjelper deg med å ta kontroll \
             over ditt digitale fotavtrykk.\n\n\
             Du kan nå:\n\
             - Søke blant plattformene i katalogen vår\n\
             - Få AI-drevet veiledning for sletting\n\
             - Generere GDPR-forespørsler automatisk\n\
             - Spore fremgangen din\n\n\
             Hvis du har spørsmål, er vi her for å hjelpe!\n\n\
             Vennlig hilsen\n\
             SlettMeg"
        );
        self.send_plain(to, None, "Velkommen til SlettMeg!", body)
            .await?;
        tracing::info!(to, "welcome email sent");
        Ok(())
    }

    /// Send a generated GDPR letter to a platform's privacy contact,
    /// with the requesting user in CC so they have a copy.
    pub async fn send_gdpr_letter(
        &self,
        to: &str,
        cc_user: Option<&str>,
        subject: &str,
        letter: &str,
    ) -> Result<(), EmailError> {
        self.send_plain(to, cc_user, subject, letter.to_string())
            .await?;
        tracing::info!(to, subject, "gdpr letter sent");
        Ok(())
    }

    async fn send_plain(
        &self,
        to: &str,
        cc: Option<&str>,
        subject: &str,
        body: String,
    ) -> Result<(), EmailError> {
        let mut builder = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN);

        if let Some(cc) = cc {
            builder = builder.cc(cc.parse()?);
        }

        let email = builder
            .body(body)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        self.transport.send(email).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_error_display_build() {
        let err = EmailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn email_error_display_address() {
        let addr_err: Result<lettre::Address, _> = "not-an-email".parse();
        let err = EmailError::Address(addr_err.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }
}
