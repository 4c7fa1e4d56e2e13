/// SMTP submission service
use std::time::Duration;

use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::error::MailgateError;
use crate::models::OutboundEmail;

const DEFAULT_HOST: &str = "smtp.zoho.com";
const DEFAULT_PORT: u16 = 465;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the mail-submission server.
///
/// The port is the implicit-TLS submission port: the transport encrypts the
/// connection before any protocol exchange, with no STARTTLS upgrade.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RelayConfig {
    /// Loads settings from `SMTP_HOST`, `SMTP_PORT` and `SMTP_TIMEOUT_SECS`,
    /// falling back to the defaults for any unset variable. A set but
    /// unparsable variable is a configuration error, not a silent default.
    pub fn from_env() -> Result<Self, MailgateError> {
        let host = std::env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("SMTP_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|e| {
                MailgateError::Config(format!("Invalid SMTP_PORT '{}': {}", value, e))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let timeout_secs = match std::env::var("SMTP_TIMEOUT_SECS") {
            Ok(value) => value.parse::<u64>().map_err(|e| {
                MailgateError::Config(format!("Invalid SMTP_TIMEOUT_SECS '{}': {}", value, e))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            host,
            port,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Relays a composed message using the credentials supplied with the request.
///
/// Implementations must not retain the message or the credentials beyond the
/// call.
#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn relay(&self, message: Message, email: &OutboundEmail) -> Result<(), MailgateError>;
}

/// Implicit-TLS SMTP relay.
///
/// A fresh transport is built per call because every request carries its own
/// credentials. The transport is not pooled, so the session serves the single
/// submission and is closed on every exit path.
pub struct SmtpRelay {
    config: RelayConfig,
}

impl SmtpRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EmailRelay for SmtpRelay {
    #[tracing::instrument(
        name = "smtp.relay",
        skip_all,
        fields(host = %self.config.host, port = self.config.port)
    )]
    async fn relay(&self, message: Message, email: &OutboundEmail) -> Result<(), MailgateError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)
            .map_err(|e| MailgateError::Smtp(format!("Failed to configure transport: {}", e)))?
            .port(self.config.port)
            .credentials(Credentials::new(
                email.from.clone(),
                email.password.clone(),
            ))
            .timeout(Some(self.config.timeout))
            .build();

        transport
            .send(message)
            .await
            .map_err(|e| MailgateError::Smtp(e.to_string()))?;

        info!("Message accepted by submission server");
        Ok(())
    }
}
