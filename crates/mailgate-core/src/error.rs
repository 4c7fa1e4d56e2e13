/// Error types for the Mailgate service
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailgateError {
    #[error("Invalid email address: {0}")]
    Address(String),

    #[error("Message build error: {0}")]
    Compose(String),

    #[error("SMTP relay error: {0}")]
    Smtp(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
