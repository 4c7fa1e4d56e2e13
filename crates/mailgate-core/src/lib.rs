/// Mailgate Core - shared library for the Mailgate relay service
///
/// Contains the send-request model and its validation rules, the MIME
/// composer, and the SMTP submission service used by the mailgate binary.
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::MailgateError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
