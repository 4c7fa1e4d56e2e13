/// Relay services
pub mod smtp;

// Re-export service types
pub use smtp::{EmailRelay, RelayConfig, SmtpRelay};
