/// Data models for the Mailgate service
pub mod email;

// Re-export commonly used types
pub use email::*;
