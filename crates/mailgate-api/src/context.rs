/// API Context - shared state for all API handlers
use std::sync::Arc;

use mailgate_core::services::{EmailRelay, RelayConfig, SmtpRelay};

/// Holds the relay shared by request handlers.
///
/// Credentials are never part of the context; each request supplies its own.
pub struct ApiContext {
    /// Outbound mail-submission relay
    pub relay: Arc<dyn EmailRelay>,
}

impl ApiContext {
    /// Creates a context backed by the SMTP relay described by `config`.
    pub fn new(config: RelayConfig) -> Arc<Self> {
        Arc::new(Self {
            relay: Arc::new(SmtpRelay::new(config)),
        })
    }

    /// Creates a context with a custom relay implementation. Used by tests
    /// to observe submissions without touching the network.
    pub fn with_relay(relay: Arc<dyn EmailRelay>) -> Arc<Self> {
        Arc::new(Self { relay })
    }
}
