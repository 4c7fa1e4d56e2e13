//! Shared helpers for the relay endpoint integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, header},
    response::Response,
};
use http_body_util::BodyExt;
use lettre::Message;

use mailgate_api::ApiContext;
use mailgate_core::MailgateError;
use mailgate_core::models::OutboundEmail;
use mailgate_core::services::EmailRelay;

/// One observed relay invocation.
#[derive(Debug, Clone)]
pub struct RecordedEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub envelope_to: Vec<String>,
    pub raw: Vec<u8>,
}

/// Relay stub that records every submission and always succeeds.
#[derive(Default)]
pub struct RecordingRelay {
    sent: Mutex<Vec<RecordedEmail>>,
}

impl RecordingRelay {
    pub fn sent(&self) -> Vec<RecordedEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailRelay for RecordingRelay {
    async fn relay(&self, message: Message, email: &OutboundEmail) -> Result<(), MailgateError> {
        let envelope_to = message
            .envelope()
            .to()
            .iter()
            .map(|addr| addr.to_string())
            .collect();

        self.sent.lock().unwrap().push(RecordedEmail {
            from: email.from.clone(),
            to: email.to.clone(),
            subject: email.subject.clone(),
            envelope_to,
            raw: message.formatted(),
        });

        Ok(())
    }
}

/// Relay stub that rejects every submission with the given description.
pub struct FailingRelay(pub &'static str);

#[async_trait]
impl EmailRelay for FailingRelay {
    async fn relay(&self, _message: Message, _email: &OutboundEmail) -> Result<(), MailgateError> {
        Err(MailgateError::Smtp(self.0.to_string()))
    }
}

/// Router wired to a recording relay, returned alongside it so tests can
/// assert on observed submissions.
pub fn recording_app() -> (Router, Arc<RecordingRelay>) {
    let relay = Arc::new(RecordingRelay::default());
    let app = mailgate_api::app(ApiContext::with_relay(relay.clone()));
    (app, relay)
}

/// Router wired to a relay that rejects every submission.
pub fn failing_app(error: &'static str) -> Router {
    mailgate_api::app(ApiContext::with_relay(Arc::new(FailingRelay(error))))
}

/// A complete valid send payload; tests mutate individual keys.
pub fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "SUBJECT": "Hello",
        "MESSAGE": "plain body",
        "SENDER_EMAIL": "sender@example.com",
        "SENDER_PASSWORD": "app-password",
        "RECEIVER_EMAIL": "recipient@example.com",
        "HTML_MESSAGE": "<p>html body</p>"
    })
}

pub fn post_json(path: &str, payload: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn post_raw(path: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Bytes {
    response
        .into_body()
        .collect()
        .await
        .expect("failed to read response body")
        .to_bytes()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recording_relay_captures_submissions() {
        let relay = RecordingRelay::default();
        let email = OutboundEmail {
            from: "sender@example.com".to_string(),
            to: "recipient@example.com".to_string(),
            subject: "Hello".to_string(),
            text: "plain body".to_string(),
            html: "<p>html body</p>".to_string(),
            password: "app-password".to_string(),
        };
        let message = mailgate_core::email::compose(&email).unwrap();

        relay.relay(message, &email).await.unwrap();

        assert_eq!(relay.sent_count(), 1);
        assert_eq!(relay.sent()[0].envelope_to, vec!["recipient@example.com".to_string()]);
    }
}
