/// Send-request model and validation
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Message recorded for every absent or empty required field.
pub const EMPTY_FIELD_MESSAGE: &str = "This field cannot be empty.";

/// Per-field validation errors, keyed by the wire-format field name.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Raw send request as supplied by the caller.
///
/// Every field deserializes as optional so that a missing key becomes an
/// absent value instead of a parse failure; presence and non-emptiness are
/// checked by [`EmailRequest::validate`]. Unknown keys are ignored.
#[derive(Clone, Deserialize)]
pub struct EmailRequest {
    #[serde(rename = "SUBJECT")]
    pub subject: Option<String>,
    #[serde(rename = "MESSAGE")]
    pub message: Option<String>,
    #[serde(rename = "SENDER_EMAIL")]
    pub sender_email: Option<String>,
    #[serde(rename = "SENDER_PASSWORD")]
    pub sender_password: Option<String>,
    #[serde(rename = "RECEIVER_EMAIL")]
    pub receiver_email: Option<String>,
    #[serde(rename = "HTML_MESSAGE")]
    pub html_message: Option<String>,
}

impl EmailRequest {
    /// Checks that all six required fields are present and non-empty,
    /// consuming the request into a relay-ready [`OutboundEmail`].
    ///
    /// Returns the full set of offending fields on failure, never just the
    /// first one. Whitespace-only values count as present.
    pub fn validate(self) -> Result<OutboundEmail, FieldErrors> {
        let mut errors = FieldErrors::new();

        let subject = required("SUBJECT", self.subject, &mut errors);
        let text = required("MESSAGE", self.message, &mut errors);
        let from = required("SENDER_EMAIL", self.sender_email, &mut errors);
        let password = required("SENDER_PASSWORD", self.sender_password, &mut errors);
        let to = required("RECEIVER_EMAIL", self.receiver_email, &mut errors);
        let html = required("HTML_MESSAGE", self.html_message, &mut errors);

        if errors.is_empty() {
            Ok(OutboundEmail {
                from,
                to,
                subject,
                text,
                html,
                password,
            })
        } else {
            Err(errors)
        }
    }
}

fn required(field: &'static str, value: Option<String>, errors: &mut FieldErrors) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            errors.insert(field, EMPTY_FIELD_MESSAGE);
            String::new()
        }
    }
}

// Credentials must never reach logs, so Debug is written by hand.
impl fmt::Debug for EmailRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailRequest")
            .field("subject", &self.subject)
            .field("message", &self.message)
            .field("sender_email", &self.sender_email)
            .field(
                "sender_password",
                &self.sender_password.as_ref().map(|_| "<redacted>"),
            )
            .field("receiver_email", &self.receiver_email)
            .field("html_message", &self.html_message)
            .finish()
    }
}

/// A validated request, ready for composition and relay.
///
/// `from` doubles as the submission username; `password` is the matching
/// credential and is excluded from `Debug` output.
#[derive(Clone)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
    pub password: String,
}

impl fmt::Debug for OutboundEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutboundEmail")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("subject", &self.subject)
            .field("text", &format_args!("[{} bytes]", self.text.len()))
            .field("html", &format_args!("[{} bytes]", self.html.len()))
            .field("password", &"<redacted>")
            .finish()
    }
}
