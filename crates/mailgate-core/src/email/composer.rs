/// Email composer using lettre
use lettre::Message;
use lettre::message::{Mailbox, MultiPart, SinglePart};

use crate::error::MailgateError;
use crate::models::OutboundEmail;

/// Builds the MIME message for a validated request: `From`, `To` and
/// `Subject` headers plus a `multipart/alternative` body carrying the
/// plain-text part first and the HTML part second.
///
/// Pure function. Address parsing is the only failure mode and happens
/// before any connection is opened.
pub fn compose(email: &OutboundEmail) -> Result<Message, MailgateError> {
    let from = to_mailbox(&email.from)?;
    let to = to_mailbox(&email.to)?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(&email.subject)
        .multipart(
            MultiPart::alternative()
                .singlepart(SinglePart::plain(email.text.clone()))
                .singlepart(SinglePart::html(email.html.clone())),
        )
        .map_err(|e| MailgateError::Compose(format!("Failed to build multipart message: {}", e)))
}

fn to_mailbox(addr: &str) -> Result<Mailbox, MailgateError> {
    addr.parse::<Mailbox>()
        .map_err(|e| MailgateError::Address(e.to_string()))
}
