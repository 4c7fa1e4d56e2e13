/// Logging utilities for PII redaction
///
/// Request logs must not reveal mailbox identities or message content; these
/// helpers keep enough of the value for debugging (domain, length) while
/// masking the rest. Credentials are never logged at all.
use regex::Regex;
use std::sync::LazyLock;

// Email redaction regex
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap());

const MAX_VISIBLE_CHARS: usize = 3;
const MIN_LENGTH_TO_REDACT: usize = 6;

/// Redacts email addresses from text, preserving the domain for debugging
///
/// # Examples
/// ```
/// use mailgate_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// assert_eq!(
///     redact_email("Contact sender@acme.com for details"),
///     "Contact ***@acme.com for details"
/// );
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            match email.find('@') {
                Some(at_pos) => format!("***{}", &email[at_pos..]),
                None => "***@***".to_string(),
            }
        })
        .to_string()
}

/// Redacts a subject line for logging, keeping a short prefix and the length
///
/// # Examples
/// ```
/// use mailgate_core::utils::logging::redact_subject;
///
/// assert_eq!(redact_subject("Hi"), "Hi");
/// assert_eq!(redact_subject("Confidential Document"), "Con...[21 chars]");
/// ```
pub fn redact_subject(subject: &str) -> String {
    let char_count = subject.chars().count();
    if char_count < MIN_LENGTH_TO_REDACT {
        subject.to_string()
    } else {
        let prefix: String = subject.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}...[{} chars]", prefix, char_count)
    }
}
