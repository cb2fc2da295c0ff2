//! Plain-text notification email built from one submission.

use std::sync::LazyLock;

use chrono::DateTime;
use chrono_tz::Tz;
use regex::Regex;

use crate::core::models::{EmailMessage, Submission};

const RULE: &str = "-------------------------";

/// Renders the notification body. `received` is appended as a footer line.
#[must_use]
pub fn format_body(submission: &Submission, received: Option<&str>) -> String {
    let mut body = format!(
        "New message received from:\n\
         {RULE}\n\
         Name: {}\n\
         Email: {}\n\
         Topic: {}\n\
         {RULE}\n\
         Message: {}\n",
        submission.name, submission.email, submission.topic, submission.message
    );

    if let Some(received) = received {
        body.push_str(&format!("\nReceived: {received}\n"));
    }

    body
}

/// Formats an SQS `SentTimestamp` (epoch milliseconds) in the given zone.
#[must_use]
pub fn format_sent_timestamp(raw: &str, timezone: Tz) -> Option<String> {
    let millis = raw.trim().parse::<i64>().ok()?;
    let utc = DateTime::from_timestamp_millis(millis)?;
    Some(
        utc.with_timezone(&timezone)
            .format("%Y-%m-%d %H:%M:%S %Z")
            .to_string(),
    )
}

/// Loose plausibility check, only used to decide whether to set Reply-To.
#[must_use]
pub fn looks_like_email(candidate: &str) -> bool {
    static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[^@\s<>,;]+@[^@\s<>,;]+\.[^@\s<>,;]+$").expect("static regex compile")
    });
    EMAIL_RE.is_match(candidate.trim())
}

#[must_use]
pub fn build_email(
    submission: &Submission,
    recipient: &str,
    subject: &str,
    received: Option<&str>,
) -> EmailMessage {
    let reply_to = looks_like_email(&submission.email).then(|| submission.email.trim().to_string());

    EmailMessage {
        recipient: recipient.to_string(),
        subject: subject.to_string(),
        body: format_body(submission, received),
        reply_to,
    }
}
