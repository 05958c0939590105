use std::fmt;

use serde::{Deserialize, Serialize};

pub const SEND_SUCCESS_MESSAGE: &str = "Email sent successfully!";

/// A single outbound email, built fresh for every invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct EmailRequest {
    pub sender_address: String,
    /// App-specific password for the sender account.
    pub credential: String,
    pub recipient_address: String,
    pub subject: String,
    /// HTML-formatted body.
    pub body: String,
}

impl EmailRequest {
    pub fn new(
        sender_address: impl Into<String>,
        credential: impl Into<String>,
        recipient_address: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            sender_address: sender_address.into(),
            credential: credential.into(),
            recipient_address: recipient_address.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

// Keeps the credential out of log lines and panic messages.
impl fmt::Debug for EmailRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailRequest")
            .field("sender_address", &self.sender_address)
            .field("credential", &"<redacted>")
            .field("recipient_address", &self.recipient_address)
            .field("subject", &self.subject)
            .field("body_len", &self.body.len())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    pub status: SendStatus,
    pub message: String,
}

impl SendResult {
    pub fn success() -> Self {
        Self {
            status: SendStatus::Success,
            message: SEND_SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: SendStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SendStatus::Success
    }
}

impl<E: std::error::Error> From<Result<(), E>> for SendResult {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => SendResult::success(),
            Err(e) => SendResult::error(e.to_string()),
        }
    }
}
