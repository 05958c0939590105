use thiserror::Error;

use crate::domain::request::EmailRequest;

pub trait EmailPort {
    fn send_email(&self, request: &EmailRequest) -> Result<(), SendEmailError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendEmailError {
    #[error("Invalid {field} address: {reason}")]
    InvalidAddress { field: &'static str, reason: String },
    #[error("Failed to build email: {0}")]
    Build(String),
    /// Anything that went wrong on the wire, carried as the transport's own text.
    #[error("{0}")]
    Transport(String),
}
