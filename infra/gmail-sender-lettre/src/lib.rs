use std::time::Duration;

use gmail_sender_app::{EmailPort, EmailRequest, SendEmailError};
use lettre::transport::smtp::authentication::Credentials;
use log::{debug, info};

use crate::session::SmtpSession;

pub mod message;
pub mod session;

pub const GMAIL_SMTP_HOST: &str = "smtp.gmail.com";
pub const SUBMISSION_PORT: u16 = 587;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    /// `None` leaves socket operations to block until the OS gives up.
    pub timeout: Option<Duration>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: GMAIL_SMTP_HOST.to_string(),
            port: SUBMISSION_PORT,
            timeout: None,
        }
    }
}

/// Sends each request over its own STARTTLS session, authenticating as the
/// request's sender with its app password.
pub struct LettreEmailAdapter {
    relay: RelayConfig,
}

impl LettreEmailAdapter {
    pub fn new(relay: RelayConfig) -> Self {
        Self { relay }
    }
}

fn transport_error(e: lettre::transport::smtp::Error) -> SendEmailError {
    SendEmailError::Transport(e.to_string())
}

impl EmailPort for LettreEmailAdapter {
    fn send_email(&self, request: &EmailRequest) -> Result<(), SendEmailError> {
        let email = message::build_message(request)?;
        let credentials = Credentials::new(
            request.sender_address.clone(),
            request.credential.clone(),
        );

        let mut session = SmtpSession::open(&self.relay.host, self.relay.port, self.relay.timeout)
            .map_err(transport_error)?;
        session.authenticate(&credentials).map_err(transport_error)?;
        debug!("Authenticated as {}", request.sender_address);
        let response = session.send(&email).map_err(transport_error)?;
        session.close();

        info!(
            "Relay {} accepted message: {}",
            self.relay.host,
            response.first_line().unwrap_or_default()
        );
        Ok(())
    }
}
