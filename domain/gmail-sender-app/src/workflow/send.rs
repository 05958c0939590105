use std::sync::Arc;

use log::{error, info};

use crate::{
    domain::request::{EmailRequest, SendResult},
    ports::email::EmailPort,
};

pub trait SendEmailUseCase {
    fn send(&self, request: &EmailRequest) -> SendResult;
}

pub struct SendEmailUseCaseImpl<EP: EmailPort> {
    email_port: Arc<EP>,
}

impl<EP: EmailPort> SendEmailUseCaseImpl<EP> {
    pub fn new(email_port: Arc<EP>) -> Self {
        Self { email_port }
    }
}

impl<EP: EmailPort> SendEmailUseCase for SendEmailUseCaseImpl<EP> {
    fn send(&self, request: &EmailRequest) -> SendResult {
        info!(
            "Sending email from {} to {}",
            request.sender_address, request.recipient_address
        );
        let outcome = self.email_port.send_email(request);
        match &outcome {
            Ok(()) => info!("Email to {} accepted by relay", request.recipient_address),
            Err(e) => error!("Failed to send email to {}: {}", request.recipient_address, e),
        }
        outcome.into()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::request::SendStatus,
        ports::email::{SendEmailError, mock::MockEmailPort},
    };

    use super::*;

    fn request() -> EmailRequest {
        EmailRequest::new("a@x.com", "pw", "b@y.com", "Hi", "<p>hello</p>")
    }

    #[test]
    fn test_send_success() {
        let port = Arc::new(MockEmailPort::default());
        let use_case = SendEmailUseCaseImpl::new(port.clone());

        let result = use_case.send(&request());
        assert_eq!(result.status, SendStatus::Success);
        assert_eq!(result.message, "Email sent successfully!");

        let sent = port.get_requests();
        assert_eq!(sent, vec![request()]);
    }

    #[test]
    fn test_send_auth_failure() {
        let port = Arc::new(MockEmailPort::failing(SendEmailError::Transport(
            "permanent error (535): 5.7.8 Username and Password not accepted".to_string(),
        )));
        let use_case = SendEmailUseCaseImpl::new(port.clone());

        let result = use_case.send(&request());
        assert_eq!(
            result,
            SendResult::error("permanent error (535): 5.7.8 Username and Password not accepted")
        );
        assert_eq!(port.get_requests().len(), 1);
    }

    #[test]
    fn test_repeated_sends_are_not_suppressed() {
        let port = Arc::new(MockEmailPort::default());
        let use_case = SendEmailUseCaseImpl::new(port.clone());

        assert!(use_case.send(&request()).is_success());
        assert!(use_case.send(&request()).is_success());
        assert_eq!(port.get_requests().len(), 2);
    }

    #[test]
    fn test_invalid_address_message() {
        let port = Arc::new(MockEmailPort::failing(SendEmailError::InvalidAddress {
            field: "from",
            reason: "Missing domain or user".to_string(),
        }));
        let use_case = SendEmailUseCaseImpl::new(port);

        let result = use_case.send(&request());
        assert_eq!(result.status, SendStatus::Error);
        assert_eq!(result.message, "Invalid from address: Missing domain or user");
    }
}
