use std::str::FromStr;

use gmail_sender_app::{EmailRequest, SendEmailError};
use lettre::{
    Message,
    message::{Mailbox, MultiPart, SinglePart},
};

fn parse_mailbox(field: &'static str, address: &str) -> Result<Mailbox, SendEmailError> {
    Mailbox::from_str(address).map_err(|e| SendEmailError::InvalidAddress {
        field,
        reason: e.to_string(),
    })
}

/// Builds a `multipart/mixed` message whose only part is the HTML body.
/// The envelope is derived from the `From` and `To` headers.
pub fn build_message(request: &EmailRequest) -> Result<Message, SendEmailError> {
    Message::builder()
        .from(parse_mailbox("from", &request.sender_address)?)
        .to(parse_mailbox("to", &request.recipient_address)?)
        .subject(request.subject.as_str())
        .multipart(MultiPart::mixed().singlepart(SinglePart::html(request.body.clone())))
        .map_err(|e| SendEmailError::Build(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> EmailRequest {
        EmailRequest::new("a@x.com", "pw", "b@y.com", "Hi", "<p>hello</p>")
    }

    #[test]
    fn test_build_message_headers_and_parts() {
        let message = build_message(&request()).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains("From: a@x.com"));
        assert!(formatted.contains("To: b@y.com"));
        assert!(formatted.contains("Subject: Hi"));
        assert!(formatted.contains("multipart/mixed"));
        assert!(formatted.contains("text/html"));
        assert!(formatted.contains("<p>hello</p>"));
    }

    #[test]
    fn test_envelope_matches_headers() {
        let message = build_message(&request()).unwrap();
        let envelope = message.envelope();

        assert_eq!(envelope.from().map(|a| a.to_string()), Some("a@x.com".to_string()));
        let to: Vec<String> = envelope.to().iter().map(|a| a.to_string()).collect();
        assert_eq!(to, vec!["b@y.com".to_string()]);
    }

    #[test]
    fn test_invalid_sender() {
        let mut request = request();
        request.sender_address = "invalid-from-email".to_string();

        let err = build_message(&request).unwrap_err();
        assert!(matches!(err, SendEmailError::InvalidAddress { field: "from", .. }));
        assert!(err.to_string().starts_with("Invalid from address: "));
    }

    #[test]
    fn test_missing_recipient() {
        let mut request = request();
        request.recipient_address = String::new();

        let err = build_message(&request).unwrap_err();
        assert!(matches!(err, SendEmailError::InvalidAddress { field: "to", .. }));
    }

    #[test]
    fn test_empty_subject_and_body_allowed() {
        let mut request = request();
        request.subject = String::new();
        request.body = String::new();

        assert!(build_message(&request).is_ok());
    }
}
