use serde::Deserialize;
use thiserror::Error;

use crate::{
    domain::request::{EmailRequest, SendResult},
    workflow::send::SendEmailUseCase,
};

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("No parameters provided")]
    Missing,
    #[error("Invalid parameters: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Wire shape of the single JSON argument. Every key is optional: an absent
/// key or a `null` value becomes an empty string and is left for the send
/// step to reject.
#[derive(Deserialize, Default)]
#[serde(default)]
struct JsonParams {
    sender_email: Option<String>,
    app_password: Option<String>,
    receiver_email: Option<String>,
    subject: Option<String>,
    body: Option<String>,
}

impl From<JsonParams> for EmailRequest {
    fn from(params: JsonParams) -> Self {
        EmailRequest::new(
            params.sender_email.unwrap_or_default(),
            params.app_password.unwrap_or_default(),
            params.receiver_email.unwrap_or_default(),
            params.subject.unwrap_or_default(),
            params.body.unwrap_or_default(),
        )
    }
}

/// Reads the request from the arguments following the program name.
/// Only the first argument is looked at.
pub fn parse_params<S: AsRef<str>>(args: &[S]) -> Result<EmailRequest, ParamsError> {
    let raw = args.first().ok_or(ParamsError::Missing)?;
    let params: JsonParams = serde_json::from_str(raw.as_ref())?;
    Ok(params.into())
}

/// One invocation of the JSON variant: parameters in, exactly one result out.
pub fn run<S: AsRef<str>, U: SendEmailUseCase>(args: &[S], use_case: &U) -> SendResult {
    match parse_params(args) {
        Ok(request) => use_case.send(&request),
        Err(e) => {
            log::warn!("Rejected parameters: {}", e);
            SendResult::error(e.to_string())
        }
    }
}
