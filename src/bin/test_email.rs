//! Sends one fixed test message to check that the relay accepts the configured
//! sender and app password.
//!
//! Credentials come from the environment (or a `.env` file):
//! `GMAIL_SENDER_EMAIL`, `GMAIL_APP_PASSWORD` and optionally
//! `GMAIL_RECEIVER_EMAIL`, which defaults to the sender.

use gmail_sender::{build_use_case, config::Config, logs::init_logger};
use gmail_sender_app::{EmailRequest, SendEmailUseCase};

const SENDER_VAR: &str = "GMAIL_SENDER_EMAIL";
const PASSWORD_VAR: &str = "GMAIL_APP_PASSWORD";
const RECEIVER_VAR: &str = "GMAIL_RECEIVER_EMAIL";

const TEST_SUBJECT: &str = "Test Email from Docker Container";
const TEST_BODY: &str =
    "<h1>Test Email</h1><p>This is a test email from the Docker container.</p>";

fn test_request<F>(lookup: F) -> Result<EmailRequest, String>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| {
        lookup(key)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| format!("{} env var not set", key))
    };
    let sender = var(SENDER_VAR)?;
    let password = var(PASSWORD_VAR)?;
    let receiver = var(RECEIVER_VAR).unwrap_or_else(|_| sender.clone());
    Ok(EmailRequest::new(
        sender,
        password,
        receiver,
        TEST_SUBJECT,
        TEST_BODY,
    ))
}

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    if let Err(e) = init_logger(&config.log) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let request = match test_request(|key| std::env::var(key).ok()) {
        Ok(request) => request,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };

    println!("Using sender: {}", request.sender_address);
    println!("Password length: {}", request.credential.chars().count());

    let result = build_use_case(config.relay).send(&request);
    if result.is_success() {
        println!("{}", result.message);
    } else {
        println!("Error: {}", result.message);
    }
}
