use gmail_sender::{build_use_case, config::Config, logs::init_logger};
use gmail_sender_app::{SendResult, output, workflow::params};
use log::info;

/// Usage: gmail-sender '<json>'
///
/// Always prints exactly one JSON object and exits with status 0; callers
/// read the `status` field to tell success from failure.
fn main() {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let result = match Config::from_env() {
        Ok(config) => {
            if let Err(e) = init_logger(&config.log) {
                eprintln!("Failed to initialize logger: {}", e);
            }
            info!("Using relay {}:{}", config.relay.host, config.relay.port);
            params::run(&args, &build_use_case(config.relay))
        }
        Err(e) => SendResult::error(format!("Invalid configuration: {}", e)),
    };

    println!("{}", output::render(&result));
}
