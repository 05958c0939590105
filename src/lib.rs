use std::sync::Arc;

use gmail_sender_app::SendEmailUseCaseImpl;
use gmail_sender_lettre::{LettreEmailAdapter, RelayConfig};

pub mod config;
pub mod logs;

pub type GmailSendUseCase = SendEmailUseCaseImpl<LettreEmailAdapter>;

pub fn build_use_case(relay: RelayConfig) -> GmailSendUseCase {
    SendEmailUseCaseImpl::new(Arc::new(LettreEmailAdapter::new(relay)))
}
