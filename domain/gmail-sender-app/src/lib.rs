pub mod domain;
pub mod output;
pub mod ports;
pub mod workflow;

pub use domain::request::{EmailRequest, SendResult, SendStatus};
pub use ports::email::{EmailPort, SendEmailError};
pub use workflow::{
    params::{ParamsError, parse_params},
    send::{SendEmailUseCase, SendEmailUseCaseImpl},
};
