use std::time::Duration;

use lettre::{
    Message,
    transport::smtp::{
        Error as SmtpError,
        authentication::{Credentials, Mechanism},
        client::{SmtpConnection, TlsParameters},
        extension::ClientId,
        response::Response,
    },
};
use log::{debug, warn};

/// PLAIN first, LOGIN for relays that only offer the older mechanism.
const AUTH_MECHANISMS: &[Mechanism] = &[Mechanism::Plain, Mechanism::Login];

/// An open SMTP connection that is closed on every exit path.
///
/// Dropping the session sends `QUIT`; if that fails the socket is aborted.
/// A connect that fails never yields a session, so there is nothing to
/// release and the connect error reaches the caller untouched.
pub struct SmtpSession {
    connection: SmtpConnection,
}

impl SmtpSession {
    /// Opens a plaintext connection and upgrades it with STARTTLS, validating
    /// the relay certificate against the default trust store.
    pub fn open(host: &str, port: u16, timeout: Option<Duration>) -> Result<Self, SmtpError> {
        let hello_name = ClientId::default();
        debug!("Connecting to {}:{}", host, port);
        let connection = SmtpConnection::connect((host, port), timeout, &hello_name, None, None)?;
        // Wrapped before the upgrade so a failed handshake still gets a QUIT.
        let mut session = Self { connection };

        let tls_parameters = TlsParameters::new(host.to_string())?;
        debug!("Upgrading connection to {} with STARTTLS", host);
        session.connection.starttls(&tls_parameters, &hello_name)?;
        Ok(session)
    }

    pub fn authenticate(&mut self, credentials: &Credentials) -> Result<Response, SmtpError> {
        self.connection.auth(AUTH_MECHANISMS, credentials)
    }

    pub fn send(&mut self, message: &Message) -> Result<Response, SmtpError> {
        self.connection
            .send(message.envelope(), &message.formatted())
    }

    pub fn close(self) {
        drop(self);
    }
}

impl Drop for SmtpSession {
    // Release failures are logged only; they must not mask the send outcome.
    fn drop(&mut self) {
        match self.connection.quit() {
            Ok(_) => debug!("SMTP session closed"),
            Err(e) => {
                warn!("Failed to close SMTP session cleanly: {}", e);
                self.connection.abort();
            }
        }
    }
}
