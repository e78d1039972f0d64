//! ### Delivering Messages
//!
//! A [`Transport`] performs the actual delivery of a composed message. The
//! real SMTP client is supplied by the application; this crate only defines
//! the seam it plugs into, plus two implementations that need no network:
//!
//! * The `FileTransport` writes each message into a directory. It can be
//!   used for debugging, or to keep a copy of every sent email.
//! * The `StubTransport` records the messages it is given in memory. It is
//!   useful for testing.

use std::{error::Error as StdError, fmt};

use crate::address::Envelope;
use crate::transport::authentication::Credentials;

pub mod authentication;
#[cfg(feature = "file-transport")]
pub mod file;
pub mod stub;

/// Blocking Transport method for emails
pub trait Transport {
    /// Result types for the transport
    type Ok: fmt::Debug;
    type Error: StdError;

    /// Delivers `email` to the recipients of `envelope`.
    ///
    /// `server` is the relay address configured on the mailer and
    /// `credentials` its optional authentication; transports that do not
    /// dial a relay are free to ignore both.
    fn send_raw(
        &self,
        server: &str,
        credentials: Option<&Credentials>,
        envelope: &Envelope,
        email: &[u8],
    ) -> Result<Self::Ok, Self::Error>;
}
