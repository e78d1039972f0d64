//! The stub transport keeps the messages it is given in memory instead of
//! delivering them, and answers with a pre-programmed response. It is useful
//! for testing purposes.

use std::{
    error::Error as StdError,
    fmt,
    sync::{Arc, Mutex},
};

use crate::address::Envelope;
use crate::transport::authentication::Credentials;
use crate::transport::Transport;

/// The error returned by a stub configured to fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("stub transport error")
    }
}

impl StdError for Error {}

/// A delivery recorded by a [`StubTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// Relay address the message was dispatched to
    pub server: String,
    /// Credentials handed over for the delivery, if any
    pub credentials: Option<Credentials>,
    /// Sender and recipients of the delivery
    pub envelope: Envelope,
    /// Raw bytes of the composed message
    pub message: Vec<u8>,
}

/// A transport that records messages and returns the given response.
///
/// Every call is recorded, also when the stub is configured to fail, so tests
/// can tell whether the transport was reached at all. Clones share the same
/// recording.
#[derive(Debug, Clone)]
pub struct StubTransport {
    response: Result<(), Error>,
    sent: Arc<Mutex<Vec<SentMessage>>>,
}

impl StubTransport {
    /// Creates a new transport that always answers with `response`.
    pub fn new(response: Result<(), Error>) -> StubTransport {
        StubTransport {
            response,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a new transport that accepts every message.
    pub fn new_ok() -> StubTransport {
        StubTransport::new(Ok(()))
    }

    /// Creates a new transport that rejects every message.
    pub fn new_error() -> StubTransport {
        StubTransport::new(Err(Error))
    }

    /// The deliveries recorded so far, in call order.
    pub fn messages(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for StubTransport {
    type Ok = ();
    type Error = Error;

    fn send_raw(
        &self,
        server: &str,
        credentials: Option<&Credentials>,
        envelope: &Envelope,
        email: &[u8],
    ) -> Result<Self::Ok, Self::Error> {
        self.sent.lock().unwrap().push(SentMessage {
            server: server.to_string(),
            credentials: credentials.cloned(),
            envelope: envelope.clone(),
            message: email.to_vec(),
        });
        self.response
    }
}
