//! Provides authentication credentials for transports that dial a relay.

/// Contains user credentials for the mail server.
///
/// This layer treats the credential as opaque: it is stored on the mailer and
/// handed to the transport with every delivery, which decides the actual
/// authentication mechanism.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Credentials {
    authentication_identity: String,
    secret: String,
}

impl Credentials {
    /// Create a `Credentials` struct from username and password.
    pub fn new(username: String, password: String) -> Credentials {
        Credentials {
            authentication_identity: username,
            secret: password,
        }
    }

    /// The username to authenticate with.
    pub fn username(&self) -> &str {
        &self.authentication_identity
    }

    /// The password to authenticate with.
    pub fn password(&self) -> &str {
        &self.secret
    }
}
