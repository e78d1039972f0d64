//! Courrier is a small helper for composing and sending templated email
//! messages. It provides:
//!
//! * An order-preserving header block composer
//! * HTML bodies rendered from a shared [`handlebars`] template registry
//! * Pluggable delivery through the [`Transport`] trait
//!
//! The actual SMTP client is supplied by the application: courrier composes
//! the raw message and hands it to whatever [`Transport`] implementation it
//! was built with, together with the relay address, the optional credentials
//! and the envelope.
//!
//! ```rust,no_run
//! # #[cfg(feature = "file-transport")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//!
//! use courrier::transport::authentication::Credentials;
//! use courrier::{FileTransport, Header, Headers, Mailer};
//! use handlebars::Handlebars;
//!
//! let mut templates = Handlebars::new();
//! templates.register_template_string("welcome", "<h1>Hello, {{name}}!</h1>")?;
//!
//! let mailer = Mailer::builder(
//!     Arc::new(templates),
//!     "mail.host.com:587",
//!     "noreply@host.com",
//!     FileTransport::new("./outbox"),
//! )
//! .credentials(Credentials::new("noreply@host.com".into(), "secret".into()))
//! .build();
//!
//! let headers = Headers::new()
//!     .with(Header::new("to", ["reader@example.com"]))
//!     .with(Header::new("subject", ["Welcome"]));
//!
//! mailer.send(
//!     &headers,
//!     "welcome",
//!     &serde_json::json!({ "name": "Reader" }),
//!     &["reader@example.com".to_string()],
//! )?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "file-transport"))]
//! # fn main() {}
//! ```
//!
//! ## Optional features
//!
//! * **file-transport**: Transport that writes messages into a directory

#![doc(html_root_url = "https://docs.rs/courrier/0.1.2")]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces,
    unsafe_code
)]

pub use crate::address::Envelope;
pub use crate::error::Error;
pub use crate::mailer::{Mailer, MailerBuilder};
pub use crate::message::{Header, Headers, MIME_HEADERS};
#[cfg(feature = "file-transport")]
pub use crate::transport::file::FileTransport;
pub use crate::transport::Transport;

mod address;
mod error;
mod mailer;
pub mod message;
pub mod transport;
