//! The mailer renders named templates behind a fixed header block and hands
//! the composed message to a [`Transport`].

use std::sync::Arc;

use handlebars::Handlebars;
use serde::Serialize;

use crate::address::Envelope;
use crate::error::Error;
use crate::message::Headers;
use crate::transport::authentication::Credentials;
use crate::transport::Transport;

/// Holds a template registry, server and authentication information for
/// efficient reuse.
///
/// A mailer is immutable once built and keeps no per-call state, so a single
/// instance can serve any number of concurrent [`send`][Mailer::send] calls;
/// every call composes into its own buffer and performs its own delivery.
#[allow(missing_debug_implementations)]
#[derive(Clone)]
pub struct Mailer<T> {
    templates: Arc<Handlebars<'static>>,
    server: String,
    from: String,
    credentials: Option<Credentials>,
    debug: bool,
    transport: T,
}

impl<T: Transport> Mailer<T> {
    /// Creates a builder for a reusable mailer.
    ///
    /// `templates` should hold a collection of parsed templates, shared
    /// read-only. `server` is the relay hostname and port handed to the
    /// transport on every delivery. For example:
    ///
    /// ```text
    /// mail.host.com:587
    /// ```
    ///
    /// `from` is used as the envelope sender in every subsequent
    /// [`send`][Mailer::send] invocation. Deliveries go through `transport`;
    /// without [`credentials`][MailerBuilder::credentials] they omit
    /// authentication.
    pub fn builder<S, F>(
        templates: Arc<Handlebars<'static>>,
        server: S,
        from: F,
        transport: T,
    ) -> MailerBuilder<T>
    where
        S: Into<String>,
        F: Into<String>,
    {
        MailerBuilder {
            templates,
            server: server.into(),
            from: from.into(),
            credentials: None,
            debug: false,
            transport,
        }
    }

    /// Renders the headers and the named template with the passed data, and
    /// delivers the result to all the recipients.
    ///
    /// The message is composed in order: the header block (see
    /// [`Headers::formatted`][crate::Headers::formatted]), then the body
    /// rendered from the template registered under `template`. Fails with
    /// [`Error::Render`] when the template is unknown or rendering fails, in
    /// which case the transport is never invoked, and with
    /// [`Error::Transport`] when the transport rejects the delivery. Nothing
    /// is retried.
    pub fn send<D>(
        &self,
        headers: &Headers,
        template: &str,
        data: &D,
        recipients: &[String],
    ) -> Result<(), Error<T::Error>>
    where
        D: Serialize,
    {
        let mut message = headers.formatted();
        self.templates.render_to_write(template, data, &mut message)?;

        if self.debug {
            tracing::debug!(
                "sending message to {:?} via {} from {}\n{}",
                recipients,
                self.server,
                self.from,
                String::from_utf8_lossy(&message)
            );
        }

        let envelope = Envelope::new(self.from.clone(), recipients.to_vec());
        self.transport
            .send_raw(&self.server, self.credentials.as_ref(), &envelope, &message)
            .map_err(Error::Transport)?;
        Ok(())
    }
}

/// Contains mailer configuration
#[allow(missing_debug_implementations)]
#[derive(Clone)]
pub struct MailerBuilder<T> {
    templates: Arc<Handlebars<'static>>,
    server: String,
    from: String,
    credentials: Option<Credentials>,
    debug: bool,
    transport: T,
}

/// Builder for the [`Mailer`]
impl<T: Transport> MailerBuilder<T> {
    /// Set the authentication credentials to use
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Dump every composed message to the logging sink before delivery
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Build the mailer
    pub fn build(self) -> Mailer<T> {
        Mailer {
            templates: self.templates,
            server: self.server,
            from: self.from,
            credentials: self.credentials,
            debug: self.debug,
            transport: self.transport,
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use handlebars::Handlebars;

    use super::Mailer;
    use crate::transport::authentication::Credentials;
    use crate::transport::stub::StubTransport;

    fn templates() -> Arc<Handlebars<'static>> {
        Arc::new(Handlebars::new())
    }

    #[test]
    fn builder_assembles_the_configuration() {
        let mailer = Mailer::builder(
            templates(),
            "smtp.example.com:578",
            "test@example.com",
            StubTransport::new_ok(),
        )
        .credentials(Credentials::new(
            "test@example.com".to_string(),
            "letmein".to_string(),
        ))
        .debug(true)
        .build();

        assert_eq!(mailer.server, "smtp.example.com:578");
        assert_eq!(mailer.from, "test@example.com");
        assert_eq!(
            mailer.credentials,
            Some(Credentials::new(
                "test@example.com".to_string(),
                "letmein".to_string(),
            ))
        );
        assert!(mailer.debug);
    }

    #[test]
    fn builder_defaults_to_anonymous_quiet_mailers() {
        let mailer = Mailer::builder(
            templates(),
            "smtp.example.com:578",
            "test@example.com",
            StubTransport::new_ok(),
        )
        .build();

        assert_eq!(mailer.credentials, None);
        assert!(!mailer.debug);
    }
}
