use std::{
    error::Error as StdError,
    fmt::{self, Display, Formatter},
};

use handlebars::RenderError;

/// Failure of a [`send`][crate::Mailer::send] call.
///
/// Both variants carry the collaborator's error unchanged: `Render` wraps the
/// template engine error (unknown template name or evaluation failure, the
/// transport is never reached), `Transport` wraps whatever the transport
/// reported. Nothing is retried or recovered at this layer.
#[derive(Debug)]
pub enum Error<E> {
    /// The named template was not found or could not be rendered
    Render(RenderError),
    /// The transport failed to deliver the composed message
    Transport(E),
}

impl<E> Display for Error<E>
where
    E: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Render(error) => write!(f, "render error: {}", error),
            Error::Transport(error) => write!(f, "transport error: {}", error),
        }
    }
}

impl<E> StdError for Error<E>
where
    E: StdError + 'static,
{
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Render(error) => Some(error),
            Error::Transport(error) => Some(error),
        }
    }
}

impl<E> From<RenderError> for Error<E> {
    fn from(error: RenderError) -> Self {
        Error::Render(error)
    }
}
