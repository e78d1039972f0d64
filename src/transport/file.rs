//! The file transport writes messages into the directory it was created
//! with, one `<message_id>.eml` file per delivery. Useful for testing, or
//! for keeping a record of everything that was sent.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::address::Envelope;
use crate::transport::authentication::Credentials;
use crate::transport::Transport;

/// Writes the content of the message to a file.
///
/// The relay address and credentials are ignored; this transport never dials
/// a server.
#[derive(Debug, Clone)]
pub struct FileTransport {
    path: PathBuf,
}

impl FileTransport {
    /// Creates a new transport to the given directory.
    pub fn new<P: AsRef<Path>>(path: P) -> FileTransport {
        FileTransport {
            path: PathBuf::from(path.as_ref()),
        }
    }
}

impl Transport for FileTransport {
    type Ok = String;
    type Error = io::Error;

    fn send_raw(
        &self,
        _server: &str,
        _credentials: Option<&Credentials>,
        _envelope: &Envelope,
        email: &[u8],
    ) -> Result<Self::Ok, Self::Error> {
        let message_id = Uuid::new_v4().to_string();
        let file = self.path.join(format!("{}.eml", message_id));

        fs::write(file, email)?;
        Ok(message_id)
    }
}
