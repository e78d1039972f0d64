/// Simple email envelope representation.
///
/// Groups the sender and recipient addresses handed to the transport with
/// every delivery. Addresses are carried as opaque strings; whether they are
/// well formed is left to the transport and the receiving server.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Envelope {
    /// The envelope recipients' addresses
    forward_path: Vec<String>,
    /// The envelope sender address
    reverse_path: String,
}

impl Envelope {
    /// Creates a new envelope out of a sender and its recipients.
    pub fn new(from: String, to: Vec<String>) -> Envelope {
        Envelope {
            forward_path: to,
            reverse_path: from,
        }
    }

    /// Destination addresses of the envelope.
    pub fn to(&self) -> &[String] {
        &self.forward_path
    }

    /// Source address of the envelope.
    pub fn from(&self) -> &str {
        &self.reverse_path
    }
}
