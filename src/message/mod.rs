/*!

## Header blocks of outgoing messages

*/

use std::fmt::{self, Display, Formatter};

/// MIME headers set on every message.
///
/// Appended after the caller-supplied headers by [`Headers::formatted`]; the
/// trailing empty line terminates the header section, so the rendered body
/// can follow directly.
pub const MIME_HEADERS: &str =
    "MIME-Version: 1.0\r\nContent-type: text/html; charset=\"UTF-8\"\r\n\r\n";

/// A single header entry: a name with its ordered values.
///
/// Names are rendered title cased and the values are joined with a comma
/// separator. Each entry becomes a CRLF terminated line:
///
/// ```rust
/// use courrier::Header;
///
/// let to = Header::new("to", ["test@test.mailu.io", "admin@test.mailu.io"]);
/// assert_eq!(to.to_string(), "To: test@test.mailu.io,admin@test.mailu.io\r\n");
/// ```
///
/// An entry without values renders to nothing at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    name: String,
    values: Vec<String>,
}

impl Header {
    /// Creates a header entry out of a name and any sequence of values.
    pub fn new<N, V>(name: N, values: V) -> Self
    where
        N: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Header {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The header name as supplied, before title casing.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.values.is_empty() {
            return Ok(());
        }
        write!(f, "{}: {}\r\n", title_case(&self.name), self.values.join(","))
    }
}

/// An ordered set of header entries.
///
/// Entries serialize in insertion order. Entries sharing a name are not
/// merged; each keeps its place and produces its own line.
#[derive(Debug, Clone)]
pub struct Headers(Vec<Header>);

impl Headers {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Appends an entry to the set.
    pub fn push(&mut self, header: Header) {
        self.0.push(header);
    }

    /// Chainable form of [`push`][Headers::push].
    pub fn with(mut self, header: Header) -> Self {
        self.push(header);
        self
    }

    /// Serializes the header block as it is sent on the wire.
    ///
    /// Emits one line per entry in insertion order, skipping valueless
    /// entries, then appends [`MIME_HEADERS`]. An empty set therefore
    /// serializes to exactly [`MIME_HEADERS`].
    pub fn formatted(&self) -> Vec<u8> {
        let mut out = self.to_string().into_bytes();
        out.extend_from_slice(MIME_HEADERS.as_bytes());
        out
    }
}

impl Display for Headers {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for header in &self.0 {
            Display::fmt(header, f)?;
        }
        Ok(())
    }
}

// Capitalizes the first letter of every whitespace or hyphen delimited word,
// leaving the rest of each word untouched.
fn title_case(name: &str) -> String {
    let mut cased = String::with_capacity(name.len());
    let mut word_start = true;
    for c in name.chars() {
        if word_start {
            cased.extend(c.to_uppercase());
        } else {
            cased.push(c);
        }
        word_start = c.is_whitespace() || c == '-';
    }
    cased
}

#[cfg(test)]
mod test {
    use super::{Header, Headers, MIME_HEADERS};

    #[test]
    fn empty_set_formats_to_mime_headers_only() {
        assert_eq!(Headers::new().formatted(), MIME_HEADERS.as_bytes());
    }

    #[test]
    fn valueless_entries_are_skipped() {
        let headers = Headers::new()
            .with(Header::new("to", ["foo@bar.com", "hello@world.com"]))
            .with(Header::new("from", ["info@spanac.ro"]))
            .with(Header::new("subject", Vec::<String>::new()));

        let want = format!(
            "To: foo@bar.com,hello@world.com\r\nFrom: info@spanac.ro\r\n{}",
            MIME_HEADERS
        );
        assert_eq!(headers.formatted(), want.as_bytes());
    }

    #[test]
    fn display_skips_valueless_entries_in_place() {
        let headers = Headers::new()
            .with(Header::new("to", ["a@x.com"]))
            .with(Header::new("cc", Vec::<String>::new()))
            .with(Header::new("subject", ["Hi"]));

        assert_eq!(headers.to_string(), "To: a@x.com\r\nSubject: Hi\r\n");
    }

    #[test]
    fn name_casing_is_idempotent() {
        let lower = Header::new("to", ["a@x.com"]);
        let cased = Header::new("To", ["a@x.com"]);

        assert_eq!(lower.to_string(), cased.to_string());
    }

    #[test]
    fn values_join_with_a_bare_comma() {
        let to = Header::new("to", ["a@x.com", "b@x.com"]);

        assert_eq!(to.to_string(), "To: a@x.com,b@x.com\r\n");
    }

    #[test]
    fn hyphenated_names_capitalize_every_word() {
        let header = Header::new("x-mailer", ["courrier 0.1"]);

        assert_eq!(header.to_string(), "X-Mailer: courrier 0.1\r\n");
    }

    #[test]
    fn accessors_return_the_entry_as_supplied() {
        let to = Header::new("to", ["a@x.com", "b@x.com"]);

        assert_eq!(to.name(), "to");
        assert_eq!(to.values(), ["a@x.com", "b@x.com"]);
    }

    #[test]
    fn duplicate_names_emit_independent_lines() {
        let headers = Headers::with_capacity(2)
            .with(Header::new("received", ["by a.example"]))
            .with(Header::new("received", ["by b.example"]));

        assert_eq!(
            headers.to_string(),
            "Received: by a.example\r\nReceived: by b.example\r\n"
        );
    }
}
