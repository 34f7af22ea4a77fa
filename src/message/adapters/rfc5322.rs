//! In-memory header/body message.
//!
//! Implements just enough RFC 5322 to serve as a [`RawMessage`]: ordered
//! headers with case-insensitive lookup, folded header lines, and an optional
//! mbox `From ` envelope line.

use crate::message::error::RawMessageError;
use crate::message::ports::{RawMessage, Transmission};

/// A parsed header/body message.
///
/// # Examples
///
/// ```
/// use typedpacket::message::adapters::HeaderMessage;
/// use typedpacket::message::ports::RawMessage;
///
/// let message = HeaderMessage::parse("To: a@b, c@d\nSubject: Hello\n\nBody\n")
///     .expect("valid message");
/// assert_eq!(message.subject(), "Hello");
/// assert_eq!(message.transmit().destinations, vec!["a@b", "c@d"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMessage {
    envelope: Option<String>,
    headers: Vec<(String, String)>,
    body: String,
}

impl HeaderMessage {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a header.
    #[must_use]
    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the mbox envelope line (without its trailing newline).
    #[must_use]
    pub fn with_envelope(mut self, envelope: impl Into<String>) -> Self {
        self.envelope = Some(envelope.into());
        self
    }

    /// Returns the mbox envelope line, if any.
    #[must_use]
    pub fn envelope(&self) -> Option<&str> {
        self.envelope.as_deref()
    }

    /// Parses a message from its stored text.
    ///
    /// Headers run until the first blank line; everything after it is the
    /// body, kept verbatim. A message with no blank line has an empty body.
    /// Header values lose the space after the colon but keep trailing
    /// whitespace, so a saved `Subject: DELIVERED: ` reads back unchanged.
    ///
    /// # Errors
    ///
    /// Returns `RawMessageError::Empty` for blank input and
    /// `RawMessageError::MalformedHeader` for a header line without a colon
    /// or a continuation line with nothing to continue.
    pub fn parse(text: &str) -> Result<Self, RawMessageError> {
        if text.trim().is_empty() {
            return Err(RawMessageError::Empty);
        }
        let mut message = Self::default();
        let mut offset = 0;
        for (index, raw_line) in text.split_inclusive('\n').enumerate() {
            offset += raw_line.len();
            let line = raw_line.trim_end_matches(['\n', '\r']);
            let line_number = index + 1;
            if line.is_empty() {
                message.body = text.get(offset..).unwrap_or_default().to_owned();
                return Ok(message);
            }
            if index == 0 && line.starts_with("From ") {
                message.envelope = Some(line.to_owned());
                continue;
            }
            if line.starts_with([' ', '\t']) {
                let (_, value) = message
                    .headers
                    .last_mut()
                    .ok_or_else(|| RawMessageError::malformed_header(line_number, line))?;
                value.push(' ');
                value.push_str(line.trim());
                continue;
            }
            let (key, value) = line
                .split_once(':')
                .ok_or_else(|| RawMessageError::malformed_header(line_number, line))?;
            message
                .headers
                .push((key.trim().to_owned(), value.trim_start().to_owned()));
        }
        Ok(message)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|(name, _)| name.eq_ignore_ascii_case(key))
    }
}

impl RawMessage for HeaderMessage {
    fn get(&self, key: &str) -> Option<&str> {
        self.position(key)
            .and_then(|index| self.headers.get(index))
            .map(|(_, value)| value.as_str())
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(index) = self.position(key) else {
            self.headers.push((key.to_owned(), value.to_owned()));
            return;
        };
        if let Some((_, existing)) = self.headers.get_mut(index) {
            value.clone_into(existing);
        }
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        self.headers
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect()
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn set_body(&mut self, body: &str) {
        body.clone_into(&mut self.body);
    }

    fn save(&self) -> String {
        let mut text = String::new();
        if let Some(envelope) = &self.envelope {
            text.push_str(envelope);
            text.push('\n');
        }
        for (key, value) in &self.headers {
            text.push_str(key);
            text.push_str(": ");
            text.push_str(value);
            text.push('\n');
        }
        text.push('\n');
        text.push_str(&self.body);
        text
    }

    fn transmit(&self) -> Transmission {
        let destinations = self
            .get("To")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .map(str::to_owned)
            .collect();
        Transmission {
            destinations,
            subject: self.subject().to_owned(),
            body: self.body.clone(),
        }
    }
}
