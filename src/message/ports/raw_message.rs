//! Raw message port.
//!
//! Defines the interface the typed-message core needs from an already-parsed
//! packet message: named headers, a body, and the two serialized forms.

use serde::{Deserialize, Serialize};

/// What a message looks like when handed to the network.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transmission {
    /// Destination addresses.
    pub destinations: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}

/// Port for a parsed packet message.
///
/// Typed messages own one raw message each and rewrite its subject and body
/// when encoding; every other header is left as the raw message holds it.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - `set` replaces an existing header in place, keeping header order
/// - `save` and `transmit` reflect the current headers and body
pub trait RawMessage: std::fmt::Debug + Send + Sync {
    /// Returns the value of the named header, if present.
    fn get(&self, key: &str) -> Option<&str>;

    /// Sets the named header, adding it if absent.
    fn set(&mut self, key: &str, value: &str);

    /// Returns all headers in order.
    fn headers(&self) -> Vec<(&str, &str)>;

    /// Returns the message body.
    fn body(&self) -> &str;

    /// Replaces the message body.
    fn set_body(&mut self, body: &str);

    /// Returns the subject line, or the empty string if there is none.
    fn subject(&self) -> &str {
        self.get("Subject").unwrap_or_default()
    }

    /// Serializes the message for local storage.
    fn save(&self) -> String;

    /// Produces the message as handed to the network.
    fn transmit(&self) -> Transmission;
}
