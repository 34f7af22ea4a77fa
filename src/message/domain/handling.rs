//! Message handling order.

use serde::{Deserialize, Serialize};

/// Handling order of a packet message.
///
/// # Examples
///
/// ```
/// use typedpacket::message::domain::HandlingOrder;
///
/// let order = HandlingOrder::try_from("P").expect("valid code");
/// assert_eq!(order, HandlingOrder::Priority);
/// assert_eq!(order.as_str(), "PRIORITY");
/// assert_eq!(order.code(), "P");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandlingOrder {
    /// Deliver immediately.
    Immediate,
    /// Deliver within the hour.
    Priority,
    /// Deliver in the normal course of business.
    Routine,
}

impl HandlingOrder {
    /// Returns the full name as used in form fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Immediate => "IMMEDIATE",
            Self::Priority => "PRIORITY",
            Self::Routine => "ROUTINE",
        }
    }

    /// Returns the single-letter code used in subject lines.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Immediate => "I",
            Self::Priority => "P",
            Self::Routine => "R",
        }
    }

    /// Returns all handling orders, most urgent first.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Immediate, Self::Priority, Self::Routine]
    }
}

impl std::fmt::Display for HandlingOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an invalid handling order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHandlingOrderError(String);

impl std::fmt::Display for ParseHandlingOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid handling order: '{}'", self.0)
    }
}

impl std::error::Error for ParseHandlingOrderError {}

impl TryFrom<&str> for HandlingOrder {
    type Error = ParseHandlingOrderError;

    /// Accepts either the single-letter code or the full name.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "I" | "IMMEDIATE" => Ok(Self::Immediate),
            "P" | "PRIORITY" => Ok(Self::Priority),
            "R" | "ROUTINE" => Ok(Self::Routine),
            _ => Err(ParseHandlingOrderError(s.to_owned())),
        }
    }
}
