//! Standard packet subject lines.
//!
//! A standard subject line reads `{number}_{handling}_{form tag}_{subject}`,
//! with the form tag omitted for plain text messages and an optional legacy
//! severity code before the handling code (`{number}_{severity}/{handling}_…`).

use regex::Regex;
use std::sync::LazyLock;

use super::handling::HandlingOrder;
use super::validator::compile;

static SUBJECT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^([A-Z0-9]+-?[0-9]+[A-Z]?)_(?:([A-Z])/)?([A-Z])_(?:([^_\s]+)_)?([^_\s]+(?:\s.*|$))")
});

/// The parts of a standard subject line.
///
/// # Examples
///
/// ```
/// use typedpacket::message::domain::{HandlingOrder, XscSubject};
///
/// let subject = XscSubject::parse("XND-042P_R_ICS213_Water main break")
///     .expect("standard subject");
/// assert_eq!(subject.message_number, "XND-042P");
/// assert_eq!(subject.handling, Some(HandlingOrder::Routine));
/// assert_eq!(subject.form_tag.as_deref(), Some("ICS213"));
/// assert_eq!(subject.subject, "Water main break");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XscSubject {
    /// Origin message number.
    pub message_number: String,
    /// Legacy severity code, if present.
    pub severity_code: Option<String>,
    /// Handling order code as written.
    pub handling_code: String,
    /// Parsed handling order, if the code is a known one.
    pub handling: Option<HandlingOrder>,
    /// Form tag, absent for plain text messages.
    pub form_tag: Option<String>,
    /// The human subject.
    pub subject: String,
}

impl XscSubject {
    /// Parses a subject line, returning `None` if it is not in standard form.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let captures = SUBJECT_LINE.captures(line)?;
        let group = |index: usize| captures.get(index).map(|m| m.as_str().to_owned());
        let handling_code = group(3).unwrap_or_default();
        Some(Self {
            message_number: group(1).unwrap_or_default(),
            severity_code: group(2),
            handling: HandlingOrder::try_from(handling_code.as_str()).ok(),
            handling_code,
            form_tag: group(4),
            subject: group(5).unwrap_or_default(),
        })
    }

    /// Re-encodes the subject line, keeping any legacy severity code.
    #[must_use]
    pub fn encode(&self) -> String {
        let code = self
            .handling
            .map_or(self.handling_code.as_str(), |handling| handling.code());
        join_subject(
            &self.message_number,
            self.severity_code.as_deref(),
            code,
            self.form_tag.as_deref().unwrap_or_default(),
            &self.subject,
        )
    }
}

/// Encodes a standard subject line.
///
/// An empty `form_tag` produces the plain text form without a tag segment.
///
/// # Examples
///
/// ```
/// use typedpacket::message::domain::{HandlingOrder, encode_subject};
///
/// assert_eq!(
///     encode_subject("XND-042P", Some(HandlingOrder::Immediate), "ICS213", "Fire"),
///     "XND-042P_I_ICS213_Fire",
/// );
/// assert_eq!(
///     encode_subject("XND-042P", Some(HandlingOrder::Routine), "", "Hello"),
///     "XND-042P_R_Hello",
/// );
/// ```
#[must_use]
pub fn encode_subject(
    number: &str,
    handling: Option<HandlingOrder>,
    form_tag: &str,
    subject: &str,
) -> String {
    join_subject(
        number,
        None,
        handling.map_or("", |order| order.code()),
        form_tag,
        subject,
    )
}

fn join_subject(
    number: &str,
    severity: Option<&str>,
    code: &str,
    form_tag: &str,
    subject: &str,
) -> String {
    let handling = severity
        .filter(|level| !level.is_empty())
        .map_or_else(|| code.to_owned(), |level| format!("{level}/{code}"));
    if form_tag.is_empty() {
        format!("{number}_{handling}_{subject}")
    } else {
        format!("{number}_{handling}_{form_tag}_{subject}")
    }
}
