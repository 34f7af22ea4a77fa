//! Structured view of a form-encoded message body.

use serde::{Deserialize, Serialize};

/// Header lines of an encoded form, retained so a re-encoded form keeps the
/// version it was received with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormHeader {
    /// Form type, the HTML file name of the form (e.g. `form-ics213.html`).
    pub form_type: String,
    /// Version of the form itself.
    pub form_version: String,
    /// Version of the form encoding.
    pub pifo_version: String,
}

impl FormHeader {
    /// Creates a form header.
    #[must_use]
    pub fn new(
        form_type: impl Into<String>,
        form_version: impl Into<String>,
        pifo_version: impl Into<String>,
    ) -> Self {
        Self {
            form_type: form_type.into(),
            form_version: form_version.into(),
            pifo_version: pifo_version.into(),
        }
    }
}

/// One `tag: [value]` pair of an encoded form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEntry {
    /// Field tag.
    pub tag: String,
    /// Decoded field value.
    pub value: String,
}

impl FormEntry {
    /// Creates a form entry.
    #[must_use]
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

/// A parsed form: its header plus its entries in encoded order.
///
/// # Examples
///
/// ```
/// use typedpacket::message::domain::{FormHeader, ParsedForm};
///
/// let form = ParsedForm::new(FormHeader::new("form-ics213.html", "2.2", "3.9"))
///     .with_entry("10.", "Water main break");
/// assert_eq!(form.get("10."), Some("Water main break"));
/// assert_eq!(form.get("11."), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedForm {
    /// Form type, the HTML file name of the form.
    pub form_type: String,
    /// Version of the form itself.
    pub form_version: String,
    /// Version of the form encoding.
    pub pifo_version: String,
    /// Entries in encoded order.
    pub fields: Vec<FormEntry>,
}

impl ParsedForm {
    /// Creates a form with no entries.
    #[must_use]
    pub fn new(header: FormHeader) -> Self {
        Self {
            form_type: header.form_type,
            form_version: header.form_version,
            pifo_version: header.pifo_version,
            fields: Vec::new(),
        }
    }

    /// Appends an entry.
    #[must_use]
    pub fn with_entry(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(tag, value);
        self
    }

    /// Appends an entry in place.
    pub fn push(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        self.fields.push(FormEntry::new(tag, value));
    }

    /// Returns the value of the first entry with `tag`.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.value.as_str())
    }

    /// Returns a copy of the form header.
    #[must_use]
    pub fn header(&self) -> FormHeader {
        FormHeader::new(
            self.form_type.clone(),
            self.form_version.clone(),
            self.pifo_version.clone(),
        )
    }
}
