//! Shape shared by delivery and read receipts.
//!
//! A receipt is recognized only when its subject carries the flavor's prefix
//! and its body matches the flavor's template. Text following the template
//! is kept as extra text rather than rejected.

use regex::Regex;
use std::sync::LazyLock;

use crate::message::domain::{Field, FieldDef, TypedMessage};
use crate::message::ports::RawMessage;

/// Tag of the extra text field carried by both receipt kinds.
pub const EXTRA_TEXT: &str = "ExtraText";

/// One receipt micro-format.
#[derive(Debug)]
pub(crate) struct ReceiptFlavor {
    /// Subject prefix, matched case-sensitively.
    pub(crate) prefix: &'static str,
    /// Body template; capture groups hold the decoded values.
    pub(crate) body: &'static LazyLock<Regex>,
}

/// A raw message that matched a receipt flavor.
#[derive(Debug)]
pub(crate) struct ReceiptMatch<'a> {
    /// Subject with the prefix removed.
    pub(crate) subject: &'a str,
    /// Capture groups of the body template, in order.
    pub(crate) groups: Vec<&'a str>,
    /// Trimmed text following the template.
    pub(crate) extra_text: &'a str,
}

impl ReceiptFlavor {
    /// Matches a raw message against the flavor.
    ///
    /// Both the prefix and the body template must match.
    pub(crate) fn decode<'a>(&self, raw: &'a dyn RawMessage) -> Option<ReceiptMatch<'a>> {
        let subject = self.strip_prefix(raw.subject())?;
        let body = raw.body();
        let captures = self.body.captures(body)?;
        let end = captures.get(0)?.end();
        let groups = captures
            .iter()
            .skip(1)
            .map(|group| group.map_or("", |m| m.as_str()))
            .collect();
        Some(ReceiptMatch {
            subject,
            groups,
            extra_text: body.get(end..).unwrap_or_default().trim(),
        })
    }

    // A header layer that trims values turns "DELIVERED: " into "DELIVERED:".
    fn strip_prefix<'a>(&self, subject: &'a str) -> Option<&'a str> {
        if let Some(rest) = subject.strip_prefix(self.prefix) {
            return Some(rest);
        }
        (subject == self.prefix.trim_end()).then_some("")
    }

    /// Encodes the subject line from the field holding the receipted subject.
    pub(crate) fn encode_subject(&self, message: &TypedMessage, subject_tag: &str) -> String {
        format!(
            "{}{}",
            self.prefix,
            message.value(subject_tag).unwrap_or_default()
        )
    }
}

/// Builds declared fields from `defs`, filling in the decoded values.
pub(crate) fn fill(defs: Vec<FieldDef>, values: &[(&str, &str)]) -> Vec<Field> {
    defs.into_iter()
        .map(|def| {
            let mut field = Field::declared(def);
            if let Some((_, value)) = values.iter().find(|(tag, _)| *tag == field.tag()) {
                field.set_value(*value);
            }
            field
        })
        .collect()
}

/// Appends extra text to an encoded body, separated by a blank line.
pub(crate) fn append_extra_text(body: &mut String, message: &TypedMessage) {
    let extra = message.value(EXTRA_TEXT).unwrap_or_default();
    if extra.is_empty() {
        return;
    }
    body.push('\n');
    body.push_str(extra);
    if !extra.ends_with('\n') {
        body.push('\n');
    }
}
