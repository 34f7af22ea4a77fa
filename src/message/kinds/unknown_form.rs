//! Fallback kind for forms no other kind recognizes.
//!
//! Any `PackItForms` body is accepted. The subject line parts become fields of
//! their own and every form entry becomes a declared field, so the message
//! can be viewed and edited like any other and re-encoded without loss.
//! Registered after the specific form kinds so that they win.

use crate::message::domain::{
    Article, Decoded, Field, FieldDef, MessageType, TypedMessage, XscSubject,
};
use crate::message::ports::RawMessage;
use crate::message::services::form::{encode_form_entries, parse_form};

use super::subject_line::{encode_subject_line, subject_fields};
pub use super::subject_line::{FORM_TAG, HANDLING, ORIGIN_MESSAGE_NUMBER, SEVERITY, SUBJECT};

/// Tag of the unknown form kind.
pub const TAG: &str = "UNKNOWN";

/// Returns the unknown form descriptor.
///
/// The kind cannot be created from scratch.
#[must_use]
pub fn message_type() -> MessageType {
    MessageType::new(TAG, "unrecognized form message", Article::An)
        .with_recognize(recognize)
        .with_encoders(encode_subject, encode_body)
}

fn recognize(_: &MessageType, raw: &dyn RawMessage) -> Option<Decoded> {
    let form = parse_form(raw.body())?;
    let mut fields = subject_fields(XscSubject::parse(raw.subject()).as_ref());
    fields.extend(form.fields.iter().map(|entry| {
        let mut field = Field::declared(FieldDef::new(entry.tag.as_str(), entry.tag.as_str()));
        field.set_value(entry.value.as_str());
        field
    }));
    Some(Decoded::new(fields).with_form(form.header()))
}

// A subject line that was not in standard form is kept as received.
fn encode_subject(message: &TypedMessage) -> String {
    encode_subject_line(message, message.raw().subject())
}

fn encode_body(message: &TypedMessage) -> String {
    encode_form_entries(message, |field| field.role().is_none())
}
