//! Plain text messages with a standard subject line.
//!
//! The subject line parts and the body become fields. Form bodies are left
//! to the form kinds, and a subject line that is not in standard form is
//! left unrecognized.

use crate::message::domain::{
    Article, Decoded, Field, FieldDef, MessageType, TypedMessage, XscSubject,
};
use crate::message::ports::RawMessage;
use crate::message::services::form::parse_form;

use super::subject_line::{encode_subject_line, subject_defs, subject_fields};
pub use super::subject_line::{FORM_TAG, HANDLING, ORIGIN_MESSAGE_NUMBER, SEVERITY, SUBJECT};

/// Tag of the plain text kind.
pub const TAG: &str = "PLAIN";
/// Message body, kept verbatim.
pub const BODY: &str = "Body";

/// Returns the plain text descriptor.
#[must_use]
pub fn message_type() -> MessageType {
    MessageType::new(TAG, "plain text message", Article::A)
        .with_create(fields)
        .with_recognize(recognize)
        .with_encoders(encode_subject, encode_body)
}

/// Returns the plain text field set: the subject line parts, then the body.
#[must_use]
pub fn fields() -> Vec<FieldDef> {
    let mut defs = subject_defs();
    defs.push(body_def());
    defs
}

fn body_def() -> FieldDef {
    FieldDef::new(BODY, "Body").required().multiline()
}

fn recognize(_: &MessageType, raw: &dyn RawMessage) -> Option<Decoded> {
    let subject = XscSubject::parse(raw.subject())?;
    if parse_form(raw.body()).is_some() {
        return None;
    }
    let mut fields = subject_fields(Some(&subject));
    let mut body = Field::declared(body_def());
    body.set_value(raw.body());
    fields.push(body);
    Some(Decoded::new(fields))
}

fn encode_subject(message: &TypedMessage) -> String {
    encode_subject_line(message, message.value(SUBJECT).unwrap_or_default())
}

fn encode_body(message: &TypedMessage) -> String {
    message.value(BODY).unwrap_or_default().to_owned()
}
