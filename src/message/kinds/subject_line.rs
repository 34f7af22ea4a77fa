//! Fields holding the parts of a standard subject line.
//!
//! Kinds that carry no schema of their own expose the subject line as
//! editable fields and rebuild it from them on encode.

use crate::message::domain::{
    Field, FieldDef, FieldRole, HandlingOrder, TypedMessage, Validator, XscSubject,
};
use crate::message::services::form::encode_form_subject;

/// Origin message number taken from the subject line.
pub const ORIGIN_MESSAGE_NUMBER: &str = "Origin Message Number";
/// Legacy severity code taken from the subject line.
pub const SEVERITY: &str = "Severity Code";
/// Handling order taken from the subject line.
pub const HANDLING: &str = "Handling Order";
/// Form tag taken from the subject line.
pub const FORM_TAG: &str = "Form Tag";
/// Human subject taken from the subject line.
pub const SUBJECT: &str = "Message Subject";

// Subject-line tags contain spaces, which form tags never do.
pub(super) fn subject_defs() -> Vec<FieldDef> {
    vec![
        FieldDef::new(ORIGIN_MESSAGE_NUMBER, "Origin Message Number")
            .required()
            .with_validator(Validator::MessageNumber)
            .with_role(FieldRole::OriginMessageNumber),
        FieldDef::new(SEVERITY, "Severity").with_role(FieldRole::Severity),
        FieldDef::new(HANDLING, "Handling")
            .required()
            .with_validator(Validator::choices(
                HandlingOrder::all().map(|order| order.as_str()),
            ))
            .with_role(FieldRole::Handling),
        FieldDef::new(FORM_TAG, "Form Tag").with_role(FieldRole::FormTag),
        FieldDef::new(SUBJECT, "Subject")
            .required()
            .with_role(FieldRole::Subject),
    ]
}

/// Builds the subject-line fields, filled from `subject` when it parsed.
pub(super) fn subject_fields(subject: Option<&XscSubject>) -> Vec<Field> {
    let Some(parts) = subject else {
        return subject_defs().into_iter().map(Field::declared).collect();
    };
    // Unknown handling codes are kept as written.
    let handling = parts.handling.map_or_else(
        || parts.handling_code.clone(),
        |order| order.as_str().to_owned(),
    );
    let values = [
        parts.message_number.clone(),
        parts.severity_code.clone().unwrap_or_default(),
        handling,
        parts.form_tag.clone().unwrap_or_default(),
        parts.subject.clone(),
    ];
    subject_defs()
        .into_iter()
        .zip(values)
        .map(|(def, value)| {
            let mut field = Field::declared(def);
            field.set_value(value);
            field
        })
        .collect()
}

/// Encodes the subject line from the subject-line fields, or returns
/// `fallback` when the message carries no number or handling order.
pub(super) fn encode_subject_line(message: &TypedMessage, fallback: &str) -> String {
    if message.role_value(FieldRole::OriginMessageNumber).is_empty()
        && message.role_value(FieldRole::Handling).is_empty()
    {
        return fallback.to_owned();
    }
    encode_form_subject(message)
}
