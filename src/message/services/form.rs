//! Form adoption: the shared machinery behind every form-based kind.
//!
//! Form kinds declare a field set and plug these functions into their
//! descriptor. Adoption keeps every non-empty form entry, including those the
//! field set does not declare, so a decode and re-encode never loses data.

use mockable::Clock;
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace};

use crate::message::adapters::{HeaderMessage, PifoCodec};
use crate::message::domain::{
    Decoded, Field, FieldDef, FieldRole, FormHeader, HandlingOrder, MessageType, ParsedForm,
    TypedMessage, XscSubject,
};
use crate::message::ports::{FormCodec, RawMessage};

static CODEC: LazyLock<PifoCodec> = LazyLock::new(PifoCodec::default);

/// Creates a message with one field per definition, each at its default.
///
/// The message starts with a blank raw message.
#[must_use]
pub fn create_form(
    message_type: Arc<MessageType>,
    defs: Vec<FieldDef>,
    clock: &impl Clock,
) -> TypedMessage {
    TypedMessage::create(message_type, defs, Box::new(HeaderMessage::new()), clock)
}

/// Builds the fields of a message adopted from a parsed form.
///
/// Declared fields start empty. Each form entry sets the field with the same
/// tag; an entry matching no field becomes an unknown field if its value is
/// non-empty and is dropped otherwise.
#[must_use]
pub fn adopt_fields(defs: Vec<FieldDef>, form: &ParsedForm) -> Vec<Field> {
    let mut fields: Vec<Field> = defs.into_iter().map(Field::declared).collect();
    for entry in &form.fields {
        if let Some(field) = fields.iter_mut().find(|field| field.tag() == entry.tag) {
            field.set_value(entry.value.as_str());
            continue;
        }
        if entry.value.is_empty() {
            trace!(tag = %entry.tag, "dropping empty unknown form entry");
            continue;
        }
        debug!(tag = %entry.tag, "keeping unknown form entry");
        fields.push(Field::unknown(entry.tag.as_str(), entry.value.as_str()));
    }
    fields
}

/// Adopts a parsed form as a typed message of the given kind.
///
/// The form header is retained so re-encoding keeps the received versions.
#[must_use]
pub fn adopt_form(
    message_type: Arc<MessageType>,
    defs: Vec<FieldDef>,
    raw: Box<dyn RawMessage>,
    form: &ParsedForm,
) -> TypedMessage {
    let decoded = Decoded::new(adopt_fields(defs, form)).with_form(form.header());
    TypedMessage::recognized(message_type, decoded, raw)
}

/// Parses a raw body as a form, or returns `None` if it is not one.
#[must_use]
pub fn parse_form(body: &str) -> Option<ParsedForm> {
    if !CODEC.is_form(body) {
        return None;
    }
    CODEC
        .parse(body)
        .inspect_err(|error| debug!(%error, "form body did not parse"))
        .ok()
}

/// Recognizer shared by form kinds.
///
/// Declines unless the body is a form whose type matches the kind's form
/// identity; otherwise adopts it with the given field set.
#[must_use]
pub fn recognize_form(
    message_type: &MessageType,
    raw: &dyn RawMessage,
    defs: Vec<FieldDef>,
) -> Option<Decoded> {
    let identity = message_type.form()?;
    let form = parse_form(raw.body())?;
    if form.form_type != identity.html {
        return None;
    }
    Some(Decoded::new(adopt_fields(defs, &form)).with_form(form.header()))
}

/// Encodes the standard subject line of a form message.
///
/// The parts come from the fields playing the matching roles. The form tag
/// is the kind's tag unless a field plays the form tag role. A severity code
/// is written only when a field plays the severity role and is non-empty.
#[must_use]
pub fn encode_form_subject(message: &TypedMessage) -> String {
    let form_tag = message
        .field_by_role(FieldRole::FormTag)
        .map_or_else(|| message.message_type().tag(), Field::value);
    let handling = message.role_value(FieldRole::Handling);
    let severity = message.role_value(FieldRole::Severity);
    XscSubject {
        message_number: message.role_value(FieldRole::OriginMessageNumber).to_owned(),
        severity_code: (!severity.is_empty()).then(|| severity.to_owned()),
        handling_code: handling.to_owned(),
        handling: HandlingOrder::try_from(handling).ok(),
        form_tag: Some(form_tag.to_owned()),
        subject: message.role_value(FieldRole::Subject).to_owned(),
    }
    .encode()
}

/// Encodes the body of a form message.
///
/// Emits one entry per non-empty field in field order; a field cleared to
/// empty is omitted rather than written as an empty entry.
#[must_use]
pub fn encode_form_body(message: &TypedMessage) -> String {
    encode_form_entries(message, |_| true)
}

/// Encodes the body of a form message, keeping only the fields `keep` accepts.
pub(crate) fn encode_form_entries(message: &TypedMessage, keep: impl Fn(&Field) -> bool) -> String {
    let mut form = ParsedForm::new(form_header(message));
    for field in message
        .fields()
        .iter()
        .filter(|field| !field.value().is_empty() && keep(field))
    {
        form.push(field.tag(), field.value());
    }
    CODEC.encode(&form)
}

fn form_header(message: &TypedMessage) -> FormHeader {
    if let Some(header) = message.form_header() {
        return header.clone();
    }
    let (html, version) = message
        .message_type()
        .form()
        .map_or(("", ""), |identity| (identity.html.as_str(), identity.version.as_str()));
    FormHeader::new(html, version, CODEC.default_pifo_version())
}
