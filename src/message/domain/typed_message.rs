//! Typed messages: a raw message interpreted as one registered kind.

use mockable::Clock;
use std::sync::Arc;

use super::field::{Field, FieldDef, FieldRole};
use super::form::FormHeader;
use super::message_type::{Decoded, MessageType};
use crate::message::error::FieldProblem;
use crate::message::ports::{RawMessage, Transmission};

/// A raw message plus the fields of its kind.
///
/// A typed message exclusively owns its fields and its raw message. Encoding
/// rewrites the raw subject and body in place; every other header survives
/// untouched.
#[derive(Debug)]
pub struct TypedMessage {
    message_type: Arc<MessageType>,
    fields: Vec<Field>,
    form: Option<FormHeader>,
    raw: Box<dyn RawMessage>,
}

impl TypedMessage {
    /// Creates a message with every field at its default value.
    #[must_use]
    pub fn create(
        message_type: Arc<MessageType>,
        defs: Vec<FieldDef>,
        raw: Box<dyn RawMessage>,
        clock: &impl Clock,
    ) -> Self {
        let fields = defs
            .into_iter()
            .map(|def| Field::with_default(def, clock))
            .collect();
        Self {
            message_type,
            fields,
            form: None,
            raw,
        }
    }

    /// Wraps a raw message that a recognizer has decoded.
    #[must_use]
    pub fn recognized(
        message_type: Arc<MessageType>,
        decoded: Decoded,
        raw: Box<dyn RawMessage>,
    ) -> Self {
        Self {
            message_type,
            fields: decoded.fields,
            form: decoded.form,
            raw,
        }
    }

    /// Returns the message's kind.
    #[must_use]
    pub fn message_type(&self) -> &MessageType {
        &self.message_type
    }

    /// Returns a shared handle to the message's kind.
    #[must_use]
    pub fn message_type_arc(&self) -> Arc<MessageType> {
        Arc::clone(&self.message_type)
    }

    /// Returns all fields in order, declared fields first.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the field with the given tag.
    #[must_use]
    pub fn field(&self, tag: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.tag() == tag)
    }

    /// Returns the field with the given tag for editing.
    pub fn field_mut(&mut self, tag: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.tag() == tag)
    }

    /// Returns the first field playing the given role.
    #[must_use]
    pub fn field_by_role(&self, role: FieldRole) -> Option<&Field> {
        self.fields.iter().find(|field| field.role() == Some(role))
    }

    /// Returns the value of the field with the given tag.
    #[must_use]
    pub fn value(&self, tag: &str) -> Option<&str> {
        self.field(tag).map(Field::value)
    }

    /// Returns the value of the field playing `role`, or the empty string.
    #[must_use]
    pub fn role_value(&self, role: FieldRole) -> &str {
        self.field_by_role(role).map(Field::value).unwrap_or_default()
    }

    /// Sets the value of the field with the given tag.
    ///
    /// Returns `false` if the message has no such field.
    pub fn set_value(&mut self, tag: &str, value: impl Into<String>) -> bool {
        self.field_mut(tag)
            .map(|field| field.set_value(value))
            .is_some()
    }

    /// Appends an unknown field unless a field with `tag` already exists.
    ///
    /// Returns `false` if the tag is taken; field tags stay unique.
    pub fn push_unknown(&mut self, tag: &str, value: impl Into<String>) -> bool {
        if self.field(tag).is_some() {
            return false;
        }
        self.fields.push(Field::unknown(tag, value));
        true
    }

    /// Returns the header of the form this message was adopted from.
    #[must_use]
    pub const fn form_header(&self) -> Option<&FormHeader> {
        self.form.as_ref()
    }

    /// Returns every field that fails validation with its problem.
    #[must_use]
    pub fn problems(&self) -> Vec<(&Field, FieldProblem)> {
        self.fields
            .iter()
            .filter_map(|field| field.validate().err().map(|problem| (field, problem)))
            .collect()
    }

    /// Returns `true` if every field passes validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(Field::is_valid)
    }

    /// Encodes the subject line without touching the raw message.
    #[must_use]
    pub fn encode_subject(&self) -> String {
        self.message_type.encode_subject(self)
    }

    /// Encodes the body without touching the raw message.
    #[must_use]
    pub fn encode_body(&self) -> String {
        self.message_type.encode_body(self)
    }

    /// Writes the kind's fields into the raw subject and body.
    pub fn encode(&mut self) {
        let subject = self.encode_subject();
        let body = self.encode_body();
        self.raw.set("Subject", &subject);
        self.raw.set_body(&body);
    }

    /// Encodes the message and serializes it for local storage.
    ///
    /// Fields that fail validation are saved as they are.
    pub fn save(&mut self) -> String {
        self.encode();
        self.raw.save()
    }

    /// Encodes the message and produces it as handed to the network.
    pub fn transmit(&mut self) -> Transmission {
        self.encode();
        self.raw.transmit()
    }

    /// Returns the underlying raw message.
    #[must_use]
    pub fn raw(&self) -> &dyn RawMessage {
        self.raw.as_ref()
    }

    /// Returns the underlying raw message for editing its other headers.
    pub fn raw_mut(&mut self) -> &mut dyn RawMessage {
        self.raw.as_mut()
    }

    /// Gives up the kind's fields and returns the raw message.
    #[must_use]
    pub fn into_raw(self) -> Box<dyn RawMessage> {
        self.raw
    }
}

/// Outcome of running a raw message past the registered recognizers.
#[derive(Debug)]
pub enum Recognition {
    /// A recognizer claimed the message.
    Typed(TypedMessage),
    /// No recognizer claimed the message; it is handed back untouched.
    Unrecognized(Box<dyn RawMessage>),
}

impl Recognition {
    /// Returns the typed message, discarding an unrecognized raw message.
    #[must_use]
    pub fn typed(self) -> Option<TypedMessage> {
        match self {
            Self::Typed(message) => Some(message),
            Self::Unrecognized(_) => None,
        }
    }

    /// Returns the typed message by reference.
    #[must_use]
    pub const fn as_typed(&self) -> Option<&TypedMessage> {
        match self {
            Self::Typed(message) => Some(message),
            Self::Unrecognized(_) => None,
        }
    }

    /// Returns `true` if a recognizer claimed the message.
    #[must_use]
    pub const fn is_typed(&self) -> bool {
        matches!(self, Self::Typed(_))
    }

    /// Returns the tag of the kind that claimed the message.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.as_typed().map(|message| message.message_type().tag())
    }

    /// Returns the raw message in either case.
    #[must_use]
    pub fn into_raw(self) -> Box<dyn RawMessage> {
        match self {
            Self::Typed(message) => message.into_raw(),
            Self::Unrecognized(raw) => raw,
        }
    }
}
