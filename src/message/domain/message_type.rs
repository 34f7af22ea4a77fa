//! Message type descriptors.
//!
//! A message kind is plain data: a tag, a display name, and function pointers
//! for creating, recognizing, and encoding messages of that kind. New kinds
//! plug in by registering a descriptor; nothing else needs to change.

use serde::{Deserialize, Serialize};

use super::field::{Field, FieldDef};
use super::form::FormHeader;
use super::typed_message::TypedMessage;
use crate::message::ports::RawMessage;

/// Builds the blank field set of a creatable kind.
pub type CreateFn = fn() -> Vec<FieldDef>;

/// Attempts to interpret a raw message as the given kind.
///
/// Returning `None` declines the message; there is no partial recognition.
pub type RecognizeFn = fn(&MessageType, &dyn RawMessage) -> Option<Decoded>;

/// Encodes the subject line or body of a typed message.
pub type EncodeFn = fn(&TypedMessage) -> String;

/// Grammatical article used with a kind's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Article {
    /// "a"
    A,
    /// "an"
    An,
}

impl Article {
    /// Returns the article as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::An => "an",
        }
    }
}

impl std::fmt::Display for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Form identity of a form-based kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormIdentity {
    /// HTML file name identifying the form (e.g. `form-ics213.html`).
    pub html: String,
    /// Form version written on newly created messages.
    pub version: String,
}

impl FormIdentity {
    /// Creates a form identity.
    #[must_use]
    pub fn new(html: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            version: version.into(),
        }
    }
}

/// Fields decoded by a successful recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The kind's fields, populated from the raw message.
    pub fields: Vec<Field>,
    /// The form header, for form-based kinds.
    pub form: Option<FormHeader>,
}

impl Decoded {
    /// Creates a decoding with no form header.
    #[must_use]
    pub const fn new(fields: Vec<Field>) -> Self {
        Self { fields, form: None }
    }

    /// Attaches the header of the form the fields were adopted from.
    #[must_use]
    pub fn with_form(mut self, form: FormHeader) -> Self {
        self.form = Some(form);
        self
    }
}

/// Descriptor of one kind of typed message.
///
/// # Examples
///
/// ```
/// use typedpacket::message::domain::{Article, FieldDef, MessageType};
///
/// fn fields() -> Vec<FieldDef> {
///     vec![FieldDef::new("Note", "Note")]
/// }
///
/// let kind = MessageType::new("NOTE", "note", Article::A).with_create(fields);
/// assert_eq!(kind.tag(), "NOTE");
/// assert_eq!(kind.display_name(), "a note");
/// assert!(kind.is_creatable());
/// assert!(!kind.is_recognizable());
/// ```
#[derive(Debug, Clone)]
pub struct MessageType {
    tag: String,
    name: String,
    article: Article,
    form: Option<FormIdentity>,
    create: Option<CreateFn>,
    recognize: Option<RecognizeFn>,
    encode_subject: EncodeFn,
    encode_body: EncodeFn,
}

impl MessageType {
    /// Creates a descriptor that can neither create nor recognize messages.
    ///
    /// Its encoders leave the raw subject and body as they are.
    #[must_use]
    pub fn new(tag: impl Into<String>, name: impl Into<String>, article: Article) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            article,
            form: None,
            create: None,
            recognize: None,
            encode_subject: keep_subject,
            encode_body: keep_body,
        }
    }

    /// Makes the kind creatable from the given blank field set.
    #[must_use]
    pub const fn with_create(mut self, create: CreateFn) -> Self {
        self.create = Some(create);
        self
    }

    /// Makes the kind recognizable.
    #[must_use]
    pub const fn with_recognize(mut self, recognize: RecognizeFn) -> Self {
        self.recognize = Some(recognize);
        self
    }

    /// Sets the subject and body encoders.
    #[must_use]
    pub const fn with_encoders(mut self, encode_subject: EncodeFn, encode_body: EncodeFn) -> Self {
        self.encode_subject = encode_subject;
        self.encode_body = encode_body;
        self
    }

    /// Declares the kind to be form-based.
    #[must_use]
    pub fn with_form(mut self, form: FormIdentity) -> Self {
        self.form = Some(form);
        self
    }

    /// Returns the unique tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the article used with the display name.
    #[must_use]
    pub const fn article(&self) -> Article {
        self.article
    }

    /// Returns the display name with its article, e.g. "a delivery receipt".
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.article, self.name)
    }

    /// Returns the form identity of a form-based kind.
    #[must_use]
    pub const fn form(&self) -> Option<&FormIdentity> {
        self.form.as_ref()
    }

    /// Returns `true` if messages of this kind can be created from scratch.
    #[must_use]
    pub const fn is_creatable(&self) -> bool {
        self.create.is_some()
    }

    /// Returns `true` if the kind takes part in recognition.
    #[must_use]
    pub const fn is_recognizable(&self) -> bool {
        self.recognize.is_some()
    }

    /// Returns the blank field set, if the kind is creatable.
    #[must_use]
    pub fn blank_fields(&self) -> Option<Vec<FieldDef>> {
        self.create.map(|create| create())
    }

    /// Runs the kind's recognizer against a raw message.
    #[must_use]
    pub fn recognize(&self, raw: &dyn RawMessage) -> Option<Decoded> {
        self.recognize.and_then(|recognize| recognize(self, raw))
    }

    /// Encodes the subject line of a message of this kind.
    #[must_use]
    pub fn encode_subject(&self, message: &TypedMessage) -> String {
        (self.encode_subject)(message)
    }

    /// Encodes the body of a message of this kind.
    #[must_use]
    pub fn encode_body(&self, message: &TypedMessage) -> String {
        (self.encode_body)(message)
    }
}

fn keep_subject(message: &TypedMessage) -> String {
    message.raw().subject().to_owned()
}

fn keep_body(message: &TypedMessage) -> String {
    message.raw().body().to_owned()
}
