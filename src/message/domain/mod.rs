//! Domain types for typed packet messages.
//!
//! This module contains the field model, message type descriptors, and the
//! typed message itself. Apart from the raw message port held by a typed
//! message, nothing here depends on a concrete header or form encoding.

mod field;
mod form;
mod handling;
mod message_type;
mod subject;
mod typed_message;
mod validator;

pub use field::{DATE_TIME_FORMAT, DefaultValue, Field, FieldDef, FieldKey, FieldRole, TIME_FORMAT};
pub use form::{FormEntry, FormHeader, ParsedForm};
pub use handling::{HandlingOrder, ParseHandlingOrderError};
pub use message_type::{
    Article, CreateFn, Decoded, EncodeFn, FormIdentity, MessageType, RecognizeFn,
};
pub use subject::{XscSubject, encode_subject};
pub use typed_message::{Recognition, TypedMessage};
pub use validator::{DATE_FORMAT, Validator};

pub(crate) use validator::compile;
