//! Application services for the message subsystem.
//!
//! Services coordinate kinds, the form codec, and raw messages: the registry
//! dispatches creation and recognition, and form adoption implements the
//! behaviour shared by every form-based kind.

pub mod form;
mod registry;

pub use form::{
    adopt_fields, adopt_form, create_form, encode_form_body, encode_form_subject, parse_form,
    recognize_form,
};
pub use registry::{MessageTypeRegistry, standard_registry};
