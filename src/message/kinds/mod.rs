//! Concrete message kinds.
//!
//! Each kind exposes a `message_type()` descriptor for registration and the
//! tags of its fields as constants.
//!
//! # Available Kinds
//!
//! - [`delivery_receipt`]: `DELIVERED`, sent when a message reaches a mailbox
//! - [`read_receipt`]: `READ`, sent when a message is opened
//! - [`ics213`]: `ICS213`, the ICS-213 general message form
//! - [`unknown_form`]: `UNKNOWN`, any form no other kind recognizes
//! - [`plain_text`]: `PLAIN`, a plain text message with a standard subject

pub mod delivery_receipt;
pub mod ics213;
pub mod plain_text;
pub mod read_receipt;
mod receipt;
mod subject_line;
pub mod unknown_form;

pub use receipt::EXTRA_TEXT;
