//! Collaborator adapters for the message module.
//!
//! This module provides concrete implementations of the [`RawMessage`] and
//! [`FormCodec`] ports so the typed-message core can be exercised end to end.
//!
//! # Available Adapters
//!
//! - [`rfc5322::HeaderMessage`]: ordered headers plus body, with an optional
//!   mbox envelope line
//! - [`pifo::PifoCodec`]: the `PackItForms` body encoding used by packet forms
//!
//! [`RawMessage`]: crate::message::ports::RawMessage
//! [`FormCodec`]: crate::message::ports::FormCodec

pub mod pifo;
pub mod rfc5322;

pub use pifo::PifoCodec;
pub use rfc5322::HeaderMessage;
