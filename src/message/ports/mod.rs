//! Port trait definitions for the message subsystem.
//!
//! Ports define the interfaces the typed-message core requires from its
//! collaborators. Adapters implement these ports; the core never depends on
//! a concrete header parser or form encoding.

pub mod form_codec;
pub mod raw_message;

pub use form_codec::{FormCodec, FormCodecConfig, FormParseResult};
pub use raw_message::{RawMessage, Transmission};
