//! Typedpacket: typed packet-radio messages.
//!
//! This crate recognizes structured packet messages (delivery receipts, read
//! receipts, and form-based messages), exposes their fields through one
//! uniform, validated, editable model, and re-encodes them in the exact text
//! formats used for storage and transmission.
//!
//! # Architecture
//!
//! Typedpacket follows hexagonal architecture principles:
//!
//! - **Domain**: Field model, message type descriptors and typed messages
//! - **Ports**: Abstract trait interfaces for raw messages and form codecs
//! - **Adapters**: Concrete implementations of ports (header/body messages,
//!   `PackItForms` bodies)
//!
//! # Modules
//!
//! - [`message`]: Typed messages, the kind registry and form adoption

pub mod message;
