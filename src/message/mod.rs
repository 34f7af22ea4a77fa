//! Typed packet messages for Typedpacket.
//!
//! This module implements the kind registry, the uniform field model, and
//! the encode/decode contract that lets a message round-trip through
//! decode, edit and encode without losing anything not explicitly changed.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Field`], [`domain::MessageType`], [`domain::TypedMessage`], etc.)
//! - **Ports**: Abstract trait interfaces ([`ports::RawMessage`], [`ports::FormCodec`])
//! - **Adapters**: Concrete implementations ([`adapters::HeaderMessage`], [`adapters::PifoCodec`])
//! - **Services**: The kind registry and form adoption
//! - **Kinds**: Delivery and read receipts, ICS-213, and the unknown-form fallback
//!
//! # Example
//!
//! ```
//! use typedpacket::message::adapters::HeaderMessage;
//! use typedpacket::message::services::standard_registry;
//!
//! let raw = HeaderMessage::parse(concat!(
//!     "Subject: DELIVERED: Weekly Status\n",
//!     "\n",
//!     "!LMI!AB123!DR!01/02/2024 10:00\n",
//!     "Your Message\n",
//!     "To: KA6ABC\n",
//! ))
//! .expect("valid message");
//!
//! let mut receipt = standard_registry()
//!     .recognize(Box::new(raw))
//!     .typed()
//!     .expect("delivery receipt");
//! assert_eq!(receipt.value("DeliveredTo"), Some("KA6ABC"));
//!
//! receipt.set_value("DeliveredSubject", "Weekly Status (revised)");
//! assert_eq!(
//!     receipt.transmit().subject,
//!     "DELIVERED: Weekly Status (revised)",
//! );
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod kinds;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
