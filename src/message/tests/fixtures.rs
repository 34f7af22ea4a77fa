//! Shared fixtures and helpers for message tests.

use crate::message::{
    adapters::HeaderMessage, ports::RawMessage, services::MessageTypeRegistry,
};
use mockable::DefaultClock;
use rstest::fixture;

#[fixture]
pub fn clock() -> DefaultClock {
    DefaultClock
}

#[fixture]
pub fn registry() -> MessageTypeRegistry {
    MessageTypeRegistry::new()
}

/// Builds a raw message with the given subject and body.
pub fn raw(subject: &str, body: &str) -> Box<dyn RawMessage> {
    Box::new(
        HeaderMessage::new()
            .with_header("To", "KA6ABC@w1xsc.ampr.org")
            .with_header("Subject", subject)
            .with_body(body),
    )
}

/// Re-parses the stored text of a message, as a receiving station would.
pub fn reparse(saved: &str) -> Box<dyn RawMessage> {
    Box::new(HeaderMessage::parse(saved).expect("saved message should parse"))
}

pub const DELIVERY_BODY: &str = "!LMI!AB123!DR!01/02/2024 10:00\nYour Message\nTo: KA6ABC\n";

pub const READ_BODY: &str = concat!(
    "!RR!01/02/2024 10:05\n",
    "Your Message\n",
    "\n",
    "To: KA6ABC\n",
    "Subject: Weekly Status\n",
    "\n",
    "was read on 01/02/2024 10:05\n",
);

pub const ICS213_BODY: &str = concat!(
    "!SCCoPIFO!\n",
    "#T: form-ics213.html\n",
    "#V: 3.9-2.2\n",
    "MsgNo: [XND-042P]\n",
    "1a.: [01/02/2024]\n",
    "1b.: [10:00]\n",
    "5.: [PRIORITY]\n",
    "7.: [EOC Director]\n",
    "8.: [Radio Officer]\n",
    "9a.: [County EOC]\n",
    "9b.: [Station 6]\n",
    "10.: [Water main break]\n",
    "12.: [Main break at 1st and Elm.\\nCrews on scene.]\n",
    "Rec-Sent: [sender]\n",
    "OpCall: [KA6ABC]\n",
    "OpName: [Pat Operator]\n",
    "Method: [Amateur Radio]\n",
    "OpDate: [01/02/2024]\n",
    "OpTime: [10:05]\n",
    "!/ADDON!\n",
);

pub const ICS213_SUBJECT: &str = "XND-042P_P_ICS213_Water main break";
