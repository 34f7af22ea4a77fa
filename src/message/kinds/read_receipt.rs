//! Read receipts.
//!
//! Sent by a receiving station once a message has been opened:
//!
//! ```text
//! Subject: READ: Weekly Status
//!
//! !RR!01/02/2024 10:05
//! Your Message
//!
//! To: KA6ABC
//! Subject: Weekly Status
//!
//! was read on 01/02/2024 10:05
//! ```

use regex::Regex;
use std::sync::LazyLock;

use super::receipt::{EXTRA_TEXT, ReceiptFlavor, append_extra_text, fill};
use crate::message::domain::{
    Article, Decoded, DefaultValue, FieldDef, MessageType, TypedMessage, compile,
};
use crate::message::ports::RawMessage;

/// Tag of the read receipt kind.
pub const TAG: &str = "READ";
/// Address the message was sent to.
pub const READ_TO: &str = "ReadTo";
/// Subject of the message that was read.
pub const READ_SUBJECT: &str = "ReadSubject";
/// Time the message was read.
pub const READ_TIME: &str = "ReadTime";

static BODY: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^\n*!RR!(.+)\n.*\n\nTo: (.+)(?:\n|$)(?:Subject:.*(?:\n|$))?\n?(?:was read on.*(?:\n|$))?")
});

static FLAVOR: ReceiptFlavor = ReceiptFlavor {
    prefix: "READ: ",
    body: &BODY,
};

/// Returns the read receipt descriptor.
#[must_use]
pub fn message_type() -> MessageType {
    MessageType::new(TAG, "read receipt", Article::A)
        .with_create(fields)
        .with_recognize(recognize)
        .with_encoders(encode_subject, encode_body)
}

/// Returns the read receipt field set.
#[must_use]
pub fn fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new(READ_TO, "Read To").required(),
        FieldDef::new(READ_SUBJECT, "Read Subject"),
        FieldDef::new(READ_TIME, "Read Time")
            .required()
            .with_default(DefaultValue::CurrentDateTime),
        FieldDef::new(EXTRA_TEXT, "Extra Text").multiline(),
    ]
}

fn recognize(_: &MessageType, raw: &dyn RawMessage) -> Option<Decoded> {
    let matched = FLAVOR.decode(raw)?;
    let &[time, to] = matched.groups.as_slice() else {
        return None;
    };
    Some(Decoded::new(fill(
        fields(),
        &[
            (READ_TO, to),
            (READ_SUBJECT, matched.subject),
            (READ_TIME, time),
            (EXTRA_TEXT, matched.extra_text),
        ],
    )))
}

fn encode_subject(message: &TypedMessage) -> String {
    FLAVOR.encode_subject(message, READ_SUBJECT)
}

fn encode_body(message: &TypedMessage) -> String {
    let value = |tag: &str| message.value(tag).unwrap_or_default().to_owned();
    let time = value(READ_TIME);
    let mut body = format!(
        "!RR!{time}\nYour Message\n\nTo: {}\nSubject: {}\n\nwas read on {time}\n",
        value(READ_TO),
        value(READ_SUBJECT),
    );
    append_extra_text(&mut body, message);
    body
}
