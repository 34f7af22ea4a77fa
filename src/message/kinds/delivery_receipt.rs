//! Delivery receipts.
//!
//! Sent automatically by a receiving station's software when a message
//! lands in its mailbox:
//!
//! ```text
//! Subject: DELIVERED: Weekly Status
//!
//! !LMI!XND-042P!DR!01/02/2024 10:00
//! Your Message
//! To: KA6ABC
//! Subject: Weekly Status
//! was delivered on 01/02/2024 10:00
//! Recipient's Local Message ID: XND-042P
//! ```

use regex::Regex;
use std::sync::LazyLock;

use super::receipt::{EXTRA_TEXT, ReceiptFlavor, append_extra_text, fill};
use crate::message::domain::{
    Article, Decoded, DefaultValue, FieldDef, MessageType, TypedMessage, Validator, compile,
};
use crate::message::ports::RawMessage;

/// Tag of the delivery receipt kind.
pub const TAG: &str = "DELIVERED";
/// Local message ID assigned by the receiving station.
pub const LOCAL_MESSAGE_ID: &str = "LocalMessageID";
/// Time the message was delivered.
pub const DELIVERED_TIME: &str = "DeliveredTime";
/// Address the message was delivered to.
pub const DELIVERED_TO: &str = "DeliveredTo";
/// Subject of the delivered message.
pub const DELIVERED_SUBJECT: &str = "DeliveredSubject";

static BODY: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^!LMI!([^!]+)!DR!(.+)\n.*\nTo: (.+)(?:\n|$)(?:Subject:.*(?:\n|$))?(?:was delivered on.*(?:\n|$))?(?:Recipient's Local.*(?:\n|$))?",
    )
});

static FLAVOR: ReceiptFlavor = ReceiptFlavor {
    prefix: "DELIVERED: ",
    body: &BODY,
};

/// Returns the delivery receipt descriptor.
#[must_use]
pub fn message_type() -> MessageType {
    MessageType::new(TAG, "delivery receipt", Article::A)
        .with_create(fields)
        .with_recognize(recognize)
        .with_encoders(encode_subject, encode_body)
}

/// Returns the delivery receipt field set.
#[must_use]
pub fn fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new(LOCAL_MESSAGE_ID, "Local Message ID")
            .required()
            .with_validator(Validator::MessageNumber),
        FieldDef::new(DELIVERED_TIME, "Delivered Time")
            .required()
            .with_default(DefaultValue::CurrentDateTime),
        FieldDef::new(DELIVERED_TO, "Delivered To").required(),
        FieldDef::new(DELIVERED_SUBJECT, "Delivered Subject"),
        FieldDef::new(EXTRA_TEXT, "Extra Text").multiline(),
    ]
}

fn recognize(_: &MessageType, raw: &dyn RawMessage) -> Option<Decoded> {
    let matched = FLAVOR.decode(raw)?;
    let &[id, time, to] = matched.groups.as_slice() else {
        return None;
    };
    Some(Decoded::new(fill(
        fields(),
        &[
            (LOCAL_MESSAGE_ID, id),
            (DELIVERED_TIME, time),
            (DELIVERED_TO, to),
            (DELIVERED_SUBJECT, matched.subject),
            (EXTRA_TEXT, matched.extra_text),
        ],
    )))
}

fn encode_subject(message: &TypedMessage) -> String {
    FLAVOR.encode_subject(message, DELIVERED_SUBJECT)
}

fn encode_body(message: &TypedMessage) -> String {
    let value = |tag: &str| message.value(tag).unwrap_or_default().to_owned();
    let id = value(LOCAL_MESSAGE_ID);
    let time = value(DELIVERED_TIME);
    let mut body = format!(
        "!LMI!{id}!DR!{time}\nYour Message\nTo: {}\nSubject: {}\nwas delivered on {time}\nRecipient's Local Message ID: {id}\n",
        value(DELIVERED_TO),
        value(DELIVERED_SUBJECT),
    );
    append_extra_text(&mut body, message);
    body
}
