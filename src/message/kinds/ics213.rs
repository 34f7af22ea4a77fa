//! ICS-213 general message form, version 2.2.

use crate::message::domain::{
    Article, Decoded, DefaultValue, FieldDef, FieldRole, FormIdentity, HandlingOrder,
    MessageType, Validator,
};
use crate::message::ports::RawMessage;
use crate::message::services::form::{encode_form_body, encode_form_subject, recognize_form};

/// Tag of the ICS-213 kind.
pub const TAG: &str = "ICS213";
/// Form type of the ICS-213 form.
pub const HTML: &str = "form-ics213.html";
/// Form version written on new messages.
pub const VERSION: &str = "2.2";

/// Returns the ICS-213 descriptor.
#[must_use]
pub fn message_type() -> MessageType {
    MessageType::new(TAG, "ICS-213 general message", Article::An)
        .with_form(FormIdentity::new(HTML, VERSION))
        .with_create(fields)
        .with_recognize(recognize)
        .with_encoders(encode_form_subject, encode_form_body)
}

/// Returns the ICS-213 field set in encoding order.
#[must_use]
pub fn fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("MsgNo", "2. Origin Msg #")
            .required()
            .with_validator(Validator::MessageNumber)
            .with_role(FieldRole::OriginMessageNumber),
        FieldDef::new("3.", "3. Destination Msg #").with_validator(Validator::MessageNumber),
        FieldDef::new("1a.", "1. Date")
            .required()
            .with_validator(Validator::Date)
            .with_default(DefaultValue::CurrentDate),
        FieldDef::new("1b.", "1. Time (24hr)")
            .required()
            .with_validator(Validator::Time)
            .with_default(DefaultValue::CurrentTime),
        FieldDef::new("5.", "5. Handling")
            .required()
            .with_validator(Validator::choices(
                HandlingOrder::all().map(|order| order.as_str()),
            ))
            .with_role(FieldRole::Handling),
        FieldDef::new("6a.", "6. Take Action").with_validator(yes_no()),
        FieldDef::new("6b.", "6. Reply").with_validator(yes_no()),
        FieldDef::new("6d.", "6. Reply by").with_validator(Validator::Time),
        FieldDef::new("7.", "7. To ICS Position").required(),
        FieldDef::new("8.", "8. From ICS Position").required(),
        FieldDef::new("9a.", "9. To Location").required(),
        FieldDef::new("9b.", "9b. From Location").required(),
        FieldDef::new("ToName", "To Name"),
        FieldDef::new("FmName", "From Name"),
        FieldDef::new("ToTel", "To Telephone #").with_validator(Validator::PhoneNumber),
        FieldDef::new("FmTel", "From Telephone #").with_validator(Validator::PhoneNumber),
        FieldDef::new("10.", "10. Subject")
            .required()
            .with_role(FieldRole::Subject),
        FieldDef::new("11.", "11. Reference"),
        FieldDef::new("12.", "12. Message").required().multiline(),
        FieldDef::new("OpRelayRcvd", "Relay Rcvd"),
        FieldDef::new("OpRelaySent", "Relay Sent"),
        FieldDef::new("Rec-Sent", "Receiver or Sender")
            .required()
            .with_validator(Validator::choices(["receiver", "sender"]))
            .with_default(DefaultValue::Text("sender".to_owned())),
        FieldDef::new("OpCall", "Operator Call Sign")
            .required()
            .with_validator(Validator::CallSign),
        FieldDef::new("OpName", "Operator Name").required(),
        FieldDef::new("Method", "How Received or Sent")
            .required()
            .with_validator(Validator::choices([
                "Telephone",
                "Dispatch Center",
                "EOC Radio",
                "FAX",
                "Courier",
                "Amateur Radio",
                "Other",
            ]))
            .with_default(DefaultValue::Text("Amateur Radio".to_owned())),
        FieldDef::new("Other", "How Received or Sent: Other"),
        FieldDef::new("OpDate", "Operator Date")
            .required()
            .with_validator(Validator::Date)
            .with_default(DefaultValue::CurrentDate),
        FieldDef::new("OpTime", "Operator Time")
            .required()
            .with_validator(Validator::Time)
            .with_default(DefaultValue::CurrentTime),
    ]
}

fn yes_no() -> Validator {
    Validator::choices(["Yes", "No"])
}

fn recognize(message_type: &MessageType, raw: &dyn RawMessage) -> Option<Decoded> {
    recognize_form(message_type, raw, fields())
}
