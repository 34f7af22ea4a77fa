//! Unit tests for the header/body message adapter.

use crate::message::{adapters::HeaderMessage, error::RawMessageError, ports::RawMessage};
use rstest::rstest;

const STORED: &str = concat!(
    "From KA6ABC Tue Jan  2 10:00:00 2024\n",
    "To: W6XSC@w1xsc.ampr.org\n",
    "Subject: Weekly Status\n",
    "X-Source: packet\n",
    "\n",
    "Line one\n",
    "\n",
    "Line three after a blank line\n",
);

// ============================================================================
// Parsing tests
// ============================================================================

#[test]
fn parses_envelope_headers_and_body() {
    let message = HeaderMessage::parse(STORED).expect("valid message");

    assert_eq!(message.envelope(), Some("From KA6ABC Tue Jan  2 10:00:00 2024"));
    assert_eq!(
        message.headers(),
        vec![
            ("To", "W6XSC@w1xsc.ampr.org"),
            ("Subject", "Weekly Status"),
            ("X-Source", "packet"),
        ]
    );
    assert_eq!(message.body(), "Line one\n\nLine three after a blank line\n");
}

#[rstest]
#[case("subject")]
#[case("SUBJECT")]
#[case("Subject")]
fn header_lookup_ignores_case(#[case] key: &str) {
    let message = HeaderMessage::parse(STORED).expect("valid message");

    assert_eq!(message.get(key), Some("Weekly Status"));
}

#[test]
fn folded_header_lines_are_joined() {
    let message = HeaderMessage::parse("Subject: Weekly\n\tStatus\n  Report\n\nBody")
        .expect("valid message");

    assert_eq!(message.subject(), "Weekly Status Report");
    assert_eq!(message.body(), "Body");
}

#[rstest]
#[case("Subject: DELIVERED: \n\nBody", "DELIVERED: ", "Subject: DELIVERED: \n\nBody")]
#[case("Subject:   Spaced out  \n\nBody", "Spaced out  ", "Subject: Spaced out  \n\nBody")]
#[case("Subject:\n\nBody", "", "Subject: \n\nBody")]
fn header_value_keeps_trailing_whitespace(
    #[case] text: &str,
    #[case] subject: &str,
    #[case] saved: &str,
) {
    let message = HeaderMessage::parse(text).expect("valid message");

    assert_eq!(message.subject(), subject);
    assert_eq!(message.save(), saved);
}

#[test]
fn message_without_blank_line_has_empty_body() {
    let message = HeaderMessage::parse("To: a@b\nSubject: Hi\n").expect("valid message");

    assert_eq!(message.subject(), "Hi");
    assert_eq!(message.body(), "");
}

#[test]
fn body_keeps_crlf_and_trailing_whitespace() {
    let message = HeaderMessage::parse("Subject: Hi\r\n\r\nline  \r\nnext").expect("valid");

    assert_eq!(message.subject(), "Hi");
    assert_eq!(message.body(), "line  \r\nnext");
}

#[rstest]
#[case("")]
#[case("   \n\n")]
fn blank_input_is_rejected(#[case] text: &str) {
    assert_eq!(HeaderMessage::parse(text), Err(RawMessageError::Empty));
}

#[rstest]
#[case("To: a@b\nnot a header\n\nBody", 2, "not a header")]
#[case(" continued\nSubject: Hi\n\n", 1, " continued")]
fn malformed_headers_are_rejected(
    #[case] text: &str,
    #[case] line: usize,
    #[case] content: &str,
) {
    let err = HeaderMessage::parse(text).expect_err("malformed header");

    assert_eq!(err, RawMessageError::malformed_header(line, content));
    assert!(err.to_string().contains(&line.to_string()));
}

// ============================================================================
// Mutation tests
// ============================================================================

#[test]
fn set_replaces_existing_header_in_place() {
    let mut message = HeaderMessage::parse(STORED).expect("valid message");

    message.set("SUBJECT", "Revised");

    assert_eq!(message.subject(), "Revised");
    let keys: Vec<&str> = message.headers().into_iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["To", "Subject", "X-Source"]);
}

#[test]
fn set_appends_new_header() {
    let mut message = HeaderMessage::new().with_header("To", "a@b");

    message.set("Subject", "Hello");

    assert_eq!(message.headers(), vec![("To", "a@b"), ("Subject", "Hello")]);
}

#[test]
fn missing_subject_reads_as_empty() {
    let message = HeaderMessage::new().with_body("text");

    assert_eq!(message.get("Subject"), None);
    assert_eq!(message.subject(), "");
}

// ============================================================================
// Storage and transmission tests
// ============================================================================

#[test]
fn save_reproduces_stored_text() {
    let message = HeaderMessage::parse(STORED).expect("valid message");

    assert_eq!(message.save(), STORED);
}

#[test]
fn saved_message_parses_to_equal_message() {
    let message = HeaderMessage::new()
        .with_header("To", "a@b")
        .with_header("Subject", "Hi")
        .with_body("multi\nline\n");

    let restored = HeaderMessage::parse(&message.save()).expect("saved message parses");

    assert_eq!(restored, message);
}

#[rstest]
#[case("a@b", vec!["a@b"])]
#[case("a@b, c@d ,e@f", vec!["a@b", "c@d", "e@f"])]
#[case("a@b,,", vec!["a@b"])]
fn transmit_splits_destinations(#[case] to: &str, #[case] expected: Vec<&str>) {
    let message = HeaderMessage::new()
        .with_header("To", to)
        .with_header("Subject", "Hi")
        .with_body("Body\n");

    let transmission = message.transmit();

    assert_eq!(transmission.destinations, expected);
    assert_eq!(transmission.subject, "Hi");
    assert_eq!(transmission.body, "Body\n");
}

#[test]
fn transmit_without_recipients_has_no_destinations() {
    let transmission = HeaderMessage::new().transmit();

    assert!(transmission.destinations.is_empty());
}
