//! Unit tests for the `PackItForms` codec.

use super::fixtures::ICS213_BODY;
use crate::message::{
    adapters::{
        PifoCodec,
        pifo::{decode_value, encode_value},
    },
    domain::{FormHeader, ParsedForm},
    error::FormParseError,
    ports::{FormCodec, FormCodecConfig},
};
use rstest::{fixture, rstest};

#[fixture]
fn lenient() -> PifoCodec {
    PifoCodec::default()
}

#[fixture]
fn strict() -> PifoCodec {
    PifoCodec::new(FormCodecConfig::strict())
}

fn sample_form() -> ParsedForm {
    ParsedForm::new(FormHeader::new("form-test.html", "1.0", "3.9"))
        .with_entry("A", "1")
        .with_entry("B.", "two words")
}

// ============================================================================
// Encoding tests
// ============================================================================

#[rstest]
fn encode_writes_exact_layout(lenient: PifoCodec) {
    let body = lenient.encode(&sample_form());

    assert_eq!(
        body,
        "!SCCoPIFO!\n#T: form-test.html\n#V: 3.9-1.0\nA: [1]\nB.: [two words]\n!/ADDON!\n"
    );
}

#[rstest]
#[case("plain", "plain")]
#[case("a]b", "a`]b")]
#[case("back\\slash", "back\\\\slash")]
#[case("two\nlines", "two\\nlines")]
#[case("tick`", "tick`]]")]
#[case("a`]", "a``]")]
#[case("", "")]
fn encode_value_escapes(#[case] value: &str, #[case] encoded: &str) {
    assert_eq!(encode_value(value), encoded);
}

#[rstest]
#[case("plain")]
#[case("a]b")]
#[case("back\\slash\\n")]
#[case("two\nlines\n")]
#[case("tick`")]
#[case("]`")]
#[case("a`]")]
fn decode_value_reverses_encode_value(#[case] value: &str) {
    assert_eq!(decode_value(&encode_value(value)), value);
}

// ============================================================================
// Signature tests
// ============================================================================

#[rstest]
#[case("!SCCoPIFO!\n#T: x\n", true)]
#[case("!SCCoPIFO!\r\n", true)]
#[case("Hello\n!SCCoPIFO!\n", false)]
#[case("", false)]
fn is_form_checks_first_line(lenient: PifoCodec, #[case] body: &str, #[case] expected: bool) {
    assert_eq!(lenient.is_form(body), expected);
}

#[rstest]
fn parse_rejects_non_form_in_either_mode(lenient: PifoCodec, strict: PifoCodec) {
    assert_eq!(lenient.parse("Hello"), Err(FormParseError::NotAForm));
    assert_eq!(strict.parse("Hello"), Err(FormParseError::NotAForm));
}

// ============================================================================
// Parsing tests
// ============================================================================

#[rstest]
fn parse_reads_header_and_entries_in_order(strict: PifoCodec) {
    let form = strict.parse(ICS213_BODY).expect("valid form");

    assert_eq!(form.form_type, "form-ics213.html");
    assert_eq!(form.pifo_version, "3.9");
    assert_eq!(form.form_version, "2.2");
    assert_eq!(form.fields.first().map(|entry| entry.tag.as_str()), Some("MsgNo"));
    assert_eq!(
        form.get("12."),
        Some("Main break at 1st and Elm.\nCrews on scene.")
    );
}

#[rstest]
fn parse_accepts_encoded_form(strict: PifoCodec) {
    let form = sample_form().with_entry("C", "multi\nline ]` value`");

    let parsed = strict.parse(&strict.encode(&form)).expect("valid form");

    assert_eq!(parsed, form);
}

#[rstest]
fn parse_tolerates_crlf_line_endings(strict: PifoCodec) {
    let body = "!SCCoPIFO!\r\n#T: form-test.html\r\n#V: 3.9-1.0\r\nA: [1]\r\n!/ADDON!\r\n";

    let form = strict.parse(body).expect("valid form");

    assert_eq!(form.get("A"), Some("1"));
}

// ============================================================================
// Defect handling tests
// ============================================================================

const NO_FOOTER: &str = "!SCCoPIFO!\n#T: form-test.html\n#V: 3.9-1.0\nA: [1]\n";
const DUPLICATE: &str = "!SCCoPIFO!\n#T: form-test.html\n#V: 3.9-1.0\nA: [1]\nA: [2]\n!/ADDON!\n";
const GARBAGE: &str = "!SCCoPIFO!\n#T: form-test.html\n#V: 3.9-1.0\ngarbage\nA: [1]\n!/ADDON!\n";
const AFTER_FOOTER: &str = "!SCCoPIFO!\n#T: form-test.html\n#V: 3.9-1.0\n!/ADDON!\nA: [1]\n";
const BAD_VERSION: &str = "!SCCoPIFO!\n#T: form-test.html\n#V: 3.9\nA: [1]\n!/ADDON!\n";
const NO_TYPE: &str = "!SCCoPIFO!\n#V: 3.9-1.0\nA: [1]\n!/ADDON!\n";

#[rstest]
#[case(NO_FOOTER, FormParseError::MissingFooter)]
#[case(DUPLICATE, FormParseError::DuplicateField("A".to_owned()))]
#[case(GARBAGE, FormParseError::malformed_line(4, "garbage"))]
#[case(AFTER_FOOTER, FormParseError::ContentAfterFooter)]
#[case(BAD_VERSION, FormParseError::MalformedVersion("3.9".to_owned()))]
#[case(NO_TYPE, FormParseError::MissingFormType)]
fn strict_codec_rejects_defects(
    strict: PifoCodec,
    #[case] body: &str,
    #[case] expected: FormParseError,
) {
    assert_eq!(strict.parse(body), Err(expected));
}

#[rstest]
#[case(NO_FOOTER, "1")]
#[case(DUPLICATE, "2")]
#[case(GARBAGE, "1")]
#[case(AFTER_FOOTER, "1")]
fn lenient_codec_recovers_entries(lenient: PifoCodec, #[case] body: &str, #[case] value: &str) {
    let form = lenient.parse(body).expect("tolerated defect");

    assert_eq!(form.get("A"), Some(value));
    assert_eq!(form.fields.len(), 1);
}

#[rstest]
fn lenient_codec_leaves_bad_version_empty(lenient: PifoCodec) {
    let form = lenient.parse(BAD_VERSION).expect("tolerated defect");

    assert_eq!(form.form_type, "form-test.html");
    assert_eq!(form.form_version, "");
    assert_eq!(form.pifo_version, "");
}

#[rstest]
fn configured_default_version_is_reported() {
    let codec = PifoCodec::new(FormCodecConfig::lenient().with_default_pifo_version("3.9"));

    assert_eq!(codec.default_pifo_version(), "3.9");
    assert!(!codec.config().strict);
}
