//! Unit tests for the field model.

use super::fixtures::clock;
use crate::message::{
    domain::{
        DATE_TIME_FORMAT, DefaultValue, Field, FieldDef, FieldKey, FieldRole, Validator,
    },
    error::FieldProblem,
};
use chrono::{NaiveDate, NaiveDateTime};
use mockable::DefaultClock;
use rstest::rstest;

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .and_then(|date| date.and_hms_opt(9, 5, 0))
        .expect("valid timestamp")
}

// ============================================================================
// FieldKey tests
// ============================================================================

#[rstest]
#[case(FieldKey::Declared("10.".to_owned()), "10.", false)]
#[case(FieldKey::Unknown("X-Extra".to_owned()), "X-Extra", true)]
fn field_key_exposes_tag_and_kind(
    #[case] key: FieldKey,
    #[case] tag: &str,
    #[case] unknown: bool,
) {
    assert_eq!(key.tag(), tag);
    assert_eq!(key.is_unknown(), unknown);
    assert_eq!(key.to_string(), tag);
}

// ============================================================================
// Value tests
// ============================================================================

#[test]
fn set_value_stores_text_verbatim() {
    let mut field = Field::declared(FieldDef::new("12.", "Message"));

    field.set_value("  padded\nsecond line  ");

    assert_eq!(field.value(), "  padded\nsecond line  ");
}

#[test]
fn declared_field_starts_empty() {
    let field = Field::declared(FieldDef::new("10.", "Subject").required());

    assert_eq!(field.value(), "");
    assert_eq!(field.key(), &FieldKey::Declared("10.".to_owned()));
    assert!(field.is_required());
}

// ============================================================================
// Validation tests
// ============================================================================

#[test]
fn required_field_without_value_is_invalid() {
    let field = Field::declared(FieldDef::new("10.", "Subject").required());

    let problem = field.validate().expect_err("empty required field");

    assert_eq!(
        problem,
        FieldProblem::Required {
            label: "Subject".to_owned()
        }
    );
    assert!(problem.to_string().contains("Subject"));
}

#[test]
fn optional_field_without_value_is_valid() {
    let field = Field::declared(FieldDef::new("1a.", "Date").with_validator(Validator::Date));

    assert!(field.is_valid());
}

#[test]
fn validation_reports_first_failing_validator() {
    let mut field = Field::declared(
        FieldDef::new("N", "Count")
            .with_validator(Validator::CardinalNumber)
            .with_validator(Validator::choices(["1", "2"])),
    );
    field.set_value("x");

    let problem = field.validate().expect_err("not a number");

    assert!(matches!(problem, FieldProblem::InvalidFormat { .. }));
}

#[test]
fn validation_runs_later_validators_when_earlier_pass() {
    let mut field = Field::declared(
        FieldDef::new("N", "Count")
            .with_validator(Validator::CardinalNumber)
            .with_validator(Validator::choices(["1", "2"])),
    );
    field.set_value("3");

    let problem = field.validate().expect_err("not a choice");

    assert!(matches!(problem, FieldProblem::NotAChoice { .. }));
}

#[test]
fn validation_is_repeatable() {
    let mut field = Field::declared(FieldDef::new("1b.", "Time").with_validator(Validator::Time));
    field.set_value("25:00");

    let first = field.validate();
    let second = field.validate();

    assert_eq!(first, second);
    assert_eq!(field.value(), "25:00");
}

// ============================================================================
// Unknown field tests
// ============================================================================

#[test]
fn unknown_field_keeps_value_but_never_validates() {
    let field = Field::unknown("X-Extra", "kept");

    assert_eq!(field.key(), &FieldKey::Unknown("X-Extra".to_owned()));
    assert_eq!(field.label(), "X-Extra");
    assert_eq!(field.value(), "kept");
    assert_eq!(field.def().validators, vec![Validator::Unrecognized]);
    let problem = field.validate().expect_err("unknown fields always fail");
    assert!(problem.is_unrecognized());
}

// ============================================================================
// Default value tests
// ============================================================================

#[rstest]
#[case(DefaultValue::Empty, "")]
#[case(DefaultValue::Text("sender".to_owned()), "sender")]
#[case(DefaultValue::CurrentDate, "01/02/2024")]
#[case(DefaultValue::CurrentTime, "09:05")]
#[case(DefaultValue::CurrentDateTime, "01/02/2024 09:05")]
fn default_value_resolves_against_time(#[case] default: DefaultValue, #[case] expected: &str) {
    assert_eq!(default.resolve(&timestamp()), expected);
}

#[rstest]
#[case(DefaultValue::Empty, false)]
#[case(DefaultValue::Text("x".to_owned()), false)]
#[case(DefaultValue::CurrentDate, true)]
#[case(DefaultValue::CurrentDateTime, true)]
fn default_value_reports_derived(#[case] default: DefaultValue, #[case] derived: bool) {
    assert_eq!(default.is_derived(), derived);
}

#[rstest]
fn derived_default_is_computed_from_clock(clock: DefaultClock) {
    let def = FieldDef::new("DeliveredTime", "Delivered Time")
        .with_default(DefaultValue::CurrentDateTime);

    let field = Field::with_default(def, &clock);

    assert!(NaiveDateTime::parse_from_str(field.value(), DATE_TIME_FORMAT).is_ok());
    assert!(NaiveDateTime::parse_from_str(&field.default_value(&clock), DATE_TIME_FORMAT).is_ok());
}

#[rstest]
fn derived_date_default_passes_date_validator(clock: DefaultClock) {
    let def = FieldDef::new("1a.", "Date")
        .required()
        .with_validator(Validator::Date)
        .with_default(DefaultValue::CurrentDate);

    let field = Field::with_default(def, &clock);

    assert!(field.is_valid());
}

// ============================================================================
// Schema serialisation tests
// ============================================================================

#[test]
fn field_def_deserialises_with_defaults() {
    let def: FieldDef = serde_json::from_str(r#"{"tag": "11.", "label": "Reference"}"#)
        .expect("minimal definition");

    assert_eq!(def, FieldDef::new("11.", "Reference"));
}

#[test]
fn field_def_deserialises_full_schema_entry() {
    let json = r#"{
        "tag": "5.",
        "label": "Handling",
        "required": true,
        "validators": [{"choices": ["IMMEDIATE", "PRIORITY", "ROUTINE"]}],
        "default": {"text": "ROUTINE"},
        "role": "handling"
    }"#;

    let def: FieldDef = serde_json::from_str(json).expect("full definition");

    assert!(def.required);
    assert_eq!(
        def.validators,
        vec![Validator::choices(["IMMEDIATE", "PRIORITY", "ROUTINE"])]
    );
    assert_eq!(def.default, DefaultValue::Text("ROUTINE".to_owned()));
    assert_eq!(def.role, Some(FieldRole::Handling));
}

#[test]
fn field_def_serialisation_round_trips() {
    let def = FieldDef::new("1a.", "Date")
        .required()
        .with_validator(Validator::Date)
        .with_default(DefaultValue::CurrentDate);

    let json = serde_json::to_string(&def).expect("serialise");
    let restored: FieldDef = serde_json::from_str(&json).expect("deserialise");

    assert_eq!(restored, def);
}
