//! Field value validators.
//!
//! Validators are pure: checking a value never changes it, so a field can
//! be revalidated any number of times. Format validators accept the empty
//! value; whether a field may be empty is decided by its `required` flag.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::message::error::FieldProblem;

/// Date format used throughout packet forms.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

static CARDINAL_NUMBER: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]+$"));
static REAL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[-+]?(?:[0-9]*\.[0-9]+|[0-9]+)$"));
static TIME: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:(?:[01][0-9]|2[0-3]):?[0-5][0-9]|24:?00)$"));
static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[a-zA-Z ]*(?:[+][0-9]+ )?[0-9][0-9 -]*(?:[xX][0-9]+)?$"));
static CALL_SIGN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?:A[A-L][0-9][A-Z]{1,3}|[KNW][0-9][A-Z]{2,3}|[KNW][A-Z][0-9][A-Z]{1,3})$")
});
static MESSAGE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?:[0-9][A-Z]{2}|[A-Z][A-Z0-9]{2})-(?:[1-9][0-9]{3,}|[0-9]{3})[PMR]?$")
});

/// Compiles one of the fixed patterns in this crate.
#[expect(
    clippy::expect_used,
    reason = "built-in patterns are string literals exercised by the unit tests"
)]
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

/// A rule applied to a field value.
///
/// # Examples
///
/// ```
/// use typedpacket::message::domain::Validator;
///
/// assert!(Validator::Date.check("Date", "01/02/2024").is_ok());
/// assert!(Validator::Date.check("Date", "13/02/2024").is_err());
/// assert!(Validator::Date.check("Date", "").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    /// A calendar date in `MM/DD/YYYY` form.
    Date,
    /// A 24-hour time in `HH:MM` form.
    Time,
    /// A non-negative integer.
    CardinalNumber,
    /// A decimal number.
    RealNumber,
    /// A telephone number, optionally with a leading label and extension.
    PhoneNumber,
    /// An FCC amateur call sign.
    CallSign,
    /// A packet message number such as `XND-123P`.
    MessageNumber,
    /// One of a fixed list of values, matched exactly.
    Choices(Vec<String>),
    /// Marks a field not declared by the message type; always fails.
    Unrecognized,
}

impl Validator {
    /// Checks a value, labelling any problem with the field label.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldProblem`] describing why the value was rejected.
    pub fn check(&self, label: &str, value: &str) -> Result<(), FieldProblem> {
        if let Self::Unrecognized = self {
            return Err(FieldProblem::Unrecognized {
                tag: label.to_owned(),
            });
        }
        if value.is_empty() {
            return Ok(());
        }
        match self {
            Self::Date => check_date(label, value),
            Self::Time => check_pattern(&TIME, label, value, "a time in HH:MM form"),
            Self::CardinalNumber => {
                check_pattern(&CARDINAL_NUMBER, label, value, "a whole number")
            }
            Self::RealNumber => check_pattern(&REAL_NUMBER, label, value, "a number"),
            Self::PhoneNumber => check_pattern(&PHONE_NUMBER, label, value, "a telephone number"),
            Self::CallSign => check_pattern(&CALL_SIGN, label, value, "an FCC call sign"),
            Self::MessageNumber => check_pattern(
                &MESSAGE_NUMBER,
                label,
                value,
                "a message number in XXX-###P form",
            ),
            Self::Choices(choices) => {
                if choices.iter().any(|choice| choice == value) {
                    Ok(())
                } else {
                    Err(FieldProblem::NotAChoice {
                        label: label.to_owned(),
                        value: value.to_owned(),
                        choices: choices.clone(),
                    })
                }
            }
            Self::Unrecognized => Ok(()),
        }
    }

    /// Creates a choices validator from string literals.
    #[must_use]
    pub fn choices(choices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Choices(choices.into_iter().map(Into::into).collect())
    }
}

fn check_pattern(
    pattern: &Regex,
    label: &str,
    value: &str,
    expected: &'static str,
) -> Result<(), FieldProblem> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(FieldProblem::invalid_format(label, value, expected))
    }
}

// Parsing alone accepts "1/2/2024"; the round trip insists on zero padding.
fn check_date(label: &str, value: &str) -> Result<(), FieldProblem> {
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) if date.format(DATE_FORMAT).to_string() == value => Ok(()),
        _ => Err(FieldProblem::invalid_format(
            label,
            value,
            "a date in MM/DD/YYYY form",
        )),
    }
}
