//! The uniform field model shared by every message kind.
//!
//! A [`Field`] is the same thing whether it belongs to a receipt, a form, or
//! was synthesized for a form entry the message type does not declare. Its
//! value is always text; validators give it meaning.

use chrono::NaiveDateTime;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::validator::{DATE_FORMAT, Validator};
use crate::message::error::FieldProblem;

/// Time format used by packet forms.
pub const TIME_FORMAT: &str = "%H:%M";

/// Combined date and time format used by receipts.
pub const DATE_TIME_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Identity of a field within one message.
///
/// Declared fields come from the message type's schema; unknown fields are
/// synthesized from input the schema does not cover so it is not lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "tag", rename_all = "snake_case")]
pub enum FieldKey {
    /// A field declared by the message type.
    Declared(String),
    /// A field found in the input but not declared by the message type.
    Unknown(String),
}

impl FieldKey {
    /// Returns the field tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Declared(tag) | Self::Unknown(tag) => tag,
        }
    }

    /// Returns `true` for fields not declared by the message type.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Well-known role a field can play, independent of its tag.
///
/// Form subject lines are assembled from the fields holding these roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    /// The origin message number.
    OriginMessageNumber,
    /// The handling order.
    Handling,
    /// The human subject of the message.
    Subject,
    /// The form tag carried in the subject line.
    FormTag,
    /// The legacy severity code carried in the subject line.
    Severity,
}

/// Default value of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    /// No default; the field starts empty.
    #[default]
    Empty,
    /// A fixed default.
    Text(String),
    /// Today's date, `MM/DD/YYYY`.
    CurrentDate,
    /// The current time, `HH:MM`.
    CurrentTime,
    /// The current date and time, `MM/DD/YYYY HH:MM`.
    CurrentDateTime,
}

impl DefaultValue {
    /// Resolves the default against the supplied local time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use typedpacket::message::domain::DefaultValue;
    ///
    /// let now = NaiveDate::from_ymd_opt(2024, 1, 2)
    ///     .and_then(|date| date.and_hms_opt(9, 5, 0))
    ///     .expect("valid timestamp");
    /// assert_eq!(DefaultValue::CurrentDateTime.resolve(&now), "01/02/2024 09:05");
    /// ```
    #[must_use]
    pub fn resolve(&self, now: &NaiveDateTime) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::CurrentDate => now.format(DATE_FORMAT).to_string(),
            Self::CurrentTime => now.format(TIME_FORMAT).to_string(),
            Self::CurrentDateTime => now.format(DATE_TIME_FORMAT).to_string(),
        }
    }

    /// Returns `true` if the default depends on the time it is computed.
    #[must_use]
    pub const fn is_derived(&self) -> bool {
        matches!(
            self,
            Self::CurrentDate | Self::CurrentTime | Self::CurrentDateTime
        )
    }
}

/// Declaration of one field in a message type's schema.
///
/// Schemas are plain data and can be loaded from JSON.
///
/// # Examples
///
/// ```
/// use typedpacket::message::domain::{DefaultValue, FieldDef, Validator};
///
/// let def = FieldDef::new("1a.", "Date")
///     .required()
///     .with_validator(Validator::Date)
///     .with_default(DefaultValue::CurrentDate);
/// assert!(def.required);
/// assert_eq!(def.validators, vec![Validator::Date]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Tag identifying the field within its message.
    pub tag: String,
    /// Human label.
    pub label: String,
    /// Whether a value is required.
    #[serde(default)]
    pub required: bool,
    /// Whether the value may span several lines.
    #[serde(default)]
    pub multiline: bool,
    /// Validators applied in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
    /// Default value for newly created messages.
    #[serde(default)]
    pub default: DefaultValue,
    /// Well-known role of the field, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<FieldRole>,
}

impl FieldDef {
    /// Creates an optional, unvalidated field declaration.
    #[must_use]
    pub fn new(tag: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            label: label.into(),
            required: false,
            multiline: false,
            validators: Vec::new(),
            default: DefaultValue::Empty,
            role: None,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as multi-line.
    #[must_use]
    pub const fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Appends a validator.
    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = default;
        self
    }

    /// Assigns a well-known role.
    #[must_use]
    pub const fn with_role(mut self, role: FieldRole) -> Self {
        self.role = Some(role);
        self
    }
}

/// A field of a typed message: its declaration plus its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    key: FieldKey,
    def: FieldDef,
    value: String,
}

impl Field {
    /// Creates an empty declared field.
    #[must_use]
    pub fn declared(def: FieldDef) -> Self {
        Self {
            key: FieldKey::Declared(def.tag.clone()),
            def,
            value: String::new(),
        }
    }

    /// Creates a declared field holding its default value.
    #[must_use]
    pub fn with_default(def: FieldDef, clock: &impl Clock) -> Self {
        let mut field = Self::declared(def);
        field.value = field.default_value(clock);
        field
    }

    /// Creates a field for a tag the message type does not declare.
    ///
    /// The field behaves like any other, but it never validates, so editors
    /// can flag it while the value still survives re-encoding.
    #[must_use]
    pub fn unknown(tag: impl Into<String>, value: impl Into<String>) -> Self {
        let owned_tag = tag.into();
        Self {
            key: FieldKey::Unknown(owned_tag.clone()),
            def: FieldDef::new(owned_tag.clone(), owned_tag)
                .with_validator(Validator::Unrecognized),
            value: value.into(),
        }
    }

    /// Returns the field's identity.
    #[must_use]
    pub const fn key(&self) -> &FieldKey {
        &self.key
    }

    /// Returns the field tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        self.key.tag()
    }

    /// Returns the human label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.def.label
    }

    /// Returns the field declaration.
    #[must_use]
    pub const fn def(&self) -> &FieldDef {
        &self.def
    }

    /// Returns whether the field is required.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.def.required
    }

    /// Returns the field's well-known role, if any.
    #[must_use]
    pub const fn role(&self) -> Option<FieldRole> {
        self.def.role
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Stores a new value verbatim.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Computes the field's default value.
    ///
    /// Derived defaults are evaluated against `clock` on every call.
    #[must_use]
    pub fn default_value(&self, clock: &impl Clock) -> String {
        self.def.default.resolve(&clock.local().naive_local())
    }

    /// Validates the current value.
    ///
    /// The required check runs first, then each validator in declaration
    /// order; the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`FieldProblem`] found.
    pub fn validate(&self) -> Result<(), FieldProblem> {
        if self.def.required && self.value.is_empty() {
            return Err(FieldProblem::Required {
                label: self.def.label.clone(),
            });
        }
        self.def
            .validators
            .iter()
            .try_for_each(|validator| validator.check(&self.def.label, &self.value))
    }

    /// Returns `true` if the current value passes validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
