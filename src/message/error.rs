//! Error types for field validation and collaborator failures.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers. Recognition mismatches are not
//! errors and have no variant here.

use thiserror::Error;

/// A validation problem with a single field value.
///
/// Problems are reported per field and never stop a message from being
/// constructed, edited, or saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldProblem {
    /// A required field has no value.
    #[error("a value for the \"{label}\" field is required")]
    Required {
        /// Label of the field.
        label: String,
    },

    /// The value does not have the expected format.
    #[error("\"{value}\" is not a valid value for the \"{label}\" field; expected {expected}")]
    InvalidFormat {
        /// Label of the field.
        label: String,
        /// The offending value.
        value: String,
        /// Description of the accepted format.
        expected: &'static str,
    },

    /// The value is not one of the allowed choices.
    #[error("\"{value}\" is not one of the allowed values for the \"{label}\" field: {}", .choices.join(", "))]
    NotAChoice {
        /// Label of the field.
        label: String,
        /// The offending value.
        value: String,
        /// The allowed values.
        choices: Vec<String>,
    },

    /// The field is not defined for the message type it appeared in.
    #[error("the field \"{tag}\" is not defined for this message type")]
    Unrecognized {
        /// Tag of the unrecognized field.
        tag: String,
    },
}

impl FieldProblem {
    /// Creates a format problem.
    #[must_use]
    pub fn invalid_format(
        label: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidFormat {
            label: label.into(),
            value: value.into(),
            expected,
        }
    }

    /// Returns `true` if this problem flags a field unknown to the schema.
    #[must_use]
    pub const fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized { .. })
    }
}

/// Errors raised while parsing a raw message.
///
/// These come from the raw-message collaborator and are propagated to
/// callers unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RawMessageError {
    /// The input contained no message at all.
    #[error("message is empty")]
    Empty,

    /// A header line could not be parsed.
    #[error("malformed header on line {line}: {content:?}")]
    MalformedHeader {
        /// One-based line number of the offending header.
        line: usize,
        /// The offending line.
        content: String,
    },
}

impl RawMessageError {
    /// Creates a malformed header error.
    #[must_use]
    pub fn malformed_header(line: usize, content: impl Into<String>) -> Self {
        Self::MalformedHeader {
            line,
            content: content.into(),
        }
    }
}

/// Errors raised while parsing a form-encoded message body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormParseError {
    /// The body does not start with the form signature line.
    #[error("body is not a form")]
    NotAForm,

    /// The form type line is missing.
    #[error("form type line is missing")]
    MissingFormType,

    /// The version line is missing or does not have `pifo-form` shape.
    #[error("malformed version line: {0:?}")]
    MalformedVersion(String),

    /// A line is neither a header line nor a field line.
    #[error("malformed form line {line}: {content:?}")]
    MalformedLine {
        /// One-based line number within the body.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// A header line appears more than once or out of order.
    #[error("form header {0:?} is duplicated or out of order")]
    MisplacedHeader(String),

    /// A field tag appears more than once.
    #[error("field {0:?} appears more than once")]
    DuplicateField(String),

    /// The footer line is missing.
    #[error("form footer is missing")]
    MissingFooter,

    /// Field content follows the footer line.
    #[error("content follows the form footer")]
    ContentAfterFooter,
}

impl FormParseError {
    /// Creates a malformed line error.
    #[must_use]
    pub fn malformed_line(line: usize, content: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            content: content.into(),
        }
    }
}
