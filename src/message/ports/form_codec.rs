//! Form codec port for form-encoded message bodies.

use crate::message::{domain::ParsedForm, error::FormParseError};

/// Result type for form parsing.
pub type FormParseResult<T> = Result<T, FormParseError>;

/// Port for reading and writing form-encoded bodies.
pub trait FormCodec: Send + Sync {
    /// Returns `true` if `body` looks like an encoded form.
    ///
    /// A cheap signature check; [`FormCodec::parse`] may still fail.
    fn is_form(&self, body: &str) -> bool;

    /// Parses an encoded form.
    ///
    /// # Errors
    ///
    /// Returns `FormParseError` if the body is not a form or, depending on
    /// the codec configuration, if it is structurally damaged.
    fn parse(&self, body: &str) -> FormParseResult<ParsedForm>;

    /// Encodes a form.
    fn encode(&self, form: &ParsedForm) -> String;

    /// Returns the encoding version written for newly created forms.
    fn default_pifo_version(&self) -> &str;
}

/// Configuration for form codecs.
///
/// # Examples
///
/// ```
/// use typedpacket::message::ports::FormCodecConfig;
///
/// let config = FormCodecConfig::default();
/// assert!(!config.strict);
/// assert_eq!(config.default_pifo_version, "3.2");
///
/// let strict = FormCodecConfig::strict();
/// assert!(strict.strict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCodecConfig {
    /// Encoding version written for forms that carry none of their own.
    pub default_pifo_version: String,
    /// Whether structural defects are reported instead of tolerated.
    pub strict: bool,
}

impl Default for FormCodecConfig {
    fn default() -> Self {
        Self {
            default_pifo_version: "3.2".to_owned(),
            strict: false,
        }
    }
}

impl FormCodecConfig {
    /// Creates a lenient configuration.
    ///
    /// Damaged lines are skipped and a missing footer is accepted, which is
    /// what received traffic needs.
    #[must_use]
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Creates a strict configuration that rejects any structural defect.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Sets the default encoding version.
    #[must_use]
    pub fn with_default_pifo_version(mut self, version: impl Into<String>) -> Self {
        self.default_pifo_version = version.into();
        self
    }
}
