//! `PackItForms` form codec.
//!
//! An encoded form looks like:
//!
//! ```text
//! !SCCoPIFO!
//! #T: form-ics213.html
//! #V: 3.9-2.2
//! 10.: [Water main break]
//! !/ADDON!
//! ```
//!
//! Values are escaped so each fits on one line: `\` becomes `\\`, a newline
//! becomes `\n`, `]` becomes `` `] ``, and a value ending in a backtick gets
//! an extra `]]` so the closing bracket cannot be mistaken for an escape.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::message::domain::{ParsedForm, compile};
use crate::message::error::FormParseError;
use crate::message::ports::{FormCodec, FormCodecConfig, FormParseResult};

const SIGNATURE: &str = "!SCCoPIFO!";
const FOOTER: &str = "!/ADDON!";
const TYPE_PREFIX: &str = "#T: ";
const VERSION_PREFIX: &str = "#V: ";

static FIELD_LINE: LazyLock<Regex> = LazyLock::new(|| compile(r"^([-A-Za-z0-9.]+): \[(.*)\]$"));

/// Codec for `PackItForms` encoded bodies.
///
/// # Examples
///
/// ```
/// use typedpacket::message::adapters::PifoCodec;
/// use typedpacket::message::domain::{FormHeader, ParsedForm};
/// use typedpacket::message::ports::FormCodec;
///
/// let codec = PifoCodec::default();
/// let form = ParsedForm::new(FormHeader::new("form-ics213.html", "2.2", "3.9"))
///     .with_entry("12.", "line one\nline two");
/// let body = codec.encode(&form);
/// assert!(body.contains("12.: [line one\\nline two]"));
/// assert_eq!(codec.parse(&body).expect("valid form"), form);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PifoCodec {
    config: FormCodecConfig,
}

impl PifoCodec {
    /// Creates a codec with the given configuration.
    #[must_use]
    pub const fn new(config: FormCodecConfig) -> Self {
        Self { config }
    }

    /// Returns the codec configuration.
    #[must_use]
    pub const fn config(&self) -> &FormCodecConfig {
        &self.config
    }

    fn defect(&self, error: FormParseError) -> FormParseResult<()> {
        if self.config.strict {
            return Err(error);
        }
        debug!(%error, "tolerating damaged form");
        Ok(())
    }
}

#[derive(Default)]
struct Seen {
    signature: bool,
    form_type: bool,
    version: bool,
    field: bool,
    footer: bool,
}

impl FormCodec for PifoCodec {
    fn is_form(&self, body: &str) -> bool {
        body.lines().next().map(str::trim_end) == Some(SIGNATURE)
    }

    fn parse(&self, body: &str) -> FormParseResult<ParsedForm> {
        if !self.is_form(body) {
            return Err(FormParseError::NotAForm);
        }
        let mut form = ParsedForm {
            form_type: String::new(),
            form_version: String::new(),
            pifo_version: String::new(),
            fields: Vec::new(),
        };
        let mut seen = Seen::default();
        for (index, raw_line) in body.lines().enumerate() {
            let line = raw_line.trim_end_matches('\r');
            if line == SIGNATURE {
                if seen.signature {
                    self.defect(FormParseError::MisplacedHeader(SIGNATURE.to_owned()))?;
                }
                seen.signature = true;
            } else if let Some(form_type) = line.strip_prefix(TYPE_PREFIX) {
                if seen.form_type || seen.field || seen.footer {
                    self.defect(FormParseError::MisplacedHeader(TYPE_PREFIX.trim().to_owned()))?;
                }
                form_type.trim().clone_into(&mut form.form_type);
                seen.form_type = true;
            } else if let Some(version) = line.strip_prefix(VERSION_PREFIX) {
                if seen.version || seen.field || seen.footer {
                    self.defect(FormParseError::MisplacedHeader(
                        VERSION_PREFIX.trim().to_owned(),
                    ))?;
                }
                match version.trim().split_once('-') {
                    Some((pifo, form_version)) if !form_version.contains('-') => {
                        pifo.clone_into(&mut form.pifo_version);
                        form_version.clone_into(&mut form.form_version);
                    }
                    _ => self.defect(FormParseError::MalformedVersion(version.to_owned()))?,
                }
                seen.version = true;
            } else if line == FOOTER {
                if seen.footer {
                    self.defect(FormParseError::MisplacedHeader(FOOTER.to_owned()))?;
                }
                seen.footer = true;
            } else if !line.is_empty() {
                let Some(captures) = FIELD_LINE.captures(line) else {
                    self.defect(FormParseError::malformed_line(index + 1, line))?;
                    continue;
                };
                if seen.footer {
                    self.defect(FormParseError::ContentAfterFooter)?;
                }
                let tag = captures.get(1).map_or("", |m| m.as_str());
                let value = decode_value(captures.get(2).map_or("", |m| m.as_str()));
                seen.field = true;
                if let Some(existing) = form.fields.iter_mut().find(|entry| entry.tag == tag) {
                    self.defect(FormParseError::DuplicateField(tag.to_owned()))?;
                    existing.value = value;
                    continue;
                }
                form.push(tag, value);
            }
        }
        if !seen.form_type {
            self.defect(FormParseError::MissingFormType)?;
        }
        if !seen.version {
            self.defect(FormParseError::MalformedVersion(String::new()))?;
        }
        if !seen.footer {
            self.defect(FormParseError::MissingFooter)?;
        }
        Ok(form)
    }

    fn encode(&self, form: &ParsedForm) -> String {
        let mut body = format!(
            "{SIGNATURE}\n{TYPE_PREFIX}{}\n{VERSION_PREFIX}{}-{}\n",
            form.form_type, form.pifo_version, form.form_version
        );
        for entry in &form.fields {
            body.push_str(&entry.tag);
            body.push_str(": [");
            body.push_str(&encode_value(&entry.value));
            body.push_str("]\n");
        }
        body.push_str(FOOTER);
        body.push('\n');
        body
    }

    fn default_pifo_version(&self) -> &str {
        &self.config.default_pifo_version
    }
}

/// Escapes a value for a form field line.
#[must_use]
pub fn encode_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => encoded.push_str("\\\\"),
            '\n' => encoded.push_str("\\n"),
            ']' => encoded.push_str("`]"),
            _ => encoded.push(c),
        }
    }
    if encoded.ends_with('`') {
        encoded.push_str("]]");
    }
    encoded
}

/// Reverses [`encode_value`].
#[must_use]
pub fn decode_value(encoded: &str) -> String {
    let unwrapped = encoded
        .strip_suffix("`]]")
        .map_or_else(|| encoded.to_owned(), |rest| format!("{rest}`"));
    let mut decoded = String::with_capacity(unwrapped.len());
    let mut chars = unwrapped.chars().peekable();
    while let Some(c) = chars.next() {
        let unescaped = match (c, chars.peek().copied()) {
            ('\\', Some('\\')) => '\\',
            ('\\', Some('n')) => '\n',
            ('`', Some(']')) => ']',
            _ => {
                decoded.push(c);
                continue;
            }
        };
        chars.next();
        decoded.push(unescaped);
    }
    decoded
}
