//! Configuration options for form encoding.
//!
//! [`Options`] controls how composite keys are built and how zero values are
//! rendered. The same options must be used to decode what was encoded, so the
//! delimiter and escape characters travel with the data's producer.
//!
//! ## Examples
//!
//! ```rust
//! use serde_form::{to_string_with_options, Options};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! #[derive(Serialize)]
//! struct Line { from: Point, to: Point }
//!
//! let line = Line { from: Point { x: 0, y: 1 }, to: Point { x: 2, y: 3 } };
//!
//! // Join nested keys with '/' and keep zero values literally.
//! let options = Options::new().with_delimiter('/').with_zeros(true);
//! let form = to_string_with_options(&line, &options).unwrap();
//! assert_eq!(form, "from%2Fx=0&from%2Fy=1&to%2Fx=2&to%2Fy=3");
//! ```

use crate::error::OptionsError;
use serde::Deserialize;

/// Default delimiter between composite key segments.
pub const STANDARD_DELIMITER: char = '.';
/// Default escape for delimiters (and for itself) inside key segments.
pub const STANDARD_ESCAPE: char = '\\';
/// Default marker for a position with no natural key.
pub const STANDARD_IMPLICIT_KEY: &str = "_";
/// Default field name that drops a struct field entirely.
pub const STANDARD_OMITTED_KEY: &str = "-";

/// Configuration options for form encoding and decoding.
///
/// `Default` yields the standard options: no zero retention, strict and
/// case-sensitive decoding, `.` as delimiter, `\` as escape, `_` as implicit
/// key and `-` as omitted key.
///
/// Options are plain values. Every encoding call borrows them for its whole
/// duration, so sharing one instance between threads only requires that it is
/// not mutated while in use.
///
/// # Examples
///
/// ```rust
/// use serde_form::Options;
///
/// let options = Options::new()
///     .with_delimiter('|')
///     .with_escape('^')
///     .with_caseless(true);
/// assert!(options.validate().is_ok());
///
/// assert!(!Options::zeroed().is_valid());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Keep zero values in their literal form instead of the empty string.
    pub zeros: bool,
    /// Ignore unknown keys and other recoverable problems when decoding.
    pub tolerant: bool,
    /// Fall back to case-insensitive field matching when decoding.
    pub caseless: bool,
    pub delimiter: char,
    pub escape: char,
    pub implicit_key: String,
    pub omitted_key: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            zeros: false,
            tolerant: false,
            caseless: false,
            delimiter: STANDARD_DELIMITER,
            escape: STANDARD_ESCAPE,
            implicit_key: STANDARD_IMPLICIT_KEY.to_string(),
            omitted_key: STANDARD_OMITTED_KEY.to_string(),
        }
    }
}

impl Options {
    /// Creates the standard options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_form::Options;
    ///
    /// let options = Options::new();
    /// assert_eq!(options.delimiter, '.');
    /// assert_eq!(options.escape, '\\');
    /// assert!(!options.zeros);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias of [`Options::new`].
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    /// Creates options with every field at its zero value.
    ///
    /// These options never validate; they stand for "nothing was configured".
    #[must_use]
    pub fn zeroed() -> Self {
        Options {
            zeros: false,
            tolerant: false,
            caseless: false,
            delimiter: '\0',
            escape: '\0',
            implicit_key: String::new(),
            omitted_key: String::new(),
        }
    }

    /// Sets whether zero values keep their literal form (`0`, `false`, ...).
    ///
    /// By default they are encoded as the empty string.
    #[must_use]
    pub fn with_zeros(mut self, zeros: bool) -> Self {
        self.zeros = zeros;
        self
    }

    /// Sets whether decoding tolerates unknown or malformed keys.
    #[must_use]
    pub fn with_tolerant(mut self, tolerant: bool) -> Self {
        self.tolerant = tolerant;
        self
    }

    /// Sets whether field lookup falls back to case-insensitive matching.
    #[must_use]
    pub fn with_caseless(mut self, caseless: bool) -> Self {
        self.caseless = caseless;
        self
    }

    /// Sets the character that joins composite key segments.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the character that escapes delimiters (and itself) in key segments.
    #[must_use]
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    /// Sets the marker for positions with no natural key.
    #[must_use]
    pub fn with_implicit_key(mut self, implicit_key: impl Into<String>) -> Self {
        self.implicit_key = implicit_key.into();
        self
    }

    /// Sets the field name that drops a struct field entirely.
    #[must_use]
    pub fn with_omitted_key(mut self, omitted_key: impl Into<String>) -> Self {
        self.omitted_key = omitted_key.into();
        self
    }

    /// Checks that the options can be used for encoding or decoding.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in this order: the options are
    /// entirely zero, the delimiter is `'\0'`, the escape is `'\0'`, the
    /// implicit key is empty, the omitted key is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_form::{Options, OptionsError};
    ///
    /// let options = Options::new().with_escape('\0');
    /// assert_eq!(options.validate(), Err(OptionsError::InvalidEscape));
    /// ```
    pub fn validate(&self) -> Result<(), OptionsError> {
        if *self == Options::zeroed() {
            return Err(OptionsError::InvalidOptions);
        }
        if self.delimiter == '\0' {
            return Err(OptionsError::InvalidDelimiter);
        }
        if self.escape == '\0' {
            return Err(OptionsError::InvalidEscape);
        }
        if self.implicit_key.is_empty() {
            return Err(OptionsError::InvalidImplicitKey);
        }
        if self.omitted_key.is_empty() {
            return Err(OptionsError::InvalidOmittedKey);
        }
        Ok(())
    }

    /// Returns `true` if [`Options::validate`] succeeds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
