//! Error types for form encoding.
//!
//! Failures fall into three groups:
//!
//! - **Configuration errors** ([`OptionsError`]): the [`Options`](crate::Options)
//!   are unusable. Detected before any encoding begins.
//! - **Value errors**: a value cannot be represented in a form, either because
//!   of its kind ([`Error::UnsupportedKind`]) or because its own textual
//!   conversion failed ([`Error::Marshal`]). Encoding stops at the first one.
//! - **Sink errors**: the destination did not accept the whole output
//!   ([`Error::ShortWrite`], [`Error::Io`]).
//!
//! No error ever comes with partial output: the complete form is built in
//! memory before anything is written.
//!
//! ## Examples
//!
//! ```rust
//! use serde_form::{to_string_with_options, Error, Options, OptionsError};
//!
//! let result = to_string_with_options(&1, &Options::zeroed());
//! assert!(matches!(result, Err(Error::Options(OptionsError::InvalidOptions))));
//! ```

use crate::ser::Kind;
use std::fmt;
use thiserror::Error;

/// Everything that can go wrong while encoding a value as a form.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing the encoded form
    #[error("IO error: {0}")]
    Io(String),

    /// The writer stopped accepting bytes before the whole form was written
    #[error("could not write data completely: wrote {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    /// A value of a kind that has no form representation
    #[error("{type_name} has unsupported kind {kind}")]
    UnsupportedKind { type_name: String, kind: Kind },

    /// A value failed to produce its own textual form
    #[error("{type_name} could not be marshaled as text: {message}")]
    Marshal { type_name: String, message: String },

    /// A map key whose bytes are not valid UTF-8
    #[error("{type_name} map key is not valid UTF-8")]
    NonUtf8Key { type_name: String },

    /// A struct field renamed to a tag without a name segment
    #[error("struct {type_name} has field tag {tag:?} with an empty name")]
    InvalidTag { type_name: String, tag: String },

    /// Unusable options
    #[error(transparent)]
    Options(#[from] OptionsError),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

/// Problems found by [`Options::validate`](crate::Options::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Every option is at its zero value
    #[error("invalid options")]
    InvalidOptions,

    #[error("invalid delimiter")]
    InvalidDelimiter,

    #[error("invalid escape")]
    InvalidEscape,

    #[error("invalid implicit key")]
    InvalidImplicitKey,

    #[error("invalid omitted key")]
    InvalidOmittedKey,
}

impl Error {
    /// Creates an error for a value whose kind cannot be encoded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_form::{Error, Kind};
    ///
    /// let err = Error::unsupported_kind("Vec<u32>", Kind::Seq);
    /// assert_eq!(err.to_string(), "Vec<u32> has unsupported kind seq");
    /// ```
    pub fn unsupported_kind(type_name: &str, kind: Kind) -> Self {
        Error::UnsupportedKind {
            type_name: type_name.to_string(),
            kind,
        }
    }

    /// Creates an error for a failed textual conversion.
    pub fn marshal<T: fmt::Display>(type_name: &str, message: T) -> Self {
        Error::Marshal {
            type_name: type_name.to_string(),
            message: message.to_string(),
        }
    }

    pub fn non_utf8_key(type_name: &str) -> Self {
        Error::NonUtf8Key {
            type_name: type_name.to_string(),
        }
    }

    /// Creates an error for a field tag with an empty name segment.
    pub fn invalid_tag(type_name: &str, tag: &str) -> Self {
        Error::InvalidTag {
            type_name: type_name.to_string(),
            tag: tag.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_form::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Attributes a custom failure to the value type that raised it.
    ///
    /// A `Serialize` impl can only report failures through
    /// [`serde::ser::Error::custom`], which knows nothing about the value.
    /// The first container that sees such an error names the type; errors
    /// that already carry a type pass through unchanged.
    pub(crate) fn within(self, type_name: &str) -> Self {
        match self {
            Error::Custom(message) => Error::marshal(type_name, message),
            other => other,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
