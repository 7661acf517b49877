//! Streaming form encoder.
//!
//! An [`Encoder`] owns a writer and a set of [`Options`], and writes one form
//! body per [`Encoder::encode`] call:
//!
//! ```rust
//! use serde::Serialize;
//! use serde_form::Encoder;
//!
//! #[derive(Serialize)]
//! struct Search {
//!     q: String,
//!     page: u32,
//! }
//!
//! let mut encoder = Encoder::new(Vec::new()).delimit_with('/').keep_zeros(true);
//! encoder.encode(&Search { q: "a b".into(), page: 0 }).unwrap();
//!
//! assert_eq!(encoder.into_inner(), b"page=0&q=a+b");
//! ```
//!
//! The body is rendered in full before the first byte is written, so an
//! encoding failure never leaves partial output behind.

use crate::{to_string_with_options, Error, Options, Result};
use serde::Serialize;
use std::io::{self, Write};
use tracing::debug;

/// Writes form bodies to an underlying writer.
#[derive(Debug)]
pub struct Encoder<W> {
    writer: W,
    options: Options,
}

impl<W: Write> Encoder<W> {
    /// Creates an encoder with the default options.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, Options::default())
    }

    pub fn with_options(writer: W, options: Options) -> Self {
        Encoder { writer, options }
    }

    /// Sets the composite key delimiter.
    #[must_use]
    pub fn delimit_with(mut self, delimiter: char) -> Self {
        self.options.delimiter = delimiter;
        self
    }

    /// Sets the key escape character.
    #[must_use]
    pub fn escape_with(mut self, escape: char) -> Self {
        self.options.escape = escape;
        self
    }

    /// Sets whether zero values are rendered literally.
    #[must_use]
    pub fn keep_zeros(mut self, zeros: bool) -> Self {
        self.options.zeros = zeros;
        self
    }

    /// Returns the options used for every [`Encoder::encode`] call.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Encodes `value` and writes the form body.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the value cannot be
    /// encoded (nothing is written then), [`Error::ShortWrite`] if the writer
    /// stops accepting bytes and [`Error::Io`] for other writer failures.
    pub fn encode<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let body = to_string_with_options(value, &self.options)?;
        write_fully(&mut self.writer, body.as_bytes())
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Writes all of `buf`, reporting how far a stalled writer got.
pub(crate) fn write_fully<W: Write + ?Sized>(writer: &mut W, buf: &[u8]) -> Result<()> {
    let mut written = 0;
    while written < buf.len() {
        match writer.write(&buf[written..]) {
            Ok(0) => {
                return Err(Error::ShortWrite {
                    written,
                    expected: buf.len(),
                })
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(Error::io(&e.to_string())),
        }
    }
    debug!(bytes = written, "wrote form body");
    Ok(())
}
