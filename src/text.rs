//! Values with a custom textual form.
//!
//! A type that knows how to render itself as a single string implements
//! [`MarshalText`] and is serialized through [`serialize`] or the [`Text`]
//! wrapper. Its text becomes a scalar, and a rendering failure aborts the
//! whole encoding with [`Error::Marshal`](crate::Error::Marshal).
//!
//! ```rust
//! use serde::Serialize;
//! use serde_form::text::MarshalText;
//!
//! struct Rgb(u8, u8, u8);
//!
//! impl MarshalText for Rgb {
//!     type Error = std::convert::Infallible;
//!
//!     fn marshal_text(&self) -> Result<String, Self::Error> {
//!         Ok(format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2))
//!     }
//! }
//!
//! #[derive(Serialize)]
//! struct Theme {
//!     #[serde(serialize_with = "serde_form::text::serialize")]
//!     accent: Rgb,
//! }
//!
//! let theme = Theme { accent: Rgb(255, 128, 0) };
//! assert_eq!(serde_form::to_string(&theme).unwrap(), "accent=%23ff8000");
//! ```

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use std::any::type_name;
use std::fmt;

/// Conversion of a value into its textual form.
pub trait MarshalText {
    type Error: fmt::Display;

    fn marshal_text(&self) -> Result<String, Self::Error>;
}

/// Serializes a value as its textual form.
///
/// Intended for `#[serde(serialize_with = "serde_form::text::serialize")]`.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: MarshalText + ?Sized,
    S: Serializer,
{
    match value.marshal_text() {
        Ok(text) => serializer.serialize_str(&text),
        Err(err) => Err(S::Error::custom(format_args!(
            "{}: {}",
            type_name::<T>(),
            err
        ))),
    }
}

/// Wraps a [`MarshalText`] value so it serializes as its textual form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Text<T>(pub T);

impl<T: MarshalText> Serialize for Text<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(&self.0, serializer)
    }
}
