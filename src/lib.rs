//! # serde_form
//!
//! A Serde-compatible encoder for nested `application/x-www-form-urlencoded`
//! forms.
//!
//! ## What does it produce?
//!
//! Any `T: Serialize` is turned into flat `key=value` pairs. Nested structs,
//! maps and sequences become composite keys joined by a delimiter (`.` by
//! default), and delimiters occurring inside a key segment are escaped (`\` by
//! default) so the original path can always be recovered.
//!
//! ## Key Features
//!
//! - **Reversible Keys**: composite keys split back into their exact segments
//! - **Zero Elision**: zero values render as the empty string unless
//!   [`Options::zeros`] is set
//! - **Field Tags**: `#[serde(rename = "name,omitempty")]` and `"-"` control
//!   key names and omission
//! - **Rich Scalars**: timestamps ([`time`]), URLs and custom textual forms
//!   ([`text`]) render as single values
//! - **Deterministic Output**: pairs are sorted by key, then by value
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! serde_form = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ```rust
//! use serde::Serialize;
//! use serde_form::to_string;
//!
//! #[derive(Serialize)]
//! struct Address {
//!     city: String,
//!     zip: u32,
//! }
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: String,
//!     tags: Vec<String>,
//!     home: Address,
//! }
//!
//! let user = User {
//!     name: "Ada Lovelace".to_string(),
//!     tags: vec!["admin".to_string(), "ops".to_string()],
//!     home: Address { city: "London".to_string(), zip: 0 },
//! };
//!
//! assert_eq!(
//!     to_string(&user).unwrap(),
//!     "home.city=London&home.zip=&name=Ada+Lovelace&tags.0=admin&tags.1=ops"
//! );
//! ```
//!
//! ### Working with the pairs
//!
//! [`to_values`] returns the flattened pairs before percent-encoding:
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! let mut prices = BTreeMap::new();
//! prices.insert("a.b", 1.5);
//! prices.insert("c", 1e6);
//!
//! let values = serde_form::to_values(&prices).unwrap();
//! assert_eq!(values.get("a\\.b"), Some("1.5"));
//! assert_eq!(values.get("c"), Some("1e+06"));
//! ```
//!
//! ## Logging
//!
//! Entry points emit `tracing` events at `debug` level and dropped fields at
//! `trace` level. No subscriber is installed by the library.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Encoding a flat struct
//! - **`nested.rs`** - Composite keys for nested structs, maps and sequences
//! - **`custom_options.rs`** - Delimiters, escapes and zero values
//! - **`writer.rs`** - Streaming forms with [`Encoder`]
//!
//! Run any example with: `cargo run --example <name>`

pub mod encoder;
pub mod error;
pub mod fields;
pub mod key;
pub mod map;
pub mod node;
pub mod options;
pub mod scalar;
pub mod ser;
pub mod text;
pub mod time;
pub mod values;

pub use encoder::Encoder;
pub use error::{Error, OptionsError, Result};
pub use fields::{find_field, Field, FieldPath, FieldTag, FormFields};
pub use map::NodeMap;
pub use node::Node;
pub use options::Options;
pub use ser::{Classified, Kind, Serializer};
pub use values::Values;

use serde::Serialize;
use std::io;
use tracing::debug;

/// Encode any `T: Serialize` into its [`Node`] tree.
///
/// The options are validated before anything is encoded. A top-level scalar
/// that is a zero value collapses to the empty string unless `options.zeros`
/// is set; a top-level composite always keeps its entries.
///
/// # Examples
///
/// ```rust
/// use serde_form::{to_node, Node, Options};
///
/// let node = to_node(&vec!["a", ""], &Options::default()).unwrap();
/// assert_eq!(node.get("0"), Some(&Node::from("a")));
/// assert_eq!(node.get("1"), Some(&Node::empty()));
/// ```
///
/// # Errors
///
/// Returns an error if the options are invalid or the value cannot be
/// encoded (composite map keys, failed textual conversions, empty tag names).
pub fn to_node<T>(value: &T, options: &Options) -> Result<Node>
where
    T: ?Sized + Serialize,
{
    options.validate()?;
    let classified = ser::classify(value, options)?;
    Ok(classified.into_root(options))
}

/// Encode any `T: Serialize` into flat [`Values`] with the default options.
///
/// # Errors
///
/// Returns an error if the value cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_values<T>(value: &T) -> Result<Values>
where
    T: ?Sized + Serialize,
{
    to_values_with_options(value, &Options::default())
}

/// Encode any `T: Serialize` into flat [`Values`] with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_form::{to_values_with_options, Options};
///
/// let options = Options::new().with_zeros(true);
/// let values = to_values_with_options(&vec![0, 1], &options).unwrap();
/// assert_eq!(values.get("0"), Some("0"));
/// ```
///
/// # Errors
///
/// Returns an error if the options are invalid or the value cannot be
/// encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_values_with_options<T>(value: &T, options: &Options) -> Result<Values>
where
    T: ?Sized + Serialize,
{
    let node = to_node(value, options)?;
    let values = node.values(options.delimiter, options.escape);
    debug!(keys = values.len(), "encoded form values");
    Ok(values)
}

/// Encode any `T: Serialize` as a form body with the default options.
///
/// # Examples
///
/// ```rust
/// use serde_form::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x=1&y=2");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &Options::default())
}

/// Encode any `T: Serialize` as a form body with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_form::{to_string_with_options, Options};
/// use std::collections::BTreeMap;
///
/// let mut map = BTreeMap::new();
/// map.insert("a_b", BTreeMap::from([("c", true)]));
///
/// let options = Options::new().with_delimiter('_').with_escape('!');
/// assert_eq!(to_string_with_options(&map, &options).unwrap(), "a%21_b_c=true");
/// ```
///
/// # Errors
///
/// Returns an error if the options are invalid or the value cannot be
/// encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &Options) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let body = to_values_with_options(value, options)?.encode();
    debug!(len = body.len(), "encoded form body");
    Ok(body)
}

/// Encode any `T: Serialize` as a form body into a writer.
///
/// # Examples
///
/// ```rust
/// use serde_form::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &("x", 1)).unwrap();
/// assert_eq!(buffer, b"0=x&1=1");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &Options::default())
}

/// Encode any `T: Serialize` as a form body into a writer with custom options.
///
/// # Errors
///
/// Returns an error if encoding fails, [`Error::ShortWrite`] if the writer
/// stops accepting bytes, and [`Error::Io`] for other writer failures.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &Options) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let body = to_string_with_options(value, options)?;
    encoder::write_fully(&mut writer, body.as_bytes())
}
