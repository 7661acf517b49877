//! Struct field tags and field lookup.
//!
//! A field tag has the form `name` or `name,omitempty`:
//!
//! - an empty `name` keeps the declared field name
//! - a `name` equal to [`Options::omitted_key`] (`-` by default) drops the field
//! - `omitempty` drops the key entirely when the field holds a zero value
//!
//! With serde, the tag is the field's serialized name:
//!
//! ```rust
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Query {
//!     #[serde(rename = "q")]
//!     text: String,
//!     #[serde(rename = "page,omitempty")]
//!     page: u32,
//!     #[serde(rename = "-")]
//!     cache_key: u64,
//! }
//!
//! let query = Query { text: "rust serde".into(), page: 0, cache_key: 7 };
//! assert_eq!(serde_form::to_string(&query).unwrap(), "q=rust+serde");
//! ```
//!
//! Decoders resolve incoming keys to fields with [`find_field`], driven by
//! static [`Field`] metadata that mirrors the struct declaration.

use crate::Options;

/// The parsed form of a field tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldTag<'a> {
    /// Key the field is encoded under.
    pub name: &'a str,
    /// Drop the key entirely when the field holds a zero value.
    pub omit_empty: bool,
}

impl<'a> FieldTag<'a> {
    /// Parses `tag` for a field declared as `declared`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_form::FieldTag;
    ///
    /// let tag = FieldTag::parse("Count", ",omitempty");
    /// assert_eq!(tag, FieldTag { name: "Count", omit_empty: true });
    ///
    /// let tag = FieldTag::parse("Count", "n");
    /// assert_eq!(tag, FieldTag { name: "n", omit_empty: false });
    /// ```
    #[must_use]
    pub fn parse(declared: &'a str, tag: &'a str) -> Self {
        let (name, flags) = match tag.split_once(',') {
            Some((name, flags)) => (name, Some(flags)),
            None => (tag, None),
        };
        FieldTag {
            name: if name.is_empty() { declared } else { name },
            omit_empty: flags == Some("omitempty"),
        }
    }

    /// Returns `true` if the field is dropped entirely.
    #[must_use]
    pub fn is_omitted(&self, options: &Options) -> bool {
        self.name == options.omitted_key
    }
}

/// Static description of one struct field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    /// Declared field name.
    pub name: &'static str,
    /// Field tag; empty when the field has none.
    pub tag: &'static str,
    /// Whether the field is visible outside its type.
    pub exported: bool,
    /// Fields of an embedded struct, searched after the outer fields.
    pub embedded: Option<&'static [Field]>,
}

impl Field {
    /// A visible, untagged field.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Field {
            name,
            tag: "",
            exported: true,
            embedded: None,
        }
    }

    /// A visible field with a tag.
    #[must_use]
    pub const fn tagged(name: &'static str, tag: &'static str) -> Self {
        Field {
            name,
            tag,
            exported: true,
            embedded: None,
        }
    }

    /// A field that is not visible and therefore never encoded or matched.
    #[must_use]
    pub const fn private(name: &'static str) -> Self {
        Field {
            name,
            tag: "",
            exported: false,
            embedded: None,
        }
    }

    /// An embedded struct whose fields are searched after the outer ones.
    #[must_use]
    pub const fn embedded(name: &'static str, fields: &'static [Field]) -> Self {
        Field {
            name,
            tag: "",
            exported: true,
            embedded: Some(fields),
        }
    }

    /// Resolves the field's tag; hidden fields resolve to the omitted key.
    #[must_use]
    pub fn tag<'a>(&'a self, options: &'a Options) -> FieldTag<'a> {
        if !self.exported {
            return FieldTag {
                name: &options.omitted_key,
                omit_empty: false,
            };
        }
        if self.tag.is_empty() {
            return FieldTag {
                name: self.name,
                omit_empty: false,
            };
        }
        FieldTag::parse(self.name, self.tag)
    }
}

/// Types that describe their fields for key lookup.
///
/// ```rust
/// use serde_form::{Field, FieldPath, FormFields, Options};
///
/// struct Audit;
/// impl FormFields for Audit {
///     const FIELDS: &'static [Field] = &[Field::new("Created"), Field::new("Name")];
/// }
///
/// struct User;
/// impl FormFields for User {
///     const FIELDS: &'static [Field] = &[
///         Field::tagged("Name", "name"),
///         Field::embedded("Audit", Audit::FIELDS),
///     ];
/// }
///
/// let options = Options::default();
/// assert_eq!(User::find_field("name", &options), Some(FieldPath::from(vec![0])));
/// assert_eq!(User::find_field("Created", &options), Some(FieldPath::from(vec![1, 0])));
/// assert_eq!(User::find_field("Missing", &options), None);
/// ```
pub trait FormFields {
    const FIELDS: &'static [Field];

    /// Resolves `name` to a field; see [`find_field`].
    fn find_field(name: &str, options: &Options) -> Option<FieldPath> {
        find_field(Self::FIELDS, name, options)
    }
}

/// Indices leading from the outer struct through embedded structs to a field.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FieldPath(Vec<usize>);

impl FieldPath {
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of embedded structs crossed to reach the field.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

impl From<Vec<usize>> for FieldPath {
    fn from(indices: Vec<usize>) -> Self {
        FieldPath(indices)
    }
}

/// Finds the field an incoming key refers to.
///
/// Lookup order:
///
/// 1. exact match against a visible, non-omitted field's name
/// 2. if [`Options::caseless`] is set, the first case-insensitive match
/// 3. depth-first search of embedded structs, in declaration order
#[must_use]
pub fn find_field(fields: &[Field], name: &str, options: &Options) -> Option<FieldPath> {
    let lowered = options.caseless.then(|| name.to_lowercase());
    let mut caseless_match = None;

    for (i, field) in fields.iter().enumerate() {
        let tag = field.tag(options);
        if tag.is_omitted(options) {
            continue;
        }
        if tag.name == name {
            return Some(FieldPath(vec![i]));
        }
        if let Some(lowered) = &lowered {
            if caseless_match.is_none() && tag.name.to_lowercase() == *lowered {
                caseless_match = Some(i);
            }
        }
    }

    if let Some(i) = caseless_match {
        return Some(FieldPath(vec![i]));
    }

    for (i, field) in fields.iter().enumerate() {
        let Some(inner) = field.embedded else {
            continue;
        };
        if field.tag(options).is_omitted(options) {
            continue;
        }
        if let Some(FieldPath(rest)) = find_field(inner, name, options) {
            let mut indices = Vec::with_capacity(rest.len() + 1);
            indices.push(i);
            indices.extend(rest);
            return Some(FieldPath(indices));
        }
    }

    None
}
