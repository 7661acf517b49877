//! Form serialization.
//!
//! This module provides the [`Serializer`] that classifies a Rust value and
//! builds its [`Node`] tree.
//!
//! ## Overview
//!
//! Each serde data-model call is classified as one of:
//!
//! - **Scalar**: booleans, numbers, chars, strings, byte sequences, unit
//!   variants, timestamps and anything that serializes itself as a string
//!   (URLs, [`MarshalText`](crate::text::MarshalText) types)
//! - **Composite**: structs, maps, sequences, tuples and data-carrying enum
//!   variants, keyed by field name, map key, index or variant name
//! - **Transparent**: options and newtypes, which classify their content
//!
//! Alongside the node, every classification records whether the value is a
//! zero value (`false`, `0`, `""`, empty container, `None`, all-zero struct).
//! Zero values collapse to the empty string unless
//! [`Options::zeros`](crate::Options::zeros) is set, and `omitempty` fields
//! holding one are dropped.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_form::{Options, Serializer, Node};
//! use serde::Serialize;
//!
//! let options = Options::default();
//! let classified = vec![4, 5].serialize(Serializer::new(&options)).unwrap();
//!
//! assert!(!classified.is_zero());
//! assert_eq!(classified.node().get("1"), Some(&Node::from("5")));
//! ```

use crate::fields::FieldTag;
use crate::time::{TIME_TOKEN, ZERO_TIME_TOKEN};
use crate::{scalar, Error, Node, NodeMap, Options, Result};
use serde::{ser, Serialize};
use std::any::type_name;
use std::fmt;
use tracing::trace;

/// The shape of a classified value, as reported in errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Int,
    Uint,
    Float,
    Char,
    Str,
    Bytes,
    Unit,
    Option,
    Time,
    Seq,
    Tuple,
    Map,
    Struct,
    Variant,
}

impl Kind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Char => "char",
            Kind::Str => "string",
            Kind::Bytes => "bytes",
            Kind::Unit => "unit",
            Kind::Option => "option",
            Kind::Time => "time",
            Kind::Seq => "seq",
            Kind::Tuple => "tuple",
            Kind::Map => "map",
            Kind::Struct => "struct",
            Kind::Variant => "variant",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of classifying one value: its node, kind and zero-ness.
///
/// The node is kept in its literal form; zero elision is applied when the
/// value is placed into its parent (see [`Classified::into_node`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Classified {
    node: Node,
    kind: Kind,
    zero: bool,
    // Collapses to the empty string in a parent. Differs from `zero` only
    // for present options, which are never zero but elide like their content.
    blank: bool,
    byte: Option<u8>,
}

impl Classified {
    fn scalar(text: impl Into<String>, kind: Kind, zero: bool) -> Self {
        Self::leaf(Node::Scalar(text.into()), kind, zero)
    }

    /// Byte sequences stay text when they are valid UTF-8.
    fn bytes(bytes: Vec<u8>) -> Self {
        let zero = bytes.is_empty();
        let node = match String::from_utf8(bytes) {
            Ok(text) => Node::Scalar(text),
            Err(err) => Node::Bytes(err.into_bytes()),
        };
        Self::leaf(node, Kind::Bytes, zero)
    }

    fn composite(map: NodeMap, kind: Kind, zero: bool) -> Self {
        Self::leaf(Node::Composite(map), kind, zero)
    }

    fn leaf(node: Node, kind: Kind, zero: bool) -> Self {
        Classified {
            node,
            kind,
            zero,
            blank: zero,
            byte: None,
        }
    }

    #[must_use]
    pub fn node(&self) -> &Node {
        &self.node
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns `true` if the value is the zero value of its kind.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.zero
    }

    /// Returns the node to store in a parent, collapsing zero values to the
    /// empty string unless `options.zeros` is set.
    #[must_use]
    pub fn into_node(self, options: &Options) -> Node {
        if self.blank && !options.zeros {
            trace!(kind = %self.kind, "eliding zero value");
            Node::empty()
        } else {
            self.node
        }
    }

    /// Returns the node for a top-level value.
    ///
    /// Composites are kept as they are even when zero, so an all-zero struct
    /// still lists its keys and an empty one produces no pairs.
    #[must_use]
    pub fn into_root(self, options: &Options) -> Node {
        if self.node.is_composite() {
            self.node
        } else {
            self.into_node(options)
        }
    }
}

/// Classifies `value`, naming its type in any custom failure it raises.
pub(crate) fn classify<T>(value: &T, options: &Options) -> Result<Classified>
where
    T: ?Sized + Serialize,
{
    value
        .serialize(Serializer::new(options))
        .map_err(|e| e.within(type_name::<T>()))
}

/// The form serializer.
///
/// Serializes any `T: Serialize` into a [`Classified`] node. Created via
/// [`Serializer::new`] with the options to apply.
#[derive(Clone, Copy, Debug)]
pub struct Serializer<'o> {
    options: &'o Options,
}

impl<'o> Serializer<'o> {
    pub fn new(options: &'o Options) -> Self {
        Serializer { options }
    }

    #[must_use]
    pub fn options(&self) -> &'o Options {
        self.options
    }
}

impl<'o> ser::Serializer for Serializer<'o> {
    type Ok = Classified;
    type Error = Error;

    type SerializeSeq = SerializeSeq<'o>;
    type SerializeTuple = SerializeSeq<'o>;
    type SerializeTupleStruct = SerializeSeq<'o>;
    type SerializeTupleVariant = SerializeSeq<'o>;
    type SerializeMap = SerializeMap<'o>;
    type SerializeStruct = SerializeStruct<'o>;
    type SerializeStructVariant = SerializeStruct<'o>;

    fn serialize_bool(self, v: bool) -> Result<Classified> {
        Ok(Classified::scalar(
            if v { "true" } else { "false" },
            Kind::Bool,
            !v,
        ))
    }

    fn serialize_i8(self, v: i8) -> Result<Classified> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Classified> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Classified> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Classified> {
        Ok(Classified::scalar(v.to_string(), Kind::Int, v == 0))
    }

    fn serialize_i128(self, v: i128) -> Result<Classified> {
        Ok(Classified::scalar(v.to_string(), Kind::Int, v == 0))
    }

    fn serialize_u8(self, v: u8) -> Result<Classified> {
        Ok(Classified {
            byte: Some(v),
            ..Classified::scalar(v.to_string(), Kind::Uint, v == 0)
        })
    }

    fn serialize_u16(self, v: u16) -> Result<Classified> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Classified> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Classified> {
        Ok(Classified::scalar(v.to_string(), Kind::Uint, v == 0))
    }

    fn serialize_u128(self, v: u128) -> Result<Classified> {
        Ok(Classified::scalar(v.to_string(), Kind::Uint, v == 0))
    }

    fn serialize_f32(self, v: f32) -> Result<Classified> {
        Ok(Classified::scalar(scalar::format_f32(v), Kind::Float, v == 0.0))
    }

    fn serialize_f64(self, v: f64) -> Result<Classified> {
        Ok(Classified::scalar(scalar::format_f64(v), Kind::Float, v == 0.0))
    }

    fn serialize_char(self, v: char) -> Result<Classified> {
        Ok(Classified::scalar(v.to_string(), Kind::Char, v == '\0'))
    }

    fn serialize_str(self, v: &str) -> Result<Classified> {
        Ok(Classified::scalar(v, Kind::Str, v.is_empty()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Classified> {
        Ok(Classified::bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Classified> {
        Ok(Classified::scalar("", Kind::Option, true))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Classified>
    where
        T: ?Sized + Serialize,
    {
        // A present option is never zero itself, whatever it holds, but its
        // content still elides in a parent and keeps its entries at the root.
        let inner = classify(value, self.options)?;
        Ok(Classified {
            zero: false,
            byte: None,
            ..inner
        })
    }

    fn serialize_unit(self) -> Result<Classified> {
        Ok(Classified::scalar("", Kind::Unit, true))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Classified> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Classified> {
        Ok(Classified::scalar(variant, Kind::Str, false))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Classified>
    where
        T: ?Sized + Serialize,
    {
        let inner = classify(value, self.options)?;
        if name == TIME_TOKEN || name == ZERO_TIME_TOKEN {
            let zero = name == ZERO_TIME_TOKEN;
            return Ok(Classified {
                kind: Kind::Time,
                zero,
                blank: zero,
                byte: None,
                ..inner
            });
        }
        Ok(inner)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Classified>
    where
        T: ?Sized + Serialize,
    {
        let inner = classify(value, self.options)?;
        Ok(wrap_variant(Some(variant), inner, self.options))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeSeq<'o>> {
        Ok(SerializeSeq::new(self.options, len.unwrap_or(0), Kind::Seq, None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeSeq<'o>> {
        Ok(SerializeSeq::new(self.options, len, Kind::Tuple, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeSeq<'o>> {
        Ok(SerializeSeq::new(self.options, len, Kind::Tuple, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeSeq<'o>> {
        Ok(SerializeSeq::new(
            self.options,
            len,
            Kind::Tuple,
            Some(variant),
        ))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap<'o>> {
        Ok(SerializeMap {
            options: self.options,
            map: NodeMap::with_capacity(len.unwrap_or(0)),
            current_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<SerializeStruct<'o>> {
        Ok(SerializeStruct::new(self.options, name, len, None))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStruct<'o>> {
        Ok(SerializeStruct::new(self.options, name, len, Some(variant)))
    }
}

/// Nests a variant's payload under the variant name.
fn wrap_variant(variant: Option<&'static str>, inner: Classified, options: &Options) -> Classified {
    match variant {
        Some(variant) => {
            let mut map = NodeMap::with_capacity(1);
            map.insert(variant.to_string(), inner.into_node(options));
            Classified::composite(map, Kind::Variant, false)
        }
        None => inner,
    }
}

/// Builds sequences, tuples and tuple variants, keyed by index.
pub struct SerializeSeq<'o> {
    options: &'o Options,
    map: NodeMap,
    kind: Kind,
    variant: Option<&'static str>,
    // Raw bytes while every element so far has been a `u8`.
    bytes: Option<Vec<u8>>,
}

impl<'o> SerializeSeq<'o> {
    fn new(options: &'o Options, len: usize, kind: Kind, variant: Option<&'static str>) -> Self {
        SerializeSeq {
            options,
            map: NodeMap::with_capacity(len),
            kind,
            variant,
            bytes: (kind == Kind::Seq).then(Vec::new),
        }
    }

    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let element = classify(value, self.options)?;
        match element.byte {
            Some(b) => {
                if let Some(bytes) = self.bytes.as_mut() {
                    bytes.push(b);
                }
            }
            None => self.bytes = None,
        }
        let index = self.map.len().to_string();
        self.map.insert(index, element.into_node(self.options));
        Ok(())
    }

    fn finish(self) -> Result<Classified> {
        // Byte sequences are text, not indexed entries.
        if let Some(bytes) = self.bytes.filter(|b| !b.is_empty()) {
            return Ok(Classified::bytes(bytes));
        }
        let zero = self.map.is_empty();
        let inner = Classified::composite(self.map, self.kind, zero);
        Ok(wrap_variant(self.variant, inner, self.options))
    }
}

impl<'o> ser::SerializeSeq for SerializeSeq<'o> {
    type Ok = Classified;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Classified> {
        self.finish()
    }
}

impl<'o> ser::SerializeTuple for SerializeSeq<'o> {
    type Ok = Classified;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Classified> {
        self.finish()
    }
}

impl<'o> ser::SerializeTupleStruct for SerializeSeq<'o> {
    type Ok = Classified;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Classified> {
        self.finish()
    }
}

impl<'o> ser::SerializeTupleVariant for SerializeSeq<'o> {
    type Ok = Classified;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Classified> {
        self.finish()
    }
}

/// Builds maps, keyed by each key's scalar form.
pub struct SerializeMap<'o> {
    options: &'o Options,
    map: NodeMap,
    current_key: Option<String>,
}

impl<'o> ser::SerializeMap for SerializeMap<'o> {
    type Ok = Classified;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = classify(key, self.options)?;
        if key.node.is_composite() {
            return Err(Error::unsupported_kind(type_name::<T>(), key.kind));
        }
        match key.into_node(self.options) {
            Node::Scalar(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            Node::Bytes(_) => Err(Error::non_utf8_key(type_name::<T>())),
            Node::Composite(_) => Err(Error::custom("map key classified as composite")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        let value = classify(value, self.options)?;
        // Distinct keys with the same scalar form overwrite each other.
        self.map.insert(key, value.into_node(self.options));
        Ok(())
    }

    fn end(self) -> Result<Classified> {
        let zero = self.map.is_empty();
        Ok(Classified::composite(self.map, Kind::Map, zero))
    }
}

/// Builds structs and struct variants, keyed by field tag.
pub struct SerializeStruct<'o> {
    options: &'o Options,
    name: &'static str,
    map: NodeMap,
    zero: bool,
    variant: Option<&'static str>,
}

impl<'o> SerializeStruct<'o> {
    fn new(
        options: &'o Options,
        name: &'static str,
        len: usize,
        variant: Option<&'static str>,
    ) -> Self {
        SerializeStruct {
            options,
            name,
            map: NodeMap::with_capacity(len),
            zero: true,
            variant,
        }
    }

    fn field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let tag = FieldTag::parse("", key);
        if tag.name.is_empty() {
            return Err(Error::invalid_tag(self.name, key));
        }
        if tag.is_omitted(self.options) {
            trace!(type_name = self.name, field = key, "dropping omitted field");
            return Ok(());
        }

        let value = classify(value, self.options)?;
        self.zero &= value.zero;
        if tag.omit_empty && value.zero {
            trace!(type_name = self.name, field = tag.name, "dropping empty field");
            self.map.remove(tag.name);
            return Ok(());
        }
        self.map
            .insert(tag.name.to_string(), value.into_node(self.options));
        Ok(())
    }

    fn finish(self) -> Result<Classified> {
        let inner = Classified::composite(self.map, Kind::Struct, self.zero);
        Ok(wrap_variant(self.variant, inner, self.options))
    }
}

impl<'o> ser::SerializeStruct for SerializeStruct<'o> {
    type Ok = Classified;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<Classified> {
        self.finish()
    }
}

impl<'o> ser::SerializeStructVariant for SerializeStruct<'o> {
    type Ok = Classified;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<Classified> {
        self.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    fn build<T: Serialize>(value: &T, options: &Options) -> Classified {
        classify(value, options).unwrap()
    }

    fn scalar_of<T: Serialize>(value: &T) -> String {
        let options = Options::new().with_zeros(true);
        match build(value, &options).node {
            Node::Scalar(s) => s,
            other => panic!("Expected scalar, got {:?}", other),
        }
    }

    #[test]
    fn test_scalar_literals() {
        assert_eq!(scalar_of(&true), "true");
        assert_eq!(scalar_of(&false), "false");
        assert_eq!(scalar_of(&-42i32), "-42");
        assert_eq!(scalar_of(&42u64), "42");
        assert_eq!(scalar_of(&u128::MAX), u128::MAX.to_string());
        assert_eq!(scalar_of(&1.5f64), "1.5");
        assert_eq!(scalar_of(&1e6f64), "1e+06");
        assert_eq!(scalar_of(&0.1f32), "0.1");
        assert_eq!(scalar_of(&'x'), "x");
        assert_eq!(scalar_of(&"a.b\\c"), "a.b\\c");
    }

    #[test]
    fn test_zero_flags() {
        let options = Options::default();
        assert!(build(&0u8, &options).is_zero());
        assert!(build(&-0.0f64, &options).is_zero());
        assert!(build(&"", &options).is_zero());
        assert!(build(&Vec::<u32>::new(), &options).is_zero());
        assert!(build(&BTreeMap::<String, u8>::new(), &options).is_zero());
        assert!(build(&Option::<u8>::None, &options).is_zero());
        assert!(!build(&Some(0u8), &options).is_zero());
        assert!(!build(&f64::NAN, &options).is_zero());
        assert!(!build(&"x", &options).is_zero());
    }

    #[test]
    fn test_some_elides_its_content() {
        let options = Options::default();
        let built = build(&Some(0u8), &options);
        assert_eq!(built.node(), &Node::from("0"));
        assert_eq!(built.kind(), Kind::Uint);
        assert_eq!(built.into_node(&options), Node::empty());

        let keep = Options::new().with_zeros(true);
        assert_eq!(build(&Some(0u8), &keep).into_node(&keep), Node::from("0"));
    }

    #[test]
    fn test_some_keeps_root_composite() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let options = Options::default();
        let root = build(&Some(Point { x: 0, y: 0 }), &options).into_root(&options);
        let map = root.as_map().unwrap();
        assert_eq!(map.get("x"), Some(&Node::empty()));
        assert_eq!(map.get("y"), Some(&Node::empty()));

        let nested = build(&Some(Point { x: 0, y: 0 }), &options).into_node(&options);
        assert_eq!(nested, Node::empty());
    }

    #[test]
    fn test_byte_sequences_are_text() {
        let options = Options::default();
        let built = build(&vec![104u8, 105], &options);
        assert_eq!(built.node(), &Node::from("hi"));
        assert_eq!(built.kind(), Kind::Bytes);

        // Fixed-size arrays serialize as tuples and stay indexed.
        let built = build(&[104u8, 105], &options);
        assert_eq!(built.node().get("0"), Some(&Node::from("104")));
    }

    #[test]
    fn test_invalid_utf8_bytes_stay_raw() {
        let options = Options::default();
        let built = build(&vec![0xffu8, 0x41], &options);
        assert_eq!(built.node(), &Node::Bytes(vec![0xff, 0x41]));
        assert_eq!(built.kind(), Kind::Bytes);
        assert!(!built.is_zero());

        struct Raw(&'static [u8]);

        impl Serialize for Raw {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_bytes(self.0)
            }
        }

        let built = build(&Raw(&[0xfe]), &options);
        assert_eq!(built.node(), &Node::Bytes(vec![0xfe]));
        assert_eq!(build(&Raw(b"ok"), &options).node(), &Node::from("ok"));
    }

    #[test]
    fn test_non_utf8_map_key() {
        let mut map = BTreeMap::new();
        map.insert(vec![0xffu8], "x");

        let err = classify(&map, &Options::default()).unwrap_err();
        assert!(matches!(err, Error::NonUtf8Key { .. }), "{:?}", err);
    }

    #[test]
    fn test_unit_variant_and_enum_payloads() {
        #[derive(Serialize)]
        enum Shape {
            Empty,
            Circle(f64),
            Rect { w: u32, h: u32 },
            Pair(u8, u8),
        }

        let options = Options::default();
        assert_eq!(build(&Shape::Empty, &options).node(), &Node::from("Empty"));

        let circle = build(&Shape::Circle(2.5), &options);
        assert_eq!(circle.kind(), Kind::Variant);
        assert_eq!(circle.node().get("Circle"), Some(&Node::from("2.5")));

        let rect = build(&Shape::Rect { w: 3, h: 0 }, &options);
        let body = rect.node().get("Rect").unwrap();
        assert_eq!(body.get("w"), Some(&Node::from("3")));
        assert_eq!(body.get("h"), Some(&Node::empty()));

        let pair = build(&Shape::Pair(1, 2), &options);
        assert_eq!(pair.node().get("Pair").and_then(|n| n.get("1")), Some(&Node::from("2")));
    }

    #[test]
    fn test_composite_map_key_is_unsupported() {
        let mut map = BTreeMap::new();
        map.insert(vec![1u32, 2], "x");

        let err = classify(&map, &Options::default()).unwrap_err();
        match err {
            Error::UnsupportedKind { type_name, kind } => {
                assert_eq!(kind, Kind::Seq);
                assert!(type_name.contains("Vec<u32>"), "{}", type_name);
            }
            other => panic!("Expected unsupported kind, got {:?}", other),
        }
    }

    #[test]
    fn test_map_keys_follow_scalar_rules() {
        let mut map = BTreeMap::new();
        map.insert(0u8, "zero");
        map.insert(7u8, "seven");

        let elided = build(&map, &Options::default());
        assert_eq!(elided.node().get(""), Some(&Node::from("zero")));
        assert_eq!(elided.node().get("7"), Some(&Node::from("seven")));

        let kept = build(&map, &Options::new().with_zeros(true));
        assert_eq!(kept.node().get("0"), Some(&Node::from("zero")));
    }

    #[test]
    fn test_struct_tags() {
        #[derive(Serialize)]
        struct Tagged {
            #[serde(rename = "n,omitempty")]
            count: u32,
            #[serde(rename = "-")]
            hidden: u32,
            plain: u32,
        }

        let options = Options::default();
        let built = build(&Tagged { count: 0, hidden: 9, plain: 0 }, &options);
        let map = built.node().as_map().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["plain"]);
        assert!(built.is_zero());

        let built = build(&Tagged { count: 2, hidden: 9, plain: 1 }, &options);
        let map = built.node().as_map().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["n", "plain"]);
        assert!(!built.is_zero());
    }

    #[test]
    fn test_nameless_tag_is_rejected() {
        #[derive(Serialize)]
        struct Nameless {
            #[serde(rename = ",omitempty")]
            count: u32,
        }

        let err = classify(&Nameless { count: 1 }, &Options::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidTag { ref tag, .. } if tag == ",omitempty"));
    }

    #[test]
    fn test_custom_omitted_key() {
        #[derive(Serialize)]
        struct S {
            #[serde(rename = "skip")]
            a: u8,
            #[serde(rename = "-")]
            b: u8,
        }

        let options = Options::new().with_omitted_key("skip");
        let built = build(&S { a: 1, b: 2 }, &options);
        let map = built.node().as_map().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["-"]);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Seq.to_string(), "seq");
        assert_eq!(Kind::Str.as_str(), "string");
    }
}
