//! Dynamically-typed D-Bus values and their strict decoding into static types.

mod decode;
/// Conversion between [`DynamicValue`] and `zvariant` values.
pub mod wire;

pub use decode::{Decoded, FromDynamic, decode, decode_kind};

use std::{collections::HashMap, fmt};

/// A self-describing value as received from (or sent to) the bus.
///
/// Every variant carries exactly the payload its tag names; nothing
/// downstream needs to inspect the payload to learn its type.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    /// `b`
    Bool(bool),
    /// `s`
    Str(String),
    /// `o`
    ObjectPath(String),
    /// `i`
    Int32(i32),
    /// `x`
    Int64(i64),
    /// `t`
    UInt64(u64),
    /// `d`
    Double(f64),
    /// `as`
    StrList(Vec<String>),
    /// Any array whose elements are not plain strings.
    List {
        /// Signature of a single element
        element_signature: String,
        /// Array elements in wire order
        items: Vec<DynamicValue>,
    },
    /// A dictionary keyed by strings (`a{s?}`).
    Map {
        /// Signature of the dictionary's values, `v` for `a{sv}`
        value_signature: String,
        /// Dictionary entries
        entries: HashMap<String, DynamicValue>,
    },
    /// `v`, a value wrapped in one extra layer of type information.
    Variant(Box<DynamicValue>),
}

impl DynamicValue {
    /// Returns the D-Bus type signature of this value.
    pub fn signature(&self) -> String {
        match self {
            DynamicValue::Bool(_) => "b".to_string(),
            DynamicValue::Str(_) => "s".to_string(),
            DynamicValue::ObjectPath(_) => "o".to_string(),
            DynamicValue::Int32(_) => "i".to_string(),
            DynamicValue::Int64(_) => "x".to_string(),
            DynamicValue::UInt64(_) => "t".to_string(),
            DynamicValue::Double(_) => "d".to_string(),
            DynamicValue::StrList(_) => "as".to_string(),
            DynamicValue::List {
                element_signature, ..
            } => format!("a{element_signature}"),
            DynamicValue::Map {
                value_signature, ..
            } => format!("a{{s{value_signature}}}"),
            DynamicValue::Variant(_) => "v".to_string(),
        }
    }

    /// Wraps this value in a variant.
    pub fn into_variant(self) -> Self {
        DynamicValue::Variant(Box::new(self))
    }

    /// Builds an `a{sv}` dictionary, wrapping every value in a variant.
    pub fn variant_map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, DynamicValue)>,
        K: Into<String>,
    {
        DynamicValue::Map {
            value_signature: "v".to_string(),
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into_variant()))
                .collect(),
        }
    }
}

impl From<bool> for DynamicValue {
    fn from(value: bool) -> Self {
        DynamicValue::Bool(value)
    }
}

impl From<&str> for DynamicValue {
    fn from(value: &str) -> Self {
        DynamicValue::Str(value.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(value: String) -> Self {
        DynamicValue::Str(value)
    }
}

impl From<i32> for DynamicValue {
    fn from(value: i32) -> Self {
        DynamicValue::Int32(value)
    }
}

impl From<i64> for DynamicValue {
    fn from(value: i64) -> Self {
        DynamicValue::Int64(value)
    }
}

impl From<u64> for DynamicValue {
    fn from(value: u64) -> Self {
        DynamicValue::UInt64(value)
    }
}

impl From<f64> for DynamicValue {
    fn from(value: f64) -> Self {
        DynamicValue::Double(value)
    }
}

impl From<Vec<String>> for DynamicValue {
    fn from(value: Vec<String>) -> Self {
        DynamicValue::StrList(value)
    }
}

/// Static target kinds the decoder can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `bool`
    Bool,
    /// `String`
    String,
    /// Object path, decoded as `String`
    ObjectPath,
    /// `i32`
    Int32,
    /// `i64`
    Int64,
    /// `u64`
    UInt64,
    /// `f64`
    Double,
    /// `Vec<String>`
    StringList,
    /// `HashMap<String, DynamicValue>` from an `a{sv}` dictionary
    StringMap,
}

impl Kind {
    /// Wire signature a value must carry to decode as this kind.
    pub fn signature(self) -> &'static str {
        match self {
            Kind::Bool => "b",
            Kind::String => "s",
            Kind::ObjectPath => "o",
            Kind::Int32 => "i",
            Kind::Int64 => "x",
            Kind::UInt64 => "t",
            Kind::Double => "d",
            Kind::StringList => "as",
            Kind::StringMap => "a{sv}",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Bool => write!(f, "boolean"),
            Kind::String => write!(f, "string"),
            Kind::ObjectPath => write!(f, "object path"),
            Kind::Int32 => write!(f, "int32"),
            Kind::Int64 => write!(f, "int64"),
            Kind::UInt64 => write!(f, "uint64"),
            Kind::Double => write!(f, "double"),
            Kind::StringList => write!(f, "string list"),
            Kind::StringMap => write!(f, "string map"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signatures_match_dbus_notation() {
        assert_eq!(DynamicValue::Bool(true).signature(), "b");
        assert_eq!(DynamicValue::StrList(vec![]).signature(), "as");
        assert_eq!(
            DynamicValue::variant_map([("a", DynamicValue::Int32(1))]).signature(),
            "a{sv}"
        );
        assert_eq!(
            DynamicValue::List {
                element_signature: "a{sv}".to_string(),
                items: vec![],
            }
            .signature(),
            "aa{sv}"
        );
    }

    #[test]
    fn variant_map_wraps_every_value_once() {
        let DynamicValue::Map { entries, .. } =
            DynamicValue::variant_map([("xesam:title", DynamicValue::from("Song"))])
        else {
            panic!("expected a map");
        };

        assert_eq!(
            entries.get("xesam:title"),
            Some(&DynamicValue::Variant(Box::new(DynamicValue::from("Song"))))
        );
    }

    #[test]
    fn kind_signatures_agree_with_value_signatures() {
        assert_eq!(Kind::Int64.signature(), DynamicValue::Int64(0).signature());
        assert_eq!(Kind::Double.signature(), DynamicValue::Double(0.0).signature());
        assert_eq!(
            Kind::ObjectPath.signature(),
            DynamicValue::ObjectPath("/".to_string()).signature()
        );
    }
}
