use std::collections::HashMap;

use crate::core::{MprisError, Result};

use super::{DynamicValue, Kind};

/// A value reinterpreted as one of the decoder's static target kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// Decoded from `b`
    Bool(bool),
    /// Decoded from `s`
    String(String),
    /// Decoded from `o`
    ObjectPath(String),
    /// Decoded from `i`
    Int32(i32),
    /// Decoded from `x`
    Int64(i64),
    /// Decoded from `t`
    UInt64(u64),
    /// Decoded from `d`
    Double(f64),
    /// Decoded from `as`
    StringList(Vec<String>),
    /// Decoded from `a{sv}`, with every entry unwrapped from its variant
    StringMap(HashMap<String, DynamicValue>),
}

/// Decodes `value` as the requested kind.
///
/// Succeeds only when the value's own kind is exactly `want`. There is no
/// numeric widening and no string coercion.
///
/// # Errors
/// Returns [`MprisError::KindMismatch`] when the value's kind differs from
/// `want`, including an `a{s?}` dictionary whose values are not variants.
pub fn decode_kind(value: DynamicValue, want: Kind) -> Result<Decoded> {
    match (want, value) {
        (Kind::Bool, DynamicValue::Bool(v)) => Ok(Decoded::Bool(v)),
        (Kind::String, DynamicValue::Str(v)) => Ok(Decoded::String(v)),
        (Kind::ObjectPath, DynamicValue::ObjectPath(v)) => Ok(Decoded::ObjectPath(v)),
        (Kind::Int32, DynamicValue::Int32(v)) => Ok(Decoded::Int32(v)),
        (Kind::Int64, DynamicValue::Int64(v)) => Ok(Decoded::Int64(v)),
        (Kind::UInt64, DynamicValue::UInt64(v)) => Ok(Decoded::UInt64(v)),
        (Kind::Double, DynamicValue::Double(v)) => Ok(Decoded::Double(v)),
        (Kind::StringList, DynamicValue::StrList(v)) => Ok(Decoded::StringList(v)),
        (
            Kind::StringMap,
            DynamicValue::Map {
                value_signature,
                entries,
            },
        ) if value_signature == "v" => unwrap_variants(entries).map(Decoded::StringMap),
        (want, other) => Err(MprisError::kind_mismatch(want, other.signature())),
    }
}

/// Strips the variant layer `a{sv}` puts around every dictionary value.
fn unwrap_variants(
    entries: HashMap<String, DynamicValue>,
) -> Result<HashMap<String, DynamicValue>> {
    entries
        .into_iter()
        .map(|(key, value)| match value {
            DynamicValue::Variant(inner) => Ok((key, *inner)),
            other => Err(MprisError::kind_mismatch(
                Kind::StringMap,
                format!("a{{s{}}}", other.signature()),
            )),
        })
        .collect()
}

/// Static types that can be produced by the decoder.
pub trait FromDynamic: Sized {
    /// Kind the value must have on the wire.
    const KIND: Kind;

    /// Extracts `Self` from a decoded value of kind [`Self::KIND`].
    fn from_decoded(decoded: Decoded) -> Option<Self>;
}

/// Decodes `value` into the static type `T`.
///
/// # Errors
/// Returns [`MprisError::KindMismatch`] when `value` is not of `T::KIND`.
pub fn decode<T: FromDynamic>(value: DynamicValue) -> Result<T> {
    let actual = value.signature();
    let decoded = decode_kind(value, T::KIND)?;
    T::from_decoded(decoded).ok_or_else(|| MprisError::kind_mismatch(T::KIND, actual))
}

macro_rules! impl_from_dynamic {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl FromDynamic for $ty {
                const KIND: Kind = Kind::$kind;

                fn from_decoded(decoded: Decoded) -> Option<Self> {
                    match decoded {
                        Decoded::$kind(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_dynamic! {
    bool => Bool,
    String => String,
    i32 => Int32,
    i64 => Int64,
    u64 => UInt64,
    f64 => Double,
    Vec<String> => StringList,
    HashMap<String, DynamicValue> => StringMap,
}
