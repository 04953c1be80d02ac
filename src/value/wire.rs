use std::collections::HashMap;

use tracing::debug;
use zbus::zvariant::{Array, Dict, ObjectPath, Structure, StructureBuilder, Value};

use crate::core::{MprisError, Result};

use super::DynamicValue;

impl TryFrom<&Value<'_>> for DynamicValue {
    type Error = MprisError;

    fn try_from(value: &Value<'_>) -> Result<Self> {
        let converted = match value {
            Value::Bool(v) => DynamicValue::Bool(*v),
            Value::Str(v) => DynamicValue::Str(v.to_string()),
            Value::ObjectPath(v) => DynamicValue::ObjectPath(v.to_string()),
            Value::U8(v) => DynamicValue::UInt64(u64::from(*v)),
            Value::U16(v) => DynamicValue::UInt64(u64::from(*v)),
            Value::U32(v) => DynamicValue::UInt64(u64::from(*v)),
            Value::U64(v) => DynamicValue::UInt64(*v),
            Value::I16(v) => DynamicValue::Int32(i32::from(*v)),
            Value::I32(v) => DynamicValue::Int32(*v),
            Value::I64(v) => DynamicValue::Int64(*v),
            Value::F64(v) => DynamicValue::Double(*v),
            Value::Value(inner) => DynamicValue::Variant(Box::new(Self::try_from(&**inner)?)),
            Value::Array(array) => from_array(array)?,
            Value::Dict(dict) => from_dict(&value.value_signature().to_string(), dict)?,
            other => {
                return Err(MprisError::UnsupportedValue(format!(
                    "values of type '{}' are not supported",
                    other.value_signature()
                )));
            }
        };

        Ok(converted)
    }
}

fn from_array(array: &Array<'_>) -> Result<DynamicValue> {
    let element_signature = array.element_signature().to_string();

    if element_signature == "s" {
        let strings = array
            .iter()
            .map(|item| match item {
                Value::Str(s) => Ok(s.to_string()),
                other => Err(MprisError::UnexpectedShape(format!(
                    "string array holds a '{}' element",
                    other.value_signature()
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        return Ok(DynamicValue::StrList(strings));
    }

    let items = array
        .iter()
        .map(DynamicValue::try_from)
        .collect::<Result<Vec<_>>>()?;

    Ok(DynamicValue::List {
        element_signature,
        items,
    })
}

fn from_dict(signature: &str, dict: &Dict<'_, '_>) -> Result<DynamicValue> {
    let value_signature = signature
        .strip_prefix("a{s")
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| {
            MprisError::UnsupportedValue(format!("dictionary '{signature}' is not keyed by strings"))
        })?
        .to_string();

    let mut entries = HashMap::new();
    for (key, value) in dict.iter() {
        let Value::Str(key) = key else {
            return Err(MprisError::UnexpectedShape(format!(
                "dictionary '{signature}' holds a '{}' key",
                key.value_signature()
            )));
        };
        match DynamicValue::try_from(value) {
            Ok(converted) => {
                entries.insert(key.to_string(), converted);
            }
            // a{sv} entries with no DynamicValue form are dropped
            Err(MprisError::UnsupportedValue(reason)) if value_signature == "v" => {
                debug!(key = %key, %reason, "Skipping unsupported dictionary entry");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(DynamicValue::Map {
        value_signature,
        entries,
    })
}

/// Converts a value into its `zvariant` form for use as a call argument.
///
/// # Errors
/// Returns [`MprisError::UnsupportedValue`] for generic lists and maps, which
/// cannot be sent, and for strings that are not valid object paths.
pub fn to_wire(value: &DynamicValue) -> Result<Value<'static>> {
    let wire = match value {
        DynamicValue::Bool(v) => Value::Bool(*v),
        DynamicValue::Str(v) => Value::from(v.clone()),
        DynamicValue::ObjectPath(v) => {
            let path = ObjectPath::try_from(v.clone()).map_err(|e| {
                MprisError::UnsupportedValue(format!("invalid object path '{v}': {e}"))
            })?;
            Value::ObjectPath(path)
        }
        DynamicValue::Int32(v) => Value::I32(*v),
        DynamicValue::Int64(v) => Value::I64(*v),
        DynamicValue::UInt64(v) => Value::U64(*v),
        DynamicValue::Double(v) => Value::F64(*v),
        DynamicValue::StrList(v) => Value::from(v.clone()),
        DynamicValue::Variant(inner) => Value::Value(Box::new(to_wire(inner)?)),
        DynamicValue::List { .. } | DynamicValue::Map { .. } => {
            return Err(MprisError::UnsupportedValue(format!(
                "'{}' cannot be sent as an argument",
                value.signature()
            )));
        }
    };

    Ok(wire)
}

/// Packs call arguments into a message body.
///
/// Returns `None` when there are no arguments.
pub(crate) fn body_from_args(args: &[DynamicValue]) -> Result<Option<Structure<'static>>> {
    if args.is_empty() {
        return Ok(None);
    }

    let mut builder = StructureBuilder::new();
    for arg in args {
        builder.push_value(to_wire(arg)?);
    }

    builder
        .build()
        .map(Some)
        .map_err(|e| MprisError::UnsupportedValue(format!("failed to build message body: {e}")))
}

/// Unpacks the top-level arguments of a reply body.
pub(crate) fn values_from_body(body: &Structure<'_>) -> Result<Vec<DynamicValue>> {
    body.fields().iter().map(DynamicValue::try_from).collect()
}
