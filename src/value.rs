//! Native host values
//!
//! [`Value`] is the type-erased representation of the host side of a cast.
//! It is deliberately loose: the schema, not the value, decides how each
//! node is interpreted, and the same value shape may be accepted by several
//! schema kinds (e.g. a [`Value::Record`] is a valid input for a map, a
//! struct, or an enum).

use crate::data::UplcData;
use crate::error::{CastError, CastResult};
use crate::hexstring::hex_of_bytes;
use indexmap::IndexMap;
use num_bigint::BigInt;
use std::fmt::{Display, Formatter};

/// Keyed structure with insertion-ordered fields
pub type Record = IndexMap<String, Value>;

/// A dynamic value that can hold any host-side counterpart of tagged data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value; also the result of decoding `Any`
    ///
    /// Under an `option` schema this is the only absent input, and every
    /// absent option decodes to it, whatever its nesting depth.
    #[default]
    Null,
    Bool(bool),
    Int(BigInt),
    Real(f64),
    Bytes(Vec<u8>),
    String(String),
    List(Vec<Value>),
    /// Key-value container, in insertion order
    Map(Vec<(Value, Value)>),
    /// Keyed structure, in insertion order
    Record(Record),
    /// Opaque tagged data passed through unchanged
    Data(UplcData),
}

impl Value {
    #[must_use]
    pub fn int(value: impl Into<BigInt>) -> Self {
        Self::Int(value.into())
    }

    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    #[must_use]
    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(value.into())
    }

    /// Builds a [`Value::Record`] from `(key, value)` pairs, preserving their order
    #[must_use]
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds the single-key record that represents an enum value
    #[must_use]
    pub fn variant<K: Into<String>>(name: K, fields: Value) -> Self {
        Self::record([(name, fields)])
    }

    /// Short human-readable name of the variant, for use in diagnostics
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Real(_) => "real",
            Value::Bytes(_) => "bytes",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Record(_) => "record",
            Value::Data(_) => "data",
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Looks up a field of a [`Value::Record`]
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.as_record().and_then(|record| record.get(field))
    }

    /// Looks up a field that must be present
    ///
    /// # Errors
    ///
    /// Fails with `ShapeMismatch` if `self` is not a record, and with
    /// `MissingField` if the record has no such key.
    pub fn require_field(&self, field: &str) -> CastResult<&Value> {
        match self {
            Self::Record(record) => record
                .get(field)
                .ok_or_else(|| CastError::missing_field(field)),
            other => Err(CastError::shape("record", other.kind_name())),
        }
    }

    /// Returns the record held by `self`
    pub fn expect_record(&self) -> CastResult<&Record> {
        match self {
            Self::Record(record) => Ok(record),
            other => Err(CastError::shape("record", other.kind_name())),
        }
    }

    pub fn expect_list(&self) -> CastResult<&[Value]> {
        match self {
            Self::List(items) => Ok(items.as_slice()),
            other => Err(CastError::shape("list", other.kind_name())),
        }
    }

    pub fn expect_int(&self) -> CastResult<&BigInt> {
        match self {
            Self::Int(int) => Ok(int),
            other => Err(CastError::shape("int", other.kind_name())),
        }
    }
}

/// Raw display form, used when a value appears as a map key in a data path
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => Display::fmt(b, f),
            Value::Int(int) => Display::fmt(int, f),
            Value::Real(real) => Display::fmt(real, f),
            Value::Bytes(bytes) => f.write_str(&hex_of_bytes(bytes)),
            Value::String(s) => f.write_str(s),
            Value::List(items) => write!(f, "[list of {}]", items.len()),
            Value::Map(pairs) => write!(f, "[map of {}]", pairs.len()),
            Value::Record(record) => write!(f, "[record of {}]", record.len()),
            Value::Data(data) => write!(f, "[{}]", data.kind_name()),
        }
    }
}

macro_rules! impl_value_from {
    ($src:ty => $variant:ident) => {
        impl From<$src> for Value {
            fn from(value: $src) -> Self {
                Self::$variant(value.into())
            }
        }
    };
}

impl_value_from!(bool => Bool);
impl_value_from!(i64 => Int);
impl_value_from!(u64 => Int);
impl_value_from!(BigInt => Int);
impl_value_from!(f64 => Real);
impl_value_from!(Vec<u8> => Bytes);
impl_value_from!(String => String);
impl_value_from!(&str => String);
impl_value_from!(Vec<Value> => List);
impl_value_from!(Record => Record);
impl_value_from!(UplcData => Data);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn record_preserves_order() {
        let value = Value::record([("b", Value::int(1)), ("a", Value::int(2))]);
        let keys: Vec<&str> = value
            .as_record()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(value.get("a"), Some(&Value::int(2)));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::string("hello").to_string(), "hello");
        assert_eq!(Value::int(-42).to_string(), "-42");
        assert_eq!(Value::Bytes(vec![0xca, 0xfe]).to_string(), "cafe");
    }

    #[test]
    fn option_into_value() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(3i64)), Value::int(3));
    }
}
