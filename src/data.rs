//! Tagged constructor data
//!
//! [`UplcData`] is the self-describing value representation exchanged with
//! the contract runtime. Values of this type are only ever produced by, or
//! handed to, the codec engine; there is no serialization to bytes at this
//! layer.
//!
//! # Conventions
//!
//! A handful of host-level notions have fixed tagged representations that
//! every contract agrees on:
//!
//!   * booleans: `false ~ Constr(0, [])`, `true ~ Constr(1, [])`
//!   * options: `Some(x) ~ Constr(0, [x])`, `None ~ Constr(1, [])`
//!   * reals: fixed-point integers with [`REAL_PRECISION`] decimal places
//!
//! Helpers for each of these are defined alongside the type.

use crate::error::{CastError, CastResult};
use num_bigint::BigInt;

/// Number of decimal places preserved by the fixed-point real encoding
pub const REAL_PRECISION: u32 = 6;

const REAL_SCALE: f64 = 1_000_000.0;

/// Tagged data value
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum UplcData {
    /// Tagged constructor: small integer discriminant plus positional fields
    Constr { tag: u64, fields: Vec<UplcData> },
    /// Ordered key/value pair sequence
    Map(Vec<(UplcData, UplcData)>),
    /// Ordered sequence
    List(Vec<UplcData>),
    Int(BigInt),
    Bytes(Vec<u8>),
}

impl UplcData {
    #[must_use]
    pub fn int(value: impl Into<BigInt>) -> Self {
        Self::Int(value.into())
    }

    #[must_use]
    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(value.into())
    }

    #[must_use]
    pub fn constr(tag: u64, fields: Vec<UplcData>) -> Self {
        Self::Constr { tag, fields }
    }

    /// Short human-readable name of the variant, for use in diagnostics
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            UplcData::Constr { .. } => "constr data",
            UplcData::Map(_) => "map data",
            UplcData::List(_) => "list data",
            UplcData::Int(_) => "int data",
            UplcData::Bytes(_) => "bytearray data",
        }
    }

    /// Returns the integer held by `Int` data
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeMismatch`](crate::error::CastErrorKind::ShapeMismatch)
    /// for any other variant; the remaining `expect_*` accessors behave likewise.
    pub fn expect_int(&self) -> CastResult<&BigInt> {
        match self {
            UplcData::Int(int) => Ok(int),
            other => Err(CastError::shape("int data", other.kind_name())),
        }
    }

    pub fn expect_bytes(&self) -> CastResult<&[u8]> {
        match self {
            UplcData::Bytes(bytes) => Ok(bytes.as_slice()),
            other => Err(CastError::shape("bytearray data", other.kind_name())),
        }
    }

    pub fn expect_list(&self) -> CastResult<&[UplcData]> {
        match self {
            UplcData::List(items) => Ok(items.as_slice()),
            other => Err(CastError::shape("list data", other.kind_name())),
        }
    }

    pub fn expect_map(&self) -> CastResult<&[(UplcData, UplcData)]> {
        match self {
            UplcData::Map(pairs) => Ok(pairs.as_slice()),
            other => Err(CastError::shape("map data", other.kind_name())),
        }
    }

    /// Returns the tag and fields of `Constr` data
    pub fn expect_constr(&self) -> CastResult<(u64, &[UplcData])> {
        match self {
            UplcData::Constr { tag, fields } => Ok((*tag, fields.as_slice())),
            other => Err(CastError::shape("constr data", other.kind_name())),
        }
    }

    /// Like [`expect_constr`](Self::expect_constr), additionally requiring
    /// a specific tag and field count.
    pub fn expect_constr_with(&self, tag: u64, arity: usize) -> CastResult<&[UplcData]> {
        let (actual, fields) = self.expect_constr()?;
        if actual != tag {
            return Err(CastError::shape(tag_name(tag), tag_name(actual)));
        }
        if fields.len() != arity {
            return Err(CastError::arity(
                format!("fields in constr data with tag {tag}"),
                arity,
                fields.len(),
            ));
        }
        Ok(fields)
    }
}

fn tag_name(tag: u64) -> &'static str {
    match tag {
        0 => "constr data with tag 0",
        1 => "constr data with tag 1",
        2 => "constr data with tag 2",
        _ => "constr data with a tag above 2",
    }
}

impl From<BigInt> for UplcData {
    fn from(value: BigInt) -> Self {
        Self::Int(value)
    }
}

impl From<Vec<u8>> for UplcData {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

#[must_use]
pub fn encode_bool(value: bool) -> UplcData {
    UplcData::constr(u64::from(value), Vec::new())
}

/// Strict decoding of a boolean: the tag must be 0 or 1 and there must be
/// no fields.
pub fn decode_bool(data: &UplcData) -> CastResult<bool> {
    match data.expect_constr()? {
        (0, []) => Ok(false),
        (1, []) => Ok(true),
        (0 | 1, fields) => Err(CastError::arity("fields in bool data", 0, fields.len())),
        _ => Err(CastError::shape("bool data", "constr data with a tag above 1")),
    }
}

#[must_use]
pub fn encode_option(value: Option<UplcData>) -> UplcData {
    match value {
        Some(inner) => UplcData::constr(0, vec![inner]),
        None => UplcData::constr(1, Vec::new()),
    }
}

/// Decodes the present/absent marker of option data, returning the wrapped
/// payload when present.
pub fn decode_option(data: &UplcData) -> CastResult<Option<&UplcData>> {
    match data.expect_constr()? {
        (0, [inner]) => Ok(Some(inner)),
        (1, []) => Ok(None),
        (0, fields) => Err(CastError::arity("fields in option data (Some)", 1, fields.len())),
        (1, fields) => Err(CastError::arity("fields in option data (None)", 0, fields.len())),
        _ => Err(CastError::shape("option data", "constr data with a tag above 1")),
    }
}

/// Encodes a real number as a fixed-point integer, rounding to
/// [`REAL_PRECISION`] decimal places.
pub fn encode_real(value: f64) -> CastResult<UplcData> {
    let scaled = (value * REAL_SCALE).round();
    if !scaled.is_finite() || scaled.abs() >= i128::MAX as f64 {
        return Err(CastError::invalid_primitive(
            "Real",
            format!("{value} cannot be represented as a fixed-point integer"),
        ));
    }
    Ok(UplcData::int(scaled as i128))
}

pub fn decode_real(data: &UplcData) -> CastResult<f64> {
    let int = data.expect_int()?;
    match i128::try_from(int) {
        Ok(scaled) => Ok(scaled as f64 / REAL_SCALE),
        Err(_) => Err(CastError::invalid_primitive(
            "Real",
            format!("fixed-point value {int} is out of range"),
        )),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::CastErrorKind;

    #[test]
    fn expect_accessors() {
        let data = UplcData::List(vec![UplcData::int(1), UplcData::Bytes(vec![0xab])]);
        let items = data.expect_list().unwrap();
        assert_eq!(items[0].expect_int().unwrap(), &BigInt::from(1));
        assert_eq!(items[1].expect_bytes().unwrap(), &[0xab]);

        let err = data.expect_map().unwrap_err();
        assert_eq!(
            err.kind(),
            &CastErrorKind::ShapeMismatch {
                expected: "map data",
                found: "list data"
            }
        );
    }

    #[test]
    fn bool_conventions() {
        assert_eq!(encode_bool(true), UplcData::constr(1, vec![]));
        assert_eq!(decode_bool(&encode_bool(false)).unwrap(), false);
        assert!(decode_bool(&UplcData::constr(2, vec![])).is_err());
        assert!(decode_bool(&UplcData::constr(1, vec![UplcData::int(0)])).is_err());
    }

    #[test]
    fn option_conventions() {
        let some = encode_option(Some(UplcData::int(7)));
        assert_eq!(some, UplcData::constr(0, vec![UplcData::int(7)]));
        assert_eq!(decode_option(&some).unwrap(), Some(&UplcData::int(7)));
        assert_eq!(decode_option(&encode_option(None)).unwrap(), None);
        assert!(decode_option(&UplcData::constr(0, vec![])).is_err());
    }

    #[test]
    fn real_fixed_point() {
        assert_eq!(encode_real(1.5).unwrap(), UplcData::int(1_500_000));
        assert_eq!(encode_real(-0.000_001).unwrap(), UplcData::int(-1));
        assert_eq!(decode_real(&UplcData::int(2_250_000)).unwrap(), 2.25);
        assert!(encode_real(f64::NAN).is_err());
    }

    #[test]
    fn constr_with_checks() {
        let data = UplcData::constr(1, vec![UplcData::int(0)]);
        assert!(data.expect_constr_with(1, 1).is_ok());
        assert!(data.expect_constr_with(0, 1).is_err());
        assert!(matches!(
            data.expect_constr_with(1, 2).unwrap_err().kind(),
            CastErrorKind::ArityMismatch { expected: 2, actual: 1, .. }
        ));
    }
}
