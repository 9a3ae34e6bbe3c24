//! Scalar primitives
//!
//! Codecs for primitives whose tagged form is a single integer, byte-string
//! or trivial constructor, and which carry no ledger-specific validation.

use super::{EncodeOnly, Primitive, PrimitiveRegistry};
use crate::cast::CastConfig;
use crate::data::{decode_bool, decode_real, encode_bool, encode_real, UplcData};
use crate::error::{CastError, CastResult};
use crate::value::Value;

/// Information sink: any input encodes to `Int(0)`, and any data decodes to
/// [`Value::Null`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyPrimitive;

impl Primitive for AnyPrimitive {
    fn encode(&self, _: &Value) -> CastResult<UplcData> {
        Ok(UplcData::int(0))
    }

    fn decode(&self, _: &UplcData, _: &CastConfig) -> CastResult<Value> {
        Ok(Value::Null)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BoolPrimitive;

impl Primitive for BoolPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        match value {
            Value::Bool(b) => Ok(encode_bool(*b)),
            other => Err(CastError::shape("bool", other.kind_name())),
        }
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        decode_bool(data).map(Value::Bool)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ByteArrayPrimitive;

impl Primitive for ByteArrayPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        super::bytes_of_value("ByteArray", value).map(UplcData::Bytes)
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        Ok(Value::Bytes(data.expect_bytes()?.to_vec()))
    }
}

/// Opaque tagged data, passed through unchanged in both directions
#[derive(Debug, Clone, Copy, Default)]
pub struct DataPrimitive;

impl Primitive for DataPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        match value {
            Value::Data(data) => Ok(data.clone()),
            other => Err(CastError::shape("data", other.kind_name())),
        }
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        Ok(Value::Data(data.clone()))
    }
}

/// Arbitrary-precision integer; also backs `Duration` and `Time`
#[derive(Debug, Clone, Copy, Default)]
pub struct IntPrimitive;

impl Primitive for IntPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        Ok(UplcData::Int(value.expect_int()?.clone()))
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        Ok(Value::Int(data.expect_int()?.clone()))
    }
}

/// Fixed-point real with six decimal places
#[derive(Debug, Clone, Copy, Default)]
pub struct RealPrimitive;

impl Primitive for RealPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        match value {
            Value::Real(real) => encode_real(*real),
            Value::Int(int) => {
                let whole = i64::try_from(int)
                    .map_err(|_| CastError::invalid_primitive("Real", "integer out of range"))?;
                encode_real(whole as f64)
            }
            other => Err(CastError::shape("real", other.kind_name())),
        }
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        decode_real(data).map(Value::Real)
    }
}

/// Numerator/denominator pair, encoded as a two-element list of integers
#[derive(Debug, Clone, Copy, Default)]
pub struct RatioPrimitive;

impl Primitive for RatioPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        match value.expect_list()? {
            [top, bottom] => Ok(UplcData::List(vec![
                UplcData::Int(top.expect_int()?.clone()),
                UplcData::Int(bottom.expect_int()?.clone()),
            ])),
            items => Err(CastError::arity("items in ratio", 2, items.len())),
        }
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        match data.expect_list()? {
            [top, bottom] => Ok(Value::List(vec![
                Value::Int(top.expect_int()?.clone()),
                Value::Int(bottom.expect_int()?.clone()),
            ])),
            items => Err(CastError::arity("items in ratio data", 2, items.len())),
        }
    }
}

/// UTF-8 text, encoded as its byte-string
#[derive(Debug, Clone, Copy, Default)]
pub struct StringPrimitive;

impl Primitive for StringPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        match value {
            Value::String(s) => Ok(UplcData::bytes(s.as_bytes())),
            other => Err(CastError::shape("string", other.kind_name())),
        }
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        let bytes = data.expect_bytes()?;
        match std::str::from_utf8(bytes) {
            Ok(s) => Ok(Value::string(s)),
            Err(err) => Err(CastError::invalid_primitive("String", err)),
        }
    }
}

pub(super) fn register_all(reg: &mut PrimitiveRegistry) {
    reg.register("Any", AnyPrimitive)
        .register("Bool", BoolPrimitive)
        .register("ByteArray", ByteArrayPrimitive)
        .register("Data", DataPrimitive)
        .register("DCert", EncodeOnly::new("DCert", DataPrimitive))
        .register("Duration", IntPrimitive)
        .register("Int", IntPrimitive)
        .register("Ratio", RatioPrimitive)
        .register("Real", RealPrimitive)
        .register("String", StringPrimitive)
        .register("Time", IntPrimitive);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::CastErrorKind;

    fn roundtrip<P: Primitive>(codec: P, value: Value) -> Value {
        let data = codec.encode(&value).unwrap();
        codec.decode(&data, &CastConfig::default()).unwrap()
    }

    #[test]
    fn any_is_a_sink() {
        assert_eq!(
            AnyPrimitive.encode(&Value::string("ignored")).unwrap(),
            UplcData::int(0)
        );
        assert_eq!(roundtrip(AnyPrimitive, Value::int(12)), Value::Null);
    }

    #[test]
    fn scalar_roundtrips() {
        assert_eq!(roundtrip(BoolPrimitive, Value::Bool(true)), Value::Bool(true));
        assert_eq!(roundtrip(IntPrimitive, Value::int(-7)), Value::int(-7));
        assert_eq!(roundtrip(RealPrimitive, Value::Real(0.25)), Value::Real(0.25));
        assert_eq!(
            roundtrip(StringPrimitive, Value::string("hello")),
            Value::string("hello")
        );
        assert_eq!(
            roundtrip(ByteArrayPrimitive, Value::Bytes(vec![1, 2, 3])),
            Value::Bytes(vec![1, 2, 3])
        );
        let ratio = Value::List(vec![Value::int(1), Value::int(3)]);
        assert_eq!(roundtrip(RatioPrimitive, ratio.clone()), ratio);
    }

    #[test]
    fn bytearray_accepts_hex() {
        assert_eq!(
            ByteArrayPrimitive.encode(&Value::string("cafe")).unwrap(),
            UplcData::Bytes(vec![0xca, 0xfe])
        );
    }

    #[test]
    fn ratio_arity() {
        let err = RatioPrimitive
            .encode(&Value::List(vec![Value::int(1)]))
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            CastErrorKind::ArityMismatch { expected: 2, actual: 1, .. }
        ));
    }

    #[test]
    fn string_rejects_invalid_utf8() {
        let err = StringPrimitive
            .decode(&UplcData::Bytes(vec![0xff, 0xfe]), &CastConfig::default())
            .unwrap_err();
        assert!(matches!(err.kind(), CastErrorKind::InvalidPrimitive { .. }));
    }

    #[test]
    fn int_rejects_other_values() {
        let err = IntPrimitive.encode(&Value::string("1")).unwrap_err();
        assert_eq!(
            err.kind(),
            &CastErrorKind::ShapeMismatch {
                expected: "int",
                found: "string"
            }
        );
    }

    #[test]
    fn dcert_is_encode_only() {
        let mut reg = PrimitiveRegistry::new();
        register_all(&mut reg);
        let dcert = reg.get("DCert").unwrap();
        let data = UplcData::constr(0, vec![UplcData::int(1)]);
        assert_eq!(dcert.encode(&Value::Data(data.clone())).unwrap(), data);
        let err = dcert.decode(&data, &CastConfig::default()).unwrap_err();
        assert!(matches!(err.kind(), CastErrorKind::LossyPrimitive { .. }));
    }
}
