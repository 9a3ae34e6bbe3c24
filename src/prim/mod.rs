//! Primitive (internal) type codecs
//!
//! Leaves of a [`TypeSchema`](crate::schema::TypeSchema) are
//! [`Internal`](crate::schema::TypeSchema::Internal) nodes naming a primitive
//! such as `Int`, `String` or `Address`. The codec engine never interprets
//! these itself; it looks the name up in a [`PrimitiveRegistry`] and
//! delegates to the [`Primitive`] found there.
//!
//! New domain types are supported by registering a codec under a new name,
//! without any change to the traversal engine.
//!
//! # Builtins
//!
//! [`PrimitiveRegistry::with_builtins`] populates a registry with:
//!
//!   * scalars (see [`scalar`]): `Any`, `Bool`, `ByteArray`, `Data`, `DCert`,
//!     `Duration`, `Int`, `Ratio`, `Real`, `String`, `Time`
//!   * ledger types (see [`ledger`]): `Address`, `AssetClass`, `Credential`,
//!     `DatumHash`, `MintingPolicyHash`, `PubKey`, `PubKeyHash`, `ScriptHash`,
//!     `SpendingCredential`, `StakingCredential`, `StakingValidatorHash`,
//!     `TimeRange`, `TxId`, `TxOutputId`, `ValidatorHash`, `Value`
//!
//! A process-wide instance of this registry is shared through
//! [`PrimitiveRegistry::builtin`].

use crate::cast::CastConfig;
use crate::data::UplcData;
use crate::error::{CastError, CastErrorKind, CastResult};
use crate::value::Value;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

pub mod ledger;
pub mod scalar;

/// Encode/decode pair for one named primitive type
///
/// Implementations must be pure: the same codec instance is shared across
/// threads and across every conversion using a registry.
pub trait Primitive: Send + Sync {
    /// Converts a host value into tagged data
    fn encode(&self, value: &Value) -> CastResult<UplcData>;

    /// Converts tagged data back into a host value
    ///
    /// `config` carries runtime information, such as the target network,
    /// that some primitives need to reconstruct a host value.
    fn decode(&self, data: &UplcData, config: &CastConfig) -> CastResult<Value>;
}

/// Wrapper marking a primitive as one-way: encoding is delegated to the
/// inner codec, while decoding unconditionally fails with
/// [`LossyPrimitive`](CastErrorKind::LossyPrimitive).
#[derive(Debug, Clone)]
pub struct EncodeOnly<P> {
    name: &'static str,
    inner: P,
}

impl<P> EncodeOnly<P> {
    pub const fn new(name: &'static str, inner: P) -> Self {
        Self { name, inner }
    }
}

impl<P: Primitive> Primitive for EncodeOnly<P> {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        self.inner.encode(value)
    }

    fn decode(&self, _: &UplcData, _: &CastConfig) -> CastResult<Value> {
        Err(CastError::new(CastErrorKind::LossyPrimitive {
            name: self.name.to_owned(),
        }))
    }
}

/// Name-keyed table of primitive codecs
#[derive(Clone, Default)]
pub struct PrimitiveRegistry {
    codecs: HashMap<String, Arc<dyn Primitive>>,
}

lazy_static::lazy_static! {
    static ref BUILTINS: Arc<PrimitiveRegistry> = Arc::new(PrimitiveRegistry::with_builtins());
}

impl PrimitiveRegistry {
    /// Creates a registry with no codecs registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every builtin codec
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        scalar::register_all(&mut reg);
        ledger::register_all(&mut reg);
        reg
    }

    /// Returns the shared, lazily-initialized builtin registry
    pub fn builtin() -> Arc<PrimitiveRegistry> {
        Arc::clone(&BUILTINS)
    }

    /// Registers `codec` under `name`, replacing any codec previously
    /// registered under the same name.
    pub fn register<P>(&mut self, name: impl Into<String>, codec: P) -> &mut Self
    where
        P: Primitive + 'static,
    {
        self.codecs.insert(name.into(), Arc::new(codec));
        self
    }

    /// Looks up the codec registered under `name`
    ///
    /// # Errors
    ///
    /// Returns [`UnknownPrimitive`](CastErrorKind::UnknownPrimitive) if no
    /// codec is registered under `name`.
    pub fn get(&self, name: &str) -> CastResult<&dyn Primitive> {
        match self.codecs.get(name) {
            Some(codec) => Ok(codec.as_ref()),
            None => Err(CastError::new(CastErrorKind::UnknownPrimitive {
                name: name.to_owned(),
            })),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.codecs.contains_key(name)
    }

    /// Returns the registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Debug for PrimitiveRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrimitiveRegistry")
            .field("codecs", &self.names())
            .finish()
    }
}

/// Extracts raw bytes from a host value, accepting either [`Value::Bytes`]
/// or a hex-encoded [`Value::String`].
pub(crate) fn bytes_of_value(name: &str, value: &Value) -> CastResult<Vec<u8>> {
    match value {
        Value::Bytes(bytes) => Ok(bytes.clone()),
        Value::String(hex) => crate::hexstring::bytes_of_hex(hex)
            .map_err(|err| CastError::invalid_primitive(name, err)),
        other => Err(CastError::shape("bytes or hex string", other.kind_name())),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Unit;

    impl Primitive for Unit {
        fn encode(&self, _: &Value) -> CastResult<UplcData> {
            Ok(UplcData::constr(0, vec![]))
        }

        fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
            data.expect_constr_with(0, 0)?;
            Ok(Value::Null)
        }
    }

    #[test]
    fn unknown_primitive() {
        let reg = PrimitiveRegistry::new();
        let err = reg.get("Unit").err().unwrap();
        assert_eq!(
            err.kind(),
            &CastErrorKind::UnknownPrimitive {
                name: "Unit".into()
            }
        );
    }

    #[test]
    fn register_custom() {
        let mut reg = PrimitiveRegistry::new();
        reg.register("Unit", Unit);
        let codec = reg.get("Unit").unwrap();
        let data = codec.encode(&Value::Null).unwrap();
        assert_eq!(
            codec.decode(&data, &CastConfig::default()).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn encode_only_is_lossy() {
        let codec = EncodeOnly::new("Unit", Unit);
        assert!(codec.encode(&Value::Null).is_ok());
        let err = codec
            .decode(&UplcData::constr(0, vec![]), &CastConfig::default())
            .unwrap_err();
        assert!(matches!(err.kind(), CastErrorKind::LossyPrimitive { name } if name == "Unit"));
    }

    #[test]
    fn builtins_are_shared() {
        let a = PrimitiveRegistry::builtin();
        let b = PrimitiveRegistry::builtin();
        assert!(Arc::ptr_eq(&a, &b));
        for name in ["Any", "Int", "String", "Address", "Value", "DCert"] {
            assert!(a.contains(name), "missing builtin {name}");
        }
        assert!(!a.contains("TxOutput"));
    }
}
