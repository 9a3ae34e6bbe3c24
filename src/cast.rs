//! Schema-bound conversion façade
//!
//! A [`Cast`] pairs one [`TypeSchema`] with the [`CastConfig`] of the
//! environment it is used in, and exposes the two directions of conversion
//! as [`to_uplc_data`](Cast::to_uplc_data) and
//! [`from_uplc_data`](Cast::from_uplc_data).
//!
//! Where the runtime configuration is only known late (e.g. the target
//! network is picked after binding code has been generated), a
//! [`CastLike::Deferred`] factory can stand in for a bound [`Cast`] and be
//! resolved with [`configure_cast`].

use crate::conv;
use crate::data::UplcData;
use crate::error::CastResult;
use crate::prim::PrimitiveRegistry;
use crate::schema::TypeSchema;
use crate::value::Value;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

#[cfg(feature = "serde_impls")]
use serde::{Deserialize, Serialize};

/// Runtime information needed by some primitives to rebuild host values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde_impls", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_impls", serde(rename_all = "camelCase"))]
pub struct CastConfig {
    /// Selects the network nibble of decoded addresses
    pub is_mainnet: bool,
}

impl CastConfig {
    pub const fn mainnet() -> Self {
        Self { is_mainnet: true }
    }

    pub const fn testnet() -> Self {
        Self { is_mainnet: false }
    }
}

/// Converter bound to a single schema and configuration
///
/// Cloning is cheap; the schema and registry are shared.
#[derive(Clone, Debug)]
pub struct Cast {
    schema: Arc<TypeSchema>,
    config: CastConfig,
    registry: Arc<PrimitiveRegistry>,
}

impl Cast {
    /// Binds `schema` and `config`, resolving primitives against the shared
    /// builtin registry
    pub fn new(schema: impl Into<Arc<TypeSchema>>, config: CastConfig) -> Self {
        Self {
            schema: schema.into(),
            config,
            registry: PrimitiveRegistry::builtin(),
        }
    }

    /// Replaces the registry that primitive names are resolved against
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<PrimitiveRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn schema(&self) -> &TypeSchema {
        &self.schema
    }

    pub fn config(&self) -> CastConfig {
        self.config
    }

    pub fn registry(&self) -> &PrimitiveRegistry {
        &self.registry
    }

    /// Converts a host value into tagged data
    ///
    /// # Errors
    ///
    /// Fails on the first node of `value` that does not fit the schema; the
    /// returned error carries the path to that node.
    pub fn to_uplc_data(&self, value: &Value) -> CastResult<UplcData> {
        self.to_uplc_data_at(value, "")
    }

    /// Like [`to_uplc_data`](Self::to_uplc_data), with every error path
    /// prefixed by `path`, so that callers converting a value nested in some
    /// larger structure can report where it came from.
    pub fn to_uplc_data_at(&self, value: &Value, path: &str) -> CastResult<UplcData> {
        conv::encode(&self.schema, value, &self.registry, path)
    }

    /// Converts tagged data back into a host value
    pub fn from_uplc_data(&self, data: &UplcData) -> CastResult<Value> {
        conv::decode(&self.schema, data, &self.registry, &self.config)
    }
}

/// Produces a [`Cast`] once the runtime configuration is known
pub type CastFactory = Arc<dyn Fn(CastConfig) -> Cast + Send + Sync>;

/// Either an already-bound [`Cast`], or a factory awaiting its configuration
#[derive(Clone)]
pub enum CastLike {
    Bound(Cast),
    Deferred(CastFactory),
}

impl CastLike {
    pub fn deferred<F>(factory: F) -> Self
    where
        F: Fn(CastConfig) -> Cast + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(factory))
    }
}

impl From<Cast> for CastLike {
    fn from(value: Cast) -> Self {
        Self::Bound(value)
    }
}

impl Debug for CastLike {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bound(cast) => f.debug_tuple("Bound").field(cast).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Resolves `cast` to a bound [`Cast`]
///
/// A bound cast is returned as-is, keeping whatever configuration it was
/// created with; a deferred one is built with `config`.
pub fn configure_cast(cast: impl Into<CastLike>, config: CastConfig) -> Cast {
    match cast.into() {
        CastLike::Bound(cast) => cast,
        CastLike::Deferred(factory) => {
            log::debug!("binding deferred cast to {:?}", config);
            factory(config)
        }
    }
}
