//! Schema-driven marshalling between UPLC tagged data and native values
//!
//! # Overview
//!
//! On-chain validators exchange values with the outside world in a single,
//! self-describing representation: tagged constructor data ([`UplcData`]).
//! Host code, on the other hand, wants to deal in records, lists, integers
//! and strings. This library bridges the two, converting in both directions
//! as directed by a declarative [`TypeSchema`] emitted by the contract
//! compiler alongside each validator.
//!
//! The central type is [`Cast`], which binds one schema to the runtime
//! [`CastConfig`] of its environment:
//!
//! ```
//! use uplc_cast::prelude::*;
//!
//! let schema: TypeSchema = StructSchema::new("Point", "Point", StructFormat::List)
//!     .field("x", TypeSchema::internal("Int"))
//!     .field("y", TypeSchema::internal("Int"))
//!     .into();
//! let cast = Cast::new(schema, CastConfig::testnet());
//!
//! let point = Value::record([("x", Value::int(1)), ("y", Value::int(-2))]);
//! let data = cast.to_uplc_data(&point).unwrap();
//! assert_eq!(data, UplcData::List(vec![UplcData::int(1), UplcData::int(-2)]));
//! assert_eq!(cast.from_uplc_data(&data).unwrap(), point);
//! ```
//!
//! # Structure
//!
//! The library is organized as a recursive codec engine ([`conv`]) over a
//! small set of data models:
//!
//!   * [`data`]: the tagged data model and its fixed conventions for
//!     booleans, options and fixed-point reals
//!   * [`value`]: the dynamic host-side value model
//!   * [`schema`]: the type descriptions that drive conversion, including
//!     self-referential types expressed through named references
//!   * [`prim`]: the registry of named primitive codecs that schema leaves
//!     resolve against, with builtin scalar and ledger types
//!
//! Every failure is reported as a [`CastError`] carrying the structural path,
//! from the conversion root, of the node that could not be converted.

pub mod cast;
pub mod conv;
pub mod data;
pub mod error;
pub mod hexstring;
pub mod prelude;
pub mod prim;
pub mod schema;
pub mod value;

pub use crate::cast::{configure_cast, Cast, CastConfig, CastLike};
pub use crate::data::UplcData;
pub use crate::error::{CastError, CastErrorKind, CastResult};
pub use crate::schema::TypeSchema;
pub use crate::value::Value;
