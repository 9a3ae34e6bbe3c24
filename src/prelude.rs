//! Assorted imports for typical use of the library

pub use crate::cast::{configure_cast, Cast, CastConfig, CastLike};
pub use crate::data::UplcData;
pub use crate::error::{CastError, CastErrorKind, CastResult, VariantError};
pub use crate::prim::{Primitive, PrimitiveRegistry};
pub use crate::schema::{
    EnumSchema, FieldType, StructFormat, StructSchema, TypeSchema, VariantSchema,
};
pub use crate::value::{Record, Value};
