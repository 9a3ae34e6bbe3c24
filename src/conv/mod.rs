//! Schema-directed codec engine
//!
//! This module contains the recursive traversal that converts host
//! [`Value`]s into [`UplcData`] and back, as directed by a [`TypeSchema`].
//! Each direction is a separate pass ([`encode`] and [`decode`]) over the
//! schema tree, dispatching purely on the kind of the current node:
//! primitive leaves are delegated to a [`PrimitiveRegistry`], containers and
//! nominal nodes are handled here.
//!
//! Two pieces of per-call state are threaded through the descent:
//!
//!   * a [`Definitions`] table, populated as struct, enum and variant nodes
//!     are visited, against which [`Reference`](TypeSchema::Reference) nodes
//!     are resolved. A node registers itself before any of its children are
//!     visited, so a reference nested anywhere below a definition can reach it.
//!   * a [`DataPath`] chain recording how the current node was reached. The
//!     chain is a linked list of stack-allocated segments and is only
//!     rendered into a string when an error is first annotated with it.
//!
//! Neither is shared between top-level calls, so concurrent conversions over
//! the same schema never interact.

use crate::cast::CastConfig;
use crate::data::UplcData;
use crate::error::{CastError, CastErrorKind, CastResult};
use crate::prim::PrimitiveRegistry;
use crate::schema::TypeSchema;
use crate::value::Value;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

pub mod decode;
pub mod encode;

pub use decode::Decoder;
pub use encode::Encoder;

/// Transient id-to-definition table for resolving references
///
/// A later registration under the same id replaces the earlier one.
#[derive(Debug, Default, Clone)]
pub struct Definitions<'s> {
    table: HashMap<&'s str, &'s TypeSchema>,
}

impl<'s> Definitions<'s> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `schema` under its definition id, if it has one
    pub fn register(&mut self, schema: &'s TypeSchema) {
        if let Some(id) = schema.definition_id() {
            self.table.insert(id, schema);
        }
    }

    /// Looks up the definition last registered under `id`
    pub fn resolve(&self, id: &str) -> CastResult<&'s TypeSchema> {
        self.table.get(id).copied().ok_or_else(|| {
            CastError::new(CastErrorKind::UnresolvedReference { id: id.to_owned() })
        })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Single step from a node to one of its children
#[derive(Debug, Clone, Copy)]
pub enum Segment<'a> {
    /// Caller-supplied prefix of the whole path
    Root(&'a str),
    Ref(&'a str),
    ListItem(usize),
    /// Key of a map entry, by its host display form
    MapKey(&'a Value),
    /// Value of a map entry, by the host display form of its key
    MapValue(&'a Value),
    /// Key of a map entry, by position
    MapKeyAt(usize),
    /// Value of a map entry, by position
    MapValueAt(usize),
    TupleItem(usize),
    Some,
    SingletonField(&'a str),
    ListField(&'a str),
    MapField(&'a str),
    EnumField {
        enum_name: &'a str,
        variant: &'a str,
        field: &'a str,
    },
    VariantField(&'a str),
}

impl Display for Segment<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Root(prefix) => f.write_str(prefix),
            Segment::Ref(id) => write!(f, "::ref{{{id}}}"),
            Segment::ListItem(ix) => write!(f, ".list[{ix}]"),
            Segment::MapKey(key) => write!(f, "[mapKey '{key}']"),
            Segment::MapValue(key) => write!(f, "[map].{key}"),
            Segment::MapKeyAt(ix) => write!(f, "[mapKey@{ix}]"),
            Segment::MapValueAt(ix) => write!(f, "[map@{ix}]"),
            Segment::TupleItem(ix) => write!(f, "[tuple@{ix}]"),
            Segment::Some => f.write_str("::Some"),
            Segment::SingletonField(name) => write!(f, "[sStruct.{name}]"),
            Segment::ListField(name) => write!(f, "[fStruct].{name}"),
            Segment::MapField(name) => write!(f, "[mStruct][{name}]"),
            Segment::EnumField {
                enum_name,
                variant,
                field,
            } => write!(f, "[{enum_name}::{variant}].{field}"),
            Segment::VariantField(name) => write!(f, ".{name}"),
        }
    }
}

/// Parent-linked chain of [`Segment`]s from the conversion root to the
/// current node
#[derive(Debug, Clone, Copy)]
pub struct DataPath<'a> {
    parent: Option<&'a DataPath<'a>>,
    segment: Segment<'a>,
}

impl<'a> DataPath<'a> {
    pub const fn root(prefix: &'a str) -> Self {
        Self {
            parent: None,
            segment: Segment::Root(prefix),
        }
    }

    /// Extends `self` by one segment
    pub fn child(&'a self, segment: Segment<'a>) -> DataPath<'a> {
        DataPath {
            parent: Some(self),
            segment,
        }
    }
}

impl Display for DataPath<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(parent) = self.parent {
            Display::fmt(parent, f)?;
        }
        Display::fmt(&self.segment, f)
    }
}

/// Converts `value` into tagged data according to `schema`
///
/// `root` is prepended to the path of any error raised along the way.
pub fn encode(
    schema: &TypeSchema,
    value: &Value,
    registry: &PrimitiveRegistry,
    root: &str,
) -> CastResult<UplcData> {
    Encoder::new(registry).encode(schema, value, &DataPath::root(root))
}

/// Converts `data` back into a host value according to `schema`
pub fn decode(
    schema: &TypeSchema,
    data: &UplcData,
    registry: &PrimitiveRegistry,
    config: &CastConfig,
) -> CastResult<Value> {
    Decoder::new(registry, *config).decode(schema, data, &DataPath::root(""))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::schema::{StructFormat, StructSchema};

    #[test]
    fn path_rendering() {
        let root = DataPath::root("datum");
        let key = Value::string("hello");
        let a = root.child(Segment::ListField("inner"));
        let b = a.child(Segment::MapValue(&key));
        let c = b.child(Segment::EnumField {
            enum_name: "Action",
            variant: "Burn",
            field: "amount",
        });
        let d = c.child(Segment::Ref("Action"));
        assert_eq!(
            d.to_string(),
            "datum[fStruct].inner[map].hello[Action::Burn].amount::ref{Action}"
        );
        let e = root.child(Segment::MapKey(&key)).to_string();
        assert_eq!(e, "datum[mapKey 'hello']");
        let f = DataPath::root("")
            .child(Segment::TupleItem(1))
            .to_string();
        assert_eq!(f, "[tuple@1]");
    }

    #[test]
    fn definitions_resolve_latest() {
        let first: TypeSchema = StructSchema::new("s", "First", StructFormat::List).into();
        let second: TypeSchema = StructSchema::new("s", "Second", StructFormat::Map).into();
        let leaf = TypeSchema::internal("Int");
        let mut defs = Definitions::new();
        assert!(defs.is_empty());
        defs.register(&first);
        defs.register(&second);
        defs.register(&leaf);
        assert_eq!(defs.len(), 1);
        assert_eq!(defs.resolve("s").unwrap(), &second);
        assert_eq!(
            defs.resolve("t").unwrap_err().kind(),
            &CastErrorKind::UnresolvedReference { id: "t".into() }
        );
    }
}
