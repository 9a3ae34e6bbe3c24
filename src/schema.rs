//! Declarative type descriptions
//!
//! A [`TypeSchema`] describes the shape of a value crossing the boundary
//! between the contract and host code, and is the sole input (besides the
//! value itself) that drives conversion in either direction.
//!
//! # Recursion
//!
//! Schemas are finite trees. Self-referential types are expressed through
//! [`TypeSchema::Reference`] nodes that name the `id` of an enclosing
//! [`Struct`](TypeSchema::Struct), [`Enum`](TypeSchema::Enum) or
//! [`Variant`](TypeSchema::Variant) node. References are resolved against a
//! definition table populated during traversal, so the schema itself never
//! contains a cycle in memory and remains trivially serializable.
//!
//! # Wire shape
//!
//! With the `serde_impls` feature enabled, schemas (de)serialize from the
//! JSON emitted by the contract compiler, discriminated by a `kind` field:
//!
//! ```json
//! { "kind": "list", "itemType": { "kind": "internal", "name": "Int" } }
//! ```

#[cfg(feature = "serde_impls")]
use serde::{Deserialize, Serialize};

/// Wire encoding of a [`StructSchema`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_impls", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_impls", serde(rename_all = "lowercase"))]
pub enum StructFormat {
    /// Exactly one field, whose encoding is the whole struct's encoding
    Singleton,
    /// Fields encoded positionally, in declaration order
    List,
    /// Fields encoded as a string-keyed map inside a tag-0 constructor
    Map,
}

/// Named field of a struct or variant
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde_impls", derive(Serialize, Deserialize))]
pub struct FieldType {
    pub name: String,
    #[cfg_attr(feature = "serde_impls", serde(rename = "type"))]
    pub ty: TypeSchema,
}

impl FieldType {
    pub fn new(name: impl Into<String>, ty: TypeSchema) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Named product type
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde_impls", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_impls", serde(rename_all = "camelCase"))]
pub struct StructSchema {
    pub id: String,
    pub name: String,
    pub format: StructFormat,
    pub field_types: Vec<FieldType>,
}

impl StructSchema {
    pub fn new(id: impl Into<String>, name: impl Into<String>, format: StructFormat) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            format,
            field_types: Vec::new(),
        }
    }

    /// Appends a field, returning the updated schema
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: TypeSchema) -> Self {
        self.field_types.push(FieldType::new(name, ty));
        self
    }
}

/// Bare tagged constructor, used both for enum arms and for top-level
/// tagged records
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde_impls", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_impls", serde(rename_all = "camelCase"))]
pub struct VariantSchema {
    pub tag: u64,
    pub id: String,
    pub name: String,
    pub field_types: Vec<FieldType>,
}

impl VariantSchema {
    pub fn new(tag: u64, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag,
            id: id.into(),
            name: name.into(),
            field_types: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: TypeSchema) -> Self {
        self.field_types.push(FieldType::new(name, ty));
        self
    }
}

/// Nominal sum type
///
/// The tag of each variant is its position in `variant_types`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde_impls", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_impls", serde(rename_all = "camelCase"))]
pub struct EnumSchema {
    pub id: String,
    pub name: String,
    pub variant_types: Vec<VariantSchema>,
}

impl EnumSchema {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            variant_types: Vec::new(),
        }
    }

    /// Appends a variant whose tag is the next free position; the variant's
    /// id is derived from the enum's as `{enum_id}::{name}`.
    #[must_use]
    pub fn variant<I>(mut self, name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = FieldType>,
    {
        let name = name.into();
        let tag = self.variant_types.len() as u64;
        self.variant_types.push(VariantSchema {
            tag,
            id: format!("{}::{}", self.id, name),
            name,
            field_types: fields.into_iter().collect(),
        });
        self
    }

    /// Returns the position of the variant called `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.variant_types.iter().position(|v| v.name == name)
    }

    pub fn variant_names(&self) -> Vec<String> {
        self.variant_types.iter().map(|v| v.name.clone()).collect()
    }
}

/// Declarative, possibly self-referential type description
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde_impls", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde_impls",
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum TypeSchema {
    /// Primitive leaf, resolved by name against a
    /// [`PrimitiveRegistry`](crate::prim::PrimitiveRegistry)
    Internal { name: String },
    List { item_type: Box<TypeSchema> },
    Map {
        key_type: Box<TypeSchema>,
        value_type: Box<TypeSchema>,
    },
    Tuple { item_types: Vec<TypeSchema> },
    /// Optional value; [`Value::Null`](crate::Value::Null) is the absent case
    ///
    /// Absence is not nested: `option(option(X))` decodes a present-but-empty
    /// inner option to `Null`, which encodes back as the outer absent case.
    Option { some_type: Box<TypeSchema> },
    Struct(StructSchema),
    Enum(EnumSchema),
    Variant(VariantSchema),
    /// Indirection to a previously visited struct, enum or variant
    Reference { id: String },
}

impl TypeSchema {
    pub fn internal(name: impl Into<String>) -> Self {
        Self::Internal { name: name.into() }
    }

    pub fn list(item_type: TypeSchema) -> Self {
        Self::List {
            item_type: Box::new(item_type),
        }
    }

    pub fn map(key_type: TypeSchema, value_type: TypeSchema) -> Self {
        Self::Map {
            key_type: Box::new(key_type),
            value_type: Box::new(value_type),
        }
    }

    pub fn tuple(item_types: Vec<TypeSchema>) -> Self {
        Self::Tuple { item_types }
    }

    pub fn option(some_type: TypeSchema) -> Self {
        Self::Option {
            some_type: Box::new(some_type),
        }
    }

    pub fn reference(id: impl Into<String>) -> Self {
        Self::Reference { id: id.into() }
    }

    /// Discriminant name, as it appears in the `kind` field of the wire shape
    pub const fn kind(&self) -> &'static str {
        match self {
            TypeSchema::Internal { .. } => "internal",
            TypeSchema::List { .. } => "list",
            TypeSchema::Map { .. } => "map",
            TypeSchema::Tuple { .. } => "tuple",
            TypeSchema::Option { .. } => "option",
            TypeSchema::Struct(_) => "struct",
            TypeSchema::Enum(_) => "enum",
            TypeSchema::Variant(_) => "variant",
            TypeSchema::Reference { .. } => "reference",
        }
    }

    /// Returns the id under which this node registers itself in the
    /// definition table, if it is a nominal node
    pub fn definition_id(&self) -> Option<&str> {
        match self {
            TypeSchema::Struct(s) => Some(&s.id),
            TypeSchema::Enum(e) => Some(&e.id),
            TypeSchema::Variant(v) => Some(&v.id),
            _ => None,
        }
    }

    /// Parses a schema from the JSON emitted by the contract compiler
    #[cfg(feature = "serde_impls")]
    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }

    #[cfg(feature = "serde_impls")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<StructSchema> for TypeSchema {
    fn from(value: StructSchema) -> Self {
        Self::Struct(value)
    }
}

impl From<EnumSchema> for TypeSchema {
    fn from(value: EnumSchema) -> Self {
        Self::Enum(value)
    }
}

impl From<VariantSchema> for TypeSchema {
    fn from(value: VariantSchema) -> Self {
        Self::Variant(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn enum_tags_follow_position() {
        let schema = EnumSchema::new("Action", "Action")
            .variant("Mint", [])
            .variant("Burn", [FieldType::new("amount", TypeSchema::internal("Int"))]);
        assert_eq!(schema.variant_types[0].tag, 0);
        assert_eq!(schema.variant_types[1].tag, 1);
        assert_eq!(schema.variant_types[1].id, "Action::Burn");
        assert_eq!(schema.position("Burn"), Some(1));
        assert_eq!(schema.position("Swap"), None);
    }

    #[test]
    fn definition_ids() {
        let s: TypeSchema = StructSchema::new("s1", "Point", StructFormat::List).into();
        assert_eq!(s.definition_id(), Some("s1"));
        assert_eq!(TypeSchema::reference("s1").definition_id(), None);
        assert_eq!(TypeSchema::reference("s1").kind(), "reference");
    }

    #[cfg(feature = "serde_impls")]
    #[test]
    fn parse_compiler_json() {
        let src = r#"{
            "kind": "struct",
            "id": "__module__m__Datum[]",
            "name": "Datum",
            "format": "map",
            "fieldTypes": [
                { "name": "owner", "type": { "kind": "internal", "name": "PubKeyHash" } },
                { "name": "deadlines", "type": {
                    "kind": "list",
                    "itemType": { "kind": "option", "someType": { "kind": "internal", "name": "Time" } }
                } },
                { "name": "next", "type": { "kind": "reference", "id": "__module__m__Datum[]" } }
            ]
        }"#;
        let schema = TypeSchema::from_json(src).unwrap();
        let expected: TypeSchema = StructSchema::new("__module__m__Datum[]", "Datum", StructFormat::Map)
            .field("owner", TypeSchema::internal("PubKeyHash"))
            .field(
                "deadlines",
                TypeSchema::list(TypeSchema::option(TypeSchema::internal("Time"))),
            )
            .field("next", TypeSchema::reference("__module__m__Datum[]"))
            .into();
        assert_eq!(schema, expected);

        let reparsed = TypeSchema::from_json(&schema.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, schema);
    }

    #[cfg(feature = "serde_impls")]
    #[test]
    fn parse_enum_json() {
        let src = r#"{
            "kind": "enum", "id": "e", "name": "E",
            "variantTypes": [
                { "kind": "variant", "tag": 0, "id": "e::A", "name": "A", "fieldTypes": [] },
                { "kind": "variant", "tag": 1, "id": "e::B", "name": "B", "fieldTypes": [
                    { "name": "m", "type": { "kind": "map",
                        "keyType": { "kind": "internal", "name": "String" },
                        "valueType": { "kind": "tuple", "itemTypes": [
                            { "kind": "internal", "name": "Int" },
                            { "kind": "internal", "name": "Bool" }
                        ] } } }
                ] }
            ]
        }"#;
        let schema = TypeSchema::from_json(src).unwrap();
        match schema {
            TypeSchema::Enum(e) => {
                assert_eq!(e.variant_names(), ["A", "B"]);
                assert!(matches!(
                    e.variant_types[1].field_types[0].ty,
                    TypeSchema::Map { .. }
                ));
            }
            other => panic!("expected enum schema, found {}", other.kind()),
        }
    }
}
