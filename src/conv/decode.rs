//! Tagged data to host value

use super::{DataPath, Definitions, Segment};
use crate::cast::CastConfig;
use crate::data::{decode_option, UplcData};
use crate::error::{CastError, CastResult, VariantError};
use crate::prim::PrimitiveRegistry;
use crate::schema::{FieldType, StructFormat, StructSchema, TypeSchema};
use crate::value::{Record, Value};

/// Single-use decoding pass over one schema
pub struct Decoder<'s> {
    registry: &'s PrimitiveRegistry,
    config: CastConfig,
    defs: Definitions<'s>,
}

impl<'s> Decoder<'s> {
    pub fn new(registry: &'s PrimitiveRegistry, config: CastConfig) -> Self {
        Self {
            registry,
            config,
            defs: Definitions::new(),
        }
    }

    /// Decodes `data` against `schema`, annotating any error with `path`
    /// unless a deeper frame already has.
    pub fn decode(
        &mut self,
        schema: &'s TypeSchema,
        data: &UplcData,
        path: &DataPath<'_>,
    ) -> CastResult<Value> {
        self.decode_node(schema, data, path)
            .map_err(|err| err.annotate(|| path.to_string()))
    }

    fn decode_node(
        &mut self,
        schema: &'s TypeSchema,
        data: &UplcData,
        path: &DataPath<'_>,
    ) -> CastResult<Value> {
        log::trace!("decoding {} at `{}`", schema.kind(), path);
        match schema {
            TypeSchema::Reference { id } => {
                let target = self.defs.resolve(id)?;
                self.decode(target, data, &path.child(Segment::Ref(id)))
            }
            TypeSchema::Internal { name } => self.registry.get(name)?.decode(data, &self.config),
            TypeSchema::List { item_type } => data
                .expect_list()?
                .iter()
                .enumerate()
                .map(|(ix, item)| self.decode(item_type, item, &path.child(Segment::ListItem(ix))))
                .collect::<CastResult<Vec<_>>>()
                .map(Value::List),
            TypeSchema::Map {
                key_type,
                value_type,
            } => data
                .expect_map()?
                .iter()
                .enumerate()
                .map(|(ix, (key, item))| {
                    Ok((
                        self.decode(key_type, key, &path.child(Segment::MapKeyAt(ix)))?,
                        self.decode(value_type, item, &path.child(Segment::MapValueAt(ix)))?,
                    ))
                })
                .collect::<CastResult<Vec<_>>>()
                .map(Value::Map),
            TypeSchema::Tuple { item_types } => {
                let items = data.expect_list()?;
                if items.len() != item_types.len() {
                    return Err(CastError::arity(
                        "items in tuple data",
                        item_types.len(),
                        items.len(),
                    ));
                }
                item_types
                    .iter()
                    .zip(items)
                    .enumerate()
                    .map(|(ix, (ty, item))| self.decode(ty, item, &path.child(Segment::TupleItem(ix))))
                    .collect::<CastResult<Vec<_>>>()
                    .map(Value::List)
            }
            TypeSchema::Option { some_type } => match decode_option(data)? {
                Some(inner) => self.decode(some_type, inner, &path.child(Segment::Some)),
                None => Ok(Value::Null),
            },
            TypeSchema::Struct(st) => {
                self.defs.register(schema);
                self.decode_struct(st, data, path)
            }
            TypeSchema::Enum(en) => {
                self.defs.register(schema);
                let (tag, fields) = data.expect_constr()?;
                let variant = usize::try_from(tag)
                    .ok()
                    .and_then(|ix| en.variant_types.get(ix))
                    .ok_or(VariantError::TagOutOfRange {
                        tag,
                        count: en.variant_types.len(),
                    })?;
                if fields.len() != variant.field_types.len() {
                    return Err(CastError::arity(
                        format!("fields for variant {} (tag {tag})", variant.name),
                        variant.field_types.len(),
                        fields.len(),
                    ));
                }
                let record = self.decode_fields(&variant.field_types, fields, path, |field| {
                    Segment::EnumField {
                        enum_name: &en.name,
                        variant: &variant.name,
                        field,
                    }
                })?;
                Ok(Value::variant(variant.name.as_str(), Value::Record(record)))
            }
            TypeSchema::Variant(variant) => {
                self.defs.register(schema);
                // The tag itself is left to the enclosing context.
                let (_, fields) = data.expect_constr()?;
                if fields.len() != variant.field_types.len() {
                    return Err(CastError::arity(
                        format!("fields for variant {}", variant.name),
                        variant.field_types.len(),
                        fields.len(),
                    ));
                }
                self.decode_fields(&variant.field_types, fields, path, Segment::VariantField)
                    .map(Value::Record)
            }
        }
    }

    fn decode_struct(
        &mut self,
        st: &'s StructSchema,
        data: &UplcData,
        path: &DataPath<'_>,
    ) -> CastResult<Value> {
        let expected = st.field_types.len();
        match st.format {
            StructFormat::Singleton => match st.field_types.as_slice() {
                [field] => {
                    let value =
                        self.decode(&field.ty, data, &path.child(Segment::SingletonField(&field.name)))?;
                    Ok(Value::record([(field.name.as_str(), value)]))
                }
                fields => Err(CastError::arity(
                    format!("fields in singleton struct {}", st.name),
                    1,
                    fields.len(),
                )),
            },
            StructFormat::List => {
                let items = data.expect_list()?;
                if items.len() != expected {
                    return Err(CastError::arity(
                        format!("fields in struct {}", st.name),
                        expected,
                        items.len(),
                    ));
                }
                self.decode_fields(&st.field_types, items, path, Segment::ListField)
                    .map(Value::Record)
            }
            StructFormat::Map => {
                let wrapped = data.expect_constr_with(0, 1)?;
                let entries = wrapped[0]
                    .expect_map()?
                    .iter()
                    .map(|(key, item)| Ok((key.expect_bytes()?, item)))
                    .collect::<CastResult<Vec<_>>>()?;
                if entries.len() != expected {
                    return Err(CastError::arity(
                        format!("fields in struct {}", st.name),
                        expected,
                        entries.len(),
                    ));
                }
                // Declared order, regardless of the order of the entries
                let mut record = Record::with_capacity(expected);
                for field in &st.field_types {
                    let item = entries
                        .iter()
                        .find(|(key, _)| *key == field.name.as_bytes())
                        .map(|(_, item)| *item)
                        .ok_or_else(|| CastError::missing_field(&field.name))?;
                    let value =
                        self.decode(&field.ty, item, &path.child(Segment::MapField(&field.name)))?;
                    record.insert(field.name.clone(), value);
                }
                Ok(Value::Record(record))
            }
        }
    }

    /// Decodes `items` positionally against `field_types`, whose lengths the
    /// caller has already checked to be equal.
    fn decode_fields<F>(
        &mut self,
        field_types: &'s [FieldType],
        items: &[UplcData],
        path: &DataPath<'_>,
        segment: F,
    ) -> CastResult<Record>
    where
        F: Fn(&'s str) -> Segment<'s>,
    {
        field_types
            .iter()
            .zip(items)
            .map(|(field, item)| {
                let value = self.decode(&field.ty, item, &path.child(segment(&field.name)))?;
                Ok((field.name.clone(), value))
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::CastErrorKind;
    use crate::schema::{EnumSchema, VariantSchema};

    fn decode(schema: &TypeSchema, data: &UplcData) -> CastResult<Value> {
        crate::conv::decode(
            schema,
            data,
            &PrimitiveRegistry::builtin(),
            &CastConfig::default(),
        )
    }

    fn int() -> TypeSchema {
        TypeSchema::internal("Int")
    }

    fn point(format: StructFormat) -> TypeSchema {
        StructSchema::new("pt", "Point", format)
            .field("x", int())
            .field("y", int())
            .into()
    }

    #[test]
    fn list_struct_arity() {
        let schema = point(StructFormat::List);
        for n in [0usize, 1, 3, 4] {
            let data = UplcData::List((0..n).map(|i| UplcData::int(i as i64)).collect());
            let err = decode(&schema, &data).unwrap_err();
            assert_eq!(
                err.kind(),
                &CastErrorKind::ArityMismatch {
                    what: "fields in struct Point".into(),
                    expected: 2,
                    actual: n,
                }
            );
        }
    }

    #[test]
    fn map_struct_uses_declared_order() {
        let schema = point(StructFormat::Map);
        let data = UplcData::constr(
            0,
            vec![UplcData::Map(vec![
                (UplcData::bytes(b"y".to_vec()), UplcData::int(2)),
                (UplcData::bytes(b"x".to_vec()), UplcData::int(1)),
            ])],
        );
        let value = decode(&schema, &data).unwrap();
        let keys: Vec<&str> = value
            .as_record()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["x", "y"]);
    }

    #[test]
    fn map_struct_missing_key() {
        let schema = point(StructFormat::Map);
        let data = UplcData::constr(
            0,
            vec![UplcData::Map(vec![
                (UplcData::bytes(b"x".to_vec()), UplcData::int(1)),
                (UplcData::bytes(b"z".to_vec()), UplcData::int(2)),
            ])],
        );
        assert_eq!(
            decode(&schema, &data).unwrap_err().kind(),
            &CastErrorKind::MissingField { field: "y".into() }
        );
    }

    #[test]
    fn map_struct_requires_tag_zero() {
        let schema = point(StructFormat::Map);
        let data = UplcData::constr(1, vec![UplcData::Map(vec![])]);
        assert!(matches!(
            decode(&schema, &data).unwrap_err().kind(),
            CastErrorKind::ShapeMismatch { .. }
        ));
    }

    #[test]
    fn enum_tag_bounds() {
        let schema: TypeSchema = EnumSchema::new("e", "Either")
            .variant("Left", [FieldType::new("value", int())])
            .variant("Right", [FieldType::new("value", int())])
            .into();

        let err = decode(&schema, &UplcData::constr(2, vec![UplcData::int(0)])).unwrap_err();
        assert_eq!(
            err.kind(),
            &CastErrorKind::InvalidVariant(VariantError::TagOutOfRange { tag: 2, count: 2 })
        );

        let err = decode(&schema, &UplcData::constr(1, vec![])).unwrap_err();
        assert!(matches!(
            err.kind(),
            CastErrorKind::ArityMismatch { expected: 1, actual: 0, .. }
        ));

        let value = decode(&schema, &UplcData::constr(1, vec![UplcData::int(7)])).unwrap();
        assert_eq!(
            value,
            Value::variant("Right", Value::record([("value", Value::int(7))]))
        );
    }

    #[test]
    fn variant_ignores_tag() {
        let schema: TypeSchema = VariantSchema::new(0, "v", "V").field("n", int()).into();
        let value = decode(&schema, &UplcData::constr(5, vec![UplcData::int(1)])).unwrap();
        assert_eq!(value, Value::record([("n", Value::int(1))]));
        assert!(decode(&schema, &UplcData::constr(0, vec![])).is_err());
    }

    #[test]
    fn tuple_arity() {
        let schema = TypeSchema::tuple(vec![int(), TypeSchema::internal("Bool")]);
        let data = UplcData::List(vec![UplcData::int(1)]);
        assert!(matches!(
            decode(&schema, &data).unwrap_err().kind(),
            CastErrorKind::ArityMismatch { expected: 2, actual: 1, .. }
        ));
    }

    #[test]
    fn decode_errors_carry_path() {
        let schema = TypeSchema::map(
            TypeSchema::internal("String"),
            TypeSchema::list(TypeSchema::option(int())),
        );
        let data = UplcData::Map(vec![
            (UplcData::bytes(b"ok".to_vec()), UplcData::List(vec![])),
            (
                UplcData::bytes(b"bad".to_vec()),
                UplcData::List(vec![UplcData::constr(0, vec![UplcData::bytes(b"x".to_vec())])]),
            ),
        ]);
        let err = decode(&schema, &data).unwrap_err();
        assert_eq!(err.path(), Some("[map@1].list[0]::Some"));
    }

    #[test]
    fn lossy_primitive_fails() {
        let schema = TypeSchema::internal("DCert");
        let err = decode(&schema, &UplcData::int(0)).unwrap_err();
        assert_eq!(
            err.kind(),
            &CastErrorKind::LossyPrimitive { name: "DCert".into() }
        );
    }

    #[test]
    fn unknown_primitive_fails() {
        let schema = TypeSchema::list(TypeSchema::internal("TxOutput"));
        let err = decode(&schema, &UplcData::List(vec![UplcData::int(0)])).unwrap_err();
        assert_eq!(
            err.kind(),
            &CastErrorKind::UnknownPrimitive { name: "TxOutput".into() }
        );
        assert_eq!(err.path(), Some(".list[0]"));
    }
}
