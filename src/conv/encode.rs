//! Host value to tagged data

use super::{DataPath, Definitions, Segment};
use crate::data::{encode_option, UplcData};
use crate::error::{CastError, CastResult, VariantError};
use crate::prim::PrimitiveRegistry;
use crate::schema::{FieldType, StructFormat, StructSchema, TypeSchema};
use crate::value::Value;
use std::borrow::Cow;

/// Single-use encoding pass over one schema
///
/// Owns the definition table for the duration of one top-level call.
pub struct Encoder<'s> {
    registry: &'s PrimitiveRegistry,
    defs: Definitions<'s>,
}

impl<'s> Encoder<'s> {
    pub fn new(registry: &'s PrimitiveRegistry) -> Self {
        Self {
            registry,
            defs: Definitions::new(),
        }
    }

    /// Encodes `value` against `schema`, annotating any error with `path`
    /// unless a deeper frame already has.
    pub fn encode(
        &mut self,
        schema: &'s TypeSchema,
        value: &Value,
        path: &DataPath<'_>,
    ) -> CastResult<UplcData> {
        self.encode_node(schema, value, path)
            .map_err(|err| err.annotate(|| path.to_string()))
    }

    fn encode_node(
        &mut self,
        schema: &'s TypeSchema,
        value: &Value,
        path: &DataPath<'_>,
    ) -> CastResult<UplcData> {
        log::trace!("encoding {} at `{}`", schema.kind(), path);
        match schema {
            TypeSchema::Reference { id } => {
                let target = self.defs.resolve(id)?;
                self.encode(target, value, &path.child(Segment::Ref(id)))
            }
            TypeSchema::Internal { name } => self.registry.get(name)?.encode(value),
            TypeSchema::List { item_type } => value
                .expect_list()?
                .iter()
                .enumerate()
                .map(|(ix, item)| self.encode(item_type, item, &path.child(Segment::ListItem(ix))))
                .collect::<CastResult<Vec<_>>>()
                .map(UplcData::List),
            TypeSchema::Map {
                key_type,
                value_type,
            } => {
                let entries = map_entries(value)?;
                let mut pairs = Vec::with_capacity(entries.len());
                for (key, item) in &entries {
                    let key: &Value = key;
                    pairs.push((
                        self.encode(key_type, key, &path.child(Segment::MapKey(key)))?,
                        self.encode(value_type, item, &path.child(Segment::MapValue(key)))?,
                    ));
                }
                Ok(UplcData::Map(pairs))
            }
            TypeSchema::Tuple { item_types } => {
                let items = value.expect_list()?;
                if items.len() != item_types.len() {
                    return Err(CastError::arity(
                        "items in tuple",
                        item_types.len(),
                        items.len(),
                    ));
                }
                item_types
                    .iter()
                    .zip(items)
                    .enumerate()
                    .map(|(ix, (ty, item))| self.encode(ty, item, &path.child(Segment::TupleItem(ix))))
                    .collect::<CastResult<Vec<_>>>()
                    .map(UplcData::List)
            }
            TypeSchema::Option { some_type } => {
                let inner = match value {
                    Value::Null => None,
                    present => Some(self.encode(some_type, present, &path.child(Segment::Some))?),
                };
                Ok(encode_option(inner))
            }
            TypeSchema::Struct(st) => {
                self.defs.register(schema);
                self.encode_struct(st, value, path)
            }
            TypeSchema::Enum(en) => {
                self.defs.register(schema);
                let record = value.expect_record()?;
                let (name, payload) = match record.first() {
                    Some(entry) if record.len() == 1 => entry,
                    _ => return Err(VariantError::NotSingleKey { keys: record.len() }.into()),
                };
                let tag = en.position(name).ok_or_else(|| VariantError::UnknownName {
                    name: name.clone(),
                    expected: en.variant_names(),
                })?;
                let variant = &en.variant_types[tag];
                let fields = self.encode_fields(&variant.field_types, payload, path, |field| {
                    Segment::EnumField {
                        enum_name: &en.name,
                        variant: &variant.name,
                        field,
                    }
                })?;
                Ok(UplcData::constr(tag as u64, fields))
            }
            TypeSchema::Variant(variant) => {
                self.defs.register(schema);
                let fields =
                    self.encode_fields(&variant.field_types, value, path, Segment::VariantField)?;
                Ok(UplcData::constr(variant.tag, fields))
            }
        }
    }

    fn encode_struct(
        &mut self,
        st: &'s StructSchema,
        value: &Value,
        path: &DataPath<'_>,
    ) -> CastResult<UplcData> {
        match st.format {
            StructFormat::Singleton => match st.field_types.as_slice() {
                [field] => self.encode(
                    &field.ty,
                    value.require_field(&field.name)?,
                    &path.child(Segment::SingletonField(&field.name)),
                ),
                fields => Err(CastError::arity(
                    format!("fields in singleton struct {}", st.name),
                    1,
                    fields.len(),
                )),
            },
            StructFormat::List => self
                .encode_fields(&st.field_types, value, path, Segment::ListField)
                .map(UplcData::List),
            StructFormat::Map => {
                let record = value.expect_record()?;
                if let Some(missing) = st
                    .field_types
                    .iter()
                    .find(|field| !record.contains_key(field.name.as_str()))
                {
                    return Err(CastError::missing_field(&missing.name));
                }
                // Input order is kept; keys the struct does not declare are dropped.
                let mut pairs = Vec::with_capacity(st.field_types.len());
                for (key, item) in record {
                    if let Some(field) = st.field_types.iter().find(|field| &field.name == key) {
                        let data = self.encode(&field.ty, item, &path.child(Segment::MapField(key)))?;
                        pairs.push((UplcData::bytes(field.name.as_bytes()), data));
                    }
                }
                Ok(UplcData::constr(0, vec![UplcData::Map(pairs)]))
            }
        }
    }

    /// Encodes each declared field of `source`, by name, in declaration order
    fn encode_fields<F>(
        &mut self,
        field_types: &'s [FieldType],
        source: &Value,
        path: &DataPath<'_>,
        segment: F,
    ) -> CastResult<Vec<UplcData>>
    where
        F: Fn(&'s str) -> Segment<'s>,
    {
        field_types
            .iter()
            .map(|field| {
                let item = source.require_field(&field.name)?;
                self.encode(&field.ty, item, &path.child(segment(&field.name)))
            })
            .collect()
    }
}

/// Normalizes the accepted map inputs into ordered key/value pairs:
/// a [`Value::Map`], a list of two-item lists, or a [`Value::Record`] whose
/// keys become [`Value::String`]s.
fn map_entries(value: &Value) -> CastResult<Vec<(Cow<'_, Value>, &Value)>> {
    match value {
        Value::Map(pairs) => Ok(pairs.iter().map(|(k, v)| (Cow::Borrowed(k), v)).collect()),
        Value::List(items) => items
            .iter()
            .map(|item| match item.expect_list()? {
                [k, v] => Ok((Cow::Borrowed(k), v)),
                pair => Err(CastError::arity("items in map entry", 2, pair.len())),
            })
            .collect(),
        Value::Record(record) => Ok(record
            .iter()
            .map(|(k, v)| (Cow::Owned(Value::string(k.as_str())), v))
            .collect()),
        other => Err(CastError::shape(
            "map, list of pairs or record",
            other.kind_name(),
        )),
    }
}
