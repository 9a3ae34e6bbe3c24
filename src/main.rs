use uplc_cast::prelude::*;

fn check(cast: &Cast, value: Value, expected: UplcData) {
    let data = cast.to_uplc_data(&value).unwrap();
    assert_eq!(data, expected);
    assert_eq!(cast.from_uplc_data(&data).unwrap(), value);
}

fn main() {
    let schema: TypeSchema = EnumSchema::new("FooBar", "FooBar")
        .variant("Foo", [])
        .variant(
            "Bar",
            [FieldType::new(
                "data",
                TypeSchema::map(TypeSchema::internal("String"), TypeSchema::internal("Data")),
            )],
        )
        .into();
    let cast = Cast::new(schema, CastConfig::testnet());

    check(
        &cast,
        Value::variant("Foo", Value::Record(Record::new())),
        UplcData::constr(0, vec![]),
    );
    check(
        &cast,
        Value::variant(
            "Bar",
            Value::record([(
                "data",
                Value::Map(vec![
                    (Value::string("hello"), Value::Data(UplcData::int(0))),
                    (Value::string("world"), Value::Data(UplcData::Bytes(vec![]))),
                ]),
            )]),
        ),
        UplcData::constr(
            1,
            vec![UplcData::Map(vec![
                (UplcData::Bytes(b"hello".to_vec()), UplcData::int(0)),
                (UplcData::Bytes(b"world".to_vec()), UplcData::Bytes(vec![])),
            ])],
        ),
    );

    let err = cast
        .to_uplc_data_at(&Value::variant("Baz", Value::Null), "redeemer")
        .unwrap_err();
    println!("{err}");
}
