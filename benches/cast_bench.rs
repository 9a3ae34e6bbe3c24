use criterion::{black_box, criterion_group, criterion_main, Criterion};

use uplc_cast::prelude::*;

fn int_list() -> TypeSchema {
    EnumSchema::new("IntList", "IntList")
        .variant(
            "Cons",
            [
                FieldType::new("head", TypeSchema::internal("Int")),
                FieldType::new("tail", TypeSchema::reference("IntList")),
            ],
        )
        .variant("Nil", [])
        .into()
}

fn cons_list(len: i64) -> Value {
    (0..len).rev().fold(
        Value::variant("Nil", Value::Record(Record::new())),
        |tail, head| {
            Value::variant(
                "Cons",
                Value::record([("head", Value::int(head)), ("tail", tail)]),
            )
        },
    )
}

fn datum() -> TypeSchema {
    StructSchema::new("Datum", "Datum", StructFormat::Map)
        .field("owner", TypeSchema::internal("PubKeyHash"))
        .field(
            "balances",
            TypeSchema::map(TypeSchema::internal("String"), TypeSchema::internal("Int")),
        )
        .field("deadline", TypeSchema::option(TypeSchema::internal("Time")))
        .into()
}

fn recursive_bench(c: &mut Criterion) {
    let cast = Cast::new(int_list(), CastConfig::testnet());
    let value = cons_list(64);
    let data = cast.to_uplc_data(&value).unwrap();
    c.bench_function("encode_cons_list_64", |b| {
        b.iter(|| black_box(cast.to_uplc_data(&value)))
    });
    c.bench_function("decode_cons_list_64", |b| {
        b.iter(|| black_box(cast.from_uplc_data(&data)))
    });
}

fn struct_bench(c: &mut Criterion) {
    let cast = Cast::new(datum(), CastConfig::testnet());
    let balances = (0..32)
        .map(|i| (format!("account{i}"), Value::int(i * 1_000)))
        .collect::<Record>();
    let value = Value::record([
        ("owner", Value::Bytes(vec![0x5a; 28])),
        ("balances", Value::Record(balances)),
        ("deadline", Value::int(1_700_000_000_000i64)),
    ]);
    let data = cast.to_uplc_data(&value).unwrap();
    c.bench_function("encode_map_struct", |b| {
        b.iter(|| black_box(cast.to_uplc_data(&value)))
    });
    c.bench_function("decode_map_struct", |b| {
        b.iter(|| black_box(cast.from_uplc_data(&data)))
    });
}

criterion_group! {
    name = cast_benches;
    config = Criterion::default();
    targets = recursive_bench, struct_bench
}

criterion_main!(cast_benches);
