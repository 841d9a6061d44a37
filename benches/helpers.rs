use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use loosely::{
    capitalize, chunk, chunk_slice, filter, get_or_undefined, get_path, map, reduce, to_number,
    to_value, Value,
};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: u32,
}

fn products(size: u32) -> Value {
    let items: Vec<Product> = (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("product {}", i),
            price: i % 17,
        })
        .collect();
    to_value(&items).unwrap()
}

fn integers(size: usize) -> Value {
    Value::dense((0..size as i64).map(Value::from))
}

fn benchmark_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk");

    for size in [10, 100, 1000].iter() {
        let input = integers(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| chunk(black_box(input), 3))
        });
    }

    let sparse = Value::Array((0..1000).map(|i| (i % 3 != 0).then(|| Value::from(i))).collect());
    group.bench_function("sparse_1000", |b| b.iter(|| chunk(black_box(&sparse), 7)));

    let raw: Vec<u32> = (0..1000).collect();
    group.bench_function("slice_1000", |b| b.iter(|| chunk_slice(black_box(&raw), 7)));

    group.finish();
}

fn benchmark_capitalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("capitalize");

    let short = Value::from("fred");
    let long = Value::from("THIS IS A VERY LONG SENTENCE THAT NEEDS EVERY CHARACTER LOWERED");
    let unicode = Value::from("åBÇ ßMALL ÉCOLE");

    group.bench_function("short", |b| b.iter(|| capitalize(black_box(&short))));
    group.bench_function("long", |b| b.iter(|| capitalize(black_box(&long))));
    group.bench_function("unicode", |b| b.iter(|| capitalize(black_box(&unicode))));

    group.finish();
}

fn benchmark_to_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_number");

    let inputs = [
        ("integer_text", Value::from("12345")),
        ("float_text", Value::from("  -1.25e3  ")),
        ("hex_text", Value::from("0xff")),
        ("invalid_text", Value::from("not a number")),
        ("number", Value::from(3.5)),
    ];

    for (name, input) in inputs.iter() {
        group.bench_function(*name, |b| b.iter(|| to_number(black_box(input))));
    }

    group.finish();
}

fn benchmark_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection");

    for size in [10, 100, 1000].iter() {
        let items = products(*size);
        let price = |p: &Value| get_or_undefined(p, "price").as_i64().unwrap_or(0);

        group.bench_with_input(BenchmarkId::new("filter", size), &items, |b, items| {
            b.iter(|| filter(black_box(items), |p, _| price(p) < 5))
        });

        group.bench_with_input(BenchmarkId::new("map", size), &items, |b, items| {
            b.iter(|| map(black_box(items), |p, _| get_or_undefined(p, "name").clone()))
        });

        group.bench_with_input(BenchmarkId::new("reduce", size), &items, |b, items| {
            b.iter(|| reduce(black_box(items), |sum, p, _| sum + price(p), 0))
        });
    }

    group.finish();
}

fn benchmark_get_path(c: &mut Criterion) {
    let data = loosely::value!({ "a": [{ "b": { "c": 3 } }] });
    let fallback = Value::Undefined;

    c.bench_function("get_path_nested", |b| {
        b.iter(|| get_path(black_box(&data), black_box("a[0].b.c"), &fallback))
    });
}

criterion_group!(
    benches,
    benchmark_chunk,
    benchmark_capitalize,
    benchmark_to_number,
    benchmark_collection,
    benchmark_get_path
);
criterion_main!(benches);
