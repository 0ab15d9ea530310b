use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use polyjson_core::{from_str, to_string, DoublePolicy, Value};

/// A medium-sized document with a spread of value kinds.
fn sample_document() -> String {
    let mut out = String::from("{\"records\":[");
    for i in 0..256 {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&format!(
            "{{\"id\":{i},\"score\":{}.5,\"name\":\"user-{i}\",\"active\":{},\"note\":null}}",
            i * 3,
            i % 2 == 0
        ));
    }
    out.push_str("]}");
    out
}

fn bench_decode(c: &mut Criterion) {
    let text = sample_document();
    c.bench_function("decode", |b| {
        b.iter(|| from_str::<DoublePolicy>(black_box(&text)).unwrap())
    });
}

fn bench_encode(c: &mut Criterion) {
    let doc: Value = from_str(&sample_document()).unwrap();
    c.bench_function("encode", |b| b.iter(|| to_string(black_box(&doc))));
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
