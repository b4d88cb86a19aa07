//! Benchmarks for memcache-wire hashing and frame decoding

use bytes::BytesMut;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memcache_wire::{decode_response, encode_response, HashAlgorithm, Opcode, Response, Status};

fn hash_benchmarks(c: &mut Criterion) {
    let short_key = "user:1042";
    let long_key = "UDATA:very-long-namespace:region-eu-west-1:tenant-4711:session:9f2c8d3a17e6";

    let mut group = c.benchmark_group("hash");
    for algorithm in HashAlgorithm::ALL {
        group.bench_function(format!("{}/short", algorithm), |b| {
            b.iter(|| algorithm.hash(black_box(short_key)))
        });
        group.bench_function(format!("{}/long", algorithm), |b| {
            b.iter(|| algorithm.hash(black_box(long_key)))
        });
    }
    group.finish();
}

fn codec_benchmarks(c: &mut Criterion) {
    let frame = encode_response(
        &Response::new(Opcode::GetK, Status::NoError)
            .with_opaque(0xdead_beef)
            .with_cas(42)
            .with_key("user:1042")
            .with_extras([0x00, 0x00, 0x00, 0x0e])
            .with_value(vec![0xab; 1024]),
    );

    c.bench_function("decode_response/1k-value", |b| {
        b.iter(|| {
            let mut buf = BytesMut::from(&frame[..]);
            decode_response(black_box(&mut buf))
        })
    });
}

criterion_group!(benches, hash_benchmarks, codec_benchmarks);
criterion_main!(benches);
