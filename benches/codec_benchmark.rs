use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rsfec::ReedSolomon;
use std::hint::black_box;

/// Encode throughput across parity counts on the largest codeword the
/// field allows for each.
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for parity_len in [4usize, 16, 32] {
        let data_len = 255 - parity_len;
        let rs = ReedSolomon::new(data_len, parity_len).unwrap();
        let message: Vec<u8> = (0..data_len).map(|i| (i * 31 + 7) as u8).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(parity_len),
            &parity_len,
            |b, _| b.iter(|| rs.encode(black_box(&message)).unwrap()),
        );
    }

    group.finish();
}

/// Decode cost on the three interesting paths: clean word (syndromes
/// only), light corruption, and full-capacity corruption.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let rs = ReedSolomon::new(223, 32).unwrap();
    let message: Vec<u8> = (0..223).map(|i| (i * 13 + 3) as u8).collect();
    let clean = rs.encode(&message).unwrap();

    let mut two_errors = clean.clone();
    two_errors[17] ^= 0xa5;
    two_errors[200] ^= 0x3c;

    let mut full_capacity = clean.clone();
    for idx in 0..16usize {
        full_capacity[idx * 15 + 3] ^= (idx * 19 + 11) as u8;
    }

    group.bench_function("clean", |b| {
        b.iter(|| rs.decode(black_box(&clean)).unwrap())
    });
    group.bench_function("two_errors", |b| {
        b.iter(|| rs.decode(black_box(&two_errors)).unwrap())
    });
    group.bench_function("sixteen_errors", |b| {
        b.iter(|| rs.decode(black_box(&full_capacity)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
