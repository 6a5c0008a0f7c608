use criterion::{
    Criterion, //
    criterion_group,
    criterion_main,
};
use digit_forge::*;
use std::hint::black_box;

fn benchmark_reading_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("reading_widths");

    group.bench_function("read_u8_max", |b| {
        b.iter(|| read_u8(black_box(b"255")))
    });

    group.bench_function("read_u16_max", |b| {
        b.iter(|| read_u16(black_box(b"65535")))
    });

    group.bench_function("read_u32_small", |b| {
        b.iter(|| read_u32(black_box(b"4096")))
    });

    group.bench_function("read_u32_max", |b| {
        b.iter(|| read_u32(black_box(b"4294967295")))
    });

    group.bench_function("read_u64_max", |b| {
        b.iter(|| {
            read_u64(black_box(
                b"18446744073709551615",
            ))
        })
    });

    group.bench_function("read_u128_max", |b| {
        b.iter(|| {
            read_u128(black_box(
                b"340282366920938463463374607431768211455",
            ))
        })
    });

    group.bench_function("read_usize_leading_zeros", |b| {
        b.iter(|| read_usize(black_box(b"000000000000001024")))
    });

    group.finish();
}

fn benchmark_rejection(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejection");

    group.bench_function("invalid_first_byte", |b| {
        b.iter(|| read_u64(black_box(b"x1234567890")))
    });

    group.bench_function("invalid_last_byte", |b| {
        b.iter(|| read_u64(black_box(b"1234567890x")))
    });

    group.bench_function("overflow", |b| {
        b.iter(|| read_u64(black_box(b"99999999999999999999")))
    });

    group.finish();
}

fn benchmark_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");

    group.bench_function("validate", |b| {
        b.iter(|| validate(black_box(b"1234567890")))
    });

    group.bench_function("sequence_new_and_evaluate", |b| {
        b.iter(|| DigitSequence::new(black_box(b"8192")).and_then(|s| s.to_usize()))
    });

    group.bench_function("pow10_u64", |b| {
        b.iter(|| pow10_u64(black_box(19)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_reading_widths,
    benchmark_rejection,
    benchmark_sequence
);
criterion_main!(benches);
