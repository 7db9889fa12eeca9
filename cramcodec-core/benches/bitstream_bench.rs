//! Performance benchmarks for the MSB-first bit primitives
//!
//! This benchmark suite evaluates:
//! - Single-bit reads across a whole buffer
//! - Multi-bit reads for the field widths CRAM codecs commonly use
//! - Aligned byte reads against the generic 8-bit path

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use cramcodec_core::bitstream::{BitCursor, BitReader, read_bits};
use std::hint::black_box;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Random data - varied byte values
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }
}

const SIZE: usize = 64 * 1024;

fn bench_read_bit(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_bit");
    let data = test_data::random(SIZE);

    group.throughput(Throughput::Bytes(SIZE as u64));
    group.bench_function("64KB", |b| {
        b.iter(|| {
            let mut reader = BitReader::new(black_box(&data));
            let mut acc = 0u32;
            while let Ok(bit) = reader.read_bit() {
                acc = acc.wrapping_add(bit);
            }
            black_box(acc);
        });
    });

    group.finish();
}

fn bench_read_bits_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_bits_widths");
    let data = test_data::random(SIZE);

    for width in [3u32, 8, 13, 32] {
        group.throughput(Throughput::Bytes(SIZE as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| {
                let mut cursor = BitCursor::START;
                let mut acc = 0u32;
                while let Ok((value, next)) = read_bits(black_box(&data), cursor, width) {
                    acc = acc.wrapping_add(value);
                    cursor = next;
                }
                black_box(acc);
            });
        });
    }

    group.finish();
}

fn bench_aligned_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("aligned_bytes");
    let data = test_data::random(SIZE);

    group.throughput(Throughput::Bytes(SIZE as u64));
    group.bench_function("read_aligned_byte", |b| {
        b.iter(|| {
            let mut reader = BitReader::new(black_box(&data));
            let mut acc = 0u32;
            while let Ok(byte) = reader.read_aligned_byte() {
                acc = acc.wrapping_add(byte as u32);
            }
            black_box(acc);
        });
    });
    group.bench_function("read_bits_8", |b| {
        b.iter(|| {
            let mut reader = BitReader::new(black_box(&data));
            let mut acc = 0u32;
            while let Ok(value) = reader.read_bits(8) {
                acc = acc.wrapping_add(value);
            }
            black_box(acc);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_read_bit,
    bench_read_bits_widths,
    bench_aligned_bytes,
);
criterion_main!(benches);
