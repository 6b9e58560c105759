use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Duration;

use bitpress::{compress_to_vec, decompress, peek_decoded_size};

const LEN: usize = 1 << 20;

fn sparse_input(period: usize) -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut data = vec![0u8; LEN];
    let mut position = 0;
    while position < LEN * 8 {
        data[position / 8] |= 1 << (position % 8);
        position += rng.gen_range(1..=2 * period);
    }
    data
}

fn uniform_input() -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(1);
    (0..LEN).map(|_| rng.gen()).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let inputs = [
        ("sparse", sparse_input(256)),
        ("dense", sparse_input(256).iter().map(|&b| !b).collect()),
        ("uniform", uniform_input()),
    ];

    let mut group = c.benchmark_group("decompress");
    group.throughput(Throughput::Bytes(LEN as u64));
    for (name, data) in &inputs {
        let frame = compress_to_vec(data).unwrap();
        let (_, buffer_size) = peek_decoded_size(&frame).unwrap();
        let mut out = vec![0u8; buffer_size];
        group.bench_function(*name, |b| {
            b.iter(|| decompress(black_box(&frame), &mut out).unwrap())
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().warm_up_time(Duration::from_secs(1)).measurement_time(Duration::from_secs(3));
    targets = criterion_benchmark
}
criterion_main!(benches);
