//! GF(2^128) multiplication benchmarks.
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gfmul::{BLOCK_SIZE, FieldElement, Multiplier};
use std::hint::black_box;

#[cfg(not(feature = "cpb"))]
type Benchmarker = Criterion;
#[cfg(feature = "cpb")]
type Benchmarker = Criterion<criterion_cycles_per_byte::CyclesPerByte>;

/// Measure wall time, or cycles per byte with the `cpb` feature.
fn config() -> Benchmarker {
    #[cfg(feature = "cpb")]
    return Criterion::default().with_measurement(criterion_cycles_per_byte::CyclesPerByte);

    #[cfg(not(feature = "cpb"))]
    Criterion::default()
}

const H: u128 = 0x66e9_4bd4_ef8a_2c3b_884c_fa59_ca34_2b2e;

fn bench(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("gfmul");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    for multiplier in [Multiplier::new(), Multiplier::soft()] {
        let name = format!("{:?}", multiplier.backend());
        let h = FieldElement::from(H);

        group.bench_function(BenchmarkId::new("mul", &name), |b| {
            let mut y = FieldElement::from(!H);
            b.iter(|| {
                y = multiplier.mul(black_box(y), h);
                y
            });
        });
    }

    group.bench_function("pow", |b| {
        let h = FieldElement::from(H);
        b.iter(|| black_box(h).pow(black_box(u128::MAX - 1)));
    });

    group.finish();
}

criterion_group!(
    name = benches;
    config = config();
    targets = bench
);

criterion_main!(benches);
