use criterion::{Criterion, black_box, criterion_group, criterion_main};
use globe_math::*;

fn bench_as_i8(c: &mut Criterion) {
    let v: i32 = black_box(0xFF9E);
    c.bench_function("as_i8", |bencher| bencher.iter(|| black_box(as_i8(v))));
}

fn bench_add16(c: &mut Criterion) {
    let a: i16 = black_box(25_334);
    let b: i16 = black_box(397);
    c.bench_function("add16", |bencher| bencher.iter(|| black_box(add16(a, b))));
}

fn bench_fixed_scale(c: &mut Criterion) {
    let fraction: u16 = black_box(0x9A3F);
    c.bench_function("fixed16_16_scale_floor", |bencher| {
        bencher.iter(|| {
            black_box(
                Fixed16_16::from_fraction(fraction)
                    .wrapping_mul_int(398)
                    .floor(),
            )
        })
    });
}

criterion_group!(benches, bench_as_i8, bench_add16, bench_fixed_scale);
criterion_main!(benches);
