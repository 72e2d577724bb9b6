use criterion::{Criterion, black_box, criterion_group, criterion_main};
use globe_assets::{
    ColorMap, GlobeAssets, Outline, PALETTE_LEN, Palette, ROTATION_ENTRIES, RotationEntry,
    SLICE_COUNT, SLICE_VALUES, SeedTable, Slice, SliceTable,
};
use globe_render::*;

/// A full-size globe: 80 rings of 64 positions, varied tables.
fn synthetic_assets() -> GlobeAssets {
    let mut slices = [Slice::new([0; SLICE_VALUES], [0; SLICE_VALUES]); SLICE_COUNT];
    for (s, slice) in slices.iter_mut().enumerate() {
        let mut table0 = [0; SLICE_VALUES];
        let mut table1 = [0; SLICE_VALUES];
        for i in 0..SLICE_VALUES {
            table0[i] = ((i + s) * 2 % 198) as u8;
            table1[i] = ((i + 5 * s) % 100) as u8;
        }
        *slice = Slice::new(table0, table1);
    }

    let mut entries = [RotationEntry::default(); ROTATION_ENTRIES];
    for (k, entry) in entries.iter_mut().enumerate() {
        *entry = RotationEntry::seed(k as u16 * 200, 150);
    }

    let rings = (0..80usize).map(|r| (0..64usize).map(|p| ((r + p) % 87) as u8).collect::<Vec<_>>());
    let map = (0..ColorMap::required_len()).map(|i| (i % 241) as u8).collect();

    GlobeAssets::from_parts(
        Outline::from_rings(rings).unwrap(),
        SliceTable::from_slices(slices),
        SeedTable::from_entries(entries),
        ColorMap::from_bytes(map).unwrap(),
        Palette::from_bytes(&[0; PALETTE_LEN]).unwrap(),
    )
}

fn bench_tables(c: &mut Criterion) {
    let assets = synthetic_assets();
    c.bench_function("build_rotation_table", |b| {
        b.iter(|| black_box(build_rotation_table(assets.seed(), black_box(0x5A5A)).unwrap()))
    });
    c.bench_function("build_tilt_table", |b| {
        b.iter(|| black_box(build_tilt_table(black_box(-42))))
    });
}

fn bench_render(c: &mut Criterion) {
    let assets = synthetic_assets();
    let renderer = GlobeRenderer::new(&assets);
    let mut frame = Framebuffer::new();
    c.bench_function("render_globe_full_outline", |b| {
        b.iter(|| {
            renderer
                .render(black_box(37), black_box(0x1234), &mut frame)
                .unwrap();
            black_box(&frame);
        })
    });
}

criterion_group!(benches, bench_tables, bench_render);
criterion_main!(benches);
