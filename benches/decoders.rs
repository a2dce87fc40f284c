//! Run these benches with `cargo bench --bench decoders`
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use metar_decoder::{ChunkDecoder, SurfaceWindDecoder, VisibilityDecoder};

criterion_main!(decoder_benches);

criterion_group!(
    name = decoder_benches;
    config = build_tester();
    targets = surface_wind_bench, visibility_bench
);

fn build_tester() -> Criterion {
    Criterion::default().sample_size(200)
}

fn surface_wind_bench(c: &mut Criterion) {
    let chunks = [
        "27010KT 9999 17/12 Q1015",
        "VRB03MPS CAVOK 21/09 Q1020",
        "09010G20KT 060V120 9999 17/12 Q1015",
        "///10KT 9999 17/12 Q1015",
    ];

    c.bench_function("surface_wind_decode", |b| {
        b.iter(|| {
            for chunk in &chunks {
                let _ = black_box(SurfaceWindDecoder.parse(black_box(chunk), false));
            }
        })
    });
}

fn visibility_bench(c: &mut Criterion) {
    let chunks = ["9999 17/12 Q1015", "CAVOK 21/09 Q1020", "0400 M02/M05 Q0995"];

    c.bench_function("visibility_decode", |b| {
        b.iter(|| {
            for chunk in &chunks {
                let _ = black_box(VisibilityDecoder.parse(black_box(chunk), false));
            }
        })
    });
}
