#[path = "../util/util.rs"]
mod util;

use util::{random_palette, test_images};

use std::time::Duration;

use criterion::{
    criterion_group, criterion_main, measurement::WallTime, BatchSize, Bencher, BenchmarkId,
    Criterion, SamplingMode,
};
use iif::{Image, Palette, Quantizer};

fn bench(
    c: &mut Criterion,
    group: &str,
    mut f: impl FnMut(&mut Bencher<WallTime>, &(Palette, &Image)),
) {
    let mut group = c.benchmark_group(group);
    group
        .sample_size(20)
        .noise_threshold(0.05)
        .sampling_mode(SamplingMode::Flat)
        .warm_up_time(Duration::from_millis(500));

    for (k, secs) in [(16, 2), (64, 4), (256, 8)] {
        group.measurement_time(Duration::from_secs(secs));
        for (name, image) in test_images() {
            let input = (random_palette(k), image);
            group.bench_with_input(BenchmarkId::new(k.to_string(), name), &input, &mut f);
        }
    }
}

fn quantize_single(c: &mut Criterion) {
    bench(c, "quantize_single", |b, (palette, image)| {
        let quantizer = Quantizer::new(palette);
        b.iter_batched_ref(
            || (*image).clone(),
            |image| quantizer.quantize(image, ()),
            BatchSize::LargeInput,
        )
    })
}

fn quantize_par(c: &mut Criterion) {
    bench(c, "quantize_par", |b, (palette, image)| {
        let quantizer = Quantizer::new(palette);
        b.iter_batched_ref(
            || (*image).clone(),
            |image| quantizer.quantize_par(image, ()),
            BatchSize::LargeInput,
        )
    })
}

criterion_group!(benches, quantize_single, quantize_par);
criterion_main!(benches);
