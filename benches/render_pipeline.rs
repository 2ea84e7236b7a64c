use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandelbrot_explorer::{
    ExplorerConfig, FrameData, FramePresenterPort, InteractiveExplorer, PresentError,
    ViewportGeometry, colorize, evaluate, Complex, ColourParams,
};

struct DiscardPresenter {}

impl FramePresenterPort for DiscardPresenter {
    fn present(&mut self, frame: &FrameData) -> Result<(), PresentError> {
        black_box(frame.pixel_buffer.buffer());
        Ok(())
    }
}

fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame_320x240");
    group.sample_size(20);

    for supersampling in [1u32, 2, 4] {
        let mut config = ExplorerConfig::default();
        config.render.supersampling = supersampling;
        config.colour.set_max_iterations(256);
        let mut explorer = InteractiveExplorer::new(&config, ViewportGeometry::new(320.0, 240.0));
        let mut presenter = DiscardPresenter {};

        group.bench_with_input(
            BenchmarkId::from_parameter(supersampling),
            &supersampling,
            |b, _| {
                b.iter(|| {
                    explorer.reset_view();
                    explorer.step(&mut presenter).unwrap()
                })
            },
        );
    }

    group.finish();
}

fn bench_single_sample(c: &mut Criterion) {
    let params = ColourParams::default();
    let c_point = Complex::new(-0.743_643_887, 0.131_825_904);

    c.bench_function("evaluate_and_colorize", |b| {
        b.iter(|| {
            let result = evaluate(black_box(c_point), params.max_iterations());
            colorize(&result, &params)
        })
    });
}

criterion_group!(benches, bench_full_frame, bench_single_sample);
criterion_main!(benches);
