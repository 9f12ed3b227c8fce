use criterion::{black_box, criterion_group, criterion_main, Criterion};
use semivario::data_generation::{DataGenerator, GeneratorMode};
use semivario::variography::experimental::{LagRange, Scaling, VariogramParams};

fn variogram_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("experimental_variogram");

    for (mode, name) in [
        (GeneratorMode::TrendNoise, "trend_noise"),
        (GeneratorMode::RandomWalk, "random_walk"),
    ] {
        let data = DataGenerator::with_seed(mode, 0)
            .generate(500, 0.3)
            .expect("valid generator parameters");
        let params = VariogramParams::new(30, LagRange::Auto, Scaling::Envelope);

        group.bench_function(format!("{name}_500_points"), |b| {
            b.iter(|| black_box(data.variogram(black_box(&params))))
        });
    }

    group.finish();
}

criterion_group!(benches, variogram_benchmark);
criterion_main!(benches);
