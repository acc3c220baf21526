use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use heatmap_core::{render_to_png_bytes, to_svg, Configuration, Dataset, HeatMap, MonthlyVariance, RenderOptions};

/// Full-size dataset shape: 1753-01 through 2015-09.
fn build_dataset() -> Dataset {
    let mut v = Vec::with_capacity(3153);
    for year in 1753..=2015 {
        for month in 1..=12u32 {
            if year == 2015 && month > 9 { break; }
            let variance = ((year * 12 + month as i32) as f64 * 0.01).sin() * 2.0 + (year - 1753) as f64 * 0.005;
            v.push(MonthlyVariance { year, month, variance });
        }
    }
    Dataset::new(8.66, v)
}

fn bench_render(c: &mut Criterion) {
    let ds = build_dataset();
    let mut group = c.benchmark_group("heatmap");
    group.bench_function("scene_and_svg", |b| {
        b.iter(|| -> Result<()> {
            let cfg = Configuration::default();
            let mut hm = HeatMap::new(ds.clone(), cfg)?;
            let svg = to_svg(hm.render(), &cfg.theme);
            black_box(svg);
            Ok(())
        });
    });
    group.bench_function("png_bytes", |b| {
        let mut hm = HeatMap::new(ds.clone(), Configuration::default()).expect("valid inputs");
        let scene = hm.render().clone();
        let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
        b.iter(|| -> Result<()> {
            let bytes = render_to_png_bytes(&scene, &opts)?;
            black_box(bytes);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
