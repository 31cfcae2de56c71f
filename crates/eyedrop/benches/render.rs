use criterion::{criterion_group, criterion_main, Criterion};
use eyedrop::format::FormatConfig;
use eyedrop::store::PaletteStore;
use eyedrop::{ColorValue, Converter, Space};

pub fn run_benchmarks(c: &mut Criterion) {
    let converter = Converter::default();
    let pixel = ColorValue::from_24bit(215, 40, 39);

    let mut palette = PaletteStore::new();
    for index in 0..=255_u8 {
        palette.select(ColorValue::from_24bit(index, 255 - index, index / 2));
    }

    let mut group = c.benchmark_group("render");

    group.bench_function("details", |b| {
        b.iter(|| {
            FormatConfig::ALL
                .into_iter()
                .map(|config| converter.details(&pixel, config).len())
                .sum::<usize>()
        })
    });

    group.bench_function("palette-hex", |b| {
        b.iter(|| palette.to_json(&converter, Space::Hex, FormatConfig::default()))
    });

    group.bench_function("palette-oklch", |b| {
        let config: FormatConfig = "modern-syntax-numbers"
            .parse()
            .expect("format id is valid");
        b.iter(|| palette.to_json(&converter, Space::Oklch, config))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
