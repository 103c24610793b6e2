use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use firemap::models::{BrightnessField, FireDataset, FireRecord, LoadReport};
use firemap::processors::ComparisonViewBuilder;
use firemap::readers::FireReader;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

// Create a FIRMS style export with a malformed row every tenth line
fn create_test_csv(rows: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "latitude,longitude,bright_ti4,scan,track,acq_date,acq_time,satellite,confidence,version,bright_ti5,frp,daynight"
    )
    .unwrap();

    for i in 0..rows {
        if i % 10 == 9 {
            writeln!(file, "n/a,,,,,2023-08-01,0130,N,n,2.0NRT,,,N").unwrap();
            continue;
        }
        let lat = -60.0 + (i % 120) as f64 + 0.125;
        let lon = -170.0 + (i % 340) as f64 + 0.5;
        writeln!(
            file,
            "{:.5},{:.5},{:.2},0.39,0.36,2023-08-01,0130,N,n,2.0NRT,{:.2},{:.2},N",
            lat,
            lon,
            300.0 + (i % 70) as f64,
            285.0 + (i % 30) as f64,
            (i % 50) as f64 * 0.7
        )
        .unwrap();
    }

    file
}

fn create_dataset(records: usize) -> FireDataset {
    let records = (0..records)
        .map(|i| {
            FireRecord::new(
                (i % 90) as f64,
                (i % 180) as f64,
                300.0 + (i % 70) as f64,
                "2023-08-01".to_string(),
            )
        })
        .collect();
    FireDataset::new(
        PathBuf::from("bench.csv"),
        BrightnessField::Brightness,
        records,
        LoadReport::default(),
    )
}

fn benchmark_fire_reader(c: &mut Criterion) {
    let file = create_test_csv(20_000);
    let mut group = c.benchmark_group("fire_reader");

    for limit in [1000usize, 20_000] {
        group.bench_with_input(BenchmarkId::new("buffered", limit), &limit, |b, &limit| {
            let reader = FireReader::new();
            b.iter(|| black_box(reader.load(file.path(), limit).unwrap().len()))
        });

        group.bench_with_input(BenchmarkId::new("mmap", limit), &limit, |b, &limit| {
            let reader = FireReader::new().with_mmap(true);
            b.iter(|| black_box(reader.load(file.path(), limit).unwrap().len()))
        });
    }

    group.finish();
}

fn benchmark_view_builder(c: &mut Criterion) {
    c.bench_function("comparison_view_to_figure", |b| {
        b.iter(|| {
            let view = ComparisonViewBuilder::new().build(
                create_dataset(1000),
                create_dataset(1000),
                "1 Day Fires",
                "7 Day Fires",
            );
            black_box(view.to_figure())
        })
    });
}

criterion_group!(benches, benchmark_fire_reader, benchmark_view_builder);
criterion_main!(benches);
