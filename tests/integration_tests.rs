use firemap::error::FireMapError;
use firemap::models::BrightnessField;
use firemap::processors::ComparisonViewBuilder;
use firemap::readers::{ConcurrentReader, FireReader};
use firemap::utils::constants::{DEFAULT_RECORD_LIMIT, ONE_DAY_LABEL, SEVEN_DAY_LABEL};
use firemap::writers::FigureWriter;
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).expect("Failed to create test CSV");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write test CSV");
    }
    path
}

#[tokio::test]
async fn test_end_to_end_comparison() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    // MODIS style export
    let one_day = write_csv(
        &temp_dir,
        "world_fires_1_day.csv",
        &[
            "latitude,longitude,acq_date,brightness",
            "-12.53,131.02,2023-08-01,330.2",
            "not_a_number,10.5,20.0,2023-01-01",
            "37.61,-119.87,2023-08-01,345.8",
        ],
    );

    // VIIRS style export, different column order
    let seven_day = write_csv(
        &temp_dir,
        "world_fires_7_day.csv",
        &[
            "latitude,longitude,acq_date,bright_ti4",
            "-3.51,29.12,2023-07-26,301.5",
            "44.02,22.61,2023-07-28,320.1",
            "-33.90,18.42,2023-08-01,298.7",
        ],
    );

    let (first, second) = ConcurrentReader::default()
        .load_pair(&one_day, &seven_day, DEFAULT_RECORD_LIMIT)
        .await
        .unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first.brightness_field().column_name(), "brightness");
    assert_eq!(second.len(), 3);
    assert_eq!(second.brightness_field().column_name(), "bright_ti4");

    let view = ComparisonViewBuilder::new().build(first, second, ONE_DAY_LABEL, SEVEN_DAY_LABEL);
    assert_eq!(view.left.len(), 2);
    assert_eq!(view.left.brightness_field, BrightnessField::Brightness);
    assert_eq!(view.right.len(), 3);
    assert_eq!(view.right.brightness_field, BrightnessField::BrightTi4);

    let output_path = temp_dir.path().join("global_fires_side_by_side.html");
    let info = FigureWriter::new().write(&view, &output_path).unwrap();

    assert!(output_path.exists());
    assert_eq!(info.markers, 5);

    let html = fs::read_to_string(&output_path).unwrap();
    assert!(html.contains("Global Fire Data Comparison: 1 Day vs 7 Day"));
    assert!(html.contains("\"colorscale\":\"Bluered\""));
    assert!(html.contains("\"colorscale\":\"Viridis\""));
    assert!(html.contains("bright_ti4: %{marker.color}"));
}

#[test]
fn test_loading_is_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_csv(
        &temp_dir,
        "fires.csv",
        &[
            "brightness,acq_date,longitude,latitude,confidence",
            "310.4,2023-08-02,22.5,-4.25,n",
            "bad,2023-08-02,22.5,-4.25,n",
            "305.9,2023-08-03,23.1,-4.75,h",
        ],
    );

    let reader = FireReader::new();
    let first = reader.load(&path, 1000).unwrap();
    let second = reader.load(&path, 1000).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.latitudes(), vec![-4.25, -4.75]);
}

#[test]
fn test_dataset_never_exceeds_limit() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let mut lines = vec!["latitude,longitude,acq_date,bright_ti5".to_string()];
    for i in 0..50 {
        lines.push(format!("{}.5,{}.25,2023-08-01,{}", i % 90, i, 290 + i));
        lines.push("x,y,2023-08-01,z".to_string());
    }
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    let path = write_csv(&temp_dir, "many.csv", &lines);

    for limit in [1, 7, 50, 1000] {
        let dataset = FireReader::new().load(&path, limit).unwrap();
        assert_eq!(dataset.len(), limit.min(50));
        assert!(dataset
            .records()
            .iter()
            .all(|r| r.latitude.is_finite() && r.longitude.is_finite() && r.brightness.is_finite()));
    }
}

#[test]
fn test_structural_errors() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let no_latitude = write_csv(
        &temp_dir,
        "no_latitude.csv",
        &["longitude,acq_date,brightness", "10.5,2023-01-01,300"],
    );
    let err = FireReader::new().load(&no_latitude, 1000).unwrap_err();
    assert!(matches!(err, FireMapError::MissingColumn { ref column, .. } if column == "latitude"));
    assert!(err.to_string().contains("no_latitude.csv"));

    let no_brightness = write_csv(
        &temp_dir,
        "no_brightness.csv",
        &["latitude,longitude,acq_date,frp", "1,2,2023-01-01,3.5"],
    );
    let err = FireReader::new().load(&no_brightness, 1000).unwrap_err();
    assert!(matches!(err, FireMapError::NoBrightnessField { .. }));

    let empty = write_csv(&temp_dir, "empty.csv", &[]);
    let err = FireReader::new().load(&empty, 1000).unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_header_with_byte_order_mark() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("bom.csv");
    fs::write(
        &path,
        "\u{feff}latitude,longitude,acq_date,bright_ti4\r\n1.5,2.5,2023-01-01,300.5\r\n",
    )
    .unwrap();

    let dataset = FireReader::new().load(&path, 10).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].acquisition_date, "2023-01-01");
}
