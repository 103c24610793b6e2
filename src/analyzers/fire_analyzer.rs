use crate::error::{FireMapError, Result};
use crate::models::{BrightnessField, FireDataset};
use crate::utils::constants::ACQ_DATE_FORMAT;
use chrono::NaiveDate;

#[derive(Debug)]
pub struct FireStatistics {
    pub total_records: usize,
    pub brightness_field: BrightnessField,
    pub brightness_stats: BrightnessStats,
    pub geographic_bounds: GeographicBounds,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub unparsed_dates: usize,
}

#[derive(Debug)]
pub struct BrightnessStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

#[derive(Debug)]
pub struct GeographicBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

pub struct FireAnalyzer;

impl FireAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, dataset: &FireDataset) -> Result<FireStatistics> {
        let records = dataset.records();
        let first = records.first().ok_or_else(|| {
            FireMapError::MissingData(format!(
                "No fire detections to analyze in {}",
                dataset.source().display()
            ))
        })?;

        let mut min_brightness = first.brightness;
        let mut max_brightness = first.brightness;
        let mut brightness_sum = 0.0f64;

        let mut min_lat = first.latitude;
        let mut max_lat = first.latitude;
        let mut min_lon = first.longitude;
        let mut max_lon = first.longitude;

        let mut date_range: Option<(NaiveDate, NaiveDate)> = None;
        let mut unparsed_dates = 0;

        for record in records {
            min_brightness = min_brightness.min(record.brightness);
            max_brightness = max_brightness.max(record.brightness);
            brightness_sum += record.brightness;

            min_lat = min_lat.min(record.latitude);
            max_lat = max_lat.max(record.latitude);
            min_lon = min_lon.min(record.longitude);
            max_lon = max_lon.max(record.longitude);

            // Dates are display labels; unparseable ones are only counted
            match NaiveDate::parse_from_str(&record.acquisition_date, ACQ_DATE_FORMAT) {
                Ok(date) => {
                    date_range = Some(match date_range {
                        Some((start, end)) => (start.min(date), end.max(date)),
                        None => (date, date),
                    });
                }
                Err(_) => unparsed_dates += 1,
            }
        }

        Ok(FireStatistics {
            total_records: records.len(),
            brightness_field: dataset.brightness_field(),
            brightness_stats: BrightnessStats {
                min: min_brightness,
                max: max_brightness,
                mean: brightness_sum / records.len() as f64,
            },
            geographic_bounds: GeographicBounds {
                min_lat,
                max_lat,
                min_lon,
                max_lon,
            },
            date_range,
            unparsed_dates,
        })
    }
}

impl Default for FireAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl FireStatistics {
    pub fn summary(&self) -> String {
        let dates = match self.date_range {
            Some((start, end)) if start == end => start.to_string(),
            Some((start, end)) => format!("{} to {}", start, end),
            None => "No parseable dates".to_string(),
        };

        format!(
            "Fire Detection Summary:\n\
            - Detections: {}\n\
            - Brightness field: {}\n\
            - Brightness: min {:.1}, max {:.1}, mean {:.1}\n\
            - Latitude: {:.2} to {:.2}\n\
            - Longitude: {:.2} to {:.2}\n\
            - Acquisition dates: {}",
            self.total_records,
            self.brightness_field,
            self.brightness_stats.min,
            self.brightness_stats.max,
            self.brightness_stats.mean,
            self.geographic_bounds.min_lat,
            self.geographic_bounds.max_lat,
            self.geographic_bounds.min_lon,
            self.geographic_bounds.max_lon,
            dates
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FireRecord, LoadReport};
    use std::path::PathBuf;

    fn dataset(records: Vec<FireRecord>) -> FireDataset {
        FireDataset::new(
            PathBuf::from("fires.csv"),
            BrightnessField::BrightTi4,
            records,
            LoadReport::default(),
        )
    }

    #[test]
    fn test_analyze() -> Result<()> {
        let stats = FireAnalyzer::new().analyze(&dataset(vec![
            FireRecord::new(-10.0, 20.0, 300.0, "2023-08-02".to_string()),
            FireRecord::new(35.5, -120.25, 400.0, "2023-08-01".to_string()),
            FireRecord::new(5.0, 140.0, 350.0, "yesterday".to_string()),
        ]))?;

        assert_eq!(stats.total_records, 3);
        assert_eq!(stats.brightness_stats.min, 300.0);
        assert_eq!(stats.brightness_stats.max, 400.0);
        assert!((stats.brightness_stats.mean - 350.0).abs() < 1e-9);
        assert_eq!(stats.geographic_bounds.min_lat, -10.0);
        assert_eq!(stats.geographic_bounds.max_lat, 35.5);
        assert_eq!(stats.geographic_bounds.min_lon, -120.25);
        assert_eq!(stats.geographic_bounds.max_lon, 140.0);
        assert_eq!(
            stats.date_range,
            Some((
                NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
                NaiveDate::from_ymd_opt(2023, 8, 2).unwrap()
            ))
        );
        assert_eq!(stats.unparsed_dates, 1);

        let summary = stats.summary();
        assert!(summary.contains("Detections: 3"));
        assert!(summary.contains("bright_ti4"));
        assert!(summary.contains("2023-08-01 to 2023-08-02"));
        Ok(())
    }

    #[test]
    fn test_analyze_empty_dataset() {
        let err = FireAnalyzer::new().analyze(&dataset(Vec::new())).unwrap_err();
        assert!(matches!(err, FireMapError::MissingData(_)));
    }
}
