use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::models::report::LoadReport;

/// A single satellite thermal anomaly detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FireRecord {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub brightness: f64,

    /// Display-only label, never interpreted
    pub acquisition_date: String,
}

impl FireRecord {
    pub fn new(latitude: f64, longitude: f64, brightness: f64, acquisition_date: String) -> Self {
        Self {
            latitude,
            longitude,
            brightness,
            acquisition_date,
        }
    }
}

/// Column carrying the brightness measurement.
///
/// MODIS exports use `brightness`; VIIRS exports carry the I-4 and I-5
/// channel temperatures as `bright_ti4` and `bright_ti5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrightnessField {
    Brightness,
    BrightTi4,
    BrightTi5,
}

impl BrightnessField {
    /// Candidate columns, highest priority first
    pub const PRIORITY: [BrightnessField; 3] = [
        BrightnessField::Brightness,
        BrightnessField::BrightTi4,
        BrightnessField::BrightTi5,
    ];

    pub fn column_name(&self) -> &'static str {
        match self {
            BrightnessField::Brightness => "brightness",
            BrightnessField::BrightTi4 => "bright_ti4",
            BrightnessField::BrightTi5 => "bright_ti5",
        }
    }

    pub fn from_column_name(name: &str) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|field| field.column_name() == name)
    }

    /// Pick the highest-priority brightness column present in a header.
    ///
    /// Returns the field together with its column index.
    pub fn resolve(headers: &[&str]) -> Option<(Self, usize)> {
        Self::PRIORITY.into_iter().find_map(|field| {
            headers
                .iter()
                .position(|name| *name == field.column_name())
                .map(|index| (field, index))
        })
    }
}

impl fmt::Display for BrightnessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

/// Validated detections from one file, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct FireDataset {
    source: PathBuf,
    brightness_field: BrightnessField,
    records: Vec<FireRecord>,
    report: LoadReport,
}

impl FireDataset {
    pub fn new(
        source: PathBuf,
        brightness_field: BrightnessField,
        records: Vec<FireRecord>,
        report: LoadReport,
    ) -> Self {
        Self {
            source,
            brightness_field,
            records,
            report,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn brightness_field(&self) -> BrightnessField {
        self.brightness_field
    }

    pub fn records(&self) -> &[FireRecord] {
        &self.records
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn latitudes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.latitude).collect()
    }

    pub fn longitudes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.longitude).collect()
    }

    pub fn brightness_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.brightness).collect()
    }

    pub fn acquisition_dates(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.acquisition_date.clone())
            .collect()
    }
}
