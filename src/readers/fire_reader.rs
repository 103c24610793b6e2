use crate::error::{FireMapError, Result};
use crate::models::{BrightnessField, FireDataset, FireRecord, LoadReport, SkipReason};
use crate::utils::constants::{ACQ_DATE_COLUMN, DEFAULT_BUFFER_SIZE, LATITUDE_COLUMN, LONGITUDE_COLUMN};
use crate::utils::coordinates::{parse_finite, NumericError};
use csv::{ErrorKind, ReaderBuilder, StringRecord};
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};
use validator::Validate;

/// Result of parsing one data row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Accepted(FireRecord),
    Skipped(SkipReason),
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub latitude: usize,
    pub longitude: usize,
    pub acq_date: usize,
    pub brightness: usize,
    pub brightness_field: BrightnessField,
}

impl ColumnLayout {
    /// Locate the required columns in a header row
    pub fn from_headers(headers: &StringRecord, source: &Path) -> Result<Self> {
        let names: Vec<&str> = headers.iter().collect();

        let required = |column: &str| -> Result<usize> {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or_else(|| FireMapError::MissingColumn {
                    file: source.to_path_buf(),
                    column: column.to_string(),
                })
        };

        let latitude = required(LATITUDE_COLUMN)?;
        let longitude = required(LONGITUDE_COLUMN)?;
        let acq_date = required(ACQ_DATE_COLUMN)?;

        let (brightness_field, brightness) =
            BrightnessField::resolve(&names).ok_or_else(|| FireMapError::NoBrightnessField {
                file: source.to_path_buf(),
            })?;

        Ok(Self {
            latitude,
            longitude,
            acq_date,
            brightness,
            brightness_field,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct FireReader {
    strict: bool,
    use_mmap: bool,
}

impl FireReader {
    pub fn new() -> Self {
        Self {
            strict: false,
            use_mmap: false,
        }
    }

    /// Also skip rows whose coordinates fall off the globe
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }

    /// Load at most `limit` valid detections from a FIRMS CSV export.
    ///
    /// Rows that fail to parse are skipped and do not count toward `limit`.
    pub fn load(&self, path: &Path, limit: usize) -> Result<FireDataset> {
        if limit == 0 {
            return Err(FireMapError::Config(
                "Record limit must be a positive integer".to_string(),
            ));
        }

        if self.use_mmap {
            self.load_mmap(path, limit)
        } else {
            self.load_buffered(path, limit)
        }
    }

    fn load_buffered(&self, path: &Path, limit: usize) -> Result<FireDataset> {
        let file = open_file(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        self.load_from_reader(reader, path, limit)
    }

    fn load_mmap(&self, path: &Path, limit: usize) -> Result<FireDataset> {
        let file = open_file(path)?;
        let mmap = unsafe { Mmap::map(&file) }.map_err(|source| FireMapError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_from_reader(&mmap[..], path, limit)
    }

    /// Load from any byte source; `source` is only used for reporting.
    pub fn load_from_reader<R: Read>(
        &self,
        reader: R,
        source: &Path,
        limit: usize,
    ) -> Result<FireDataset> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let layout = ColumnLayout::from_headers(csv_reader.headers()?, source)?;
        debug!(
            file = %source.display(),
            brightness_field = %layout.brightness_field,
            "Resolved column layout"
        );

        let mut records = Vec::new();
        let mut report = LoadReport::default();
        let mut row = StringRecord::new();

        loop {
            let line = csv_reader.position().line();
            let outcome = match csv_reader.read_record(&mut row) {
                Ok(false) => break,
                Ok(true) => self.parse_row(&row, &layout),
                Err(e) if matches!(e.kind(), ErrorKind::Utf8 { .. }) => {
                    RowOutcome::Skipped(SkipReason::InvalidEncoding)
                }
                Err(e) => return Err(e.into()),
            };

            match outcome {
                RowOutcome::Accepted(record) => {
                    records.push(record);
                    report.record_accepted();
                    if records.len() >= limit {
                        report.limit_reached = true;
                        break;
                    }
                }
                RowOutcome::Skipped(reason) => {
                    debug!(
                        file = %source.display(),
                        line,
                        %reason,
                        "Skipping row"
                    );
                    report.record_skipped(&reason);
                }
            }
        }

        if report.skipped_total() > 0 {
            warn!(
                file = %source.display(),
                skipped = report.skipped_total(),
                "Skipped malformed rows"
            );
        }
        info!(
            file = %source.display(),
            records = records.len(),
            brightness_field = %layout.brightness_field,
            limit_reached = report.limit_reached,
            "Loaded fire detections"
        );

        Ok(FireDataset::new(
            source.to_path_buf(),
            layout.brightness_field,
            records,
            report,
        ))
    }

    /// Parse a single data row against a resolved layout
    pub fn parse_row(&self, row: &StringRecord, layout: &ColumnLayout) -> RowOutcome {
        match self.try_parse_row(row, layout) {
            Ok(record) => RowOutcome::Accepted(record),
            Err(reason) => RowOutcome::Skipped(reason),
        }
    }

    fn try_parse_row(
        &self,
        row: &StringRecord,
        layout: &ColumnLayout,
    ) -> std::result::Result<FireRecord, SkipReason> {
        let latitude = numeric_field(row, layout.latitude, LATITUDE_COLUMN)?;
        let longitude = numeric_field(row, layout.longitude, LONGITUDE_COLUMN)?;
        let brightness = numeric_field(
            row,
            layout.brightness,
            layout.brightness_field.column_name(),
        )?;
        let acquisition_date = text_field(row, layout.acq_date, ACQ_DATE_COLUMN)?;

        let record = FireRecord::new(
            latitude,
            longitude,
            brightness,
            acquisition_date.trim().to_string(),
        );

        if self.strict && record.validate().is_err() {
            return Err(SkipReason::OutOfRange);
        }

        Ok(record)
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| FireMapError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn text_field<'r>(
    row: &'r StringRecord,
    index: usize,
    column: &str,
) -> std::result::Result<&'r str, SkipReason> {
    row.get(index).ok_or_else(|| SkipReason::MissingField {
        column: column.to_string(),
    })
}

fn numeric_field(
    row: &StringRecord,
    index: usize,
    column: &str,
) -> std::result::Result<f64, SkipReason> {
    let value = text_field(row, index, column)?;
    parse_finite(value).map_err(|e| match e {
        NumericError::Invalid => SkipReason::InvalidNumber {
            column: column.to_string(),
            value: value.to_string(),
        },
        NumericError::NonFinite => SkipReason::NonFinite {
            column: column.to_string(),
        },
    })
}
