use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FireMapError>;

#[derive(Error, Debug)]
pub enum FireMapError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{column}' in {}", .file.display())]
    MissingColumn { file: PathBuf, column: String },

    #[error(
        "No brightness field found in {} (expected one of: brightness, bright_ti4, bright_ti5)",
        .file.display()
    )]
    NoBrightnessField { file: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required data: {0}")]
    MissingData(String),

    #[error("Could not open {}: {message}", .path.display())]
    Open { path: PathBuf, message: String },

    #[error("Async task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl FireMapError {
    /// True for header problems that make the whole file unusable.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            FireMapError::MissingColumn { .. } | FireMapError::NoBrightnessField { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_file_and_field() {
        let err = FireMapError::MissingColumn {
            file: PathBuf::from("fires.csv"),
            column: "latitude".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing required column 'latitude' in fires.csv"
        );
        assert!(err.is_structural());

        let err = FireMapError::NoBrightnessField {
            file: PathBuf::from("fires.csv"),
        };
        assert!(err.to_string().contains("fires.csv"));
        assert!(err.is_structural());

        assert!(!FireMapError::Config("bad".to_string()).is_structural());
    }
}
