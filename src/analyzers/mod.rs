pub mod fire_analyzer;

pub use fire_analyzer::{BrightnessStats, FireAnalyzer, FireStatistics, GeographicBounds};
