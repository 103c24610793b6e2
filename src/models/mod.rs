pub mod fire;
pub mod report;
pub mod view;

pub use fire::{BrightnessField, FireDataset, FireRecord};
pub use report::{LoadReport, SkipReason};
pub use view::{ColorBar, ColorScale, ComparisonView, MapPanel, MarkerStyle};
