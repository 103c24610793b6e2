use crate::models::{ColorBar, ColorScale, ComparisonView, FireDataset, MapPanel, MarkerStyle};
use crate::utils::constants::{
    COLORBAR_LENGTH, COLORBAR_THICKNESS, COLORBAR_TITLE, COLORBAR_X, COLORBAR_Y, DEFAULT_TITLE,
    MARKER_SIZE_DIVISOR, ONE_DAY_LABEL, SEVEN_DAY_LABEL,
};
use tracing::debug;

/// Builds the two-panel map request from a pair of datasets.
///
/// The left panel hides its color legend; the right panel carries the
/// shared "Brightness" color bar.
pub struct ComparisonViewBuilder {
    title: Option<String>,
    size_divisor: f64,
    left_scale: ColorScale,
    right_scale: ColorScale,
}

impl ComparisonViewBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            size_divisor: MARKER_SIZE_DIVISOR,
            left_scale: ColorScale::Bluered,
            right_scale: ColorScale::Viridis,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_size_divisor(mut self, divisor: f64) -> Self {
        self.size_divisor = divisor;
        self
    }

    pub fn build(
        &self,
        dataset_a: FireDataset,
        dataset_b: FireDataset,
        label_a: &str,
        label_b: &str,
    ) -> ComparisonView {
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| default_title(label_a, label_b));

        let left = self.panel(dataset_a, label_a, self.left_scale, None);
        let right = self.panel(
            dataset_b,
            label_b,
            self.right_scale,
            Some(ColorBar {
                title: COLORBAR_TITLE.to_string(),
                x: COLORBAR_X,
                y: COLORBAR_Y,
                thickness: COLORBAR_THICKNESS,
                length: COLORBAR_LENGTH,
            }),
        );

        debug!(
            left = left.len(),
            right = right.len(),
            %title,
            "Built comparison view"
        );

        ComparisonView {
            title,
            show_legend: false,
            left,
            right,
        }
    }

    fn panel(
        &self,
        dataset: FireDataset,
        label: &str,
        color_scale: ColorScale,
        color_bar: Option<ColorBar>,
    ) -> MapPanel {
        MapPanel {
            title: label.to_string(),
            brightness_field: dataset.brightness_field(),
            longitudes: dataset.longitudes(),
            latitudes: dataset.latitudes(),
            brightness: dataset.brightness_values(),
            hover_text: dataset.acquisition_dates(),
            marker: MarkerStyle {
                size_divisor: self.size_divisor,
                color_scale,
                color_bar,
            },
        }
    }
}

impl Default for ComparisonViewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// "Global Fire Data Comparison: 1 Day vs 7 Day" for the stock labels
fn default_title(label_a: &str, label_b: &str) -> String {
    if label_a == ONE_DAY_LABEL && label_b == SEVEN_DAY_LABEL {
        return DEFAULT_TITLE.to_string();
    }

    let short = |label: &str| label.trim_end_matches(" Fires").to_string();
    format!(
        "Global Fire Data Comparison: {} vs {}",
        short(label_a),
        short(label_b)
    )
}
