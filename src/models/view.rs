use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

use crate::models::fire::BrightnessField;
use crate::utils::constants::{LEFT_PANEL_DOMAIN, RIGHT_PANEL_DOMAIN, SUBPLOT_TITLE_FONT_SIZE};

/// Named plotly color scales used for brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScale {
    Bluered,
    Viridis,
}

impl ColorScale {
    pub fn name(&self) -> &'static str {
        match self {
            ColorScale::Bluered => "Bluered",
            ColorScale::Viridis => "Viridis",
        }
    }
}

impl fmt::Display for ColorScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBar {
    pub title: String,
    pub x: f64,
    pub y: f64,
    pub thickness: f64,
    pub length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Brightness is divided by this to get the marker size
    pub size_divisor: f64,
    pub color_scale: ColorScale,
    /// `None` hides the color legend for the panel
    pub color_bar: Option<ColorBar>,
}

impl MarkerStyle {
    pub fn shows_scale(&self) -> bool {
        self.color_bar.is_some()
    }
}

/// One geographic scatter layer of the comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPanel {
    pub title: String,
    pub brightness_field: BrightnessField,
    pub longitudes: Vec<f64>,
    pub latitudes: Vec<f64>,
    pub brightness: Vec<f64>,
    pub hover_text: Vec<String>,
    pub marker: MarkerStyle,
}

impl MapPanel {
    pub fn len(&self) -> usize {
        self.latitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latitudes.is_empty()
    }

    pub fn marker_sizes(&self) -> Vec<f64> {
        self.brightness
            .iter()
            .map(|b| b / self.marker.size_divisor)
            .collect()
    }

    fn to_trace(&self, geo: &str) -> Value {
        let mut marker = json!({
            "size": self.marker_sizes(),
            "color": self.brightness,
            "colorscale": self.marker.color_scale.name(),
            "showscale": self.marker.shows_scale(),
        });

        if let Some(bar) = &self.marker.color_bar {
            marker["colorbar"] = json!({
                "title": { "text": bar.title },
                "x": bar.x,
                "y": bar.y,
                "thickness": bar.thickness,
                "len": bar.length,
            });
        }

        json!({
            "type": "scattergeo",
            "geo": geo,
            "name": self.title,
            "lon": self.longitudes,
            "lat": self.latitudes,
            "text": self.hover_text,
            "hovertemplate": format!(
                "%{{text}}<br>{}: %{{marker.color}}<extra></extra>",
                self.brightness_field
            ),
            "marker": marker,
        })
    }
}

/// Declarative side-by-side map request handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonView {
    pub title: String,
    pub show_legend: bool,
    pub left: MapPanel,
    pub right: MapPanel,
}

impl ComparisonView {
    pub fn panels(&self) -> [&MapPanel; 2] {
        [&self.left, &self.right]
    }

    /// Map the request onto the plotly figure schema (`data` + `layout`).
    pub fn to_figure(&self) -> Value {
        let subplot_title = |text: &str, domain: [f64; 2]| {
            json!({
                "text": text,
                "x": (domain[0] + domain[1]) / 2.0,
                "y": 1.0,
                "xref": "paper",
                "yref": "paper",
                "xanchor": "center",
                "yanchor": "bottom",
                "showarrow": false,
                "font": { "size": SUBPLOT_TITLE_FONT_SIZE },
            })
        };

        json!({
            "data": [
                self.left.to_trace("geo"),
                self.right.to_trace("geo2"),
            ],
            "layout": {
                "title": { "text": self.title },
                "showlegend": self.show_legend,
                "geo": { "domain": { "x": LEFT_PANEL_DOMAIN, "y": [0.0, 1.0] } },
                "geo2": { "domain": { "x": RIGHT_PANEL_DOMAIN, "y": [0.0, 1.0] } },
                "annotations": [
                    subplot_title(&self.left.title, LEFT_PANEL_DOMAIN),
                    subplot_title(&self.right.title, RIGHT_PANEL_DOMAIN),
                ],
            },
        })
    }
}
