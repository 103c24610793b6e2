use crate::error::{FireMapError, Result};
use crate::models::ComparisonView;
use crate::utils::constants::PLOTLY_CDN_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Standalone interactive document
    #[default]
    Html,
    /// Raw plotly figure JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = FireMapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(FireMapError::Config(format!(
                "Unsupported output format: {}",
                s
            ))),
        }
    }
}

pub struct FigureWriter {
    format: OutputFormat,
    plotly_src: String,
    div_id: String,
}

impl FigureWriter {
    pub fn new() -> Self {
        Self {
            format: OutputFormat::Html,
            plotly_src: PLOTLY_CDN_URL.to_string(),
            div_id: "fire-comparison".to_string(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Use a different plotly.js bundle, e.g. a local copy for offline viewing
    pub fn with_plotly_src(mut self, src: impl Into<String>) -> Self {
        self.plotly_src = src.into();
        self
    }

    /// Render the view and write it to `path`, creating parent directories
    pub fn write(&self, view: &ComparisonView, path: &Path) -> Result<OutputInfo> {
        let contents = self.render(view)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &contents)?;

        let info = OutputInfo {
            path: path.to_path_buf(),
            format: self.format,
            bytes: contents.len() as u64,
            panels: view.panels().len(),
            markers: view.left.len() + view.right.len(),
        };
        info!(
            output = %path.display(),
            bytes = info.bytes,
            markers = info.markers,
            "Wrote comparison view"
        );

        Ok(info)
    }

    pub fn render(&self, view: &ComparisonView) -> Result<String> {
        let figure = view.to_figure();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&figure)?),
            OutputFormat::Html => {
                let figure_json = escape_script(&serde_json::to_string(&figure)?);
                Ok(self.html_document(&view.title, &figure_json))
            }
        }
    }

    fn html_document(&self, title: &str, figure_json: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>{title}</title>
<script src="{src}" charset="utf-8"></script>
<style>html, body {{ height: 100%; margin: 0; }} #{id} {{ width: 100%; height: 100%; }}</style>
</head>
<body>
<div id="{id}"></div>
<script type="text/javascript">
var figure = {figure};
Plotly.newPlot("{id}", figure.data, figure.layout, {{ responsive: true }});
</script>
</body>
</html>
"#,
            title = escape_html(title),
            src = escape_html(&self.plotly_src),
            id = self.div_id,
            figure = figure_json,
        )
    }
}

impl Default for FigureWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep embedded JSON from closing the surrounding script tag
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[derive(Debug, Clone)]
pub struct OutputInfo {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub bytes: u64,
    pub panels: usize,
    pub markers: usize,
}

impl OutputInfo {
    pub fn summary(&self) -> String {
        format!(
            "Output Summary:\n\
            - File: {}\n\
            - Format: {:?}\n\
            - Size: {:.1} KB\n\
            - Panels: {}\n\
            - Markers: {}",
            self.path.display(),
            self.format,
            self.bytes as f64 / 1024.0,
            self.panels,
            self.markers
        )
    }
}
