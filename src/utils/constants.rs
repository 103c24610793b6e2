/// Required column names
pub const LATITUDE_COLUMN: &str = "latitude";
pub const LONGITUDE_COLUMN: &str = "longitude";
pub const ACQ_DATE_COLUMN: &str = "acq_date";

/// Default input and output files
pub const DEFAULT_ONE_DAY_FILE: &str = "world_fires_1_day.csv";
pub const DEFAULT_SEVEN_DAY_FILE: &str = "world_fires_7_day.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "global_fires_side_by_side.html";
pub const DEFAULT_CONFIG_FILE: &str = "firemap.toml";
pub const ENV_PREFIX: &str = "FIREMAP";

/// Processing defaults
pub const DEFAULT_RECORD_LIMIT: usize = 1000;
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB

/// Panel defaults
pub const ONE_DAY_LABEL: &str = "1 Day Fires";
pub const SEVEN_DAY_LABEL: &str = "7 Day Fires";
pub const DEFAULT_TITLE: &str = "Global Fire Data Comparison: 1 Day vs 7 Day";

/// Marker styling
pub const MARKER_SIZE_DIVISOR: f64 = 50.0;
pub const COLORBAR_TITLE: &str = "Brightness";
pub const COLORBAR_X: f64 = 1.02;
pub const COLORBAR_Y: f64 = 0.5;
pub const COLORBAR_THICKNESS: f64 = 15.0;
pub const COLORBAR_LENGTH: f64 = 0.8;

/// Horizontal paper domains of the 1x2 map grid
pub const LEFT_PANEL_DOMAIN: [f64; 2] = [0.0, 0.45];
pub const RIGHT_PANEL_DOMAIN: [f64; 2] = [0.55, 1.0];
pub const SUBPLOT_TITLE_FONT_SIZE: u32 = 16;

/// FIRMS acquisition date format
pub const ACQ_DATE_FORMAT: &str = "%Y-%m-%d";

/// plotly.js bundle loaded by generated documents
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
