use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_ONE_DAY_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_RECORD_LIMIT,
    DEFAULT_SEVEN_DAY_FILE, ENV_PREFIX, ONE_DAY_LABEL, SEVEN_DAY_LABEL,
};
use crate::writers::OutputFormat;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use config::builder::DefaultState;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Settings for a comparison run.
///
/// Sources, lowest precedence first: built-in defaults, `firemap.toml`
/// (or an explicit config file), `FIREMAP_*` environment variables,
/// command-line overrides.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppConfig {
    pub one_day_file: PathBuf,
    pub seven_day_file: PathBuf,

    #[validate(range(min = 1))]
    pub limit: usize,

    pub output_file: PathBuf,
    pub format: OutputFormat,

    #[validate(length(min = 1))]
    pub one_day_label: String,

    #[validate(length(min = 1))]
    pub seven_day_label: String,

    pub title: Option<String>,
    pub strict: bool,
    pub use_mmap: bool,
    pub plotly_src: Option<String>,
}

/// Values given on the command line; `None` leaves lower layers in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub one_day_file: Option<PathBuf>,
    pub seven_day_file: Option<PathBuf>,
    pub limit: Option<usize>,
    pub output_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub title: Option<String>,
    pub strict: Option<bool>,
    pub use_mmap: Option<bool>,
}

impl AppConfig {
    pub fn load(config_file: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        Self::load_with_env(
            config_file,
            overrides,
            Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        )
    }

    pub fn load_with_env(
        config_file: Option<&Path>,
        overrides: &Overrides,
        env: Environment,
    ) -> Result<Self> {
        let builder = Self::defaults()?;

        let builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false)),
        };

        let builder = builder
            .add_source(env)
            .set_override_option("one_day_file", path_value(&overrides.one_day_file))?
            .set_override_option("seven_day_file", path_value(&overrides.seven_day_file))?
            .set_override_option("limit", overrides.limit.map(|l| l as u64))?
            .set_override_option("output_file", path_value(&overrides.output_file))?
            .set_override_option("format", overrides.format.map(format_value))?
            .set_override_option("title", overrides.title.clone())?
            .set_override_option("strict", overrides.strict)?
            .set_override_option("use_mmap", overrides.use_mmap)?;

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("one_day_file", DEFAULT_ONE_DAY_FILE)?
            .set_default("seven_day_file", DEFAULT_SEVEN_DAY_FILE)?
            .set_default("limit", DEFAULT_RECORD_LIMIT as u64)?
            .set_default("output_file", DEFAULT_OUTPUT_FILE)?
            .set_default("format", "html")?
            .set_default("one_day_label", ONE_DAY_LABEL)?
            .set_default("seven_day_label", SEVEN_DAY_LABEL)?
            .set_default("strict", false)?
            .set_default("use_mmap", false)?)
    }
}

fn path_value(path: &Option<PathBuf>) -> Option<String> {
    path.as_ref().map(|p| p.to_string_lossy().into_owned())
}

fn format_value(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Html => "html",
        OutputFormat::Json => "json",
    }
}
