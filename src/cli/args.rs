use crate::writers::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "firemap")]
#[command(about = "Compare 1-day and 7-day FIRMS wildfire detections on a world map")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the 1-day and 7-day detections side by side
    Compare {
        #[arg(long, help = "1-day FIRMS CSV [default: world_fires_1_day.csv]")]
        one_day: Option<PathBuf>,

        #[arg(long, help = "7-day FIRMS CSV [default: world_fires_7_day.csv]")]
        seven_day: Option<PathBuf>,

        #[arg(short, long, help = "Maximum detections per file [default: 1000]")]
        limit: Option<usize>,

        #[arg(
            short,
            long,
            help = "Output file path [default: global_fires_side_by_side.html]"
        )]
        output_file: Option<PathBuf>,

        #[arg(short, long, value_parser = parse_format, help = "Output format: html or json")]
        format: Option<OutputFormat>,

        #[arg(long, help = "Figure title")]
        title: Option<String>,

        #[arg(long, help = "Skip detections with off-globe coordinates")]
        strict: bool,

        #[arg(long, help = "Read input files through a memory map")]
        mmap: bool,

        #[arg(long, help = "Open the output with the default application")]
        open: bool,

        #[arg(short, long, help = "Settings file [default: firemap.toml if present]")]
        config: Option<PathBuf>,
    },

    /// Load a single FIRMS CSV and report what was parsed
    Inspect {
        #[arg(short, long, help = "FIRMS CSV file")]
        file: PathBuf,

        #[arg(short, long, default_value = "1000")]
        limit: usize,

        #[arg(long, help = "Skip detections with off-globe coordinates")]
        strict: bool,

        #[arg(short, long, default_value = "5", help = "Detections to print")]
        sample: usize,
    },
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    value.parse::<OutputFormat>().map_err(|e| e.to_string())
}
