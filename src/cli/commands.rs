use crate::analyzers::FireAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::config::{AppConfig, Overrides};
use crate::error::{FireMapError, Result};
use crate::models::FireDataset;
use crate::processors::ComparisonViewBuilder;
use crate::readers::{ConcurrentReader, FireReader};
use crate::utils::progress::ProgressReporter;
use crate::writers::{FigureWriter, OutputInfo};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;
    let silent = cli.log_file.is_some();

    match cli.command {
        Commands::Compare {
            one_day,
            seven_day,
            limit,
            output_file,
            format,
            title,
            strict,
            mmap,
            open,
            config,
        } => {
            let overrides = Overrides {
                one_day_file: one_day,
                seven_day_file: seven_day,
                limit,
                output_file,
                format,
                title,
                strict: strict.then_some(true),
                use_mmap: mmap.then_some(true),
            };
            let settings = AppConfig::load(config.as_deref(), &overrides)?;

            let info = compare(&settings, silent).await?;

            if open {
                open::that(&info.path).map_err(|e| FireMapError::Open {
                    path: info.path.clone(),
                    message: e.to_string(),
                })?;
            }
        }

        Commands::Inspect {
            file,
            limit,
            strict,
            sample,
        } => {
            inspect(&file, limit, strict, sample)?;
        }
    }

    Ok(())
}

/// Load both windows, build the side-by-side view and write it out
pub async fn compare(settings: &AppConfig, silent: bool) -> Result<OutputInfo> {
    println!("Comparing fire detections...");
    println!("1-day file: {}", settings.one_day_file.display());
    println!("7-day file: {}", settings.seven_day_file.display());
    println!("Limit per file: {}", settings.limit);

    let progress = ProgressReporter::new_spinner("Loading fire detections...", silent);

    let reader = FireReader::new()
        .with_strict(settings.strict)
        .with_mmap(settings.use_mmap);
    let (one_day, seven_day) = ConcurrentReader::new(reader)
        .load_pair(
            &settings.one_day_file,
            &settings.seven_day_file,
            settings.limit,
        )
        .await?;

    progress.set_message("Building comparison view...");
    let loaded = [
        dataset_line(&settings.one_day_label, &one_day),
        dataset_line(&settings.seven_day_label, &seven_day),
    ];

    let mut builder = ComparisonViewBuilder::new();
    if let Some(title) = &settings.title {
        builder = builder.with_title(title.clone());
    }
    let view = builder.build(
        one_day,
        seven_day,
        &settings.one_day_label,
        &settings.seven_day_label,
    );

    let mut writer = FigureWriter::new().with_format(settings.format);
    if let Some(src) = &settings.plotly_src {
        writer = writer.with_plotly_src(src.clone());
    }
    let info = writer.write(&view, &settings.output_file)?;
    progress.finish_with_message(&format!("Wrote {}", info.path.display()));

    for line in &loaded {
        println!("{}", line);
    }
    println!("\n{}", info.summary());
    println!("Comparison complete!");

    Ok(info)
}

/// Load one file and print its load report, statistics and a sample
pub fn inspect(file: &Path, limit: usize, strict: bool, sample: usize) -> Result<()> {
    println!("Inspecting fire detections: {}", file.display());

    let dataset = FireReader::new().with_strict(strict).load(file, limit)?;
    println!("\n{}", dataset.report().summary());

    if dataset.is_empty() {
        println!("No valid detections found");
        return Ok(());
    }

    let stats = FireAnalyzer::new().analyze(&dataset)?;
    println!("\n{}", stats.summary());

    if sample > 0 {
        println!("\nSample Detections (showing {}):", sample.min(dataset.len()));
        for (i, record) in dataset.records().iter().take(sample).enumerate() {
            println!(
                "{}. ({:.4}, {:.4}) {}={:.1} on {}",
                i + 1,
                record.latitude,
                record.longitude,
                dataset.brightness_field(),
                record.brightness,
                record.acquisition_date
            );
        }
    }

    Ok(())
}

fn dataset_line(label: &str, dataset: &FireDataset) -> String {
    let skipped = dataset.report().skipped_total();
    format!(
        "{}: {} detections from {} ({}){}",
        label,
        dataset.len(),
        dataset.source().display(),
        dataset.brightness_field(),
        if skipped > 0 {
            format!(", {} rows skipped", skipped)
        } else {
            String::new()
        }
    )
}

/// Stderr logging at WARN (DEBUG with --verbose); a log file gets INFO and up
fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = match (verbose, log_file.is_some()) {
        (true, _) => Level::DEBUG,
        (false, true) => Level::INFO,
        (false, false) => Level::WARN,
    };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let result = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| FireMapError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| FireMapError::Config(format!("Failed to initialise logging: {}", e)))
}
