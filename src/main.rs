use anyhow::{anyhow, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;
use tracing::{error, info, warn};

use lecture_catalog::{CatalogProcessor, Config, ExportFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("Lecture Catalog")
        .version("0.1.0")
        .author("TigreRoll")
        .about("Builds a chronological catalog from lecture titles and descriptions")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("JSON array of lectures with title and description/text")
                .required(true)
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .help("Output directory for the catalog (defaults to the configured directory)")
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML configuration file")
        )
        .arg(
            Arg::new("sample-size")
                .long("sample-size")
                .value_name("NUM")
                .help("Number of leading dates used to detect the date format")
                .value_parser(value_parser!(usize))
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Export format: json or csv (repeatable)")
                .action(ArgAction::Append)
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue)
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");

    // Load configuration
    let loaded = match matches.get_one::<String>("config") {
        Some(path) => Some(Config::load_from(path)?),
        None => Config::load().ok(),
    };
    let defaulted = loaded.is_none();
    let mut config = loaded.unwrap_or_default();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter(verbose))
        .init();

    if verbose {
        info!("Verbose logging enabled");
    }

    if defaulted {
        warn!("Failed to load config, using defaults");
    }

    if let Some(sample_size) = matches.get_one::<usize>("sample-size") {
        config.dates.sample_size = *sample_size;
    }

    if let Some(formats) = matches.get_many::<String>("format") {
        config.output.export_formats = formats
            .map(|f| f.parse::<ExportFormat>())
            .collect::<Result<Vec<_>>>()?;
    }

    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("--input is required"))?;
    let output_dir = matches
        .get_one::<String>("output-dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.output.base_dir.clone());

    info!("🚀 Lecture Catalog starting...");
    info!("{}", config.summary());

    // Validate input file
    if !input.exists() {
        error!("Input file does not exist: {}", input.display());
        return Err(anyhow!("Input file not found"));
    }

    let processor = CatalogProcessor::new(config)?;
    let result = processor.process_file(&input, &output_dir).await?;

    result.log_report();
    info!("🎉 Catalog built in {:.2}s", result.processing_time.as_secs_f64());
    for path in &result.outputs {
        info!("📄 {}", path.display());
    }

    Ok(())
}
