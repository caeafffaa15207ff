use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dates::DEFAULT_SAMPLE_SIZE;

/// Accepted values for `output.log_level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Names of the built-in extraction patterns, in default cascade order
pub const BUILTIN_PATTERNS: [&str; 3] = ["numbered_part", "numbered", "date_only"];

/// Configuration for the lecture catalog builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Description pattern settings
    pub extraction: ExtractionConfig,
    
    /// Date normalization settings
    pub dates: DatesConfig,
    
    /// Output and logging settings
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Built-in patterns to try, in order
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatesConfig {
    /// Leading non-null dates inspected by the format vote
    pub sample_size: usize,
    
    /// Failed conversions listed in the run report
    pub max_failure_examples: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory
    pub base_dir: PathBuf,
    
    /// Catalog export formats
    pub export_formats: Vec<ExportFormat>,
    
    /// Write date_format_analysis.json next to the catalog
    pub save_format_analysis: bool,
    
    /// Log level
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    JSON,
    CSV,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::JSON => "json",
            ExportFormat::CSV => "csv",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::JSON),
            "csv" => Ok(ExportFormat::CSV),
            other => Err(anyhow!("Unknown export format: {}", other)),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let config_paths = [
            "lecture-catalog.toml",
            "config/lecture-catalog.toml",
        ];

        for path in &config_paths {
            if Path::new(path).exists() {
                match Self::load_from(path) {
                    Ok(config) => {
                        tracing::info!("📄 Loaded configuration from: {}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        Self::from_env()
    }

    /// Load configuration from a specific TOML file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_str = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&config_str)?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(sample_size) = std::env::var("LECTURE_CATALOG_SAMPLE_SIZE") {
            config.dates.sample_size = sample_size.parse().unwrap_or(DEFAULT_SAMPLE_SIZE);
        }

        if let Ok(output_dir) = std::env::var("LECTURE_CATALOG_OUTPUT_DIR") {
            config.output.base_dir = PathBuf::from(output_dir);
        }

        if let Ok(log_level) = std::env::var("LECTURE_CATALOG_LOG_LEVEL") {
            config.output.log_level = log_level;
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), config_str)?;
        tracing::info!("💾 Configuration saved to: {}", path.as_ref().display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.dates.sample_size == 0 {
            return Err(anyhow!("sample_size must be greater than 0"));
        }

        if self.extraction.patterns.is_empty() {
            return Err(anyhow!("at least one extraction pattern is required"));
        }

        for name in &self.extraction.patterns {
            if !BUILTIN_PATTERNS.contains(&name.as_str()) {
                return Err(anyhow!(
                    "unknown extraction pattern '{}' (expected one of: {})",
                    name,
                    BUILTIN_PATTERNS.join(", ")
                ));
            }
        }

        if !LOG_LEVELS.contains(&self.output.log_level.to_lowercase().as_str()) {
            return Err(anyhow!(
                "unknown log_level '{}' (expected one of: {})",
                self.output.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        if self.output.export_formats.is_empty() {
            return Err(anyhow!("at least one export format is required"));
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }

    /// Tracing filter for the configured log level; `verbose` forces debug
    pub fn log_filter(&self, verbose: bool) -> String {
        let level = if verbose {
            "debug".to_string()
        } else {
            self.output.log_level.to_lowercase()
        };
        format!("lecture_catalog={},warn", level)
    }

    /// Get runtime configuration summary
    pub fn summary(&self) -> String {
        format!(
            "Lecture Catalog Configuration:\n\
            - Patterns: {}\n\
            - Format Sample Size: {}\n\
            - Output Directory: {}\n\
            - Export Formats: {:?}",
            self.extraction.patterns.join(" -> "),
            self.dates.sample_size,
            self.output.base_dir.display(),
            self.output.export_formats,
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig {
                patterns: BUILTIN_PATTERNS.iter().map(|p| p.to_string()).collect(),
            },
            dates: DatesConfig {
                sample_size: DEFAULT_SAMPLE_SIZE,
                max_failure_examples: 5,
            },
            output: OutputConfig {
                base_dir: PathBuf::from("./output"),
                export_formats: vec![ExportFormat::JSON, ExportFormat::CSV],
                save_format_analysis: true,
                log_level: "info".to_string(),
            },
        }
    }
}

/// Configuration builder for programmatic config creation
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.config.dates.sample_size = sample_size;
        self
    }

    pub fn with_patterns(mut self, patterns: &[&str]) -> Self {
        self.config.extraction.patterns = patterns.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.config.output.base_dir = dir;
        self
    }

    pub fn with_export_formats(mut self, formats: Vec<ExportFormat>) -> Self {
        self.config.output.export_formats = formats;
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.config.output.log_level = level.to_string();
        self
    }

    pub fn save_format_analysis(mut self, enable: bool) -> Self {
        self.config.output.save_format_analysis = enable;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dates.sample_size, 10);
        assert_eq!(config.extraction.patterns, vec!["numbered_part", "numbered", "date_only"]);
        assert!(config.output.save_format_analysis);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .with_sample_size(5)
            .with_patterns(&["date_only"])
            .with_export_formats(vec![ExportFormat::CSV])
            .save_format_analysis(false)
            .build();

        assert_eq!(config.dates.sample_size, 5);
        assert_eq!(config.extraction.patterns, vec!["date_only"]);
        assert_eq!(config.output.export_formats, vec![ExportFormat::CSV]);
        assert!(!config.output.save_format_analysis);
    }

    #[test]
    fn test_config_validation() {
        assert!(ConfigBuilder::new().with_sample_size(0).build().validate().is_err());
        assert!(ConfigBuilder::new().with_patterns(&[]).build().validate().is_err());
        assert!(ConfigBuilder::new().with_patterns(&["fuzzy"]).build().validate().is_err());
        assert!(ConfigBuilder::new().with_export_formats(Vec::new()).build().validate().is_err());
    }

    #[test]
    fn test_log_filter_follows_log_level() {
        let config = ConfigBuilder::new().with_log_level("WARN").build();
        assert!(config.validate().is_ok());
        assert_eq!(config.log_filter(false), "lecture_catalog=warn,warn");
        assert_eq!(config.log_filter(true), "lecture_catalog=debug,warn");

        assert_eq!(Config::default().log_filter(false), "lecture_catalog=info,warn");
        assert!(ConfigBuilder::new().with_log_level("loud").build().validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lecture-catalog.toml");

        let config = ConfigBuilder::new().with_sample_size(7).build();
        config.save(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.dates.sample_size, 7);
        assert_eq!(loaded.output.export_formats, config.output.export_formats);
    }

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::JSON);
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::CSV);
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }
}
