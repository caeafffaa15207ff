use anyhow::{anyhow, Result};
use catalog_core::{FormatDecision, LectureRecord, RawLecture};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::{Config, ExportFormat};
use crate::dates::{detect_format, normalize, MonthTable};
use crate::export::{self, CATALOG_FILE_STEM, FORMAT_ANALYSIS_FILE};
use crate::extraction::PatternCascade;
use crate::ordering::{assign_order, derive_key};

/// A date phrase that could not be converted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailedConversion {
    pub title: String,
    pub raw_date: String,
}

/// Date conversion counts for a batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversionStats {
    /// Records with a raw date phrase
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// First failures, in input order
    pub failures: Vec<FailedConversion>,
}

impl ConversionStats {
    /// Derive counts from the null-ness of converted records
    pub fn from_records(records: &[LectureRecord], max_examples: usize) -> Self {
        let total = records.iter().filter(|r| r.raw_date_text.is_some()).count();
        let successful = records.iter().filter(|r| r.date_ordinal.is_some()).count();
        let failures = records
            .iter()
            .filter(|r| r.has_failed_date())
            .take(max_examples)
            .map(|r| FailedConversion {
                title: r.title.clone(),
                raw_date: r.raw_date_text.clone().unwrap_or_default(),
            })
            .collect();
        
        Self {
            total,
            successful,
            failed: total - successful,
            failures,
        }
    }
    
    /// Percentage of dates converted, None for a batch without dates
    pub fn success_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| self.successful as f64 / self.total as f64 * 100.0)
    }
}

/// Overview of the finished catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total: usize,
    pub with_numbers: usize,
    pub without_numbers: usize,
    /// Earliest and latest canonical dates
    pub date_range: Option<(String, String)>,
}

impl CatalogSummary {
    pub fn from_records(records: &[LectureRecord]) -> Self {
        let with_numbers = records.iter().filter(|r| r.raw_identifier.is_some()).count();
        
        let dated = records.iter().filter_map(|r| r.date_ordinal);
        let date_range = dated.clone().min().zip(dated.max()).map(|(first, last)| {
            (
                first.format("%d/%m/%Y").to_string(),
                last.format("%d/%m/%Y").to_string(),
            )
        });
        
        Self {
            total: records.len(),
            with_numbers,
            without_numbers: records.len() - with_numbers,
            date_range,
        }
    }
}

/// Result of one catalog run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResult {
    /// Records in chronological order
    pub records: Vec<LectureRecord>,
    pub format: FormatDecision,
    pub conversion: ConversionStats,
    pub summary: CatalogSummary,
    pub processing_time: Duration,
    /// Files written by `process_file`
    pub outputs: Vec<PathBuf>,
}

impl CatalogResult {
    /// Log the run report
    pub fn log_report(&self) {
        info!("📅 Detected date format: {} (conversion needed: {})",
              self.format.detected_format,
              if self.format.needs_translation { "Yes" } else { "No" });
        info!("   Sample: {} DD/MM/YYYY, {} Russian, {} other",
              self.format.sample.delimiter,
              self.format.sample.month_name,
              self.format.sample.other);
        
        info!("✅ Dates converted: {}/{}", self.conversion.successful, self.conversion.total);
        match self.conversion.success_rate() {
            Some(rate) => info!("📊 Success rate: {:.1}%", rate),
            None => info!("📊 Success rate: N/A"),
        }
        
        if self.conversion.failed > 0 {
            warn!("❌ Failed conversions ({}):", self.conversion.failed);
            for failure in &self.conversion.failures {
                warn!("  - '{}' in '{}'", failure.raw_date, failure.title);
            }
            let hidden = self.conversion.failed - self.conversion.failures.len();
            if hidden > 0 {
                warn!("  ... and {} more", hidden);
            }
        }
        
        info!("📚 Total lectures: {}", self.summary.total);
        info!("🔢 Lectures with numbers: {}", self.summary.with_numbers);
        info!("🔢 Lectures without numbers: {}", self.summary.without_numbers);
        match &self.summary.date_range {
            Some((first, last)) => info!("🗓️ Date range: {} to {}", first, last),
            None => info!("🗓️ Date range: No valid dates found"),
        }
    }
}

/// Runs extraction, date normalization, key derivation and ordering over a batch
pub struct CatalogProcessor {
    config: Config,
    cascade: PatternCascade,
    months: MonthTable,
}

impl CatalogProcessor {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let cascade = PatternCascade::from_names(&config.extraction.patterns)?;
        
        info!("🔧 Initializing CatalogProcessor");
        debug!("Extraction cascade: {:?}", cascade.pattern_names());
        
        Ok(Self {
            config,
            cascade,
            months: MonthTable::russian(),
        })
    }
    
    /// Use a custom extraction cascade
    pub fn with_cascade(mut self, cascade: PatternCascade) -> Self {
        self.cascade = cascade;
        self
    }
    
    pub fn config(&self) -> &Config {
        &self.config
    }
    
    /// Build the chronological catalog for a complete batch
    pub fn process(&self, lectures: Vec<RawLecture>) -> CatalogResult {
        let start_time = Instant::now();
        
        // Stage 1: pattern extraction
        info!("🔍 Extracting lecture information from {} descriptions...", lectures.len());
        let records: Vec<LectureRecord> = lectures
            .into_iter()
            .map(|lecture| {
                let extraction = self.cascade.extract(lecture.description.as_deref());
                LectureRecord::from(lecture).with_extraction(extraction)
            })
            .collect();
        
        let matched = records.iter().filter(|r| r.raw_date_text.is_some()).count();
        info!("📝 Found lecture information in {} of {} descriptions", matched, records.len());
        
        // Stage 2a: batch-wide format vote
        let format = {
            let dates: Vec<&str> = records
                .iter()
                .filter_map(|r| r.raw_date_text.as_deref())
                .collect();
            detect_format(&dates, &self.months, self.config.dates.sample_size)
        };
        info!("📅 Date format: {} ({} dates)", format.detected_format, format.total_dates);
        
        // Stage 2b: per-record conversion, then key derivation
        let records: Vec<LectureRecord> = records
            .into_iter()
            .map(|record| {
                let conversion = normalize(record.raw_date_text.as_deref(), &format, &self.months);
                let key = derive_key(record.raw_identifier.as_deref());
                record.with_date(conversion).with_key(key)
            })
            .collect();
        
        let conversion = ConversionStats::from_records(&records, self.config.dates.max_failure_examples);
        
        // Stage 3: chronological ordering
        info!("🗂️ Sorting lectures: date, lecture number, part number");
        let records = assign_order(records);
        let summary = CatalogSummary::from_records(&records);
        
        CatalogResult {
            records,
            format,
            conversion,
            summary,
            processing_time: start_time.elapsed(),
            outputs: Vec::new(),
        }
    }
    
    /// Load a JSON array of lectures
    pub async fn load_lectures(path: &Path) -> Result<Vec<RawLecture>> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
        Ok(RawLecture::parse_batch(&content)?)
    }
    
    /// Load `input`, build the catalog and write the configured exports into `output_dir`
    pub async fn process_file(&self, input: &Path, output_dir: &Path) -> Result<CatalogResult> {
        info!("🚀 Building lecture catalog...");
        info!("📁 Input: {}", input.display());
        info!("📂 Output: {}", output_dir.display());
        
        let lectures = Self::load_lectures(input).await?;
        if lectures.is_empty() {
            warn!("No lectures found in {}", input.display());
        }
        
        let mut result = self.process(lectures);
        
        tokio::fs::create_dir_all(output_dir).await?;
        let rows = export::catalog_rows(&result.records);
        
        for format in &self.config.output.export_formats {
            let path = output_dir.join(format!("{}.{}", CATALOG_FILE_STEM, format.extension()));
            match format {
                ExportFormat::JSON => export::write_json(&path, &rows).await?,
                ExportFormat::CSV => export::write_csv(&path, &rows).await?,
            }
            result.outputs.push(path);
        }
        
        if self.config.output.save_format_analysis {
            let path = output_dir.join(FORMAT_ANALYSIS_FILE);
            export::write_format_analysis(&path, &result.format).await?;
            result.outputs.push(path);
        }
        
        Ok(result)
    }
}
