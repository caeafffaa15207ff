//! Lecture identifier and date extraction from free-text descriptions
//! 
//! Descriptions are matched against an ordered cascade of patterns; the first
//! pattern that matches decides the outcome.

pub mod patterns;

pub use patterns::{DateOnlyPattern, NumberedPartPattern, NumberedPattern};

use catalog_core::{CatalogError, Extraction};
use tracing::debug;

/// Look up a built-in pattern by name
pub fn builtin_pattern(name: &str) -> Option<Box<dyn LecturePattern>> {
    match name {
        "numbered_part" => Some(Box::new(NumberedPartPattern)),
        "numbered" => Some(Box::new(NumberedPattern)),
        "date_only" => Some(Box::new(DateOnlyPattern)),
        _ => None,
    }
}

/// One matcher in the extraction cascade
pub trait LecturePattern: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;
    
    /// Try to pull an identifier and date phrase out of `text`
    fn try_match(&self, text: &str) -> Option<Extraction>;
}

/// Ordered list of patterns, first match wins
pub struct PatternCascade {
    patterns: Vec<Box<dyn LecturePattern>>,
}

impl PatternCascade {
    /// Create an empty cascade
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }
    
    /// Cascade for this corpus: numbered with part, numbered, date only
    pub fn new() -> Self {
        Self::empty()
            .with_pattern(NumberedPartPattern)
            .with_pattern(NumberedPattern)
            .with_pattern(DateOnlyPattern)
    }
    
    /// Build a cascade from built-in pattern names, keeping their order
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> catalog_core::Result<Self> {
        let mut cascade = Self::empty();
        for name in names {
            let pattern = builtin_pattern(name.as_ref()).ok_or_else(|| {
                CatalogError::Config(format!("unknown extraction pattern '{}'", name.as_ref()))
            })?;
            cascade.patterns.push(pattern);
        }
        Ok(cascade)
    }
    
    /// Append a pattern after the existing ones
    pub fn with_pattern<P: LecturePattern + 'static>(mut self, pattern: P) -> Self {
        self.patterns.push(Box::new(pattern));
        self
    }
    
    /// Pattern names in evaluation order
    pub fn pattern_names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|p| p.name()).collect()
    }
    
    /// Extract (identifier, date phrase) from a description
    pub fn extract(&self, description: Option<&str>) -> Extraction {
        let Some(text) = description else {
            return Extraction::NoMatch;
        };
        
        for pattern in &self.patterns {
            if let Some(extraction) = pattern.try_match(text) {
                debug!("Pattern '{}' matched: {:?}", pattern.name(), extraction);
                return extraction;
            }
        }
        
        Extraction::NoMatch
    }
}

impl Default for PatternCascade {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PatternCascade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternCascade")
            .field("patterns", &self.pattern_names())
            .finish()
    }
}
