//! Extract Module
//!
//! Runs a full extraction: string table, classification, JSON output.
//!
//! ## Responsibilities
//! - Load the optional string table (never fatal when absent)
//! - Classify the primary spell dump
//! - Write the output document only when the whole scan succeeded

use crate::classifier::{Classifier, ExtractSummary, ParsedDatabase};
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, OutputStats};
use crate::strings::StringTable;

/// What an extraction run produced
#[derive(Debug, Clone)]
pub struct ExtractReport {
    pub summary: ExtractSummary,
    pub strings_loaded: usize,
    pub output: OutputStats,
}

/// Drives one extraction run
pub struct Extractor {
    config: Config,
    classifier: Classifier,
}

impl Extractor {
    pub fn new(config: Config) -> Self {
        let classifier = Classifier::new(config.policy.clone());
        Self { config, classifier }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load the string table; absence yields an empty table
    pub fn load_strings(&self) -> Result<StringTable> {
        StringTable::load(&self.config.strings_path)
    }

    /// Classify the primary dump without writing anything
    pub fn classify(&self) -> Result<(ParsedDatabase, ExtractSummary)> {
        self.classifier.classify_file(&self.config.spells_path)
    }

    /// Full run: strings, classification, then the output document
    ///
    /// On a missing dump or any decode error nothing is written.
    pub fn run(&self) -> Result<ExtractReport> {
        let strings = self.load_strings()?;
        let (database, summary) = self.classify()?;
        let output = output::write_database(&database, &self.config.output_path, self.config.pretty)?;

        Ok(ExtractReport {
            summary,
            strings_loaded: strings.len(),
            output,
        })
    }
}
