//! Runs every detector over a parsed file

use log::debug;
use crate::config::XmlDocOptions;
use crate::cs::CsSourceFile;
use super::finding::Finding;
use super::{
    BasicDetector, ExceptionDetector, MemberTagDetector, ParamDetector, ReturnsDetector, SmellDetector,
    TypeParamDetector, WellFormedDetector,
};

/// The full detector set in a fixed order
pub struct XmlDocAnalyzer {
    detectors: Vec<Box<dyn SmellDetector + Send + Sync>>,
}

impl std::fmt::Debug for XmlDocAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.detectors.iter().map(|d| d.name()).collect();
        f.debug_struct("XmlDocAnalyzer")
            .field("detectors", &names)
            .finish()
    }
}

impl XmlDocAnalyzer {
    pub fn new(options: &XmlDocOptions) -> Self {
        Self {
            detectors: vec![
                Box::new(WellFormedDetector),
                Box::new(BasicDetector::new(options)),
                Box::new(ParamDetector),
                Box::new(TypeParamDetector),
                Box::new(ReturnsDetector),
                Box::new(ExceptionDetector),
                Box::new(MemberTagDetector),
            ],
        }
    }

    /// Concatenated findings of all detectors, in detector order
    pub fn analyze(&self, file: &CsSourceFile, file_path: &str) -> Vec<Finding> {
        let findings: Vec<Finding> = self
            .detectors
            .iter()
            .flat_map(|detector| detector.detect(file, file_path))
            .collect();
        debug!(
            "Analyzed {} with {} detectors, {} findings",
            file_path,
            self.detectors.len(),
            findings.len()
        );
        findings
    }
}

/// Analyze one parsed file with the given options
pub fn analyze_source(file: &CsSourceFile, file_path: &str, options: &XmlDocOptions) -> Vec<Finding> {
    XmlDocAnalyzer::new(options).analyze(file, file_path)
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod tests;
