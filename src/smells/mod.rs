//! XML documentation smell detection
//!
//! Each detector takes a parsed file and returns its findings. Detectors
//! share only the stateless helpers in this module (tag extraction, named
//! tag reconciliation, the allowed-tag matrix) and never call each other.

pub mod allowed_tags;
pub mod analyzer;
pub mod basic;
pub mod exception;
pub mod finding;
pub mod member_tags;
pub mod named_tags;
pub mod params;
pub mod returns;
pub mod smell;
pub mod tags;
pub mod well_formed;

use crate::cs::CsSourceFile;

pub use analyzer::{analyze_source, XmlDocAnalyzer};
pub use basic::BasicDetector;
pub use exception::ExceptionDetector;
pub use finding::{sort_findings, Finding};
pub use member_tags::MemberTagDetector;
pub use params::{ParamDetector, TypeParamDetector};
pub use returns::ReturnsDetector;
pub use smell::XmlDocSmell;
pub use well_formed::WellFormedDetector;

/// A documentation smell detector
///
/// Detectors are pure: the same file always yields the same findings in the
/// same order, and nothing is shared between invocations.
pub trait SmellDetector {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Findings for one parsed file; `file_path` is only copied into findings
    fn detect(&self, file: &CsSourceFile, file_path: &str) -> Vec<Finding>;
}
