//! Test utilities shared across the codebase

use crate::cs::CsSourceFile;
use crate::smells::{Finding, XmlDocSmell};

/// Path reported in findings produced by tests
pub const TEST_FILE: &str = "Test.cs";

/// Parse a C# snippet, panicking on failure
pub fn parse_cs(content: &str) -> CsSourceFile {
    CsSourceFile::parse(content).expect("Failed to parse C# test source")
}

/// Number of findings of one smell
pub fn count(findings: &[Finding], smell: XmlDocSmell) -> usize {
    findings.iter().filter(|f| f.smell() == smell).count()
}

/// Smells of the findings, in report order
pub fn smells_of(findings: &[Finding]) -> Vec<XmlDocSmell> {
    findings.iter().map(|f| f.smell()).collect()
}

/// Findings of one smell
pub fn of_smell(findings: &[Finding], smell: XmlDocSmell) -> Vec<&Finding> {
    findings.iter().filter(|f| f.smell() == smell).collect()
}

/// 1-based (line, column) of the first occurrence of `needle` in `content`
pub fn location_of(content: &str, needle: &str) -> (usize, usize) {
    let offset = content
        .find(needle)
        .unwrap_or_else(|| panic!("'{}' not found in test source", needle));
    let before = &content[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = content[line_start..offset].chars().count() + 1;
    (line, column)
}

/// Print findings, handy when a test assertion fails
pub fn dump(findings: &[Finding]) {
    for finding in findings {
        println!("{}", finding);
    }
}
