//! Findings reported by the detectors

use serde::Serialize;
use crate::cs::CsSourceFile;
use super::smell::XmlDocSmell;

/// Maximum snippet length in characters before truncation
pub const MAX_SNIPPET_CHARS: usize = 160;

/// One reported documentation defect
///
/// Immutable once created; line and column are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    smell: XmlDocSmell,
    rule_id: &'static str,
    tag_name: String,
    file_path: String,
    line: usize,
    column: usize,
    message: String,
    snippet: String,
    extra_context: Vec<String>,
}

impl Finding {
    pub fn smell(&self) -> XmlDocSmell {
        self.smell
    }

    pub fn rule_id(&self) -> &'static str {
        self.rule_id
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    pub fn extra_context(&self) -> &[String] {
        &self.extra_context
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({},{}): {} {}",
            self.file_path, self.line, self.column, self.rule_id, self.message
        )
    }
}

/// Create a finding at a source byte offset
///
/// The line and column are derived once here; the message is rendered from
/// the smell's template with `extra_context` as arguments.
pub fn finding_at(
    file: &CsSourceFile,
    file_path: &str,
    tag_name: &str,
    smell: XmlDocSmell,
    position: usize,
    snippet: &str,
    extra_context: Vec<String>,
) -> Finding {
    let location = file.line_column(position);
    Finding {
        smell,
        rule_id: smell.id(),
        tag_name: tag_name.to_string(),
        file_path: file_path.to_string(),
        line: location.line,
        column: location.column,
        message: smell.format_message(&extra_context),
        snippet: make_snippet(snippet),
        extra_context,
    }
}

/// Single line, bounded snippet for console output
pub fn make_snippet(text: &str) -> String {
    let collapsed = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
    let collapsed = collapsed.trim();

    if collapsed.chars().count() > MAX_SNIPPET_CHARS {
        let truncated: String = collapsed.chars().take(MAX_SNIPPET_CHARS).collect();
        format!("{}...", truncated)
    } else {
        collapsed.to_string()
    }
}

/// Order findings by file, line, column and rule id
///
/// Merging output of independent detectors or files is a concatenation
/// followed by this sort.
pub fn sort_findings(findings: &mut [Finding]) {
    findings.sort_by(|a, b| {
        (a.file_path.as_str(), a.line, a.column, a.rule_id)
            .cmp(&(b.file_path.as_str(), b.line, b.column, b.rule_id))
    });
}
