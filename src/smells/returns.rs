//! `<returns>` consistency with the member's return type

use log::debug;
use crate::cs::{CsSourceFile, Declaration, DocComment, ReturnShape};
use super::finding::{finding_at, Finding};
use super::smell::XmlDocSmell;
use super::tags::{declaration_snippet, elements_by_name, has_meaningful_content, snippet_of, try_get_doc_comment};
use super::SmellDetector;

const RETURNS_TAG: &str = "returns";

/// Checks `<returns>` on methods, delegates, operators and conversion operators
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnsDetector;

impl ReturnsDetector {
    fn check_declaration(
        &self,
        file: &CsSourceFile,
        file_path: &str,
        declaration: &Declaration,
        shape: ReturnShape,
        doc: &DocComment,
        findings: &mut Vec<Finding>,
    ) {
        let tags = elements_by_name(doc, RETURNS_TAG);
        let report = |smell: XmlDocSmell, position: usize, snippet: &str| {
            finding_at(file, file_path, RETURNS_TAG, smell, position, snippet, Vec::new())
        };

        for duplicate in tags.iter().skip(1) {
            findings.push(report(
                XmlDocSmell::DuplicateReturnsTag,
                duplicate.position,
                snippet_of(doc, duplicate),
            ));
        }

        match (shape, tags.first()) {
            (ReturnShape::Void, Some(first)) => {
                findings.push(report(XmlDocSmell::ReturnsOnVoidMember, first.position, snippet_of(doc, first)));
            }
            (ReturnShape::Void, None) => {}
            (ReturnShape::Value, None) => {
                findings.push(report(
                    XmlDocSmell::MissingReturns,
                    declaration.anchor,
                    declaration_snippet(declaration, file.content()),
                ));
            }
            (ReturnShape::Value, Some(first)) => {
                if !has_meaningful_content(first) {
                    findings.push(report(XmlDocSmell::EmptyReturns, first.position, snippet_of(doc, first)));
                }
            }
        }
    }
}

impl SmellDetector for ReturnsDetector {
    fn name(&self) -> &'static str {
        "returns"
    }

    fn detect(&self, file: &CsSourceFile, file_path: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        for declaration in file.declarations() {
            let Some(shape) = declaration.kind.returns() else {
                continue;
            };
            let Some(doc) = try_get_doc_comment(&declaration) else {
                continue;
            };
            self.check_declaration(file, file_path, &declaration, shape, doc, &mut findings);
        }

        debug!("{}: {} returns findings", file_path, findings.len());
        findings
    }
}

#[cfg(test)]
#[path = "returns_tests.rs"]
mod tests;
