//! `<exception>` documentation checks and rethrow detection
//!
//! Syntax only: exception types thrown by the body are not resolved, so the
//! only body check is for a bare `throw;`, whose type cannot be known.

use std::collections::HashSet;
use log::debug;
use tree_sitter::Node;
use crate::cs::constants::{
    ANONYMOUS_METHOD_EXPRESSION, COMMENT, LAMBDA_EXPRESSION, LOCAL_FUNCTION_STATEMENT, THROW_STATEMENT,
};
use crate::cs::{CsSourceFile, Declaration};
use super::finding::{finding_at, Finding};
use super::smell::XmlDocSmell;
use super::tags::{cref_tags, has_meaningful_content, snippet_of, try_get_doc_comment};
use super::SmellDetector;

const EXCEPTION_TAG: &str = "exception";

/// Reports duplicate and empty `<exception>` tags and bare rethrows
#[derive(Debug, Clone, Copy, Default)]
pub struct ExceptionDetector;

impl ExceptionDetector {
    fn check_documentation(&self, file: &CsSourceFile, file_path: &str, declaration: &Declaration, findings: &mut Vec<Finding>) {
        let Some(doc) = try_get_doc_comment(declaration) else {
            return;
        };
        let tags = cref_tags(doc, EXCEPTION_TAG);

        // Crefs are compared exactly as written
        let mut seen = HashSet::new();
        for tag in &tags {
            if !seen.insert(tag.value) {
                findings.push(finding_at(
                    file,
                    file_path,
                    EXCEPTION_TAG,
                    XmlDocSmell::DuplicateExceptionTag,
                    tag.tag.position,
                    snippet_of(doc, tag.tag),
                    vec![tag.value.to_string()],
                ));
            }
        }

        for tag in &tags {
            if !has_meaningful_content(tag.tag) {
                findings.push(finding_at(
                    file,
                    file_path,
                    EXCEPTION_TAG,
                    XmlDocSmell::EmptyExceptionDescription,
                    tag.tag.position,
                    snippet_of(doc, tag.tag),
                    vec![tag.value.to_string()],
                ));
            }
        }
    }

    fn check_rethrow(&self, file: &CsSourceFile, file_path: &str, declaration: &Declaration, findings: &mut Vec<Finding>) {
        let Some(body) = declaration.kind.body() else {
            return;
        };

        if let Some(rethrow) = find_rethrow(body) {
            let snippet = rethrow.utf8_text(file.content().as_bytes()).unwrap_or_default();
            findings.push(finding_at(
                file,
                file_path,
                EXCEPTION_TAG,
                XmlDocSmell::RethrowCannotInferException,
                rethrow.start_byte(),
                snippet,
                vec![declaration.name.clone()],
            ));
        }
    }
}

impl SmellDetector for ExceptionDetector {
    fn name(&self) -> &'static str {
        "exception"
    }

    fn detect(&self, file: &CsSourceFile, file_path: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        for declaration in file.declarations() {
            self.check_documentation(file, file_path, &declaration, &mut findings);
            self.check_rethrow(file, file_path, &declaration, &mut findings);
        }

        debug!("{}: {} exception findings", file_path, findings.len());
        findings
    }
}

/// First bare `throw;` in document order
///
/// Lambdas, anonymous methods and local functions are not entered; they
/// propagate exceptions on their own terms.
pub fn find_rethrow(node: Node) -> Option<Node> {
    if is_rethrow(node) {
        return Some(node);
    }

    if matches!(
        node.kind(),
        LAMBDA_EXPRESSION | ANONYMOUS_METHOD_EXPRESSION | LOCAL_FUNCTION_STATEMENT
    ) {
        return None;
    }

    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(find_rethrow);
    found
}

fn is_rethrow(node: Node) -> bool {
    if node.kind() != THROW_STATEMENT {
        return false;
    }

    let mut cursor = node.walk();
    let has_operand = node
        .named_children(&mut cursor)
        .any(|child| child.kind() != COMMENT);
    !has_operand
}

#[cfg(test)]
#[path = "exception_tests.rs"]
mod tests;
