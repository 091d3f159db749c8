//! Markup checks over every doc comment of a file
//!
//! Runs on attached and orphaned comments alike and does not look at the
//! declaration kind. Unclosed container tags are found twice: structurally
//! from the element tree, and by a raw-text scan that still works where the
//! XML reader gave up. The scan is a best-effort heuristic; it only asks
//! whether a matching end tag string follows the start tag.

use std::collections::HashSet;
use std::sync::OnceLock;
use log::debug;
use regex::Regex;
use crate::cs::{CsSourceFile, DocComment, DocTag, TagClosing};
use super::allowed_tags::{is_container_tag, is_known_tag};
use super::finding::{finding_at, Finding};
use super::smell::XmlDocSmell;
use super::tags::{snippet_of, try_get_cref_attribute_value, try_get_name_attribute_value};
use super::SmellDetector;

/// Reports unknown, unclosed and malformed tags
#[derive(Debug, Clone, Copy, Default)]
pub struct WellFormedDetector;

impl SmellDetector for WellFormedDetector {
    fn name(&self) -> &'static str {
        "well-formed"
    }

    fn detect(&self, file: &CsSourceFile, file_path: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        for doc in file.doc_comments() {
            let mut checker = CommentChecker {
                file,
                file_path,
                doc: &doc,
                findings: &mut findings,
                unclosed_positions: HashSet::new(),
            };
            checker.check_elements();
            checker.scan_unclosed_tags();
        }

        debug!("{}: {} well-formed findings", file_path, findings.len());
        findings
    }
}

struct CommentChecker<'a> {
    file: &'a CsSourceFile,
    file_path: &'a str,
    doc: &'a DocComment,
    findings: &'a mut Vec<Finding>,
    /// Source positions already reported as unclosed by the structural pass
    unclosed_positions: HashSet<usize>,
}

impl<'a> CommentChecker<'a> {
    fn report(&mut self, tag: &DocTag, smell: XmlDocSmell, extra_context: Vec<String>) {
        self.findings.push(finding_at(
            self.file,
            self.file_path,
            &tag.local_name,
            smell,
            tag.position,
            snippet_of(self.doc, tag),
            extra_context,
        ));
    }

    fn check_elements(&mut self) {
        let doc = self.doc;
        for tag in doc.elements() {
            let name = tag.local_name.as_str();

            if !is_known_tag(name) {
                self.report(tag, XmlDocSmell::UnknownTag, vec![name.to_string()]);
            }

            // Elements left open by a reader error are judged by the text scan
            if is_container_tag(name) && tag.closing == TagClosing::Missing {
                self.unclosed_positions.insert(tag.position);
                self.report(tag, XmlDocSmell::MissingEndTag, vec![name.to_string()]);
            }

            match name {
                "paramref" if !tag.children.is_empty() => {
                    self.report(tag, XmlDocSmell::ParamRefNotEmpty, Vec::new());
                }
                "typeparamref" if !tag.children.is_empty() => {
                    self.report(tag, XmlDocSmell::TypeParamRefNotEmpty, Vec::new());
                }
                "param" if try_get_name_attribute_value(tag).is_none() => {
                    self.report(tag, XmlDocSmell::ParamMissingName, Vec::new());
                }
                "typeparam" if try_get_name_attribute_value(tag).is_none() => {
                    self.report(tag, XmlDocSmell::TypeParamMissingName, Vec::new());
                }
                "exception" if !has_cref(tag) => {
                    self.report(tag, XmlDocSmell::ExceptionMissingCref, Vec::new());
                }
                _ => {}
            }
        }
    }

    /// Raw-text recovery pass for container start tags without an end tag
    fn scan_unclosed_tags(&mut self) {
        let doc = self.doc;
        let xml = doc.xml();

        for captures in start_tag_regex().captures_iter(xml) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let name = name.as_str();
            let rest = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
            if !is_container_tag(name) || rest.trim_end().ends_with('/') {
                continue;
            }

            if has_end_tag_after(&xml[whole.end()..], name) {
                continue;
            }

            let position = doc.source_offset(whole.start());
            if !self.unclosed_positions.insert(position) {
                continue;
            }
            self.findings.push(finding_at(
                self.file,
                self.file_path,
                name,
                XmlDocSmell::MissingEndTag,
                position,
                whole.as_str(),
                vec![name.to_string()],
            ));
        }
    }
}

/// Whether `</name>` (whitespace allowed before `>`) occurs in `rest`
fn has_end_tag_after(rest: &str, name: &str) -> bool {
    let opening = format!("</{}", name);
    rest.match_indices(&opening)
        .any(|(i, m)| rest[i + m.len()..].trim_start().starts_with('>'))
}

fn has_cref(tag: &DocTag) -> bool {
    try_get_cref_attribute_value(tag)
        .map(|cref| !cref.trim().is_empty())
        .unwrap_or(false)
}

/// Start tag: name, then everything up to the closing `>` (which may be missing)
fn start_tag_regex() -> &'static Regex {
    static START_TAG: OnceLock<Regex> = OnceLock::new();
    START_TAG.get_or_init(|| {
        Regex::new(r"<([A-Za-z_][\w.:\-]*)([^<>]*)>?").expect("Failed to compile start tag regex")
    })
}

#[cfg(test)]
#[path = "well_formed_tests.rs"]
mod tests;
