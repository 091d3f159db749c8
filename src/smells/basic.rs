//! Doc comment existence and `<summary>` checks

use log::debug;
use crate::config::XmlDocOptions;
use crate::cs::{CsSourceFile, Declaration, MemberKind};
use super::finding::{finding_at, Finding};
use super::smell::XmlDocSmell;
use super::tags::{declaration_snippet, elements_by_name, has_meaningful_content, snippet_of, try_get_doc_comment};
use super::SmellDetector;

/// Reports undocumented declarations and missing or empty summaries
#[derive(Debug, Clone, Default)]
pub struct BasicDetector {
    options: XmlDocOptions,
}

impl BasicDetector {
    pub fn new(options: &XmlDocOptions) -> Self {
        Self {
            options: options.clone(),
        }
    }

    fn is_checked(&self, kind: MemberKind) -> bool {
        match kind {
            MemberKind::EnumMember => self.options.check_enum_members,
            MemberKind::Namespace => self.options.require_documentation_for_namespaces,
            _ => true,
        }
    }

    fn check_declaration(&self, file: &CsSourceFile, file_path: &str, declaration: &Declaration, findings: &mut Vec<Finding>) {
        let kind = declaration.member_kind();

        let Some(doc) = try_get_doc_comment(declaration) else {
            findings.push(finding_at(
                file,
                file_path,
                "",
                XmlDocSmell::MissingDocumentation,
                declaration.anchor,
                declaration_snippet(declaration, file.content()),
                vec![kind.display_name().to_string(), declaration.name.clone()],
            ));
            return;
        };

        if matches!(kind, MemberKind::Field | MemberKind::EventField) && !self.options.require_summary_for_fields {
            return;
        }

        match elements_by_name(doc, "summary").first() {
            None => findings.push(finding_at(
                file,
                file_path,
                "summary",
                XmlDocSmell::MissingSummary,
                doc.start(),
                doc.xml(),
                Vec::new(),
            )),
            Some(summary) if !has_meaningful_content(summary) => findings.push(finding_at(
                file,
                file_path,
                "summary",
                XmlDocSmell::EmptySummary,
                summary.position,
                snippet_of(doc, summary),
                Vec::new(),
            )),
            Some(_) => {}
        }
    }
}

impl SmellDetector for BasicDetector {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn detect(&self, file: &CsSourceFile, file_path: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        for declaration in file.declarations() {
            if self.is_checked(declaration.member_kind()) {
                self.check_declaration(file, file_path, &declaration, &mut findings);
            }
        }

        debug!("{}: {} basic findings", file_path, findings.len());
        findings
    }
}

#[cfg(test)]
#[path = "basic_tests.rs"]
mod tests;
