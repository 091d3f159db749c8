//! Top level tags that do not belong on the documented kind of member

use log::debug;
use crate::cs::CsSourceFile;
use super::allowed_tags::{is_known_tag, is_tag_allowed};
use super::finding::{finding_at, Finding};
use super::smell::XmlDocSmell;
use super::tags::{snippet_of, try_get_doc_comment};
use super::SmellDetector;

/// Checks documented declarations against the allowed-tag matrix
///
/// Only top level elements are judged; tags outside the known vocabulary
/// are reported by the well-formed detector instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberTagDetector;

impl SmellDetector for MemberTagDetector {
    fn name(&self) -> &'static str {
        "member-tags"
    }

    fn detect(&self, file: &CsSourceFile, file_path: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        for declaration in file.declarations() {
            let Some(doc) = try_get_doc_comment(&declaration) else {
                continue;
            };
            let kind = declaration.member_kind();

            for tag in doc.top_level_elements() {
                if !is_known_tag(&tag.local_name) || is_tag_allowed(kind, &tag.local_name) {
                    continue;
                }
                findings.push(finding_at(
                    file,
                    file_path,
                    &tag.local_name,
                    XmlDocSmell::InvalidTagOnMember,
                    tag.position,
                    snippet_of(doc, tag),
                    vec![tag.local_name.clone(), kind.display_name().to_string()],
                ));
            }
        }

        debug!("{}: {} member tag findings", file_path, findings.len());
        findings
    }
}
