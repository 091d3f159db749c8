//! `<param>` and `<typeparam>` reconciliation detectors

use log::debug;
use crate::cs::{CsSourceFile, Declaration, DeclarationKind, DeclaredName, DocComment};
use super::finding::Finding;
use super::named_tags::{
    analyze_named_tags, unique_declared_names, NamedTagSmells, NamedTagTarget, PARAM_SMELLS, TYPE_PARAM_SMELLS,
};
use super::tags::{has_meaningful_content, named_tags, try_get_doc_comment};
use super::SmellDetector;

/// Reconciles declared parameters with `<param>` tags
#[derive(Debug, Clone, Copy, Default)]
pub struct ParamDetector;

/// Reconciles declared type parameters with `<typeparam>` tags
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeParamDetector;

impl SmellDetector for ParamDetector {
    fn name(&self) -> &'static str {
        "param"
    }

    fn detect(&self, file: &CsSourceFile, file_path: &str) -> Vec<Finding> {
        let findings = detect_named(file, file_path, "param", PARAM_SMELLS, DeclarationKind::parameters);
        debug!("{}: {} param findings", file_path, findings.len());
        findings
    }
}

impl SmellDetector for TypeParamDetector {
    fn name(&self) -> &'static str {
        "typeparam"
    }

    fn detect(&self, file: &CsSourceFile, file_path: &str) -> Vec<Finding> {
        let findings = detect_named(
            file,
            file_path,
            "typeparam",
            TYPE_PARAM_SMELLS,
            DeclarationKind::type_parameters,
        );
        debug!("{}: {} typeparam findings", file_path, findings.len());
        findings
    }
}

fn detect_named<'t, F>(
    file: &'t CsSourceFile,
    file_path: &str,
    tag_name: &str,
    smells: NamedTagSmells,
    declared_of: F,
) -> Vec<Finding>
where
    F: for<'d> Fn(&'d DeclarationKind<'t>) -> Option<&'d [DeclaredName]>,
{
    let target = NamedTagTarget {
        file,
        file_path,
        tag_name,
        smells,
    };

    let mut findings = Vec::new();
    for declaration in file.declarations() {
        let Some(declared) = declared_of(&declaration.kind).filter(|names| !names.is_empty()) else {
            continue;
        };
        // Undocumented declarations are reported once by the basic detector
        let Some(doc) = try_get_doc_comment(&declaration) else {
            continue;
        };

        findings.extend(reconcile(&target, &declaration, declared, doc));
    }
    findings
}

fn reconcile(
    target: &NamedTagTarget,
    declaration: &Declaration,
    declared: &[DeclaredName],
    doc: &DocComment,
) -> Vec<Finding> {
    let unique = unique_declared_names(declared);
    let names: Vec<&str> = unique.iter().map(|d| d.name.as_str()).collect();
    let tags = named_tags(doc, target.tag_name);

    let anchor_for = |name: &str| {
        unique
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.position)
            .unwrap_or(declaration.anchor)
    };

    analyze_named_tags(
        target,
        &names,
        &tags,
        anchor_for,
        has_meaningful_content,
        |tag| doc.element_text(tag).to_string(),
    )
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
