//! Reconciliation of declared names against named doc tags
//!
//! One algorithm serves both `<param>` and `<typeparam>`: the caller supplies
//! the smell set and the providers for anchors, content and snippets.

use std::collections::HashSet;
use crate::cs::{CsSourceFile, DeclaredName, DocTag};
use super::finding::{finding_at, Finding};
use super::smell::XmlDocSmell;
use super::tags::NamedDocTag;

/// Smells reported by one run of [`analyze_named_tags`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedTagSmells {
    pub missing: XmlDocSmell,
    pub empty: XmlDocSmell,
    pub unknown: XmlDocSmell,
    pub duplicate: XmlDocSmell,
}

pub const PARAM_SMELLS: NamedTagSmells = NamedTagSmells {
    missing: XmlDocSmell::MissingParamTag,
    empty: XmlDocSmell::EmptyParamDescription,
    unknown: XmlDocSmell::UnknownParamTag,
    duplicate: XmlDocSmell::DuplicateParamTag,
};

pub const TYPE_PARAM_SMELLS: NamedTagSmells = NamedTagSmells {
    missing: XmlDocSmell::MissingTypeParamTag,
    empty: XmlDocSmell::EmptyTypeParamDescription,
    unknown: XmlDocSmell::UnknownTypeParamTag,
    duplicate: XmlDocSmell::DuplicateTypeParamTag,
};

/// Where a reconciliation reports and under which tag name
pub struct NamedTagTarget<'a> {
    pub file: &'a CsSourceFile,
    pub file_path: &'a str,
    pub tag_name: &'a str,
    pub smells: NamedTagSmells,
}

/// Reconcile declared names with the named tags of a doc comment
///
/// Tags are visited in document order. A tag naming something undeclared is
/// unknown; a name seen before is a duplicate no matter its content; the
/// first tag for a name is checked for content. Names never seen are then
/// reported missing in declaration order at `anchor_for(name)`.
pub fn analyze_named_tags<A, M, S>(
    target: &NamedTagTarget,
    declared_names: &[&str],
    tags: &[NamedDocTag],
    anchor_for: A,
    is_meaningful: M,
    snippet_of: S,
) -> Vec<Finding>
where
    A: Fn(&str) -> usize,
    M: Fn(&DocTag) -> bool,
    S: Fn(&DocTag) -> String,
{
    let declared: HashSet<&str> = declared_names.iter().copied().collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut findings = Vec::new();

    let report = |smell: XmlDocSmell, position: usize, snippet: &str, name: &str| {
        finding_at(
            target.file,
            target.file_path,
            target.tag_name,
            smell,
            position,
            snippet,
            vec![name.to_string()],
        )
    };

    for tag in tags {
        let smell = if !declared.contains(tag.name) {
            Some(target.smells.unknown)
        } else if !seen.insert(tag.name) {
            Some(target.smells.duplicate)
        } else if !is_meaningful(tag.tag) {
            Some(target.smells.empty)
        } else {
            None
        };

        if let Some(smell) = smell {
            findings.push(report(smell, tag.tag.position, &snippet_of(tag.tag), tag.name));
        }
    }

    for &name in declared_names {
        if !seen.contains(name) {
            findings.push(report(target.smells.missing, anchor_for(name), name, name));
        }
    }

    findings
}

/// Unique declared names in declaration order, each with its first position
pub fn unique_declared_names(names: &[DeclaredName]) -> Vec<&DeclaredName> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|declared| seen.insert(declared.name.as_str()))
        .collect()
}

#[cfg(test)]
#[path = "named_tags_tests.rs"]
mod tests;
