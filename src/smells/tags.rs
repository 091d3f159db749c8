//! Tag extraction and content predicates shared by the detectors

use crate::cs::{Declaration, DocComment, DocNode, DocTag};
use super::allowed_tags::{is_inline_reference_tag, REFERENCE_ATTRIBUTES};

/// A doc tag with a resolved `name` attribute (`<param>`, `<typeparam>`)
#[derive(Debug, Clone, Copy)]
pub struct NamedDocTag<'d> {
    pub name: &'d str,
    pub tag: &'d DocTag,
}

/// A doc tag with a resolved raw attribute value, e.g. the cref of `<exception>`
#[derive(Debug, Clone, Copy)]
pub struct ExtractedXmlDocTag<'d> {
    pub value: &'d str,
    pub tag: &'d DocTag,
}

pub fn try_get_doc_comment<'d>(declaration: &'d Declaration) -> Option<&'d DocComment> {
    declaration.doc.as_ref()
}

/// Elements with the given local name at any depth, in document order
pub fn elements_by_name<'d>(doc: &'d DocComment, name: &str) -> Vec<&'d DocTag> {
    doc.elements()
        .into_iter()
        .filter(|tag| tag.local_name == name)
        .collect()
}

/// Trimmed `name` attribute, `None` when absent or blank
pub fn try_get_name_attribute_value(tag: &DocTag) -> Option<&str> {
    tag.attribute("name")
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Raw `cref` attribute value when the attribute is present (it may be empty)
pub fn try_get_cref_attribute_value(tag: &DocTag) -> Option<&str> {
    tag.attribute("cref")
}

/// Named tags of one kind, skipping tags without a usable name
pub fn named_tags<'d>(doc: &'d DocComment, tag_name: &str) -> Vec<NamedDocTag<'d>> {
    elements_by_name(doc, tag_name)
        .into_iter()
        .filter_map(|tag| try_get_name_attribute_value(tag).map(|name| NamedDocTag { name, tag }))
        .collect()
}

/// `<exception>`-style tags with a non-blank cref, raw value kept verbatim
pub fn cref_tags<'d>(doc: &'d DocComment, tag_name: &str) -> Vec<ExtractedXmlDocTag<'d>> {
    elements_by_name(doc, tag_name)
        .into_iter()
        .filter_map(|tag| {
            try_get_cref_attribute_value(tag)
                .filter(|cref| !cref.trim().is_empty())
                .map(|value| ExtractedXmlDocTag { value, tag })
        })
        .collect()
}

/// Whether an element holds anything besides whitespace
///
/// Text counts when it is not blank. A nested element counts when it has
/// meaningful content itself, or when it is an inline reference (`see`,
/// `paramref`, ...) that names its target through an attribute, since that
/// renders as text. `<inheritdoc/>` always counts. An empty `<see/>` or an
/// empty `<para></para>` does not.
pub fn has_meaningful_content(tag: &DocTag) -> bool {
    tag.children.iter().any(|child| match child {
        DocNode::Text(text) => !text.is_whitespace(),
        DocNode::Element(nested) => is_meaningful_element(nested),
    })
}

fn is_meaningful_element(tag: &DocTag) -> bool {
    if tag.local_name == "inheritdoc" {
        return true;
    }

    if is_inline_reference_tag(&tag.local_name) {
        let names_target = REFERENCE_ATTRIBUTES.iter().any(|attr| {
            tag.attribute(attr)
                .map(|value| !value.trim().is_empty())
                .unwrap_or(false)
        });
        if names_target {
            return true;
        }
    }

    has_meaningful_content(tag)
}

/// Markup of an element for snippets
pub fn snippet_of<'d>(doc: &'d DocComment, tag: &DocTag) -> &'d str {
    doc.element_text(tag)
}

/// First source line of a declaration, used as snippet when no tag exists
pub fn declaration_snippet<'s>(declaration: &Declaration, source: &'s str) -> &'s str {
    let text = declaration
        .node
        .utf8_text(source.as_bytes())
        .unwrap_or_default();
    text.lines().next().unwrap_or_default()
}
