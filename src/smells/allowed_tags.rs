//! Tag vocabulary and the member kind to allowed tag matrix
//!
//! All tables are fixed and shared read-only by every detector.

use crate::cs::MemberKind;

/// Tags the well-formed check accepts as known
pub const KNOWN_TAGS: &[&str] = &[
    "summary",
    "remarks",
    "returns",
    "value",
    "param",
    "paramref",
    "typeparam",
    "typeparamref",
    "exception",
    "example",
    "code",
    "c",
    "para",
    "list",
    "listheader",
    "item",
    "term",
    "description",
    "see",
    "seealso",
    "inheritdoc",
    "include",
    "permission",
    "br",
    "b",
    "i",
    "u",
    "a",
];

/// Tags that wrap content and need an end tag unless written as `<tag/>`
pub const CONTAINER_TAGS: &[&str] = &[
    "summary",
    "remarks",
    "returns",
    "value",
    "param",
    "typeparam",
    "exception",
    "example",
    "code",
    "c",
    "para",
    "list",
    "listheader",
    "item",
    "term",
    "description",
    "permission",
    "b",
    "i",
    "u",
];

/// Inline references that render text from an attribute
pub const INLINE_REFERENCE_TAGS: &[&str] = &["see", "seealso", "paramref", "typeparamref", "inheritdoc"];

/// Attributes through which an inline reference produces text
pub const REFERENCE_ATTRIBUTES: &[&str] = &["cref", "name", "langword", "href"];

/// Top level tags allowed on every kind of member
pub const UNIVERSAL_TAGS: &[&str] = &[
    "summary",
    "remarks",
    "example",
    "see",
    "seealso",
    "para",
    "list",
    "code",
    "inheritdoc",
    "include",
];

pub fn is_known_tag(name: &str) -> bool {
    KNOWN_TAGS.contains(&name)
}

pub fn is_container_tag(name: &str) -> bool {
    CONTAINER_TAGS.contains(&name)
}

pub fn is_inline_reference_tag(name: &str) -> bool {
    INLINE_REFERENCE_TAGS.contains(&name)
}

/// Kind specific top level tags, on top of [`UNIVERSAL_TAGS`]
pub fn kind_specific_tags(kind: MemberKind) -> &'static [&'static str] {
    match kind {
        MemberKind::Namespace => &[],
        // `param` covers record primary constructor parameters
        MemberKind::Type => &["typeparam", "param"],
        MemberKind::Method => &["param", "typeparam", "returns", "exception"],
        MemberKind::Constructor => &["param", "exception"],
        MemberKind::Property => &["value", "exception"],
        MemberKind::Field => &["value"],
        MemberKind::Event => &["exception"],
        MemberKind::EventField => &[],
        MemberKind::EnumMember => &[],
        MemberKind::Delegate => &["param", "typeparam", "returns"],
        MemberKind::Operator => &["param", "returns", "exception"],
        MemberKind::ConversionOperator => &["param", "returns", "exception"],
        MemberKind::Indexer => &["param", "value", "returns", "exception"],
    }
}

/// Whether a top level tag may appear on a member of the given kind
pub fn is_tag_allowed(kind: MemberKind, tag_name: &str) -> bool {
    UNIVERSAL_TAGS.contains(&tag_name) || kind_specific_tags(kind).contains(&tag_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_tags_allowed_everywhere() {
        for kind in [MemberKind::Namespace, MemberKind::Field, MemberKind::EnumMember, MemberKind::Method] {
            for tag in UNIVERSAL_TAGS {
                assert!(is_tag_allowed(kind, tag), "{} should be allowed on {:?}", tag, kind);
            }
        }
    }

    #[test]
    fn test_kind_specific_tags() {
        assert!(is_tag_allowed(MemberKind::Method, "returns"));
        assert!(!is_tag_allowed(MemberKind::Constructor, "returns"));
        assert!(is_tag_allowed(MemberKind::Property, "value"));
        assert!(!is_tag_allowed(MemberKind::Property, "param"));
        assert!(!is_tag_allowed(MemberKind::EnumMember, "param"));
        assert!(is_tag_allowed(MemberKind::Type, "typeparam"));
    }

    #[test]
    fn test_every_allowed_tag_is_known() {
        for tag in UNIVERSAL_TAGS.iter().chain(CONTAINER_TAGS).chain(INLINE_REFERENCE_TAGS) {
            assert!(is_known_tag(tag), "{} missing from KNOWN_TAGS", tag);
        }
    }
}
