//! Documentable declarations of a C# file
//!
//! Every declaration the detectors look at is described by a closed
//! [`DeclarationKind`] carrying only what the checks need: parameters, type
//! parameters, return shape and body. Detectors branch on those capabilities
//! instead of on tree-sitter node kinds.

use tree_sitter::Node;
use super::constants::*;
use super::doc_comment::{doc_comment_before, DocComment};

/// Kind of a documentable declaration, without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Namespace,
    Type,
    Method,
    Constructor,
    Property,
    Field,
    Event,
    EventField,
    EnumMember,
    Delegate,
    Operator,
    ConversionOperator,
    Indexer,
}

impl MemberKind {
    /// Human readable name used in messages
    pub fn display_name(self) -> &'static str {
        match self {
            MemberKind::Namespace => "namespace",
            MemberKind::Type => "type",
            MemberKind::Method => "method",
            MemberKind::Constructor => "constructor",
            MemberKind::Property => "property",
            MemberKind::Field => "field",
            MemberKind::Event => "event",
            MemberKind::EventField => "event field",
            MemberKind::EnumMember => "enum member",
            MemberKind::Delegate => "delegate",
            MemberKind::Operator => "operator",
            MemberKind::ConversionOperator => "conversion operator",
            MemberKind::Indexer => "indexer",
        }
    }
}

/// A declared parameter or type parameter name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredName {
    pub name: String,
    /// Source byte offset of the identifier
    pub position: usize,
}

/// Whether a member with a return concept returns a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnShape {
    Void,
    Value,
}

/// Declaration kind with its capabilities
#[derive(Debug, Clone)]
pub enum DeclarationKind<'t> {
    Namespace,
    /// Class, struct, interface, record or enum
    Type {
        type_parameters: Vec<DeclaredName>,
    },
    Method {
        parameters: Vec<DeclaredName>,
        type_parameters: Vec<DeclaredName>,
        returns: ReturnShape,
        body: Option<Node<'t>>,
    },
    Constructor {
        parameters: Vec<DeclaredName>,
        body: Option<Node<'t>>,
    },
    Property {
        body: Option<Node<'t>>,
    },
    Field,
    Event {
        body: Option<Node<'t>>,
    },
    EventField,
    EnumMember,
    Delegate {
        parameters: Vec<DeclaredName>,
        type_parameters: Vec<DeclaredName>,
        returns: ReturnShape,
    },
    Operator {
        parameters: Vec<DeclaredName>,
        returns: ReturnShape,
        body: Option<Node<'t>>,
    },
    ConversionOperator {
        parameters: Vec<DeclaredName>,
        body: Option<Node<'t>>,
    },
    Indexer {
        parameters: Vec<DeclaredName>,
        body: Option<Node<'t>>,
    },
}

impl<'t> DeclarationKind<'t> {
    pub fn member_kind(&self) -> MemberKind {
        match self {
            DeclarationKind::Namespace => MemberKind::Namespace,
            DeclarationKind::Type { .. } => MemberKind::Type,
            DeclarationKind::Method { .. } => MemberKind::Method,
            DeclarationKind::Constructor { .. } => MemberKind::Constructor,
            DeclarationKind::Property { .. } => MemberKind::Property,
            DeclarationKind::Field => MemberKind::Field,
            DeclarationKind::Event { .. } => MemberKind::Event,
            DeclarationKind::EventField => MemberKind::EventField,
            DeclarationKind::EnumMember => MemberKind::EnumMember,
            DeclarationKind::Delegate { .. } => MemberKind::Delegate,
            DeclarationKind::Operator { .. } => MemberKind::Operator,
            DeclarationKind::ConversionOperator { .. } => MemberKind::ConversionOperator,
            DeclarationKind::Indexer { .. } => MemberKind::Indexer,
        }
    }

    /// Declared parameters, `None` for kinds without a parameter list
    pub fn parameters(&self) -> Option<&[DeclaredName]> {
        match self {
            DeclarationKind::Method { parameters, .. }
            | DeclarationKind::Constructor { parameters, .. }
            | DeclarationKind::Delegate { parameters, .. }
            | DeclarationKind::Operator { parameters, .. }
            | DeclarationKind::ConversionOperator { parameters, .. }
            | DeclarationKind::Indexer { parameters, .. } => Some(parameters),
            _ => None,
        }
    }

    /// Declared type parameters, `None` for kinds that cannot be generic
    pub fn type_parameters(&self) -> Option<&[DeclaredName]> {
        match self {
            DeclarationKind::Type { type_parameters }
            | DeclarationKind::Method { type_parameters, .. }
            | DeclarationKind::Delegate { type_parameters, .. } => Some(type_parameters),
            _ => None,
        }
    }

    /// Return shape, `None` for kinds without a return concept
    ///
    /// Conversion operators always produce a value.
    pub fn returns(&self) -> Option<ReturnShape> {
        match self {
            DeclarationKind::Method { returns, .. }
            | DeclarationKind::Delegate { returns, .. }
            | DeclarationKind::Operator { returns, .. } => Some(*returns),
            DeclarationKind::ConversionOperator { .. } => Some(ReturnShape::Value),
            _ => None,
        }
    }

    /// Executable body (block, arrow body or accessor list)
    pub fn body(&self) -> Option<Node<'t>> {
        match self {
            DeclarationKind::Method { body, .. }
            | DeclarationKind::Constructor { body, .. }
            | DeclarationKind::Property { body }
            | DeclarationKind::Event { body }
            | DeclarationKind::Operator { body, .. }
            | DeclarationKind::ConversionOperator { body, .. }
            | DeclarationKind::Indexer { body, .. } => *body,
            _ => None,
        }
    }
}

/// A documentable declaration with its optional doc comment
#[derive(Debug, Clone)]
pub struct Declaration<'t> {
    pub kind: DeclarationKind<'t>,
    pub name: String,
    /// Source byte offset used when no finer position exists
    pub anchor: usize,
    pub node: Node<'t>,
    pub doc: Option<DocComment>,
}

impl<'t> Declaration<'t> {
    pub fn member_kind(&self) -> MemberKind {
        self.kind.member_kind()
    }
}

/// Collect all documentable declarations below `root` in document order
pub fn collect_declarations<'t>(root: Node<'t>, source: &str) -> Vec<Declaration<'t>> {
    let mut declarations = Vec::new();
    collect_recursive(root, source, &mut declarations);
    declarations
}

fn collect_recursive<'t>(node: Node<'t>, source: &str, out: &mut Vec<Declaration<'t>>) {
    let descend = match declaration_from_node(node, source) {
        Some(declaration) => {
            let container = matches!(
                declaration.kind,
                DeclarationKind::Namespace | DeclarationKind::Type { .. }
            );
            out.push(declaration);
            container
        }
        None => true,
    };

    // Member bodies hold statements, not declarations
    if !descend {
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_recursive(child, source, out);
    }
}

fn declaration_from_node<'t>(node: Node<'t>, source: &str) -> Option<Declaration<'t>> {
    let kind = match node.kind() {
        NAMESPACE_DECLARATION | FILE_SCOPED_NAMESPACE_DECLARATION => DeclarationKind::Namespace,
        CLASS_DECLARATION | STRUCT_DECLARATION | INTERFACE_DECLARATION | RECORD_DECLARATION
        | RECORD_STRUCT_DECLARATION | ENUM_DECLARATION => DeclarationKind::Type {
            type_parameters: type_parameter_names(node, source),
        },
        METHOD_DECLARATION => DeclarationKind::Method {
            parameters: parameter_names(node, source),
            type_parameters: type_parameter_names(node, source),
            returns: return_shape(node, source),
            body: node.child_by_field_name(BODY_FIELD),
        },
        CONSTRUCTOR_DECLARATION => DeclarationKind::Constructor {
            parameters: parameter_names(node, source),
            body: node.child_by_field_name(BODY_FIELD),
        },
        PROPERTY_DECLARATION => DeclarationKind::Property {
            body: accessor_body(node),
        },
        FIELD_DECLARATION => DeclarationKind::Field,
        EVENT_DECLARATION => DeclarationKind::Event {
            body: accessor_body(node),
        },
        EVENT_FIELD_DECLARATION => DeclarationKind::EventField,
        ENUM_MEMBER_DECLARATION => DeclarationKind::EnumMember,
        DELEGATE_DECLARATION => DeclarationKind::Delegate {
            parameters: parameter_names(node, source),
            type_parameters: type_parameter_names(node, source),
            returns: return_shape(node, source),
        },
        OPERATOR_DECLARATION => DeclarationKind::Operator {
            parameters: parameter_names(node, source),
            returns: return_shape(node, source),
            body: node.child_by_field_name(BODY_FIELD),
        },
        CONVERSION_OPERATOR_DECLARATION => DeclarationKind::ConversionOperator {
            parameters: parameter_names(node, source),
            body: node.child_by_field_name(BODY_FIELD),
        },
        INDEXER_DECLARATION => DeclarationKind::Indexer {
            parameters: parameter_names(node, source),
            body: accessor_body(node),
        },
        _ => return None,
    };

    let (name, anchor) = name_and_anchor(node, &kind, source);

    Some(Declaration {
        kind,
        name,
        anchor,
        node,
        doc: doc_comment_before(node, source),
    })
}

fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

/// First unnamed child token of the given kind, e.g. `this` or `operator`
fn find_token<'t>(node: Node<'t>, token: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|c| c.kind() == token);
    found
}

fn first_identifier<'t>(node: Node<'t>) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|c| c.kind() == IDENTIFIER);
    found
}

fn name_and_anchor(node: Node, kind: &DeclarationKind, source: &str) -> (String, usize) {
    match kind {
        DeclarationKind::Field | DeclarationKind::EventField => {
            // The first declarator names the member; `int a, b;` is one declaration
            let declarator = node
                .children(&mut node.walk())
                .find(|c| c.kind() == VARIABLE_DECLARATION)
                .and_then(|v| {
                    v.children(&mut v.walk())
                        .find(|c| c.kind() == VARIABLE_DECLARATOR)
                });
            let name_node = declarator.and_then(|d| d.child_by_field_name(NAME_FIELD).or_else(|| first_identifier(d)));
            match name_node {
                Some(n) => (node_text(n, source).to_string(), n.start_byte()),
                None => (String::new(), node.start_byte()),
            }
        }
        DeclarationKind::Indexer { .. } => {
            let anchor = find_token(node, THIS_KEYWORD)
                .map(|t| t.start_byte())
                .unwrap_or_else(|| node.start_byte());
            ("this[]".to_string(), anchor)
        }
        DeclarationKind::Operator { .. } | DeclarationKind::ConversionOperator { .. } => {
            let anchor = find_token(node, OPERATOR_KEYWORD)
                .map(|t| t.start_byte())
                .unwrap_or_else(|| node.start_byte());
            let target = node
                .child_by_field_name("operator")
                .or_else(|| node.child_by_field_name(TYPE_FIELD))
                .map(|n| node_text(n, source))
                .unwrap_or_default();
            (format!("operator {}", target), anchor)
        }
        _ => match node.child_by_field_name(NAME_FIELD).or_else(|| first_identifier(node)) {
            Some(n) => (node_text(n, source).to_string(), n.start_byte()),
            None => (String::new(), node.start_byte()),
        },
    }
}

/// Name node of a parameter or type parameter
fn declared_name(node: Node, source: &str) -> Option<DeclaredName> {
    let name_node = node.child_by_field_name(NAME_FIELD).or_else(|| {
        // Older grammar revisions: the last identifier is the name (`ref int value`)
        let mut cursor = node.walk();
        let last = node.children(&mut cursor).filter(|c| c.kind() == IDENTIFIER).last();
        last
    });

    let name_node = match name_node {
        Some(n) => n,
        // A bare type parameter may be the identifier itself
        None if node.kind() == IDENTIFIER => node,
        None => return None,
    };

    let name = node_text(name_node, source).trim();
    if name.is_empty() {
        return None;
    }

    Some(DeclaredName {
        name: name.to_string(),
        position: name_node.start_byte(),
    })
}

fn parameter_names(node: Node, source: &str) -> Vec<DeclaredName> {
    let Some(list) = node.child_by_field_name(PARAMETERS_FIELD) else {
        return Vec::new();
    };

    let mut cursor = list.walk();
    let names = list
        .children(&mut cursor)
        .filter(|c| c.kind() == PARAMETER || c.kind() == PARAMETER_ARRAY)
        .filter_map(|c| declared_name(c, source))
        .collect();
    names
}

fn type_parameter_names(node: Node, source: &str) -> Vec<DeclaredName> {
    // Type declarations carry the list as a plain child, not under the field
    let Some(list) = node
        .child_by_field_name(TYPE_PARAMETERS_FIELD)
        .or_else(|| find_token(node, TYPE_PARAMETER_LIST))
    else {
        return Vec::new();
    };

    let mut cursor = list.walk();
    let names = list
        .children(&mut cursor)
        .filter(|c| c.kind() == TYPE_PARAMETER || c.kind() == IDENTIFIER)
        .filter_map(|c| declared_name(c, source))
        .collect();
    names
}

fn return_shape(node: Node, source: &str) -> ReturnShape {
    let return_type = node
        .child_by_field_name(RETURNS_FIELD)
        .or_else(|| node.child_by_field_name(TYPE_FIELD));

    match return_type {
        Some(t) if node_text(t, source).trim() == VOID_TYPE => ReturnShape::Void,
        _ => ReturnShape::Value,
    }
}

/// Accessor list or expression body of a property, indexer or event
fn accessor_body(node: Node) -> Option<Node> {
    node.child_by_field_name(ACCESSORS_FIELD)
        .or_else(|| node.child_by_field_name("value"))
        .or_else(|| node.child_by_field_name(BODY_FIELD))
}

#[cfg(test)]
#[path = "declarations_tests.rs"]
mod tests;
