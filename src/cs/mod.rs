//! C# front-end
//!
//! Parses C# source with tree-sitter and exposes the read-only view the
//! smell detectors work on: documentable declarations, their doc comments as
//! element trees, and byte offset to line/column mapping.

pub mod constants;
pub mod declarations;
pub mod doc_comment;
pub mod line_index;
pub mod parser;
pub mod source_finder;
pub mod tree_printer;

pub use declarations::{Declaration, DeclarationKind, DeclaredName, MemberKind, ReturnShape};
pub use doc_comment::{DocAttribute, DocComment, DocNode, DocTag, DocText, TagClosing};
pub use line_index::{LineColumn, LineIndex};
pub use parser::{CsParser, CsSourceFile};
