//! C# parser using tree-sitter-c-sharp
//!
//! The parser wrapper mirrors the other tree-sitter wrappers in this code
//! base: it owns a configured `Parser` and hands out trees. [`CsSourceFile`]
//! bundles a tree with its text so detectors get everything from one value.

use std::path::Path;
use tree_sitter::{Language, Node, Parser, Tree};
use crate::error::{DocResult, DocSmellError};
use super::declarations::{collect_declarations, Declaration};
use super::doc_comment::{collect_doc_comments, DocComment};
use super::line_index::{LineColumn, LineIndex};

/// C# parser wrapper around tree-sitter-c-sharp
pub struct CsParser {
    parser: Parser,
}

impl std::fmt::Debug for CsParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsParser")
            .field("parser", &"<Parser>")
            .finish()
    }
}

impl CsParser {
    /// Create a new C# parser
    pub fn new() -> DocResult<Self> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_c_sharp::LANGUAGE.into();
        parser
            .set_language(&language)
            .map_err(|e| DocSmellError::TreeSitterLanguage {
                message: e.to_string(),
            })?;

        Ok(Self { parser })
    }

    /// Parse C# content and return the syntax tree
    pub fn parse(&mut self, content: &str, old_tree: Option<&Tree>) -> Option<Tree> {
        self.parser.parse(content, old_tree)
    }

    /// Parse a whole file into a [`CsSourceFile`]
    ///
    /// `path` is only used for the error message.
    pub fn parse_source(&mut self, path: &Path, content: String) -> DocResult<CsSourceFile> {
        let tree = self.parse(&content, None).ok_or_else(|| DocSmellError::Parse {
            file: path.to_path_buf(),
            message: "tree-sitter returned no tree".to_string(),
        })?;

        Ok(CsSourceFile::from_parts(content, tree))
    }
}

/// A parsed C# file: text, syntax tree and line index
///
/// Read-only once built; every detector takes it by shared reference.
#[derive(Debug, Clone)]
pub struct CsSourceFile {
    content: String,
    tree: Tree,
    line_index: LineIndex,
}

impl CsSourceFile {
    /// Parse source text with a fresh parser
    pub fn parse(content: impl Into<String>) -> DocResult<Self> {
        let mut parser = CsParser::new()?;
        parser.parse_source(Path::new("<memory>"), content.into())
    }

    fn from_parts(content: String, tree: Tree) -> Self {
        let line_index = LineIndex::new(&content);
        Self {
            content,
            tree,
            line_index,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// 1-based line and column for a byte offset
    pub fn line_column(&self, byte_offset: usize) -> LineColumn {
        self.line_index.line_column(byte_offset, &self.content)
    }

    /// Documentable declarations in document order
    pub fn declarations(&self) -> Vec<Declaration<'_>> {
        collect_declarations(self.tree.root_node(), &self.content)
    }

    /// Every doc comment in the file, attached to a declaration or not
    pub fn doc_comments(&self) -> Vec<DocComment> {
        collect_doc_comments(self.tree.root_node(), &self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_creation() {
        let parser = CsParser::new();
        assert!(parser.is_ok());
    }

    #[test]
    fn test_basic_parsing() {
        let mut parser = CsParser::new().unwrap();
        let content = "namespace Test { public class Foo { } }";
        let tree = parser.parse(content, None).unwrap();
        let root = tree.root_node();
        assert!(!root.has_error());
        assert_eq!(root.kind(), "compilation_unit");
    }

    #[test]
    fn test_source_file_line_column() {
        let file = CsSourceFile::parse("class A\n{\n    int x;\n}\n").unwrap();
        let offset = file.content().find("int").unwrap();
        let position = file.line_column(offset);
        assert_eq!(position.line, 3);
        assert_eq!(position.column, 5);
    }

    #[test]
    fn test_doc_comments_include_orphans() {
        let content = r#"
/// <summary>Attached.</summary>
public class A
{
    void M()
    {
        /// <summary>Orphan.</summary>
        int x = 0;
    }
}
"#;
        let file = CsSourceFile::parse(content).unwrap();
        let comments = file.doc_comments();
        assert_eq!(comments.len(), 2);
        assert!(comments[0].xml().contains("Attached."));
        assert!(comments[1].xml().contains("Orphan."));
    }
}
