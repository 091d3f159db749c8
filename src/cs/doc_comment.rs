//! XML documentation comments
//!
//! A doc comment is a run of `///` lines (or a `/** */` block) in front of a
//! declaration. The comment prefixes are stripped and the remaining text is
//! joined into one XML fragment, which is read with quick-xml into a tolerant
//! element tree. Unclosed and mismatched tags are kept in the tree and marked
//! instead of failing the read, since they are exactly what the well-formed
//! checks want to report.

use std::ops::Range;
use quick_xml::errors::IllFormedError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tree_sitter::Node;
use super::constants::*;

/// How an element was terminated in the markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClosing {
    /// `<tag>...</tag>`
    EndTag,
    /// `<tag/>`
    SelfClosing,
    /// Start tag whose end tag never appeared
    Missing,
    /// Still open when the XML reader gave up on a syntax error
    Unknown,
}

/// Attribute of a doc tag, value kept as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocAttribute {
    pub name: String,
    pub value: String,
}

/// Text run inside a doc comment
#[derive(Debug, Clone)]
pub struct DocText {
    /// Range in the comment's XML fragment
    pub range: Range<usize>,
    pub text: String,
}

impl DocText {
    pub fn is_whitespace(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Content node of a doc comment or element
#[derive(Debug, Clone)]
pub enum DocNode {
    Text(DocText),
    Element(DocTag),
}

/// One markup element of a doc comment
#[derive(Debug, Clone)]
pub struct DocTag {
    pub local_name: String,
    pub attributes: Vec<DocAttribute>,
    /// Source byte offset of the opening `<`
    pub position: usize,
    /// Range in the comment's XML fragment, start tag through end tag
    pub range: Range<usize>,
    pub children: Vec<DocNode>,
    pub closing: TagClosing,
}

impl DocTag {
    fn open(start: &BytesStart, range: Range<usize>, closing: TagClosing) -> Self {
        let local_name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        let mut iter = start.attributes();
        iter.with_checks(false);
        for attr in iter {
            // A broken attribute is simply absent; the checks that need it report that
            if let Ok(attr) = attr {
                attributes.push(DocAttribute {
                    name: String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned(),
                    value: String::from_utf8_lossy(&attr.value).into_owned(),
                });
            }
        }

        Self {
            local_name,
            attributes,
            position: 0,
            range,
            children: Vec::new(),
            closing,
        }
    }

    /// Whether the element was terminated, either by an end tag or `/>`
    pub fn has_end_tag(&self) -> bool {
        matches!(self.closing, TagClosing::EndTag | TagClosing::SelfClosing)
    }

    pub fn is_self_closing(&self) -> bool {
        self.closing == TagClosing::SelfClosing
    }

    /// Raw value of the first attribute with the given local name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Direct child elements
    pub fn child_elements(&self) -> impl Iterator<Item = &DocTag> {
        self.children.iter().filter_map(|node| match node {
            DocNode::Element(tag) => Some(tag),
            DocNode::Text(_) => None,
        })
    }
}

/// Maps a stretch of the XML fragment back to the source text
#[derive(Debug, Clone)]
struct Segment {
    xml_start: usize,
    source_start: usize,
    len: usize,
}

/// Documentation comment attached to (or floating before) a declaration
#[derive(Debug, Clone)]
pub struct DocComment {
    start: usize,
    end: usize,
    xml: String,
    segments: Vec<Segment>,
    nodes: Vec<DocNode>,
    error_position: Option<usize>,
}

impl DocComment {
    /// Build a doc comment from consecutive comment nodes (document order)
    pub fn from_comment_nodes(comments: &[Node], source: &str) -> Option<Self> {
        let first = comments.first()?;
        let last = comments.last()?;

        let mut builder = FragmentBuilder::default();
        for comment in comments {
            let text = comment.utf8_text(source.as_bytes()).ok()?;
            builder.push_comment(text, comment.start_byte());
        }

        let mut doc = DocComment {
            start: first.start_byte(),
            end: last.end_byte(),
            xml: builder.xml,
            segments: builder.segments,
            nodes: Vec::new(),
            error_position: None,
        };
        doc.parse_markup();
        Some(doc)
    }

    /// Source byte offset where the comment starts
    pub fn start(&self) -> usize {
        self.start
    }

    /// Source byte offset just past the comment
    pub fn end(&self) -> usize {
        self.end
    }

    /// The XML fragment with comment prefixes removed
    pub fn xml(&self) -> &str {
        &self.xml
    }

    /// Top level content nodes
    pub fn nodes(&self) -> &[DocNode] {
        &self.nodes
    }

    /// Offset in the fragment where the XML reader hit a syntax error, if it did
    pub fn error_position(&self) -> Option<usize> {
        self.error_position
    }

    /// Top level elements in document order
    pub fn top_level_elements(&self) -> impl Iterator<Item = &DocTag> {
        self.nodes.iter().filter_map(|node| match node {
            DocNode::Element(tag) => Some(tag),
            DocNode::Text(_) => None,
        })
    }

    /// All elements at any depth, in document order
    pub fn elements(&self) -> Vec<&DocTag> {
        let mut out = Vec::new();
        collect_elements(&self.nodes, &mut out);
        out
    }

    /// Markup text of an element as written in the fragment
    pub fn element_text(&self, tag: &DocTag) -> &str {
        let end = tag.range.end.min(self.xml.len());
        let start = tag.range.start.min(end);
        &self.xml[start..end]
    }

    /// Translate an offset in the XML fragment to a source byte offset
    pub fn source_offset(&self, xml_offset: usize) -> usize {
        let index = match self
            .segments
            .binary_search_by(|s| s.xml_start.cmp(&xml_offset))
        {
            Ok(i) => i,
            Err(0) => return self.start,
            Err(i) => i - 1,
        };
        let segment = &self.segments[index];
        segment.source_start + (xml_offset - segment.xml_start).min(segment.len)
    }

    fn parse_markup(&mut self) {
        let (mut nodes, error_position) = parse_fragment(&self.xml);
        self.assign_positions(&mut nodes);
        self.nodes = nodes;
        self.error_position = error_position;
    }

    fn assign_positions(&self, nodes: &mut [DocNode]) {
        for node in nodes {
            if let DocNode::Element(tag) = node {
                tag.position = self.source_offset(tag.range.start);
                self.assign_positions(&mut tag.children);
            }
        }
    }
}

/// Doc comment directly in front of a declaration node
///
/// Walks back over the preceding comment siblings. Plain `//` comments in
/// between are skipped, anything that is not a comment ends the run.
pub fn doc_comment_before(node: Node, source: &str) -> Option<DocComment> {
    let mut comments = Vec::new();
    let mut current = node.prev_sibling();
    while let Some(prev) = current {
        if prev.kind() != COMMENT {
            break;
        }
        let text = prev.utf8_text(source.as_bytes()).unwrap_or_default();
        if is_doc_comment_text(text) {
            comments.push(prev);
        }
        current = prev.prev_sibling();
    }

    comments.reverse();
    DocComment::from_comment_nodes(&comments, source)
}

/// Every doc comment run in the tree, attached to a declaration or not
pub fn collect_doc_comments(root: Node, source: &str) -> Vec<DocComment> {
    let mut comments = Vec::new();
    collect_doc_comment_runs(root, source, &mut comments);
    comments
}

fn collect_doc_comment_runs<'t>(node: Node<'t>, source: &str, out: &mut Vec<DocComment>) {
    let mut run: Vec<Node<'t>> = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == COMMENT {
            let text = child.utf8_text(source.as_bytes()).unwrap_or_default();
            if is_doc_comment_text(text) {
                run.push(child);
            }
            continue;
        }

        flush_run(&mut run, source, out);
        collect_doc_comment_runs(child, source, out);
    }
    flush_run(&mut run, source, out);
}

fn flush_run(run: &mut Vec<Node>, source: &str, out: &mut Vec<DocComment>) {
    if let Some(doc) = DocComment::from_comment_nodes(run, source) {
        out.push(doc);
    }
    run.clear();
}

fn collect_elements<'a>(nodes: &'a [DocNode], out: &mut Vec<&'a DocTag>) {
    for node in nodes {
        if let DocNode::Element(tag) = node {
            out.push(tag);
            collect_elements(&tag.children, out);
        }
    }
}

/// Check whether a comment's text starts a doc comment
pub fn is_doc_comment_text(text: &str) -> bool {
    let trimmed = text.trim_start();
    (trimmed.starts_with(XML_DOC_COMMENT_PREFIX) && !trimmed.starts_with("////"))
        || (trimmed.starts_with(XML_DOC_BLOCK_START) && !trimmed.starts_with("/**/"))
}

/// Concatenates comment bodies into one fragment and remembers where each piece came from
#[derive(Default)]
struct FragmentBuilder {
    xml: String,
    segments: Vec<Segment>,
}

impl FragmentBuilder {
    fn push_comment(&mut self, text: &str, source_start: usize) {
        if let Some(body) = text.strip_prefix(XML_DOC_COMMENT_PREFIX) {
            let body = body.trim_end_matches(['\r', '\n']);
            self.push_line(body, source_start + XML_DOC_COMMENT_PREFIX.len());
        } else if let Some(body) = text.strip_prefix(XML_DOC_BLOCK_START) {
            let body = body.strip_suffix(BLOCK_COMMENT_END).unwrap_or(body);
            let mut offset = source_start + XML_DOC_BLOCK_START.len();
            for (i, line) in body.split('\n').enumerate() {
                let line_start = offset;
                offset += line.len() + 1;

                let line = line.trim_end_matches('\r');
                if i == 0 {
                    self.push_line(line, line_start);
                    continue;
                }

                // Continuation lines usually start with ` * `
                let indent = line.len() - line.trim_start().len();
                let mut content_start = indent;
                if line[indent..].starts_with('*') {
                    content_start += 1;
                }
                self.push_line(&line[content_start..], line_start + content_start);
            }
        }
    }

    fn push_line(&mut self, line: &str, source_start: usize) {
        if !self.segments.is_empty() {
            self.xml.push('\n');
        }
        self.segments.push(Segment {
            xml_start: self.xml.len(),
            source_start,
            len: line.len(),
        });
        self.xml.push_str(line);
    }
}

/// Read an XML fragment into a tolerant element tree
///
/// Returns the top level nodes and, when the reader failed, the fragment
/// offset of the failure. Everything read before the failure is kept.
fn parse_fragment(xml: &str) -> (Vec<DocNode>, Option<usize>) {
    let mut reader = Reader::from_str(xml);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut roots: Vec<DocNode> = Vec::new();
    let mut open: Vec<DocTag> = Vec::new();
    let mut error_position = None;

    loop {
        let start = (reader.buffer_position() as usize).min(xml.len());
        let event = reader.read_event();
        let end = (reader.buffer_position() as usize).min(xml.len());
        let markup = markup_start(xml, start);

        match event {
            Ok(Event::Start(e) | Event::Empty(e)) if e.local_name().as_ref().is_empty() => {
                // A bare `<` in prose, e.g. `a < b`, is not an element
                attach_text(&mut open, &mut roots, markup, xml[markup..end.max(markup)].to_string());
            }
            Ok(Event::Start(e)) => {
                open.push(DocTag::open(&e, markup..end, TagClosing::Missing));
            }
            Ok(Event::Empty(e)) => {
                let tag = DocTag::open(&e, markup..end, TagClosing::SelfClosing);
                attach(&mut open, &mut roots, DocNode::Element(tag));
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                let Some(index) = open.iter().rposition(|t| t.local_name == name) else {
                    // Stray end tag without a start, nothing to close
                    continue;
                };

                // Everything opened after the matching start tag was never closed
                while open.len() > index + 1 {
                    if let Some(mut unclosed) = open.pop() {
                        unclosed.range.end = markup;
                        attach(&mut open, &mut roots, DocNode::Element(unclosed));
                    }
                }

                if let Some(mut tag) = open.pop() {
                    tag.closing = TagClosing::EndTag;
                    tag.range.end = end;
                    attach(&mut open, &mut roots, DocNode::Element(tag));
                }
            }
            Ok(Event::Eof) => break,
            Ok(Event::Comment(_)) | Ok(Event::Decl(_)) | Ok(Event::PI(_)) | Ok(Event::DocType(_)) => {}
            Ok(Event::Text(e)) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                attach_text(&mut open, &mut roots, start, text);
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                attach_text(&mut open, &mut roots, start, text);
            }
            Ok(_) => {
                // Entity references count as text; the slice may run into the next `<`
                let raw = &xml[start..end.max(start)];
                let text = raw.split('<').next().unwrap_or_default().to_string();
                attach_text(&mut open, &mut roots, start, text);
            }
            Err(quick_xml::Error::IllFormed(IllFormedError::MissingEndTag(_))) => break,
            Err(quick_xml::Error::IllFormed(_)) if end > start => {
                // Well-formedness complaints leave the reader usable, keep going
                continue;
            }
            Err(_) => {
                error_position = Some((reader.error_position() as usize).min(xml.len()));
                break;
            }
        }
    }

    let closing = if error_position.is_some() {
        TagClosing::Unknown
    } else {
        TagClosing::Missing
    };
    let fragment_end = error_position.unwrap_or(xml.len());
    while let Some(mut tag) = open.pop() {
        tag.closing = closing;
        tag.range.end = tag.range.end.max(fragment_end);
        attach(&mut open, &mut roots, DocNode::Element(tag));
    }

    (roots, error_position)
}

fn attach_text(open: &mut [DocTag], roots: &mut Vec<DocNode>, start: usize, text: String) {
    if text.is_empty() {
        return;
    }
    let text = DocText {
        range: start..start + text.len(),
        text,
    };
    attach(open, roots, DocNode::Text(text));
}

/// Offset of the `<` opening the markup read from `position`
///
/// The reader may already have consumed the `<` while reading the text in
/// front of it.
fn markup_start(xml: &str, position: usize) -> usize {
    if xml[position..].starts_with('<') {
        return position;
    }
    match xml[..position].rfind('<') {
        Some(i) if xml[i..position].trim().len() <= 1 => i,
        _ => position,
    }
}

fn attach(open: &mut [DocTag], roots: &mut Vec<DocNode>, node: DocNode) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(nodes: &[DocNode]) -> Vec<&DocTag> {
        let mut out = Vec::new();
        collect_elements(nodes, &mut out);
        out
    }

    #[test]
    fn test_parse_well_formed_fragment() {
        let (nodes, error) = parse_fragment(" <summary>Adds.</summary>\n <param name=\"a\">First</param>");
        assert!(error.is_none());

        let all = tags(&nodes);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].local_name, "summary");
        assert_eq!(all[0].closing, TagClosing::EndTag);
        assert_eq!(all[1].local_name, "param");
        assert_eq!(all[1].attribute("name"), Some("a"));
    }

    #[test]
    fn test_self_closing_element() {
        let (nodes, _) = parse_fragment("<inheritdoc cref=\"Foo\"/>");
        let all = tags(&nodes);
        assert_eq!(all.len(), 1);
        assert!(all[0].is_self_closing());
        assert!(all[0].has_end_tag());
        assert_eq!(all[0].attribute("cref"), Some("Foo"));
    }

    #[test]
    fn test_unclosed_element_at_end() {
        let (nodes, error) = parse_fragment("<summary>Text");
        assert!(error.is_none());
        let all = tags(&nodes);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].closing, TagClosing::Missing);
        assert!(!all[0].has_end_tag());
    }

    #[test]
    fn test_unclosed_element_inside_closed_parent() {
        let (nodes, _) = parse_fragment("<summary><para>Text</summary>");
        let all = tags(&nodes);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].local_name, "summary");
        assert_eq!(all[0].closing, TagClosing::EndTag);
        assert_eq!(all[1].local_name, "para");
        assert_eq!(all[1].closing, TagClosing::Missing);
    }

    #[test]
    fn test_nested_children_kept_in_order() {
        let (nodes, _) = parse_fragment("<summary>Uses <see cref=\"A\"/> and <c>b</c>.</summary>");
        let all = tags(&nodes);
        let names: Vec<&str> = all.iter().map(|t| t.local_name.as_str()).collect();
        assert_eq!(names, vec!["summary", "see", "c"]);
        assert_eq!(all[0].child_elements().count(), 2);
    }

    #[test]
    fn test_bare_less_than_is_text() {
        let (nodes, _) = parse_fragment("<summary>a < b</summary>");
        let all = tags(&nodes);
        assert!(all.iter().all(|t| !t.local_name.is_empty()));
        assert_eq!(all[0].local_name, "summary");
    }

    #[test]
    fn test_is_doc_comment_text() {
        assert!(is_doc_comment_text("/// <summary>"));
        assert!(is_doc_comment_text("/** <summary>x</summary> */"));
        assert!(!is_doc_comment_text("// plain"));
        assert!(!is_doc_comment_text("//// commented out doc"));
        assert!(!is_doc_comment_text("/* block */"));
    }

    #[test]
    fn test_fragment_builder_maps_offsets() {
        let mut builder = FragmentBuilder::default();
        builder.push_comment("/// <summary>", 10);
        builder.push_comment("/// Text", 30);
        assert_eq!(builder.xml, " <summary>\n Text");
        assert_eq!(builder.segments[0].source_start, 13);
        assert_eq!(builder.segments[1].xml_start, 11);
        assert_eq!(builder.segments[1].source_start, 33);
    }

    #[test]
    fn test_fragment_builder_block_comment() {
        let mut builder = FragmentBuilder::default();
        builder.push_comment("/**\n * <summary>x</summary>\n */", 0);
        assert!(builder.xml.contains("<summary>x</summary>"));
        let (nodes, error) = parse_fragment(&builder.xml);
        assert!(error.is_none());
        assert_eq!(tags(&nodes).len(), 1);
    }
}
