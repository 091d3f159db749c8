//! Tree printer utility for C# syntax tree debugging
//!
//! Prints tree-sitter syntax trees in a readable format. Used by the
//! `--dump-tree` flag of the binary when checking how the grammar shapes a
//! declaration.

use std::collections::BTreeMap;
use std::fmt::Write;
use tree_sitter::Node;

/// Render a complete syntax tree followed by node statistics
pub fn render_tree(node: Node, content: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== C# Syntax Tree ===");
    let _ = writeln!(out, "Content size: {} bytes", content.len());
    let _ = writeln!(out, "Tree has errors: {}", node.has_error());
    let _ = writeln!(out);

    render_node(node, content, 0, None, &mut out);

    let _ = writeln!(out);
    let _ = writeln!(out, "=== Tree Statistics ===");
    for (node_type, count) in collect_node_stats(node) {
        let _ = writeln!(out, "{}: {}", node_type, count);
    }
    out
}

fn render_node(node: Node, content: &str, depth: usize, field: Option<&str>, out: &mut String) {
    let indent = "  ".repeat(depth);
    let text = node.utf8_text(content.as_bytes()).unwrap_or("<invalid>");

    // Truncate very long text for readability
    let display_text: String = if text.chars().count() > 50 {
        format!("{}...", text.chars().take(47).collect::<String>())
    } else {
        text.to_string()
    };

    let display_text = display_text
        .replace('\n', "\\n")
        .replace('\t', "\\t")
        .replace('\r', "\\r");

    let field_prefix = field.map(|f| format!("{}: ", f)).unwrap_or_default();
    let _ = writeln!(
        out,
        "{}{}{}[{}:{}] '{}'",
        indent,
        field_prefix,
        node.kind(),
        node.start_position().row + 1,
        node.start_position().column + 1,
        display_text
    );

    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            let field_name = node.field_name_for_child(i as u32);
            render_node(child, content, depth + 1, field_name, out);
        }
    }
}

/// Collect statistics about node types in the tree
pub fn collect_node_stats(node: Node) -> BTreeMap<String, usize> {
    let mut stats = BTreeMap::new();
    collect_node_stats_recursive(node, &mut stats);
    stats
}

fn collect_node_stats_recursive(node: Node, stats: &mut BTreeMap<String, usize>) {
    *stats.entry(node.kind().to_string()).or_insert(0) += 1;

    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            collect_node_stats_recursive(child, stats);
        }
    }
}
