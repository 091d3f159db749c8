//! Byte offset to line/column mapping

/// 1-based line and column of a source offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineColumn {
    pub line: usize,
    /// Counted in characters, not bytes
    pub column: usize,
}

/// Precomputed line starts for one source text
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(content: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in content.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset into a 1-based line and column
    ///
    /// Offsets past the end clamp to the end of the text.
    pub fn line_column(&self, byte_offset: usize, content: &str) -> LineColumn {
        let byte_offset = byte_offset.min(content.len());
        let line = match self.line_starts.binary_search(&byte_offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };

        let line_start = self.line_starts[line];
        let mut end = byte_offset;
        while !content.is_char_boundary(end) {
            end -= 1;
        }
        let column = content[line_start..end].chars().count();

        LineColumn {
            line: line + 1,
            column: column + 1,
        }
    }
}
