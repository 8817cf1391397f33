//! Line/column lookup for spans.
//!
//! Spans are byte offsets; humans want `line:column`. The table records the
//! byte offset of every line start once, so each lookup is a binary search.

/// Pre-computed line start offsets for one source text.
///
/// # Example
///
/// ```
/// use la_ir::LineOffsetTable;
///
/// let source = "var a = 10\nprintln(a)";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.line_column(source, 0), (1, 0));
/// assert_eq!(table.line_column(source, 8), (1, 8));
/// assert_eq!(table.line_column(source, 11), (2, 0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `offsets[i]` is the byte offset where line `i + 1` starts.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based line and 0-based column of `offset`.
    ///
    /// The column counts characters, not bytes, from the line start. This is
    /// the `line:column` convention of the AST dump (`File (1:0)`).
    pub fn line_column(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let end = (offset as usize).clamp(line_start, source.len());
        let column = source
            .get(line_start..end)
            .map_or(0, |prefix| prefix.chars().count());

        (line, u32::try_from(column).unwrap_or(u32::MAX))
    }

    #[cfg(test)]
    fn line_count(&self) -> usize {
        self.offsets.len()
    }
}
