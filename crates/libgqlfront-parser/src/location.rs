use std::sync::Arc;

/// Where a token or syntax node begins within a source text.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `column`: character count within the current line
/// - `column_utf16`: UTF-16 code unit count within the current line
/// - `offset`: byte offset within the whole document
///
/// The `Display` impl adds 1 to `line` and `column` so that diagnostics
/// match what text editors show.
///
/// For ASCII text both columns are equal. Characters outside the Basic
/// Multilingual Plane advance `column` by 1 and `column_utf16` by 2.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Location {
    source: Arc<str>,
    line: usize,
    column: usize,
    column_utf16: usize,
    offset: usize,
}

impl Location {
    pub fn new(
        source: Arc<str>,
        line: usize,
        column: usize,
        column_utf16: usize,
        offset: usize,
    ) -> Self {
        Self {
            source,
            line,
            column,
            column_utf16,
            offset,
        }
    }

    /// A location at the very start of `source`.
    pub fn start_of(source: impl Into<Arc<str>>) -> Self {
        Self::new(source.into(), 0, 0, 0, 0)
    }

    /// A placeholder for values that were not read from any document (for
    /// example built-in definitions or JSON-decoded literals).
    pub fn builtin() -> Self {
        Self::start_of("<builtin>")
    }

    /// The caller-supplied label of the source text (usually a file path).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the shared source label, cheaply cloneable.
    pub fn source_arc(&self) -> &Arc<str> {
        &self.source
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character column within the line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-based UTF-16 code unit column within the line.
    ///
    /// For LSP compatibility, prefer this over [`column()`](Self::column).
    pub fn column_utf16(&self) -> usize {
        self.column_utf16
    }

    /// Returns the 0-based byte offset from the start of the document.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.line + 1, self.column + 1)
    }
}
