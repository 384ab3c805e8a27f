use std::fmt;

/// A parse error in a liquid catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogError {
    pub message: String,
    /// 1-based source line number where the error occurred.
    pub line: usize,
    /// 1-based source column number where the error occurred.
    pub col: usize,
}

impl CatalogError {
    pub(crate) fn new(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self { message: msg.into(), line, col }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "liquid catalog error at {}:{}: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for CatalogError {}
