use decanter_liquid::Rgba;

use super::CatalogError;

/// One `<name> #rrggbb[aa]` entry.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry {
    pub name: String,
    pub color: Rgba,
    pub line: usize,
    pub col: usize,
}

/// Cursor over a single catalog line.
struct LineCursor<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
}

impl<'s> LineCursor<'s> {
    fn new(src: &'s str, line: usize) -> Self {
        Self { src, pos: 0, line }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn col(&self) -> usize {
        self.src[..self.pos].chars().count() + 1
    }

    fn error(&self, msg: impl Into<String>) -> CatalogError {
        CatalogError::new(msg, self.line, self.col())
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len() || self.src[self.pos..].starts_with("//")
    }

    fn lex_name(&mut self) -> Result<String, CatalogError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_' || c == '-') {
            self.advance();
        }
        if self.pos == start {
            return Err(self.error("expected liquid name"));
        }
        Ok(self.src[start..self.pos].to_owned())
    }

    fn lex_color(&mut self) -> Result<Rgba, CatalogError> {
        if self.peek() != Some('#') {
            return Err(self.error("expected color literal `#rrggbb` or `#rrggbbaa`"));
        }
        let hash_col = self.col();
        self.advance(); // consume `#`

        let mut digits = Vec::with_capacity(8);
        while let Some(d) = self.peek().and_then(|c| c.to_digit(16)) {
            digits.push(d as u8);
            self.advance();
        }
        if digits.len() != 6 && digits.len() != 8 {
            return Err(CatalogError::new(
                format!("color literal must be #rrggbb or #rrggbbaa, got {} digits", digits.len()),
                self.line,
                hash_col,
            ));
        }

        let bytes: Vec<u8> = digits.chunks_exact(2).map(|p| p[0] << 4 | p[1]).collect();
        let a = bytes.get(3).copied().unwrap_or(255);
        Ok(Rgba::from_u8(bytes[0], bytes[1], bytes[2], a))
    }
}

/// Parses catalog source into entries, in declaration order.
///
/// Grammar, one entry per line:
///
/// ```text
/// // comment
/// water  #3366ffaa
/// coffee #4b2e1e      // trailing comments are fine
/// ```
pub(crate) fn parse_entries(src: &str) -> Result<Vec<Entry>, CatalogError> {
    let mut entries = Vec::new();

    for (idx, text) in src.lines().enumerate() {
        let mut cur = LineCursor::new(text, idx + 1);
        cur.skip_whitespace();
        if cur.at_end() {
            continue;
        }

        let col = cur.col();
        let name = cur.lex_name()?;

        cur.skip_whitespace();
        let color = cur.lex_color()?;

        cur.skip_whitespace();
        if !cur.at_end() {
            return Err(cur.error("unexpected input after color"));
        }

        entries.push(Entry { name, color, line: idx + 1, col });
    }

    Ok(entries)
}
