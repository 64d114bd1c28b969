use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No rule matched at `offset` (a byte offset into the source).
    #[error("unexpected character '{ch}' at {line}:{column} (offset {offset})")]
    UnexpectedChar {
        ch: char,
        offset: usize,
        line: usize,
        column: usize,
    },
}

impl LexError {
    pub(crate) fn unexpected_char(source: &str, offset: usize, ch: char) -> Self {
        let consumed = &source[..offset];
        let line = consumed.matches('\n').count() + 1;
        let column = match consumed.rfind('\n') {
            Some(nl) => consumed[nl + 1..].chars().count() + 1,
            None => consumed.chars().count() + 1,
        };
        LexError::UnexpectedChar { ch, offset, line, column }
    }

    #[cfg(test)]
    pub(crate) fn offset(&self) -> usize {
        match self {
            LexError::UnexpectedChar { offset, .. } => *offset,
        }
    }
}
