use serde::Serialize;
use thiserror::Error;

/// Length of the query-text windows attached to parse errors.
const CONTEXT_LENGTH: usize = 23;

/// A query rejected by the parser.
///
/// Carries the byte position (0-based) where the error was detected plus two
/// windows of query text, so the message is useful without the caller
/// echoing the query back. Newlines and tabs inside the windows are replaced
/// with spaces to keep the rendered message on a single line.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Invalid query: {message} At position (0-based) {position} with query text \"{context}\" and preceding query text \"{preceding}\".")]
pub struct ParseError {
    /// What went wrong.
    pub message: String,
    /// 0-based byte offset into the query where the error was detected.
    pub position: usize,
    /// Up to 23 characters of query text at and after `position`.
    pub context: String,
    /// Up to 23 characters of query text immediately before `position`.
    pub preceding: String,
}

impl ParseError {
    /// Build an error at `position`, extracting both context windows from
    /// `query`. `position` must lie on a character boundary (token starts
    /// and the end of input always do).
    pub fn at(position: usize, message: impl Into<String>, query: &str) -> Self {
        let context = query[position..]
            .chars()
            .take(CONTEXT_LENGTH)
            .map(sanitize)
            .collect();
        let mut preceding: Vec<char> = query[..position]
            .chars()
            .rev()
            .take(CONTEXT_LENGTH)
            .collect();
        preceding.reverse();
        Self {
            message: message.into(),
            position,
            context,
            preceding: preceding.into_iter().map(sanitize).collect(),
        }
    }
}

fn sanitize(c: char) -> char {
    if c == '\n' || c == '\t' {
        ' '
    } else {
        c
    }
}

/// Main error type for squint operations
#[derive(Error, Debug)]
pub enum SquintError {
    #[error("query parse error: {0}")]
    QueryParse(#[from] ParseError),
}

/// Result type alias for squint operations
pub type Result<T> = std::result::Result<T, SquintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::at(5, "Unmatched right parenthesis ')'.", "(and )");
        assert_eq!(
            err.to_string(),
            "Invalid query: Unmatched right parenthesis ')'. At position (0-based) 5 \
             with query text \")\" and preceding query text \"(and \"."
        );
    }

    #[test]
    fn test_context_windows_truncated() {
        let query = "a".repeat(100);
        let err = ParseError::at(50, "boom", &query);
        assert_eq!(err.context.len(), 23);
        assert_eq!(err.preceding.len(), 23);
    }

    #[test]
    fn test_windows_single_line() {
        let err = ParseError::at(4, "boom", "a\nb\t(and x)");
        assert!(!err.context.contains('\n'));
        assert!(!err.preceding.contains('\t'));
    }

    #[test]
    fn test_error_at_end_of_input() {
        let err = ParseError::at(6, "Unmatched left parenthesis '('.", "(and a");
        assert_eq!(err.context, "");
        assert_eq!(err.preceding, "(and a");
    }
}
