//! Tokenizer for the s-expression query language.
//!
//! A token is a single `(`, a single `)`, or a maximal run of characters
//! that are neither whitespace nor parentheses. Each token records its byte
//! offset in the source query so parse errors can carry positions.

/// A slice of the query together with its byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'q> {
    pub text: &'q str,
    pub pos: usize,
}

fn is_parenthesis(byte: u8) -> bool {
    byte == b'(' || byte == b')'
}

/// Split `query` into tokens. Whitespace separates tokens but is otherwise
/// insignificant.
///
/// The scan works on bytes: multi-byte UTF-8 sequences never match the
/// ASCII separators, so token boundaries always fall on character
/// boundaries.
pub fn tokenize(query: &str) -> Vec<Token<'_>> {
    let bytes = query.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos].is_ascii_whitespace() {
            pos += 1;
            continue;
        }
        let start = pos;
        if is_parenthesis(bytes[pos]) {
            pos += 1;
        } else {
            while pos < bytes.len()
                && !bytes[pos].is_ascii_whitespace()
                && !is_parenthesis(bytes[pos])
            {
                pos += 1;
            }
        }
        tokens.push(Token {
            text: &query[start..pos],
            pos: start,
        });
    }
    tokens
}
