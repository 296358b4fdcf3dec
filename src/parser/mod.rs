//! Stack-based parser for s-expression boolean queries
//!
//! # Grammar
//!
//! ```text
//! query    := term | sexpr
//! sexpr    := '(' operator tag? sub_expr+ ')'
//! operator := 'and' | 'or' | 'diff'
//! tag      := 'tag:' token
//! sub_expr := query
//! term     := token
//! ```
//!
//! The tag may appear anywhere among an operator's sub-expressions, at most
//! once per operator and never at the top level. Terms are resolved to
//! posting-list iterators through the embedder's [`TermResolver`] as they
//! are encountered.
//!
//! The parser keeps an explicit stack of partial states instead of
//! recursing, so nesting depth is bounded by memory rather than the call
//! stack.

mod lexer;

pub use lexer::{tokenize, Token};

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::iterator::{AndIterator, DiffIterator, DocIteratorPtr, OrIterator, TaggedIterator};
use crate::resolver::TermResolver;
use crate::Result;

const TAG_PREFIX: &str = "tag:";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OpKind {
    And,
    Or,
    Diff,
    Root,
}

/// Partial state for one currently open expression.
struct Frame {
    /// Byte offset of the opener token (0 for the implicit root).
    start_pos: usize,
    op: OpKind,
    children: Vec<DocIteratorPtr>,
    tag: Option<String>,
}

impl Frame {
    fn new(start_pos: usize, op: OpKind) -> Self {
        Self {
            start_pos,
            op,
            children: Vec::new(),
            tag: None,
        }
    }

    fn root() -> Self {
        Self::new(0, OpKind::Root)
    }

    /// Turn the accumulated children into an iterator, enforcing the
    /// per-operator arity rules. `end_pos` is where the frame was closed
    /// and positions any error.
    fn close(self, end_pos: usize, query: &str) -> std::result::Result<DocIteratorPtr, ParseError> {
        let Frame {
            op,
            mut children,
            tag,
            ..
        } = self;
        if children.is_empty() {
            return Err(fail(
                end_pos,
                "An operator doesn't have any sub-expression.",
                query,
            ));
        }
        match op {
            OpKind::Diff => {
                if children.len() != 2 {
                    return Err(fail(
                        end_pos,
                        format!(
                            "The diff operator requires exactly 2 sub-expressions. \
                             Instead, {} ones are provided.",
                            children.len()
                        ),
                        query,
                    ));
                }
                let rhs = children.pop().unwrap();
                let lhs = children.pop().unwrap();
                Ok(TaggedIterator::wrap(
                    tag,
                    Box::new(DiffIterator::new(lhs, rhs)),
                ))
            }
            OpKind::And => {
                if children.len() == 1 && tag.is_none() {
                    Ok(children.pop().unwrap())
                } else {
                    Ok(TaggedIterator::wrap(tag, Box::new(AndIterator::new(children))))
                }
            }
            OpKind::Or => {
                if children.len() == 1 && tag.is_none() {
                    Ok(children.pop().unwrap())
                } else {
                    Ok(TaggedIterator::wrap(tag, Box::new(OrIterator::new(children))))
                }
            }
            OpKind::Root => {
                if children.len() != 1 {
                    return Err(fail(end_pos, "There are multiple queries.", query));
                }
                if tag.is_some() {
                    return Err(fail(end_pos, "The top level has a tag.", query));
                }
                Ok(children.pop().unwrap())
            }
        }
    }
}

fn fail(position: usize, message: impl Into<String>, query: &str) -> ParseError {
    let err = ParseError::at(position, message, query);
    tracing::error!(error = %err, "failed to parse query");
    err
}

/// Parses query text into a [`DocIterator`](crate::iterator::DocIterator)
/// tree, resolving terms through `resolver`.
pub struct QueryParser<'r, R: TermResolver + ?Sized> {
    resolver: &'r mut R,
    config: ParserConfig,
}

impl<'r, R: TermResolver + ?Sized> QueryParser<'r, R> {
    pub fn new(resolver: &'r mut R) -> Self {
        Self::with_config(resolver, ParserConfig::default())
    }

    pub fn with_config(resolver: &'r mut R, config: ParserConfig) -> Self {
        Self { resolver, config }
    }

    /// Parse `query` and return the root iterator.
    ///
    /// Parsing stops at the first error; the returned [`ParseError`]
    /// carries the detection position and two windows of query text.
    pub fn parse(&mut self, query: &str) -> Result<DocIteratorPtr> {
        if let Some(max) = self.config.max_query_length {
            if query.len() > max {
                let mut position = max;
                while !query.is_char_boundary(position) {
                    position -= 1;
                }
                return Err(fail(
                    position,
                    format!("The query exceeds the maximum length of {max} bytes."),
                    query,
                )
                .into());
            }
        }

        let tokens = tokenize(query);
        let mut stack: Vec<Frame> = vec![Frame::root()];
        let mut idx = 0;
        while idx < tokens.len() {
            let token = tokens[idx];
            match token.text {
                "(" => {
                    if let Some(max) = self.config.max_nesting_depth {
                        if stack.len() > max {
                            return Err(fail(
                                token.pos,
                                format!("The query exceeds the maximum nesting depth of {max}."),
                                query,
                            )
                            .into());
                        }
                    }
                    stack.push(operator_frame(&tokens, idx, query)?);
                    // The operator token is consumed together with the '('.
                    idx += 1;
                }
                ")" => {
                    if stack.last().map_or(true, |frame| frame.op == OpKind::Root) {
                        return Err(fail(
                            token.pos,
                            "Unmatched right parenthesis ')'.",
                            query,
                        )
                        .into());
                    }
                    if let Some(frame) = stack.pop() {
                        let iter = frame.close(token.pos, query)?;
                        if let Some(parent) = stack.last_mut() {
                            // At least the root frame is always below.
                            parent.children.push(iter);
                        }
                    }
                }
                text if text.starts_with(TAG_PREFIX) => {
                    if let Some(top) = stack.last_mut() {
                        if top.tag.is_some() {
                            return Err(fail(
                                token.pos,
                                "Multiple tags for one operator. Can only set one tag.",
                                query,
                            )
                            .into());
                        }
                        if top.op == OpKind::Root {
                            return Err(fail(
                                token.pos,
                                "The top level can't have a tag.",
                                query,
                            )
                            .into());
                        }
                        let tag = &text[TAG_PREFIX.len()..];
                        // A bare "tag:" sets no tag.
                        if !tag.is_empty() {
                            top.tag = Some(tag.to_string());
                        }
                    }
                }
                term => {
                    let iter = self.resolver.resolve(term);
                    if let Some(top) = stack.last_mut() {
                        top.children.push(iter);
                    }
                }
            }
            idx += 1;
        }

        if stack.len() > 1 {
            if let Some(top) = stack.last() {
                return Err(fail(
                    top.start_pos,
                    "Unmatched left parenthesis '('.",
                    query,
                )
                .into());
            }
        }
        let root = stack.pop().unwrap_or_else(Frame::root);
        Ok(root.close(query.len(), query)?)
    }
}

/// Read the operator that must follow a `(` and open its frame. Errors are
/// positioned at the `(`.
fn operator_frame(
    tokens: &[Token<'_>],
    open_idx: usize,
    query: &str,
) -> std::result::Result<Frame, ParseError> {
    let open_pos = tokens[open_idx].pos;
    let op_token = match tokens.get(open_idx + 1) {
        Some(token) => token,
        None => {
            return Err(fail(
                open_pos,
                "Expecting an operator after a left parenthesis '('.",
                query,
            ));
        }
    };
    let op = match op_token.text {
        "and" => OpKind::And,
        "or" => OpKind::Or,
        "diff" => OpKind::Diff,
        other => {
            return Err(fail(
                open_pos,
                format!("Unrecognizable operator after a left parenthesis '(': {other}"),
                query,
            ));
        }
    };
    Ok(Frame::new(open_pos, op))
}
