//! Lazy boolean set algebra over sorted posting lists.
//!
//! squint evaluates `(and ...)` / `(or ...)` / `(diff ...)` s-expression
//! queries against posting lists supplied by an embedder-provided term
//! resolver, producing a strictly ascending stream of document ids. Sub-
//! expressions can carry `tag:` labels that surface on every match they
//! contribute to.
//!
//! Intersections advance in time proportional to their rarest input,
//! unions run over a k-way min-heap, and every node supports binary-search
//! style forward skipping.
//!
//! # Example
//!
//! ```
//! use squint::{DocIteratorExt, DocIteratorPtr, EmptyIterator, QueryParser, VectorIterator};
//!
//! let mut resolver = |term: &str| -> DocIteratorPtr {
//!     match term {
//!         "rust" => Box::new(VectorIterator::new(vec![1, 4, 7])),
//!         "search" => Box::new(VectorIterator::new(vec![2, 4, 7, 9])),
//!         _ => Box::new(EmptyIterator),
//!     }
//! };
//!
//! let mut iter = QueryParser::new(&mut resolver)
//!     .parse("(and rust search)")
//!     .unwrap();
//! assert_eq!(iter.collect_docs(), vec![4, 7]);
//! ```

pub mod config;
pub mod error;
pub mod iterator;
pub mod parser;
pub mod resolver;
pub mod types;

pub use config::ParserConfig;
pub use error::{ParseError, Result, SquintError};
pub use iterator::{
    AndIterator, DiffIterator, DocIterator, DocIteratorExt, DocIteratorPtr, EmptyIterator,
    OrIterator, TaggedIterator, VectorIterator,
};
pub use parser::QueryParser;
pub use resolver::TermResolver;
pub use types::{DocId, INVALID_DOC_ID};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
