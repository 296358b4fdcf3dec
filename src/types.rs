//! Core identifier types shared by the iterator algebra and the parser.

/// Document identifier within a posting list.
///
/// Posting lists are strictly ascending sequences of `DocId`s; the engine
/// never produces duplicates.
pub type DocId = u32;

/// Sentinel returned by [`value`](crate::iterator::DocIterator::value) when
/// an iterator is exhausted.
///
/// The sentinel compares greater than every real document id, which the
/// compound iterators rely on when a child runs out mid-scan.
pub const INVALID_DOC_ID: DocId = DocId::MAX;
