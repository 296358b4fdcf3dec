use std::sync::Arc;

use crate::iterator::DocIterator;
use crate::types::{DocId, INVALID_DOC_ID};

/// Leaf iterator over a sorted, duplicate-free posting list.
///
/// The list is held behind an [`Arc`]: [`new`](Self::new) takes ownership of
/// a freshly built vector, [`from_shared`](Self::from_shared) shares a list
/// owned by the embedder's index without copying it. The list must not
/// change for the lifetime of the iterator.
#[derive(Clone, Debug)]
pub struct VectorIterator {
    docs: Arc<Vec<DocId>>,
    pos: usize,
}

impl VectorIterator {
    /// Create an iterator owning `sorted_docs`, which must be strictly
    /// ascending.
    pub fn new(sorted_docs: Vec<DocId>) -> Self {
        Self::from_shared(Arc::new(sorted_docs))
    }

    /// Create an iterator over a shared posting list.
    pub fn from_shared(sorted_docs: Arc<Vec<DocId>>) -> Self {
        debug_assert!(
            sorted_docs.windows(2).all(|pair| pair[0] < pair[1]),
            "posting list must be strictly ascending"
        );
        Self {
            docs: sorted_docs,
            pos: 0,
        }
    }
}

impl DocIterator for VectorIterator {
    fn next(&mut self) -> bool {
        if self.pos < self.docs.len() {
            self.pos += 1;
        }
        self.valid()
    }

    fn skip_to(&mut self, target: DocId) -> bool {
        // Lower bound over the suffix from the current position; a target
        // at or below the current value leaves the cursor in place.
        self.pos += self.docs[self.pos..].partition_point(|&doc| doc < target);
        self.valid()
    }

    fn valid(&self) -> bool {
        self.pos < self.docs.len()
    }

    fn value(&self) -> DocId {
        self.docs.get(self.pos).copied().unwrap_or(INVALID_DOC_ID)
    }

    fn remaining_docs(&self) -> usize {
        self.docs.len() - self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::DocIteratorExt;

    #[test]
    fn test_full_walk() {
        let docs = vec![1, 2, 4, 7, 8, 10, 100];
        let mut iter = VectorIterator::new(docs.clone());
        assert_eq!(iter.collect_docs(), docs);
        assert!(!iter.valid());
    }

    #[test]
    fn test_next_and_skip() {
        let mut iter = VectorIterator::new(vec![1, 2, 4, 7, 8, 10, 100]);

        assert_eq!(iter.value(), 1);
        assert!(iter.next());
        assert_eq!(iter.value(), 2);
        assert!(iter.skip_to(2));
        assert_eq!(iter.value(), 2);
        assert_eq!(iter.remaining_docs(), 6);

        assert!(iter.skip_to(11));
        assert_eq!(iter.value(), 100);
        assert_eq!(iter.remaining_docs(), 1);

        assert!(!iter.next());
        assert!(!iter.valid());
        assert_eq!(iter.value(), INVALID_DOC_ID);
    }

    #[test]
    fn test_skip_lower_bound() {
        let mut iter = VectorIterator::new(vec![1, 2, 4, 7, 8, 10, 100]);
        assert!(iter.skip_to(5));
        assert_eq!(iter.value(), 7);
        assert!(iter.skip_to(8));
        assert_eq!(iter.value(), 8);
        assert!(iter.skip_to(9));
        assert_eq!(iter.value(), 10);
        assert!(iter.skip_to(10));
        assert_eq!(iter.value(), 10);
        assert!(iter.skip_to(99));
        assert_eq!(iter.value(), 100);
        assert!(!iter.skip_to(101));
    }

    #[test]
    fn test_skip_backward_is_noop() {
        let mut iter = VectorIterator::new(vec![3, 6, 9]);
        assert!(iter.skip_to(6));
        assert_eq!(iter.value(), 6);
        assert!(iter.skip_to(1));
        assert_eq!(iter.value(), 6);
        assert!(iter.skip_to(6));
        assert_eq!(iter.value(), 6);
    }

    #[test]
    fn test_exhaustion_is_sticky() {
        let mut iter = VectorIterator::new(vec![5]);
        assert!(!iter.next());
        assert!(!iter.next());
        assert!(!iter.skip_to(0));
        assert!(!iter.valid());
        assert_eq!(iter.remaining_docs(), 0);
    }

    #[test]
    fn test_empty_list() {
        let mut iter = VectorIterator::new(Vec::new());
        assert!(!iter.valid());
        assert!(!iter.next());
        assert!(!iter.skip_to(0));
        assert_eq!(iter.remaining_docs(), 0);
    }

    #[test]
    fn test_shared_list() {
        let shared = Arc::new(vec![2, 4, 6]);
        let mut first = VectorIterator::from_shared(Arc::clone(&shared));
        let mut second = VectorIterator::from_shared(shared);
        assert_eq!(first.collect_docs(), vec![2, 4, 6]);
        assert_eq!(second.collect_docs(), vec![2, 4, 6]);
    }
}
