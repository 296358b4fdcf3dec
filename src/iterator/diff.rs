use crate::iterator::{DocIterator, DocIteratorPtr};
use crate::types::DocId;

/// Set difference: values of the positive side absent from the negative
/// side.
///
/// The negative side only ever skips forward to the positive side's current
/// value, so both inputs are consumed in a single pass.
#[derive(Debug)]
pub struct DiffIterator {
    lhs: DocIteratorPtr,
    rhs: DocIteratorPtr,
}

impl DiffIterator {
    pub fn new(lhs: DocIteratorPtr, rhs: DocIteratorPtr) -> Self {
        let mut iter = Self { lhs, rhs };
        iter.next_agreement();
        iter
    }

    /// Advance the positive side until it holds a value the negative side
    /// does not contain.
    fn next_agreement(&mut self) -> bool {
        while self.lhs.valid() {
            if !self.rhs.skip_to(self.lhs.value()) || self.rhs.value() > self.lhs.value() {
                return true;
            }
            self.lhs.next();
        }
        false
    }
}

impl DocIterator for DiffIterator {
    fn next(&mut self) -> bool {
        if !self.valid() || !self.lhs.next() {
            return false;
        }
        self.next_agreement()
    }

    fn skip_to(&mut self, target: DocId) -> bool {
        if !self.lhs.skip_to(target) {
            return false;
        }
        self.next_agreement()
    }

    fn valid(&self) -> bool {
        self.lhs.valid()
    }

    fn value(&self) -> DocId {
        self.lhs.value()
    }

    fn remaining_docs(&self) -> usize {
        // Loose lower bound of the worst case; documented as approximate.
        self.lhs
            .remaining_docs()
            .saturating_sub(self.rhs.remaining_docs())
    }

    fn tags(&self) -> Vec<String> {
        debug_assert!(self.valid());
        // The current value always comes from the positive side.
        self.lhs.tags()
    }

    fn has_tag(&self) -> bool {
        self.lhs.has_tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::{DocIteratorExt, EmptyIterator, VectorIterator};

    fn diff_of(lhs: Vec<DocId>, rhs: Vec<DocId>) -> DiffIterator {
        DiffIterator::new(
            Box::new(VectorIterator::new(lhs)),
            Box::new(VectorIterator::new(rhs)),
        )
    }

    #[test]
    fn test_basic_difference() {
        let mut iter = diff_of(vec![0, 3, 8, 19, 20, 21], vec![0, 4, 8, 9, 10, 21, 32]);
        assert_eq!(iter.collect_docs(), vec![3, 19, 20]);
        assert!(!iter.valid());
    }

    #[test]
    fn test_skip_to() {
        let mut iter = diff_of(vec![0, 3, 8, 19, 20, 21], vec![0, 4, 8, 9, 10, 21, 32]);
        assert_eq!(iter.value(), 3);
        assert!(iter.skip_to(19));
        assert_eq!(iter.value(), 19);
        assert!(iter.skip_to(20));
        assert_eq!(iter.value(), 20);
        assert!(!iter.next());
    }

    #[test]
    fn test_empty_negative_side_passes_through() {
        let mut iter = DiffIterator::new(
            Box::new(VectorIterator::new(vec![1, 2, 3])),
            Box::new(EmptyIterator),
        );
        assert_eq!(iter.collect_docs(), vec![1, 2, 3]);
    }

    #[test]
    fn test_full_overlap_is_empty() {
        let mut iter = diff_of(vec![1, 2, 3], vec![0, 1, 2, 3, 4]);
        assert!(!iter.valid());
        assert!(!iter.next());
        assert!(!iter.skip_to(0));
    }

    #[test]
    fn test_remaining_docs_saturates() {
        let iter = diff_of(vec![1, 2], vec![3, 4, 5]);
        assert_eq!(iter.remaining_docs(), 0);
    }
}
