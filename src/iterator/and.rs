use crate::iterator::{DocIterator, DocIteratorPtr};
use crate::types::DocId;

/// Intersection of two or more child iterators.
///
/// The children are kept in an agreement state: slot 0 holds the child with
/// the current maximum value, and at a valid position every child agrees on
/// that value. Advancing costs a `skip_to` per lagging child, so an
/// intersection runs in time proportional to its rarest input.
#[derive(Debug)]
pub struct AndIterator {
    children: Vec<DocIteratorPtr>,
    children_have_tags: bool,
}

impl AndIterator {
    /// Build an intersection over `children`.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(mut children: Vec<DocIteratorPtr>) -> Self {
        assert!(!children.is_empty(), "an AndIterator must have children");
        let children_have_tags = children.iter().any(|child| child.has_tag());
        let mut max_idx = 0;
        for idx in 1..children.len() {
            if children[idx].value() > children[max_idx].value() {
                max_idx = idx;
            }
        }
        children.swap(0, max_idx);
        let mut iter = Self {
            children,
            children_have_tags,
        };
        iter.next_agreement();
        iter
    }

    /// Drive every child to the candidate value held by slot 0.
    ///
    /// A child that overshoots the candidate becomes the new slot 0 and the
    /// scan restarts behind it. An exhausted child reports the sentinel,
    /// overshoots, and leaves slot 0 invalid, which ends the scan.
    fn next_agreement(&mut self) -> bool {
        let mut pos = 1;
        while pos < self.children.len() && self.children[0].valid() {
            let candidate = self.children[0].value();
            while pos < self.children.len() {
                if self.children[pos].value() < candidate {
                    self.children[pos].skip_to(candidate);
                    if self.children[pos].value() > candidate {
                        self.children.swap(pos, 0);
                        pos = 1;
                        break;
                    }
                }
                pos += 1;
            }
        }
        pos == self.children.len()
    }
}

impl DocIterator for AndIterator {
    fn next(&mut self) -> bool {
        if !self.valid() {
            return false;
        }
        self.children[0].next();
        self.children[0].valid() && self.next_agreement()
    }

    fn skip_to(&mut self, target: DocId) -> bool {
        if !self.valid() || !self.children[0].skip_to(target) {
            return false;
        }
        self.next_agreement()
    }

    fn valid(&self) -> bool {
        self.children[0].valid()
    }

    fn value(&self) -> DocId {
        self.children[0].value()
    }

    fn remaining_docs(&self) -> usize {
        if !self.valid() {
            return 0;
        }
        // The intersection cannot exceed its smallest input.
        self.children
            .iter()
            .map(|child| child.remaining_docs())
            .min()
            .unwrap_or(0)
    }

    fn tags(&self) -> Vec<String> {
        debug_assert!(self.valid());
        if !self.children_have_tags {
            return Vec::new();
        }
        // All children agree on the current value, so each contributes.
        let mut tags = Vec::new();
        for child in &self.children {
            tags.extend(child.tags());
        }
        tags
    }

    fn has_tag(&self) -> bool {
        self.children_have_tags
    }
}
