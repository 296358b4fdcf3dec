use crate::iterator::{DocIterator, DocIteratorPtr};
use crate::types::{DocId, INVALID_DOC_ID};

/// Union of two or more child iterators.
///
/// The children form a binary min-heap keyed on their current value; the
/// heap root is the next union element. Children are removed from the heap
/// as they exhaust, so `next` costs one sift per child positioned at the
/// current value.
#[derive(Debug)]
pub struct OrIterator {
    children: Vec<DocIteratorPtr>,
    children_have_tags: bool,
}

/// Restore the min-heap property below `pos`, assuming both subtrees of
/// `pos` already satisfy it. Exhausted children report the sentinel and
/// sink to the bottom.
fn sift_down(heap: &mut [DocIteratorPtr], mut pos: usize) {
    loop {
        let mut min_child = pos * 2 + 1;
        if min_child >= heap.len() {
            return;
        }
        if min_child + 1 < heap.len() && heap[min_child + 1].value() < heap[min_child].value() {
            min_child += 1;
        }
        if heap[min_child].value() < heap[pos].value() {
            heap.swap(pos, min_child);
            pos = min_child;
        } else {
            return;
        }
    }
}

fn heapify(heap: &mut [DocIteratorPtr]) {
    for pos in (0..heap.len() / 2).rev() {
        sift_down(heap, pos);
    }
}

impl OrIterator {
    /// Build a union over `children`.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(mut children: Vec<DocIteratorPtr>) -> Self {
        assert!(!children.is_empty(), "an OrIterator must have children");
        let children_have_tags = children.iter().any(|child| child.has_tag());
        heapify(&mut children);
        Self {
            children,
            children_have_tags,
        }
    }

    /// Collect tags from every heap node positioned at `current`.
    ///
    /// The min-heap property keeps all nodes equal to the root value in a
    /// contiguous region at the top of the heap, so the walk stops at the
    /// first mismatching node on each path.
    fn collect_tags(&self, heap_pos: usize, current: DocId, tags: &mut Vec<String>) {
        if heap_pos >= self.children.len() || self.children[heap_pos].value() != current {
            return;
        }
        tags.extend(self.children[heap_pos].tags());
        self.collect_tags(heap_pos * 2 + 1, current, tags);
        self.collect_tags(heap_pos * 2 + 2, current, tags);
    }
}

impl DocIterator for OrIterator {
    fn next(&mut self) -> bool {
        if !self.valid() {
            return false;
        }
        let current = self.value();
        while !self.children.is_empty() && self.children[0].value() == current {
            self.children[0].next();
            if self.children[0].valid() {
                sift_down(&mut self.children, 0);
            } else {
                let last = self.children.len() - 1;
                self.children.swap(0, last);
                self.children.pop();
                if !self.children.is_empty() {
                    sift_down(&mut self.children, 0);
                }
            }
        }
        self.valid()
    }

    fn skip_to(&mut self, target: DocId) -> bool {
        // Every child below the target must move, so broadcast and rebuild
        // instead of sifting selectively; children already at or past the
        // target treat the call as a no-op.
        self.children.retain_mut(|child| {
            child.skip_to(target);
            child.valid()
        });
        heapify(&mut self.children);
        self.valid()
    }

    fn valid(&self) -> bool {
        self.children.first().is_some_and(|child| child.valid())
    }

    fn value(&self) -> DocId {
        self.children
            .first()
            .map(|child| child.value())
            .unwrap_or(INVALID_DOC_ID)
    }

    fn remaining_docs(&self) -> usize {
        if !self.valid() {
            return 0;
        }
        // Lower bound of the union; documented as approximate.
        self.children
            .iter()
            .map(|child| child.remaining_docs())
            .max()
            .unwrap_or(0)
    }

    fn tags(&self) -> Vec<String> {
        debug_assert!(self.valid());
        if !self.children_have_tags {
            return Vec::new();
        }
        let mut tags = Vec::new();
        self.collect_tags(0, self.value(), &mut tags);
        tags
    }

    fn has_tag(&self) -> bool {
        self.children_have_tags
    }
}
