use crate::iterator::{DocIterator, DocIteratorPtr};
use crate::types::DocId;

/// Decorator attaching a single tag label to any iterator.
///
/// All iteration operations delegate to the wrapped iterator; only the tag
/// surface changes. The parser applies this to a compound iterator when its
/// operator carries a `tag:` token.
#[derive(Debug)]
pub struct TaggedIterator {
    inner: DocIteratorPtr,
    tag: String,
}

impl TaggedIterator {
    pub fn new(tag: impl Into<String>, inner: DocIteratorPtr) -> Self {
        Self {
            inner,
            tag: tag.into(),
        }
    }

    /// Wrap `inner` when a tag is present, otherwise return it unchanged.
    pub fn wrap(tag: Option<String>, inner: DocIteratorPtr) -> DocIteratorPtr {
        match tag {
            Some(tag) => Box::new(Self::new(tag, inner)),
            None => inner,
        }
    }
}

impl DocIterator for TaggedIterator {
    fn next(&mut self) -> bool {
        self.inner.next()
    }

    fn skip_to(&mut self, target: DocId) -> bool {
        self.inner.skip_to(target)
    }

    fn valid(&self) -> bool {
        self.inner.valid()
    }

    fn value(&self) -> DocId {
        self.inner.value()
    }

    fn remaining_docs(&self) -> usize {
        self.inner.remaining_docs()
    }

    fn tags(&self) -> Vec<String> {
        if self.inner.has_tag() {
            let mut tags = self.inner.tags();
            tags.push(self.tag.clone());
            tags
        } else {
            vec![self.tag.clone()]
        }
    }

    fn has_tag(&self) -> bool {
        true
    }
}
