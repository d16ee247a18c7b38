/*!
 * Free-List
 * Lock-free storage for parked items
 */

use crossbeam_queue::{ArrayQueue, SegQueue};

/// Parked items, either growable or capped
pub(crate) enum FreeList<T> {
    Unbounded(SegQueue<T>),
    Bounded(ArrayQueue<T>),
}

impl<T> FreeList<T> {
    /// `capacity` must be non-zero when present
    pub(crate) fn new(capacity: Option<usize>) -> Self {
        match capacity {
            Some(cap) => Self::Bounded(ArrayQueue::new(cap)),
            None => Self::Unbounded(SegQueue::new()),
        }
    }

    #[inline]
    pub(crate) fn pop(&self) -> Option<T> {
        match self {
            Self::Unbounded(queue) => queue.pop(),
            Self::Bounded(queue) => queue.pop(),
        }
    }

    /// Park an item, handing it back if the list is full
    #[inline]
    pub(crate) fn push(&self, item: T) -> Result<(), T> {
        match self {
            Self::Unbounded(queue) => {
                queue.push(item);
                Ok(())
            }
            Self::Bounded(queue) => queue.push(item),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Unbounded(queue) => queue.len(),
            Self::Bounded(queue) => queue.len(),
        }
    }

    pub(crate) fn capacity(&self) -> Option<usize> {
        match self {
            Self::Unbounded(_) => None,
            Self::Bounded(queue) => Some(queue.capacity()),
        }
    }
}
