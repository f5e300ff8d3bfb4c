//! Shared work queue with deterministic identifier assignment.
//!
//! Items are stored once in an immutable arena and handed out by index. The
//! only mutable state is the count of items still pending, guarded by a
//! mutex. Items leave from the tail, and each one is tagged with the pending
//! count observed at the moment of removal. Since removal is always from the
//! tail, that count equals the item's 1-based position in the original
//! order, whatever order the workers happen to run in.

use parking_lot::Mutex;

/// An item taken from a [`WorkQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkItem<'a, T> {
    /// 1-based position of the item in the original order.
    pub id: usize,

    /// The item itself.
    pub item: &'a T,
}

/// A drain-once queue shared by a pool of workers.
#[derive(Debug)]
pub struct WorkQueue<T> {
    items: Vec<T>,
    remaining: Mutex<usize>,
}

impl<T> WorkQueue<T> {
    /// Create a queue over `items`; nothing can be added afterwards.
    pub fn new(items: Vec<T>) -> Self {
        let remaining = Mutex::new(items.len());
        Self { items, remaining }
    }

    /// Remove the item at the tail of the queue.
    ///
    /// Returns `None` once every item has been taken. Never blocks beyond the
    /// short critical section that updates the pending count.
    pub fn take(&self) -> Option<WorkItem<'_, T>> {
        let id = {
            let mut remaining = self.remaining.lock();
            if *remaining == 0 {
                return None;
            }
            let id = *remaining;
            *remaining -= 1;
            id
        };

        Some(WorkItem {
            id,
            item: &self.items[id - 1],
        })
    }

    /// Number of items not yet taken.
    pub fn pending(&self) -> usize {
        *self.remaining.lock()
    }

    /// Total number of items the queue was created with.
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Whether every item has been taken.
    pub fn is_drained(&self) -> bool {
        self.pending() == 0
    }
}
