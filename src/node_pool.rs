use crate::node::{Node, NodeId};

/// Storage for [`Node`] allocation
///
/// Nodes live in one contiguous slab and refer to each other by [`NodeId`].
/// Released slots go onto a free list and are handed out again before the
/// slab grows.
#[derive(Debug, Default)]
pub struct NodePool {
    slots: Vec<Node>,
    // Slots released by `deallocate`, reused LIFO
    free: Vec<NodeId>,
}

impl NodePool {
    pub fn new() -> Self {
        NodePool {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodePool {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Allocate an unlinked node holding `value`
    pub(crate) fn allocate(&mut self, value: i32) -> NodeId {
        let node = Node { value, next: None };

        if let Some(id) = self.free.pop() {
            self.slots[id.index()] = node;
            return id;
        }

        let id = NodeId(self.slots.len());
        self.slots.push(node);
        id
    }

    /// Return a node's slot to the free list
    pub(crate) fn deallocate(&mut self, id: NodeId) {
        debug_assert!(id.index() < self.slots.len());

        self.slots[id.index()].next = None;
        self.free.push(id);
    }

    /// Value stored at `id`
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this pool.
    #[inline]
    pub fn value(&self, id: NodeId) -> i32 {
        self.slots[id.index()].value
    }

    /// Successor of `id`, `None` at the end of a chain
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this pool.
    #[inline]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.index()].next
    }

    #[inline]
    pub(crate) fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        self.slots[id.index()].next = next;
    }

    /// Number of nodes currently handed out
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of slots ever created, live or free
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_pool_creation() {
        let pool = NodePool::new();
        assert_eq!(pool.live(), 0);
        assert_eq!(pool.capacity(), 0);
    }

    #[test]
    fn node_allocation() {
        let mut pool = NodePool::with_capacity(4);

        for value in [-7, 0, 42, i32::MAX] {
            let id = pool.allocate(value);

            assert_eq!(pool.value(id), value);
            assert_eq!(pool.next(id), None);
        }

        assert_eq!(pool.live(), 4);
    }

    #[test]
    fn forward_links() {
        let mut pool = NodePool::new();

        // Connect nodes: a -> b -> c
        let a = pool.allocate(100);
        let b = pool.allocate(101);
        let c = pool.allocate(102);
        pool.set_next(a, Some(b));
        pool.set_next(b, Some(c));

        let after_a = pool.next(a).unwrap();
        assert_eq!(after_a, b);
        assert_eq!(pool.value(after_a), 101);

        let after_b = pool.next(b).unwrap();
        assert_eq!(pool.value(after_b), 102);
        assert_eq!(pool.next(c), None);

        // Skip over b
        pool.set_next(a, Some(c));
        assert_eq!(pool.next(a), Some(c));
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut pool = NodePool::new();
        let a = pool.allocate(1);
        let b = pool.allocate(2);
        pool.set_next(a, Some(b));

        pool.deallocate(a);
        assert_eq!(pool.live(), 1);

        let c = pool.allocate(3);
        assert_eq!(c, a);
        assert_eq!(pool.value(c), 3);
        // The stale link must not survive reuse
        assert_eq!(pool.next(c), None);
        assert_eq!(pool.capacity(), 2);
        assert_eq!(pool.live(), 2);
    }
}
