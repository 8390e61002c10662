use std::fmt;

use crate::node::NodeId;
use crate::node_pool::NodePool;

/// A singly-linked list of `i32` values whose nodes live in a [`NodePool`]
#[derive(Debug, Default)]
pub struct LinkedList {
    pub(crate) pool: NodePool,
    pub(crate) head: Option<NodeId>,
    pub(crate) tail: Option<NodeId>,
    len: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList {
            pool: NodePool::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LinkedList {
            pool: NodePool::with_capacity(capacity),
            ..LinkedList::new()
        }
    }

    /// Append `value` at the end of the chain
    pub fn push(&mut self, value: i32) -> NodeId {
        let id = self.pool.allocate(value);

        match self.tail {
            Some(tail) => self.pool.set_next(tail, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;

        id
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn pool(&self) -> &NodePool {
        &self.pool
    }

    /// Values in link order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            pool: &self.pool,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Release every node back to the pool and leave the list empty.
    ///
    /// Walks the chain in a loop rather than recursively, so arbitrarily
    /// long lists are released without growing the stack. Returns the
    /// number of nodes released.
    pub fn release(&mut self) -> usize {
        let mut released = 0;
        let mut cursor = self.head.take();

        while let Some(id) = cursor {
            cursor = self.pool.next(id);
            self.pool.deallocate(id);
            released += 1;
        }

        self.tail = None;
        self.len = 0;
        released
    }
}

impl FromIterator<i32> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = LinkedList::with_capacity(iter.size_hint().0);
        for value in iter {
            list.push(value);
        }
        list
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Space-separated values on one line
impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}

pub struct Iter<'a> {
    pool: &'a NodePool,
    cursor: Option<NodeId>,
    // Bounded by the list length so a broken link can never loop forever
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        self.cursor = self.pool.next(id);
        self.remaining -= 1;
        Some(self.pool.value(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
