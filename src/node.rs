/// Handle to a node slot inside a [`NodePool`](crate::node_pool::NodePool)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

// Single list cell, owned by the pool and linked by handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) value: i32,
    // None marks the end of the chain
    pub(crate) next: Option<NodeId>,
}
