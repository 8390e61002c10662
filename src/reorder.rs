use crate::error::{Error, Result};
use crate::linked_list::LinkedList;
use crate::node::NodeId;
use crate::node_pool::NodePool;

/// Bounds of one group after it has been rearranged.
///
/// `tail.next` points to whatever followed the group before it was
/// rearranged, so consecutive groups can be threaded together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub head: NodeId,
    pub tail: NodeId,
}

/// Splits each run of `G` nodes into its odd-position and even-position
/// strands and splices the strands back together.
///
/// If the first value of a group is non-negative the even strand comes
/// first, otherwise the odd strand does. `G` must be even and non-zero.
#[derive(Debug, Clone, Copy)]
pub struct GroupReorderer<const G: usize>;

impl<const G: usize> GroupReorderer<G> {
    const VALID_GROUP_SIZE: () = assert!(
        G > 0 && G % 2 == 0,
        "group size must be even and non-zero"
    );

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_GROUP_SIZE;
        GroupReorderer
    }

    /// Rearrange the `G` nodes of `list` starting at `head`.
    ///
    /// Only the links of the group's own nodes are rewritten, plus the link
    /// into the group from its predecessor. The chain that followed the group
    /// stays reachable from the returned tail, and the list's head and tail
    /// follow the group when it sits at either end.
    ///
    /// Finding the predecessor walks the list from its head, so rearranging a
    /// whole list this way is quadratic; use [`GroupReorderer::reorder`] for that.
    ///
    /// `head` must be a node of `list`. Handles are plain slot indices, so a
    /// handle taken from another list is only caught when it does not also
    /// name a node of this one.
    pub fn reorder_group(&self, list: &mut LinkedList, head: NodeId) -> Result<Group> {
        let predecessor = Self::predecessor(list, head)?;
        let group = Self::rearrange(&mut list.pool, head)?;

        match predecessor {
            Some(node) => list.pool.set_next(node, Some(group.head)),
            None => list.head = Some(group.head),
        }
        if list.pool.next(group.tail).is_none() {
            list.tail = Some(group.tail);
        }

        Ok(group)
    }

    /// Rearrange every group of the list, left to right.
    ///
    /// The list length is checked up front, so a list that does not divide
    /// into whole groups is rejected without any link being touched.
    pub fn reorder(&self, list: &mut LinkedList) -> Result<()> {
        if list.len() % G != 0 {
            return Err(Error::ContractViolation {
                group_size: G,
                found: list.len() % G,
            });
        }

        let Some(head) = list.head else {
            return Ok(());
        };

        let first = Self::rearrange(&mut list.pool, head)?;
        let mut current = first;
        while let Some(next_head) = list.pool.next(current.tail) {
            let next = Self::rearrange(&mut list.pool, next_head)?;
            list.pool.set_next(current.tail, Some(next.head));
            current = next;
        }

        list.head = Some(first.head);
        list.tail = Some(current.tail);
        Ok(())
    }

    // Splits and splices the chain at `head`; links into the group are the
    // caller's to repair
    fn rearrange(pool: &mut NodePool, head: NodeId) -> Result<Group> {
        // Nothing is relinked until the whole group is known to exist
        let mut cursor = head;
        for seen in 1..G {
            cursor = Self::follow(pool, cursor, seen)?;
        }

        let odd_head = head;
        let even_head = Self::follow(pool, odd_head, 1)?;
        let mut odd_tail = odd_head;
        let mut even_tail = even_head;

        // The final pair is already adjacent, so it needs no relinking here
        for step in 0..G / 2 - 1 {
            let next_odd = Self::follow(pool, even_tail, 2 + 2 * step)?;
            let next_even = Self::follow(pool, next_odd, 3 + 2 * step)?;

            pool.set_next(odd_tail, Some(next_odd));
            pool.set_next(even_tail, Some(next_even));

            odd_tail = next_odd;
            even_tail = next_even;
        }

        if pool.value(odd_head) >= 0 {
            let rest = pool.next(even_tail);
            pool.set_next(odd_tail, rest);
            pool.set_next(even_tail, Some(odd_head));
            Ok(Group {
                head: even_head,
                tail: odd_tail,
            })
        } else {
            pool.set_next(odd_tail, Some(even_head));
            Ok(Group {
                head: odd_head,
                tail: even_tail,
            })
        }
    }

    // `Ok(None)` when `target` is the list head
    fn predecessor(list: &LinkedList, target: NodeId) -> Result<Option<NodeId>> {
        let mut previous = None;
        let mut cursor = list.head;
        for _ in 0..list.len() {
            let Some(id) = cursor else { break };
            if id == target {
                return Ok(previous);
            }
            previous = Some(id);
            cursor = list.pool.next(id);
        }
        Err(Error::NodeNotInList)
    }

    // `seen` counts the group nodes already visited before following the link
    #[inline]
    fn follow(pool: &NodePool, id: NodeId, seen: usize) -> Result<NodeId> {
        pool.next(id).ok_or(Error::ContractViolation {
            group_size: G,
            found: seen,
        })
    }
}

impl<const G: usize> Default for GroupReorderer<G> {
    fn default() -> Self {
        Self::new()
    }
}
