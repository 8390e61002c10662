use thiserror::Error;

/// Failures surfaced by input validation and group reordering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The number of supplied elements does not fill whole groups.
    #[error("The amount of elements has to be a multiple of {group_size}! (got {count})")]
    Configuration { count: usize, group_size: usize },

    /// A group ran out of nodes before reaching its full size.
    #[error("group boundary not aligned: expected {group_size} nodes, found {found}")]
    ContractViolation { group_size: usize, found: usize },

    /// A node handle does not belong to the list it was used with.
    #[error("node is not part of this list")]
    NodeNotInList,
}

pub type Result<T> = std::result::Result<T, Error>;
