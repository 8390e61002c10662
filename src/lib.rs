pub mod error;
pub mod input;
pub mod linked_list;
pub mod node;
pub mod node_pool;
mod proptests;
pub mod reorder;

pub use error::{Error, Result};
pub use linked_list::LinkedList;
pub use reorder::{Group, GroupReorderer};

/// Number of elements rearranged together by the command-line tool
pub const GROUP_SIZE: usize = 4;
