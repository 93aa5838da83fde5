pub mod catalogue;
pub mod content;
pub mod tree;

pub use catalogue::{expand, Slot, SlotContent, CATALOGUE};
pub use tree::{FileTree, FileTreeEntry};
