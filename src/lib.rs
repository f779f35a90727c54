//! A doubly linked list that keeps a pool of empty nodes around its live
//! elements, so stacks and queues built on top of it get O(1) end operations
//! without allocator traffic once they reach a steady size.

mod arena;
mod config;
mod dlinked_list;
mod errors;
mod handle;
mod iter;
mod node;

pub use config::ListConfig;
pub use dlinked_list::DLinkedList;
pub use errors::DListError;
pub use iter::Iter;
