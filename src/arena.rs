use crate::{handle::NodeId, node::Node};
use core::ops::{Index, IndexMut};

/// Slot storage for the physical chain.
///
/// Freed slots are recycled by later allocations, so a `NodeId` stays valid
/// for exactly as long as the node it names is part of the chain.
#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Option<Node<T>>>,
    vacant: Vec<usize>,
}

impl<T> NodeArena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
        }
    }

    /// Number of occupied slots.
    #[cfg(test)]
    pub(crate) fn occupied(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.vacant.pop() {
            Some(i) => {
                debug_assert!(self.slots[i].is_none(), "vacant slot {i} is occupied");
                self.slots[i] = Some(node);
                NodeId(i)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Vacates the slot and returns the node that lived there.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<T> {
        let node = self.slots[id.index()]
            .take()
            .unwrap_or_else(|| panic!("double free of node slot {}", id.index()));
        self.vacant.push(id.index());
        node
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        match self.slots.get(id.index()) {
            Some(Some(node)) => node,
            _ => panic!("stale node id {}", id.index()),
        }
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.slots.get_mut(id.index()) {
            Some(Some(node)) => node,
            _ => panic!("stale node id {}", id.index()),
        }
    }
}
