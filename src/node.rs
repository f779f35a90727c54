use crate::handle::NodeId;

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) elem: Option<T>,
}

impl<T> Node<T> {
    /// An unlinked slot with no element.
    pub(crate) fn empty() -> Self {
        Self {
            prev: None,
            next: None,
            elem: None,
        }
    }

    /// Does this node hold a client element (inside the logical window)?
    pub(crate) fn is_live(&self) -> bool {
        self.elem.is_some()
    }
}
