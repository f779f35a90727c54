use crate::{
    arena::NodeArena, config::ListConfig, errors::DListError, handle::NodeId, iter::Iter,
    node::Node,
};
use tracing::{debug, trace, warn};

/// A doubly linked list tuned for end manipulation.
///
/// Every node ever allocated for the list forms the *physical chain*
/// (`front ..= tail`). The client-visible elements occupy a contiguous
/// *logical window* (`list_start ..= list_end`) inside that chain; nodes
/// outside the window are empty slack that end insertions reuse before
/// allocating.
///
/// ```text
/// front <-> [ ] <-> [a] <-> [b] <-> [c] <-> [ ] <-> tail
///                    ^               ^
///               list_start        list_end
/// ```
///
/// End removals leave their node behind as slack, so a list that grows and
/// shrinks around a stable size stops allocating altogether. When one end
/// runs out of slack while the other still has some, an empty node is moved
/// across the chain instead of allocating. Interior removals excise and free
/// the node.
pub struct DLinkedList<T> {
    arena: NodeArena<T>,
    front: Option<NodeId>,
    tail: Option<NodeId>,
    // With an empty window both rest on the node the next end insertion fills.
    list_start: Option<NodeId>,
    list_end: Option<NodeId>,
    capacity: usize,
    size: usize,
}

impl<T> Default for DLinkedList<T> {
    fn default() -> Self {
        Self {
            arena: NodeArena::with_capacity(0),
            front: None,
            tail: None,
            list_start: None,
            list_end: None,
            capacity: 0,
            size: 0,
        }
    }
}

impl<T> DLinkedList<T> {
    /// Create a list with `hint` pre-allocated empty nodes.
    ///
    /// Fails with [`DListError::InvalidArgument`] if `hint` exceeds
    /// [`ListConfig::DEFAULT_MAX_HINT`].
    pub fn new(hint: usize) -> Result<Self, DListError> {
        Self::with_config(ListConfig::new(hint))
    }

    /// Like [`new`](Self::new), for callers holding a signed hint.
    pub fn try_from_hint(hint: i64) -> Result<Self, DListError> {
        let hint = usize::try_from(hint).map_err(|_| DListError::InvalidArgument {
            reason: "capacity hint must be non-negative",
        })?;
        Self::new(hint)
    }

    pub fn with_config(config: ListConfig) -> Result<Self, DListError> {
        config.validate()?;

        let hint = config.hint();
        let mut list = Self {
            arena: NodeArena::with_capacity(hint),
            ..Self::default()
        };
        for _ in 0..hint {
            list.grow_back();
        }
        list.list_start = list.front;
        list.list_end = list.front;

        debug!(hint, "pre-allocated physical chain");
        Ok(list)
    }

    /// Release the whole physical chain.
    ///
    /// Elements still in the window are dropped along with their nodes; callers
    /// that need them back should drain the list first.
    pub fn free(self) {
        if self.size > 0 {
            warn!(live = self.size, "freeing list that still holds live elements");
        }
        debug!(capacity = self.capacity, "releasing physical chain");
        drop(self);
    }

    /// Number of live elements.
    #[inline]
    pub fn length(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of nodes in the physical chain, live or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of empty nodes available for reuse.
    #[inline]
    pub fn slack(&self) -> usize {
        self.capacity - self.size
    }

    pub fn first(&self) -> Option<&T> {
        self.boundary(self.list_start)
    }

    pub fn last(&self) -> Option<&T> {
        self.boundary(self.list_end)
    }

    /// Element at logical position `index`.
    pub fn get(&self, index: usize) -> Result<&T, DListError> {
        let id = self.locate(index)?;
        self.arena[id]
            .elem
            .as_ref()
            .ok_or(DListError::out_of_range(index, self.size))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DListError> {
        let id = self.locate(index)?;
        let len = self.size;
        self.arena[id]
            .elem
            .as_mut()
            .ok_or(DListError::out_of_range(index, len))
    }

    /// Iterate elements from first to last.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.list_start, self.list_end, self.size)
    }

    /// Overwrite the element at `index`, returning the one it replaced.
    ///
    /// `index == len()` appends instead and returns `None`.
    pub fn set(&mut self, elem: T, index: usize) -> Result<Option<T>, DListError> {
        if index == self.size {
            self.append(elem);
            return Ok(None);
        }
        let id = self.locate(index)?;
        Ok(self.arena[id].elem.replace(elem))
    }

    /// Overwrite the first element, returning the previous one.
    pub fn set_first(&mut self, elem: T) -> Result<T, DListError> {
        self.replace_boundary(self.list_start, elem)
    }

    /// Overwrite the last element, returning the previous one.
    pub fn set_last(&mut self, elem: T) -> Result<T, DListError> {
        self.replace_boundary(self.list_end, elem)
    }

    /// Push `elem` past the last element.
    pub fn append(&mut self, elem: T) {
        let slot = if self.size == 0 {
            self.list_end
        } else {
            self.list_end.and_then(|end| self.arena[end].next)
        };
        let id = match slot.or_else(|| self.rotate_front_to_back()) {
            Some(id) => id,
            None => self.grow_back(),
        };

        debug_assert!(!self.arena[id].is_live(), "append target holds an element");
        self.arena[id].elem = Some(elem);
        if self.size == 0 {
            self.list_start = Some(id);
        }
        self.list_end = Some(id);
        self.size += 1;
    }

    /// Push `elem` before the first element.
    pub fn prepend(&mut self, elem: T) {
        let slot = if self.size == 0 {
            self.list_start
        } else {
            self.list_start.and_then(|start| self.arena[start].prev)
        };
        let id = match slot.or_else(|| self.rotate_back_to_front()) {
            Some(id) => id,
            None => self.grow_front(),
        };

        debug_assert!(!self.arena[id].is_live(), "prepend target holds an element");
        self.arena[id].elem = Some(elem);
        if self.size == 0 {
            self.list_end = Some(id);
        }
        self.list_start = Some(id);
        self.size += 1;
    }

    /// Remove the element at `index`.
    ///
    /// The two ends retract the window and keep the node as slack; any other
    /// position frees its node and shrinks the physical chain by one.
    pub fn remove(&mut self, index: usize) -> Result<T, DListError> {
        let len = self.size;
        if index >= len {
            return Err(DListError::out_of_range(index, len));
        }
        if index == 0 {
            return self.removelo().ok_or(DListError::out_of_range(index, len));
        }
        if index == len - 1 {
            return self.removehi().ok_or(DListError::out_of_range(index, len));
        }

        let id = self.locate(index)?;
        self.excise(id).ok_or(DListError::out_of_range(index, len))
    }

    /// Remove and return the last element, keeping its node as slack.
    pub fn removehi(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        let end = self.list_end?;
        let elem = self.arena[end].elem.take();
        self.size -= 1;
        if self.size > 0 {
            self.list_end = self.arena[end].prev;
        }
        elem
    }

    /// Remove and return the first element, keeping its node as slack.
    pub fn removelo(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        let start = self.list_start?;
        let elem = self.arena[start].elem.take();
        self.size -= 1;
        if self.size > 0 {
            self.list_start = self.arena[start].next;
        }
        elem
    }

    fn boundary(&self, id: Option<NodeId>) -> Option<&T> {
        if self.size == 0 {
            return None;
        }
        self.arena[id?].elem.as_ref()
    }

    fn replace_boundary(&mut self, id: Option<NodeId>, elem: T) -> Result<T, DListError> {
        let missing = DListError::out_of_range(0, self.size);
        if self.size == 0 {
            return Err(missing);
        }
        let id = id.ok_or(missing)?;
        self.arena[id].elem.replace(elem).ok_or(missing)
    }

    /// Walk to the node at logical `index` from the nearer window boundary.
    fn locate(&self, index: usize) -> Result<NodeId, DListError> {
        let missing = DListError::out_of_range(index, self.size);
        if index >= self.size {
            return Err(missing);
        }

        let from_back = self.size - 1 - index;
        if index <= from_back {
            let mut cur = self.list_start.ok_or(missing)?;
            for _ in 0..index {
                cur = self.arena[cur].next.ok_or(missing)?;
            }
            Ok(cur)
        } else {
            let mut cur = self.list_end.ok_or(missing)?;
            for _ in 0..from_back {
                cur = self.arena[cur].prev.ok_or(missing)?;
            }
            Ok(cur)
        }
    }

    fn grow_back(&mut self) -> NodeId {
        let id = self.arena.alloc(Node {
            prev: self.tail,
            ..Node::empty()
        });
        match self.tail {
            Some(tail) => self.arena[tail].next = Some(id),
            None => self.front = Some(id),
        }
        self.tail = Some(id);
        self.capacity += 1;
        trace!(capacity = self.capacity, "appended node to physical chain");
        id
    }

    fn grow_front(&mut self) -> NodeId {
        let id = self.arena.alloc(Node {
            next: self.front,
            ..Node::empty()
        });
        match self.front {
            Some(front) => self.arena[front].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.front = Some(id);
        self.capacity += 1;
        trace!(capacity = self.capacity, "prepended node to physical chain");
        id
    }

    /// Move the empty `front` node behind `tail`.
    ///
    /// Only applies while slack sits in front of a non-empty window.
    fn rotate_front_to_back(&mut self) -> Option<NodeId> {
        let front = self.front?;
        if self.size == 0 || Some(front) == self.list_start {
            return None;
        }
        let tail = self.tail?;
        let next = self.arena[front].next?;

        self.arena[next].prev = None;
        self.front = Some(next);

        self.arena[front].prev = Some(tail);
        self.arena[front].next = None;
        self.arena[tail].next = Some(front);
        self.tail = Some(front);

        trace!("moved front slack node to tail");
        Some(front)
    }

    /// Move the empty `tail` node ahead of `front`.
    ///
    /// Only applies while slack sits behind a non-empty window.
    fn rotate_back_to_front(&mut self) -> Option<NodeId> {
        let tail = self.tail?;
        if self.size == 0 || Some(tail) == self.list_end {
            return None;
        }
        let front = self.front?;
        let prev = self.arena[tail].prev?;

        self.arena[prev].next = None;
        self.tail = Some(prev);

        self.arena[tail].next = Some(front);
        self.arena[tail].prev = None;
        self.arena[front].prev = Some(tail);
        self.front = Some(tail);

        trace!("moved tail slack node to front");
        Some(tail)
    }

    /// Unlink an interior window node from the chain and free its slot.
    fn excise(&mut self, id: NodeId) -> Option<T> {
        debug_assert!(Some(id) != self.list_start && Some(id) != self.list_end);

        let Node { prev, next, elem } = self.arena.free(id);
        if let Some(p) = prev {
            self.arena[p].next = next;
        }
        if let Some(n) = next {
            self.arena[n].prev = prev;
        }

        self.capacity -= 1;
        self.size -= 1;
        trace!(capacity = self.capacity, "excised interior node");
        elem
    }

    /// Walk the whole chain and check every structural invariant.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert!(self.size <= self.capacity, "size exceeds capacity");
        assert_eq!(self.arena.occupied(), self.capacity, "arena/capacity drift");

        if self.capacity == 0 {
            assert!(self.front.is_none() && self.tail.is_none());
            assert!(self.list_start.is_none() && self.list_end.is_none());
            return;
        }

        let front = self.front.expect("non-empty chain has a front");
        assert!(self.arena[front].prev.is_none(), "front has a prev link");

        let mut chain = vec![front];
        let mut cur = front;
        while let Some(next) = self.arena[cur].next {
            assert_eq!(self.arena[next].prev, Some(cur), "links are not mutual");
            chain.push(next);
            assert!(chain.len() <= self.capacity, "chain is longer than capacity");
            cur = next;
        }
        assert_eq!(chain.len(), self.capacity);
        assert_eq!(Some(cur), self.tail, "last chain node is not tail");

        let pos = |id: Option<NodeId>| {
            let id = id.expect("window boundary is set");
            chain
                .iter()
                .position(|n| *n == id)
                .expect("window boundary is on the chain")
        };
        let start = pos(self.list_start);
        let end = pos(self.list_end);

        if self.size == 0 {
            assert_eq!(start, end);
            assert!(chain.iter().all(|id| !self.arena[*id].is_live()));
        } else {
            assert_eq!(end + 1 - start, self.size);
            for (i, id) in chain.iter().enumerate() {
                let inside = (start..=end).contains(&i);
                assert_eq!(self.arena[*id].is_live(), inside, "liveness at {i}");
            }
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for DLinkedList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a DLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for DLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.append(elem);
        }
    }
}

impl<T> FromIterator<T> for DLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}
