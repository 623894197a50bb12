//! Doubly-linked list over a generational node arena.
//!
//! Nodes live in a `SlotMap` and reference each other by key, so a
//! `ListCursor` is a small stable handle rather than a raw pointer: it stays
//! valid while its node lives, no matter what happens elsewhere in the list,
//! and resolves to nothing once the node is erased (the arena bumps the
//! slot's generation). One sentinel node terminates the chain and doubles as
//! the `end` position; `head` names the first value node, or the sentinel
//! when the list is empty.

use slotmap::{DefaultKey, SlotMap};

use crate::error::ContainerError;

const CONTAINER: &str = "LinkedList";

#[derive(Debug)]
struct Node<T> {
    /// `None` only for the sentinel.
    value: Option<T>,
    prev: Option<DefaultKey>,
    next: Option<DefaultKey>,
}

/// A position within a `LinkedList`, bound to a node's identity.
///
/// Stepping is a chain walk: `advance`/`retreat`/`distance` are O(n), unlike
/// the vector's O(1) cursor arithmetic. That asymmetry is part of the
/// contract, not an implementation detail.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListCursor(DefaultKey);

impl ListCursor {
    /// Borrow the element at this position. `None` for the end position or
    /// a stale cursor.
    pub fn value<'a, T>(&self, list: &'a LinkedList<T>) -> Option<&'a T> {
        list.nodes.get(self.0).and_then(|n| n.value.as_ref())
    }

    pub fn value_mut<'a, T>(&self, list: &'a mut LinkedList<T>) -> Option<&'a mut T> {
        list.nodes.get_mut(self.0).and_then(|n| n.value.as_mut())
    }

    /// Step towards `end`. Stale cursors are rejected; stepping past the
    /// sentinel is OutOfRange.
    pub fn next<T>(&self, list: &LinkedList<T>) -> Result<ListCursor, ContainerError> {
        let node = list
            .nodes
            .get(self.0)
            .ok_or(ContainerError::invalid_iterator(CONTAINER))?;
        node.next
            .map(ListCursor)
            .ok_or(ContainerError::out_of_range(CONTAINER))
    }

    /// Step towards `begin`. Stepping before the first element is
    /// OutOfRange.
    pub fn prev<T>(&self, list: &LinkedList<T>) -> Result<ListCursor, ContainerError> {
        let node = list
            .nodes
            .get(self.0)
            .ok_or(ContainerError::invalid_iterator(CONTAINER))?;
        node.prev
            .map(ListCursor)
            .ok_or(ContainerError::out_of_range(CONTAINER))
    }

    /// `steps` forward steps; an O(steps) chain walk.
    pub fn advance<T>(
        &self,
        list: &LinkedList<T>,
        steps: usize,
    ) -> Result<ListCursor, ContainerError> {
        let mut cur = *self;
        for _ in 0..steps {
            cur = cur.next(list)?;
        }
        Ok(cur)
    }

    /// `steps` backward steps; an O(steps) chain walk.
    pub fn retreat<T>(
        &self,
        list: &LinkedList<T>,
        steps: usize,
    ) -> Result<ListCursor, ContainerError> {
        let mut cur = *self;
        for _ in 0..steps {
            cur = cur.prev(list)?;
        }
        Ok(cur)
    }

    /// Forward steps from `earlier` to `self`. Walks the chain; fails with
    /// InvalidIterator when `self` is not reachable from `earlier`.
    pub fn distance<T>(
        &self,
        list: &LinkedList<T>,
        earlier: ListCursor,
    ) -> Result<usize, ContainerError> {
        let mut cur = earlier;
        let mut steps = 0;
        loop {
            if cur == *self {
                return Ok(steps);
            }
            let next = list
                .nodes
                .get(cur.0)
                .ok_or(ContainerError::invalid_iterator(CONTAINER))?
                .next;
            match next {
                Some(next) => {
                    cur = ListCursor(next);
                    steps += 1;
                }
                None => return Err(ContainerError::invalid_iterator(CONTAINER)),
            }
        }
    }
}

pub struct LinkedList<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    /// First value node, or the sentinel when empty.
    head: DefaultKey,
    /// The sentinel; its `value` is `None` and its `next` is `None`.
    tail: DefaultKey,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let sentinel = nodes.insert(Node {
            value: None,
            prev: None,
            next: None,
        });
        Self {
            nodes,
            head: sentinel,
            tail: sentinel,
            len: 0,
        }
    }

    /// `count` copies of `value`.
    pub fn filled(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut list = Self::new();
        for _ in 0..count {
            list.push_back(value.clone());
        }
        list
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn begin(&self) -> ListCursor {
        ListCursor(self.head)
    }

    pub fn end(&self) -> ListCursor {
        ListCursor(self.tail)
    }

    pub fn front(&self) -> Result<&T, ContainerError> {
        self.nodes[self.head]
            .value
            .as_ref()
            .ok_or(ContainerError::out_of_range(CONTAINER))
    }

    pub fn front_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.nodes[self.head]
            .value
            .as_mut()
            .ok_or(ContainerError::out_of_range(CONTAINER))
    }

    pub fn back(&self) -> Result<&T, ContainerError> {
        let last = self.nodes[self.tail]
            .prev
            .ok_or(ContainerError::out_of_range(CONTAINER))?;
        Ok(self.nodes[last].value.as_ref().expect("value node"))
    }

    pub fn back_mut(&mut self) -> Result<&mut T, ContainerError> {
        let last = self.nodes[self.tail]
            .prev
            .ok_or(ContainerError::out_of_range(CONTAINER))?;
        Ok(self.nodes[last].value.as_mut().expect("value node"))
    }

    pub fn push_front(&mut self, value: T) {
        self.link_before(self.head, value);
    }

    pub fn push_back(&mut self, value: T) {
        self.link_before(self.tail, value);
    }

    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::out_of_range(CONTAINER));
        }
        Ok(self.unlink(self.head))
    }

    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        let last = self.nodes[self.tail]
            .prev
            .ok_or(ContainerError::out_of_range(CONTAINER))?;
        Ok(self.unlink(last))
    }

    /// Insert `value` before `pos`; O(1) relink. Returns the new node's
    /// cursor.
    pub fn insert(&mut self, pos: ListCursor, value: T) -> Result<ListCursor, ContainerError> {
        if !self.nodes.contains_key(pos.0) {
            return Err(ContainerError::invalid_iterator(CONTAINER));
        }
        Ok(ListCursor(self.link_before(pos.0, value)))
    }

    /// Insert `count` copies of `value` before `pos`, in order.
    pub fn insert_n(
        &mut self,
        pos: ListCursor,
        count: usize,
        value: &T,
    ) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        for _ in 0..count {
            self.insert(pos, value.clone())?;
        }
        Ok(())
    }

    /// Insert every item of `values` before `pos`, preserving their order.
    pub fn insert_all<I>(&mut self, pos: ListCursor, values: I) -> Result<(), ContainerError>
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.insert(pos, value)?;
        }
        Ok(())
    }

    /// Remove the node at `pos`; returns the cursor past it. A cursor whose
    /// node was already removed (or the end cursor) is OutOfRange.
    pub fn erase(&mut self, pos: ListCursor) -> Result<ListCursor, ContainerError> {
        match self.nodes.get(pos.0) {
            Some(node) if node.value.is_some() => {
                let next = node.next.expect("value node links to the sentinel");
                self.unlink(pos.0);
                Ok(ListCursor(next))
            }
            _ => Err(ContainerError::out_of_range(CONTAINER)),
        }
    }

    /// Remove `[first, last)`; O(k) relinks. Returns `last`.
    pub fn erase_range(
        &mut self,
        first: ListCursor,
        last: ListCursor,
    ) -> Result<ListCursor, ContainerError> {
        if !self.nodes.contains_key(last.0) {
            return Err(ContainerError::invalid_iterator(CONTAINER));
        }
        let mut cur = first;
        while cur != last {
            cur = self.erase(cur)?;
        }
        Ok(cur)
    }

    /// Truncate to `new_len` nodes, or pad the back with copies of `value`.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        if new_len < self.len {
            let first = self.begin().advance(self, new_len)?;
            self.erase_range(first, self.end())?;
        } else if new_len > self.len {
            self.insert_n(self.end(), new_len - self.len, &value)?;
        }
        Ok(())
    }

    pub fn resize_default(&mut self, new_len: usize) -> Result<(), ContainerError>
    where
        T: Clone + Default,
    {
        self.resize(new_len, T::default())
    }

    /// Drop every node and start over with a fresh sentinel.
    pub fn clear(&mut self) {
        self.nodes.clear();
        let sentinel = self.nodes.insert(Node {
            value: None,
            prev: None,
            next: None,
        });
        self.head = sentinel;
        self.tail = sentinel;
        self.len = 0;
    }

    /// O(1) exchange of storage with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// First position holding `value`, scanning from `begin`.
    pub fn find(&self, value: &T) -> Option<ListCursor>
    where
        T: PartialEq,
    {
        let mut cur = self.head;
        while let Some(node) = self.nodes.get(cur) {
            match &node.value {
                Some(v) if v == value => return Some(ListCursor(cur)),
                Some(_) => cur = node.next.expect("value node links to the sentinel"),
                None => break,
            }
        }
        None
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cur: self.head,
        }
    }

    fn link_before(&mut self, pos: DefaultKey, value: T) -> DefaultKey {
        let prev = self.nodes[pos].prev;
        let new = self.nodes.insert(Node {
            value: Some(value),
            prev,
            next: Some(pos),
        });
        self.nodes[pos].prev = Some(new);
        match prev {
            Some(p) => self.nodes[p].next = Some(new),
            None => self.head = new,
        }
        self.len += 1;
        new
    }

    /// Remove a value node the caller has already validated.
    fn unlink(&mut self, key: DefaultKey) -> T {
        let node = self.nodes.remove(key).expect("validated node key");
        let next = node.next.expect("value node links to the sentinel");
        match node.prev {
            Some(p) => self.nodes[p].next = Some(next),
            None => self.head = next,
        }
        self.nodes[next].prev = node.prev;
        self.len -= 1;
        node.value.expect("value node")
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

/// Forward iterator over list elements.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cur: DefaultKey,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes.get(self.cur)?;
        let value = node.value.as_ref()?;
        self.cur = node.next.expect("value node links to the sentinel");
        Some(value)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
