//! Singly linked list with positional and value based access.
//!
//! Every node exclusively owns its successor and the list owns the head, so the chain can never
//! contain a cycle. Lookups walk the chain from the head; nothing is cached, not even the size.

use crate::error::{ListError, Result};
use crate::iter::{Iter, IterMut};
use core::fmt;

/// Separator used when rendering a list with `Display`.
pub const SEPARATOR: &str = " -> ";

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(data: T) -> Self {
        Node { data, next: None }
    }
}

/// An ordered sequence of values held in a chain of uniquely owned nodes.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        SinglyLinkedList { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of nodes, counted by walking the whole chain.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Link a new node holding `data` after the current tail.
    pub fn append(&mut self, data: T) {
        *self.tail_link() = Some(Box::new(Node::new(data)));
        tracing::trace!("append");
    }

    pub fn push_front(&mut self, data: T) {
        let mut node = Box::new(Node::new(data));
        node.next = self.head.take();
        self.head = Some(node);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { data, next } = *node;
            self.head = next;
            data
        })
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.data)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.data)
    }

    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Drop every node, one at a time so long chains don't recurse.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    /// Insert `data` so that it becomes the element at `index`.
    ///
    /// `index == 0` inserts before the head and `index == size()` appends. Anything past the end
    /// is rejected and the list is left untouched.
    pub fn insert_at(&mut self, data: T, index: usize) -> Result<()> {
        match self.link_at(index) {
            Some(link) => {
                let mut node = Box::new(Node::new(data));
                node.next = link.take();
                *link = Some(node);
                tracing::trace!(index, "insert_at");
                Ok(())
            }
            None => {
                let err = ListError::IndexOutOfRange {
                    index,
                    len: self.size(),
                };
                tracing::debug!(%err, "insert_at rejected");
                Err(err)
            }
        }
    }

    /// Unlink the node at `index` and hand back its data.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        match self.unlink(index) {
            Some(data) => {
                tracing::trace!(index, "remove_at");
                Ok(data)
            }
            None => {
                let err = ListError::IndexOutOfRange {
                    index,
                    len: self.size(),
                };
                tracing::debug!(%err, "remove_at rejected");
                Err(err)
            }
        }
    }

    /// Data at position `index`, or `IndexOutOfRange` for `index >= size()`.
    pub fn get_by_index(&self, index: usize) -> Result<&T> {
        self.iter()
            .nth(index)
            .ok_or_else(|| ListError::IndexOutOfRange {
                index,
                len: self.size(),
            })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let mut len = 0;
        for data in self.iter_mut() {
            if len == index {
                return Ok(data);
            }
            len += 1;
        }
        Err(ListError::IndexOutOfRange { index, len })
    }

    /// Ordered visit of every value from head to tail.
    pub fn traverse(&self) -> Iter<'_, T> {
        self.iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.as_deref_mut())
    }

    /// Exchange the data held at two positions. Nodes stay where they are.
    pub fn swap_by_index(&mut self, idx_a: usize, idx_b: usize) -> Result<()> {
        let len = self.size();
        if let Some(&index) = [idx_a, idx_b].iter().find(|&&i| i >= len) {
            let err = ListError::IndexOutOfRange { index, len };
            tracing::debug!(%err, "swap_by_index rejected");
            return Err(err);
        }
        if idx_a == idx_b {
            return Ok(());
        }

        let (lo, hi) = if idx_a < idx_b {
            (idx_a, idx_b)
        } else {
            (idx_b, idx_a)
        };
        let mut iter = self.iter_mut();
        match (iter.nth(lo), iter.nth(hi - lo - 1)) {
            (Some(a), Some(b)) => core::mem::swap(a, b),
            _ => return Err(ListError::IndexOutOfRange { index: hi, len }),
        }
        tracing::trace!(idx_a, idx_b, "swap");
        Ok(())
    }

    /// The link that holds position `index`; `index == size()` gives the empty link past the
    /// tail, anything further is `None`.
    fn link_at(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    pub(crate) fn tail_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    fn unlink(&mut self, index: usize) -> Option<T> {
        let link = self.link_at(index)?;
        let node = link.take()?;
        let Node { data, next } = *node;
        *link = next;
        Some(data)
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Position of the first node equal to `value`.
    pub fn search(&self, value: &T) -> Option<usize> {
        self.iter().position(|data| data == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Remove the first node equal to `value` and return its data.
    pub fn delete(&mut self, value: &T) -> Result<T> {
        if self.is_empty() {
            tracing::debug!(err = %ListError::EmptyList, "delete rejected");
            return Err(ListError::EmptyList);
        }
        match self.search(value) {
            Some(index) => self.remove_at(index),
            None => {
                tracing::debug!(err = %ListError::NotFound, "delete rejected");
                Err(ListError::NotFound)
            }
        }
    }

    /// Exchange the data of the first nodes equal to `value_a` and `value_b`.
    pub fn swap_by_value(&mut self, value_a: &T, value_b: &T) -> Result<()> {
        if self.is_empty() {
            tracing::debug!(err = %ListError::EmptyList, "swap_by_value rejected");
            return Err(ListError::EmptyList);
        }
        match (self.search(value_a), self.search(value_b)) {
            (Some(idx_a), Some(idx_b)) => self.swap_by_index(idx_a, idx_b),
            _ => {
                tracing::debug!(err = %ListError::NotFound, "swap_by_value rejected");
                Err(ListError::NotFound)
            }
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for data in iter {
                write!(f, "{}{}", SEPARATOR, data)?;
            }
        }
        Ok(())
    }
}
