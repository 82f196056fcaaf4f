//! Iteration over a `SinglyLinkedList`, borrowed or by value.
use crate::llist::{Node, SinglyLinkedList};
use core::iter::FromIterator;

/// Shared iterator, head to tail.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

/// Mutable iterator, head to tail.
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

/// Consuming iterator, pops from the front.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(next: Option<&'a Node<T>>) -> Self {
        Iter { next }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(next: Option<&'a mut Node<T>>) -> Self {
        IterMut { next }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter { next: self.next }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.data
        })
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    //walk to the tail once, then keep linking after the newest node
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut link = self.tail_link();
        for data in iter {
            let node = link.get_or_insert_with(|| Box::new(Node::new(data)));
            link = &mut node.next;
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_and_owned() {
        let mut l: SinglyLinkedList<u32> = (1..4).collect();
        for v in &mut l {
            *v *= 10;
        }
        let seen: Vec<u32> = (&l).into_iter().copied().collect();
        assert_eq!(vec![10, 20, 30], seen);

        let owned: Vec<u32> = l.into_iter().collect();
        assert_eq!(vec![10, 20, 30], owned);
    }

    #[test]
    fn extend_appends_in_order() {
        let mut l: SinglyLinkedList<u32> = (0..2).collect();
        l.extend(vec![7, 8]);
        l.extend(Vec::new());
        l.append(9);
        assert_eq!(vec![0, 1, 7, 8, 9], l.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn iter_clone_is_independent() {
        let l: SinglyLinkedList<u32> = (0..3).collect();
        let mut a = l.iter();
        a.next();
        let b = a.clone();
        assert_eq!(2, a.count());
        assert_eq!(2, b.count());
    }
}
