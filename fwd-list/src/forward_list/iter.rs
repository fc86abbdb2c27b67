// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use super::base::{ForwardList, Link, Node};

/// An iterator over the elements of a [`ForwardList`].
///
/// Created by [`ForwardList::iter`].
/// A clone continues from the same position, call [`ForwardList::iter`] again to start over.
pub struct Iter<'a, T> {
    next: Link<T>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: Link<T>, len: usize) -> Self {
        Self {
            next: head,
            len,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            self.len -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            len: self.len,
            marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

/// An iterator over mutable references to the elements of a [`ForwardList`].
///
/// Created by [`ForwardList::iter_mut`].
pub struct IterMut<'a, T> {
    next: Link<T>,
    len: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(head: Link<T>, len: usize) -> Self {
        Self {
            next: head,
            len,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.next.map(|node| {
            let node = unsafe { &mut *node.as_ptr() };
            self.next = node.next;
            self.len -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}
unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}

/// An owning iterator over the elements of a [`ForwardList`].
///
/// Created by [`ForwardList::into_iter`].
/// Elements not yet yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    pub(crate) list: ForwardList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_into_iter() {
        let mut list = ForwardList::new();

        for i in 0..5 {
            list.push_back(i);
        }

        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.collect::<Vec<_>>(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_iter() {
        let mut list = ForwardList::new();

        for i in 0..10 {
            list.push_front(i);
        }

        let mut iter = list.iter();
        assert_eq!(iter.len(), 10);

        for i in (0..10).rev() {
            assert_eq!(iter.next(), Some(&i));
        }

        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_iter_is_restartable() {
        let mut list = ForwardList::new();

        for i in 0..3 {
            list.push_back(i);
        }

        let mut iter = list.iter();
        iter.next();
        let snapshot = iter.clone();

        assert_eq!(iter.copied().collect::<Vec<_>>(), [1, 2]);
        assert_eq!(snapshot.copied().collect::<Vec<_>>(), [1, 2]);

        // A fresh iterator starts over at the front.
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!((&list).into_iter().count(), 3);
    }

    #[test]
    fn test_iter_mut() {
        let mut list = ForwardList::new();

        for i in 0..5 {
            list.push_back(i);
        }

        for element in &mut list {
            *element *= 10;
        }

        assert_eq!(list.iter_mut().len(), 5);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 10, 20, 30, 40]);
    }
}
