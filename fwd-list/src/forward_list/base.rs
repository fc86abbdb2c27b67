// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use alloc::boxed::Box;

use super::cursor::{Cursor, CursorMut};
use super::iter::{Iter, IterMut};

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) next: Link<T>,
    pub(crate) value: T,
}

impl<T> Node<T> {
    /// Moves `value` into a new heap-allocated node and returns the only pointer to it.
    /// Ownership of the node passes to whichever link stores this pointer.
    pub(crate) fn allocate(value: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { next, value })))
    }

    /// Reclaims a node created by [`Node::allocate`].
    ///
    /// # Safety
    ///
    /// `node` must have been unlinked from its list and must not be used afterwards.
    pub(crate) unsafe fn reclaim(node: NonNull<Self>) -> Box<Self> {
        Box::from_raw(node.as_ptr())
    }
}

/// An owning, singly linked list.
///
/// Every element lives in its own heap-allocated node, which is owned by its predecessor
/// (or by the list itself for the first node).
/// The element count is cached.
///
/// See the [module-level documentation](crate::forward_list) for more details.
pub struct ForwardList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> ForwardList<T> {
    /// Creates a new, empty list.
    ///
    /// This does not allocate.
    pub const fn new() -> Self {
        Self {
            head: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Returns a cursor at the "before-begin" position of the list.
    ///
    /// This position precedes the first element and is valid for both empty and non-empty lists.
    pub fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Returns a mutable cursor at the "before-begin" position of the list.
    ///
    /// Use it to insert or erase elements at the front of the list or, after moving it,
    /// anywhere else.
    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }

    /// Removes all elements from the list, dropping them from front to back.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the first element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Provides a mutable reference to the first element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Returns `true` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator yielding references to each element of the list.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.len)
    }

    /// Returns an iterator yielding mutable references to each element of the list.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head, self.len)
    }

    /// Returns the number of elements in the list.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes the first element from the list and returns it, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|node| {
            let node = unsafe { Node::reclaim(node) };
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Appends an element to the back of the list.
    ///
    /// This operation computes in *O*(*n*) time, because the list has to be walked to find its
    /// last node.
    pub fn push_back(&mut self, element: T) {
        let mut cursor = self.before_begin_mut();
        while cursor.move_next() {}
        cursor.insert_after(element);
    }

    /// Prepends an element to the front of the list.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn push_front(&mut self, element: T) {
        self.head = Some(Node::allocate(element, self.head));
        self.len += 1;
    }

    /// Retains only the elements specified by the predicate, preserving their order.
    ///
    /// In other words, removes all elements `e` for which `f(&mut e)` returns `false`.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        let mut cursor = self.before_begin_mut();

        loop {
            let keep = match cursor.peek_next() {
                Some(element) => f(element),
                None => break,
            };

            if keep {
                cursor.move_next();
            } else {
                cursor.erase_after();
            }
        }
    }

    /// Exchanges the elements of this list with those of `other`.
    ///
    /// This operation computes in *O*(*1*) time and never allocates.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.len, &mut other.len);
    }
}

impl<T: PartialEq> ForwardList<T> {
    /// Returns `true` if the list contains an element equal to the given value.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn contains(&self, x: &T) -> bool {
        self.iter().any(|element| element == x)
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        // Drop iteratively, a recursive drop of the node chain could overflow the stack.
        self.clear();
    }
}

unsafe impl<T: Send> Send for ForwardList<T> {}
unsafe impl<T: Sync> Sync for ForwardList<T> {}

/// Exchanges the elements of two lists in *O*(*1*) time.
///
/// Applying it twice restores both lists.
pub fn swap<T>(a: &mut ForwardList<T>, b: &mut ForwardList<T>) {
    a.swap(b);
}
