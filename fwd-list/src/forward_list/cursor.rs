// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;
use core::ptr;

use super::base::{ForwardList, Link, Node};

/// A position in a [`ForwardList`]: either the "before-begin" anchor or an element.
///
/// A `Cursor` only reads from the list.
/// It cannot move past the last element, there is no separate end position.
///
/// The list cannot be modified while a `Cursor` exists.
pub struct Cursor<'a, T> {
    current: Link<T>,
    list: &'a ForwardList<T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a ForwardList<T>) -> Self {
        Self {
            current: None,
            list,
        }
    }

    /// Returns the element at the cursor position, or `None` at the "before-begin" position.
    pub fn current(&self) -> Option<&'a T> {
        self.current.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns `true` if the cursor is at the "before-begin" position.
    pub fn is_before_begin(&self) -> bool {
        self.current.is_none()
    }

    /// Moves the cursor to the next element.
    ///
    /// Returns `false` and stays in place if there is no next element.
    pub fn move_next(&mut self) -> bool {
        match self.next_link() {
            Some(node) => {
                self.current = Some(node);
                true
            }
            None => false,
        }
    }

    fn next_link(&self) -> Link<T> {
        match self.current {
            Some(node) => unsafe { (*node.as_ptr()).next },
            None => self.list.head,
        }
    }

    /// Returns the element following the cursor position, or `None` if there is none.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.next_link()
            .map(|node| unsafe { &(*node.as_ptr()).value })
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            list: self.list,
        }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.current()).finish()
    }
}

/// Two cursors are equal if they point to the same position of the same list.
impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.current == other.current
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

/// A position in a [`ForwardList`] that allows inserting and erasing elements after it.
///
/// Like [`Cursor`], a `CursorMut` is either at the "before-begin" anchor or at an element.
/// It holds the unique borrow of the list, so no other iterator or cursor can observe the list
/// while it is being modified.
pub struct CursorMut<'a, T> {
    current: Link<T>,
    list: &'a mut ForwardList<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut ForwardList<T>) -> Self {
        Self {
            current: None,
            list,
        }
    }

    /// Returns a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            current: self.current,
            list: &*self.list,
        }
    }

    /// Returns the element at the cursor position, or `None` at the "before-begin" position.
    pub fn current(&mut self) -> Option<&mut T> {
        self.current.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Removes the element following the cursor position and returns it.
    ///
    /// The cursor stays where it is, and the successor of the removed element becomes the next
    /// element.
    /// Returns `None` and leaves the list untouched if there is no following element.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn erase_after(&mut self) -> Option<T> {
        let link = self.next_link_mut();
        let node = unsafe { Node::reclaim((*link)?) };
        *link = node.next;
        self.list.len -= 1;

        Some(node.value)
    }

    /// Inserts an element after the cursor position and moves the cursor to it.
    ///
    /// Consecutive calls therefore insert elements in the order they are given.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn insert_after(&mut self, element: T) {
        let link = self.next_link_mut();
        let node = Node::allocate(element, *link);
        *link = Some(node);
        self.list.len += 1;
        self.current = Some(node);
    }

    /// Returns `true` if the cursor is at the "before-begin" position.
    pub fn is_before_begin(&self) -> bool {
        self.current.is_none()
    }

    /// Moves the cursor to the next element.
    ///
    /// Returns `false` and stays in place if there is no next element.
    pub fn move_next(&mut self) -> bool {
        match *self.next_link_mut() {
            Some(node) => {
                self.current = Some(node);
                true
            }
            None => false,
        }
    }

    /// Returns the link that owns the node following the cursor position.
    fn next_link_mut(&mut self) -> &mut Link<T> {
        match self.current {
            Some(node) => unsafe { &mut (*node.as_ptr()).next },
            None => &mut self.list.head,
        }
    }

    /// Returns the element following the cursor position, or `None` if there is none.
    pub fn peek_next(&mut self) -> Option<&mut T> {
        (*self.next_link_mut()).map(|node| unsafe { &mut (*node.as_ptr()).value })
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut")
            .field(&self.as_cursor().current())
            .finish()
    }
}
