// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! An owning, singly linked list with a "before-begin" position.
//!
//! [`ForwardList`] owns every element in its own heap-allocated node.
//! Each node owns its successor, and the list owns the head node.
//! The length is cached, so [`ForwardList::len`] and [`ForwardList::is_empty`] are *O*(*1*).
//!
//! Elements can be inserted and removed anywhere in the list, but only *after* a given position.
//! Positions are expressed by cursors.
//! Besides every element, a cursor can also point to a position preceding the first element,
//! the "before-begin" anchor.
//! This makes inserting and removing at the front no different from doing so anywhere else:
//!
//! ```
//! use fwd_list::ForwardList;
//!
//! let mut list = ForwardList::new();
//! list.push_back(2);
//! list.push_back(4);
//!
//! let mut cursor = list.before_begin_mut();
//! cursor.insert_after(1);
//! cursor.move_next();
//! cursor.insert_after(3);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
//!
//! let mut cursor = list.before_begin_mut();
//! assert_eq!(cursor.erase_after(), Some(1));
//! assert_eq!(list.front(), Some(&2));
//! ```
//!
//! # Invalidation
//!
//! Any structural change of the list (inserting, erasing, clearing) invalidates all iterators
//! and cursors obtained before.
//! [`Iter`] and [`Cursor`] borrow the list, [`IterMut`] and [`CursorMut`] borrow it mutably,
//! so the compiler rejects every use of an invalidated position.
//! There are no runtime checks.

mod base;
mod cursor;
mod impls;
mod iter;

pub use base::*;
pub use cursor::*;
pub use iter::*;
