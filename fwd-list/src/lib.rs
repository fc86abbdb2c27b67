// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_std]

extern crate alloc;

// Required for expanding `fwd_list!` when testing.
#[cfg(test)]
extern crate self as fwd_list;

pub mod forward_list;

pub use forward_list::{swap, Cursor, CursorMut, ForwardList, IntoIter, Iter, IterMut};

/// Creates a [`ForwardList`] from a literal sequence of elements.
///
/// The syntax follows `vec!`:
///
/// ```
/// use fwd_list::{fwd_list, ForwardList};
///
/// let empty: ForwardList<i32> = fwd_list![];
/// assert!(empty.is_empty());
///
/// let list = fwd_list![1, 2, 3];
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
///
/// let zeros = fwd_list![0u8; 4];
/// assert_eq!(zeros.len(), 4);
/// ```
///
/// Elements are evaluated from left to right and appended in *O*(*n*) total time.
pub use fwd_list_macros::fwd_list;
