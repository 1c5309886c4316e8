//! # Forward List
//!
//! An owning singly linked list with a sentinel head, in the shape of a
//! forward list: elements are added and removed at the front, or right after
//! a known position.
//!
//! ## Core Components
//!
//! - [`SingleLinkedList`]: the container. It owns every node; dropping it frees
//!   them front to back.
//! - [`Position`]: a `Copy` handle naming before-begin, an element, or end.
//!   Positions do not borrow the list, so the list methods taking them are
//!   `unsafe`.
//! - [`Cursor`] and [`CursorMut`]: a position plus a borrow of the list, giving
//!   the same operations without `unsafe`.
//! - [`Iter`], [`IterMut`] and [`IntoIter`]: the usual forward iterators.
//!
//! ## Invalidation
//!
//! Nodes never move once allocated. Inserting or erasing leaves every position
//! valid except those naming the erased node.

mod cmp;
mod cursor;
mod error;
mod iter;
mod list;
mod node;
mod position;

pub use cursor::{Cursor, CursorMut};
pub use error::ListError;
pub use iter::{IntoIter, Iter, IterMut};
pub use list::{SingleLinkedList, swap};
pub use position::Position;

#[cfg(test)]
mod tests;
