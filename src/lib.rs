#![no_std]

extern crate alloc;

pub mod linked_list;

pub use linked_list::forward::{
    Cursor, CursorMut, IntoIter, Iter, IterMut, ListError, Position, SingleLinkedList, swap,
};
