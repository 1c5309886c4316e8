//! Borrow-checked views over a [`Position`].
//!
//! A cursor pairs a position with a borrow of its list, so it can never
//! dangle. [`Cursor`] only reads; [`CursorMut`] can also insert and erase
//! after its position. Neither operation touches the node the cursor sits on,
//! so the cursor stays valid across them.

use core::fmt;

use super::{
    error::ListError,
    list::SingleLinkedList,
    node::{Node, next_of},
    position::Position,
};

/// A read-only cursor over a [`SingleLinkedList`].
pub struct Cursor<'a, T> {
    list: &'a SingleLinkedList<T>,
    pos: Position<T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a SingleLinkedList<T>, pos: Position<T>) -> Self {
        Self { list, pos }
    }

    /// The position under the cursor.
    pub fn position(&self) -> Position<T> {
        self.pos
    }

    pub fn is_before_begin(&self) -> bool {
        self.pos == self.list.before_begin()
    }

    pub fn is_end(&self) -> bool {
        self.pos.is_end()
    }

    /// The element under the cursor, or `None` at before-begin and end.
    pub fn current(&self) -> Option<&'a T> {
        if self.is_before_begin() {
            return None;
        }
        self.pos.raw().map(|link| unsafe { Node::<T>::value(link) })
    }

    /// The element after the cursor, if any.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.pos
            .raw()
            .and_then(|link| unsafe { next_of(link) })
            .map(|link| unsafe { Node::<T>::value(link) })
    }

    /// Moves to the next position. Panics if the cursor is at the end.
    #[track_caller]
    pub fn move_next(&mut self) {
        self.pos = unsafe { self.pos.successor() };
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}
unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.pos)
            .field("current", &self.current())
            .finish()
    }
}

/// A cursor over a [`SingleLinkedList`] that can edit the list after its
/// position.
pub struct CursorMut<'a, T> {
    list: &'a mut SingleLinkedList<T>,
    pos: Position<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut SingleLinkedList<T>, pos: Position<T>) -> Self {
        Self { list, pos }
    }

    /// The position under the cursor.
    pub fn position(&self) -> Position<T> {
        self.pos
    }

    pub fn is_before_begin(&self) -> bool {
        self.pos == self.list.before_begin()
    }

    pub fn is_end(&self) -> bool {
        self.pos.is_end()
    }

    /// A read-only view of this cursor.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.list, self.pos)
    }

    /// The element under the cursor, or `None` at before-begin and end.
    pub fn current(&mut self) -> Option<&mut T> {
        if self.is_before_begin() {
            return None;
        }
        self.pos.raw().map(|link| unsafe { Node::<T>::value_mut(link) })
    }

    /// The element after the cursor, if any.
    pub fn peek_next(&mut self) -> Option<&mut T> {
        self.pos
            .raw()
            .and_then(|link| unsafe { next_of(link) })
            .map(|link| unsafe { Node::<T>::value_mut(link) })
    }

    /// Moves to the next position. Panics if the cursor is at the end.
    #[track_caller]
    pub fn move_next(&mut self) {
        self.pos = unsafe { self.pos.successor() };
    }

    /// Inserts `value` right after the cursor, which stays where it is.
    /// Returns the position of the new element.
    ///
    /// Panics if the cursor is at the end.
    #[track_caller]
    pub fn insert_after(&mut self, value: T) -> Position<T> {
        let anchor = self.pos.link();
        let node = Node::alloc(value, None);
        Position::from_link(Some(unsafe { self.list.splice_after(anchor, node) }))
    }

    /// Fallible [`insert_after`](Self::insert_after).
    #[track_caller]
    pub fn try_insert_after(&mut self, value: T) -> Result<Position<T>, ListError> {
        let anchor = self.pos.link();
        let node = Node::try_alloc(value, None)?;
        Ok(Position::from_link(Some(unsafe {
            self.list.splice_after(anchor, node)
        })))
    }

    /// Unlinks the element right after the cursor and returns it, or `None`
    /// if there is no such element.
    ///
    /// Panics if the cursor is at the end.
    #[track_caller]
    pub fn remove_after(&mut self) -> Option<T> {
        let anchor = self.pos.link();
        unsafe { self.list.remove_after(anchor) }
    }

    /// Unlinks the element right after the cursor and returns it.
    ///
    /// Panics if the cursor is at the end or has no successor.
    #[track_caller]
    pub fn erase_after(&mut self) -> T {
        self.remove_after()
            .expect("erase_after requires a position with a successor")
    }
}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}
unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.pos)
            .field("current", &self.as_cursor().current())
            .finish()
    }
}
