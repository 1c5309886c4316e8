use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use super::{
    cursor::{Cursor, CursorMut},
    error::ListError,
    iter::{Iter, IterMut},
    node::{Node, SingleLink, next_of, set_next_of},
    position::Position,
};

/// A singly linked list that owns its elements.
///
/// The list keeps a heap-allocated sentinel in front of the first element, so
/// "after this position" operations work the same at the head as anywhere
/// else. Elements are only ever reached through the chain starting at the
/// sentinel; no operation reallocates or moves existing nodes.
pub struct SingleLinkedList<T> {
    head: NonNull<SingleLink>,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T> SingleLinkedList<T> {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self {
            head: SingleLink::new_sentinel(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Builds a list holding the values of `iter` in iteration order,
    /// reporting allocation failure instead of aborting.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut reversed = Self::new();
        for value in iter {
            reversed.try_push_front(value)?;
        }
        reversed.reverse();
        log::trace!("built list of {} elements", reversed.len);
        Ok(reversed)
    }

    /// Number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn first_link(&self) -> Option<NonNull<SingleLink>> {
        unsafe { next_of(self.head) }
    }

    /// The first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.first_link()
            .map(|link| unsafe { Node::<T>::value(link) })
    }

    /// The first element, if any, mutably.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.first_link()
            .map(|link| unsafe { Node::<T>::value_mut(link) })
    }

    /// Prepends `value` to the list.
    pub fn push_front(&mut self, value: T) {
        let node = Node::alloc(value, self.first_link());
        unsafe { set_next_of(self.head, Some(node)) };
        self.len += 1;
    }

    /// Prepends `value` to the list. On allocation failure the list is left
    /// untouched and `value` is dropped.
    pub fn try_push_front(&mut self, value: T) -> Result<(), ListError> {
        let node = Node::try_alloc(value, self.first_link())?;
        unsafe { set_next_of(self.head, Some(node)) };
        self.len += 1;
        Ok(())
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let first = self.first_link()?;
        unsafe {
            set_next_of(self.head, next_of(first));
            self.len -= 1;
            Some(Node::<T>::into_value(first))
        }
    }

    /// Drops every element. Calling it on an empty list does nothing.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            log::trace!("clearing list of {} elements", self.len);
        }
        while self.pop_front().is_some() {}
    }

    /// Exchanges the contents of two lists in O(1) without touching any
    /// element. Positions of real elements follow their elements into the
    /// other list; each list keeps its own before-begin position.
    pub fn swap(&mut self, other: &mut Self) {
        unsafe {
            let mine = next_of(self.head);
            set_next_of(self.head, next_of(other.head));
            set_next_of(other.head, mine);
        }
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Reverses the order of the elements in place by relinking nodes.
    pub fn reverse(&mut self) {
        unsafe {
            let mut rest = next_of(self.head);
            set_next_of(self.head, None);
            while let Some(node) = rest {
                rest = next_of(node);
                set_next_of(node, next_of(self.head));
                set_next_of(self.head, Some(node));
            }
        }
    }

    /// Returns a deep copy, reporting allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self, ListError>
    where
        T: Clone,
    {
        Self::try_from_iter(self.iter().cloned())
    }

    /// Replaces the contents with a deep copy of `source`. The copy is built
    /// aside first, so on failure `self` is left exactly as it was.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), ListError>
    where
        T: Clone,
    {
        let mut fresh = source.try_clone()?;
        self.swap(&mut fresh);
        Ok(())
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.begin(), self.len)
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.begin(), self.len)
    }

    /// The position just before the first element. It can anchor
    /// [`insert_after`](Self::insert_after) and
    /// [`erase_after`](Self::erase_after) but cannot be dereferenced.
    #[inline]
    pub fn before_begin(&self) -> Position<T> {
        Position::from_link(Some(self.head))
    }

    /// The position of the first element, equal to [`end`](Self::end) when
    /// the list is empty.
    #[inline]
    pub fn begin(&self) -> Position<T> {
        Position::from_link(self.first_link())
    }

    /// The position one past the last element.
    #[inline]
    pub fn end(&self) -> Position<T> {
        Position::end()
    }

    /// Returns `true` if `pos` is before-begin, end, or one of this list's
    /// elements. Walks the list, so it is only used in debug assertions.
    fn owns(&self, pos: Position<T>) -> bool {
        let Some(target) = pos.raw() else {
            return true;
        };
        let mut current = Some(self.head);
        while let Some(link) = current {
            if link == target {
                return true;
            }
            current = unsafe { next_of(link) };
        }
        false
    }

    #[track_caller]
    fn check_dereferenceable(&self, pos: Position<T>) -> NonNull<SingleLink> {
        assert!(
            pos != self.before_begin(),
            "cannot dereference the before-begin position"
        );
        pos.link()
    }

    /// Returns the element at `pos`.
    ///
    /// Panics if `pos` is before-begin or end.
    ///
    /// # Safety
    ///
    /// `pos` must belong to this list and its element must not have been erased.
    #[track_caller]
    pub unsafe fn get(&self, pos: Position<T>) -> &T {
        debug_assert!(self.owns(pos), "position does not belong to this list");
        let link = self.check_dereferenceable(pos);
        unsafe { Node::<T>::value(link) }
    }

    /// Returns the element at `pos` mutably.
    ///
    /// Panics if `pos` is before-begin or end.
    ///
    /// # Safety
    ///
    /// Same as [`get`](Self::get).
    #[track_caller]
    pub unsafe fn get_mut(&mut self, pos: Position<T>) -> &mut T {
        debug_assert!(self.owns(pos), "position does not belong to this list");
        let link = self.check_dereferenceable(pos);
        unsafe { Node::<T>::value_mut(link) }
    }

    /// Returns the position following `pos`. Panics if `pos` is end.
    ///
    /// # Safety
    ///
    /// Same as [`get`](Self::get), except that before-begin is allowed.
    #[track_caller]
    pub unsafe fn advance(&self, pos: Position<T>) -> Position<T> {
        debug_assert!(self.owns(pos), "position does not belong to this list");
        unsafe { pos.successor() }
    }

    /// Links an already allocated node right after `anchor`.
    pub(crate) unsafe fn splice_after(
        &mut self,
        anchor: NonNull<SingleLink>,
        node: NonNull<SingleLink>,
    ) -> NonNull<SingleLink> {
        unsafe {
            set_next_of(node, next_of(anchor));
            set_next_of(anchor, Some(node));
        }
        self.len += 1;
        node
    }

    /// Unlinks the node after `anchor` and returns its value, or `None` if
    /// `anchor` is the last link.
    pub(crate) unsafe fn remove_after(&mut self, anchor: NonNull<SingleLink>) -> Option<T> {
        unsafe {
            let victim = next_of(anchor)?;
            set_next_of(anchor, next_of(victim));
            self.len -= 1;
            Some(Node::<T>::into_value(victim))
        }
    }

    /// Inserts `value` right after `pos` and returns the position of the new
    /// element. Inserting after [`before_begin`](Self::before_begin) is the
    /// same as [`push_front`](Self::push_front).
    ///
    /// Panics if `pos` is end.
    ///
    /// # Safety
    ///
    /// `pos` must be before-begin or an element of this list that has not been
    /// erased.
    #[track_caller]
    pub unsafe fn insert_after(&mut self, pos: Position<T>, value: T) -> Position<T> {
        debug_assert!(self.owns(pos), "position does not belong to this list");
        let anchor = pos.link();
        let node = Node::alloc(value, None);
        Position::from_link(Some(unsafe { self.splice_after(anchor, node) }))
    }

    /// Fallible [`insert_after`](Self::insert_after). On allocation failure
    /// the list is left untouched.
    ///
    /// # Safety
    ///
    /// Same as [`insert_after`](Self::insert_after).
    #[track_caller]
    pub unsafe fn try_insert_after(
        &mut self,
        pos: Position<T>,
        value: T,
    ) -> Result<Position<T>, ListError> {
        debug_assert!(self.owns(pos), "position does not belong to this list");
        let anchor = pos.link();
        let node = Node::try_alloc(value, None)?;
        Ok(Position::from_link(Some(unsafe {
            self.splice_after(anchor, node)
        })))
    }

    /// Drops the element right after `pos` and returns the position that now
    /// follows `pos` ([`end`](Self::end) if the last element was erased).
    ///
    /// Panics if `pos` is end or has no successor.
    ///
    /// # Safety
    ///
    /// Same as [`insert_after`](Self::insert_after). Any position naming the
    /// erased element dangles afterwards.
    #[track_caller]
    pub unsafe fn erase_after(&mut self, pos: Position<T>) -> Position<T> {
        debug_assert!(self.owns(pos), "position does not belong to this list");
        let anchor = pos.link();
        let erased = unsafe { self.remove_after(anchor) }
            .expect("erase_after requires a position with a successor");
        drop(erased);
        unsafe { pos.successor() }
    }

    /// A read-only cursor at the before-begin position.
    pub fn cursor_before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.before_begin())
    }

    /// A read-only cursor at the first element (or end, if empty).
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.begin())
    }

    /// A mutable cursor at the before-begin position.
    pub fn cursor_before_begin_mut(&mut self) -> CursorMut<'_, T> {
        let pos = self.before_begin();
        CursorMut::new(self, pos)
    }

    /// A mutable cursor at the first element (or end, if empty).
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let pos = self.begin();
        CursorMut::new(self, pos)
    }

    fn last_link(&self) -> NonNull<SingleLink> {
        let mut link = self.head;
        while let Some(next) = unsafe { next_of(link) } {
            link = next;
        }
        link
    }
}

/// Swaps the contents of two lists. See [`SingleLinkedList::swap`].
pub fn swap<T>(lhs: &mut SingleLinkedList<T>, rhs: &mut SingleLinkedList<T>) {
    lhs.swap(rhs);
}

impl<T> Default for SingleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SingleLinkedList<T> {
    fn drop(&mut self) {
        // Runs even if an element's destructor panics, so the rest of the
        // chain and the sentinel are still released.
        struct DropGuard<'a, T>(&'a mut SingleLinkedList<T>);

        impl<T> Drop for DropGuard<'_, T> {
            fn drop(&mut self) {
                while self.0.pop_front().is_some() {}
                unsafe { SingleLink::free_sentinel(self.0.head) };
            }
        }

        let mut guard = DropGuard(self);
        while guard.0.pop_front().is_some() {}
    }
}

impl<T: Clone> Clone for SingleLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        self.swap(&mut fresh);
    }
}

impl<T> FromIterator<T> for SingleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut reversed = Self::new();
        for value in iter {
            reversed.push_front(value);
        }
        reversed.reverse();
        log::trace!("built list of {} elements", reversed.len);
        reversed
    }
}

impl<T, const N: usize> From<[T; N]> for SingleLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Extend<T> for SingleLinkedList<T> {
    /// Appends the values at the back, in order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.last_link();
        for value in iter {
            let node = Node::alloc(value, None);
            tail = unsafe { self.splice_after(tail, node) };
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SingleLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

unsafe impl<T: Send> Send for SingleLinkedList<T> {}
unsafe impl<T: Sync> Sync for SingleLinkedList<T> {}
