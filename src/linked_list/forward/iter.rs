use core::iter::FusedIterator;
use core::marker::PhantomData;

use super::{list::SingleLinkedList, node::Node, position::Position};

/// An iterator over the elements of a [`SingleLinkedList`].
pub struct Iter<'a, T> {
    pos: Position<T>,
    remaining: usize,
    _list: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(pos: Position<T>, len: usize) -> Self {
        Self {
            pos,
            remaining: len,
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pos.raw()?;
        self.remaining -= 1;
        // The shared borrow of the list keeps every node alive and unmodified.
        unsafe {
            self.pos = self.pos.successor();
            Some(Node::<T>::value(current))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.pos, self.remaining)
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// A mutable iterator over the elements of a [`SingleLinkedList`].
pub struct IterMut<'a, T> {
    pos: Position<T>,
    remaining: usize,
    _list: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(pos: Position<T>, len: usize) -> Self {
        Self {
            pos,
            remaining: len,
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pos.raw()?;
        self.remaining -= 1;
        // Each node is yielded once, so the mutable references never alias.
        unsafe {
            self.pos = self.pos.successor();
            Some(Node::<T>::value_mut(current))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// An owning iterator over the elements of a [`SingleLinkedList`].
pub struct IntoIter<T> {
    list: SingleLinkedList<T>,
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

impl<T> IntoIterator for SingleLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SingleLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SingleLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
