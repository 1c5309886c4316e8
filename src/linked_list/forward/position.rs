use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::node::{SingleLink, next_of};

/// A non-owning position inside a [`SingleLinkedList`](super::SingleLinkedList).
///
/// A position names one of three things: the before-begin slot (the list's
/// sentinel), a real element, or the end of the list. It is `Copy` and does not
/// borrow the list, so it survives insertions and removals of *other* nodes.
/// It dangles once the node it names is erased or the list is dropped.
///
/// Positions are compared by identity, never by value.
pub struct Position<T> {
    link: Option<NonNull<SingleLink>>,
    _marker: PhantomData<*const T>,
}

impl<T> Position<T> {
    #[inline]
    pub(crate) const fn from_link(link: Option<NonNull<SingleLink>>) -> Self {
        Self {
            link,
            _marker: PhantomData,
        }
    }

    /// The end position, one past the last element of any list.
    #[inline]
    pub const fn end() -> Self {
        Self::from_link(None)
    }

    /// Returns `true` if this is the end position.
    #[inline]
    pub const fn is_end(&self) -> bool {
        self.link.is_none()
    }

    #[inline]
    pub(crate) fn raw(&self) -> Option<NonNull<SingleLink>> {
        self.link
    }

    /// The link behind this position. Panics at the end position.
    #[inline]
    #[track_caller]
    pub(crate) fn link(&self) -> NonNull<SingleLink> {
        self.link.expect("position is past the end of the list")
    }

    /// Steps to the following position. Panics at the end position.
    ///
    /// # Safety
    ///
    /// The position must not dangle.
    #[inline]
    #[track_caller]
    pub(crate) unsafe fn successor(self) -> Self {
        Self::from_link(unsafe { next_of(self.link()) })
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        self.link == other.link
    }
}

impl<T> Eq for Position<T> {}

impl<T> Default for Position<T> {
    fn default() -> Self {
        Self::end()
    }
}

impl<T> fmt::Debug for Position<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.link {
            Some(link) => f.debug_tuple("Position").field(&link).finish(),
            None => f.write_str("Position(end)"),
        }
    }
}
