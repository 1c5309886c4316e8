use core::alloc::Layout;
use core::ptr::NonNull;

use alloc::alloc::handle_alloc_error;
use alloc::boxed::Box;

use super::error::ListError;

/// A link in a singly linked list.
///
/// Every [`Node`] starts with one of these, and the list's sentinel is a bare
/// `SingleLink` with no value behind it. Links always point at other links,
/// so the sentinel and the real nodes can be walked the same way.
#[derive(Debug, Default)]
#[repr(C)]
pub(crate) struct SingleLink {
    next: Option<NonNull<SingleLink>>,
}

impl SingleLink {
    #[inline]
    pub(crate) fn next(&self) -> Option<NonNull<SingleLink>> {
        self.next
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: Option<NonNull<SingleLink>>) {
        self.next = next;
    }

    /// Allocates a fresh sentinel on the heap.
    pub(crate) fn new_sentinel() -> NonNull<SingleLink> {
        NonNull::from(Box::leak(Box::new(SingleLink::default())))
    }

    /// Frees a sentinel created by [`SingleLink::new_sentinel`].
    ///
    /// # Safety
    ///
    /// `sentinel` must come from `new_sentinel` and must not be used afterwards.
    pub(crate) unsafe fn free_sentinel(sentinel: NonNull<SingleLink>) {
        drop(unsafe { Box::from_raw(sentinel.as_ptr()) });
    }
}

/// A node holding one value. `link` must stay the first field so a pointer
/// to the node is also a pointer to its link.
#[repr(C)]
pub(crate) struct Node<T> {
    link: SingleLink,
    value: T,
}

impl<T> Node<T> {
    /// Allocates a node that points at `next`, reporting allocation failure
    /// instead of aborting.
    pub(crate) fn try_alloc(
        value: T,
        next: Option<NonNull<SingleLink>>,
    ) -> Result<NonNull<SingleLink>, ListError> {
        let layout = Layout::new::<Node<T>>();
        // Node<T> always carries a link, so the layout is never zero-sized.
        let raw = unsafe { alloc::alloc::alloc(layout) }.cast::<Node<T>>();
        let Some(node) = NonNull::new(raw) else {
            log::warn!("failed to allocate a list node ({} bytes)", layout.size());
            return Err(ListError::AllocFailed { layout });
        };
        unsafe {
            node.as_ptr().write(Node {
                link: SingleLink { next },
                value,
            });
        }
        Ok(node.cast())
    }

    /// Same as [`Node::try_alloc`] but diverts allocation failure to the
    /// global allocation error handler.
    pub(crate) fn alloc(value: T, next: Option<NonNull<SingleLink>>) -> NonNull<SingleLink> {
        match Self::try_alloc(value, next) {
            Ok(link) => link,
            Err(ListError::AllocFailed { layout }) => handle_alloc_error(layout),
        }
    }

    /// Takes back ownership of a node, returning its value.
    ///
    /// # Safety
    ///
    /// `link` must have come from [`Node::alloc`] or [`Node::try_alloc`] with
    /// the same `T`, must already be unlinked, and must not be used afterwards.
    pub(crate) unsafe fn into_value(link: NonNull<SingleLink>) -> T {
        // alloc() used Layout::new::<Node<T>>() with the global allocator,
        // which is exactly what Box expects.
        let node = unsafe { Box::from_raw(link.cast::<Node<T>>().as_ptr()) };
        node.value
    }

    /// # Safety
    ///
    /// `link` must point at a live real node (never the sentinel) holding a `T`,
    /// and no mutable reference to its value may exist for `'a`.
    #[inline]
    pub(crate) unsafe fn value<'a>(link: NonNull<SingleLink>) -> &'a T {
        unsafe { &(*link.cast::<Node<T>>().as_ptr()).value }
    }

    /// # Safety
    ///
    /// Same as [`Node::value`], and no other reference to the value may exist
    /// for `'a`.
    #[inline]
    pub(crate) unsafe fn value_mut<'a>(link: NonNull<SingleLink>) -> &'a mut T {
        unsafe { &mut (*link.cast::<Node<T>>().as_ptr()).value }
    }
}

/// Reads the `next` pointer of any link, sentinel included.
///
/// # Safety
///
/// `link` must point at a live link.
#[inline]
pub(crate) unsafe fn next_of(link: NonNull<SingleLink>) -> Option<NonNull<SingleLink>> {
    unsafe { (*link.as_ptr()).next() }
}

/// # Safety
///
/// `link` must point at a live link that nothing else is reading or writing.
#[inline]
pub(crate) unsafe fn set_next_of(link: NonNull<SingleLink>, next: Option<NonNull<SingleLink>>) {
    unsafe { (*link.as_ptr()).set_next(next) }
}
