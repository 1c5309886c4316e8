use core::alloc::Layout;

/// Errors reported by the fallible (`try_*`) list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The global allocator could not provide memory for a node.
    #[error("failed to allocate a list node of {} bytes", .layout.size())]
    AllocFailed { layout: Layout },
}
