// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by a paging container.

/// Errors from [`PagingContainer`](crate::PagingContainer) operations.
///
/// Query misses (no item at the viewport center, nothing to snap to) are not
/// errors; those fall back to index `0` or the unsnapped offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PagingError {
    /// A page index outside `0..len` was requested.
    #[error("page {index} is out of range for {len} items")]
    PageOutOfRange {
        /// The requested page.
        index: usize,
        /// Number of items in the container.
        len: usize,
    },
    /// Containers cannot be restored from serialized state.
    #[error("paging containers cannot be decoded from serialized state; construct one with `PagingContainer::new`")]
    DecodeUnsupported,
}
