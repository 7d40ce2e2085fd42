// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Pager: a headless paging layout for scrollable item strips.
//!
//! This crate models a scroll container whose items are *pages*: a released
//! scroll always comes to rest with one item centered, the first and last
//! items can be centered thanks to symmetric content insets, and items can
//! optionally fade as they move away from the center.
//!
//! The pieces are:
//!
//! - [`ScrollAxis`]: the single axis along which paging occurs, with helpers to
//!   project sizes, points, and velocities onto it.
//! - [`FlowLayout`]: the item placement a paging layout builds on. It answers
//!   "which items intersect this rectangle" and "which item is at this point".
//!   [`StripLayout`] is a single-line implementation with uniform items and
//!   spacing.
//! - [`LayoutEngine`]: the paging strategy, with three capabilities: keep
//!   insets centered, choose snap targets, and produce per-item
//!   [`ItemAttributes`].
//! - [`SnapFadeLayout`]: the [`LayoutEngine`] implementation, configured with
//!   a [`FadeConfig`].
//! - [`PagingContainer`]: owns a [`ViewportState`] and a [`SnapFadeLayout`], and
//!   exposes page-oriented operations such as [`PagingContainer::current_page`]
//!   and [`PagingContainer::jump_to_page`].
//!
//! This crate does **not** render, measure content, or run scroll physics.
//! Host frameworks are responsible for:
//!
//! - Forwarding bounds changes, item count changes, and scroll offsets.
//! - Asking [`PagingContainer::end_dragging`] (or
//!   [`PagingContainer::target_content_offset`]) where a released scroll
//!   should stop, and decelerating there using
//!   [`PagingContainer::deceleration_rate`].
//! - Drawing items from [`PagingContainer::visible_attributes`], including
//!   their `alpha`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_pager::PagingContainer;
//!
//! // A 400 × 300 container showing 200-wide pages, ten of them.
//! let mut pager = PagingContainer::new(Rect::new(0.0, 0.0, 400.0, 300.0));
//! pager.set_item_spacing(0.0);
//! pager.set_item_extent(Size::new(200.0, 240.0));
//! pager.set_item_count(10);
//!
//! // Insets let the first page sit in the middle of the viewport.
//! assert_eq!(pager.content_inset().x0, 100.0);
//! assert_eq!(pager.current_page(), 0);
//!
//! // A drag released near page 1 snaps onto it.
//! let target = pager.end_dragging(Point::new(120.0, 0.0), Vec2::new(0.5, 0.0));
//! assert_eq!(target.x, 100.0);
//! assert_eq!(pager.current_page(), 1);
//!
//! pager.jump_to_page(7, false);
//! assert_eq!(pager.current_page(), 7);
//! ```
//!
//! ## Fading
//!
//! With fading enabled, horizontal layouts set each item's alpha from its
//! distance to a center line one item width past the current offset:
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_pager::PagingContainer;
//!
//! let mut pager = PagingContainer::new(Rect::new(0.0, 0.0, 400.0, 300.0));
//! pager.set_item_spacing(0.0);
//! pager.set_item_extent(Size::new(200.0, 240.0));
//! pager.set_item_count(10);
//! pager.set_fade_enabled(true);
//! pager.jump_to_page(2, false);
//!
//! for item in pager.visible_attributes() {
//!     let expected = if item.index == 2 { 1.0 } else { 0.3 };
//!     assert!((item.alpha - expected).abs() < 1e-9);
//! }
//! ```
//!
//! Enabling fading also makes bounds changes trigger layout passes (see
//! [`SnapFadeLayout`]). Vertical layouts are not faded.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `tracing`: emits `tracing` events for inset recomputation, snap decisions,
//!   and ignored page jumps.
//! - `serde`: derives `Serialize`/`Deserialize` for configuration types.
//!   Deserializing a [`PagingContainer`] always fails with
//!   [`PagingError::DecodeUnsupported`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod attributes;
mod axis;
mod container;
mod engine;
mod error;
mod flow;
mod viewport;

pub use attributes::{ElementCategory, ItemAttributes};
pub use axis::ScrollAxis;
pub use container::{DecelerationRate, PagingContainer, ScrollRequest};
pub use engine::{FadeConfig, InvalidationFlags, LayoutEngine, SnapFadeLayout};
pub use error::PagingError;
pub use flow::{FlowLayout, StripLayout};
pub use viewport::ViewportState;
