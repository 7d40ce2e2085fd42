// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scroll container that pages through uniform items.

use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, Size, Vec2};

use crate::{
    FlowLayout, InvalidationFlags, ItemAttributes, LayoutEngine, PagingError, ScrollAxis,
    SnapFadeLayout, StripLayout, ViewportState,
};

/// How quickly a released scroll slows down.
///
/// Values are the per-millisecond velocity multiplier hosts use when
/// animating deceleration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DecelerationRate {
    /// Long, coasting deceleration.
    Normal,
    /// Short deceleration, so a snap lands promptly on its target.
    Fast,
}

impl DecelerationRate {
    /// Per-millisecond velocity multiplier.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Normal => 0.998,
            Self::Fast => 0.99,
        }
    }
}

/// An offset change the host should animate to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollRequest {
    /// Content offset to animate to.
    pub offset: Point,
}

/// A horizontally paging scroll container.
///
/// The container owns the [`ViewportState`] and exactly one
/// [`SnapFadeLayout`], created by [`PagingContainer::new`]; there is no way to
/// attach a different layout. Hosts forward bounds changes, data changes, and
/// scroll-end events, then read back the viewport and per-item attributes to
/// draw.
///
/// Offsets change immediately in the model. Animated changes additionally
/// leave a [`ScrollRequest`] for the host to pick up with
/// [`PagingContainer::take_scroll_request`].
#[derive(Clone, Debug)]
pub struct PagingContainer {
    frame: Rect,
    viewport: ViewportState,
    layout: SnapFadeLayout<StripLayout>,
    deceleration: DecelerationRate,
    pending_scroll: Option<ScrollRequest>,
}

impl PagingContainer {
    /// Creates an empty horizontal container occupying `frame`.
    ///
    /// Items default to [`StripLayout::DEFAULT_ITEM_EXTENT`]; set the real
    /// extent with [`PagingContainer::set_item_extent`].
    #[must_use]
    pub fn new(frame: Rect) -> Self {
        let frame = frame.abs();
        let mut container = Self {
            frame,
            viewport: ViewportState::new(frame.size()),
            layout: SnapFadeLayout::new(StripLayout::new(ScrollAxis::Horizontal)),
            deceleration: DecelerationRate::Fast,
            pending_scroll: None,
        };
        container.invalidate(InvalidationFlags::BOUNDS);
        container
    }

    /// Frame of the container in its parent's coordinates.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// Current viewport state.
    #[must_use]
    pub const fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Current content offset.
    #[must_use]
    pub const fn content_offset(&self) -> Point {
        self.viewport.content_offset
    }

    /// Current content insets.
    #[must_use]
    pub const fn content_inset(&self) -> Insets {
        self.viewport.content_inset
    }

    /// The layout driving this container.
    #[must_use]
    pub const fn layout(&self) -> &SnapFadeLayout<StripLayout> {
        &self.layout
    }

    /// Deceleration preset hosts should use for released scrolls.
    #[must_use]
    pub const fn deceleration_rate(&self) -> DecelerationRate {
        self.deceleration
    }

    /// Axis along which pages advance.
    #[must_use]
    pub fn scroll_axis(&self) -> ScrollAxis {
        self.layout.flow().axis()
    }

    /// Changes the paging axis and recomputes insets.
    pub fn set_scroll_axis(&mut self, axis: ScrollAxis) {
        self.layout.flow_mut().set_axis(axis);
        self.invalidate(InvalidationFlags::AXIS);
    }

    /// Size shared by every item.
    #[must_use]
    pub fn item_extent(&self) -> Size {
        self.layout.flow().item_extent()
    }

    /// Changes the size shared by every item and recomputes insets.
    pub fn set_item_extent(&mut self, extent: Size) {
        self.layout.flow_mut().set_item_extent(extent);
        self.invalidate(InvalidationFlags::ITEM_EXTENT);
    }

    /// Gap between consecutive items.
    #[must_use]
    pub fn item_spacing(&self) -> f64 {
        self.layout.flow().item_spacing()
    }

    /// Changes the gap between consecutive items.
    pub fn set_item_spacing(&mut self, spacing: f64) {
        self.layout.flow_mut().set_spacing(spacing);
        self.invalidate(InvalidationFlags::DATA);
    }

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.layout.flow().len()
    }

    /// Replaces the number of items, as after a data reload.
    pub fn set_item_count(&mut self, len: usize) {
        self.layout.flow_mut().set_len(len);
        self.invalidate(InvalidationFlags::DATA);
    }

    /// Enables or disables fading.
    ///
    /// While fading is disabled, bounds changes do not trigger layout passes;
    /// call [`PagingContainer::invalidate_layout`] after resizing.
    pub fn set_fade_enabled(&mut self, enabled: bool) {
        let mut fade = self.layout.fade();
        fade.enabled = enabled;
        self.layout.set_fade(fade);
    }

    /// Sets the alpha of items far from the center line, clamped to `[0, 1]`.
    pub fn set_fade_min_alpha(&mut self, alpha: f64) {
        let mut fade = self.layout.fade();
        fade.min_alpha = unit_alpha(alpha);
        self.layout.set_fade(fade);
    }

    /// Sets the alpha of an item on the center line, clamped to `[0, 1]`.
    pub fn set_fade_max_alpha(&mut self, alpha: f64) {
        let mut fade = self.layout.fade();
        fade.max_alpha = unit_alpha(alpha);
        self.layout.set_fade(fade);
    }

    /// Distance along the axis between the starts of consecutive pages.
    #[must_use]
    pub fn page_stride(&self) -> f64 {
        self.layout.flow().page_stride()
    }

    /// Resizes the viewport.
    ///
    /// Item placement always follows the new size. Whether insets are
    /// recomputed is up to [`LayoutEngine::should_invalidate_for_bounds_change`].
    pub fn set_bounds_size(&mut self, size: Size) {
        self.frame = Rect::from_origin_size(self.frame.origin(), size);
        self.viewport.size = size;
        self.layout.flow_mut().prepare(size);
        self.bounds_did_change();
    }

    /// Runs a layout pass now.
    ///
    /// Insets are only rewritten if the viewport size or axis changed since
    /// the last pass.
    pub fn invalidate_layout(&mut self) {
        self.invalidate(InvalidationFlags::empty());
    }

    /// Index of the item under the viewport center, or `0` if there is none.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.layout
            .flow()
            .index_at_point(self.viewport.center())
            .unwrap_or(0)
    }

    /// Scrolls so that item `index` is centered.
    ///
    /// Out-of-range indices are ignored. Use
    /// [`PagingContainer::try_jump_to_page`] to learn about them.
    pub fn jump_to_page(&mut self, index: usize, animated: bool) {
        if let Err(_err) = self.try_jump_to_page(index, animated) {
            #[cfg(feature = "tracing")]
            tracing::debug!(%_err, "ignored page jump");
        }
    }

    /// Scrolls so that item `index` is centered, or reports why it cannot.
    ///
    /// The new offset is `index * stride - leading_inset` along the axis and
    /// `0` across it.
    pub fn try_jump_to_page(&mut self, index: usize, animated: bool) -> Result<(), PagingError> {
        let len = self.item_count();
        if index >= len {
            return Err(PagingError::PageOutOfRange { index, len });
        }
        let axis = self.scroll_axis();
        let offset =
            index as f64 * self.page_stride() - axis.leading_inset(self.viewport.content_inset);
        self.set_content_offset(axis.point(offset, 0.0), animated);
        Ok(())
    }

    /// Where a scroll released at `proposed` with `velocity` should come to rest.
    #[must_use]
    pub fn target_content_offset(&self, proposed: Point, velocity: Vec2) -> Point {
        self.layout
            .target_content_offset(&self.viewport, proposed, velocity)
    }

    /// Finishes a drag: snaps `proposed` to a page and animates there.
    ///
    /// Returns the snapped offset.
    pub fn end_dragging(&mut self, proposed: Point, velocity: Vec2) -> Point {
        let target = self.target_content_offset(proposed, velocity);
        self.set_content_offset(target, true);
        target
    }

    /// Moves the content offset.
    ///
    /// An animated move leaves a [`ScrollRequest`]; an immediate one cancels
    /// any request not yet taken.
    pub fn set_content_offset(&mut self, offset: Point, animated: bool) {
        self.viewport.content_offset = offset;
        self.pending_scroll = animated.then_some(ScrollRequest { offset });
        self.bounds_did_change();
    }

    /// Takes the pending animated scroll, if any.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending_scroll.take()
    }

    /// Attributes of every element in the visible region.
    #[must_use]
    pub fn visible_attributes(&self) -> Vec<ItemAttributes> {
        self.layout
            .attributes_in_rect(&self.viewport, self.viewport.visible_rect())
    }

    fn bounds_did_change(&mut self) {
        let bounds = self.viewport.visible_rect();
        if self.layout.should_invalidate_for_bounds_change(bounds) {
            self.invalidate(InvalidationFlags::BOUNDS);
        }
    }

    fn invalidate(&mut self, flags: InvalidationFlags) {
        self.layout.invalidate(flags, &mut self.viewport);
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PagingContainer {
    fn deserialize<D: serde::Deserializer<'de>>(_deserializer: D) -> Result<Self, D::Error> {
        Err(serde::de::Error::custom(PagingError::DecodeUnsupported))
    }
}

fn unit_alpha(alpha: f64) -> f64 {
    debug_assert!(alpha.is_finite(), "fade alpha must be finite; got {alpha:?}");
    alpha.clamp(0.0, 1.0)
}
