// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paging layout strategy and its snap/fade implementation.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};

use crate::{FlowLayout, ItemAttributes, StripLayout, ViewportState};

mod fade;
mod insets;
mod snap;

pub use fade::FadeConfig;

use insets::InsetCache;

bitflags::bitflags! {
    /// Why a layout pass was requested.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InvalidationFlags: u8 {
        /// The viewport bounds changed.
        const BOUNDS      = 0b0000_0001;
        /// The shared item extent changed.
        const ITEM_EXTENT = 0b0000_0010;
        /// The scroll axis changed.
        const AXIS        = 0b0000_0100;
        /// The item count or spacing changed.
        const DATA        = 0b0000_1000;
    }
}

/// Strategy deciding insets, snap targets, and per-item attributes for a
/// paging container.
///
/// The container drives an engine from a single thread in this order: an
/// [`invalidate`](Self::invalidate) pass whenever geometry may have changed,
/// then any number of queries that read the resulting viewport state.
pub trait LayoutEngine {
    /// Whether a change of the viewport bounds to `new_bounds` should trigger
    /// a layout pass.
    fn should_invalidate_for_bounds_change(&self, new_bounds: Rect) -> bool;

    /// Runs a layout pass, writing insets and offset into `viewport` if needed.
    ///
    /// Returns `true` if the viewport was modified.
    fn invalidate(&mut self, flags: InvalidationFlags, viewport: &mut ViewportState) -> bool;

    /// Where a scroll that would naturally come to rest at `proposed`, released
    /// with `velocity`, should actually stop.
    fn target_content_offset(
        &self,
        viewport: &ViewportState,
        proposed: Point,
        velocity: Vec2,
    ) -> Point;

    /// Attributes of every element intersecting `rect`.
    fn attributes_in_rect(&self, viewport: &ViewportState, rect: Rect) -> Vec<ItemAttributes>;
}

/// Paging layout that centers the current item, snaps scrolling to item
/// centers, and optionally fades items away from the center.
///
/// This wraps a [`FlowLayout`] that positions items and adds:
///
/// - **Insets.** Leading and trailing insets of `(viewport - item) / 2` along
///   the axis so the first and last item can be centered. Insets and offset
///   are only rewritten when the viewport size or axis changed since the last
///   pass, so repeated passes do not fight the user's scrolling.
/// - **Snapping.** Scrolls come to rest with the nearest cell centered, or one
///   page further when a fast flick already carried the proposal past it.
/// - **Fading.** With [`FadeConfig::enabled`], horizontal layouts assign each
///   item an alpha that falls off linearly with its distance from a center line.
///
/// Bounds changes only trigger a layout pass while fading is enabled, since
/// fade alphas depend on the offset. Hosts that resize with fading disabled
/// must request a pass themselves to re-center the insets.
#[derive(Clone, Debug)]
pub struct SnapFadeLayout<F: FlowLayout = StripLayout> {
    flow: F,
    fade: FadeConfig,
    inset_cache: Option<InsetCache>,
}

impl<F: FlowLayout + Default> Default for SnapFadeLayout<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: FlowLayout> SnapFadeLayout<F> {
    /// Wraps `flow` with fading disabled.
    #[must_use]
    pub fn new(flow: F) -> Self {
        Self {
            flow,
            fade: FadeConfig::default(),
            inset_cache: None,
        }
    }

    /// Returns a shared reference to the underlying flow layout.
    #[must_use]
    pub fn flow(&self) -> &F {
        &self.flow
    }

    /// Returns a mutable reference to the underlying flow layout.
    ///
    /// Changes take effect on the next [`LayoutEngine::invalidate`].
    pub fn flow_mut(&mut self) -> &mut F {
        &mut self.flow
    }

    /// Current fade configuration.
    #[must_use]
    pub const fn fade(&self) -> FadeConfig {
        self.fade
    }

    /// Replaces the fade configuration.
    pub fn set_fade(&mut self, fade: FadeConfig) {
        self.fade = fade;
    }

    /// Forgets the viewport size and axis seen by the last pass, so the next
    /// pass recomputes insets unconditionally.
    pub fn reset_inset_cache(&mut self) {
        self.inset_cache = None;
    }
}

impl<F: FlowLayout> LayoutEngine for SnapFadeLayout<F> {
    fn should_invalidate_for_bounds_change(&self, _new_bounds: Rect) -> bool {
        self.fade.enabled
    }

    fn invalidate(&mut self, flags: InvalidationFlags, viewport: &mut ViewportState) -> bool {
        self.update_insets(flags, viewport)
    }

    fn target_content_offset(
        &self,
        viewport: &ViewportState,
        proposed: Point,
        velocity: Vec2,
    ) -> Point {
        self.snap_target(viewport, proposed, velocity)
    }

    fn attributes_in_rect(&self, viewport: &ViewportState, rect: Rect) -> Vec<ItemAttributes> {
        let mut attributes = self.flow.attributes_in_rect(rect);
        self.apply_fade(viewport, &mut attributes);
        attributes
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use alloc::vec::Vec;

    use kurbo::{Rect, Size};

    use crate::{FlowLayout, ItemAttributes, ScrollAxis};

    /// A flow layout over an explicit list of attributes.
    #[derive(Clone, Debug)]
    pub(crate) struct FixedItems {
        pub(crate) axis: ScrollAxis,
        pub(crate) extent: Size,
        pub(crate) spacing: f64,
        pub(crate) items: Vec<ItemAttributes>,
    }

    impl FixedItems {
        /// Cells of `extent` whose centers sit at the given positions along
        /// the axis, and at `extent / 2` across it.
        pub(crate) fn centered_at(axis: ScrollAxis, extent: Size, centers: &[f64]) -> Self {
            let half = Size::new(extent.width / 2.0, extent.height / 2.0);
            let cross = axis.cross_size(half);
            let items = centers
                .iter()
                .enumerate()
                .map(|(index, &center)| {
                    let frame = Rect::from_center_size(axis.point(center, cross), extent);
                    ItemAttributes::cell(index, frame)
                })
                .collect();
            Self {
                axis,
                extent,
                spacing: 0.0,
                items,
            }
        }
    }

    impl FlowLayout for FixedItems {
        fn axis(&self) -> ScrollAxis {
            self.axis
        }

        fn set_axis(&mut self, axis: ScrollAxis) {
            self.axis = axis;
        }

        fn item_extent(&self) -> Size {
            self.extent
        }

        fn set_item_extent(&mut self, extent: Size) {
            self.extent = extent;
        }

        fn item_spacing(&self) -> f64 {
            self.spacing
        }

        fn len(&self) -> usize {
            self.items.iter().filter(|a| a.is_cell()).count()
        }

        fn attributes_in_rect(&self, rect: Rect) -> Vec<ItemAttributes> {
            self.items
                .iter()
                .filter(|a| {
                    a.frame.x0 <= rect.x1
                        && a.frame.x1 >= rect.x0
                        && a.frame.y0 <= rect.y1
                        && a.frame.y1 >= rect.y0
                })
                .copied()
                .collect()
        }
    }
}
