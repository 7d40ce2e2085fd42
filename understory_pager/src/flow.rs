// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flow layout a paging layout builds on, and a single-line implementation.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::{ItemAttributes, ScrollAxis};

/// Item placement that a paging layout decorates.
///
/// A flow layout knows where every item lives in content coordinates and
/// answers rectangle queries. It knows nothing about insets, snapping, or
/// opacity; those are the job of a [`LayoutEngine`] wrapped around it.
///
/// All items share one extent. The distance from the start of one page to the
/// start of the next is [`FlowLayout::page_stride`].
///
/// [`LayoutEngine`]: crate::LayoutEngine
pub trait FlowLayout {
    /// Called at the start of every layout pass with the current viewport size.
    fn prepare(&mut self, viewport: Size) {
        let _ = viewport;
    }

    /// Axis along which items are laid out.
    fn axis(&self) -> ScrollAxis;

    /// Changes the axis along which items are laid out.
    fn set_axis(&mut self, axis: ScrollAxis);

    /// Size shared by every item.
    fn item_extent(&self) -> Size;

    /// Changes the size shared by every item.
    fn set_item_extent(&mut self, extent: Size);

    /// Gap between consecutive items along the axis.
    fn item_spacing(&self) -> f64;

    /// Number of cells.
    fn len(&self) -> usize;

    /// Returns `true` if there are no cells.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Attributes of every element whose frame intersects `rect`.
    ///
    /// Edges count as intersecting. Results must come back in a deterministic
    /// order (ascending index for cells) since snapping breaks ties by order.
    fn attributes_in_rect(&self, rect: Rect) -> Vec<ItemAttributes>;

    /// Index of the visible cell whose frame contains `point`, if any.
    fn index_at_point(&self, point: Point) -> Option<usize> {
        self.attributes_in_rect(Rect::from_points(point, point))
            .into_iter()
            .find(|attrs| attrs.is_cell() && !attrs.is_hidden && attrs.frame.contains(point))
            .map(|attrs| attrs.index)
    }

    /// Distance along the axis from one item's start to the next.
    fn page_stride(&self) -> f64 {
        self.axis().primary_size(self.item_extent()) + self.item_spacing()
    }
}

/// Flow layout placing `len` uniform items on a single line.
///
/// Item `i` starts at `i * (extent + spacing)` along the axis and is centered
/// across it within the viewport most recently passed to
/// [`FlowLayout::prepare`].
///
/// Defaults mirror the usual platform flow layout: `50 × 50` items with `10`
/// units of spacing.
#[derive(Clone, Debug)]
pub struct StripLayout {
    axis: ScrollAxis,
    item_extent: Size,
    spacing: f64,
    len: usize,
    cross_extent: f64,
}

impl Default for StripLayout {
    fn default() -> Self {
        Self::new(ScrollAxis::Horizontal)
    }
}

impl StripLayout {
    /// Default size shared by every item.
    pub const DEFAULT_ITEM_EXTENT: Size = Size::new(50.0, 50.0);

    /// Default gap between consecutive items.
    pub const DEFAULT_SPACING: f64 = 10.0;

    /// An empty strip along `axis` with default item extent and spacing.
    #[must_use]
    pub fn new(axis: ScrollAxis) -> Self {
        Self {
            axis,
            item_extent: Self::DEFAULT_ITEM_EXTENT,
            spacing: Self::DEFAULT_SPACING,
            len: 0,
            cross_extent: 0.0,
        }
    }

    /// Sets the number of items in the strip.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Sets the gap between consecutive items.
    pub fn set_spacing(&mut self, spacing: f64) {
        debug_assert!(
            spacing.is_finite(),
            "StripLayout spacing must be finite; got {spacing:?}"
        );
        self.spacing = spacing.max(0.0);
    }

    /// Frame of item `index` in content coordinates.
    ///
    /// The index is not bounds-checked.
    #[must_use]
    pub fn frame_of(&self, index: usize) -> Rect {
        let start = index as f64 * self.page_stride();
        let cross = (self.cross_extent - self.axis.cross_size(self.item_extent)) / 2.0;
        Rect::from_origin_size(self.axis.point(start, cross.max(0.0)), self.item_extent)
    }

    /// First index whose item could reach `offset` along the axis.
    fn first_index_near(&self, offset: f64) -> usize {
        let stride = self.page_stride();
        if self.len == 0 || stride <= 0.0 || offset <= 0.0 {
            return 0;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Offset is positive and the index is clamped to bounds immediately after the cast"
        )]
        let i = (offset / stride) as usize;
        // Step back one so an item straddling `offset` is not skipped.
        i.saturating_sub(1).min(self.len - 1)
    }
}

impl FlowLayout for StripLayout {
    fn prepare(&mut self, viewport: Size) {
        self.cross_extent = self.axis.cross_size(viewport);
    }

    fn axis(&self) -> ScrollAxis {
        self.axis
    }

    fn set_axis(&mut self, axis: ScrollAxis) {
        self.axis = axis;
    }

    fn item_extent(&self) -> Size {
        self.item_extent
    }

    fn set_item_extent(&mut self, extent: Size) {
        // Extents are expected to be finite. Catch NaNs (and infinities) in
        // debug builds so misuse does not go unnoticed.
        debug_assert!(
            extent.is_finite(),
            "StripLayout item extents must be finite; got {extent:?}"
        );
        // Clamp finite negative values to `0.0`.
        self.item_extent = Size::new(extent.width.max(0.0), extent.height.max(0.0));
    }

    fn item_spacing(&self) -> f64 {
        self.spacing
    }

    fn len(&self) -> usize {
        self.len
    }

    fn attributes_in_rect(&self, rect: Rect) -> Vec<ItemAttributes> {
        let mut out = Vec::new();
        if self.len == 0 {
            return out;
        }
        let rect = rect.abs();
        let query_start = self.axis.primary(Point::new(rect.x0, rect.y0));
        let query_end = self.axis.primary(Point::new(rect.x1, rect.y1));
        for index in self.first_index_near(query_start)..self.len {
            let frame = self.frame_of(index);
            if self.axis.primary(frame.origin()) > query_end {
                break;
            }
            if overlaps(frame, rect) {
                out.push(ItemAttributes::cell(index, frame));
            }
        }
        out
    }

    fn index_at_point(&self, point: Point) -> Option<usize> {
        let stride = self.page_stride();
        if self.len == 0 || stride <= 0.0 {
            return None;
        }
        let index = self.first_index_near(self.axis.primary(point));
        // At most two items can be near a single offset.
        (index..self.len.min(index.saturating_add(3))).find(|&i| self.frame_of(i).contains(point))
    }
}

/// Edge-inclusive rectangle overlap.
fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{FlowLayout, StripLayout};
    use crate::ScrollAxis;
    use kurbo::{Point, Rect, Size};

    fn strip(len: usize) -> StripLayout {
        let mut strip = StripLayout::new(ScrollAxis::Horizontal);
        strip.set_item_extent(Size::new(200.0, 100.0));
        strip.set_spacing(0.0);
        strip.set_len(len);
        strip.prepare(Size::new(400.0, 300.0));
        strip
    }

    #[test]
    fn frames_are_strided_and_cross_centered() {
        let mut strip = strip(4);
        assert_eq!(strip.frame_of(0), Rect::new(0.0, 100.0, 200.0, 200.0));
        assert_eq!(strip.frame_of(2), Rect::new(400.0, 100.0, 600.0, 200.0));

        strip.set_spacing(10.0);
        assert_eq!(strip.page_stride(), 210.0);
        assert_eq!(strip.frame_of(2).x0, 420.0);
    }

    #[test]
    fn vertical_strip_lays_out_top_to_bottom() {
        let mut strip = StripLayout::new(ScrollAxis::Vertical);
        strip.set_item_extent(Size::new(100.0, 50.0));
        strip.set_spacing(0.0);
        strip.set_len(3);
        strip.prepare(Size::new(300.0, 200.0));
        assert_eq!(strip.frame_of(1), Rect::new(100.0, 50.0, 200.0, 100.0));
        assert_eq!(strip.page_stride(), 50.0);
    }

    #[test]
    fn rect_queries_return_intersecting_cells_in_order() {
        let strip = strip(4);
        let hits: Vec<_> = strip
            .attributes_in_rect(Rect::new(190.0, 0.0, 390.0, 300.0))
            .iter()
            .map(|a| a.index)
            .collect();
        assert_eq!(hits, [0, 1]);

        let hits: Vec<_> = strip
            .attributes_in_rect(Rect::new(-500.0, 0.0, 10_000.0, 300.0))
            .iter()
            .map(|a| a.index)
            .collect();
        assert_eq!(hits, [0, 1, 2, 3]);

        assert!(
            strip
                .attributes_in_rect(Rect::new(900.0, 0.0, 1_000.0, 300.0))
                .is_empty()
        );
    }

    #[test]
    fn point_lookup_finds_containing_cell() {
        let strip = strip(4);
        assert_eq!(strip.index_at_point(Point::new(100.0, 150.0)), Some(0));
        assert_eq!(strip.index_at_point(Point::new(450.0, 150.0)), Some(2));
        // Above the centered row.
        assert_eq!(strip.index_at_point(Point::new(450.0, 10.0)), None);
        // Past the end.
        assert_eq!(strip.index_at_point(Point::new(900.0, 150.0)), None);
        assert_eq!(strip.index_at_point(Point::new(-20.0, 150.0)), None);
    }

    #[test]
    fn point_lookup_near_the_last_possible_index_does_not_overflow() {
        let strip = strip(usize::MAX);
        let point = strip.frame_of(usize::MAX - 1).center();
        let hit = strip.index_at_point(point);
        assert!(hit.is_none_or(|i| i < usize::MAX));
    }

    #[test]
    fn empty_strip_has_no_attributes() {
        let strip = strip(0);
        assert!(strip.is_empty());
        assert!(
            strip
                .attributes_in_rect(Rect::new(0.0, 0.0, 400.0, 300.0))
                .is_empty()
        );
        assert_eq!(strip.index_at_point(Point::new(10.0, 150.0)), None);
    }

    #[test]
    fn negative_extents_are_clamped_to_zero() {
        let mut strip = StripLayout::default();
        strip.set_item_extent(Size::new(-5.0, 20.0));
        assert_eq!(strip.item_extent(), Size::new(0.0, 20.0));
        strip.set_spacing(-3.0);
        assert_eq!(strip.item_spacing(), 0.0);
    }
}
