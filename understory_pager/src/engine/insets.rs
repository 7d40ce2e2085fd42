// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Centering insets.

use kurbo::Size;

use super::{InvalidationFlags, SnapFadeLayout};
use crate::{FlowLayout, ScrollAxis, ViewportState};

/// Viewport size and axis seen by the last inset computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct InsetCache {
    size: Size,
    axis: ScrollAxis,
}

impl<F: FlowLayout> SnapFadeLayout<F> {
    /// Recomputes insets and resets the offset if the viewport size or axis
    /// changed since the last pass. Returns whether anything was written.
    pub(super) fn update_insets(
        &mut self,
        flags: InvalidationFlags,
        viewport: &mut ViewportState,
    ) -> bool {
        if flags.intersects(InvalidationFlags::ITEM_EXTENT | InvalidationFlags::AXIS) {
            self.inset_cache = None;
        }
        self.flow.prepare(viewport.size);

        let axis = self.flow.axis();
        let current = InsetCache {
            size: viewport.size,
            axis,
        };
        if self.inset_cache == Some(current) {
            return false;
        }

        let inset = (axis.primary_size(viewport.size) - axis.primary_size(self.flow.item_extent()))
            / 2.0;
        viewport.content_inset = axis.symmetric_insets(inset);
        viewport.content_offset = axis.point(-inset, 0.0);
        self.inset_cache = Some(current);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            ?axis,
            inset,
            width = viewport.size.width,
            height = viewport.size.height,
            "recomputed centering insets"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        FlowLayout, InvalidationFlags, LayoutEngine, ScrollAxis, SnapFadeLayout, StripLayout,
        ViewportState,
    };
    use kurbo::{Point, Size};

    fn layout(axis: ScrollAxis, item: Size) -> SnapFadeLayout {
        let mut flow = StripLayout::new(axis);
        flow.set_item_extent(item);
        flow.set_len(8);
        SnapFadeLayout::new(flow)
    }

    #[test]
    fn horizontal_insets_center_first_and_last_item() {
        for (width, item_width) in [(320.0, 160.0), (375.0, 300.0), (200.0, 200.0), (1024.0, 1.0)] {
            let mut layout = layout(ScrollAxis::Horizontal, Size::new(item_width, 50.0));
            let mut viewport = ViewportState::new(Size::new(width, 100.0));
            assert!(layout.invalidate(InvalidationFlags::BOUNDS, &mut viewport));

            let expected = (width - item_width) / 2.0;
            let insets = viewport.content_inset;
            assert_eq!(insets.x0, expected);
            assert_eq!(insets.x1, expected);
            assert_eq!((insets.y0, insets.y1), (0.0, 0.0));
            assert_eq!(viewport.content_offset, Point::new(-expected, 0.0));
        }
    }

    #[test]
    fn vertical_insets_use_heights() {
        let mut layout = layout(ScrollAxis::Vertical, Size::new(80.0, 100.0));
        let mut viewport = ViewportState::new(Size::new(300.0, 400.0));
        layout.invalidate(InvalidationFlags::empty(), &mut viewport);

        let insets = viewport.content_inset;
        assert_eq!((insets.x0, insets.y0, insets.x1, insets.y1), (0.0, 150.0, 0.0, 150.0));
        assert_eq!(viewport.content_offset, Point::new(0.0, -150.0));
    }

    #[test]
    fn repeated_pass_with_same_geometry_leaves_offset_alone() {
        let mut layout = layout(ScrollAxis::Horizontal, Size::new(100.0, 50.0));
        let mut viewport = ViewportState::new(Size::new(300.0, 100.0));
        assert!(layout.invalidate(InvalidationFlags::empty(), &mut viewport));

        // The user scrolls; a second pass must not snap the offset back.
        viewport.content_offset = Point::new(240.0, 0.0);
        assert!(!layout.invalidate(InvalidationFlags::empty(), &mut viewport));
        assert_eq!(viewport.content_offset, Point::new(240.0, 0.0));
    }

    #[test]
    fn size_or_axis_change_recomputes() {
        let mut layout = layout(ScrollAxis::Horizontal, Size::new(100.0, 100.0));
        let mut viewport = ViewportState::new(Size::new(300.0, 300.0));
        layout.invalidate(InvalidationFlags::empty(), &mut viewport);

        viewport.size = Size::new(500.0, 300.0);
        assert!(layout.invalidate(InvalidationFlags::BOUNDS, &mut viewport));
        assert_eq!(viewport.content_inset.x0, 200.0);

        // The cache notices an axis change even without the flag.
        layout.flow_mut().set_axis(ScrollAxis::Vertical);
        assert!(layout.invalidate(InvalidationFlags::empty(), &mut viewport));
        assert_eq!(viewport.content_inset.y0, 100.0);
        assert_eq!(viewport.content_inset.x0, 0.0);
        assert_eq!(viewport.content_offset, Point::new(0.0, -100.0));
    }

    #[test]
    fn item_extent_flag_drops_the_cache() {
        let mut layout = layout(ScrollAxis::Horizontal, Size::new(100.0, 100.0));
        let mut viewport = ViewportState::new(Size::new(300.0, 300.0));
        layout.invalidate(InvalidationFlags::empty(), &mut viewport);

        layout.flow_mut().set_item_extent(Size::new(200.0, 100.0));
        // Same viewport and axis: without the flag nothing changes...
        assert!(!layout.invalidate(InvalidationFlags::DATA, &mut viewport));
        assert_eq!(viewport.content_inset.x0, 100.0);
        // ...with it, insets follow the new extent.
        assert!(layout.invalidate(InvalidationFlags::ITEM_EXTENT, &mut viewport));
        assert_eq!(viewport.content_inset.x0, 50.0);
        assert_eq!(viewport.content_offset.x, -50.0);
    }
}
