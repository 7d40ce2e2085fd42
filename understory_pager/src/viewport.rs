// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll surface state shared between the container and its layout.

use kurbo::{Insets, Point, Rect, Size, Vec2};

/// Size, scroll position, and content insets of the scroll surface.
///
/// The container owns this value. Layouts receive it by reference and only
/// write through the `&mut` handed to [`LayoutEngine::invalidate`].
///
/// `content_offset` follows the usual scroll-view convention: it is the point
/// of the content that sits at the viewport's top-left corner, so a leading
/// inset of `n` is revealed by an offset of `-n`.
///
/// [`LayoutEngine::invalidate`]: crate::LayoutEngine::invalidate
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Size of the visible region.
    pub size: Size,
    /// Content point at the viewport's origin.
    pub content_offset: Point,
    /// Padding around the content.
    pub content_inset: Insets,
}

impl ViewportState {
    /// A viewport of `size` at offset zero with no insets.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            content_offset: Point::ZERO,
            content_inset: Insets::ZERO,
        }
    }

    /// Geometric center of the viewport in content coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        self.content_offset + Vec2::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// The visible region in content coordinates.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.content_offset, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::ViewportState;
    use kurbo::{Point, Rect, Size};

    #[test]
    fn center_and_visible_rect_follow_the_offset() {
        let mut viewport = ViewportState::new(Size::new(200.0, 100.0));
        assert_eq!(viewport.center(), Point::new(100.0, 50.0));

        viewport.content_offset = Point::new(-50.0, 10.0);
        assert_eq!(viewport.center(), Point::new(50.0, 60.0));
        assert_eq!(
            viewport.visible_rect(),
            Rect::new(-50.0, 10.0, 150.0, 110.0)
        );
    }
}
