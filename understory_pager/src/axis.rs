// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll axis and helpers for projecting geometry onto it.

use kurbo::{Insets, Point, Size, Vec2};

/// The single dimension along which paging occurs.
///
/// Most of the paging math only cares about the *primary* component (the one
/// along the scroll axis). The helpers here project sizes, points, and
/// velocities onto that component and rebuild points from it, so callers do
/// not need to branch on the axis themselves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollAxis {
    /// Pages advance left to right.
    #[default]
    Horizontal,
    /// Pages advance top to bottom.
    Vertical,
}

impl ScrollAxis {
    /// Returns the extent of `size` along this axis.
    #[must_use]
    pub const fn primary_size(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Returns the extent of `size` across this axis.
    #[must_use]
    pub const fn cross_size(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Returns the component of `point` along this axis.
    #[must_use]
    pub const fn primary(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Returns the component of `velocity` along this axis.
    #[must_use]
    pub const fn primary_vec(self, velocity: Vec2) -> f64 {
        match self {
            Self::Horizontal => velocity.x,
            Self::Vertical => velocity.y,
        }
    }

    /// Builds a point from a component along this axis and one across it.
    #[must_use]
    pub const fn point(self, primary: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(primary, cross),
            Self::Vertical => Point::new(cross, primary),
        }
    }

    /// Builds a size from an extent along this axis and one across it.
    #[must_use]
    pub const fn size(self, primary: f64, cross: f64) -> Size {
        match self {
            Self::Horizontal => Size::new(primary, cross),
            Self::Vertical => Size::new(cross, primary),
        }
    }

    /// Replaces the component of `point` along this axis, keeping the cross component.
    #[must_use]
    pub const fn with_primary(self, point: Point, primary: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(primary, point.y),
            Self::Vertical => Point::new(point.x, primary),
        }
    }

    /// Insets of `inset` on both edges of this axis and zero on the other two.
    #[must_use]
    pub const fn symmetric_insets(self, inset: f64) -> Insets {
        match self {
            // kurbo insets are (left, top, right, bottom).
            Self::Horizontal => Insets::new(inset, 0.0, inset, 0.0),
            Self::Vertical => Insets::new(0.0, inset, 0.0, inset),
        }
    }

    /// Returns the inset on the leading edge: left when horizontal, top when vertical.
    #[must_use]
    pub const fn leading_inset(self, insets: Insets) -> f64 {
        match self {
            Self::Horizontal => insets.x0,
            Self::Vertical => insets.y0,
        }
    }

    /// Returns the inset on the trailing edge: right when horizontal, bottom when vertical.
    #[must_use]
    pub const fn trailing_inset(self, insets: Insets) -> f64 {
        match self {
            Self::Horizontal => insets.x1,
            Self::Vertical => insets.y1,
        }
    }
}
