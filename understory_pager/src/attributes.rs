// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item layout output.

use kurbo::{Point, Rect};

/// What kind of element a set of [`ItemAttributes`] describes.
///
/// Only [`ElementCategory::Cell`] participates in page snapping; headers,
/// footers, and decorations are laid out but never chosen as a snap target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementCategory {
    /// A regular item supplied by the host's data source.
    #[default]
    Cell,
    /// A header, footer, or other view attached to a section.
    Supplementary,
    /// A purely visual element owned by the layout.
    Decoration,
}

/// Layout attributes of a single element for one layout query.
///
/// Attributes are produced fresh for every query and are not cached by the
/// layout. `alpha` is the only field the paging layout adjusts; everything
/// else comes from the flow layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemAttributes {
    /// Index of the element within its category.
    pub index: usize,
    /// Kind of element.
    pub category: ElementCategory,
    /// Frame in content coordinates.
    pub frame: Rect,
    /// Hidden elements are left untouched by fading.
    pub is_hidden: bool,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl ItemAttributes {
    /// Attributes for a visible, fully opaque cell.
    #[must_use]
    pub const fn cell(index: usize, frame: Rect) -> Self {
        Self {
            index,
            category: ElementCategory::Cell,
            frame,
            is_hidden: false,
            alpha: 1.0,
        }
    }

    /// Returns the same attributes with a different category.
    #[must_use]
    pub const fn with_category(mut self, category: ElementCategory) -> Self {
        self.category = category;
        self
    }

    /// Returns the same attributes marked hidden.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }

    /// Center of the frame.
    #[must_use]
    pub fn center(&self) -> Point {
        self.frame.center()
    }

    /// Returns `true` if this is a [`ElementCategory::Cell`].
    #[must_use]
    pub fn is_cell(&self) -> bool {
        self.category == ElementCategory::Cell
    }
}
