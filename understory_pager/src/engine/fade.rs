// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance-based item fading.

use super::SnapFadeLayout;
use crate::{FlowLayout, ItemAttributes, ScrollAxis, ViewportState};

/// Opacity falloff for items away from the center line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FadeConfig {
    /// Whether fading is applied at all.
    ///
    /// This also gates layout passes on bounds changes; see
    /// [`LayoutEngine::should_invalidate_for_bounds_change`].
    ///
    /// [`LayoutEngine::should_invalidate_for_bounds_change`]: crate::LayoutEngine::should_invalidate_for_bounds_change
    pub enabled: bool,
    /// Alpha of items one item-width or more away from the center line.
    pub min_alpha: f64,
    /// Alpha of an item sitting on the center line.
    pub max_alpha: f64,
}

impl FadeConfig {
    /// Default alpha floor.
    pub const DEFAULT_MIN_ALPHA: f64 = 0.3;

    /// Default alpha ceiling.
    pub const DEFAULT_MAX_ALPHA: f64 = 1.0;

    /// Alpha of an item whose center is `distance` away from the center line.
    ///
    /// Falls off linearly from `max_alpha` to `min_alpha` over one
    /// `item_extent` and stays at `min_alpha` beyond it.
    #[must_use]
    pub fn alpha_at(&self, distance: f64, item_extent: f64) -> f64 {
        let alpha = self.max_alpha - (self.max_alpha - self.min_alpha) * (distance / item_extent);
        // Not `clamp`: a misconfigured `min_alpha > max_alpha` must not panic.
        alpha.max(self.min_alpha).min(self.max_alpha)
    }
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_alpha: Self::DEFAULT_MIN_ALPHA,
            max_alpha: Self::DEFAULT_MAX_ALPHA,
        }
    }
}

impl<F: FlowLayout> SnapFadeLayout<F> {
    /// Assigns alphas to visible items by horizontal distance from the center line.
    ///
    /// The center line sits one item width past the current offset rather
    /// than at the viewport center. Vertical layouts are not faded yet and
    /// keep full opacity.
    pub(super) fn apply_fade(&self, viewport: &ViewportState, attributes: &mut [ItemAttributes]) {
        if !self.fade.enabled {
            return;
        }
        // TODO: fade along the vertical axis too.
        if self.flow.axis() != ScrollAxis::Horizontal {
            return;
        }
        let item_width = self.flow.item_extent().width;
        if item_width <= 0.0 {
            return;
        }

        let center_line = viewport.content_offset.x + item_width;
        for attrs in attributes.iter_mut().filter(|a| !a.is_hidden) {
            let distance = (attrs.center().x - center_line).abs();
            attrs.alpha = self.fade.alpha_at(distance, item_width);
        }
    }
}
