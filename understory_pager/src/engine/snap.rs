// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap target selection at the end of a scroll.

use kurbo::{Point, Rect, Vec2};

use super::SnapFadeLayout;
use crate::{FlowLayout, ViewportState};

impl<F: FlowLayout> SnapFadeLayout<F> {
    /// Picks the offset that centers the cell nearest to the proposed
    /// viewport center.
    ///
    /// When the proposal already lies past that cell in the direction of
    /// travel (a fast flick), the result advances one more page in that
    /// direction. With no cell in view the proposal is returned unchanged.
    pub(super) fn snap_target(
        &self,
        viewport: &ViewportState,
        proposed: Point,
        velocity: Vec2,
    ) -> Point {
        let axis = self.flow.axis();
        let viewport_extent = axis.primary_size(viewport.size);
        let proposed_offset = axis.primary(proposed);
        let proposed_center = proposed_offset + viewport_extent / 2.0;
        let query = Rect::from_origin_size(axis.point(proposed_offset, 0.0), viewport.size);

        // (center, distance); strict `<` keeps the first of equally near cells.
        let mut candidate: Option<(f64, f64)> = None;
        for attrs in self.flow.attributes_in_rect(query) {
            if !attrs.is_cell() {
                continue;
            }
            let center = axis.primary(attrs.center());
            let distance = (center - proposed_center).abs();
            if candidate.is_none_or(|(_, best)| distance < best) {
                candidate = Some((center, distance));
            }
        }

        let Some((center, _)) = candidate else {
            return proposed;
        };

        let mut target = center - viewport_extent / 2.0;
        let delta = target - axis.primary(viewport.content_offset);
        let speed = axis.primary_vec(velocity);
        if (speed < 0.0 && delta > 0.0) || (speed > 0.0 && delta < 0.0) {
            let stride = self.flow.page_stride();
            target += if speed > 0.0 { stride } else { -stride };
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(proposed_offset, speed, delta, target, "snapped scroll target");
        axis.with_primary(proposed, target)
    }
}
