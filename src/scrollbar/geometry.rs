//! Track geometry: the upside-down "D" hugging the container's right edge.

use folio_path::{Path, PathBuilder, Point};

use crate::config::ScrollbarConfig;
use super::host::ContainerMetrics;

/// Anchor coordinates of the track, all in container space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Corner radius after removing the inset (never negative)
    pub effective_radius: f64,
    /// X of the vertical run along the right edge
    pub track_x: f64,
    pub top_y: f64,
    pub bottom_y: f64,
    /// X where the corner arcs meet the horizontal runs
    pub corner_x: f64,
    /// X where the top and bottom runs begin
    pub start_x: f64,
}

impl TrackGeometry {
    /// Derive the track anchors from the container box.
    ///
    /// Degenerate boxes are clamped so no coordinate goes negative and the
    /// two corner arcs never overlap.
    pub fn compute(container: &ContainerMetrics, config: &ScrollbarConfig) -> Self {
        let w = container.width.max(0.0);
        let h = container.height.max(0.0);
        let offset = config.offset;

        let track_x = (w - offset).max(0.0);
        let top_y = offset;
        let bottom_y = (h - offset).max(top_y);

        let effective_radius = (container.border_radius - offset)
            .max(0.0)
            .min((bottom_y - top_y) / 2.0)
            .min(track_x);
        let corner_x = track_x - effective_radius;

        // Start far enough left to show the corner, but never past the corner
        // itself and never further left than the minimum start ratio allows
        let min_start_x = w * config.min_start_ratio;
        let start_x = (track_x - effective_radius * config.extra_inset)
            .max(min_start_x)
            .min(corner_x);

        Self {
            effective_radius,
            track_x,
            top_y,
            bottom_y,
            corner_x,
            start_x,
        }
    }

    /// Build the track: top run, corner arc, right edge, corner arc, bottom run.
    pub fn to_path(&self) -> Path {
        let r = self.effective_radius;
        PathBuilder::new()
            .move_to(Point::new(self.start_x, self.top_y))
            .line_to(Point::new(self.corner_x, self.top_y))
            .arc_to(r, false, true, Point::new(self.track_x, self.top_y + r))
            .line_to(Point::new(self.track_x, self.bottom_y - r))
            .arc_to(r, false, true, Point::new(self.corner_x, self.bottom_y))
            .line_to(Point::new(self.start_x, self.bottom_y))
            .build()
    }
}
