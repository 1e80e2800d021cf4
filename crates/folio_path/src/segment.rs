//! Drawable path segments and their arc-length parameterisation.

use std::f64::consts::TAU;

use crate::point::Point;

/// A circular arc stored in center parameterisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub center: Point,
    pub radius: f64,
    /// Angle of the start point, in radians
    pub start_angle: f64,
    /// Signed sweep; positive is clockwise on screen (y down)
    pub sweep_angle: f64,
}

impl ArcSegment {
    /// Convert an SVG endpoint arc (`A r r 0 large sweep x y`) with a circular
    /// radius into center form.
    ///
    /// Returns `None` when the endpoints coincide (SVG omits such arcs). The
    /// caller is expected to treat a zero radius as a straight line.
    pub fn from_endpoints(
        from: Point,
        to: Point,
        radius: f64,
        large_arc: bool,
        sweep: bool,
    ) -> Option<Self> {
        if from == to {
            return None;
        }

        // Step 1: midpoint-relative start point
        let hx = (from.x - to.x) / 2.0;
        let hy = (from.y - to.y) / 2.0;
        let d2 = hx * hx + hy * hy;

        // Out-of-range radii are scaled up until the arc just fits
        let mut r = radius.abs();
        if d2 > r * r {
            r = d2.sqrt();
        }

        // Step 2: center in the midpoint frame
        let sign = if large_arc != sweep { 1.0 } else { -1.0 };
        let coef = sign * ((r * r - d2) / d2).max(0.0).sqrt();
        let cx_rel = coef * hy;
        let cy_rel = -coef * hx;

        let mid = from.midpoint(to);
        let center = Point::new(cx_rel + mid.x, cy_rel + mid.y);

        // Step 3: start angle and sweep
        let start_angle = (hy - cy_rel).atan2(hx - cx_rel);
        let end_angle = (-hy - cy_rel).atan2(-hx - cx_rel);
        let mut sweep_angle = end_angle - start_angle;
        if sweep && sweep_angle < 0.0 {
            sweep_angle += TAU;
        } else if !sweep && sweep_angle > 0.0 {
            sweep_angle -= TAU;
        }

        Some(Self {
            center,
            radius: r,
            start_angle,
            sweep_angle,
        })
    }

    /// Point on the circle at the given absolute angle.
    fn point_at_angle(&self, angle: f64) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    pub fn start(&self) -> Point {
        self.point_at_angle(self.start_angle)
    }

    pub fn end(&self) -> Point {
        self.point_at_angle(self.start_angle + self.sweep_angle)
    }

    pub fn length(&self) -> f64 {
        self.radius * self.sweep_angle.abs()
    }
}

/// A single measurable piece of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line { from: Point, to: Point },
    Arc(ArcSegment),
}

impl Segment {
    /// Arc length of this segment.
    pub fn length(&self) -> f64 {
        match self {
            Segment::Line { from, to } => from.distance(*to),
            Segment::Arc(arc) => arc.length(),
        }
    }

    pub fn start(&self) -> Point {
        match self {
            Segment::Line { from, .. } => *from,
            Segment::Arc(arc) => arc.start(),
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Segment::Line { to, .. } => *to,
            Segment::Arc(arc) => arc.end(),
        }
    }

    /// Point at `distance` along this segment, clamped to its extent.
    pub fn point_at_length(&self, distance: f64) -> Point {
        let length = self.length();
        if length <= 0.0 {
            return self.start();
        }
        let t = (distance / length).clamp(0.0, 1.0);
        match self {
            Segment::Line { from, to } => from.lerp(*to, t),
            Segment::Arc(arc) => arc.point_at_angle(arc.start_angle + arc.sweep_angle * t),
        }
    }
}
