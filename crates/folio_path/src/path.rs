//! Path building, measurement and sampling.

use crate::point::Point;
use crate::segment::{ArcSegment, Segment};
use crate::svg::{format_number, format_point};

/// A drawing command as it appears in SVG path data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc: `A r r 0 large_arc sweep to`
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
}

/// Builder for a [`Path`], mirroring SVG path commands.
///
/// # Example
/// ```
/// use folio_path::{PathBuilder, Point};
///
/// let path = PathBuilder::new()
///     .move_to(Point::new(0.0, 0.0))
///     .line_to(Point::new(10.0, 0.0))
///     .build();
/// assert_eq!(path.total_length(), 10.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: Vec<Command>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new subpath at `to`.
    pub fn move_to(mut self, to: Point) -> Self {
        self.commands.push(Command::MoveTo(to));
        self
    }

    /// Straight line from the current point to `to`.
    pub fn line_to(mut self, to: Point) -> Self {
        self.commands.push(Command::LineTo(to));
        self
    }

    /// Circular arc from the current point to `to`.
    pub fn arc_to(mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) -> Self {
        self.commands.push(Command::ArcTo {
            radius,
            large_arc,
            sweep,
            to,
        });
        self
    }

    /// Resolve commands into measurable segments.
    pub fn build(self) -> Path {
        let mut segments = Vec::with_capacity(self.commands.len());
        let mut current: Option<Point> = None;

        for command in &self.commands {
            match *command {
                Command::MoveTo(to) => current = Some(to),
                Command::LineTo(to) => {
                    let from = current.unwrap_or(to);
                    segments.push(Segment::Line { from, to });
                    current = Some(to);
                }
                Command::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let from = current.unwrap_or(to);
                    if radius == 0.0 {
                        // Zero radius degrades to a straight line
                        segments.push(Segment::Line { from, to });
                    } else if let Some(arc) =
                        ArcSegment::from_endpoints(from, to, radius, large_arc, sweep)
                    {
                        segments.push(Segment::Arc(arc));
                    }
                    current = Some(to);
                }
            }
        }

        let mut cumulative = Vec::with_capacity(segments.len());
        let mut total = 0.0;
        for segment in &segments {
            total += segment.length();
            cumulative.push(total);
        }

        let origin = self.commands.iter().find_map(|c| match c {
            Command::MoveTo(p) => Some(*p),
            _ => None,
        });

        Path {
            commands: self.commands,
            segments,
            cumulative,
            origin: origin.unwrap_or_default(),
        }
    }
}

/// An immutable, measured path.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    commands: Vec<Command>,
    segments: Vec<Segment>,
    /// Running length at the end of each segment
    cumulative: Vec<f64>,
    origin: Point,
}

impl Path {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total arc length of every drawn segment (moves contribute nothing).
    pub fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Point at `distance` along the path.
    ///
    /// Distances outside `[0, total_length]` are clamped, matching
    /// `SVGGeometryElement.getPointAtLength`.
    pub fn point_at_length(&self, distance: f64) -> Point {
        let Some(first) = self.segments.first() else {
            return self.origin;
        };
        if distance.is_nan() || distance <= 0.0 {
            return first.start();
        }

        let index = self.cumulative.partition_point(|&end| end < distance);
        match self.segments.get(index) {
            Some(segment) => {
                let segment_start = if index == 0 {
                    0.0
                } else {
                    self.cumulative[index - 1]
                };
                segment.point_at_length(distance - segment_start)
            }
            None => self.segments[self.segments.len() - 1].end(),
        }
    }

    /// `segments + 1` points equally spaced by arc length between `start`
    /// and `end`, inclusive.
    pub fn sample(&self, start: f64, end: f64, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        let step = (end - start) / segments as f64;
        (0..=segments)
            .map(|i| self.point_at_length(start + step * i as f64))
            .collect()
    }

    /// Serialise to SVG path data (`d` attribute).
    pub fn to_svg_d(&self) -> String {
        self.commands
            .iter()
            .map(|command| match *command {
                Command::MoveTo(p) => format!("M {}", format_point(p)),
                Command::LineTo(p) => format!("L {}", format_point(p)),
                Command::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let r = format_number(radius);
                    format!(
                        "A {} {} 0 {} {} {}",
                        r,
                        r,
                        u8::from(large_arc),
                        u8::from(sweep),
                        format_point(to)
                    )
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Line, quarter arc, line: an "L" with a rounded corner
    fn rounded_corner() -> Path {
        PathBuilder::new()
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(10.0, 0.0))
            .arc_to(10.0, false, true, Point::new(20.0, 10.0))
            .line_to(Point::new(20.0, 30.0))
            .build()
    }

    #[test]
    fn test_total_length() {
        let path = rounded_corner();
        assert_eq!(path.segments().len(), 3);
        assert!(approx_eq(path.total_length(), 10.0 + 10.0 * FRAC_PI_2 + 20.0));
    }

    #[test]
    fn test_point_at_length_across_segments() {
        let path = rounded_corner();
        assert_eq!(path.point_at_length(0.0), Point::new(0.0, 0.0));
        assert_eq!(path.point_at_length(5.0), Point::new(5.0, 0.0));

        let after_arc = 10.0 + 10.0 * FRAC_PI_2;
        let p = path.point_at_length(after_arc + 5.0);
        assert!(approx_eq(p.x, 20.0));
        assert!(approx_eq(p.y, 15.0));
    }

    #[test]
    fn test_point_at_length_clamps() {
        let path = rounded_corner();
        assert_eq!(path.point_at_length(-10.0), Point::new(0.0, 0.0));
        let end = path.point_at_length(1e6);
        assert!(approx_eq(end.x, 20.0));
        assert!(approx_eq(end.y, 30.0));
    }

    #[test]
    fn test_empty_path() {
        let path = PathBuilder::new().move_to(Point::new(3.0, 4.0)).build();
        assert!(path.is_empty());
        assert_eq!(path.total_length(), 0.0);
        assert_eq!(path.point_at_length(10.0), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_zero_radius_arc_is_line() {
        let path = PathBuilder::new()
            .move_to(Point::new(0.0, 0.0))
            .arc_to(0.0, false, true, Point::new(0.0, 8.0))
            .build();
        assert!(matches!(path.segments()[0], Segment::Line { .. }));
        assert!(approx_eq(path.total_length(), 8.0));
    }

    #[test]
    fn test_sample_count_and_bounds() {
        let path = rounded_corner();
        let points = path.sample(2.0, 12.0, 50);
        assert_eq!(points.len(), 51);
        assert_eq!(points[0], Point::new(2.0, 0.0));
        assert_eq!(points[50], path.point_at_length(12.0));
    }

    #[test]
    fn test_sample_zero_segments_guarded() {
        let path = rounded_corner();
        assert_eq!(path.sample(0.0, 5.0, 0).len(), 2);
    }

    #[test]
    fn test_svg_d() {
        let path = rounded_corner();
        assert_eq!(path.to_svg_d(), "M 0 0 L 10 0 A 10 10 0 0 1 20 10 L 20 30");
    }
}
