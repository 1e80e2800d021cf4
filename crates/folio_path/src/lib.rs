//! folio_path - 2D path geometry for SVG-drawn widgets
//!
//! Paths are built from the same commands SVG uses (`M`, `L`, circular `A`)
//! and can be measured and sampled by arc length, so widgets can place
//! shapes along a curve without a browser's `getPointAtLength`.

mod path;
mod point;
mod segment;
mod svg;

pub use path::{Path, PathBuilder};
pub use point::Point;
pub use segment::{ArcSegment, Segment};
pub use svg::{format_number, polyline_d};
