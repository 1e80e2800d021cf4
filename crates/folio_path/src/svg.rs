//! SVG path data serialisation.

use crate::point::Point;

const FLOAT_EPSILON: f64 = 1e-6;

/// Format a coordinate for path data: integers without a fraction, others
/// with at most three decimals and trailing zeros trimmed.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if (value - value.round()).abs() < FLOAT_EPSILON {
        format!("{}", value.round() as i64)
    } else {
        let formatted = format!("{:.3}", value);
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

pub(crate) fn format_point(p: Point) -> String {
    format!("{} {}", format_number(p.x), format_number(p.y))
}

/// Path data for an open polyline through `points`: `M p0 L p1 L p2 ...`.
///
/// Returns an empty string for no points.
pub fn polyline_d(points: &[Point]) -> String {
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return String::new();
    };
    let mut d = format!("M {}", format_point(*first));
    for p in iter {
        d.push_str(" L ");
        d.push_str(&format_point(*p));
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(993.0), "993");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(1.23456), "1.235");
        assert_eq!(format_number(f64::NAN), "0");
    }

    #[test]
    fn test_polyline() {
        let points = [Point::new(0.0, 0.0), Point::new(1.5, 2.0), Point::new(3.0, 4.0)];
        assert_eq!(polyline_d(&points), "M 0 0 L 1.5 2 L 3 4");
        assert_eq!(polyline_d(&[]), "");
    }
}
