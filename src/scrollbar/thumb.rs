//! Thumb sizing and placement along the track.

use super::host::ContentMetrics;

/// Thumb length for a track of `path_length`, proportional to the visible
/// share of the content.
///
/// Never shorter than `min_thumb` and never longer than the track itself
/// (a track shorter than `min_thumb` is covered entirely).
pub fn thumb_length(path_length: f64, content: &ContentMetrics, min_thumb: f64) -> f64 {
    let visible_ratio = if content.scroll_height > 0.0 {
        (content.client_height / content.scroll_height).clamp(0.0, 1.0)
    } else {
        1.0
    };
    (path_length * visible_ratio)
        .max(min_thumb)
        .min(path_length.max(0.0))
}

/// Scroll position as a ratio in `[0, 1]`.
///
/// Content that does not overflow uses a scrollable height of 1, so the
/// ratio stays defined (and is 0 for a zero `scroll_top`).
pub fn scroll_ratio(content: &ContentMetrics) -> f64 {
    let scrollable = content.scroll_height - content.client_height;
    let scrollable = if scrollable > 0.0 { scrollable } else { 1.0 };
    (content.scroll_top / scrollable).clamp(0.0, 1.0)
}

/// `scroll_top` that corresponds to a ratio of the scroll range.
pub fn scroll_top_for_ratio(ratio: f64, content: &ContentMetrics) -> f64 {
    ratio.clamp(0.0, 1.0) * content.max_scroll()
}

/// The stretch of the track currently covered by the thumb.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbSegment {
    /// Distance along the track where the thumb begins
    pub start: f64,
    /// Distance along the track where the thumb ends
    pub end: f64,
}

impl ThumbSegment {
    /// Place a thumb of `thumb_length` so its travel maps `scroll_ratio`
    /// onto the free part of the track.
    pub fn locate(path_length: f64, thumb_length: f64, scroll_ratio: f64) -> Self {
        let travel = (path_length - thumb_length).max(0.0);
        let start = travel * scroll_ratio.clamp(0.0, 1.0);
        Self {
            start,
            end: start + thumb_length,
        }
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn content(client_height: f64, scroll_height: f64, scroll_top: f64) -> ContentMetrics {
        ContentMetrics {
            client_height,
            scroll_height,
            scroll_top,
        }
    }

    #[test]
    fn test_thumb_length_proportional() {
        let len = thumb_length(400.0, &content(200.0, 800.0, 0.0), 20.0);
        assert!((len - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_thumb_length_minimum() {
        let len = thumb_length(400.0, &content(10.0, 10_000.0, 0.0), 20.0);
        assert_eq!(len, 20.0);
    }

    #[test]
    fn test_thumb_length_capped_to_track() {
        assert_eq!(thumb_length(12.0, &content(200.0, 800.0, 0.0), 20.0), 12.0);
        assert_eq!(thumb_length(400.0, &content(200.0, 200.0, 0.0), 20.0), 400.0);
        assert_eq!(thumb_length(400.0, &content(0.0, 0.0, 0.0), 20.0), 400.0);
    }

    #[test]
    fn test_thumb_length_bounds_grid() {
        for path_length in [20.0, 50.0, 300.0, 1200.0] {
            for (client, scroll) in [(100.0, 100.0), (100.0, 150.0), (300.0, 9000.0), (1.0, 1e6)] {
                let len = thumb_length(path_length, &content(client, scroll, 0.0), 20.0);
                assert!(len >= 20.0, "{len} < min for {path_length}/{client}/{scroll}");
                assert!(len <= path_length);
            }
        }
    }

    #[test]
    fn test_scroll_ratio_no_overflow() {
        assert_eq!(scroll_ratio(&content(300.0, 300.0, 0.0)), 0.0);
        assert_eq!(scroll_ratio(&content(300.0, 200.0, 0.0)), 0.0);
    }

    #[test]
    fn test_scroll_ratio_clamped() {
        assert_eq!(scroll_ratio(&content(100.0, 300.0, 100.0)), 0.5);
        assert_eq!(scroll_ratio(&content(100.0, 300.0, -20.0)), 0.0);
        assert_eq!(scroll_ratio(&content(100.0, 300.0, 250.0)), 1.0);
    }

    #[test]
    fn test_segment_within_track() {
        let path_length = 360.0;
        let c = content(200.0, 900.0, 0.0);
        let thumb = thumb_length(path_length, &c, 20.0);
        let max = c.max_scroll();
        for step in 0..=20 {
            let scroll_top = max * step as f64 / 20.0;
            let ratio = scroll_ratio(&content(200.0, 900.0, scroll_top));
            let seg = ThumbSegment::locate(path_length, thumb, ratio);
            assert!(seg.start >= 0.0);
            assert!(seg.end <= path_length + EPSILON);
            assert!((seg.length() - thumb).abs() < EPSILON);
        }
    }

    #[test]
    fn test_scroll_top_for_ratio() {
        let c = content(100.0, 500.0, 0.0);
        assert_eq!(scroll_top_for_ratio(0.0, &c), 0.0);
        assert_eq!(scroll_top_for_ratio(1.0, &c), 400.0);
        assert_eq!(scroll_top_for_ratio(2.0, &c), 400.0);
    }
}
