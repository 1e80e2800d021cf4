//! Curved scrollbar controller.
//!
//! A scrollbar whose track follows the container's rounded right edge and
//! whose thumb is drawn as a polyline sampled along that curve. Each
//! container owns one [`CurvedScrollbar`]; all state (track, thumb, drag
//! session) lives in that instance.
//!
//! The controller never touches the DOM directly. It reads metrics from and
//! writes path data to a [`ScrollHost`], and is driven by
//! [`ScrollbarEvent`]s translated from browser events.

mod drag;
mod geometry;
mod host;
mod thumb;

pub use drag::{pointer_ratio, DragState};
pub use geometry::TrackGeometry;
pub use host::{
    parse_css_px, ContainerMetrics, ContentMetrics, MemoryHost, ScrollHost, ViewportRect,
};
pub use thumb::{scroll_ratio, scroll_top_for_ratio, thumb_length, ThumbSegment};

use folio_path::{polyline_d, Path};

use crate::config::ScrollbarConfig;
use crate::constants::SCROLLBAR_INITIAL_THUMB;
use crate::error::Result;

/// Input events the scrollbar reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollbarEvent {
    /// The content element scrolled
    Scrolled,
    /// The window (and possibly the container) resized
    Resized,
    /// A pointer was pressed on the thumb
    PointerDown { pointer_id: i32 },
    /// A pointer moved anywhere in the window
    PointerMove { pointer_id: i32, client_y: f64 },
    /// A pointer was released anywhere in the window
    PointerUp { pointer_id: i32 },
    /// The thumb lost pointer capture
    PointerCaptureLost { pointer_id: i32 },
}

/// Per-container scrollbar state.
#[derive(Debug, Clone)]
pub struct CurvedScrollbar {
    config: ScrollbarConfig,
    track: Option<Path>,
    path_length: f64,
    thumb_length: f64,
    thumb: ThumbSegment,
    scroll_ratio: f64,
    drag: DragState,
}

impl CurvedScrollbar {
    /// Create a controller that has not measured anything yet.
    pub fn new(config: ScrollbarConfig) -> Self {
        Self {
            config,
            track: None,
            path_length: 0.0,
            thumb_length: SCROLLBAR_INITIAL_THUMB,
            thumb: ThumbSegment::default(),
            scroll_ratio: 0.0,
            drag: DragState::Idle,
        }
    }

    /// Create a controller and draw it for the first time.
    pub fn attach(config: ScrollbarConfig, host: &mut impl ScrollHost) -> Self {
        let mut scrollbar = Self::new(config);
        scrollbar.update_path(host);
        scrollbar
    }

    pub fn config(&self) -> &ScrollbarConfig {
        &self.config
    }

    /// The current track, if it has been laid out.
    pub fn track(&self) -> Option<&Path> {
        self.track.as_ref()
    }

    pub fn path_length(&self) -> f64 {
        self.path_length
    }

    pub fn thumb_length(&self) -> f64 {
        self.thumb_length
    }

    pub fn thumb(&self) -> ThumbSegment {
        self.thumb
    }

    pub fn scroll_ratio(&self) -> f64 {
        self.scroll_ratio
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Rebuild the track from the container box, resize the thumb, then
    /// reposition it.
    pub fn update_path(&mut self, host: &mut impl ScrollHost) {
        let container = host.container();
        let geometry = TrackGeometry::compute(&container, &self.config);
        let track = geometry.to_path();
        host.set_track_path(&track.to_svg_d());

        self.path_length = track.total_length();
        self.thumb_length = thumb_length(self.path_length, &host.content(), self.config.min_thumb);

        log::debug!(
            "Scrollbar track {}x{} r={}: {} segments, length {:.1}, thumb {:.1}",
            container.width,
            container.height,
            geometry.effective_radius,
            track.segments().len(),
            self.path_length,
            self.thumb_length
        );
        self.track = Some(track);

        self.update_thumb(host);
    }

    /// Reposition the thumb for the content's current scroll offset.
    pub fn update_thumb(&mut self, host: &mut impl ScrollHost) {
        let Some(track) = &self.track else {
            return;
        };

        self.scroll_ratio = scroll_ratio(&host.content());
        self.thumb = ThumbSegment::locate(self.path_length, self.thumb_length, self.scroll_ratio);

        // Dense sampling keeps the polyline on the corner arcs
        let points = track.sample(self.thumb.start, self.thumb.end, self.config.segments);
        host.set_thumb_path(&polyline_d(&points));
    }

    /// Apply one input event. Returns true if the event was consumed.
    pub fn handle(&mut self, host: &mut impl ScrollHost, event: ScrollbarEvent) -> bool {
        match event {
            ScrollbarEvent::Scrolled => {
                self.update_thumb(host);
                true
            }
            ScrollbarEvent::Resized => {
                self.update_path(host);
                true
            }
            ScrollbarEvent::PointerDown { pointer_id } => {
                if !self.drag.begin(pointer_id) {
                    return false;
                }
                if let Err(e) = host.capture_pointer(pointer_id) {
                    log::debug!("Pointer capture failed for {}: {}", pointer_id, e);
                }
                log::debug!("Scrollbar drag started (pointer {})", pointer_id);
                true
            }
            ScrollbarEvent::PointerMove {
                pointer_id,
                client_y,
            } => {
                if !self.drag.is_active_for(pointer_id) {
                    return false;
                }
                let ratio = pointer_ratio(client_y, &host.container_rect());
                let scroll_top = scroll_top_for_ratio(ratio, &host.content());
                host.set_scroll_top(scroll_top);
                self.update_thumb(host);
                true
            }
            ScrollbarEvent::PointerUp { pointer_id } => {
                if !self.drag.end(pointer_id) {
                    return false;
                }
                // Capture may already be gone (e.g. the element was re-parented)
                if let Err(e) = host.release_pointer(pointer_id) {
                    log::debug!("Pointer release ignored for {}: {}", pointer_id, e);
                }
                log::debug!("Scrollbar drag ended (pointer {})", pointer_id);
                true
            }
            ScrollbarEvent::PointerCaptureLost { pointer_id } => {
                if !self.drag.end(pointer_id) {
                    return false;
                }
                log::debug!("Scrollbar drag cancelled (pointer {})", pointer_id);
                true
            }
        }
    }
}

/// Attach a scrollbar to each container, skipping the ones `attach` rejects.
///
/// A rejected container is logged and leaves the others untouched.
pub fn attach_each<C, H>(
    containers: impl IntoIterator<Item = C>,
    mut attach: impl FnMut(C) -> Result<H>,
) -> Vec<H> {
    containers
        .into_iter()
        .filter_map(|container| match attach(container) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("Skipping scrollbar container: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SCROLL_CONTENT_CLASS;
    use crate::error::WidgetError;

    const EPSILON: f64 = 1e-6;

    fn host(width: f64, height: f64, radius: f64, scroll_height: f64) -> MemoryHost {
        let mut host = MemoryHost::new(
            ContainerMetrics {
                width,
                height,
                border_radius: radius,
            },
            ContentMetrics {
                client_height: height,
                scroll_height,
                scroll_top: 0.0,
            },
        );
        host.rect.top = 50.0;
        host
    }

    #[test]
    fn test_attach_draws_track_and_thumb() {
        let mut h = host(400.0, 300.0, 27.0, 1200.0);
        let bar = CurvedScrollbar::attach(ScrollbarConfig::default(), &mut h);
        assert!(h.track_d.starts_with("M 353 7 L 373 7"));
        assert!(h.thumb_d.starts_with("M 353 7 L"));
        assert_eq!(h.thumb_d.matches(" L ").count(), 50);
        assert!(bar.path_length() > 0.0);
        assert!((bar.thumb_length() - bar.path_length() * 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_update_thumb_before_layout_is_noop() {
        let mut h = host(400.0, 300.0, 27.0, 1200.0);
        let mut bar = CurvedScrollbar::new(ScrollbarConfig::default());
        bar.update_thumb(&mut h);
        assert!(h.thumb_d.is_empty());
        assert_eq!(bar.thumb_length(), SCROLLBAR_INITIAL_THUMB);
    }

    #[test]
    fn test_update_path_is_idempotent() {
        let mut h = host(400.0, 300.0, 27.0, 1200.0);
        h.content.scroll_top = 333.0;
        let mut bar = CurvedScrollbar::attach(ScrollbarConfig::default(), &mut h);
        let (track, thumb, segment) = (h.track_d.clone(), h.thumb_d.clone(), bar.thumb());
        bar.update_path(&mut h);
        assert_eq!(h.track_d, track);
        assert_eq!(h.thumb_d, thumb);
        assert_eq!(bar.thumb(), segment);
    }

    #[test]
    fn test_scroll_moves_thumb_within_track() {
        let mut h = host(400.0, 300.0, 27.0, 1200.0);
        let mut bar = CurvedScrollbar::attach(ScrollbarConfig::default(), &mut h);
        let max = h.content.max_scroll();
        for step in 0..=10 {
            h.content.scroll_top = max * step as f64 / 10.0;
            assert!(bar.handle(&mut h, ScrollbarEvent::Scrolled));
            let seg = bar.thumb();
            assert!(seg.start >= 0.0);
            assert!(seg.end <= bar.path_length() + EPSILON);
        }
        assert!((bar.thumb().end - bar.path_length()).abs() < EPSILON);
    }

    #[test]
    fn test_no_overflow_ratio_is_zero() {
        let mut h = host(400.0, 300.0, 27.0, 300.0);
        let bar = CurvedScrollbar::attach(ScrollbarConfig::default(), &mut h);
        assert_eq!(bar.scroll_ratio(), 0.0);
        assert_eq!(bar.thumb().start, 0.0);
        assert!((bar.thumb_length() - bar.path_length()).abs() < EPSILON);
    }

    #[test]
    fn test_zero_width_container_does_not_panic() {
        let mut h = host(0.0, 300.0, 40.0, 900.0);
        let bar = CurvedScrollbar::attach(ScrollbarConfig::default(), &mut h);
        assert!(bar.path_length().is_finite());
        assert!(!h.track_d.contains('-'));
        assert!(!h.thumb_d.contains("NaN"));
    }

    #[test]
    fn test_resize_recomputes_path() {
        let mut h = host(400.0, 300.0, 27.0, 1200.0);
        let mut bar = CurvedScrollbar::attach(ScrollbarConfig::default(), &mut h);
        let before = bar.path_length();
        h.container.height = 500.0;
        h.content.client_height = 500.0;
        assert!(bar.handle(&mut h, ScrollbarEvent::Resized));
        assert!((bar.path_length() - (before + 200.0)).abs() < EPSILON);
    }

    #[test]
    fn test_drag_to_top_and_bottom() {
        let mut h = host(400.0, 300.0, 27.0, 1200.0);
        h.content.scroll_top = 400.0;
        let mut bar = CurvedScrollbar::attach(ScrollbarConfig::default(), &mut h);

        assert!(bar.handle(&mut h, ScrollbarEvent::PointerDown { pointer_id: 1 }));
        assert_eq!(h.captured, Some(1));

        bar.handle(&mut h, ScrollbarEvent::PointerMove { pointer_id: 1, client_y: 50.0 });
        assert_eq!(h.content.scroll_top, 0.0);
        assert_eq!(bar.scroll_ratio(), 0.0);

        bar.handle(&mut h, ScrollbarEvent::PointerMove { pointer_id: 1, client_y: 350.0 });
        assert_eq!(h.content.scroll_top, 900.0);

        // Beyond the container the ratio clamps
        bar.handle(&mut h, ScrollbarEvent::PointerMove { pointer_id: 1, client_y: 2000.0 });
        assert_eq!(h.content.scroll_top, 900.0);
        assert_eq!(bar.scroll_ratio(), 1.0);

        bar.handle(&mut h, ScrollbarEvent::PointerMove { pointer_id: 1, client_y: 200.0 });
        assert!((h.content.scroll_top - 450.0).abs() < EPSILON);
    }

    #[test]
    fn test_foreign_pointer_is_ignored() {
        let mut h = host(400.0, 300.0, 27.0, 1200.0);
        let mut bar = CurvedScrollbar::attach(ScrollbarConfig::default(), &mut h);
        bar.handle(&mut h, ScrollbarEvent::PointerDown { pointer_id: 1 });
        h.content.scroll_top = 120.0;
        let thumb = h.thumb_d.clone();

        assert!(!bar.handle(
            &mut h,
            ScrollbarEvent::PointerMove {
                pointer_id: 2,
                client_y: 350.0,
            }
        ));
        assert_eq!(h.content.scroll_top, 120.0);
        assert_eq!(h.thumb_d, thumb);

        // A second press does not steal the session
        assert!(!bar.handle(&mut h, ScrollbarEvent::PointerDown { pointer_id: 2 }));
        assert!(!bar.handle(&mut h, ScrollbarEvent::PointerUp { pointer_id: 2 }));
        assert_eq!(bar.drag_state(), DragState::Dragging { pointer_id: 1 });
    }

    #[test]
    fn test_moves_ignored_when_idle() {
        let mut h = host(400.0, 300.0, 27.0, 1200.0);
        let mut bar = CurvedScrollbar::attach(ScrollbarConfig::default(), &mut h);
        assert!(!bar.handle(
            &mut h,
            ScrollbarEvent::PointerMove {
                pointer_id: 1,
                client_y: 350.0,
            }
        ));
        assert_eq!(h.content.scroll_top, 0.0);
    }

    #[test]
    fn test_pointer_up_releases_capture() {
        let mut h = host(400.0, 300.0, 27.0, 1200.0);
        let mut bar = CurvedScrollbar::attach(ScrollbarConfig::default(), &mut h);
        bar.handle(&mut h, ScrollbarEvent::PointerDown { pointer_id: 7 });
        assert!(bar.handle(&mut h, ScrollbarEvent::PointerUp { pointer_id: 7 }));
        assert_eq!(h.captured, None);
        assert_eq!(bar.drag_state(), DragState::Idle);

        bar.handle(&mut h, ScrollbarEvent::PointerMove { pointer_id: 7, client_y: 350.0 });
        assert_eq!(h.content.scroll_top, 0.0);
    }

    #[test]
    fn test_release_failure_is_tolerated() {
        let mut h = host(400.0, 300.0, 27.0, 1200.0);
        let mut bar = CurvedScrollbar::attach(ScrollbarConfig::default(), &mut h);
        bar.handle(&mut h, ScrollbarEvent::PointerDown { pointer_id: 3 });
        // Capture vanished behind our back
        h.captured = None;
        assert!(bar.handle(&mut h, ScrollbarEvent::PointerUp { pointer_id: 3 }));
        assert_eq!(bar.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_capture_lost_ends_drag() {
        let mut h = host(400.0, 300.0, 27.0, 1200.0);
        let mut bar = CurvedScrollbar::attach(ScrollbarConfig::default(), &mut h);
        bar.handle(&mut h, ScrollbarEvent::PointerDown { pointer_id: 5 });
        assert!(!bar.handle(&mut h, ScrollbarEvent::PointerCaptureLost { pointer_id: 6 }));
        assert!(bar.handle(&mut h, ScrollbarEvent::PointerCaptureLost { pointer_id: 5 }));
        assert!(!bar.drag_state().is_dragging());
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut h1 = host(400.0, 300.0, 27.0, 1200.0);
        let mut h2 = host(200.0, 150.0, 10.0, 150.0);
        let mut a = CurvedScrollbar::attach(ScrollbarConfig::default(), &mut h1);
        let b = CurvedScrollbar::attach(ScrollbarConfig::default(), &mut h2);
        a.handle(&mut h1, ScrollbarEvent::PointerDown { pointer_id: 1 });
        assert!(a.drag_state().is_dragging());
        assert!(!b.drag_state().is_dragging());
        assert!(a.path_length() != b.path_length());
    }

    #[test]
    fn test_container_without_content_is_skipped() {
        // `None` stands for a container with no content element
        let containers = vec![
            Some(host(400.0, 300.0, 27.0, 1200.0)),
            None,
            Some(host(200.0, 150.0, 12.0, 150.0)),
        ];
        let attached = attach_each(containers, |container| {
            let mut h = container
                .ok_or_else(|| WidgetError::missing(format!(".{}", SCROLL_CONTENT_CLASS)))?;
            let bar = CurvedScrollbar::attach(ScrollbarConfig::default(), &mut h);
            Ok((bar, h))
        });

        assert_eq!(attached.len(), 2);
        for (bar, h) in &attached {
            assert!(h.track_d.starts_with("M "));
            assert!(h.thumb_d.starts_with("M "));
            assert!(bar.path_length() > 0.0);
        }
        assert_eq!(attached[1].1.container.width, 200.0);
    }
}
