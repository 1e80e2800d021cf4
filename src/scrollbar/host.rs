//! The seam between the scrollbar controller and whatever hosts it.
//!
//! On the web the host wraps the container, its content element and the two
//! SVG paths. Natively [`MemoryHost`] keeps everything in plain fields, which
//! is what the preview renderer and the tests drive.

use crate::error::Result;

/// Box metrics of the scroll container (the element carrying the border).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerMetrics {
    pub width: f64,
    pub height: f64,
    /// Computed border radius in pixels (0 when unset or unparseable)
    pub border_radius: f64,
}

/// Scroll metrics of the content element inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentMetrics {
    pub client_height: f64,
    pub scroll_height: f64,
    pub scroll_top: f64,
}

impl ContentMetrics {
    /// Largest valid `scroll_top` (0 when the content does not overflow).
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }
}

/// `parseFloat` semantics for CSS lengths: the leading number, or 0.
///
/// Used on computed `border-radius`, which may hold two values
/// (`"12px 8px"`); the first one wins.
pub fn parse_css_px(value: &str) -> f64 {
    let value = value.trim_start();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(value.len(), |(i, _)| i);
    value[..end].parse().unwrap_or(0.0)
}

/// Vertical extent of the container in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportRect {
    pub top: f64,
    pub height: f64,
}

/// Everything the curved scrollbar reads from and writes to its surroundings.
pub trait ScrollHost {
    fn container(&self) -> ContainerMetrics;

    fn content(&self) -> ContentMetrics;

    /// Container bounds relative to the viewport, for pointer mapping.
    fn container_rect(&self) -> ViewportRect;

    fn set_scroll_top(&mut self, scroll_top: f64);

    /// Replace the track path data.
    fn set_track_path(&mut self, d: &str);

    /// Replace the thumb path data.
    fn set_thumb_path(&mut self, d: &str);

    fn capture_pointer(&mut self, pointer_id: i32) -> Result<()>;

    fn release_pointer(&mut self, pointer_id: i32) -> Result<()>;
}

/// A host backed by plain values.
///
/// `set_scroll_top` clamps to the content's scroll range, as browsers do.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    pub container: ContainerMetrics,
    pub content: ContentMetrics,
    pub rect: ViewportRect,
    pub track_d: String,
    pub thumb_d: String,
    pub captured: Option<i32>,
}

impl MemoryHost {
    /// A host whose container sits at the top of the viewport.
    pub fn new(container: ContainerMetrics, content: ContentMetrics) -> Self {
        Self {
            container,
            content,
            rect: ViewportRect {
                top: 0.0,
                height: container.height,
            },
            ..Default::default()
        }
    }
}

impl ScrollHost for MemoryHost {
    fn container(&self) -> ContainerMetrics {
        self.container
    }

    fn content(&self) -> ContentMetrics {
        self.content
    }

    fn container_rect(&self) -> ViewportRect {
        self.rect
    }

    fn set_scroll_top(&mut self, scroll_top: f64) {
        self.content.scroll_top = scroll_top.clamp(0.0, self.content.max_scroll());
    }

    fn set_track_path(&mut self, d: &str) {
        self.track_d = d.to_string();
    }

    fn set_thumb_path(&mut self, d: &str) {
        self.thumb_d = d.to_string();
    }

    fn capture_pointer(&mut self, pointer_id: i32) -> Result<()> {
        self.captured = Some(pointer_id);
        Ok(())
    }

    fn release_pointer(&mut self, pointer_id: i32) -> Result<()> {
        match self.captured {
            Some(id) if id == pointer_id => {
                self.captured = None;
                Ok(())
            }
            _ => Err(crate::error::WidgetError::Dom(format!(
                "pointer {} is not captured",
                pointer_id
            ))),
        }
    }
}
