//! Page scroll progress indicator.
//!
//! Two presentations share one model: a horizontal bar whose width tracks
//! the scroll percentage, and a "back to top" ring filled with a conic
//! gradient that only appears once the page has scrolled a little.

use crate::config::ProgressConfig;

/// How the progress is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressStyle {
    /// Width of a bar, in percent
    #[default]
    Bar,
    /// Conic-gradient ring, hidden near the top, click scrolls to top
    Ring,
}

/// Document scroll metrics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

/// Scroll position in percent, within `[0, 100]`.
///
/// A page that does not overflow reports 0.
pub fn scroll_percent(page: &PageMetrics) -> f64 {
    let scrollable = page.scroll_height - page.client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (page.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Computed presentation for one scroll position.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    pub percent: f64,
    pub visible: bool,
}

/// Progress indicator model.
#[derive(Debug, Clone)]
pub struct ScrollProgress {
    style: ProgressStyle,
    config: ProgressConfig,
}

impl ScrollProgress {
    pub fn new(style: ProgressStyle, config: ProgressConfig) -> Self {
        Self { style, config }
    }

    pub fn style(&self) -> ProgressStyle {
        self.style
    }

    /// Evaluate the indicator for the current page position.
    pub fn update(&self, page: &PageMetrics) -> ProgressState {
        let percent = scroll_percent(page);
        match self.style {
            ProgressStyle::Bar => ProgressState {
                percent,
                visible: true,
            },
            ProgressStyle::Ring => ProgressState {
                percent: percent.round(),
                visible: page.scroll_top > self.config.show_after,
            },
        }
    }

    /// Inline `width` for the bar style.
    pub fn bar_width(&self, state: &ProgressState) -> String {
        format!("{}%", folio_path::format_number(state.percent))
    }

    /// Inline `background` for the ring style.
    pub fn ring_background(&self, state: &ProgressState) -> String {
        let p = folio_path::format_number(state.percent);
        format!(
            "conic-gradient({} {}%, {} {}%)",
            self.config.fill_color, p, self.config.track_color, p
        )
    }

    /// Inline `display` for the ring style.
    pub fn ring_display(&self, state: &ProgressState) -> &'static str {
        if state.visible { "grid" } else { "none" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(scroll_top: f64) -> PageMetrics {
        PageMetrics {
            scroll_top,
            scroll_height: 3000.0,
            client_height: 1000.0,
        }
    }

    #[test]
    fn test_percent() {
        assert_eq!(scroll_percent(&page(0.0)), 0.0);
        assert_eq!(scroll_percent(&page(500.0)), 25.0);
        assert_eq!(scroll_percent(&page(2000.0)), 100.0);
        assert_eq!(scroll_percent(&page(2500.0)), 100.0);
    }

    #[test]
    fn test_percent_without_overflow() {
        let short = PageMetrics {
            scroll_top: 0.0,
            scroll_height: 800.0,
            client_height: 800.0,
        };
        assert_eq!(scroll_percent(&short), 0.0);
    }

    #[test]
    fn test_bar() {
        let progress = ScrollProgress::new(ProgressStyle::Bar, ProgressConfig::default());
        let state = progress.update(&page(333.0));
        assert!(state.visible);
        assert_eq!(progress.bar_width(&state), "16.65%");
    }

    #[test]
    fn test_ring_visibility_threshold() {
        let progress = ScrollProgress::new(ProgressStyle::Ring, ProgressConfig::default());
        assert!(!progress.update(&page(100.0)).visible);
        assert!(progress.update(&page(101.0)).visible);
        assert_eq!(progress.ring_display(&progress.update(&page(50.0))), "none");
    }

    #[test]
    fn test_ring_background() {
        let progress = ScrollProgress::new(ProgressStyle::Ring, ProgressConfig::default());
        let state = progress.update(&page(333.0));
        assert_eq!(state.percent, 17.0);
        assert_eq!(
            progress.ring_background(&state),
            "conic-gradient(var(--primary-color-dark-muted) 17%, #d7d7d7 17%)"
        );
    }
}
