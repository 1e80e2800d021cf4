//! Responsive height sync for image + scroll panel layouts.
//!
//! On narrow viewports the text panel next to an image becomes a box exactly
//! as tall as the image, with its content scrolling inside. On wide
//! viewports the inline styles are removed so the stylesheet's two-column
//! layout takes over again.

use std::cell::Cell;

use crate::config::LayoutConfig;

/// Inline style changes for one wrapper.
///
/// `None` means "remove the inline property".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePlan {
    pub container_height: Option<String>,
    pub container_overflow: Option<&'static str>,
    pub content_height: Option<&'static str>,
    pub content_overflow_y: Option<&'static str>,
}

impl StylePlan {
    /// Plan that clears every inline property.
    pub fn cleared() -> Self {
        Self {
            container_height: None,
            container_overflow: None,
            content_height: None,
            content_overflow_y: None,
        }
    }

    /// Plan pinning the container to `image_height` and scrolling the content.
    pub fn pinned(image_height: f64) -> Self {
        Self {
            container_height: Some(format!(
                "{}px",
                folio_path::format_number(image_height.max(0.0))
            )),
            container_overflow: Some("hidden"),
            content_height: Some("100%"),
            content_overflow_y: Some("auto"),
        }
    }
}

/// Decides the layout mode from the viewport width.
#[derive(Debug, Clone, Copy)]
pub struct LayoutSync {
    config: LayoutConfig,
}

impl LayoutSync {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn is_mobile(&self, viewport_width: f64) -> bool {
        viewport_width < self.config.mobile_breakpoint
    }

    /// Style plan for a wrapper whose image is `image_height` tall.
    pub fn plan(&self, viewport_width: f64, image_height: f64) -> StylePlan {
        if self.is_mobile(viewport_width) {
            StylePlan::pinned(image_height)
        } else {
            StylePlan::cleared()
        }
    }
}

/// Id of a one-shot timer that may still be pending.
///
/// The callback calls [`fire`](Self::fire) when it runs; whoever owns the
/// callback calls [`cancel`](Self::cancel) before freeing it and clears the
/// returned timer, so a dropped callback is never invoked.
#[derive(Debug, Default)]
pub struct PendingTimer {
    id: Cell<Option<i32>>,
}

impl PendingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly scheduled timer.
    pub fn arm(&self, id: i32) {
        self.id.set(Some(id));
    }

    /// Mark the timer as run. Returns false if it was not pending.
    pub fn fire(&self) -> bool {
        self.id.take().is_some()
    }

    /// Take the id of a timer that has not run yet.
    pub fn cancel(&self) -> Option<i32> {
        self.id.take()
    }

    pub fn is_pending(&self) -> bool {
        self.id.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint() {
        let sync = LayoutSync::new(LayoutConfig::default());
        assert!(sync.is_mobile(767.0));
        assert!(!sync.is_mobile(768.0));
    }

    #[test]
    fn test_mobile_plan() {
        let sync = LayoutSync::new(LayoutConfig::default());
        let plan = sync.plan(375.0, 412.5);
        assert_eq!(plan.container_height.as_deref(), Some("412.5px"));
        assert_eq!(plan.container_overflow, Some("hidden"));
        assert_eq!(plan.content_height, Some("100%"));
        assert_eq!(plan.content_overflow_y, Some("auto"));
    }

    #[test]
    fn test_desktop_plan_clears() {
        let sync = LayoutSync::new(LayoutConfig::default());
        assert_eq!(sync.plan(1280.0, 600.0), StylePlan::cleared());
    }

    #[test]
    fn test_custom_breakpoint() {
        let sync = LayoutSync::new(LayoutConfig {
            mobile_breakpoint: 1024.0,
        });
        assert!(sync.plan(900.0, 0.0).container_height.is_some());
    }

    #[test]
    fn test_pending_timer_cancelled_before_it_runs() {
        let timer = PendingTimer::new();
        timer.arm(42);
        assert!(timer.is_pending());
        assert_eq!(timer.cancel(), Some(42));
        assert!(!timer.is_pending());
        // The callback can no longer be reached once cancelled
        assert!(!timer.fire());
    }

    #[test]
    fn test_pending_timer_nothing_to_cancel_after_it_ran() {
        let timer = PendingTimer::new();
        assert_eq!(timer.cancel(), None);
        timer.arm(7);
        assert!(timer.fire());
        assert!(!timer.fire());
        assert_eq!(timer.cancel(), None);
    }
}
