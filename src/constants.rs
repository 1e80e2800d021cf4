//! Centralized constants for the folio widgets
//!
//! These are the defaults behind [`crate::config::WidgetConfig`]; every
//! config field falls back to the value defined here.

// =============================================================================
// Curved Scrollbar
// =============================================================================

/// Distance of the track from the container's edges
pub const SCROLLBAR_OFFSET: f64 = 7.0;

/// How far left of the corner the top/bottom runs start, in corner radii
pub const SCROLLBAR_EXTRA_INSET: f64 = 2.0;

/// The track never starts further left than this fraction of the width
pub const SCROLLBAR_MIN_START_RATIO: f64 = 0.8;

/// Minimum thumb length along the track
pub const SCROLLBAR_MIN_THUMB: f64 = 20.0;

/// Number of polyline segments used to draw the thumb along the curve.
/// Higher counts follow the corner arcs more closely.
pub const SCROLLBAR_SEGMENTS: usize = 50;

/// Thumb length before the first layout pass
pub const SCROLLBAR_INITIAL_THUMB: f64 = 50.0;

// =============================================================================
// DOM hooks
// =============================================================================

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Attribute marking containers that get a curved scrollbar
pub const SCROLLBAR_ATTR: &str = "data-scrollbar";
pub const SCROLL_CONTENT_CLASS: &str = "scroll-content";
pub const SCROLLBAR_SVG_CLASS: &str = "scrollbar-svg";
pub const SCROLLBAR_TRACK_CLASS: &str = "scrollbar-track";
pub const SCROLLBAR_THUMB_CLASS: &str = "scrollbar-thumb";

// =============================================================================
// Scroll Progress
// =============================================================================

/// Element id of the width-based progress bar
pub const PROGRESS_BAR_ID: &str = "myBar";

/// Element id of the circular "back to top" progress ring
pub const PROGRESS_RING_ID: &str = "progress";

/// Scroll distance after which the ring becomes visible
pub const PROGRESS_SHOW_AFTER: f64 = 100.0;

pub const PROGRESS_FILL_COLOR: &str = "var(--primary-color-dark-muted)";
pub const PROGRESS_TRACK_COLOR: &str = "#d7d7d7";

// =============================================================================
// Thumbnail Carousel
// =============================================================================

pub const CAROUSEL_ROOT_ID: &str = "thumbnailCarousel";
pub const CAROUSEL_CONTAINER_ID: &str = "carouselContainer";
pub const CAROUSEL_GRID_ID: &str = "carouselGrid";
pub const CAROUSEL_PAGE_INDICATOR_ID: &str = "pageIndicator";

/// Label of the placeholder cell above the default entry
pub const CAROUSEL_PLACEHOLDER_LABEL: &str = "Accueil";

/// Event dispatched on `document` when an entry is selected
pub const CAROUSEL_SELECTED_EVENT: &str = "dancerSelected";

/// Event dispatched on `document` with the selected entry's text
pub const CAROUSEL_TEXT_EVENT: &str = "updateText";

// =============================================================================
// Layout Sync
// =============================================================================

/// Viewports narrower than this are treated as mobile
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub const LAYOUT_WRAPPER_SELECTOR: &str = r#".doubleHoriz[data-layout*="duo"]"#;
pub const LAYOUT_IMAGE_SELECTOR: &str = ".portfo";
pub const LAYOUT_CONTAINER_SELECTOR: &str = ".scroll-container";
