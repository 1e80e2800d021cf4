//! Configuration for the folio widgets.
//!
//! Every field has a serde default taken from [`crate::constants`], so an
//! empty JSON object (`{}`) deserializes to the built-in behavior. Configs
//! are read from a JSON file by the native preview, and on the web a
//! scrollbar container may carry a [`ScrollbarConfig`] override in its
//! `data-scrollbar` attribute.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Log level setting for the widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to a log crate Level, used by console_log on the web.
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Top-level configuration for every widget on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Version of the configuration file format
    pub version: u32,
    pub log_level: LogLevel,
    pub scrollbar: ScrollbarConfig,
    pub progress: ProgressConfig,
    pub carousel: CarouselConfig,
    pub layout: LayoutConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            scrollbar: ScrollbarConfig::default(),
            progress: ProgressConfig::default(),
            carousel: CarouselConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

/// Curved scrollbar geometry settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbarConfig {
    /// Distance of the track from the container edges
    pub offset: f64,
    /// Corner-radius multiplier for where the top/bottom runs start
    pub extra_inset: f64,
    /// Leftmost start of the top/bottom runs, as a fraction of width
    pub min_start_ratio: f64,
    /// Minimum thumb length along the track
    pub min_thumb: f64,
    /// Polyline segments used to draw the thumb
    pub segments: usize,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            offset: constants::SCROLLBAR_OFFSET,
            extra_inset: constants::SCROLLBAR_EXTRA_INSET,
            min_start_ratio: constants::SCROLLBAR_MIN_START_RATIO,
            min_thumb: constants::SCROLLBAR_MIN_THUMB,
            segments: constants::SCROLLBAR_SEGMENTS,
        }
    }
}

impl ScrollbarConfig {
    /// Check that the geometry settings describe a drawable track.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.offset.is_nan() || self.offset < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "scrollbar.offset must be non-negative, got {}",
                self.offset
            )));
        }
        if !(0.0..=1.0).contains(&self.min_start_ratio) {
            return Err(ConfigError::Invalid(format!(
                "scrollbar.min_start_ratio must be within 0..=1, got {}",
                self.min_start_ratio
            )));
        }
        if self.min_thumb.is_nan() || self.min_thumb < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "scrollbar.min_thumb must be non-negative, got {}",
                self.min_thumb
            )));
        }
        if self.segments == 0 {
            return Err(ConfigError::Invalid(
                "scrollbar.segments must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a scrollbar override, e.g. from a `data-scrollbar` attribute.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Scroll progress indicator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Ring style: scroll distance before the ring is shown
    pub show_after: f64,
    /// Ring style: CSS color of the filled part
    pub fill_color: String,
    /// Ring style: CSS color of the remainder
    pub track_color: String,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            show_after: constants::PROGRESS_SHOW_AFTER,
            fill_color: constants::PROGRESS_FILL_COLOR.to_string(),
            track_color: constants::PROGRESS_TRACK_COLOR.to_string(),
        }
    }
}

/// Thumbnail carousel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Text of the placeholder cell in the default column
    pub placeholder_label: String,
    /// Image shown when a thumbnail fails to load
    pub fallback_image: Option<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            placeholder_label: constants::CAROUSEL_PLACEHOLDER_LABEL.to_string(),
            fallback_image: None,
        }
    }
}

/// Responsive layout sync settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewports narrower than this use the mobile layout
    pub mobile_breakpoint: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: constants::MOBILE_BREAKPOINT,
        }
    }
}

impl WidgetConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }
        config.scrollbar.validate()?;

        Ok(config)
    }

    /// Load configuration from a JSON file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Config file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// A value is outside its usable range
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
