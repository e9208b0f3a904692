//! Spotlight configuration

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Element ids, class names and scroll tuning for a spotlight instance.
///
/// The defaults match the stock spotlight markup and stylesheet.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use spotlight::SpotlightConfig;
///
/// let config = SpotlightConfig::default()
///     .with_chrome_offset(64.0)
///     .with_wait_timeout(Duration::from_millis(800));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpotlightConfig {
    /// Id of the checkbox that toggles the panel.
    pub control_id: String,

    /// Id of the optional close button below the content.
    pub close_id: String,

    /// Id of the collapsible content region.
    pub content_id: String,

    /// Id of the document body element.
    pub body_id: String,

    /// Attribute mirrored from the toggle state.
    pub expanded_attribute: String,

    /// Body class whose stylesheet rule transitions the FLIP transform back to zero.
    pub flip_class: String,

    /// Class that keeps the close button hidden until the widget has mounted.
    pub hidden_class: String,

    /// Distance in pixels above the current page offset to anchor on collapse.
    ///
    /// Default: 100
    pub anchor_offset: f64,

    /// Additional offset in pixels for fixed page chrome.
    ///
    /// Default: 90
    pub chrome_offset: f64,

    /// Pixels per em used when pinning the control height.
    ///
    /// Default: 16
    pub rem_base: f64,

    /// Give up waiting for a completion event after this many milliseconds and
    /// run the continuation anyway. `None` waits forever.
    ///
    /// Default: None
    pub wait_timeout_ms: Option<u64>,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            control_id: "js-spotlight-input".to_string(),
            close_id: "js-spotlight-close".to_string(),
            content_id: "js-spotlight-supporting-content".to_string(),
            body_id: "body".to_string(),
            expanded_attribute: "aria-expanded".to_string(),
            flip_class: "spotlight-flip-translate".to_string(),
            hidden_class: "is-hidden".to_string(),
            anchor_offset: 100.0,
            chrome_offset: 90.0,
            rem_base: 16.0,
            wait_timeout_ms: None,
        }
    }
}

impl SpotlightConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from JSON. Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_control_id(mut self, id: impl Into<String>) -> Self {
        self.control_id = id.into();
        self
    }

    pub fn with_close_id(mut self, id: impl Into<String>) -> Self {
        self.close_id = id.into();
        self
    }

    pub fn with_content_id(mut self, id: impl Into<String>) -> Self {
        self.content_id = id.into();
        self
    }

    pub fn with_body_id(mut self, id: impl Into<String>) -> Self {
        self.body_id = id.into();
        self
    }

    pub fn with_flip_class(mut self, class: impl Into<String>) -> Self {
        self.flip_class = class.into();
        self
    }

    /// Sets the anchor distance above the page offset.
    pub fn with_anchor_offset(mut self, px: f64) -> Self {
        self.anchor_offset = px;
        self
    }

    /// Sets the page chrome offset.
    pub fn with_chrome_offset(mut self, px: f64) -> Self {
        self.chrome_offset = px;
        self
    }

    pub fn with_rem_base(mut self, px: f64) -> Self {
        self.rem_base = px;
        self
    }

    /// Sets a timeout for completion waits.
    pub fn with_wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Timeout for completion waits, if any.
    pub fn wait_timeout(&self) -> Option<Duration> {
        self.wait_timeout_ms.map(Duration::from_millis)
    }

    /// Total distance subtracted from the page offset when collapsing.
    pub fn collapse_offset(&self) -> f64 {
        self.anchor_offset + self.chrome_offset
    }

    /// Checks ids, class names and numeric settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("control_id", &self.control_id),
            ("content_id", &self.content_id),
            ("body_id", &self.body_id),
            ("expanded_attribute", &self.expanded_attribute),
            ("flip_class", &self.flip_class),
        ];
        for (field, value) in names {
            if value.is_empty() {
                return Err(ConfigError::Empty(field));
            }
        }

        let offsets = [
            ("anchor_offset", self.anchor_offset),
            ("chrome_offset", self.chrome_offset),
        ];
        for (field, value) in offsets {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        if !self.rem_base.is_finite() || self.rem_base <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "rem_base",
                value: self.rem_base,
            });
        }

        Ok(())
    }
}
