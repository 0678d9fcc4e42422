//! Construction-time configuration for a single carousel.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::drag::DEFAULT_DRAG_THRESHOLD;
use crate::error::CarouselError;

/// Autoplay cadence of the hero slider.
pub const DEFAULT_INTERVAL_MS: u64 = 6000;

/// Settings for one carousel instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Advance automatically on a timer (default: true).
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
    /// Autoplay interval in milliseconds (default: 6000).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Slide shown at mount (default: 0).
    #[serde(default)]
    pub initial_index: usize,
    /// Minimum drag displacement that navigates (default: 50).
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: f32,
}

fn default_autoplay() -> bool {
    true
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

fn default_drag_threshold() -> f32 {
    DEFAULT_DRAG_THRESHOLD
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            interval_ms: default_interval_ms(),
            initial_index: 0,
            drag_threshold: default_drag_threshold(),
        }
    }
}

impl CarouselConfig {
    /// Manual-only carousel (testimonials, plan selector).
    pub fn manual() -> Self {
        Self {
            autoplay: false,
            ..Self::default()
        }
    }

    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Checks settings that do not depend on the slide count.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.interval_ms == 0 {
            return Err(CarouselError::InvalidConfig {
                message: "interval_ms must be greater than zero".to_string(),
            });
        }

        if !self.drag_threshold.is_finite() || self.drag_threshold <= 0.0 {
            return Err(CarouselError::InvalidConfig {
                message: format!(
                    "drag_threshold must be a positive number, got {}",
                    self.drag_threshold
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_hero_slider() {
        let config = CarouselConfig::default();
        assert!(config.autoplay);
        assert_eq!(config.interval_ms, 6000);
        assert_eq!(config.initial_index, 0);
        assert_eq!(config.drag_threshold, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn manual_disables_autoplay_only() {
        let config = CarouselConfig::manual();
        assert!(!config.autoplay);
        assert_eq!(config.interval_ms, 6000);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = CarouselConfig {
            interval_ms: 0,
            ..CarouselConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CarouselError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn non_positive_threshold_is_rejected() {
        for threshold in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let config = CarouselConfig {
                drag_threshold: threshold,
                ..CarouselConfig::default()
            };
            assert!(config.validate().is_err(), "threshold {threshold} accepted");
        }
    }

    #[test]
    fn partial_toml_uses_field_defaults() {
        let config: CarouselConfig = toml::from_str("interval_ms = 3000").unwrap();
        assert!(config.autoplay);
        assert_eq!(config.interval_ms, 3000);
        assert_eq!(config.drag_threshold, 50.0);
    }
}
