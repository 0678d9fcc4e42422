use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::carousel::CarouselConfig;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Autoplaying hero slider.
    #[serde(default)]
    pub hero: CarouselConfig,
    /// Manual testimonial slider.
    #[serde(
        default = "default_testimonials",
        deserialize_with = "testimonials_section"
    )]
    pub testimonials: CarouselConfig,
    /// Manual floor-plan selector.
    #[serde(
        default = "default_floor_plans",
        deserialize_with = "floor_plans_section"
    )]
    pub floor_plans: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal front-end timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw cadence in milliseconds (default: 50).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Slide-in animation length in milliseconds (default: 450).
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level used when RUST_LOG is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. The terminal UI owns stdout, so logs never go there.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_testimonials() -> CarouselConfig {
    CarouselConfig::manual()
}

fn default_floor_plans() -> CarouselConfig {
    // "One Bedroom" is preselected
    CarouselConfig::manual().with_initial_index(1)
}

/// A carousel table whose omitted keys keep the section's own defaults
/// rather than the hero-oriented field defaults of `CarouselConfig`.
#[derive(Debug, Deserialize)]
struct SectionOverrides {
    autoplay: Option<bool>,
    interval_ms: Option<u64>,
    initial_index: Option<usize>,
    drag_threshold: Option<f32>,
}

impl SectionOverrides {
    fn apply(self, base: CarouselConfig) -> CarouselConfig {
        CarouselConfig {
            autoplay: self.autoplay.unwrap_or(base.autoplay),
            interval_ms: self.interval_ms.unwrap_or(base.interval_ms),
            initial_index: self.initial_index.unwrap_or(base.initial_index),
            drag_threshold: self.drag_threshold.unwrap_or(base.drag_threshold),
        }
    }
}

fn testimonials_section<'de, D>(deserializer: D) -> Result<CarouselConfig, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(SectionOverrides::deserialize(deserializer)?.apply(default_testimonials()))
}

fn floor_plans_section<'de, D>(deserializer: D) -> Result<CarouselConfig, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(SectionOverrides::deserialize(deserializer)?.apply(default_floor_plans()))
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_transition_ms() -> u64 {
    450
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hero: CarouselConfig::default(),
            testimonials: default_testimonials(),
            floor_plans: default_floor_plans(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            transition_ms: default_transition_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl LoggingConfig {
    /// Configured file, or `estate-carousel.log` in the platform cache dir.
    pub fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.file {
            return path.clone();
        }
        let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        cache_dir.join("estate-carousel").join("estate-carousel.log")
    }
}
