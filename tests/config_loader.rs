use estate_carousel::config::{Config, ConfigError};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(config.hero.autoplay);
    assert_eq!(config.hero.interval_ms, 6000);
    assert_eq!(config.hero.initial_index, 0);
    assert_eq!(config.hero.drag_threshold, 50.0);

    assert!(!config.testimonials.autoplay);
    assert_eq!(config.testimonials.initial_index, 0);

    assert!(!config.floor_plans.autoplay);
    assert_eq!(config.floor_plans.initial_index, 1);

    assert_eq!(config.ui.tick_rate(), Duration::from_millis(50));
    assert_eq!(config.ui.transition(), Duration::from_millis(450));
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("estate-carousel/config.toml"));
}

#[test]
fn test_log_path_prefers_configured_file() {
    let mut config = Config::default();
    assert!(config.logging.log_path().ends_with("estate-carousel/estate-carousel.log"));

    config.logging.file = Some("/tmp/showcase.log".into());
    assert_eq!(config.logging.log_path(), std::path::PathBuf::from("/tmp/showcase.log"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[hero]
interval_ms = 3000

[floor_plans]
initial_index = 3

[logging]
level = "debug"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.hero.interval_ms, 3000);
    assert!(config.hero.autoplay);
    assert_eq!(config.hero.drag_threshold, 50.0);
    assert_eq!(config.floor_plans.initial_index, 3);
    assert!(!config.floor_plans.autoplay);
    assert!(!config.testimonials.autoplay);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.ui.tick_rate_ms, 50);
}

#[test]
fn test_partial_manual_sections_stay_manual() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[testimonials]
drag_threshold = 40.0

[floor_plans]
drag_threshold = 40.0
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert!(!config.testimonials.autoplay);
    assert_eq!(config.testimonials.initial_index, 0);
    assert_eq!(config.testimonials.drag_threshold, 40.0);
    assert_eq!(config.testimonials.interval_ms, 6000);

    assert!(!config.floor_plans.autoplay);
    assert_eq!(config.floor_plans.initial_index, 1);
    assert_eq!(config.floor_plans.drag_threshold, 40.0);
}

#[test]
fn test_manual_section_can_opt_into_autoplay() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[testimonials]
autoplay = true
interval_ms = 8000
");

    let config = Config::load_from(&path).unwrap();
    assert!(config.testimonials.autoplay);
    assert_eq!(config.testimonials.interval_ms, 8000);
    assert!(!config.floor_plans.autoplay);
}

#[test]
fn test_parse_error_names_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[hero\ninterval_ms = ");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[hero]\ninterval_ms = \"soon\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_zero_interval_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[hero]\ninterval_ms = 0\n");

    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => {
            assert!(message.starts_with("[hero]"), "{message}");
            assert!(message.contains("interval_ms"), "{message}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_negative_threshold_fails_validation() {
    let mut config = Config::default();
    config.testimonials.drag_threshold = -5.0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("[testimonials]"));
}

#[test]
fn test_zero_ui_timings_fail_validation() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.ui.transition_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_unreadable_path_is_read_error() {
    let dir = TempDir::new().unwrap();
    // a directory exists but cannot be read as a file
    let err = Config::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn test_roundtrip_through_toml() {
    let config = Config::default();
    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
