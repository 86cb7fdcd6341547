mod common;

use canute_ui::config::{Config, ConfigError};
use common::temp_dir;
use std::path::PathBuf;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.display.width, 40);
    assert_eq!(config.display.height, 9);
    assert_eq!(config.runtime.poll_interval_ms, 100);
    assert_eq!(config.files.usb_dir, PathBuf::from("/media/usb0"));
    assert!(config.files.library_dir.ends_with("canute-ui/books"));
    assert!(config.files.state_file.ends_with("canute-ui/state.json"));
    assert!(config.files.log_file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("canute-ui/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = temp_dir();
    let config = Config::load_from(&dir.path().join("config.toml")).expect("load");
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = temp_dir();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[display]
width = 28

[files]
library_dir = "/home/pi/books"
log_file = "/var/log/canute.log"
"#,
    )
    .expect("write");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.display.width, 28);
    assert_eq!(config.display.height, 9);
    assert_eq!(config.files.library_dir, PathBuf::from("/home/pi/books"));
    assert_eq!(config.files.log_file, Some(PathBuf::from("/var/log/canute.log")));
    assert_eq!(config.runtime.poll_interval_ms, 100);
}

#[test]
fn test_parse_error_names_file() {
    let dir = temp_dir();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[display\nwidth = ").expect("write");

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_single_row_display() {
    let mut config = Config::default();
    config.display.height = 1;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_validation_rejects_zero_width_and_interval() {
    let mut config = Config::default();
    config.display.width = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.runtime.poll_interval_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_file_fails_load() {
    let dir = temp_dir();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[runtime]\npoll_interval_ms = 0\n").expect("write");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
