use arcade_config::{Config, ConfigManager};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    let config = manager.load().expect("load");
    assert_eq!(config.currency_label, "Rs.");
    assert_eq!(config.country_code, "92");
    assert_eq!(config.building_name, "jr-arcade");
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut config = Config::default();
    config.country_code = "44".into();
    config.export_root = Some(PathBuf::from("/tmp/exports"));
    manager.save(&config).expect("save");

    let loaded = manager.load().expect("load");
    assert_eq!(loaded.country_code, "44");
    assert_eq!(loaded.export_root, Some(PathBuf::from("/tmp/exports")));
    assert_eq!(loaded.resolve_export_root(), PathBuf::from("/tmp/exports"));
}

#[test]
fn partial_config_file_gets_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    std::fs::write(manager.config_path(), r#"{ "country_code": "1" }"#).expect("write");

    let loaded = manager.load().expect("load");
    assert_eq!(loaded.country_code, "1");
    assert_eq!(loaded.currency_label, "Rs.");
}
