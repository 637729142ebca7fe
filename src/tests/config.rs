use super::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_uses_field_defaults() {
    let config = Config::default();
    assert!(!config.use_router_links);
    assert!(config.collapsible_sections);
    assert_eq!(config.pathname, "/");
    assert_eq!(Config::parse("").unwrap(), config);
}

#[test]
fn test_values_override_defaults() {
    let config = Config::parse("use_router_links = true\npathname = \"/docs/\"\n").unwrap();

    assert!(config.use_router_links);
    assert!(config.collapsible_sections, "Unset keys keep their default");
    assert_eq!(config.pathname, "/docs/");
}

#[test]
fn test_wrong_type_is_an_error() {
    assert!(Config::parse("collapsible_sections = \"sometimes\"").is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "collapsible_sections = false").unwrap();

    let config = Config::load_from(file.path()).unwrap();
    let options = config.toc_options();
    assert!(!options.collapsible_sections);
    assert!(!options.use_router_links);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
}
