use std::io::Write;

use range_shared::config;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
struct Section {
    name: String,
    width: u32,
}

impl Default for Section {
    fn default() -> Self {
        Self { name: "default".to_string(), width: 40 }
    }
}

#[test]
fn test_missing_section_uses_default() {
    let table = config::parse("[other]\nkey = 1\n");
    assert_eq!(config::get_from::<Section>(&table, "section"), Section::default());
}

#[test]
fn test_partial_section_fills_defaults() {
    let table = config::parse("[section]\nwidth = 80\n");
    let section: Section = config::get_from(&table, "section");
    assert_eq!(section, Section { name: "default".to_string(), width: 80 });
}

#[test]
fn test_type_mismatch_uses_default() {
    let table = config::parse("[section]\nwidth = \"wide\"\n");
    assert_eq!(config::get_from::<Section>(&table, "section"), Section::default());
}

#[test]
fn test_syntax_error_gives_empty_table() {
    assert!(config::parse("[section\nwidth = ").is_empty());
}

#[test]
fn test_global_init_once() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[section]\nname = \"from file\"").unwrap();

    config::init(file.path()).unwrap();
    assert!(config::is_initialized());

    let section: Section = config::get("section");
    assert_eq!(section.name, "from file");
    assert_eq!(section.width, 40);

    assert!(config::init(file.path()).is_err());
}
