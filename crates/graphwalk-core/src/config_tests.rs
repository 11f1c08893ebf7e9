//! Tests for layered configuration loading.

use std::path::Path;

use crate::config::{GraphwalkConfig, OutputFormat};
use crate::error::Error;

#[test]
fn test_defaults() {
    let config = GraphwalkConfig::default();
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.shell.prompt, "graphwalk> ");
    assert!(config.shell.color);
    assert_eq!(config.shell.format, OutputFormat::Text);
    assert!(!config.shell.load_default);
    assert!(config.shell.history_file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_toml_partial_override() {
    let config = GraphwalkConfig::from_toml_str(
        r#"
        [shell]
        format = "json"
        load_default = true
        "#,
    )
    .unwrap();

    assert_eq!(config.shell.format, OutputFormat::Json);
    assert!(config.shell.load_default);
    assert_eq!(config.shell.prompt, "graphwalk> ");
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_invalid_level_rejected() {
    let err = GraphwalkConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap_err();
    assert!(matches!(err, Error::Config(msg) if msg.contains("loud")));
}

#[test]
fn test_empty_prompt_rejected() {
    let err = GraphwalkConfig::from_toml_str("[shell]\nprompt = \"  \"\n").unwrap_err();
    assert_eq!(
        err,
        Error::Config("shell.prompt cannot be empty".to_string())
    );
}

#[test]
fn test_unknown_format_rejected() {
    let err = GraphwalkConfig::from_toml_str("[shell]\nformat = \"yaml\"\n").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_load_from_explicit_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            "[logging]\nlevel = \"debug\"\n[shell]\nprompt = \"g> \"\n",
        )?;

        let config =
            GraphwalkConfig::load(Some(Path::new("custom.toml"))).map_err(|e| e.to_string())?;
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.shell.prompt, "g> ");
        Ok(())
    });
}

#[test]
fn test_load_missing_explicit_file() {
    let err =
        GraphwalkConfig::load(Some(Path::new("/definitely/not/here/graphwalk.toml"))).unwrap_err();
    assert!(matches!(err, Error::Config(msg) if msg.contains("not found")));
}

#[test]
fn test_env_overrides_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("graphwalk.toml", "[shell]\nprompt = \"file> \"\n")?;
        jail.set_env("GRAPHWALK_SHELL__PROMPT", "env> ");

        let config = GraphwalkConfig::load(None).map_err(|e| e.to_string())?;
        assert_eq!(config.shell.prompt, "env> ");
        Ok(())
    });
}

#[test]
fn test_output_format_from_str() {
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert!("xml".parse::<OutputFormat>().is_err());
}

#[test]
fn test_to_toml_round_trips_through_loader() {
    let mut config = GraphwalkConfig::default();
    config.shell.load_default = true;
    let rendered = config.to_toml().unwrap();

    assert_eq!(GraphwalkConfig::from_toml_str(&rendered).unwrap(), config);
}
