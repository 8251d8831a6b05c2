//! Tests for tidemark.yml parsing and run configuration.

use super::*;
use std::fs;

fn parse(yaml: &str) -> CoreResult<Config> {
    let config: Config = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

#[test]
fn minimal_config_uses_defaults() {
    let config = parse("name: demo\n").unwrap();
    assert_eq!(config.name, "demo");
    assert_eq!(config.project, "");
    assert_eq!(config.ledger_table, DEFAULT_LEDGER_TABLE);
    assert_eq!(config.scripts_dir, DEFAULT_SCRIPTS_DIR);
    assert_eq!(config.database.path, "dev.duckdb");
}

#[test]
fn full_config_parses() {
    let config = parse(
        r#"
name: warehouse
project: billing
ledger_table: applied_scripts
scripts_dir: sql/changes
database:
  path: ":memory:"
"#,
    )
    .unwrap();
    assert_eq!(config.project, "billing");
    assert_eq!(config.ledger_table, "applied_scripts");
    assert_eq!(config.scripts_dir, "sql/changes");
    assert_eq!(config.database.path, ":memory:");
}

#[test]
fn unknown_fields_rejected() {
    let result = parse("name: demo\nmigrations_table: oops\n");
    assert!(matches!(result, Err(CoreError::ConfigParse(_))));
}

#[test]
fn empty_name_rejected() {
    let result = parse("name: \"  \"\n");
    assert!(matches!(result, Err(CoreError::ConfigInvalid { .. })));
}

#[test]
fn bad_ledger_table_rejected() {
    let result = parse("name: demo\nledger_table: \"bad name\"\n");
    assert!(matches!(result, Err(CoreError::InvalidTableName { .. })));
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(&dir.path().join("tidemark.yml")).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tidemark.yml");
    fs::write(&path, "name: demo\nproject: p1\n").unwrap();
    let config = Config::load(&path).unwrap();
    assert_eq!(config.name, "demo");
    assert_eq!(config.project, "p1");
}

#[test]
fn run_config_from_config() {
    let config = parse("name: demo\nproject: p1\n").unwrap();
    let run = config.run_config().unwrap();
    assert_eq!(run.project, "p1");
    assert_eq!(run.table.as_str(), DEFAULT_LEDGER_TABLE);
}

#[test]
fn run_config_default_is_single_project() {
    let run = RunConfig::default();
    assert_eq!(run.project, "");
    assert_eq!(run.table.as_str(), DEFAULT_LEDGER_TABLE);
}

#[test]
fn run_config_rejects_bad_table() {
    assert!(RunConfig::new("p", "my table").is_err());
}
