//! Init command implementation - scaffolds a new Tidemark project

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::cli::InitArgs;

/// Execute the init command
pub(crate) fn execute(args: &InitArgs) -> Result<()> {
    // Reject names that could cause path traversal or confusing directory names
    if args.name.contains('/')
        || args.name.contains('\\')
        || args.name.contains("..")
        || args.name.starts_with('.')
        || args.name.starts_with('-')
    {
        anyhow::bail!(
            "Invalid project name '{}': must not contain '/', '\\', '..', or start with '.' or '-'",
            args.name
        );
    }

    let project_dir = Path::new(&args.name);

    if project_dir.exists() {
        anyhow::bail!(
            "Directory '{}' already exists. Choose a different project name.",
            args.name
        );
    }

    println!("Creating new Tidemark project: {}\n", args.name);

    fs::create_dir_all(project_dir.join("migrations"))
        .with_context(|| format!("Failed to create directory: {}", args.name))?;

    // Generate tidemark.yml
    // Escape YAML special characters in interpolated values
    let safe_name = args.name.replace('"', "\\\"");
    let safe_db_path = args.database_path.replace('"', "\\\"");
    let config_content = format!(
        r#"name: "{name}"

# Rows in the ledger table are scoped by this id; leave empty unless
# several projects share one ledger table.
project: ""

# ledger_table: migration_tbl
scripts_dir: "migrations"

database:
  path: "{db_path}"
"#,
        name = safe_name,
        db_path = safe_db_path,
    );
    fs::write(project_dir.join("tidemark.yml"), config_content)
        .context("Failed to write tidemark.yml")?;

    // Generate an example migration script
    let example_sql = r#"-- Scripts in this directory run in ascending file name order, each
-- applied exactly once and recorded in the ledger table.
CREATE TABLE example (
    id         INTEGER PRIMARY KEY,
    name       VARCHAR NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
"#;
    fs::write(project_dir.join("migrations/000_example.sql"), example_sql)
        .context("Failed to write example migration")?;

    println!("  Created: {}/tidemark.yml", args.name);
    println!("  Created: {}/migrations/000_example.sql", args.name);
    println!();
    println!("Next steps:");
    println!("  cd {}", args.name);
    println!("  tm status");
    println!("  tm up");

    Ok(())
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
