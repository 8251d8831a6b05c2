//! Up command implementation - applies all pending migration scripts

use anyhow::Result;
use tm_core::discover_scripts;

use crate::cli::{GlobalArgs, UpArgs};
use crate::commands::common::{load_config, open_db, run_config, scripts_dir};

/// Execute the up command
pub(crate) fn execute(args: &UpArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let run = run_config(&config)?;
    let db = open_db(&config, global)?;

    let dir = scripts_dir(&config, global);
    if global.verbose {
        eprintln!("[verbose] Discovering scripts in: {}", dir.display());
    }
    let items = discover_scripts(&dir)?;

    let pending = tm_ledger::pending(&db, &run, items)?;
    if pending.is_empty() {
        println!("Ledger is up to date, nothing to apply");
        return Ok(());
    }

    if args.dry_run {
        println!("Dry run - would apply {} script(s):", pending.len());
        for item in &pending {
            println!("  {}", item.id);
        }
        return Ok(());
    }

    println!("Applying {} pending script(s)...\n", pending.len());
    match tm_ledger::upgrade_with_items(&db, &run, pending.clone()) {
        Ok(()) => {
            for item in &pending {
                println!("  ✓ {}", item.id);
            }
            println!();
            println!("Applied {} script(s)", pending.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("  ✗ {e}");
            eprintln!();
            eprintln!("Run rolled back; no scripts from this run were recorded");
            Err(e.into())
        }
    }
}
