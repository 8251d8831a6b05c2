//! Status command implementation - shows applied and pending scripts

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tm_core::discover_scripts;

use crate::cli::{GlobalArgs, StatusArgs, StatusOutput};
use crate::commands::common::{load_config, open_db, run_config, scripts_dir};

/// One applied script in JSON output.
#[derive(Debug, Serialize)]
struct AppliedScript {
    id: String,
    applied_at: DateTime<Utc>,
}

/// Full status report in JSON output.
#[derive(Debug, Serialize)]
struct StatusReport {
    project: String,
    applied: Vec<AppliedScript>,
    pending: Vec<String>,
}

/// Execute the status command
pub(crate) fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let run = run_config(&config)?;
    let db = open_db(&config, global)?;
    let items = discover_scripts(&scripts_dir(&config, global))?;

    let status = tm_ledger::status(&db, &run, items)?;

    match args.output {
        StatusOutput::Json => {
            let report = StatusReport {
                project: run.project.clone(),
                applied: status
                    .applied
                    .into_iter()
                    .map(|(id, applied_at)| AppliedScript { id, applied_at })
                    .collect(),
                pending: status.pending,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StatusOutput::Table => {
            println!("Applied ({}):", status.applied.len());
            for (id, applied_at) in &status.applied {
                println!("  {}  {}", id, applied_at.format("%Y-%m-%d %H:%M:%S UTC"));
            }
            println!();
            println!("Pending ({}):", status.pending.len());
            for id in &status.pending {
                println!("  {id}");
            }
        }
    }

    Ok(())
}
