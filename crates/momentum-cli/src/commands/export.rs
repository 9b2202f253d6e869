//! Handler for the `export` command.

use std::path::PathBuf;

use chrono::Utc;

use momentum_core::ledger::report_file_name;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::errors::CliError;
use crate::ui::{badge, kv, print, Badge};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let Some(report) = ledger.export_report()? else {
        CliError::nothing_to_do(
            "No habits to export!",
            "Run `momentum habit add <NAME>` to commit to one first.",
        )
        .exit()
    };

    if args.print {
        // The raw report goes to stdout untouched, even in quiet mode.
        println!("{}", report);
        return Ok(());
    }

    let path = match &args.output {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(report_file_name(Utc::now())),
    };
    std::fs::write(&path, &report)
        .map_err(|e| anyhow::anyhow!("Failed to write report {}: {}", path.display(), e))?;

    let ui_ctx = ctx.ui_context(args.json)?;
    if ui_ctx.mode.is_json() {
        let payload = serde_json::json!({
            "status": "exported",
            "path": path.to_string_lossy(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if ctx.quiet() {
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Report exported."));
        print(&ui_ctx, &kv(&ui_ctx, "Path", &path.display().to_string()));
    } else {
        println!("status=exported");
        println!("path={}", path.display());
    }

    Ok(())
}
