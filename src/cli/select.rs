//! Select command implementation

use anyhow::{Context, Result};
use std::path::Path;

use sheetnum::config::{Config, DialogConfig};
use sheetnum::selection::DialogResult;
use sheetnum::{Sheet, SheetDocument, SheetId};

use super::session::{run_session, SelectionArgs};

/// Run a selection session and print the chosen sheets
pub fn select_command(
    document_path: &Path,
    config: &Config,
    args: &SelectionArgs,
    json: bool,
) -> Result<()> {
    let document = SheetDocument::from_file(document_path)?;
    let result = run_session(
        &document,
        &config.select,
        &config.settings.all_group_label,
        args,
        None,
    )?;

    let sheets = document.sheets_by_ids(&result.selected_keys);

    if json {
        let payload = selection_payload(&result, &sheets, &config.select);
        let text = serde_json::to_string_pretty(&payload)
            .context("Failed to serialize selection")?;
        println!("{}", text);
        return Ok(());
    }

    println!("Selected {} sheets:\n", sheets.len());
    for sheet in &sheets {
        println!("  {}", sheet.display_name());
    }
    if let Some(url) = &config.select.help_url {
        println!("\nHelp: {}", url);
    }

    Ok(())
}

/// JSON shape printed by `select --json`
fn selection_payload(
    result: &DialogResult<SheetId>,
    sheets: &[Sheet],
    dialog: &DialogConfig,
) -> serde_json::Value {
    serde_json::json!({
        "result": result,
        "sheets": sheets,
        "help_url": dialog.help_url,
    })
}
