//! Increment / decrement command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;

use sheetnum::config::Config;
use sheetnum::renumber::RenumberEngine;
use sheetnum::SheetDocument;

use super::session::{run_session, SelectionArgs};

/// Direction and options of one renumber run
#[derive(Debug, Clone, Default)]
pub struct RenumberRequest {
    pub decrement: bool,
    /// Operand text as typed; the dialog default when absent
    pub by: Option<String>,
    pub dry_run: bool,
}

/// Select sheets, shift their numbers and save the document
pub fn renumber_command(
    document_path: &Path,
    config: &Config,
    args: &SelectionArgs,
    request: &RenumberRequest,
) -> Result<()> {
    let mut document = SheetDocument::from_file(document_path)?;
    let dialog_config = config.renumber_dialog(request.decrement);

    if request.by.is_some() && dialog_config.operand.is_none() {
        bail!(
            "{}: --by was given but this dialog has no operand field",
            dialog_config.title
        );
    }

    let result = run_session(
        &document,
        dialog_config,
        &config.settings.all_group_label,
        args,
        request.by.as_deref(),
    )?;

    let amount = result.operand.unwrap_or(1);
    let delta = if request.decrement {
        amount.saturating_neg()
    } else {
        amount
    };
    let batch = document.sheets_by_ids(&result.selected_keys);

    let outcome = if request.dry_run {
        RenumberEngine::apply(&batch, delta)
    } else {
        RenumberEngine::apply_and_commit(&batch, delta, &mut document)
    };

    for rename in &outcome.succeeded {
        println!("  {} -> {}", rename.from, rename.to);
    }
    for skipped in &outcome.skipped {
        println!("  {} skipped: {}", skipped.number, skipped.reason);
    }
    println!("\n{}.", outcome.summary());
    if let Some(url) = &dialog_config.help_url {
        println!("Help: {}", url);
    }

    if request.dry_run {
        println!("Dry run: document not saved.");
        return Ok(());
    }

    if !outcome.succeeded.is_empty() {
        document
            .save_to_file(document_path)
            .with_context(|| format!("Failed to save {}", document_path.display()))?;
    }

    Ok(())
}
