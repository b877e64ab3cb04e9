//! Headless selection sessions
//!
//! Drives a `SelectionDialog` from command-line flags the way a user would
//! drive the dialog: pick a sheet set, type a filter, check entries, confirm.

use anyhow::{bail, Result};
use clap::Args;
use strsim::jaro_winkler;

use sheetnum::config::DialogConfig;
use sheetnum::selection::{DialogResult, FilterMode, GroupCatalog, SelectionDialog};
use sheetnum::{Sheet, SheetDocument, SheetId};

/// Minimum similarity for a sheet set suggestion
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Flags shared by every command that selects sheets
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Sheet set to scope the list to
    #[arg(long)]
    pub set: Option<String>,

    /// Filter text matched against "NUMBER - NAME"
    #[arg(long)]
    pub filter: Option<String>,

    /// Treat the filter as a regular expression
    #[arg(long)]
    pub regex: bool,

    /// Check every sheet left visible by the set and filter
    #[arg(long)]
    pub all: bool,

    /// Check a sheet by number (repeatable)
    #[arg(long = "sheet", value_name = "NUMBER")]
    pub sheets: Vec<String>,
}

/// Run a session to completion and return the confirmed result
pub fn run_session(
    document: &SheetDocument,
    dialog_config: &DialogConfig,
    all_label: &str,
    args: &SelectionArgs,
    operand: Option<&str>,
) -> Result<DialogResult<SheetId>> {
    if document.is_empty() {
        bail!("No sheets were found in the current document.");
    }

    let groups = document.group_catalog(all_label);
    if let Some(set) = &args.set {
        warn_unknown_set(&groups, set);
    }

    let mut dialog = SelectionDialog::new(dialog_config.clone());
    dialog.load(
        document.sorted_sheets(),
        |sheet: &Sheet| sheet.id,
        Sheet::display_name,
        groups,
    );

    if let Some(set) = &args.set {
        dialog.set_group(set);
    }
    if args.regex {
        dialog.set_filter_mode(FilterMode::Regex);
    }
    if let Some(filter) = &args.filter {
        dialog.set_query_text(filter.as_str());
    }

    if args.all {
        dialog.check_visible();
    }
    for number in &args.sheets {
        match document.sheet_by_number(number) {
            Some(sheet) => dialog.set_selected(&sheet.id, true),
            None => tracing::warn!("No sheet numbered '{}'", number),
        }
    }

    if let Some(value) = operand {
        dialog.set_operand_text(value);
    }

    tracing::debug!(
        "{} of {} sheets visible in '{}'",
        dialog.visible().len(),
        dialog.candidates().len(),
        dialog.scope_label()
    );

    match dialog.confirm() {
        Ok(result) => Ok(result),
        Err(err) => {
            dialog.cancel();
            bail!("{}: {}", dialog_config.title, err)
        }
    }
}

/// Closest known sheet set name, if any is similar enough
pub fn suggest_set<'a>(groups: &'a GroupCatalog<SheetId>, name: &str) -> Option<&'a str> {
    let wanted = name.to_lowercase();
    groups
        .group_names()
        .map(|candidate| (candidate, jaro_winkler(&candidate.to_lowercase(), &wanted)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate)
}

/// Warn that `name` is not a sheet set, suggesting the closest one
pub fn warn_unknown_set(groups: &GroupCatalog<SheetId>, name: &str) {
    if name == groups.all_label() || groups.contains(name) {
        return;
    }
    match suggest_set(groups, name) {
        Some(suggestion) => tracing::warn!(
            "Unknown sheet set '{}', using '{}' (did you mean '{}'?)",
            name,
            groups.all_label(),
            suggestion
        ),
        None => tracing::warn!(
            "Unknown sheet set '{}', using '{}'",
            name,
            groups.all_label()
        ),
    }
}
