//! List command implementation

use anyhow::Result;
use std::path::Path;

use sheetnum::config::Config;
use sheetnum::SheetDocument;

use super::session::warn_unknown_set;

/// Print the sheets of a document, optionally scoped to one sheet set
pub fn list_command(document_path: &Path, config: &Config, set: Option<&str>) -> Result<()> {
    let document = SheetDocument::from_file(document_path)?;
    let all_label = &config.settings.all_group_label;
    let groups = document.group_catalog(all_label);

    if let Some(name) = set {
        warn_unknown_set(&groups, name);
    }
    let scope = set.map(|name| groups.resolve(name)).unwrap_or_default();

    let sheets: Vec<_> = document
        .sorted_sheets()
        .into_iter()
        .filter(|sheet| groups.includes(&scope, &sheet.id))
        .collect();

    if sheets.is_empty() {
        println!("No sheets found.");
        return Ok(());
    }

    println!("Sheets in {} ({}):\n", groups.label(&scope), sheets.len());
    for sheet in &sheets {
        println!("  {}", sheet.display_name());
    }

    let options = groups.options();
    if options.len() > 1 {
        println!("\nSheet sets:");
        for name in options.iter().skip(1) {
            let count = groups.members(name).map(|m| m.len()).unwrap_or(0);
            println!("  {} ({} sheets)", name, count);
        }
    }

    Ok(())
}
