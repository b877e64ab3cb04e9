//! In-memory sheet document
//!
//! Stands in for the host document when the crate runs headless: it owns the
//! sheets and sheet sets, enforces the host's unique-number rule, and accepts
//! the writes produced by a renumber batch.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::renumber::{Renumberable, SheetNumberWriter};
use crate::selection::GroupCatalog;

/// Stable identity of a sheet inside a document
pub type SheetId = u64;

/// Errors raised by document mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("Sheet number '{number}' is already in use by sheet {holder}")]
    DuplicateNumber { number: String, holder: SheetId },

    #[error("Sheet {0} does not exist in this document")]
    UnknownSheet(SheetId),

    #[error("Sheet number must not be empty")]
    EmptyNumber,
}

/// A single drawing sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub id: SheetId,
    /// The renumberable sheet number (e.g., "A101")
    pub number: String,
    /// Human-readable sheet title
    #[serde(default)]
    pub name: String,
}

impl Sheet {
    pub fn new(id: SheetId, number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            number: number.into(),
            name: name.into(),
        }
    }

    /// Label shown in selection lists
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.number, self.name)
    }
}

impl Renumberable for Sheet {
    type Key = SheetId;

    fn renumber_key(&self) -> SheetId {
        self.id
    }

    fn current_number(&self) -> &str {
        &self.number
    }
}

/// A named set of sheets (a print set)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSet {
    pub name: String,
    #[serde(default)]
    pub sheet_ids: Vec<SheetId>,
}

/// All sheets and sheet sets of one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetDocument {
    #[serde(default, rename = "sheet")]
    pub sheets: Vec<Sheet>,
    #[serde(default, rename = "sheet_set")]
    pub sheet_sets: Vec<SheetSet>,
}

impl SheetDocument {
    pub fn new(sheets: Vec<Sheet>, sheet_sets: Vec<SheetSet>) -> Self {
        Self { sheets, sheet_sets }
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn sheet(&self, id: SheetId) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.id == id)
    }

    /// Find the sheet currently holding `number`
    pub fn sheet_by_number(&self, number: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.number == number)
    }

    /// Sheets sorted by number, the order the selection list presents them in
    pub fn sorted_sheets(&self) -> Vec<Sheet> {
        let mut sheets = self.sheets.clone();
        sheets.sort_by(|a, b| a.number.cmp(&b.number));
        sheets
    }

    /// Clone the sheets with the given ids, in the order the ids are given
    pub fn sheets_by_ids(&self, ids: &[SheetId]) -> Vec<Sheet> {
        ids.iter().filter_map(|id| self.sheet(*id).cloned()).collect()
    }

    /// Renumber a sheet, refusing numbers another sheet already holds
    pub fn set_sheet_number(&mut self, id: SheetId, number: &str) -> Result<(), DocumentError> {
        if number.is_empty() {
            return Err(DocumentError::EmptyNumber);
        }

        if let Some(holder) = self.sheets.iter().find(|s| s.number == number && s.id != id) {
            return Err(DocumentError::DuplicateNumber {
                number: number.to_string(),
                holder: holder.id,
            });
        }

        let sheet = self
            .sheets
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(DocumentError::UnknownSheet(id))?;
        sheet.number = number.to_string();
        Ok(())
    }

    /// Build the group catalog used by selection sessions
    ///
    /// Sets that contain no sheet of this document are left out, and members
    /// that do not resolve to a sheet are dropped.
    pub fn group_catalog(&self, all_label: &str) -> GroupCatalog<SheetId> {
        let known: HashSet<SheetId> = self.sheets.iter().map(|s| s.id).collect();
        let mut groups: BTreeMap<String, Vec<SheetId>> = BTreeMap::new();

        for set in &self.sheet_sets {
            let members: Vec<SheetId> = set
                .sheet_ids
                .iter()
                .copied()
                .filter(|id| known.contains(id))
                .collect();
            if members.is_empty() {
                tracing::debug!("Skipping sheet set '{}' without sheets", set.name);
                continue;
            }
            groups.entry(set.name.clone()).or_default().extend(members);
        }

        let mut catalog = GroupCatalog::new(all_label);
        for (name, members) in groups {
            catalog.insert(name, members);
        }
        catalog
    }
}

impl SheetNumberWriter for SheetDocument {
    type Key = SheetId;
    type Error = DocumentError;

    fn write_number(&mut self, key: &SheetId, number: &str) -> Result<(), DocumentError> {
        self.set_sheet_number(*key, number)
    }
}
