//! Shared fixtures for sheet document tests

#![allow(dead_code)]

use sheetnum::{Sheet, SheetDocument, SheetSet};

/// A small architectural set with two sheet sets
///
/// | id | number | set        |
/// |----|--------|------------|
/// | 1  | A1     | Permit     |
/// | 2  | A2     | Permit     |
/// | 3  | A3     | Permit     |
/// | 4  | A004   | Details    |
/// | 5  | A005s  | Details    |
/// | 6  | COVER  |            |
pub fn sample_document() -> SheetDocument {
    SheetDocument::new(
        vec![
            Sheet::new(3, "A3", "Sections"),
            Sheet::new(1, "A1", "Floor Plan"),
            Sheet::new(2, "A2", "Roof Plan"),
            Sheet::new(4, "A004", "Wall Details"),
            Sheet::new(5, "A005s", "Stair Details"),
            Sheet::new(6, "COVER", "Cover Sheet"),
        ],
        vec![
            SheetSet {
                name: "Permit".to_string(),
                sheet_ids: vec![1, 2, 3],
            },
            SheetSet {
                name: "Details".to_string(),
                sheet_ids: vec![4, 5],
            },
        ],
    )
}

/// Sheet numbers of a document sorted by number
pub fn numbers(document: &SheetDocument) -> Vec<String> {
    document
        .sorted_sheets()
        .into_iter()
        .map(|sheet| sheet.number)
        .collect()
}
