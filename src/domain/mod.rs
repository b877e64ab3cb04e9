//! Core domain types for sheetnum

mod identifier;
mod sheet;
mod sheet_io;

pub use identifier::Identifier;
pub use sheet::{DocumentError, Sheet, SheetDocument, SheetId, SheetSet};
