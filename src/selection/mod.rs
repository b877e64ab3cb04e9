//! Filterable multi-select sessions
//!
//! Pure state: the host renders whatever [`SelectionDialog::visible`] returns
//! and forwards user edits back into the session.

mod dialog;
mod filter;
mod scope;
mod store;

pub use dialog::{derive_view, ConfirmError, DialogResult, DialogState, SelectionDialog};
pub use filter::{filter_entries, matching_positions, FilterMode, FilterQuery, Matcher};
pub use scope::{GroupCatalog, GroupScope, DEFAULT_ALL_LABEL};
pub use store::{BulkOp, SelectableEntry, SelectableItemStore};
