//! sheetnum - sheet number renumbering for drawing sets
//!
//! Two pieces of logic behind the "increment / decrement sheet numbers"
//! commands of a drawing-set tool:
//!
//! 1. **Renumbering**: sheet numbers such as `A-007b` are split into prefix,
//!    zero-padded number and letter suffix, shifted by a signed delta and
//!    applied to a batch in an order that never collides with a sheet that
//!    has not been rewritten yet.
//!
//! 2. **Selection**: a generic, filterable multi-select session (substring or
//!    regex filtering, sheet set scoping, bulk check operations) that gathers
//!    the batch and the shift amount from the user.
//!
//! The host document stays outside: it supplies items and receives writes
//! through [`renumber::SheetNumberWriter`]. [`domain::SheetDocument`] is an
//! in-memory stand-in used by the CLI and the tests.

pub mod config;
pub mod domain;
pub mod renumber;
pub mod selection;

pub use domain::*;
