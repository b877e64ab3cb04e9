//! Sheet number renumbering
//!
//! - `shift`: move one identifier by a signed delta
//! - `order`: collision-safe processing order for a batch
//! - `engine`: batch application with per-entry results

mod engine;
mod order;
mod shift;

pub use engine::{
    RenumberEngine, RenumberOutcome, Renumberable, Renumbered, SheetNumberWriter, SkipReason,
    Skipped,
};
pub use order::order_for_delta;
pub use shift::{shift, shift_str, ShiftError};
