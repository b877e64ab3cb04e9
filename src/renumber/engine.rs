//! Batch renumbering
//!
//! The engine turns a selection plus one signed delta into a list of
//! `(key, from, to)` writes in collision-safe order. It never performs I/O;
//! [`RenumberEngine::apply_and_commit`] hands each write to a host-supplied
//! [`SheetNumberWriter`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::order::order_for_delta;
use super::shift::{shift_str, ShiftError};

/// Anything that carries a renumberable sheet number
pub trait Renumberable {
    type Key: Clone;

    /// Identity used to report results and to address writes
    fn renumber_key(&self) -> Self::Key;

    /// The number as it currently stands in the host document
    fn current_number(&self) -> &str;
}

impl<T: Renumberable + ?Sized> Renumberable for &T {
    type Key = T::Key;

    fn renumber_key(&self) -> Self::Key {
        (**self).renumber_key()
    }

    fn current_number(&self) -> &str {
        (**self).current_number()
    }
}

/// Commit boundary provided by the host document
pub trait SheetNumberWriter {
    type Key;
    type Error: fmt::Display;

    fn write_number(&mut self, key: &Self::Key, number: &str) -> Result<(), Self::Error>;
}

/// Why an entry of a batch was left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason", content = "detail")]
pub enum SkipReason {
    /// The shifted number equals the current one
    NoOp,
    /// The shift would have produced a negative number
    WouldGoNegative,
    /// The numeric part is too large to shift
    Overflow,
    /// The host refused the write
    WriteFailed(String),
}

impl SkipReason {
    /// Short label used in summaries
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::NoOp => "no-op",
            SkipReason::WouldGoNegative => "would-go-negative",
            SkipReason::Overflow => "numeric-overflow",
            SkipReason::WriteFailed(_) => "write-failed",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::WriteFailed(msg) => write!(f, "{}: {}", self.label(), msg),
            other => write!(f, "{}", other.label()),
        }
    }
}

impl From<ShiftError> for SkipReason {
    fn from(err: ShiftError) -> Self {
        match err {
            ShiftError::NegativeResult { .. } => SkipReason::WouldGoNegative,
            ShiftError::Overflow { .. } => SkipReason::Overflow,
        }
    }
}

/// A successful rename
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Renumbered<K> {
    pub key: K,
    pub from: String,
    pub to: String,
}

/// An entry left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped<K> {
    pub key: K,
    pub number: String,
    pub reason: SkipReason,
}

/// Result of one batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenumberOutcome<K> {
    pub delta: i64,
    /// Renames in the order they were (or must be) applied
    pub succeeded: Vec<Renumbered<K>>,
    pub skipped: Vec<Skipped<K>>,
}

impl<K> RenumberOutcome<K> {
    fn new(delta: i64) -> Self {
        Self {
            delta,
            succeeded: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.skipped.len()
    }

    pub fn succeeded_keys(&self) -> Vec<&K> {
        self.succeeded.iter().map(|r| &r.key).collect()
    }

    /// Host-facing message, e.g. "Incremented 5 of 6 sheets by 1; 1 skipped: would-go-negative"
    pub fn summary(&self) -> String {
        let verb = if self.delta < 0 {
            "Decremented"
        } else {
            "Incremented"
        };
        let total = self.total();
        let noun = if total == 1 { "sheet" } else { "sheets" };

        let mut message = format!(
            "{} {} of {} {} by {}",
            verb,
            self.succeeded.len(),
            total,
            noun,
            self.delta.unsigned_abs()
        );

        let mut by_reason: BTreeMap<&str, usize> = BTreeMap::new();
        for skipped in &self.skipped {
            *by_reason.entry(skipped.reason.label()).or_default() += 1;
        }
        if !by_reason.is_empty() {
            let parts: Vec<String> = by_reason
                .iter()
                .map(|(label, count)| format!("{} skipped: {}", count, label))
                .collect();
            message.push_str("; ");
            message.push_str(&parts.join(", "));
        }

        message
    }
}

/// Stateless batch renumbering
#[derive(Debug, Clone, Copy, Default)]
pub struct RenumberEngine;

impl RenumberEngine {
    /// Plan the renames for a batch without writing anything
    ///
    /// Every entry is attempted; a failing entry is recorded in `skipped`
    /// and never stops the rest of the batch.
    pub fn apply<T: Renumberable>(batch: &[T], delta: i64) -> RenumberOutcome<T::Key> {
        let numbers: Vec<&str> = batch.iter().map(|item| item.current_number()).collect();
        let mut outcome = RenumberOutcome::new(delta);

        for idx in order_for_delta(&numbers, delta) {
            let item = &batch[idx];
            let current = numbers[idx];

            match shift_str(current, delta) {
                Ok(next) if next == current => outcome.skipped.push(Skipped {
                    key: item.renumber_key(),
                    number: current.to_string(),
                    reason: SkipReason::NoOp,
                }),
                Ok(next) => outcome.succeeded.push(Renumbered {
                    key: item.renumber_key(),
                    from: current.to_string(),
                    to: next,
                }),
                Err(err) => {
                    tracing::debug!("Skipping sheet {}: {}", current, err);
                    outcome.skipped.push(Skipped {
                        key: item.renumber_key(),
                        number: current.to_string(),
                        reason: err.into(),
                    });
                }
            }
        }

        outcome
    }

    /// Plan the batch and hand each rename to the host in processing order
    ///
    /// A rejected write turns that entry into a `WriteFailed` skip; the
    /// remaining writes still go through.
    pub fn apply_and_commit<T, W>(batch: &[T], delta: i64, writer: &mut W) -> RenumberOutcome<T::Key>
    where
        T: Renumberable,
        W: SheetNumberWriter<Key = T::Key>,
    {
        let planned = Self::apply(batch, delta);
        let mut outcome = RenumberOutcome::new(delta);
        outcome.skipped = planned.skipped;

        for rename in planned.succeeded {
            match writer.write_number(&rename.key, &rename.to) {
                Ok(()) => outcome.succeeded.push(rename),
                Err(err) => {
                    tracing::warn!("Could not renumber sheet {}: {}", rename.from, err);
                    outcome.skipped.push(Skipped {
                        key: rename.key,
                        number: rename.from,
                        reason: SkipReason::WriteFailed(err.to_string()),
                    });
                }
            }
        }

        tracing::info!("{}", outcome.summary());
        outcome
    }
}
