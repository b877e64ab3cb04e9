//! Processing order for a renumber batch
//!
//! Every write lands on a value no pending entry still holds:
//! increments run from the highest current number down, decrements from the
//! lowest up.

use std::cmp::Ordering;

use crate::domain::Identifier;

/// Compute the order in which a batch of sheet numbers must be rewritten
///
/// Returns indices into `numbers`. Unparsable or missing numeric bodies sort
/// as zero. A zero delta keeps the natural order.
pub fn order_for_delta<S: AsRef<str>>(numbers: &[S], delta: i64) -> Vec<usize> {
    let keys: Vec<(i64, &str)> = numbers
        .iter()
        .map(|raw| {
            let raw = raw.as_ref();
            (Identifier::parse(raw).sort_number(), raw)
        })
        .collect();

    let mut order: Vec<usize> = (0..numbers.len()).collect();

    match delta.cmp(&0) {
        Ordering::Greater => order.sort_by(|&a, &b| keys[b].cmp(&keys[a])),
        Ordering::Less => order.sort_by(|&a, &b| keys[a].cmp(&keys[b])),
        Ordering::Equal => {}
    }

    order
}
