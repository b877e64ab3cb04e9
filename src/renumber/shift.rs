//! Signed shifting of a single identifier

use crate::domain::Identifier;

/// Why an identifier could not be shifted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShiftError {
    /// Shifting would drive the numeric body below zero
    #[error("shifting {current} by {delta} would produce a negative number")]
    NegativeResult { current: i64, delta: i64 },

    /// The numeric body does not fit the supported integer range
    #[error("numeric part '{body}' is out of range")]
    Overflow { body: String },
}

/// Shift an identifier's numeric body by `delta`
///
/// - Zero padding is kept when the original body was zero padded; values
///   that need more digits grow past the original width.
/// - An identifier without a number gets `delta` inserted in front of its
///   suffix on a positive shift, and is left alone otherwise.
/// - A negative result is rejected; the caller keeps the original.
/// - An empty identifier never changes.
pub fn shift(id: &Identifier, delta: i64) -> Result<Identifier, ShiftError> {
    if id.is_empty() {
        return Ok(Identifier::default());
    }

    if !id.has_number() {
        if delta > 0 {
            return Ok(Identifier::new(
                id.prefix.clone(),
                delta.to_string(),
                id.suffix.clone(),
            ));
        }
        return Ok(id.clone());
    }

    let overflow = || ShiftError::Overflow {
        body: id.numeric_body.clone(),
    };

    let current: i64 = id.numeric_body.parse().map_err(|_| overflow())?;
    let shifted = current.checked_add(delta).ok_or_else(overflow)?;

    if shifted < 0 {
        return Err(ShiftError::NegativeResult { current, delta });
    }

    Ok(Identifier::new(
        id.prefix.clone(),
        render_body(&id.numeric_body, shifted),
        id.suffix.clone(),
    ))
}

/// Shift a raw sheet number string
pub fn shift_str(raw: &str, delta: i64) -> Result<String, ShiftError> {
    shift(&Identifier::parse(raw), delta).map(|id| id.to_string())
}

fn render_body(original: &str, value: i64) -> String {
    let zero_padded = original.len() > 1 && original.starts_with('0');
    if zero_padded {
        format!("{:0width$}", value, width = original.len())
    } else {
        value.to_string()
    }
}
