use serde::{Deserialize, Serialize};

/// A sheet number split into its renumberable parts
///
/// `A-101b` parses as prefix `A-`, numeric body `101` and suffix `b`.
/// Joining the three parts always gives back the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Identifier {
    /// Everything before the trailing digit run (opaque)
    pub prefix: String,
    /// Trailing digit run, empty when the identifier carries no number
    pub numeric_body: String,
    /// A single trailing letter, or empty
    pub suffix: String,
}

impl Identifier {
    /// Build an identifier from already separated parts
    pub fn new(
        prefix: impl Into<String>,
        numeric_body: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            numeric_body: numeric_body.into(),
            suffix: suffix.into(),
        }
    }

    /// Parse a raw sheet number
    ///
    /// A trailing letter is captured first, then the digits directly in front
    /// of it become the numeric body. The prefix is never validated.
    ///
    /// Only ASCII digits form a numeric body; other decimal digits (e.g.
    /// Arabic-Indic `٣`) stay in the prefix.
    pub fn parse(raw: &str) -> Self {
        let mut working = raw;
        let mut suffix = "";

        if let Some(last) = working.chars().next_back().filter(|c| c.is_alphabetic()) {
            let split = working.len() - last.len_utf8();
            suffix = &working[split..];
            working = &working[..split];
        }

        let body_start = working
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(idx, _)| idx)
            .unwrap_or(working.len());

        Self {
            prefix: working[..body_start].to_string(),
            numeric_body: working[body_start..].to_string(),
            suffix: suffix.to_string(),
        }
    }

    /// True when the identifier carries a trailing digit run
    pub fn has_number(&self) -> bool {
        !self.numeric_body.is_empty()
    }

    /// True for the identifier parsed from an empty string
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.numeric_body.is_empty() && self.suffix.is_empty()
    }

    /// Numeric value of the body, `None` when absent or too large
    pub fn number(&self) -> Option<i64> {
        if self.numeric_body.is_empty() {
            return None;
        }
        self.numeric_body.parse().ok()
    }

    /// Numeric value used for ordering; anything unparsable counts as zero
    pub fn sort_number(&self) -> i64 {
        self.number().unwrap_or(0)
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.numeric_body, self.suffix)
    }
}

impl From<&str> for Identifier {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
