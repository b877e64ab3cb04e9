//! Text filtering of selectable entries

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::store::SelectableEntry;

/// How the filter text is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Case-insensitive containment
    #[default]
    Substring,
    /// Case-insensitive regular expression
    Regex,
}

impl FilterMode {
    pub fn toggled(self) -> Self {
        match self {
            FilterMode::Substring => FilterMode::Regex,
            FilterMode::Regex => FilterMode::Substring,
        }
    }
}

/// Filter text plus its mode
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterQuery {
    pub text: String,
    #[serde(default)]
    pub mode: FilterMode,
}

impl FilterQuery {
    pub fn new(text: impl Into<String>, mode: FilterMode) -> Self {
        Self {
            text: text.into(),
            mode,
        }
    }

    pub fn substring(text: impl Into<String>) -> Self {
        Self::new(text, FilterMode::Substring)
    }

    pub fn regex(text: impl Into<String>) -> Self {
        Self::new(text, FilterMode::Regex)
    }

    /// Blank text lets everything through
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A query prepared for repeated matching
#[derive(Debug, Clone)]
pub enum Matcher {
    All,
    Substring(String),
    Regex(Regex),
}

impl Matcher {
    /// Prepare a query; an invalid pattern degrades to matching everything
    pub fn new(query: &FilterQuery) -> Self {
        if query.is_blank() {
            return Matcher::All;
        }

        match query.mode {
            FilterMode::Substring => Matcher::Substring(query.text.to_lowercase()),
            FilterMode::Regex => match RegexBuilder::new(&query.text)
                .case_insensitive(true)
                .build()
            {
                Ok(regex) => Matcher::Regex(regex),
                Err(e) => {
                    tracing::debug!("Ignoring invalid filter pattern '{}': {}", query.text, e);
                    Matcher::All
                }
            },
        }
    }

    pub fn matches(&self, display_name: &str) -> bool {
        match self {
            Matcher::All => true,
            Matcher::Substring(needle) => display_name.to_lowercase().contains(needle.as_str()),
            Matcher::Regex(regex) => regex.is_match(display_name),
        }
    }
}

/// Keep the entries whose display name matches `query`, in incoming order
pub fn filter_entries<'a, T, K, I>(entries: I, query: &FilterQuery) -> Vec<&'a SelectableEntry<T, K>>
where
    I: IntoIterator<Item = &'a SelectableEntry<T, K>>,
    T: 'a,
    K: 'a,
{
    let entries: Vec<_> = entries.into_iter().collect();
    matching_positions(&entries, query)
        .into_iter()
        .map(|pos| entries[pos])
        .collect()
}

/// Positions in `entries` whose display name matches `query`
pub fn matching_positions<T, K>(entries: &[&SelectableEntry<T, K>], query: &FilterQuery) -> Vec<usize> {
    let matcher = Matcher::new(query);
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| matcher.matches(&entry.display_name))
        .map(|(pos, _)| pos)
        .collect()
}
