//! Group scoping (sheet sets)
//!
//! A group narrows the candidate list before the text filter runs. The
//! distinguished "all" group is always offered first and matches every entry;
//! asking for a group that does not exist falls back to it.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use super::store::{SelectableEntry, SelectableItemStore};

/// Label of the catch-all group unless configured otherwise
pub const DEFAULT_ALL_LABEL: &str = "All Sheets";

/// The group a session is currently scoped to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupScope {
    #[default]
    All,
    Named(String),
}

/// Named groups and their member keys
#[derive(Debug, Clone)]
pub struct GroupCatalog<K> {
    all_label: String,
    groups: BTreeMap<String, HashSet<K>>,
}

impl<K: Eq + Hash> Default for GroupCatalog<K> {
    fn default() -> Self {
        Self::new(DEFAULT_ALL_LABEL)
    }
}

impl<K: Eq + Hash> GroupCatalog<K> {
    pub fn new(all_label: impl Into<String>) -> Self {
        Self {
            all_label: all_label.into(),
            groups: BTreeMap::new(),
        }
    }

    /// Add members to a named group, creating it if needed
    ///
    /// A group named like the catch-all label would be unreachable and is
    /// ignored.
    pub fn insert(&mut self, name: impl Into<String>, members: impl IntoIterator<Item = K>) {
        let name = name.into();
        if name == self.all_label {
            tracing::warn!("Ignoring group '{}': name is reserved", name);
            return;
        }
        self.groups.entry(name).or_default().extend(members);
    }

    pub fn all_label(&self) -> &str {
        &self.all_label
    }

    /// Choices for the group selector: the catch-all first, then names sorted
    pub fn options(&self) -> Vec<String> {
        std::iter::once(self.all_label.clone())
            .chain(self.groups.keys().cloned())
            .collect()
    }

    pub fn members(&self, name: &str) -> Option<&HashSet<K>> {
        self.groups.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Map a selector choice to a scope; unknown names mean "all"
    pub fn resolve(&self, name: &str) -> GroupScope {
        if name == self.all_label {
            return GroupScope::All;
        }
        if self.groups.contains_key(name) {
            GroupScope::Named(name.to_string())
        } else {
            tracing::debug!("Unknown group '{}', showing {}", name, self.all_label);
            GroupScope::All
        }
    }

    /// Display label of a scope
    pub fn label<'a>(&'a self, scope: &'a GroupScope) -> &'a str {
        match scope {
            GroupScope::All => &self.all_label,
            GroupScope::Named(name) => name,
        }
    }

    pub fn includes(&self, scope: &GroupScope, key: &K) -> bool {
        match scope {
            GroupScope::All => true,
            GroupScope::Named(name) => self
                .groups
                .get(name)
                .is_none_or(|members| members.contains(key)),
        }
    }

    /// Entries of `store` that belong to the group called `name`
    pub fn scope<'a, T>(
        &self,
        store: &'a SelectableItemStore<T, K>,
        name: &str,
    ) -> Vec<&'a SelectableEntry<T, K>> {
        let entries = store.entries();
        self.scope_indices(entries, &self.resolve(name))
            .into_iter()
            .map(|idx| &entries[idx])
            .collect()
    }

    /// Positions in `entries` that belong to `scope`
    pub fn scope_indices<T>(&self, entries: &[SelectableEntry<T, K>], scope: &GroupScope) -> Vec<usize> {
        entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.includes(scope, &entry.key))
            .map(|(idx, _)| idx)
            .collect()
    }
}
