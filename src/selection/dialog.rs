//! Selection dialog session
//!
//! Owns the store, the active group scope and the filter query for one modal
//! session. Every mutation re-derives the visible view (scope first, then the
//! text filter), and the session ends either confirmed with a
//! [`DialogResult`] or cancelled.

use std::hash::Hash;

use serde::Serialize;

use super::filter::{matching_positions, FilterMode, FilterQuery};
use super::scope::{GroupCatalog, GroupScope};
use super::store::{BulkOp, SelectableEntry, SelectableItemStore};
use crate::config::DialogConfig;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogState {
    /// Created, nothing loaded yet
    Idle,
    /// Loaded and accepting edits
    Filtering,
    Confirmed,
    Cancelled,
}

impl DialogState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DialogState::Confirmed | DialogState::Cancelled)
    }
}

/// Why a confirm attempt was refused; the session stays open
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfirmError {
    #[error("Please select at least one item.")]
    EmptySelection,

    #[error("Invalid value entered for '{label}': '{value}'")]
    InvalidOperand { label: String, value: String },

    #[error("The selection session is not open")]
    NotActive,
}

/// Final outcome of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogResult<K> {
    pub confirmed: bool,
    /// Selected keys of the active group, in load order
    pub selected_keys: Vec<K>,
    /// Parsed operand when the session requested one
    pub operand: Option<i64>,
    /// Group active at confirm time when the group selector is shown
    pub selected_group: Option<String>,
}

impl<K> DialogResult<K> {
    fn cancelled() -> Self {
        Self {
            confirmed: false,
            selected_keys: Vec::new(),
            operand: None,
            selected_group: None,
        }
    }
}

/// One interactive selection session
#[derive(Debug)]
pub struct SelectionDialog<T, K> {
    config: DialogConfig,
    state: DialogState,
    store: SelectableItemStore<T, K>,
    groups: GroupCatalog<K>,
    scope: GroupScope,
    query: FilterQuery,
    operand_text: String,
    /// Store positions inside the active group
    candidates: Vec<usize>,
    /// Candidates that also pass the text filter
    visible: Vec<usize>,
}

impl<T, K> SelectionDialog<T, K>
where
    K: Clone + Eq + Hash,
{
    pub fn new(config: DialogConfig) -> Self {
        let operand_text = config
            .operand
            .as_ref()
            .map(|o| o.default_value.clone())
            .unwrap_or_default();

        Self {
            config,
            state: DialogState::Idle,
            store: SelectableItemStore::new(),
            groups: GroupCatalog::default(),
            scope: GroupScope::All,
            query: FilterQuery::default(),
            operand_text,
            candidates: Vec::new(),
            visible: Vec::new(),
        }
    }

    /// Populate the session and start filtering
    pub fn load<I, FK, FD>(&mut self, items: I, key_fn: FK, display_fn: FD, groups: GroupCatalog<K>)
    where
        I: IntoIterator<Item = T>,
        FK: Fn(&T) -> K,
        FD: Fn(&T) -> String,
    {
        if self.state.is_terminal() {
            tracing::debug!("Ignoring load on a closed session");
            return;
        }

        self.store
            .load(items, key_fn, display_fn, self.config.default_select_all);
        self.groups = groups;
        self.scope = self.default_scope();
        self.query = FilterQuery::default();
        self.state = DialogState::Filtering;
        self.refresh_view();

        tracing::debug!(
            "Opened '{}' with {} entries in {} groups",
            self.config.title,
            self.store.len(),
            self.groups.options().len()
        );
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == DialogState::Filtering
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn scope(&self) -> &GroupScope {
        &self.scope
    }

    pub fn scope_label(&self) -> &str {
        self.groups.label(&self.scope)
    }

    /// Choices for the group selector
    pub fn group_options(&self) -> Vec<String> {
        self.groups.options()
    }

    pub fn operand_text(&self) -> &str {
        &self.operand_text
    }

    /// Entries of the active group
    pub fn candidates(&self) -> Vec<&SelectableEntry<T, K>> {
        self.entries_at(&self.candidates)
    }

    /// Entries currently shown: the active group narrowed by the filter
    pub fn visible(&self) -> Vec<&SelectableEntry<T, K>> {
        self.entries_at(&self.visible)
    }

    /// Number of selected entries in the active group
    pub fn selected_count(&self) -> usize {
        self.candidates
            .iter()
            .filter(|&&idx| self.store.entries()[idx].selected)
            .count()
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        if !self.accepts("query", self.config.show_search) {
            return;
        }
        self.query.text = text.into();
        self.refresh_view();
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        if !self.accepts("filter mode", self.config.show_search) {
            return;
        }
        self.query.mode = mode;
        self.refresh_view();
    }

    /// Switch between substring and regex filtering; returns the new mode
    pub fn toggle_regex(&mut self) -> FilterMode {
        self.set_filter_mode(self.query.mode.toggled());
        self.query.mode
    }

    pub fn clear_query(&mut self) {
        self.set_query_text(String::new());
    }

    /// Re-scope to the group called `name`; unknown names select all
    ///
    /// The candidate list is rebuilt, so selection flags return to the
    /// session default and the current query runs against the new group.
    pub fn set_group(&mut self, name: &str) {
        if !self.accepts("group", self.config.show_group_scope) {
            return;
        }
        self.scope = self.groups.resolve(name);
        self.store.reset(self.config.default_select_all);
        self.refresh_view();
    }

    pub fn set_selected(&mut self, key: &K, selected: bool) {
        if !self.accepts("selection", true) {
            return;
        }
        if !self.store.set_selected(key, selected) {
            tracing::debug!("No entry for the requested key");
        }
    }

    /// Check every visible entry
    pub fn check_visible(&mut self) {
        self.bulk(BulkOp::Select);
    }

    /// Uncheck every visible entry
    pub fn uncheck_visible(&mut self) {
        self.bulk(BulkOp::Deselect);
    }

    /// Flip every visible entry
    pub fn toggle_visible(&mut self) {
        self.bulk(BulkOp::Toggle);
    }

    /// Restore default selection, clear the filter and return to the default group
    pub fn reset(&mut self) {
        if !self.accepts("reset", self.config.show_reset_button) {
            return;
        }
        self.store.reset(self.config.default_select_all);
        self.query.text.clear();
        self.scope = self.default_scope();
        self.refresh_view();
    }

    pub fn set_operand_text(&mut self, text: impl Into<String>) {
        if !self.accepts("operand", self.config.operand.is_some()) {
            return;
        }
        self.operand_text = text.into();
    }

    /// Close the session with the current selection
    ///
    /// On error nothing changes and the session stays open.
    pub fn confirm(&mut self) -> Result<DialogResult<K>, ConfirmError> {
        if !self.is_active() {
            return Err(ConfirmError::NotActive);
        }

        let selected_keys: Vec<K> = self
            .candidates
            .iter()
            .map(|&idx| &self.store.entries()[idx])
            .filter(|entry| entry.selected)
            .map(|entry| entry.key.clone())
            .collect();

        if selected_keys.is_empty() && self.config.require_selection {
            return Err(ConfirmError::EmptySelection);
        }

        let operand = self.parse_operand()?;

        let selected_group = self
            .config
            .show_group_scope
            .then(|| self.scope_label().to_string());

        self.state = DialogState::Confirmed;
        tracing::debug!(
            "Confirmed '{}' with {} selected",
            self.config.title,
            selected_keys.len()
        );

        Ok(DialogResult {
            confirmed: true,
            selected_keys,
            operand,
            selected_group,
        })
    }

    /// Dismiss the session, discarding the selection
    pub fn cancel(&mut self) -> DialogResult<K> {
        if !self.state.is_terminal() {
            self.state = DialogState::Cancelled;
        }
        DialogResult::cancelled()
    }

    fn parse_operand(&self) -> Result<Option<i64>, ConfirmError> {
        let Some(operand) = &self.config.operand else {
            return Ok(None);
        };

        let invalid = || ConfirmError::InvalidOperand {
            label: operand.label.clone(),
            value: self.operand_text.clone(),
        };

        let value: i64 = self.operand_text.trim().parse().map_err(|_| invalid())?;
        if operand.require_positive && value <= 0 {
            return Err(invalid());
        }
        Ok(Some(value))
    }

    fn default_scope(&self) -> GroupScope {
        if !self.config.show_group_scope {
            return GroupScope::All;
        }
        match &self.config.default_group {
            Some(name) => self.groups.resolve(name),
            None => GroupScope::All,
        }
    }

    fn bulk(&mut self, op: BulkOp) {
        if !self.accepts("bulk selection", self.config.show_check_buttons) {
            return;
        }
        self.store.apply_at(op, &self.visible);
    }

    /// Gate for edits: the session must be open and the control enabled
    fn accepts(&self, what: &str, enabled: bool) -> bool {
        if !self.is_active() {
            tracing::debug!("Ignoring {} change: session is {:?}", what, self.state);
            return false;
        }
        if !enabled {
            tracing::debug!("Ignoring {} change: disabled for '{}'", what, self.config.title);
            return false;
        }
        true
    }

    fn refresh_view(&mut self) {
        let (candidates, visible) =
            derive_view(self.store.entries(), &self.groups, &self.scope, &self.query);
        self.candidates = candidates;
        self.visible = visible;
    }

    fn entries_at(&self, indices: &[usize]) -> Vec<&SelectableEntry<T, K>> {
        indices.iter().map(|&idx| &self.store.entries()[idx]).collect()
    }
}

/// Scope then filter: returns (candidate positions, visible positions)
pub fn derive_view<T, K: Eq + Hash>(
    entries: &[SelectableEntry<T, K>],
    groups: &GroupCatalog<K>,
    scope: &GroupScope,
    query: &FilterQuery,
) -> (Vec<usize>, Vec<usize>) {
    let candidates = groups.scope_indices(entries, scope);
    let scoped: Vec<_> = candidates.iter().map(|&idx| &entries[idx]).collect();
    let visible = matching_positions(&scoped, query)
        .into_iter()
        .map(|pos| candidates[pos])
        .collect();
    (candidates, visible)
}

#[cfg(test)]
mod tests;
