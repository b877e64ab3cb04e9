//! Selection state for one session

/// One selectable row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableEntry<T, K> {
    /// Host record, never modified
    pub item: T,
    /// Identity key extracted at load time
    pub key: K,
    /// Label shown in the list and used for filtering
    pub display_name: String,
    pub selected: bool,
}

/// Bulk selection operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOp {
    Select,
    Deselect,
    Toggle,
}

impl BulkOp {
    fn apply(self, selected: &mut bool) {
        *selected = match self {
            BulkOp::Select => true,
            BulkOp::Deselect => false,
            BulkOp::Toggle => !*selected,
        };
    }
}

/// Authoritative list of entries for a session, in load order
#[derive(Debug, Clone)]
pub struct SelectableItemStore<T, K> {
    entries: Vec<SelectableEntry<T, K>>,
}

impl<T, K> Default for SelectableItemStore<T, K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T, K: PartialEq> SelectableItemStore<T, K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with `items`, keeping their order
    pub fn load<I, FK, FD>(&mut self, items: I, key_fn: FK, display_fn: FD, default_selected: bool)
    where
        I: IntoIterator<Item = T>,
        FK: Fn(&T) -> K,
        FD: Fn(&T) -> String,
    {
        self.entries = items
            .into_iter()
            .map(|item| SelectableEntry {
                key: key_fn(&item),
                display_name: display_fn(&item),
                selected: default_selected,
                item,
            })
            .collect();
    }

    pub fn entries(&self) -> &[SelectableEntry<T, K>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&SelectableEntry<T, K>> {
        self.entries.iter().find(|e| &e.key == key)
    }

    /// Set the flag of every entry with `key`; returns false if none matched
    pub fn set_selected(&mut self, key: &K, selected: bool) -> bool {
        let mut found = false;
        for entry in self.entries.iter_mut().filter(|e| &e.key == key) {
            entry.selected = selected;
            found = true;
        }
        found
    }

    pub fn select_all(&mut self) {
        self.apply_all(BulkOp::Select);
    }

    pub fn deselect_all(&mut self) {
        self.apply_all(BulkOp::Deselect);
    }

    pub fn toggle_all(&mut self) {
        self.apply_all(BulkOp::Toggle);
    }

    /// Put every flag back to the session default
    pub fn reset(&mut self, default_selected: bool) {
        for entry in &mut self.entries {
            entry.selected = default_selected;
        }
    }

    pub fn apply_all(&mut self, op: BulkOp) {
        for entry in &mut self.entries {
            op.apply(&mut entry.selected);
        }
    }

    /// Apply `op` to the entries at `indices`; out-of-range indices are ignored
    pub fn apply_at(&mut self, op: BulkOp, indices: &[usize]) {
        for &idx in indices {
            if let Some(entry) = self.entries.get_mut(idx) {
                op.apply(&mut entry.selected);
            }
        }
    }

    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|e| e.selected).count()
    }
}

impl<T, K: PartialEq + Clone> SelectableItemStore<T, K> {
    /// Keys of all selected entries, in load order
    pub fn selected_keys(&self) -> Vec<K> {
        self.entries
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.key.clone())
            .collect()
    }
}
