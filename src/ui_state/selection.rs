use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Set of selected row ids on an admin table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    /// Flip one row. Returns whether the row is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Header checkbox: clear when every row is selected, otherwise select every row.
    pub fn toggle_all(&mut self, all_ids: &[String]) {
        if self.all_selected(all_ids) {
            self.clear();
        } else {
            self.ids = all_ids.iter().cloned().collect();
        }
    }

    pub fn all_selected(&self, all_ids: &[String]) -> bool {
        !all_ids.is_empty() && all_ids.iter().all(|id| self.ids.contains(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Hand over the selected ids and clear the selection, as a bulk action does.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.ids).into_iter().collect()
    }
}
