//! Transient detail/dialog state kept apart from the filter engine.

use std::borrow::Borrow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Dialogs a collection screen can open over its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialog {
    Details,
    Create,
    Edit,
    ConfirmDelete,
    Upload,
}

/// Active selection plus the set of open dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState<Id> {
    selected: Option<Id>,
    open: BTreeSet<Dialog>,
}

impl<Id> Default for SelectionState<Id> {
    fn default() -> Self {
        Self {
            selected: None,
            open: BTreeSet::new(),
        }
    }
}

impl<Id: PartialEq> SelectionState<Id> {
    pub fn selected(&self) -> Option<&Id> {
        self.selected.as_ref()
    }

    pub fn is_selected<Q>(&self, id: &Q) -> bool
    where
        Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.selected.as_ref().is_some_and(|selected| selected.borrow() == id)
    }

    pub fn select(&mut self, id: Id) {
        self.selected = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn open(&mut self, dialog: Dialog) {
        self.open.insert(dialog);
    }

    pub fn close(&mut self, dialog: Dialog) {
        self.open.remove(&dialog);
    }

    pub fn close_all(&mut self) {
        self.open.clear();
    }

    pub fn is_open(&self, dialog: Dialog) -> bool {
        self.open.contains(&dialog)
    }

    pub fn open_dialogs(&self) -> impl Iterator<Item = Dialog> + '_ {
        self.open.iter().copied()
    }
}
