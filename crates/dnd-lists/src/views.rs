//! Auxiliary Views
//!
//! Per-list item counter and popover summary. Both are refreshed by the
//! workspace inside the list-changed notification, never on a timer.

use crate::model::{Item, ItemId};

/// Displayed item count of one list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterView {
    count: usize,
}

impl CounterView {
    pub fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn update(&mut self, count: usize) {
        self.count = count;
    }
}

/// One line of a popover listing
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    pub item: ItemId,
    pub value: String,
    pub text: String,
    /// Whether a "remove" affordance is offered for this entry
    pub removable: bool,
}

/// Popover listing the items of a list.
///
/// Entries are only regenerated while the popover is shown. An empty list
/// hides the popover and disables its trigger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopoverSummary {
    header: Option<String>,
    shown: bool,
    disabled: bool,
    entries: Vec<SummaryEntry>,
}

impl PopoverSummary {
    pub fn new(header: Option<String>) -> Self {
        Self {
            header,
            ..Default::default()
        }
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    pub(crate) fn show<'a>(&mut self, items: impl Iterator<Item = &'a Item>, removable: bool) {
        if self.disabled {
            return;
        }
        self.shown = true;
        self.regenerate(items, removable);
    }

    pub(crate) fn hide(&mut self) {
        self.shown = false;
    }

    pub(crate) fn refresh<'a>(&mut self, items: impl ExactSizeIterator<Item = &'a Item>, removable: bool) {
        if items.len() == 0 {
            self.disabled = true;
            self.shown = false;
            self.entries.clear();
            return;
        }
        self.disabled = false;
        if self.shown {
            self.regenerate(items, removable);
        }
    }

    fn regenerate<'a>(&mut self, items: impl Iterator<Item = &'a Item>, removable: bool) {
        self.entries = items
            .map(|item| SummaryEntry {
                item: item.id,
                value: item.value.clone(),
                text: item.text.clone(),
                removable,
            })
            .collect();
    }
}
