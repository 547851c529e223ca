//! Selection and Drag Sessions
//!
//! Turns "this item was dragged onto that list" into a move. A drag that
//! starts on an item belonging to a multi-selection carries every selected
//! item of the same list along with it.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::model::{ItemId, ListId};
use crate::moves::MoveMapping;
use crate::workspace::Workspace;

/// Items picked by click or drag-select
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: BTreeSet<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the selection state of `item`; returns whether it is now selected.
    pub fn toggle(&mut self, item: ItemId) -> bool {
        if self.items.remove(&item) {
            false
        } else {
            self.items.insert(item);
            true
        }
    }

    pub fn select(&mut self, item: ItemId) {
        self.items.insert(item);
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// A drag in progress, captured when the gesture starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    source: ListId,
    items: Vec<ItemId>,
}

impl DragSession {
    /// Capture the source list and the items travelling with `item`.
    pub fn start(workspace: &Workspace, selection: &Selection, item: ItemId) -> Result<Self> {
        let source = workspace.list_of(item)?;
        let selected: Vec<ItemId> = workspace
            .list(source)?
            .items()
            .iter()
            .copied()
            .filter(|i| selection.contains(*i))
            .collect();

        let items = if selection.contains(item) && selected.len() > 1 {
            selected
        } else {
            vec![item]
        };
        tracing::trace!(%source, count = items.len(), "drag started");
        Ok(Self { source, items })
    }

    pub fn source(&self) -> ListId {
        self.source
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn is_batch(&self) -> bool {
        self.items.len() > 1
    }

    /// Text of the helper that follows the pointer.
    pub fn label(&self, workspace: &Workspace) -> String {
        if self.is_batch() {
            return format!("{} items", self.items.len());
        }
        self.items
            .first()
            .and_then(|id| workspace.item(*id).ok())
            .map(|item| item.text.clone())
            .unwrap_or_default()
    }

    pub fn into_mapping(self, target: ListId) -> MoveMapping {
        MoveMapping::new(target, self.items).from_sources(vec![self.source])
    }

    /// Drop onto `target`: one batch move, then the selection is cleared.
    pub fn complete(
        self,
        workspace: &mut Workspace,
        target: ListId,
        selection: &mut Selection,
    ) -> Result<()> {
        workspace.batch_move(vec![self.into_mapping(target)])?;
        selection.clear();
        Ok(())
    }
}
