//! List Registry
//!
//! The workspace owns every list of one widget, the item arena, the
//! optional return list and the list-changed observers. Membership is only
//! ever changed through the move engine (see `moves`).

use std::fmt;

use crate::binding;
use crate::error::{DndError, Result};
use crate::model::{Item, ItemId, List, ListId, WorkspaceLayout};
use crate::options::DndOptions;
use crate::views::{CounterView, PopoverSummary};

/// Emitted after any mutation affecting a list, once its bindings and
/// views are consistent again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListChanged {
    pub list: ListId,
    pub len: usize,
}

type Callback = Box<dyn FnMut(&ListChanged)>;

struct Observer {
    /// `None` observes every list
    scope: Option<ListId>,
    callback: Callback,
}

pub struct Workspace {
    pub(crate) lists: Vec<List>,
    pub(crate) items: Vec<Item>,
    /// Current list of each item, indexed like `items`
    pub(crate) owner: Vec<ListId>,
    pub(crate) return_list: Option<ListId>,
    observers: Vec<Observer>,
    options: DndOptions,
}

impl fmt::Debug for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workspace")
            .field("lists", &self.lists)
            .field("items", &self.items)
            .field("return_list", &self.return_list)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Workspace {
    /// Build a workspace from its declared layout and synchronise every list.
    ///
    /// Fails if more than one list is flagged as the return list, or if any
    /// list has no binding configuration.
    pub fn initialize(layout: WorkspaceLayout, options: DndOptions) -> Result<Self> {
        let mut lists = Vec::with_capacity(layout.lists.len());
        let mut items = Vec::new();
        let mut owner = Vec::new();
        let mut return_list: Option<ListId> = None;

        for (index, spec) in layout.lists.into_iter().enumerate() {
            let id = ListId(index);
            if spec.return_list {
                if let Some(first) = return_list {
                    let first: &List = &lists[first.0];
                    return Err(DndError::MultipleReturnLists {
                        first: first.name.clone(),
                        second: spec.name,
                    });
                }
                return_list = Some(id);
            }

            let mut members = Vec::with_capacity(spec.items.len());
            for item in spec.items {
                let item_id = ItemId(items.len());
                items.push(Item {
                    id: item_id,
                    value: item.value,
                    text: item.text,
                    field_name: item.field_name,
                });
                owner.push(id);
                members.push(item_id);
            }

            lists.push(List {
                id,
                name: spec.name,
                title: spec.title,
                binding: spec.binding,
                hidden: spec.hidden,
                items: members,
                is_return: spec.return_list,
                counter: spec.counter.then(CounterView::default),
                popover: spec.popover.map(|p| PopoverSummary::new(p.header)),
            });
        }

        let mut workspace = Self {
            lists,
            items,
            owner,
            return_list,
            observers: Vec::new(),
            options,
        };
        for index in 0..workspace.lists.len() {
            workspace.notify(ListId(index))?;
        }
        tracing::debug!(
            lists = workspace.lists.len(),
            items = workspace.items.len(),
            "workspace initialized"
        );
        Ok(workspace)
    }

    pub fn options(&self) -> &DndOptions {
        &self.options
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn list(&self, id: ListId) -> Result<&List> {
        self.lists.get(id.0).ok_or(DndError::UnknownList(id))
    }

    pub fn item(&self, id: ItemId) -> Result<&Item> {
        self.items.get(id.0).ok_or(DndError::UnknownItem(id))
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The list currently holding `item`
    pub fn list_of(&self, item: ItemId) -> Result<ListId> {
        self.owner.get(item.0).copied().ok_or(DndError::UnknownItem(item))
    }

    pub fn find_list(&self, name: &str) -> Option<ListId> {
        self.lists.iter().find(|l| l.name == name).map(|l| l.id)
    }

    pub fn return_list(&self) -> Option<ListId> {
        self.return_list
    }

    /// Lists other than the return list, in declaration order
    pub fn target_lists(&self) -> Vec<ListId> {
        self.lists
            .iter()
            .filter(|l| !l.is_return)
            .map(|l| l.id)
            .collect()
    }

    /// Items of `list` in order
    pub fn items_in(&self, list: ListId) -> Result<impl Iterator<Item = &Item> + '_> {
        let list = self.list(list)?;
        Ok(list.items.iter().map(move |id| &self.items[id.0]))
    }

    /// Values of the items in `list`, in order
    pub fn values_in(&self, list: ListId) -> Result<Vec<String>> {
        Ok(self.items_in(list)?.map(|i| i.value.clone()).collect())
    }

    /// Observe changes of a single list.
    pub fn on_list_changed<F>(&mut self, list: ListId, callback: F) -> Result<()>
    where
        F: FnMut(&ListChanged) + 'static,
    {
        self.list(list)?;
        self.observers.push(Observer {
            scope: Some(list),
            callback: Box::new(callback),
        });
        Ok(())
    }

    /// Observe changes of every list.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&ListChanged) + 'static,
    {
        self.observers.push(Observer {
            scope: None,
            callback: Box::new(callback),
        });
    }

    /// Open the popover of `list`. Does nothing while its trigger is disabled.
    pub fn show_popover(&mut self, list: ListId) -> Result<()> {
        self.list(list)?;
        let removable = self.popover_removable(list);
        let items = &self.items;
        let target = &mut self.lists[list.0];
        if let Some(popover) = target.popover.as_mut() {
            popover.show(target.items.iter().map(|id| &items[id.0]), removable);
        }
        Ok(())
    }

    pub fn hide_popover(&mut self, list: ListId) -> Result<()> {
        self.list(list)?;
        if let Some(popover) = self.lists[list.0].popover.as_mut() {
            popover.hide();
        }
        Ok(())
    }

    pub fn toggle_popover(&mut self, list: ListId) -> Result<()> {
        let shown = self
            .list(list)?
            .popover
            .as_ref()
            .is_some_and(PopoverSummary::is_shown);
        if shown {
            self.hide_popover(list)
        } else {
            self.show_popover(list)
        }
    }

    /// Handle the "remove" affordance of a popover entry: return the item of
    /// `list` whose value is `value` to the return list.
    pub fn remove_from_popover(&mut self, list: ListId, value: &str) -> Result<()> {
        let item = self
            .items_in(list)?
            .find(|i| i.value == value)
            .map(|i| i.id);
        match item {
            Some(item) => self.return_item(item),
            None => {
                tracing::debug!(%list, value, "popover entry no longer in list");
                Ok(())
            }
        }
    }

    fn popover_removable(&self, list: ListId) -> bool {
        self.return_list.is_some_and(|r| r != list)
    }

    /// Re-run every reaction for `list`: binding sync, counter, popover,
    /// then observers. Runs to completion before returning.
    pub(crate) fn notify(&mut self, id: ListId) -> Result<()> {
        let removable = self.popover_removable(id);
        let list = &mut self.lists[id.0];
        binding::synchronize(list, &mut self.items)?;

        let len = list.items.len();
        if let Some(counter) = list.counter.as_mut() {
            counter.update(len);
        }
        if let Some(popover) = list.popover.as_mut() {
            let items = &self.items;
            popover.refresh(list.items.iter().map(|i| &items[i.0]), removable);
        }
        tracing::trace!(list = %list.name, len, "list changed");

        let event = ListChanged { list: id, len };
        for observer in self.observers.iter_mut() {
            if observer.scope.map_or(true, |scope| scope == id) {
                (observer.callback)(&event);
            }
        }
        Ok(())
    }

    pub(crate) fn check_configured(&self, id: ListId) -> Result<()> {
        let list = self.list(id)?;
        if list.binding.is_configured() {
            Ok(())
        } else {
            Err(DndError::UnboundList(list.name.clone()))
        }
    }
}
