//! Widget Context
//!
//! One `DndContext` per mounted widget, provided via the Leptos Context API.
//! It owns the workspace and hands out per-list snapshots that re-render
//! when the workspace reports the list as changed.

use leptos::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dnd_lists::{
    Command, DndError, DragSession, ItemId, ListId, Selection, SummaryEntry, Workspace,
};
use leptos_dragdrop::{create_dnd_signals, DndSignals};

/// An item as rendered inside a list
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRow {
    pub id: ItemId,
    pub value: String,
    pub text: String,
    pub field_name: String,
}

/// Render state of one list
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ListSnapshot {
    pub name: String,
    pub title: Option<String>,
    pub hidden: bool,
    pub is_return: bool,
    pub rows: Vec<ItemRow>,
    pub counter: Option<usize>,
    pub popover: Option<PopoverSnapshot>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct PopoverSnapshot {
    pub header: Option<String>,
    pub shown: bool,
    pub disabled: bool,
    pub entries: Vec<SummaryEntry>,
}

#[derive(Clone, Copy)]
pub struct DndContext {
    workspace: StoredValue<Workspace, LocalStorage>,
    /// Bumped by the workspace's list-changed observer, one per list
    revisions: StoredValue<Vec<RwSignal<u32>>>,
    selection: RwSignal<Selection>,
    session: StoredValue<Option<DragSession>>,
    /// Helper text while a drag is in progress
    drag_label: RwSignal<Option<String>>,
    rng: StoredValue<StdRng>,
    pub dnd: DndSignals<ItemId, ListId>,
}

impl DndContext {
    /// Take ownership of an initialised workspace. Must run under a reactive owner.
    pub fn new(mut workspace: Workspace, seed: u64) -> Self {
        let threshold = workspace.options().drag_threshold_px;
        let mut revisions = Vec::with_capacity(workspace.lists().len());
        for index in 0..workspace.lists().len() {
            let revision = RwSignal::new(0u32);
            let list = ListId(index);
            if let Err(e) = workspace.on_list_changed(list, move |_| revision.update(|v| *v += 1)) {
                log_error("observe", &e);
            }
            revisions.push(revision);
        }

        Self {
            workspace: StoredValue::new_local(workspace),
            revisions: StoredValue::new(revisions),
            selection: RwSignal::new(Selection::new()),
            session: StoredValue::new(None),
            drag_label: RwSignal::new(None),
            rng: StoredValue::new(StdRng::seed_from_u64(seed)),
            dnd: create_dnd_signals(threshold),
        }
    }

    pub fn list_ids(&self) -> Vec<ListId> {
        self.workspace.with_value(|ws| ws.lists().iter().map(|l| l.id).collect())
    }

    pub fn has_return_list(&self) -> bool {
        self.workspace.with_value(|ws| ws.return_list().is_some())
    }

    /// Subscribe the calling reactive scope to changes of `list`.
    fn track(&self, list: ListId) {
        if let Some(revision) = self.revisions.with_value(|r| r.get(list.0).copied()) {
            revision.track();
        }
    }

    /// Current state of `list`; tracked, so views re-run after each change.
    pub fn snapshot(&self, list: ListId) -> ListSnapshot {
        self.track(list);
        self.workspace.with_value(|ws| {
            let Ok(l) = ws.list(list) else {
                return ListSnapshot::default();
            };
            let rows = ws
                .items_in(list)
                .map(|items| {
                    items
                        .map(|i| ItemRow {
                            id: i.id,
                            value: i.value.clone(),
                            text: i.text.clone(),
                            field_name: i.field_name.clone(),
                        })
                        .collect()
                })
                .unwrap_or_default();
            ListSnapshot {
                name: l.name.clone(),
                title: l.title.clone(),
                hidden: l.hidden,
                is_return: l.is_return_list(),
                rows,
                counter: l.counter().map(|c| c.count()),
                popover: l.popover().map(|p| PopoverSnapshot {
                    header: p.header().map(str::to_string),
                    shown: p.is_shown(),
                    disabled: p.is_disabled(),
                    entries: p.entries().to_vec(),
                }),
            }
        })
    }

    pub fn is_selected(&self, item: ItemId) -> bool {
        self.selection.with(|s| s.contains(item))
    }

    pub fn toggle_selection(&self, item: ItemId) {
        self.selection.update(|s| {
            s.toggle(item);
        });
    }

    pub fn drag_label(&self) -> Option<String> {
        self.drag_label.get()
    }

    pub fn dispatch(&self, command: Command) {
        web_sys::console::log_1(&format!("[DND] Command: {}", command).into());
        let rng = self.rng;
        self.mutate(command.as_str(), move |ws| {
            rng.try_update_value(|rng| ws.dispatch(command, rng))
                .unwrap_or(Ok(()))
        });
    }

    /// Pointer crossed the drag threshold on `item`: capture the source list
    /// and whatever is travelling with it.
    pub fn begin_drag(&self, item: ItemId) {
        let selection = self.selection.get_untracked();
        let started = self
            .workspace
            .with_value(|ws| DragSession::start(ws, &selection, item).map(|s| (s.label(ws), s)));
        match started {
            Ok((label, session)) => {
                self.drag_label.set(Some(label));
                self.session.set_value(Some(session));
            }
            Err(e) => log_error("drag start", &e),
        }
    }

    pub fn drop_on(&self, item: ItemId, target: ListId) {
        self.drag_label.set(None);
        let session = self.session.try_update_value(Option::take).flatten();
        let session = match session {
            Some(session) => session,
            None => {
                let selection = self.selection.get_untracked();
                match self
                    .workspace
                    .with_value(|ws| DragSession::start(ws, &selection, item))
                {
                    Ok(session) => session,
                    Err(e) => return log_error("drop", &e),
                }
            }
        };
        web_sys::console::log_1(
            &format!("[DND] Drop: {} item(s) from {} onto {}", session.items().len(), session.source(), target).into(),
        );
        let mut selection = self.selection.get_untracked();
        self.mutate("drop", |ws| session.complete(ws, target, &mut selection));
        self.selection.set(selection);
    }

    pub fn cancel_drag(&self, _item: ItemId) {
        self.drag_label.set(None);
        self.session.set_value(None);
        self.selection.update(Selection::clear);
    }

    pub fn toggle_popover(&self, list: ListId) {
        self.mutate("popover", |ws| ws.toggle_popover(list));
        self.bump(list);
    }

    pub fn hide_popover(&self, list: ListId) {
        self.mutate("popover", |ws| ws.hide_popover(list));
        self.bump(list);
    }

    pub fn remove_from_popover(&self, list: ListId, value: &str) {
        self.mutate("remove", |ws| ws.remove_from_popover(list, value));
    }

    /// Popover state is not a membership change, so no observer fires for it.
    fn bump(&self, list: ListId) {
        if let Some(revision) = self.revisions.with_value(|r| r.get(list.0).copied()) {
            revision.update(|v| *v += 1);
        }
    }

    fn mutate<F>(&self, what: &str, f: F)
    where
        F: FnOnce(&mut Workspace) -> dnd_lists::Result<()>,
    {
        if let Some(Err(e)) = self.workspace.try_update_value(f) {
            log_error(what, &e);
        }
    }
}

pub fn use_dnd() -> DndContext {
    expect_context::<DndContext>()
}

fn log_error(what: &str, e: &DndError) {
    web_sys::console::error_1(&format!("[DND] {} failed: {}", what, e).into());
}
