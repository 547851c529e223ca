//! Drag-and-drop list manager
//!
//! A [`Workspace`] holds several ordered lists of items. Items move between
//! lists singly, in batches, all at once into the return list, or dealt out
//! at random. After every move each item's form field name is derived from
//! its list's binding path and position, and list counters and popover
//! summaries are refreshed before observers hear about the change.

mod binding;
mod command;
mod drag;
mod error;
mod model;
mod moves;
mod options;
mod views;
mod workspace;

pub use command::Command;
pub use drag::{DragSession, Selection};
pub use error::{DndError, Result};
pub use model::{Binding, Item, ItemId, ItemSpec, List, ListId, ListSpec, PopoverSpec, WorkspaceLayout};
pub use moves::{partition_sizes, MoveMapping};
pub use options::DndOptions;
pub use views::{CounterView, PopoverSummary, SummaryEntry};
pub use workspace::{ListChanged, Workspace};
