//! UI Components
//!
//! Pieces of the drag-and-drop widget.

mod command_bar;
mod drag_helper;
mod drag_item;
mod drag_target;
mod list_popover;

pub use command_bar::CommandBar;
pub use drag_helper::DragHelper;
pub use drag_item::DragItem;
pub use drag_target::DragTarget;
pub use list_popover::ListPopover;
