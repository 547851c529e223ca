//! Drag-and-Drop Widget
//!
//! Root component of one mounted widget: command triggers, the drag helper
//! and one drag target per list.

use leptos::prelude::*;

use dnd_lists::Command;
use leptos_dragdrop::bind_global_mouseup;

use crate::components::{CommandBar, DragHelper, DragTarget};
use crate::context::DndContext;

#[component]
pub fn DragAndDrop(ctx: DndContext, commands: Vec<Command>) -> impl IntoView {
    provide_context(ctx);

    // Bind document handlers for the drag lifecycle
    bind_global_mouseup(
        ctx.dnd,
        move |item| ctx.begin_drag(item),
        move |item, target| ctx.drop_on(item, target),
        move |item| ctx.cancel_drag(item),
    );

    // Both commands operate on the return list
    let commands = if ctx.has_return_list() { commands } else { Vec::new() };
    let lists = ctx.list_ids();

    view! {
        <div class="dnd-widget">
            <CommandBar commands=commands />
            <DragHelper />
            {lists
                .into_iter()
                .map(|list| view! { <DragTarget list=list /> })
                .collect_view()}
        </div>
    }
}
