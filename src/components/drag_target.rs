//! Drag Target Component
//!
//! A list with its title, counter and popover trigger. The whole block is
//! the drop area for the list.

use leptos::prelude::*;

use dnd_lists::ListId;
use leptos_dragdrop::{make_on_target_mouseenter, make_on_target_mouseleave};

use crate::components::{DragItem, ListPopover};
use crate::context::use_dnd;

#[component]
pub fn DragTarget(list: ListId) -> impl IntoView {
    let ctx = use_dnd();
    let dnd = ctx.dnd;
    let snapshot = Memo::new(move |_| ctx.snapshot(list));

    let on_mouseenter = make_on_target_mouseenter(dnd, list);
    let on_mouseleave = make_on_target_mouseleave(dnd, list);

    let target_class = move || {
        if dnd.is_drop_target(list) { "drag-target drop-hover" } else { "drag-target" }
    };
    let list_class = move || {
        let s = snapshot.get();
        let mut c = String::from("drag-list");
        if s.is_return { c.push_str(" return-list"); }
        if s.hidden { c.push_str(" hide"); }
        c
    };

    view! {
        <div class=target_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            {move || snapshot.get().title.map(|t| view! { <h3>{t}</h3> })}
            {move || snapshot.get().counter.map(|n| view! { <span class="drag-count">{n}</span> })}
            <Show when=move || snapshot.get().popover.is_some()>
                <ListPopover list=list snapshot=snapshot />
            </Show>
            <ul class=list_class data-list=move || snapshot.get().name>
                <For
                    each=move || snapshot.get().rows
                    // Renames must re-render the hidden input
                    key=|row| (row.id, row.field_name.clone())
                    children=move |row| view! { <DragItem row=row /> }
                />
            </ul>
        </div>
    }
}
