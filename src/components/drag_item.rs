//! Drag Item Component
//!
//! One list item: drag handle, text and the hidden form field whose name
//! follows the item's list and position.

use leptos::prelude::*;

use leptos_dragdrop::make_on_handle_mousedown;

use crate::context::{use_dnd, ItemRow};

/// CSS class of the element an item is dragged by
pub const HANDLE_CLASS: &str = "handle";

#[component]
pub fn DragItem(row: ItemRow) -> impl IntoView {
    let ctx = use_dnd();
    let dnd = ctx.dnd;
    let id = row.id;

    let on_mousedown = make_on_handle_mousedown(dnd, id, HANDLE_CLASS);

    let item_class = move || {
        let mut c = String::from("student");
        if ctx.is_selected(id) { c.push_str(" ui-selected"); }
        if dnd.dragging_id_read.get() == Some(id) { c.push_str(" dragging"); }
        c
    };

    view! {
        <li
            class=item_class
            on:mousedown=on_mousedown
            on:click=move |_| {
                // The click that ends a drag is not a selection
                if !dnd.just_dragged() {
                    ctx.toggle_selection(id);
                }
            }
        >
            <i class="icon-th icon-white handle"></i>
            " "
            {row.text}
            <input type="hidden" name=row.field_name value=row.value />
        </li>
    }
}
