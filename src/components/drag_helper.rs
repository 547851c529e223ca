//! Drag Helper Component
//!
//! Label that follows the pointer while dragging: the item text, or
//! "N items" for a multi-item drag.

use leptos::prelude::*;

use crate::context::use_dnd;

#[component]
pub fn DragHelper() -> impl IntoView {
    let ctx = use_dnd();
    let dnd = ctx.dnd;

    view! {
        <Show when=move || dnd.is_dragging()>
            <div
                class="label multiple-items-drag-placeholder"
                style=move || {
                    let (x, y) = dnd.pointer_read.get();
                    format!("position: fixed; left: {}px; top: {}px; pointer-events: none;", x + 12, y + 12)
                }
            >
                {move || ctx.drag_label().unwrap_or_default()}
            </div>
        </Show>
    }
}
