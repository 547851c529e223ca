//! List Popover Component
//!
//! Trigger button plus a popout listing the items of a list, with a
//! "Remove" link per entry when items can be returned.

use leptos::prelude::*;

use dnd_lists::ListId;

use crate::context::{use_dnd, ListSnapshot};

#[component]
pub fn ListPopover(list: ListId, snapshot: Memo<ListSnapshot>) -> impl IntoView {
    let ctx = use_dnd();
    let popover = move || snapshot.get().popover.unwrap_or_default();

    let trigger_class = move || {
        if popover().disabled { "btn show-list disabled" } else { "btn show-list" }
    };

    view! {
        <a
            href="#"
            class=trigger_class
            on:click=move |ev| {
                ev.prevent_default();
                if !popover().disabled {
                    ctx.toggle_popover(list);
                }
            }
        >
            "List"
        </a>
        <Show when=move || popover().shown>
            <div class="popover">
                <button type="button" class="close" on:click=move |_| ctx.hide_popover(list)>"×"</button>
                <div class="popover-content">
                    {move || popover().header}
                    <ul>
                        <For
                            each=move || popover().entries
                            key=|entry| entry.item
                            children=move |entry| {
                                let value = entry.value.clone();
                                view! {
                                    <li data-item-id=entry.value.clone()>
                                        {entry.text.clone()}
                                        {entry.removable.then(|| view! {
                                            " "
                                            <a
                                                href="#"
                                                class="delete btn btn-mini"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    ctx.remove_from_popover(list, &value);
                                                }
                                            >
                                                <i class="icon-remove"></i>
                                                " Remove"
                                            </a>
                                        })}
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </div>
        </Show>
    }
}
