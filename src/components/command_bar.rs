//! Command Bar Component
//!
//! Buttons for the widget-wide commands found in the markup.

use leptos::prelude::*;

use dnd_lists::Command;

use crate::context::use_dnd;

#[component]
pub fn CommandBar(commands: Vec<Command>) -> impl IntoView {
    let ctx = use_dnd();

    view! {
        <div class="dnd-commands">
            {commands
                .into_iter()
                .map(|command| {
                    let class = match command {
                        Command::Return => "btn return-items",
                        Command::Randomise => "btn randomise-items",
                    };
                    view! {
                        <button
                            type="button"
                            class=class
                            data-dnd-command=command.as_str()
                            on:click=move |ev| {
                                ev.prevent_default();
                                ctx.dispatch(command);
                            }
                        >
                            {command.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
