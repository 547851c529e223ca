//! Drag-and-Drop Lists Frontend Entry Point
//!
//! Mounts a widget on every `[data-drag-and-drop]` element in the page.
//! Options come from the element's `data-dnd-options` JSON attribute.

mod app;
mod components;
mod context;
mod markup;

use app::DragAndDrop;
use context::DndContext;
use dnd_lists::{DndOptions, Workspace};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

const CONTAINER_SELECTOR: &str = "[data-drag-and-drop]";
const OPTIONS_ATTRIBUTE: &str = "data-dnd-options";

fn main() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    let Ok(containers) = document.query_selector_all(CONTAINER_SELECTOR) else { return };

    for i in 0..containers.length() {
        let Some(container) = containers
            .item(i)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        if let Err(e) = mount_widget(container) {
            // Markup stays as rendered by the server
            web_sys::console::error_1(&format!("[DND] Widget not initialised: {}", e).into());
        }
    }
}

/// Scan the container, build its workspace and replace the markup with the
/// live widget.
fn mount_widget(container: web_sys::HtmlElement) -> Result<(), String> {
    let options = match container.get_attribute(OPTIONS_ATTRIBUTE) {
        Some(json) => DndOptions::from_json(&json).map_err(|e| e.to_string())?,
        None => DndOptions::default(),
    };
    let scanned = markup::scan(&container, &options)?;
    let seed = options.seed.unwrap_or_else(random_seed);
    let workspace = Workspace::initialize(scanned.layout, options).map_err(|e| e.to_string())?;

    web_sys::console::log_1(
        &format!("[DND] Initialised {} lists, {} items", workspace.lists().len(), workspace.item_count()).into(),
    );

    container.set_inner_html("");
    let commands = scanned.commands;
    leptos::mount::mount_to(container, move || {
        let ctx = DndContext::new(workspace, seed);
        view! { <DragAndDrop ctx=ctx commands=commands /> }
    })
    .forget();
    Ok(())
}

fn random_seed() -> u64 {
    let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let low = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (high << 32) ^ low ^ js_sys::Date::now() as u64
}
