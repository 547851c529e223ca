//! Markup Scanner
//!
//! Reads the declarative widget structure out of the page: lists with their
//! bind paths and pre-rendered items, the return list, counters, popover
//! triggers and command triggers.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use dnd_lists::{Binding, Command, DndOptions, ItemSpec, ListSpec, PopoverSpec, WorkspaceLayout};

/// Everything the widget needs from the markup
#[derive(Debug, Clone, Default)]
pub struct ScannedWidget {
    pub layout: WorkspaceLayout,
    /// Commands with a trigger in the markup, in first-seen order
    pub commands: Vec<Command>,
}

/// Scan `container` using the selectors from `options`.
pub fn scan(container: &Element, options: &DndOptions) -> Result<ScannedWidget, String> {
    let mut lists = Vec::new();
    for (index, list_el) in elements(container, &options.list_selector)?.iter().enumerate() {
        lists.push(scan_list(index, list_el, options)?);
    }

    let mut commands = Vec::new();
    if container.query_selector(&options.return_items_selector).map_err(js_err)?.is_some() {
        commands.push(Command::Return);
    }
    let command_selector = format!("[{}]", options.command_attribute);
    for trigger in elements(container, &command_selector)? {
        let Some(raw) = trigger.get_attribute(&options.command_attribute) else { continue };
        match raw.parse::<Command>() {
            Ok(command) if !commands.contains(&command) => commands.push(command),
            Ok(_) => {}
            Err(e) => web_sys::console::warn_1(&format!("[DND] Ignoring trigger: {}", e).into()),
        }
    }

    Ok(ScannedWidget {
        layout: WorkspaceLayout { lists },
        commands,
    })
}

fn scan_list(index: usize, list_el: &Element, options: &DndOptions) -> Result<ListSpec, String> {
    let bindpath = list_el.get_attribute(&options.bindpath_attribute);
    let nobind = list_el.get_attribute(&options.nobind_attribute);
    let binding = Binding::from_attributes(bindpath.as_deref(), nobind.as_deref());

    // Counter, popover trigger and title live on the enclosing target
    let scope = list_el
        .closest(&options.target_selector)
        .map_err(js_err)?
        .unwrap_or_else(|| list_el.clone());

    let name = match list_el.id() {
        id if !id.is_empty() => id,
        _ => match &binding {
            Binding::Path(path) => path.clone(),
            _ => format!("list-{}", index),
        },
    };
    let title = scope
        .query_selector(&options.title_selector)
        .map_err(js_err)?
        .and_then(|h| h.text_content())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    let counter = scope.query_selector(&options.counter_selector).map_err(js_err)?.is_some();
    let popover = scope
        .query_selector(&options.show_list_selector)
        .map_err(js_err)?
        .map(|trigger| PopoverSpec {
            header: trigger.get_attribute(&options.popover_header_attribute),
        });

    let classes = list_el.class_list();
    let mut items = Vec::new();
    for li in elements(list_el, &options.item_selector)? {
        items.push(scan_item(&li)?);
    }

    Ok(ListSpec {
        name,
        title,
        binding,
        return_list: classes.contains(&options.return_list_class),
        counter,
        popover,
        hidden: classes.contains(&options.hidden_class),
        items,
    })
}

fn scan_item(li: &Element) -> Result<ItemSpec, String> {
    let text = li.text_content().unwrap_or_default().trim().to_string();
    let input = li
        .query_selector("input")
        .map_err(js_err)?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    Ok(match input {
        Some(input) => ItemSpec {
            value: input.value(),
            text,
            field_name: input.name(),
        },
        None => ItemSpec::new(text.clone(), text),
    })
}

fn elements(root: &Element, selector: &str) -> Result<Vec<Element>, String> {
    let nodes = root.query_selector_all(selector).map_err(js_err)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn js_err(e: wasm_bindgen::JsValue) -> String {
    format!("{:?}", e)
}
