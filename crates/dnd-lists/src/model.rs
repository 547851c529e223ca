//! List Manager Models
//!
//! Ids, the declarative layout a workspace is built from, and the runtime
//! list/item records.

use std::fmt;

use serde::Deserialize;

use crate::views::{CounterView, PopoverSummary};

/// Index of a list within its workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListId(pub usize);

/// Index of an item within the workspace item arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub usize);

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list#{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// How a list names the form fields of the items it holds
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase", tag = "kind", content = "path")]
pub enum Binding {
    /// Fields are named `<path>[<index>]`
    Path(String),
    /// Fields are blanked
    NoBind,
    /// Misconfigured; any rename fails
    #[default]
    Unset,
}

impl Binding {
    /// Resolve a binding from the raw bind-path and no-bind attribute values.
    ///
    /// `data-bindpath="true"` is accepted as a no-bind marker too, since the
    /// classic markup documents it that way.
    pub fn from_attributes(bindpath: Option<&str>, nobind: Option<&str>) -> Self {
        if nobind.map(str::trim) == Some("true") {
            return Binding::NoBind;
        }
        match bindpath.map(str::trim) {
            Some("true") => Binding::NoBind,
            Some(path) if !path.is_empty() => Binding::Path(path.to_string()),
            _ => Binding::Unset,
        }
    }

    /// Field name for the item at `index`, or `None` when unset.
    pub fn field_name(&self, index: usize) -> Option<String> {
        match self {
            Binding::Path(path) => Some(format!("{}[{}]", path, index)),
            Binding::NoBind => Some(String::new()),
            Binding::Unset => None,
        }
    }

    pub fn is_configured(&self) -> bool {
        !matches!(self, Binding::Unset)
    }
}

/// An item as declared in markup
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemSpec {
    /// Value of the item's hidden input
    pub value: String,
    /// Display text
    pub text: String,
    /// Field name present in the markup, overwritten by the first sync
    #[serde(default)]
    pub field_name: String,
}

impl ItemSpec {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            field_name: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PopoverSpec {
    /// Text shown above the item listing
    pub header: Option<String>,
}

/// A list as declared in markup
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ListSpec {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub binding: Binding,
    #[serde(default)]
    pub return_list: bool,
    #[serde(default)]
    pub counter: bool,
    #[serde(default)]
    pub popover: Option<PopoverSpec>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

impl ListSpec {
    pub fn bound(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            binding: Binding::Path(path.into()),
            ..Default::default()
        }
    }

    pub fn with_items<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(values.into_iter().map(|v| {
            let v = v.into();
            ItemSpec::new(v.clone(), v)
        }));
        self
    }

    pub fn as_return_list(mut self) -> Self {
        self.return_list = true;
        self
    }

    pub fn with_counter(mut self) -> Self {
        self.counter = true;
        self
    }

    pub fn with_popover(mut self, header: Option<&str>) -> Self {
        self.popover = Some(PopoverSpec {
            header: header.map(str::to_string),
        });
        self
    }
}

/// The whole declarative structure of one widget
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct WorkspaceLayout {
    pub lists: Vec<ListSpec>,
}

/// A draggable unit. It does not know its list; membership is positional.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub value: String,
    pub text: String,
    pub field_name: String,
}

/// An ordered collection of items with its binding and attached views
#[derive(Debug, Clone)]
pub struct List {
    pub id: ListId,
    pub name: String,
    pub title: Option<String>,
    pub binding: Binding,
    pub hidden: bool,
    pub(crate) items: Vec<ItemId>,
    pub(crate) is_return: bool,
    pub(crate) counter: Option<CounterView>,
    pub(crate) popover: Option<PopoverSummary>,
}

impl List {
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_return_list(&self) -> bool {
        self.is_return
    }

    pub fn counter(&self) -> Option<&CounterView> {
        self.counter.as_ref()
    }

    pub fn popover(&self) -> Option<&PopoverSummary> {
        self.popover.as_ref()
    }
}
