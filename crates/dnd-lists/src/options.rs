//! Widget Options
//!
//! Selector and attribute names used to read the declarative markup, plus
//! the few behavioural knobs. Every field has a default matching the
//! classic markup, so an empty JSON object is a valid configuration.

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DndOptions {
    /// Selector for the item containers
    pub list_selector: String,
    /// Selector for the block wrapping a list and its extras
    pub target_selector: String,
    /// Selector for items inside a list
    pub item_selector: String,
    /// Selector for the list heading inside a target
    pub title_selector: String,
    /// Selector for the item count element inside a target
    pub counter_selector: String,
    /// Selector for the popover trigger inside a target
    pub show_list_selector: String,
    /// Selector for the global "return all" trigger
    pub return_items_selector: String,
    /// Class marking the return list
    pub return_list_class: String,
    /// Class marking a list that is only shown through its popover
    pub hidden_class: String,
    pub bindpath_attribute: String,
    pub nobind_attribute: String,
    /// Attribute on the popover trigger holding header text
    pub popover_header_attribute: String,
    /// Attribute naming a command on a trigger element
    pub command_attribute: String,
    /// Pointer travel before a mousedown becomes a drag
    pub drag_threshold_px: i32,
    /// Fixed shuffle seed; `None` seeds from the host
    pub seed: Option<u64>,
}

impl Default for DndOptions {
    fn default() -> Self {
        Self {
            list_selector: ".drag-list".to_string(),
            target_selector: ".drag-target".to_string(),
            item_selector: "li".to_string(),
            title_selector: "h3".to_string(),
            counter_selector: ".drag-count".to_string(),
            show_list_selector: ".show-list".to_string(),
            return_items_selector: ".return-items".to_string(),
            return_list_class: "return-list".to_string(),
            hidden_class: "hide".to_string(),
            bindpath_attribute: "data-bindpath".to_string(),
            nobind_attribute: "data-nobind".to_string(),
            popover_header_attribute: "data-pre".to_string(),
            command_attribute: "data-dnd-command".to_string(),
            drag_threshold_px: 5,
            seed: None,
        }
    }
}

impl DndOptions {
    /// Parse options from a JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let trimmed = json.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DndError;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(DndOptions::from_json("").unwrap(), DndOptions::default());
        assert_eq!(DndOptions::from_json("{}").unwrap(), DndOptions::default());
    }

    #[test]
    fn test_partial_override() {
        let opts = DndOptions::from_json(r#"{"listSelector": "ol.pool", "seed": 7}"#).unwrap();
        assert_eq!(opts.list_selector, "ol.pool");
        assert_eq!(opts.seed, Some(7));
        assert_eq!(opts.target_selector, ".drag-target");
        assert_eq!(opts.title_selector, "h3");
        assert_eq!(opts.drag_threshold_px, 5);
    }

    #[test]
    fn test_title_selector_override() {
        let opts = DndOptions::from_json(r#"{"titleSelector": ".tutor-name"}"#).unwrap();
        assert_eq!(opts.title_selector, ".tutor-name");
        assert_eq!(opts.counter_selector, ".drag-count");
    }

    #[test]
    fn test_malformed_json() {
        let err = DndOptions::from_json("{listSelector:").unwrap_err();
        assert!(matches!(err, DndError::InvalidOptions(_)));
    }
}
