//! Binding Synchronizer
//!
//! Renames each item's form field after its list's binding path and its
//! current position, so the submitted form reflects final placement.

use crate::error::{DndError, Result};
use crate::model::{Item, List};

/// Rename the fields of every item in `list`.
///
/// Fails without touching any item when the list has no binding.
pub(crate) fn synchronize(list: &List, arena: &mut [Item]) -> Result<()> {
    if !list.binding.is_configured() {
        tracing::warn!(list = %list.name, "rename attempted on list without binding");
        return Err(DndError::UnboundList(list.name.clone()));
    }
    for (index, id) in list.items.iter().enumerate() {
        if let Some(name) = list.binding.field_name(index) {
            arena[id.0].field_name = name;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Binding, ItemId, ListId};

    fn arena(values: &[&str]) -> Vec<Item> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Item {
                id: ItemId(i),
                value: v.to_string(),
                text: v.to_string(),
                field_name: "stale".to_string(),
            })
            .collect()
    }

    fn list(binding: Binding, items: Vec<usize>) -> List {
        List {
            id: ListId(0),
            name: "tutor-1".to_string(),
            title: None,
            binding,
            hidden: false,
            items: items.into_iter().map(ItemId).collect(),
            is_return: false,
            counter: None,
            popover: None,
        }
    }

    #[test]
    fn test_bound_list_follows_order() {
        let mut items = arena(&["x", "y", "z"]);
        let l = list(Binding::Path("cmd.sel".to_string()), vec![2, 0]);
        synchronize(&l, &mut items).unwrap();
        assert_eq!(items[2].field_name, "cmd.sel[0]");
        assert_eq!(items[0].field_name, "cmd.sel[1]");
        // Not in the list, left alone.
        assert_eq!(items[1].field_name, "stale");
    }

    #[test]
    fn test_nobind_blanks_fields() {
        let mut items = arena(&["x", "y"]);
        let l = list(Binding::NoBind, vec![0, 1]);
        synchronize(&l, &mut items).unwrap();
        assert!(items.iter().all(|i| i.field_name.is_empty()));
    }

    #[test]
    fn test_unset_is_an_error() {
        let mut items = arena(&["x"]);
        let l = list(Binding::Unset, vec![0]);
        let err = synchronize(&l, &mut items).unwrap_err();
        assert!(matches!(err, DndError::UnboundList(ref name) if name == "tutor-1"));
        assert_eq!(items[0].field_name, "stale");
    }
}
