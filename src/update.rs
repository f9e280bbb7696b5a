//! Update-by-id: patch an element or action found by its `id`.
//!
//! A patch is a JSON object keyed by wire names (`"isVisible"`, not
//! `is_visible`). Every key must be a declared field of the target node; a
//! `null` value clears an optional field. The patched node must still
//! deserialize to the same type, otherwise the card is left untouched.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::UpdateError;
use crate::fields::Node;
use crate::types::*;

impl Card {
    /// Depth-first search of the body for an item with `id`.
    pub fn find_item(&self, id: &str) -> Option<&CardItem> {
        find_item_in(self.body.as_deref()?, id)
    }

    /// Search top-level actions, then action sets in the body.
    pub fn find_action(&self, id: &str) -> Option<&Action> {
        if let Some(found) = self
            .actions
            .iter()
            .flatten()
            .find(|a| a.id() == Some(id))
        {
            return Some(found);
        }
        find_action_in_items(self.body.as_deref()?, id)
    }

    pub fn update_item(&mut self, id: &str, patch: &Value) -> Result<(), UpdateError> {
        let patch = patch.as_object().ok_or(UpdateError::PatchNotObject)?;
        let body = self.body.as_deref_mut();
        let item = body
            .and_then(|items| find_item_in_mut(items, id))
            .ok_or_else(|| UpdateError::IdNotFound(id.to_string()))?;
        apply_patch(item, patch)?;
        tracing::debug!(id, fields = patch.len(), "updated card item");
        Ok(())
    }

    pub fn update_action(&mut self, id: &str, patch: &Value) -> Result<(), UpdateError> {
        let patch = patch.as_object().ok_or(UpdateError::PatchNotObject)?;
        let action = self
            .find_action_mut(id)
            .ok_or_else(|| UpdateError::IdNotFound(id.to_string()))?;
        apply_patch(action, patch)?;
        tracing::debug!(id, fields = patch.len(), "updated card action");
        Ok(())
    }

    fn find_action_mut(&mut self, id: &str) -> Option<&mut Action> {
        let Card { actions, body, .. } = self;
        if let Some(found) = actions
            .iter_mut()
            .flatten()
            .find(|a| a.id() == Some(id))
        {
            return Some(found);
        }
        find_action_in_items_mut(body.as_deref_mut()?, id)
    }
}

fn apply_patch<T>(target: &mut T, patch: &Map<String, Value>) -> Result<(), UpdateError>
where
    T: Node + Serialize + DeserializeOwned,
{
    let node = target.type_name();
    let declared: Vec<String> = target
        .fields()
        .iter()
        .map(|f| f.wire_name().into_owned())
        .collect();
    if let Some(unknown) = patch.keys().find(|k| !declared.contains(k)) {
        return Err(UpdateError::FieldNotFound {
            node,
            field: unknown.clone(),
        });
    }

    let invalid = |reason: String| UpdateError::InvalidValueType { node, reason };
    let mut value = serde_json::to_value(&*target).map_err(|e| invalid(e.to_string()))?;
    let object = value
        .as_object_mut()
        .ok_or_else(|| invalid("node does not serialize to an object".to_string()))?;
    for (key, field_value) in patch {
        if field_value.is_null() {
            object.remove(key);
        } else {
            object.insert(key.clone(), field_value.clone());
        }
    }

    let updated: T = serde_json::from_value(value).map_err(|e| invalid(e.to_string()))?;
    if updated.type_name() != node {
        return Err(invalid(format!(
            "type cannot change from {node} to {}",
            updated.type_name()
        )));
    }
    *target = updated;
    Ok(())
}

// ─── Search ─────────────────────────────────────────────────────────────────

fn children(item: &CardItem) -> Vec<&Vec<CardItem>> {
    match item {
        CardItem::Container(c) => vec![&c.items],
        CardItem::ColumnSet(set) => set
            .columns
            .iter()
            .flatten()
            .filter_map(|col| col.items.as_ref())
            .collect(),
        CardItem::Table(table) => table
            .rows
            .iter()
            .flatten()
            .flat_map(|row| row.cells.iter().flatten())
            .map(|cell| &cell.items)
            .collect(),
        _ => Vec::new(),
    }
}

fn children_mut(item: &mut CardItem) -> Vec<&mut Vec<CardItem>> {
    match item {
        CardItem::Container(c) => vec![&mut c.items],
        CardItem::ColumnSet(set) => set
            .columns
            .iter_mut()
            .flatten()
            .filter_map(|col| col.items.as_mut())
            .collect(),
        CardItem::Table(table) => table
            .rows
            .iter_mut()
            .flatten()
            .flat_map(|row| row.cells.iter_mut().flatten())
            .map(|cell| &mut cell.items)
            .collect(),
        _ => Vec::new(),
    }
}

fn find_item_in<'a>(items: &'a [CardItem], id: &str) -> Option<&'a CardItem> {
    for item in items {
        if item.id() == Some(id) {
            return Some(item);
        }
        if let Some(found) = children(item)
            .into_iter()
            .find_map(|list| find_item_in(list, id))
        {
            return Some(found);
        }
    }
    None
}

fn find_item_in_mut<'a>(items: &'a mut [CardItem], id: &str) -> Option<&'a mut CardItem> {
    for item in items {
        if item.id() == Some(id) {
            return Some(item);
        }
        if let Some(found) = children_mut(item)
            .into_iter()
            .find_map(|list| find_item_in_mut(list, id))
        {
            return Some(found);
        }
    }
    None
}

fn find_action_in_items<'a>(items: &'a [CardItem], id: &str) -> Option<&'a Action> {
    for item in items {
        if let CardItem::ActionSet(set) = item
            && let Some(found) = set.actions.iter().find(|a| a.id() == Some(id))
        {
            return Some(found);
        }
        if let Some(found) = children(item)
            .into_iter()
            .find_map(|list| find_action_in_items(list, id))
        {
            return Some(found);
        }
    }
    None
}

fn find_action_in_items_mut<'a>(items: &'a mut [CardItem], id: &str) -> Option<&'a mut Action> {
    for item in items {
        if let CardItem::ActionSet(set) = item {
            if let Some(found) = set.actions.iter_mut().find(|a| a.id() == Some(id)) {
                return Some(found);
            }
            continue;
        }
        if let Some(found) = children_mut(item)
            .into_iter()
            .find_map(|list| find_action_in_items_mut(list, id))
        {
            return Some(found);
        }
    }
    None
}
