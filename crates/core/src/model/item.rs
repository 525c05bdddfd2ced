use serde::{Deserialize, Serialize};

use crate::model::ids::ItemId;

/// Maximum number of characters kept in a derived item id.
pub const ITEM_ID_MAX_LEN: usize = 20;

/// Derive the stable identifier for a checklist item from its display text.
///
/// Lowercases, drops everything outside `[a-z0-9]` and keeps the first
/// [`ITEM_ID_MAX_LEN`] characters. Distinct texts may collide once truncated;
/// colliding items share completion state.
#[must_use]
pub fn resolve_item_id(text: &str) -> ItemId {
    let id: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .take(ITEM_ID_MAX_LEN)
        .collect();
    ItemId::new(id)
}

/// A checklist entry eligible for completion tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackableItem {
    raw_text: String,
    id: ItemId,
}

impl TrackableItem {
    #[must_use]
    pub fn new(raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let id = resolve_item_id(&raw_text);
        Self { raw_text, id }
    }

    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }
}
