use roadmap_core::model::{ItemId, ProgressSummary, TrackableItem};
use services::ProgressStore;

use crate::views::ViewError;

/// One rendered checklist entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistItemVm {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

impl ChecklistItemVm {
    /// Class list for the `<li>`; `completed` dims and strikes the entry.
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.completed {
            "tracker-item completed"
        } else {
            "tracker-item"
        }
    }
}

/// Dashboard projection of the running totals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub percentage: u8,
    pub label: String,
    pub celebrating: bool,
}

impl DashboardVm {
    #[must_use]
    pub fn from_summary(summary: ProgressSummary) -> Self {
        Self {
            percentage: summary.percentage(),
            label: summary.label(),
            celebrating: summary.is_complete(),
        }
    }

    #[must_use]
    pub fn bar_style(&self) -> String {
        format!("width: {}%;", self.percentage)
    }

    #[must_use]
    pub fn text_class(&self) -> &'static str {
        if self.celebrating {
            "progress-text progress-complete"
        } else {
            "progress-text"
        }
    }
}

/// Checkbox state for every trackable item plus the running completed count.
///
/// The total is fixed when the checklist is bound. The count moves by exactly
/// one per effective toggle and always equals the number of rendered items
/// marked completed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChecklistVm {
    items: Vec<ChecklistItemVm>,
    completed: usize,
}

impl ChecklistVm {
    /// Bind items in document order against the store's current snapshot.
    #[must_use]
    pub fn bind(items: &[TrackableItem], store: &ProgressStore) -> Self {
        let mut completed = 0;
        let items = items
            .iter()
            .map(|item| {
                let done = store.is_complete(item.id());
                if done {
                    completed += 1;
                }
                ChecklistItemVm {
                    id: item.id().clone(),
                    text: item.raw_text().to_string(),
                    completed: done,
                }
            })
            .collect();
        Self { items, completed }
    }

    #[must_use]
    pub fn items(&self) -> &[ChecklistItemVm] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&ChecklistItemVm> {
        self.items.get(index)
    }

    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary::new(self.completed, self.items.len())
    }

    #[must_use]
    pub fn dashboard(&self) -> DashboardVm {
        DashboardVm::from_summary(self.summary())
    }

    /// Update one item's checkbox. Returns the id to persist when the item
    /// actually changed.
    pub fn apply(&mut self, index: usize, checked: bool) -> Option<ItemId> {
        let item = self.items.get_mut(index)?;
        if item.completed == checked {
            return None;
        }
        item.completed = checked;
        if checked {
            self.completed += 1;
        } else {
            self.completed = self.completed.saturating_sub(1);
        }
        Some(item.id.clone())
    }

    /// Uncheck everything. Returns how many items changed.
    pub fn clear(&mut self) -> usize {
        let changed = self.completed;
        for item in &mut self.items {
            item.completed = false;
        }
        self.completed = 0;
        changed
    }
}

/// # Errors
///
/// Returns `ViewError::Storage` if the write fails.
pub async fn persist_toggle(
    store: &ProgressStore,
    id: &ItemId,
    checked: bool,
) -> Result<(), ViewError> {
    store
        .set_complete(id, checked)
        .await
        .map(|_| ())
        .map_err(|_| ViewError::Storage)
}
