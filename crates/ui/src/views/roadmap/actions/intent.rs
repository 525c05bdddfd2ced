use roadmap_core::model::SectionId;

use crate::vm::BulkDisclosure;

#[derive(Clone, Debug, PartialEq)]
pub enum RoadmapIntent {
    /// Header click or Enter/Space on a phase card or accordion.
    ToggleSection(SectionId),
    /// Timeline entry click: expand, highlight, scroll.
    Navigate(SectionId),
    ToggleItem { index: usize, checked: bool },
    /// Uncheck every item and clear the saved mapping.
    ResetProgress,
    ToggleTheme,
    Bulk(BulkDisclosure),
    Scrolled,
    /// Recompute the active nav entry right away.
    RefreshActive,
}
