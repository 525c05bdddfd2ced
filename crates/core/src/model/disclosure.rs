use std::collections::HashMap;

use crate::model::ids::SectionId;

/// Expanded/collapsed flag of one collapsible section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisclosureState {
    #[default]
    Collapsed,
    Expanded,
}

impl DisclosureState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Value for the `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.is_expanded() { "true" } else { "false" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Outer phase card.
    Phase,
    /// Accordion nested inside a phase card.
    Accordion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SectionEntry {
    kind: SectionKind,
    parent: Option<SectionId>,
    state: DisclosureState,
}

/// In-memory disclosure model for every collapsible section on the page.
///
/// Each section is an independent two-state machine. Nesting is recorded for
/// lookups only; no operation on one section changes another, except the
/// explicit bulk operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureRegistry {
    order: Vec<SectionId>,
    sections: HashMap<SectionId, SectionEntry>,
}

impl DisclosureRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collapsed section. Returns `false` (and keeps the existing
    /// entry) if the id is already registered.
    pub fn register(
        &mut self,
        id: SectionId,
        kind: SectionKind,
        parent: Option<SectionId>,
    ) -> bool {
        if self.sections.contains_key(&id) {
            return false;
        }
        self.order.push(id.clone());
        self.sections.insert(
            id,
            SectionEntry {
                kind,
                parent,
                state: DisclosureState::Collapsed,
            },
        );
        true
    }

    #[must_use]
    pub fn state(&self, id: &SectionId) -> Option<DisclosureState> {
        self.sections.get(id).map(|entry| entry.state)
    }

    /// Unknown sections read as collapsed.
    #[must_use]
    pub fn is_expanded(&self, id: &SectionId) -> bool {
        self.state(id).is_some_and(DisclosureState::is_expanded)
    }

    #[must_use]
    pub fn kind(&self, id: &SectionId) -> Option<SectionKind> {
        self.sections.get(id).map(|entry| entry.kind)
    }

    #[must_use]
    pub fn parent(&self, id: &SectionId) -> Option<&SectionId> {
        self.sections.get(id).and_then(|entry| entry.parent.as_ref())
    }

    /// Header activation: toggle `id` and return its new state.
    ///
    /// Returns `None` for unknown sections.
    pub fn activate(&mut self, id: &SectionId) -> Option<DisclosureState> {
        let entry = self.sections.get_mut(id)?;
        entry.state = entry.state.toggled();
        Some(entry.state)
    }

    /// Expand `id` if collapsed; never collapses.
    ///
    /// Returns `Some(true)` if the state changed, `Some(false)` if it was
    /// already expanded and `None` for unknown sections.
    pub fn force_expand(&mut self, id: &SectionId) -> Option<bool> {
        let entry = self.sections.get_mut(id)?;
        let changed = !entry.state.is_expanded();
        entry.state = DisclosureState::Expanded;
        Some(changed)
    }

    /// Expand `id` and every section enclosing it, so the target is visible.
    ///
    /// Returns the number of sections that changed, or `None` for unknown
    /// sections.
    pub fn reveal(&mut self, id: &SectionId) -> Option<usize> {
        let mut changed = usize::from(self.force_expand(id)?);
        let mut next = self.parent(id).cloned();
        while let Some(parent) = next {
            if self.force_expand(&parent) == Some(true) {
                changed += 1;
            }
            next = self.parent(&parent).cloned();
        }
        Some(changed)
    }

    /// Returns the number of sections that changed.
    pub fn expand_all(&mut self) -> usize {
        self.set_all(DisclosureState::Expanded)
    }

    /// Returns the number of sections that changed.
    pub fn collapse_all(&mut self) -> usize {
        self.set_all(DisclosureState::Collapsed)
    }

    fn set_all(&mut self, state: DisclosureState) -> usize {
        let mut changed = 0;
        for entry in self.sections.values_mut() {
            if entry.state != state {
                entry.state = state;
                changed += 1;
            }
        }
        changed
    }

    /// Section ids in registration (document) order.
    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.order.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
