use dioxus::prelude::{Key, Modifiers};
use roadmap_core::model::DisclosureState;

#[must_use]
pub fn phase_card_class(state: DisclosureState) -> &'static str {
    if state.is_expanded() {
        "phase-card active"
    } else {
        "phase-card"
    }
}

#[must_use]
pub fn accordion_class(state: DisclosureState) -> &'static str {
    if state.is_expanded() {
        "accordion-section open"
    } else {
        "accordion-section"
    }
}

#[must_use]
pub fn expand_icon(state: DisclosureState) -> &'static str {
    if state.is_expanded() { "−" } else { "+" }
}

/// Enter and Space activate a focused section header.
#[must_use]
pub fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(value) => value == " ",
        _ => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkDisclosure {
    ExpandAll,
    CollapseAll,
}

/// `Ctrl+E` expands everything, `Ctrl+Shift+C` collapses everything.
#[must_use]
pub fn bulk_shortcut(key: &Key, modifiers: Modifiers) -> Option<BulkDisclosure> {
    if !modifiers.contains(Modifiers::CONTROL) {
        return None;
    }
    let Key::Character(value) = key else {
        return None;
    };
    if value.eq_ignore_ascii_case("e") && !modifiers.contains(Modifiers::SHIFT) {
        return Some(BulkDisclosure::ExpandAll);
    }
    if value.eq_ignore_ascii_case("c") && modifiers.contains(Modifiers::SHIFT) {
        return Some(BulkDisclosure::CollapseAll);
    }
    None
}
