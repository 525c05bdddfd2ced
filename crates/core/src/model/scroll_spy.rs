use serde::{Deserialize, Serialize};

use crate::model::ids::SectionId;

/// Measured position of one observable section, in document coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(id: impl Into<SectionId>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Maps a scroll offset to the section whose navigation entry is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSpy {
    lookahead: f64,
}

impl ScrollSpy {
    #[must_use]
    pub fn new(lookahead: f64) -> Self {
        Self { lookahead }
    }

    #[must_use]
    pub fn lookahead(&self) -> f64 {
        self.lookahead
    }

    /// Last section, in document order, whose `top - lookahead` is at or
    /// above `scroll_offset`. Later sections win ties.
    #[must_use]
    pub fn active<'a>(
        &self,
        scroll_offset: f64,
        sections: &'a [SectionBounds],
    ) -> Option<&'a SectionId> {
        sections
            .iter()
            .rev()
            .find(|section| scroll_offset >= section.top - self.lookahead)
            .map(|section| &section.id)
    }
}

/// Scroll offset that brings a section's top just below the fixed header.
#[must_use]
pub fn scroll_target(section_top: f64, header_offset: f64) -> f64 {
    (section_top - header_offset).max(0.0)
}

/// Trailing-edge debounce driven by generation tokens.
///
/// Each event takes a new ticket; after the quiet period the caller checks
/// whether its ticket is still the latest and only then does the work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debounce {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

impl Debounce {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede every outstanding ticket.
    pub fn schedule(&mut self) -> DebounceTicket {
        self.generation = self.generation.wrapping_add(1);
        DebounceTicket(self.generation)
    }

    #[must_use]
    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        self.generation == ticket.0
    }
}
