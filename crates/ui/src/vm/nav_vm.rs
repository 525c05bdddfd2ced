use roadmap_core::model::{Roadmap, ScrollSpy, SectionBounds, SectionId};
use serde::Deserialize;

/// Timeline navigation entry for one phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntryVm {
    pub target: SectionId,
    pub number: u8,
    pub title: String,
    pub accent: String,
    pub active: bool,
}

impl NavEntryVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.active {
            "timeline-step active"
        } else {
            "timeline-step"
        }
    }

    /// Active steps fill their number badge with the phase accent.
    #[must_use]
    pub fn badge_style(&self) -> String {
        if self.active {
            format!(
                "background: {0}; border-color: {0}; color: #000;",
                self.accent
            )
        } else {
            String::new()
        }
    }
}

/// Exactly the entry matching `active` is marked; `None` clears all.
#[must_use]
pub fn map_nav_entries(roadmap: &Roadmap, active: Option<&SectionId>) -> Vec<NavEntryVm> {
    roadmap
        .phases
        .iter()
        .map(|phase| NavEntryVm {
            target: phase.id.clone(),
            number: phase.number,
            title: phase.title.clone(),
            accent: phase.accent.clone(),
            active: active == Some(&phase.id),
        })
        .collect()
}

/// Scroll position and section tops reported by the page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SpyMeasurement {
    pub scroll_top: f64,
    #[serde(default)]
    pub sections: Vec<SectionBounds>,
}

impl SpyMeasurement {
    #[must_use]
    pub fn active(&self, spy: &ScrollSpy) -> Option<SectionId> {
        spy.active(self.scroll_top, &self.sections).cloned()
    }

    #[must_use]
    pub fn top_of(&self, id: &SectionId) -> Option<f64> {
        self.sections
            .iter()
            .find(|section| &section.id == id)
            .map(|section| section.top)
    }
}
