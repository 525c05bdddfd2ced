use roadmap_core::model::{DisclosureRegistry, DisclosureState, Roadmap, SectionId};

use crate::vm::{ChecklistItemVm, ChecklistVm};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionVm {
    pub id: SectionId,
    pub title: String,
    pub state: DisclosureState,
    /// Document-order index of `items[0]` in the checklist.
    pub first_index: usize,
    pub items: Vec<ChecklistItemVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseCardVm {
    pub id: SectionId,
    pub number: u8,
    pub title: String,
    pub duration: String,
    pub summary: String,
    pub accent: String,
    pub state: DisclosureState,
    pub accordions: Vec<AccordionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceGroupVm {
    pub title: String,
    pub first_index: usize,
    pub items: Vec<ChecklistItemVm>,
}

/// Cards and resource groups with disclosure and checkbox state attached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoadmapVm {
    pub phases: Vec<PhaseCardVm>,
    pub resources: Vec<ResourceGroupVm>,
}

/// Walks the content in the same order `Roadmap::trackable_items` does, so
/// each checklist slice lines up with its accordion or resource group.
#[must_use]
pub fn map_roadmap(
    roadmap: &Roadmap,
    registry: &DisclosureRegistry,
    checklist: &ChecklistVm,
) -> RoadmapVm {
    let mut next = 0;
    let mut take = |count: usize| {
        let first_index = next;
        next += count;
        let items = checklist
            .items()
            .get(first_index..next)
            .map(<[ChecklistItemVm]>::to_vec)
            .unwrap_or_default();
        (first_index, items)
    };

    let phases = roadmap
        .phases
        .iter()
        .map(|phase| PhaseCardVm {
            id: phase.id.clone(),
            number: phase.number,
            title: phase.title.clone(),
            duration: phase.duration.clone(),
            summary: phase.summary.clone(),
            accent: phase.accent.clone(),
            state: registry.state(&phase.id).unwrap_or_default(),
            accordions: phase
                .sections
                .iter()
                .map(|section| {
                    let (first_index, items) = take(section.items.len());
                    AccordionVm {
                        id: section.id.clone(),
                        title: section.title.clone(),
                        state: registry.state(&section.id).unwrap_or_default(),
                        first_index,
                        items,
                    }
                })
                .collect(),
        })
        .collect();

    let resources = roadmap
        .resources
        .iter()
        .map(|group| {
            let (first_index, items) = take(group.items.len());
            ResourceGroupVm {
                title: group.title.clone(),
                first_index,
                items,
            }
        })
        .collect();

    RoadmapVm { phases, resources }
}
