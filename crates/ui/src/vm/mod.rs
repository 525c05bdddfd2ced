mod checklist_vm;
mod disclosure_vm;
mod nav_vm;
mod roadmap_vm;
mod theme_vm;

pub use checklist_vm::{ChecklistItemVm, ChecklistVm, DashboardVm, persist_toggle};
pub use disclosure_vm::{
    BulkDisclosure, accordion_class, bulk_shortcut, expand_icon, is_activation_key,
    phase_card_class,
};
pub use nav_vm::{NavEntryVm, SpyMeasurement, map_nav_entries};
pub use roadmap_vm::{AccordionVm, PhaseCardVm, ResourceGroupVm, RoadmapVm, map_roadmap};
pub use theme_vm::{ThemeVm, map_theme};
