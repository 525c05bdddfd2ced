mod checklist;
mod dashboard;
mod header;
mod phase_card;
mod resources;

pub use dashboard::{Hero, ProgressDashboard};
pub use header::SiteHeader;
pub use phase_card::PhaseCard;
pub use resources::ResourceList;
