mod disclosure;
mod ids;
mod item;
mod progress;
mod roadmap;
mod scroll_spy;
mod theme;

pub use ids::{ItemId, SectionId};
pub use item::{ITEM_ID_MAX_LEN, TrackableItem, resolve_item_id};

pub use disclosure::{DisclosureRegistry, DisclosureState, SectionKind};
pub use progress::{CELEBRATION_LABEL, ProgressParseError, ProgressRecord, ProgressSummary};
pub use roadmap::{Accordion, Phase, ResourceGroup, Roadmap, RoadmapError};
pub use scroll_spy::{Debounce, DebounceTicket, ScrollSpy, SectionBounds, scroll_target};
pub use theme::{Theme, ThemeParseError};
