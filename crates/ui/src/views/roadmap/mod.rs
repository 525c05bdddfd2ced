mod actions;
mod components;
mod scripts;
pub(crate) mod state;
mod view;

pub use view::RoadmapView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod intent_smoke;
