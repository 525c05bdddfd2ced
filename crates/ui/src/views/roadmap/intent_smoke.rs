use dioxus::prelude::{Key, Modifiers};
use roadmap_core::PageConfig;
use roadmap_core::model::{CELEBRATION_LABEL, DisclosureState, SectionId, Theme};
use storage::repository::{InMemoryRepository, Storage};

use crate::views::ViewError;
use crate::views::test_harness::ten_item_roadmap;
use crate::vm::BulkDisclosure;

use super::actions::{RoadmapIntent, checkbox_key, header_key, page_key};
use super::test_harness::{
    RoadmapHarness, bubble, setup_roadmap_harness, setup_roadmap_harness_with,
};

fn section(id: &str) -> SectionId {
    SectionId::new(id)
}

#[tokio::test(flavor = "current_thread")]
async fn accordion_toggle_leaves_phase_alone() {
    let mut harness = setup_roadmap_harness(Storage::in_memory()).await;
    let accordion = section("phase-1-learning-path");

    harness
        .send(RoadmapIntent::ToggleSection(accordion.clone()))
        .await;
    let (inner, outer) = harness.read(|state| {
        let registry = state.registry.peek();
        (registry.state(&accordion), registry.state(&section("phase-1")))
    });
    assert_eq!(inner, Some(DisclosureState::Expanded));
    assert_eq!(outer, Some(DisclosureState::Collapsed));

    harness
        .send(RoadmapIntent::ToggleSection(section("phase-1")))
        .await;
    harness
        .send(RoadmapIntent::ToggleSection(section("phase-1")))
        .await;
    let outer = harness.read(|state| state.registry.peek().state(&section("phase-1")));
    assert_eq!(outer, Some(DisclosureState::Collapsed));
}

#[tokio::test(flavor = "current_thread")]
async fn navigation_expands_and_highlights() {
    let mut harness = setup_roadmap_harness(Storage::in_memory()).await;
    let target = section("phase-2");

    harness.send(RoadmapIntent::Navigate(target.clone())).await;
    harness.send(RoadmapIntent::Navigate(target.clone())).await;

    let (expanded, active) = harness.read(|state| {
        (
            state.registry.peek().is_expanded(&target),
            state.active_section.peek().clone(),
        )
    });
    assert!(expanded, "navigation never collapses");
    assert_eq!(active, Some(target));

    harness
        .send(RoadmapIntent::Navigate(section("phase-99")))
        .await;
    let active = harness.read(|state| state.active_section.peek().clone());
    assert_eq!(active, Some(section("phase-2")));
}

#[tokio::test(flavor = "current_thread")]
async fn navigation_to_accordion_opens_its_phase() {
    let mut harness = setup_roadmap_harness(Storage::in_memory()).await;
    let accordion = section("phase-1-learning-path");

    harness.send(RoadmapIntent::Navigate(accordion.clone())).await;
    let (inner, outer) = harness.read(|state| {
        let registry = state.registry.peek();
        (
            registry.is_expanded(&accordion),
            registry.is_expanded(&section("phase-1")),
        )
    });
    assert!(inner);
    assert!(outer);
}

#[tokio::test(flavor = "current_thread")]
async fn bulk_shortcuts_cover_every_section() {
    let mut harness = setup_roadmap_harness(Storage::in_memory()).await;

    harness
        .send(RoadmapIntent::Bulk(BulkDisclosure::ExpandAll))
        .await;
    let all_open = harness.read(|state| {
        let registry = state.registry.peek();
        registry.ids().all(|id| registry.is_expanded(id))
    });
    assert!(all_open);

    harness
        .send(RoadmapIntent::Bulk(BulkDisclosure::CollapseAll))
        .await;
    let any_open = harness.read(|state| {
        let registry = state.registry.peek();
        registry.ids().any(|id| registry.is_expanded(id))
    });
    assert!(!any_open);
}

#[tokio::test(flavor = "current_thread")]
async fn checkbox_toggle_writes_through() {
    let mut harness = setup_roadmap_harness(Storage::in_memory()).await;
    let key = PageConfig::default().storage_keys.progress;
    let first = harness.services.roadmap.trackable_items()[0].id().clone();

    harness
        .send(RoadmapIntent::ToggleItem {
            index: 0,
            checked: true,
        })
        .await;
    assert!(harness.services.progress.is_complete(&first));
    let stored = harness.storage.kv.get(&key).await.expect("read").unwrap();
    assert_eq!(stored, format!("{{\"{first}\":true}}"));
    let label = harness.read(|state| state.checklist.peek().dashboard().label);
    assert_ne!(label, "0%");

    harness
        .send(RoadmapIntent::ToggleItem {
            index: 0,
            checked: false,
        })
        .await;
    assert!(!harness.services.progress.is_complete(&first));
    let stored = harness.storage.kv.get(&key).await.expect("read").unwrap();
    assert_eq!(stored, "{}");
    let label = harness.read(|state| state.checklist.peek().dashboard().label);
    assert_eq!(label, "0%");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_write_keeps_checkbox_and_reports() {
    let storage = Storage::from_store(InMemoryRepository::with_quota(8));
    let mut harness = setup_roadmap_harness(storage).await;

    harness
        .send(RoadmapIntent::ToggleItem {
            index: 0,
            checked: true,
        })
        .await;

    let (completed, error) = harness.read(|state| {
        (
            state.checklist.peek().item(0).map(|item| item.completed),
            *state.save_error.peek(),
        )
    });
    assert_eq!(completed, Some(true));
    assert_eq!(error, Some(ViewError::Storage));
}

#[tokio::test(flavor = "current_thread")]
async fn theme_toggle_persists_choice() {
    let mut harness = setup_roadmap_harness(Storage::in_memory()).await;
    harness.settle().await;
    assert_eq!(harness.read(|state| state.current_theme()), Theme::Dark);

    harness.send(RoadmapIntent::ToggleTheme).await;
    assert_eq!(harness.read(|state| state.current_theme()), Theme::Light);
    let stored = harness
        .storage
        .kv
        .get(&PageConfig::default().storage_keys.theme)
        .await
        .expect("read theme");
    assert_eq!(stored.as_deref(), Some("light"));

    harness.send(RoadmapIntent::ToggleTheme).await;
    assert_eq!(harness.read(|state| state.current_theme()), Theme::Dark);
}

#[tokio::test(flavor = "current_thread")]
async fn double_theme_toggle_lands_on_original() {
    let mut harness = setup_roadmap_harness(Storage::in_memory()).await;
    harness.settle().await;

    harness
        .send_many([RoadmapIntent::ToggleTheme, RoadmapIntent::ToggleTheme])
        .await;
    assert_eq!(harness.read(|state| state.current_theme()), Theme::Dark);
    let stored = harness
        .storage
        .kv
        .get(&PageConfig::default().storage_keys.theme)
        .await
        .expect("read theme");
    assert_eq!(stored.as_deref(), Some("dark"));
}

fn toggle(index: usize, checked: bool) -> RoadmapIntent {
    RoadmapIntent::ToggleItem { index, checked }
}

fn label(harness: &RoadmapHarness) -> String {
    harness.read(|state| state.checklist.peek().dashboard().label)
}

#[tokio::test(flavor = "current_thread")]
async fn half_checked_survives_reload() {
    let mut harness = setup_roadmap_harness_with(ten_item_roadmap(), Storage::in_memory()).await;
    assert_eq!(label(&harness), "0%");

    for index in 0..5 {
        harness.send(toggle(index, true)).await;
    }
    assert_eq!(label(&harness), "50%");

    let reloaded = setup_roadmap_harness_with(ten_item_roadmap(), harness.storage.clone()).await;
    assert_eq!(label(&reloaded), "50%");
    let checked = reloaded.read(|state| {
        state
            .checklist
            .peek()
            .items()
            .iter()
            .filter(|item| item.completed)
            .count()
    });
    assert_eq!(checked, 5);
}

#[tokio::test(flavor = "current_thread")]
async fn full_checklist_celebrates_until_one_is_unchecked() {
    let mut harness = setup_roadmap_harness_with(ten_item_roadmap(), Storage::in_memory()).await;

    harness.send_many((0..10).map(|index| toggle(index, true))).await;
    assert_eq!(label(&harness), CELEBRATION_LABEL);
    assert!(harness.read(|state| state.checklist.peek().dashboard().celebrating));

    harness.send(toggle(3, false)).await;
    assert_eq!(label(&harness), "90%");

    let reloaded = setup_roadmap_harness_with(ten_item_roadmap(), harness.storage.clone()).await;
    assert_eq!(label(&reloaded), "90%");
}

#[tokio::test(flavor = "current_thread")]
async fn reset_clears_checklist_and_storage() {
    let mut harness = setup_roadmap_harness_with(ten_item_roadmap(), Storage::in_memory()).await;
    harness.send_many([toggle(0, true), toggle(7, true)]).await;
    assert_eq!(label(&harness), "20%");

    harness.send(RoadmapIntent::ResetProgress).await;
    assert_eq!(label(&harness), "0%");
    assert_eq!(harness.services.progress.completed_count(), 0);
    let stored = harness
        .storage
        .kv
        .get(&PageConfig::default().storage_keys.progress)
        .await
        .expect("read progress");
    assert_eq!(stored.as_deref(), Some("{}"));
}

#[tokio::test(flavor = "current_thread")]
async fn enter_on_accordion_header_toggles_only_the_accordion() {
    let mut harness = setup_roadmap_harness(Storage::in_memory()).await;
    let accordion = section("phase-1-learning-path");

    let intents = bubble([
        header_key(&Key::Enter, accordion.clone()),
        header_key(&Key::Enter, section("phase-1")),
        page_key(&Key::Enter, Modifiers::empty()),
    ]);
    harness.send_many(intents).await;

    let (inner, outer) = harness.read(|state| {
        let registry = state.registry.peek();
        (registry.state(&accordion), registry.state(&section("phase-1")))
    });
    assert_eq!(inner, Some(DisclosureState::Expanded));
    assert_eq!(outer, Some(DisclosureState::Collapsed));
}

#[tokio::test(flavor = "current_thread")]
async fn shortcut_typed_in_checkbox_leaves_sections_alone() {
    let mut harness = setup_roadmap_harness(Storage::in_memory()).await;
    let expand = page_key(&Key::Character("e".to_string()), Modifiers::CONTROL);

    harness.send_many(bubble([checkbox_key(), expand.clone()])).await;
    let any_open = harness.read(|state| {
        let registry = state.registry.peek();
        registry.ids().any(|id| registry.is_expanded(id))
    });
    assert!(!any_open);

    harness.send_many(bubble([expand])).await;
    let all_open = harness.read(|state| {
        let registry = state.registry.peek();
        registry.ids().all(|id| registry.is_expanded(id))
    });
    assert!(all_open);
}
