use roadmap_core::PageConfig;
use roadmap_core::model::Roadmap;
use storage::repository::Storage;

use super::test_harness::{
    seed_progress, setup_view_harness, setup_view_harness_with_storage, ten_item_roadmap,
};

fn completed_count(html: &str) -> usize {
    html.matches("tracker-item completed").count()
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_renders_fresh_page() {
    let roadmap = Roadmap::builtin();
    let total = roadmap.trackable_items().len();
    let mut harness = setup_view_harness(roadmap).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Cybersecurity Career Roadmap"), "missing title in {html}");
    assert!(html.contains("0%"), "missing dashboard in {html}");
    assert_eq!(html.matches("tracker-checkbox").count(), total);
    assert_eq!(completed_count(&html), 0);
    assert!(html.contains("timeline-step"), "missing nav in {html}");
    assert!(html.contains(r#"data-theme="dark""#), "missing theme in {html}");
    assert!(html.contains("Switch to light mode"), "missing toggle label in {html}");
    assert!(html.contains(r#"aria-expanded="false""#));
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_restores_half_progress() {
    let storage = Storage::in_memory();
    seed_progress(
        storage.kv.as_ref(),
        &["item1", "item2", "item3", "item4", "item5"],
    )
    .await;

    let mut harness = setup_view_harness_with_storage(ten_item_roadmap(), storage).await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("50%"), "missing 50% in {html}");
    assert_eq!(completed_count(&html), 5);
    assert!(!html.contains("progress-complete"));
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_celebrates_full_progress() {
    let storage = Storage::in_memory();
    let ids: Vec<String> = (1..=10).map(|n| format!("item{n}")).collect();
    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
    seed_progress(storage.kv.as_ref(), &ids).await;

    let mut harness = setup_view_harness_with_storage(ten_item_roadmap(), storage).await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("100% - HACKER MODE UNLOCKED"), "missing label in {html}");
    assert!(html.contains("progress-complete"));
    assert_eq!(completed_count(&html), 10);
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_recovers_from_corrupt_progress() {
    let storage = Storage::in_memory();
    storage
        .kv
        .set(&PageConfig::default().storage_keys.progress, "{not json")
        .await
        .expect("seed corrupt");

    let mut harness = setup_view_harness_with_storage(ten_item_roadmap(), storage).await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("0%"), "missing 0% in {html}");
    assert_eq!(completed_count(&html), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_applies_saved_light_theme() {
    let storage = Storage::in_memory();
    storage
        .kv
        .set(&PageConfig::default().storage_keys.theme, "light")
        .await
        .expect("seed theme");

    let mut harness = setup_view_harness_with_storage(ten_item_roadmap(), storage).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains(r#"data-theme="light""#), "missing light theme in {html}");
    assert!(html.contains("Switch to dark mode"), "missing toggle label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_without_phases_has_no_nav() {
    let roadmap = Roadmap::from_json(r#"{ "title": "Empty" }"#).expect("empty roadmap");
    let mut harness = setup_view_harness(roadmap).await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("0%"), "missing dashboard in {html}");
    assert!(!html.contains("timeline-nav"), "unexpected nav in {html}");
    assert!(!html.contains("tracker-checkbox"));
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_renders_groups_sharing_a_title() {
    let roadmap = Roadmap::from_json(
        r#"{
            "title": "Resources Only",
            "resources": [
                { "title": "Extras", "items": ["Podcast A", "Podcast B"] },
                { "title": "Extras", "items": ["Newsletter C"] }
            ]
        }"#,
    )
    .expect("resource roadmap");
    let mut harness = setup_view_harness(roadmap).await;
    harness.rebuild();

    let html = harness.render();
    assert_eq!(html.matches("resource-card").count(), 2, "groups collapsed in {html}");
    for item in ["Podcast A", "Podcast B", "Newsletter C"] {
        assert!(html.contains(item), "missing {item} in {html}");
    }
    assert_eq!(html.matches("tracker-checkbox").count(), 3);
    assert!(html.contains("Reset progress"), "missing reset control in {html}");
}
