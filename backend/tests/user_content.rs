use std::rc::Rc;

use academy_store::{KeyValueStore, ManualClock, MemoryStore, StoreConfig, UserContent};
use chrono::{Duration, TimeZone, Utc};
use common::model::review::{NewReview, TargetType};
use common::ContentCatalog;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn session() -> (Rc<MemoryStore>, Rc<ManualClock>, UserContent) {
    init_logging();
    let backend = Rc::new(MemoryStore::new());
    let clock = Rc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 5, 20, 8, 0, 0).unwrap(),
    ));
    let content =
        UserContent::with_backend(backend.clone(), &StoreConfig::default(), clock.clone());
    (backend, clock, content)
}

fn review(target_id: &str, rating: u8) -> NewReview {
    NewReview {
        user_id: "visitor-1".into(),
        user_name: "Visitor".into(),
        target_type: TargetType::Recipe,
        target_id: target_id.into(),
        rating,
        title: "My take".into(),
        content: "Brewed it this morning.".into(),
        pros: Some(vec!["Easy".into()]),
        cons: None,
    }
}

#[test]
fn seed_reviews_are_merged_newest_first() {
    let (_, _, content) = session();
    let all = content.reviews().all();
    assert!(!all.is_empty());
    assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[test]
fn added_review_appears_once_with_fresh_id() {
    let (_, _, content) = session();
    let before: Vec<String> = content.reviews().all().into_iter().map(|r| r.id).collect();

    let added = content.reviews().add(review("v60-pour-over", 5)).unwrap();

    assert!(!before.contains(&added.id));
    assert_eq!(added.helpful, 0);
    let all = content.reviews().all();
    assert_eq!(all.iter().filter(|r| r.id == added.id).count(), 1);
    assert_eq!(all.len(), before.len() + 1);
    assert_eq!(all[0].id, added.id);
}

#[test]
fn average_includes_seed_and_user_reviews() {
    let (_, _, content) = session();
    // seed: 5 and 4 for the V60
    content.reviews().add(review("v60-pour-over", 5)).unwrap();

    let summary = content.reviews().average(TargetType::Recipe, "v60-pour-over");
    assert_eq!(summary.count, 3);
    assert_eq!(summary.average, 4.7);

    let none = content.reviews().average(TargetType::Coffee, "instant-coffee");
    assert_eq!((none.average, none.count), (0.0, 0));
}

#[test]
fn helpful_on_missing_review_leaves_collection_alone() {
    let (backend, clock, content) = session();
    let first = content.reviews().add(review("chemex", 4)).unwrap();
    clock.advance(Duration::minutes(1));
    content.reviews().add(review("chemex", 3)).unwrap();
    let stored = backend.get("coffee-academy-reviews").unwrap();

    content.reviews().mark_helpful("review-0-gone").unwrap();
    content.reviews().mark_helpful("seed-review-1").unwrap();
    assert_eq!(backend.get("coffee-academy-reviews").unwrap(), stored);

    content.reviews().mark_helpful(&first.id).unwrap();
    content.reviews().mark_helpful(&first.id).unwrap();
    let persisted = content.reviews().by_user("visitor-1");
    assert_eq!(persisted.len(), 2);
    let helpful: Vec<u32> = persisted.iter().map(|r| r.helpful).collect();
    // newest first: the untouched review, then the one voted twice
    assert_eq!(helpful, vec![0, 2]);
}

#[test]
fn corrupt_reviews_do_not_affect_other_collections() {
    let (backend, _, content) = session();
    content.progress().mark_completed(1).unwrap();
    backend.set("coffee-academy-reviews", "not json at all").unwrap();

    let seed_only = content.reviews().all();
    assert!(seed_only.iter().all(|r| r.id.starts_with("seed-")));
    assert_eq!(content.progress().completed(), vec![1]);
    assert!(!content.brews().all().is_empty());
}

#[test]
fn progress_tracks_catalog_levels() {
    let (_, _, content) = session();
    let catalog = ContentCatalog::seeded();

    for level in catalog.levels().all() {
        content.progress().mark_completed(level.id).unwrap();
    }
    assert_eq!(content.progress().percent_complete(catalog.levels()), 100);

    content.progress().reset().unwrap();
    assert_eq!(content.progress().percent_complete(catalog.levels()), 0);
}

#[test]
fn seed_can_be_left_out() {
    init_logging();
    let config = StoreConfig {
        include_seed: false,
        ..StoreConfig::default()
    };
    let content = UserContent::open(&config).unwrap();
    assert!(content.reviews().all().is_empty());
    assert!(content.brews().all().is_empty());
}
