//! In-memory integration tests for first-access seeding.

use std::sync::Arc;

use helpboard::task::{
    adapters::memory::InMemorySnapshotRepository,
    domain::{Category, TaskStatus},
    services::{TaskLifecycleService, TaskStore},
};
use mockable::DefaultClock;

#[tokio::test(flavor = "multi_thread")]
async fn empty_store_serves_demo_tasks() {
    let repository = InMemorySnapshotRepository::new();
    let store = TaskStore::new(Arc::new(repository.clone()), Arc::new(DefaultClock));
    let service = TaskLifecycleService::new(Arc::new(store));

    let tasks = service.list().await;
    let summary = service.impact_summary().await;

    assert_eq!(tasks.len(), 9);
    assert_eq!(
        tasks.first().map(|task| task.title().as_str()),
        Some("Grocery pickup for Mrs. Lee")
    );
    assert!(
        tasks
            .iter()
            .any(|task| task.category() == Category::ElderlyCare)
    );
    assert_eq!(
        tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::Claimed)
            .count(),
        2
    );
    assert_eq!(summary.open_tasks, 7);
    assert_eq!(summary.completed_today, 0);
    assert_eq!(repository.save_count().expect("readable count"), 1);
}
