//! In-memory integration tests for task lifecycle operations.

use std::sync::Arc;

use helpboard::task::{
    adapters::memory::InMemorySnapshotRepository,
    domain::{StoreSnapshot, TaskId, TaskStatus},
    services::{
        ClaimTaskRequest, CreateTaskRequest, TaskLifecycleError, TaskLifecycleService, TaskStore,
    },
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<InMemorySnapshotRepository, DefaultClock>;

struct Harness {
    service: TestService,
    repository: InMemorySnapshotRepository,
}

#[fixture]
fn harness() -> Harness {
    let repository = InMemorySnapshotRepository::with_snapshot(StoreSnapshot {
        tasks: Vec::new(),
        next_id: Some(1),
        completed_today: Some(0),
    });
    let store = TaskStore::new(Arc::new(repository.clone()), Arc::new(DefaultClock));
    Harness {
        service: TaskLifecycleService::new(Arc::new(store)),
        repository,
    }
}

fn request(title: &str, category: &str, urgency: &str) -> CreateTaskRequest {
    CreateTaskRequest::new(
        title,
        "Thirty minutes of help",
        category,
        urgency,
        "Willow Park",
        "City Youth Club",
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ids_increase_by_one_per_successful_create(harness: Harness) {
    let first = harness
        .service
        .create(request("First", "Other", "Low"))
        .await
        .expect("valid request");
    let rejected = harness
        .service
        .create(request("", "Other", "Low"))
        .await;
    let second = harness
        .service
        .create(request("Second", "Tutoring", "High"))
        .await
        .expect("valid request");

    assert!(matches!(rejected, Err(TaskLifecycleError::Validation(_))));
    assert_eq!(first.id(), TaskId::new(1));
    assert_eq!(second.id(), TaskId::new(2));
    let snapshot = harness.service.store().snapshot().await;
    assert_eq!(snapshot.next_id, Some(3));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_preserves_insertion_order(harness: Harness) {
    for title in ["Alpha", "Bravo", "Charlie"] {
        harness
            .service
            .create(request(title, "Errands", "Medium"))
            .await
            .expect("valid request");
    }

    let titles: Vec<String> = harness
        .service
        .list()
        .await
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();

    assert_eq!(titles, ["Alpha", "Bravo", "Charlie"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn persisted_snapshot_tracks_every_transition(harness: Harness) {
    let task = harness
        .service
        .create(request("Food pantry sorting shift", "Food", "Medium"))
        .await
        .expect("valid request");
    harness
        .service
        .claim(task.id(), ClaimTaskRequest::new("Taylor", "after work"))
        .await
        .expect("open task can be claimed");
    harness
        .service
        .complete(task.id())
        .await
        .expect("claimed task completes");

    let stored = harness
        .repository
        .stored()
        .expect("readable snapshot")
        .expect("snapshot persisted");
    let persisted = stored.tasks.first().expect("one task persisted");
    assert_eq!(persisted.status(), TaskStatus::Completed);
    assert_eq!(stored.completed_today, Some(1));
    assert_eq!(harness.repository.save_count().expect("readable count"), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_cannot_be_claimed_or_completed_again(harness: Harness) {
    let task = harness
        .service
        .create(request("Event flyering", "Other", "Low"))
        .await
        .expect("valid request");
    harness
        .service
        .claim(task.id(), ClaimTaskRequest::new("Drew", ""))
        .await
        .expect("open task can be claimed");
    let completed = harness
        .service
        .complete(task.id())
        .await
        .expect("claimed task completes");

    let reclaim = harness
        .service
        .claim(task.id(), ClaimTaskRequest::new("Reese", ""))
        .await;
    let recomplete = harness.service.complete(task.id()).await;

    assert!(matches!(
        reclaim,
        Err(TaskLifecycleError::InvalidTransition { .. })
    ));
    assert!(matches!(
        recomplete,
        Err(TaskLifecycleError::InvalidTransition { .. })
    ));
    assert_eq!(harness.service.list().await, vec![completed]);
    assert_eq!(harness.service.impact_summary().await.completed_today, 1);
}
