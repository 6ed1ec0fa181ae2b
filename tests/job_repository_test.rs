/// Job repository tests - in-memory store operations
///
/// Tests cover:
/// - Save, update and lookup
/// - Ordering by scheduled start
/// - Calendar range queries
/// - Concurrent writers
mod utils;

use crewdesk_lib::modules::jobs::{JobId, JobRepository, JobRepositoryImpl, StatusTrack};
use crewdesk_lib::shared::AppError;
use std::sync::Arc;
use utils::factories::{at, JobFactory};

#[tokio::test]
async fn save_and_retrieve_job() {
    let repo = JobRepositoryImpl::new();
    let job = JobFactory::complete().with_id("42").build();

    let saved = repo.save(&job).await.unwrap();
    assert_eq!(saved, job);

    let retrieved = repo.find_by_id(&JobId::from("42")).await.unwrap();
    assert_eq!(retrieved, Some(job));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn save_rejects_duplicate_id() {
    let repo = JobRepositoryImpl::new();
    let job = JobFactory::minimal().with_id("7").build();
    repo.save(&job).await.unwrap();

    let err = repo.save(&job).await.unwrap_err();

    assert!(matches!(err, AppError::ValidationError(_)));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn update_replaces_stored_job() {
    let repo = JobRepositoryImpl::new();
    let mut job = JobFactory::minimal().with_id("1").build();
    repo.save(&job).await.unwrap();

    job.advance(StatusTrack::Driving);
    job.set_dispatched_to("Steven Radonich");
    repo.update(&job).await.unwrap();

    let stored = repo.find_by_id(job.id()).await.unwrap().unwrap();
    assert_eq!(stored.status_label(StatusTrack::Driving), "In Progress");
    assert_eq!(stored.dispatched_to(), "Steven Radonich");
}

#[tokio::test]
async fn update_unknown_job_is_not_found() {
    let repo = JobRepositoryImpl::new();
    let job = JobFactory::minimal().with_id("missing").build();

    let err = repo.update(&job).await.unwrap_err();

    assert_eq!(
        err,
        AppError::NotFound("Job with ID missing not found".to_string())
    );
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn get_all_orders_by_start() {
    let repo = JobRepositoryImpl::with_jobs(vec![
        JobFactory::new()
            .with_id("late")
            .with_schedule("2025-01-30T14:00", "2025-01-30T16:00")
            .build(),
        JobFactory::new()
            .with_id("early")
            .with_schedule("2025-01-30T08:00", "2025-01-30T09:00")
            .build(),
        JobFactory::new()
            .with_id("tomorrow")
            .with_schedule("2025-01-31T08:00", "2025-01-31T09:00")
            .build(),
    ]);

    let ids: Vec<String> = repo
        .get_all()
        .await
        .unwrap()
        .iter()
        .map(|job| job.id().to_string())
        .collect();

    assert_eq!(ids, vec!["early", "late", "tomorrow"]);
}

#[tokio::test]
async fn find_scheduled_between_uses_overlap() {
    let repo = JobRepositoryImpl::with_jobs(vec![
        JobFactory::new()
            .with_id("overnight")
            .with_schedule("2025-01-29T22:00", "2025-01-30T02:00")
            .build(),
        JobFactory::new()
            .with_id("morning")
            .with_schedule("2025-01-30T10:00", "2025-01-30T12:00")
            .build(),
        JobFactory::new()
            .with_id("ends-at-midnight")
            .with_schedule("2025-01-29T20:00", "2025-01-30T00:00")
            .build(),
        JobFactory::new()
            .with_id("next-day")
            .with_schedule("2025-01-31T00:00", "2025-01-31T01:00")
            .build(),
    ]);

    let ids: Vec<String> = repo
        .find_scheduled_between(at("2025-01-30T00:00"), at("2025-01-31T00:00"))
        .await
        .unwrap()
        .iter()
        .map(|job| job.id().to_string())
        .collect();

    assert_eq!(ids, vec!["overnight", "morning"]);
}

#[tokio::test]
async fn concurrent_saves_are_all_stored() {
    let repo = Arc::new(JobRepositoryImpl::new());

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                let job = JobFactory::new().with_id(&n.to_string()).build();
                repo.save(&job).await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(repo.count().await.unwrap(), 16);
}

#[tokio::test]
async fn clones_share_the_same_store() {
    let repo = JobRepositoryImpl::new();
    let other = repo.clone();

    other
        .save(&JobFactory::minimal().with_id("shared").build())
        .await
        .unwrap();

    assert!(repo
        .find_by_id(&JobId::from("shared"))
        .await
        .unwrap()
        .is_some());
}
