/// Repository trait for job storage
///
/// Jobs are stored and returned whole; callers mutate the aggregate and hand it
/// back through `update`.
use crate::modules::jobs::domain::entities::{Job, JobId};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use chrono::NaiveDateTime;

#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Store a new job
    async fn save(&self, job: &Job) -> AppResult<Job>;

    /// Replace an existing job; `NotFound` if it was never saved
    async fn update(&self, job: &Job) -> AppResult<Job>;

    /// Get job by ID
    async fn find_by_id(&self, id: &JobId) -> AppResult<Option<Job>>;

    /// All jobs ordered by scheduled start
    async fn get_all(&self) -> AppResult<Vec<Job>>;

    /// Jobs whose schedule overlaps `[from, to)`, ordered by scheduled start
    async fn find_scheduled_between(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> AppResult<Vec<Job>>;

    async fn count(&self) -> AppResult<u64>;
}
