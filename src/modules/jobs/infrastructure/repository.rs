/// In-memory implementation of JobRepository
///
/// Jobs live in a `DashMap` keyed by id; nothing survives the process.
use crate::modules::jobs::domain::entities::{Job, JobId};
use crate::modules::jobs::domain::repository::JobRepository;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct JobRepositoryImpl {
    jobs: Arc<DashMap<JobId, Job>>,
}

impl JobRepositoryImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository preloaded with `jobs`
    pub fn with_jobs(jobs: impl IntoIterator<Item = Job>) -> Self {
        let repo = Self::new();
        for job in jobs {
            repo.jobs.insert(job.id().clone(), job);
        }
        repo
    }

    fn sorted(mut jobs: Vec<Job>) -> Vec<Job> {
        jobs.sort_by(|a, b| {
            a.schedule()
                .start()
                .cmp(&b.schedule().start())
                .then_with(|| a.id().cmp(b.id()))
        });
        jobs
    }
}

#[async_trait]
impl JobRepository for JobRepositoryImpl {
    async fn save(&self, job: &Job) -> AppResult<Job> {
        match self.jobs.entry(job.id().clone()) {
            Entry::Occupied(_) => Err(AppError::ValidationError(format!(
                "Job with ID {} already exists",
                job.id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(job.clone());
                debug!("Stored job {}", job.id());
                Ok(job.clone())
            }
        }
    }

    async fn update(&self, job: &Job) -> AppResult<Job> {
        let mut stored = self
            .jobs
            .get_mut(job.id())
            .ok_or_else(|| AppError::NotFound(format!("Job with ID {} not found", job.id())))?;
        *stored = job.clone();
        debug!("Replaced job {}", job.id());
        Ok(job.clone())
    }

    async fn find_by_id(&self, id: &JobId) -> AppResult<Option<Job>> {
        Ok(self.jobs.get(id).map(|entry| entry.value().clone()))
    }

    async fn get_all(&self) -> AppResult<Vec<Job>> {
        let jobs = self.jobs.iter().map(|entry| entry.value().clone()).collect();
        Ok(Self::sorted(jobs))
    }

    async fn find_scheduled_between(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> AppResult<Vec<Job>> {
        let jobs: Vec<Job> = self
            .jobs
            .iter()
            .filter(|entry| entry.value().schedule().overlaps(from, to))
            .map(|entry| entry.value().clone())
            .collect();
        debug!("{} jobs scheduled between {} and {}", jobs.len(), from, to);
        Ok(Self::sorted(jobs))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.jobs.len() as u64)
    }
}
