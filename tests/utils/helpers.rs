/// Test helper functions and service builders
use chrono::Duration;
use crewdesk_lib::modules::jobs::{Job, JobRepository, JobRepositoryImpl, JobService};
use std::sync::Arc;

pub struct TestServices {
    pub job_service: Arc<JobService>,
    pub job_repository: Arc<JobRepositoryImpl>,
}

/// Build a job service over an empty in-memory store
pub fn build_test_services() -> TestServices {
    build_test_services_with(Vec::new())
}

/// Build a job service whose store already holds `jobs`
pub fn build_test_services_with(jobs: Vec<Job>) -> TestServices {
    let job_repository = Arc::new(JobRepositoryImpl::with_jobs(jobs));
    let repo: Arc<dyn JobRepository> = job_repository.clone();
    let job_service = Arc::new(JobService::new(repo, Duration::hours(2)));

    TestServices {
        job_service,
        job_repository,
    }
}
