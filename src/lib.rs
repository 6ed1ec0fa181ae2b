pub mod modules;
pub mod shared;

use modules::jobs::{
    infrastructure::sample_data, JobRepository, JobRepositoryImpl, JobService,
};
use shared::{utils::logger::init_logger, AppConfig, AppResult};
use std::sync::Arc;

/// Services shared by every caller of the app
pub struct AppState {
    pub config: AppConfig,
    pub job_service: Arc<JobService>,
}

/// Wire repositories and services together for `config`
pub async fn bootstrap(config: AppConfig) -> AppResult<AppState> {
    let job_repo: Arc<dyn JobRepository> = Arc::new(JobRepositoryImpl::new());
    let job_service = Arc::new(JobService::new(
        Arc::clone(&job_repo),
        config.default_job_duration,
    ));

    if config.seed_sample_jobs {
        job_service
            .seed(sample_data::placeholder_jobs(config.default_job_duration))
            .await?;
    } else {
        log::info!("Starting with an empty job store");
    }

    Ok(AppState {
        config,
        job_service,
    })
}

/// Load configuration from the environment, start logging and build the app
pub async fn run() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env()?;
    init_logger(config.log_level);

    let state = bootstrap(config).await?;
    log::info!(
        "Job service ready (default job length {} minutes)",
        state.config.default_job_duration.num_minutes()
    );

    Ok(state)
}
