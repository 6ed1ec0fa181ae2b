use super::dto::{CalendarEvent, JobSummary, JobUpdate, JobView};
use crate::modules::jobs::domain::{
    Customer, Job, JobDraft, JobId, JobRepository, LineItem, PaymentType, Schedule, StatusTrack,
};
use crate::modules::jobs::infrastructure::sample_data;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::shared::utils::Validator;
use crate::{log_debug, log_info, log_warn};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::sync::Arc;

/// Hour a job added straight from the calendar starts at
pub const QUICK_ADD_HOUR: u32 = 10;

/// Job operations on top of a [`JobRepository`]
///
/// Edits load the job, change it and write it back whole. Two concurrent edits
/// of the same job are last-writer-wins: the earlier write is lost.
pub struct JobService {
    job_repo: Arc<dyn JobRepository>,
    default_job_duration: Duration,
}

impl JobService {
    pub fn new(job_repo: Arc<dyn JobRepository>, default_job_duration: Duration) -> Self {
        Self {
            job_repo,
            default_job_duration,
        }
    }

    /// Load `jobs` into an empty store. Returns how many were stored.
    pub async fn seed(&self, jobs: Vec<Job>) -> AppResult<usize> {
        if self.job_repo.count().await? > 0 {
            log_debug!("Job store already populated, skipping sample data");
            return Ok(0);
        }

        let mut stored = 0;
        for job in jobs {
            self.job_repo.save(&job).await?;
            stored += 1;
        }

        log_info!("Seeded {} sample jobs", stored);
        Ok(stored)
    }

    /// Values the new-job form starts with
    pub fn new_job_draft(&self) -> JobDraft {
        sample_data::placeholder_draft(self.default_job_duration)
    }

    /// Schedule of `default_job_duration` beginning at `start`
    pub fn default_schedule(&self, start: NaiveDateTime) -> Schedule {
        Schedule::starting_at(start, self.default_job_duration)
    }

    pub async fn create_job(&self, draft: JobDraft) -> AppResult<JobView> {
        let job = Job::new(draft);
        let saved = self.job_repo.save(&job).await?;

        LogContext::job_created(saved.id(), &saved.title());
        Ok(JobView::from(saved))
    }

    /// Add a job for `customer_name` on `date` from the calendar, with no
    /// line items yet
    pub async fn quick_add(&self, date: NaiveDate, customer_name: String) -> AppResult<JobView> {
        if customer_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Customer name cannot be empty".to_string(),
            ));
        }

        let start_time = NaiveTime::from_hms_opt(QUICK_ADD_HOUR, 0, 0)
            .ok_or_else(|| AppError::InternalError("Invalid quick-add hour".to_string()))?;
        let schedule = self.default_schedule(date.and_time(start_time));

        self.create_job(JobDraft::new(Customer::new(customer_name), schedule))
            .await
    }

    pub async fn get_job(&self, id: &JobId) -> AppResult<Option<JobView>> {
        let job = self.job_repo.find_by_id(id).await?;

        Ok(job.map(JobView::from))
    }

    pub async fn list_jobs(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResult<JobSummary>> {
        Validator::validate_pagination(params)?;

        let jobs = self.job_repo.get_all().await?;
        let page = PaginatedResult::from_all(jobs, params);

        Ok(page.map(|job| JobSummary::from(&job)))
    }

    /// Calendar entries overlapping `[from, to)`, earliest first
    pub async fn calendar_events(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> AppResult<Vec<CalendarEvent>> {
        if to < from {
            return Err(AppError::ValidationError(format!(
                "Calendar range ends ({}) before it starts ({})",
                to, from
            )));
        }

        let jobs = self.job_repo.find_scheduled_between(from, to).await?;
        let events: Vec<CalendarEvent> = jobs.iter().map(CalendarEvent::from).collect();

        LogContext::calendar_query(&from.to_string(), &to.to_string(), events.len());
        Ok(events)
    }

    /// Move one status track forward. At the terminal value this is a no-op
    /// and the unchanged job is returned.
    pub async fn advance_status(&self, id: &JobId, track: StatusTrack) -> AppResult<JobView> {
        let mut job = self.load(id).await?;

        let before = job.status_label(track);
        let moved = job.advance(track);
        LogContext::status_transition(id, track, before, job.status_label(track));

        let job = if moved {
            self.job_repo.update(&job).await?
        } else {
            job
        };

        Ok(JobView::from(job))
    }

    /// Record how the job was paid. Allowed whatever the payment status is.
    pub async fn set_payment_type(
        &self,
        id: &JobId,
        payment_type: PaymentType,
    ) -> AppResult<JobView> {
        let mut job = self.load(id).await?;

        job.set_payment_type(payment_type);
        let saved = self.job_repo.update(&job).await?;

        LogContext::job_updated(id, "paymentType");
        Ok(JobView::from(saved))
    }

    pub async fn update_job(&self, id: &JobId, update: JobUpdate) -> AppResult<JobView> {
        let mut job = self.load(id).await?;
        if update.is_empty() {
            return Ok(JobView::from(job));
        }

        let sections = update.apply_to(&mut job);
        let saved = self.job_repo.update(&job).await?;

        LogContext::job_updated(id, &sections.join(", "));
        Ok(JobView::from(saved))
    }

    pub async fn add_line_item(&self, id: &JobId, item: LineItem) -> AppResult<JobView> {
        let mut job = self.load(id).await?;

        job.add_line_item(item);
        let saved = self.job_repo.update(&job).await?;

        LogContext::job_updated(id, "lineItems");
        Ok(JobView::from(saved))
    }

    pub async fn update_line_item(
        &self,
        id: &JobId,
        index: usize,
        item: LineItem,
    ) -> AppResult<JobView> {
        let mut job = self.load(id).await?;

        job.update_line_item(index, item)?;
        let saved = self.job_repo.update(&job).await?;

        LogContext::job_updated(id, "lineItems");
        Ok(JobView::from(saved))
    }

    pub async fn remove_line_item(&self, id: &JobId, index: usize) -> AppResult<JobView> {
        let mut job = self.load(id).await?;

        job.remove_line_item(index)?;
        let saved = self.job_repo.update(&job).await?;

        LogContext::job_updated(id, "lineItems");
        Ok(JobView::from(saved))
    }

    async fn load(&self, id: &JobId) -> AppResult<Job> {
        match self.job_repo.find_by_id(id).await? {
            Some(job) => Ok(job),
            None => {
                log_warn!("Edit requested for unknown job {}", id);
                Err(AppError::NotFound(format!("Job with ID {} not found", id)))
            }
        }
    }
}
