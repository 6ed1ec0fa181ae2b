use crate::modules::jobs::domain::{
    Customer, Job, JobId, LineItem, Money, PaymentType, Schedule, StatusTrack,
};
use crate::shared::utils::datetime::local_datetime;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One entry on the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: JobId,
    pub title: String,
    #[serde(with = "local_datetime")]
    pub start: NaiveDateTime,
    #[serde(with = "local_datetime")]
    pub end: NaiveDateTime,
}

impl From<&Job> for CalendarEvent {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id().clone(),
            title: job.title(),
            start: job.schedule().start(),
            end: job.schedule().end(),
        }
    }
}

/// Current value of one status track and whether its button is disabled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackState {
    pub track: StatusTrack,
    pub name: &'static str,
    pub value: &'static str,
    pub terminal: bool,
}

/// A job together with the values derived from it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobView {
    #[serde(flatten)]
    pub job: Job,
    pub total: Money,
    pub title: String,
    pub tracks: Vec<TrackState>,
}

impl From<Job> for JobView {
    fn from(job: Job) -> Self {
        let tracks = StatusTrack::ALL
            .iter()
            .map(|&track| TrackState {
                track,
                name: track.display_name(),
                value: job.status_label(track),
                terminal: job.is_terminal(track),
            })
            .collect();

        Self {
            total: job.total(),
            title: job.title(),
            tracks,
            job,
        }
    }
}

impl JobView {
    pub fn track(&self, track: StatusTrack) -> Option<&TrackState> {
        self.tracks.iter().find(|state| state.track == track)
    }
}

/// Row in a job listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: JobId,
    pub title: String,
    pub customer_name: String,
    pub dispatched_to: String,
    #[serde(with = "local_datetime")]
    pub scheduled_start: NaiveDateTime,
    pub total: Money,
    pub payment_status: &'static str,
}

impl From<&Job> for JobSummary {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id().clone(),
            title: job.title(),
            customer_name: job.customer().name.clone(),
            dispatched_to: job.dispatched_to().to_string(),
            scheduled_start: job.schedule().start(),
            total: job.total(),
            payment_status: job.status_label(StatusTrack::Payment),
        }
    }
}

/// Per-section edits; `None` leaves a section as it is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobUpdate {
    pub customer: Option<Customer>,
    pub line_items: Option<Vec<LineItem>>,
    pub schedule: Option<Schedule>,
    pub dispatched_to: Option<String>,
    pub job_source: Option<String>,
    pub private_notes: Option<String>,
    pub payment_type: Option<PaymentType>,
}

impl JobUpdate {
    pub fn is_empty(&self) -> bool {
        self.customer.is_none()
            && self.line_items.is_none()
            && self.schedule.is_none()
            && self.dispatched_to.is_none()
            && self.job_source.is_none()
            && self.private_notes.is_none()
            && self.payment_type.is_none()
    }

    /// Apply to a job, returning the names of the sections that changed
    pub fn apply_to(self, job: &mut Job) -> Vec<&'static str> {
        let mut sections = Vec::new();

        if let Some(customer) = self.customer {
            job.update_customer(customer);
            sections.push("customer");
        }
        if let Some(items) = self.line_items {
            job.replace_line_items(items);
            sections.push("lineItems");
        }
        if let Some(schedule) = self.schedule {
            job.reschedule(schedule);
            sections.push("scheduled");
        }
        if let Some(assignee) = self.dispatched_to {
            job.set_dispatched_to(assignee);
            sections.push("dispatchedTo");
        }
        if let Some(source) = self.job_source {
            job.set_job_source(source);
            sections.push("jobSource");
        }
        if let Some(notes) = self.private_notes {
            job.set_private_notes(notes);
            sections.push("privateNotes");
        }
        if let Some(payment_type) = self.payment_type {
            job.set_payment_type(payment_type);
            sections.push("paymentType");
        }

        sections
    }
}
