//! Placeholder data for a fresh install: the jobs the calendar starts with and
//! the values the new-job form is prefilled with.
use crate::modules::jobs::domain::entities::{Customer, Job, JobDraft, JobId, LineItem, Schedule};
use crate::modules::jobs::domain::value_objects::Money;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

fn local(date: (i32, u32, u32), hour: u32) -> NaiveDateTime {
    let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default();
    let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default();
    date.and_time(time)
}

/// Prefilled values of the new-job form
pub fn placeholder_draft(default_duration: Duration) -> JobDraft {
    let customer = Customer::new("John Doe")
        .with_phone("555-123-4567")
        .with_email("john.doe@example.com")
        .with_address("123 Main St, San Francisco, CA");

    JobDraft::new(
        customer,
        Schedule::starting_at(local((2025, 2, 1), 10), default_duration),
    )
    .with_line_item(LineItem::new("Window Cleaning", Money::from_units(199)))
    .with_dispatched_to("Steven Radonich")
    .with_job_source("Online")
    .with_private_notes("Initially quoted $199, gave veteran's discount")
}

/// The two jobs on the calendar of a fresh install
pub fn placeholder_jobs(default_duration: Duration) -> Vec<Job> {
    let window_cleaning = JobDraft::new(
        Customer::new("John Doe")
            .with_phone("555-123-4567")
            .with_email("john.doe@example.com")
            .with_address("123 Main St, San Francisco, CA"),
        Schedule::starting_at(local((2025, 1, 30), 10), default_duration),
    )
    .with_line_item(LineItem::new("Window Cleaning", Money::from_units(199)))
    .with_dispatched_to("Steven Radonich")
    .with_job_source("Online");

    let gutter_cleaning = JobDraft::new(
        Customer::new("Sarah Smith"),
        Schedule::starting_at(local((2025, 1, 30), 14), default_duration),
    )
    .with_line_item(LineItem::new("Gutter Cleaning", Money::from_units(99)))
    .with_dispatched_to("Steven Radonich");

    vec![
        Job::with_id(JobId::from("1"), window_cleaning),
        Job::with_id(JobId::from("2"), gutter_cleaning),
    ]
}
