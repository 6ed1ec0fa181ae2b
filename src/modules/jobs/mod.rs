/// Job scheduling module
///
/// Owns the job record a field-service dispatcher works with: customer,
/// line items, schedule window and the four status tracks.
///
/// Architecture:
/// - Domain: Job aggregate, status state machines, money, repository trait
/// - Application: JobService and the views it returns
/// - Infrastructure: in-memory repository and placeholder data
/// - Commands: request parsing at the UI boundary
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::{CalendarEvent, JobService, JobSummary, JobUpdate, JobView};
pub use domain::{
    entities::{Customer, Job, JobDraft, JobId, LineItem, Schedule},
    errors::JobError,
    repository::JobRepository,
    status::{StatusCycle, StatusTrack},
    value_objects::{Money, PaymentType},
};
pub use infrastructure::JobRepositoryImpl;
