pub mod dto;
pub mod service;

pub use dto::{CalendarEvent, JobSummary, JobUpdate, JobView, TrackState};
pub use service::JobService;
