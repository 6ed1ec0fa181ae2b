pub mod entities;
pub mod errors;
pub mod repository;
pub mod status;
pub mod value_objects;

pub use entities::{Customer, Job, JobDraft, JobId, LineItem, Schedule, NO_LINE_ITEMS};
pub use errors::{JobError, JobResult};
pub use repository::JobRepository;
pub use status::{
    DrivingStatus, JobStatus, PaymentStatus, ReviewStatus, StatusBoard, StatusCycle, StatusTrack,
};
pub use value_objects::{Money, PaymentType};
