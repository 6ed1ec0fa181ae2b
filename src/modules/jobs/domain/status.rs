//! Status tracks for a job
//!
//! A job carries four independent, forward-only tracks. Each track is a small
//! ordered enum whose last variant is terminal: advancing from it is a no-op.
use super::errors::JobError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Common behaviour of the four status enums
pub trait StatusCycle: Copy + Eq + fmt::Debug + 'static {
    /// Track this status belongs to
    const TRACK: StatusTrack;

    /// First value of the track
    fn initial() -> Self;

    /// The value after this one, or `None` at the terminal value
    fn next(self) -> Option<Self>;

    /// Label shown to the user (and used on the wire)
    fn label(self) -> &'static str;

    fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Move one step forward. Returns `false` and leaves the value untouched
    /// when already terminal.
    fn advance(&mut self) -> bool {
        match self.next() {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }
}

fn parse_label<S: StatusCycle>(candidates: &[S], s: &str) -> Result<S, JobError> {
    let wanted = s.trim();
    candidates
        .iter()
        .copied()
        .find(|status| status.label().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| JobError::InvalidStatus {
            track: S::TRACK.field_name(),
            value: s.to_string(),
        })
}

/// Driving status: Drive -> In Progress -> Arrived
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum DrivingStatus {
    #[default]
    Drive,
    #[serde(rename = "In Progress")]
    InProgress,
    Arrived,
}

impl StatusCycle for DrivingStatus {
    const TRACK: StatusTrack = StatusTrack::Driving;

    fn initial() -> Self {
        DrivingStatus::Drive
    }

    fn next(self) -> Option<Self> {
        match self {
            DrivingStatus::Drive => Some(DrivingStatus::InProgress),
            DrivingStatus::InProgress => Some(DrivingStatus::Arrived),
            DrivingStatus::Arrived => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            DrivingStatus::Drive => "Drive",
            DrivingStatus::InProgress => "In Progress",
            DrivingStatus::Arrived => "Arrived",
        }
    }
}

/// Work status: Start -> In Progress -> Finished
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum JobStatus {
    #[default]
    Start,
    #[serde(rename = "In Progress")]
    InProgress,
    Finished,
}

impl StatusCycle for JobStatus {
    const TRACK: StatusTrack = StatusTrack::Job;

    fn initial() -> Self {
        JobStatus::Start
    }

    fn next(self) -> Option<Self> {
        match self {
            JobStatus::Start => Some(JobStatus::InProgress),
            JobStatus::InProgress => Some(JobStatus::Finished),
            JobStatus::Finished => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            JobStatus::Start => "Start",
            JobStatus::InProgress => "In Progress",
            JobStatus::Finished => "Finished",
        }
    }
}

/// Review link status: Send -> Sent
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum ReviewStatus {
    #[default]
    Send,
    Sent,
}

impl StatusCycle for ReviewStatus {
    const TRACK: StatusTrack = StatusTrack::Review;

    fn initial() -> Self {
        ReviewStatus::Send
    }

    fn next(self) -> Option<Self> {
        match self {
            ReviewStatus::Send => Some(ReviewStatus::Sent),
            ReviewStatus::Sent => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ReviewStatus::Send => "Send",
            ReviewStatus::Sent => "Sent",
        }
    }
}

/// Payment status: Unpaid -> Paid
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
}

impl StatusCycle for PaymentStatus {
    const TRACK: StatusTrack = StatusTrack::Payment;

    fn initial() -> Self {
        PaymentStatus::Unpaid
    }

    fn next(self) -> Option<Self> {
        match self {
            PaymentStatus::Unpaid => Some(PaymentStatus::Paid),
            PaymentStatus::Paid => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Paid => "Paid",
        }
    }
}

macro_rules! impl_status_text {
    ($($status:ty => [$($variant:expr),+]),+ $(,)?) => {
        $(
            impl fmt::Display for $status {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $status {
                type Err = JobError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_label(&[$($variant),+], s)
                }
            }
        )+
    };
}

impl_status_text! {
    DrivingStatus => [DrivingStatus::Drive, DrivingStatus::InProgress, DrivingStatus::Arrived],
    JobStatus => [JobStatus::Start, JobStatus::InProgress, JobStatus::Finished],
    ReviewStatus => [ReviewStatus::Send, ReviewStatus::Sent],
    PaymentStatus => [PaymentStatus::Unpaid, PaymentStatus::Paid],
}

/// Selects one of the four status tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusTrack {
    Driving,
    Job,
    Review,
    Payment,
}

impl StatusTrack {
    pub const ALL: [StatusTrack; 4] = [
        StatusTrack::Driving,
        StatusTrack::Job,
        StatusTrack::Review,
        StatusTrack::Payment,
    ];

    /// Field name of the track on the job record
    pub fn field_name(&self) -> &'static str {
        match self {
            StatusTrack::Driving => "drivingStatus",
            StatusTrack::Job => "jobStatus",
            StatusTrack::Review => "reviewStatus",
            StatusTrack::Payment => "paymentStatus",
        }
    }

    /// Heading shown above the track's button
    pub fn display_name(&self) -> &'static str {
        match self {
            StatusTrack::Driving => "Driving Status",
            StatusTrack::Job => "Job Status",
            StatusTrack::Review => "Review Link",
            StatusTrack::Payment => "Payment Status",
        }
    }
}

impl fmt::Display for StatusTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for StatusTrack {
    type Err = JobError;

    /// Accepts `drivingStatus`, `driving_status`, `Driving Status` or `driving`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        let key = normalized.strip_suffix("status").unwrap_or(&normalized);

        match key {
            "driving" => Ok(StatusTrack::Driving),
            "job" => Ok(StatusTrack::Job),
            "review" => Ok(StatusTrack::Review),
            "payment" => Ok(StatusTrack::Payment),
            _ => Err(JobError::UnknownTrack(s.to_string())),
        }
    }
}

/// The four status tracks of a job, all starting at their initial value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBoard {
    driving_status: DrivingStatus,
    job_status: JobStatus,
    review_status: ReviewStatus,
    payment_status: PaymentStatus,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn driving(&self) -> DrivingStatus {
        self.driving_status
    }

    pub fn job(&self) -> JobStatus {
        self.job_status
    }

    pub fn review(&self) -> ReviewStatus {
        self.review_status
    }

    pub fn payment(&self) -> PaymentStatus {
        self.payment_status
    }

    /// Advance one track; `false` means it was already terminal
    pub fn advance(&mut self, track: StatusTrack) -> bool {
        match track {
            StatusTrack::Driving => self.driving_status.advance(),
            StatusTrack::Job => self.job_status.advance(),
            StatusTrack::Review => self.review_status.advance(),
            StatusTrack::Payment => self.payment_status.advance(),
        }
    }

    pub fn is_terminal(&self, track: StatusTrack) -> bool {
        match track {
            StatusTrack::Driving => self.driving_status.is_terminal(),
            StatusTrack::Job => self.job_status.is_terminal(),
            StatusTrack::Review => self.review_status.is_terminal(),
            StatusTrack::Payment => self.payment_status.is_terminal(),
        }
    }

    pub fn label(&self, track: StatusTrack) -> &'static str {
        match track {
            StatusTrack::Driving => self.driving_status.label(),
            StatusTrack::Job => self.job_status.label(),
            StatusTrack::Review => self.review_status.label(),
            StatusTrack::Payment => self.payment_status.label(),
        }
    }
}
