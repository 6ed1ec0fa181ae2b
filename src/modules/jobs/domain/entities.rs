/// Domain entities for the job record model
///
/// A `Job` is the aggregate a dispatcher edits: customer details, billable line
/// items, a schedule window, assignment notes and four status tracks. Total
/// price and calendar title are derived on every read and never stored.
use super::errors::{JobError, JobResult};
use super::status::{StatusBoard, StatusTrack};
use super::value_objects::{Money, PaymentType};
use crate::shared::utils::datetime::local_datetime;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Shown in a title when a job has no line items
pub const NO_LINE_ITEMS: &str = "No line items";

/// Opaque job identifier, fixed at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn generate() -> Self {
        JobId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for JobId {
    fn from(value: String) -> Self {
        JobId(value)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        JobId(value.to_string())
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Customer contact details; free text, not format-checked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "customerName")]
    pub name: String,
    #[serde(rename = "customerPhone")]
    pub phone: String,
    #[serde(rename = "customerEmail")]
    pub email: String,
    #[serde(rename = "customerAddress")]
    pub address: String,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

/// One billable component of a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub price: Money,
}

impl LineItem {
    pub fn new(description: impl Into<String>, price: Money) -> Self {
        Self {
            description: description.into(),
            price,
        }
    }

    /// Build a line item from form text, rejecting prices that are not
    /// non-negative decimals
    pub fn parse(description: impl Into<String>, price: &str) -> JobResult<Self> {
        Ok(Self::new(description, Money::parse(price)?))
    }

    /// Empty row added before the user fills it in
    pub fn blank() -> Self {
        Self::new(String::new(), Money::ZERO)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleRecord {
    #[serde(with = "local_datetime")]
    scheduled_start: NaiveDateTime,
    #[serde(with = "local_datetime")]
    scheduled_end: NaiveDateTime,
}

/// Scheduled window in local wall-clock time
///
/// The end may equal the start but never precede it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ScheduleRecord")]
pub struct Schedule {
    #[serde(serialize_with = "local_datetime::serialize")]
    scheduled_start: NaiveDateTime,
    #[serde(serialize_with = "local_datetime::serialize")]
    scheduled_end: NaiveDateTime,
}

impl TryFrom<ScheduleRecord> for Schedule {
    type Error = JobError;

    fn try_from(record: ScheduleRecord) -> Result<Self, Self::Error> {
        Schedule::new(record.scheduled_start, record.scheduled_end)
    }
}

impl Schedule {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> JobResult<Self> {
        if end < start {
            return Err(JobError::InvertedSchedule { start, end });
        }
        Ok(Self {
            scheduled_start: start,
            scheduled_end: end,
        })
    }

    /// Window of `length` starting at `start`; a negative length is treated as zero
    pub fn starting_at(start: NaiveDateTime, length: Duration) -> Self {
        let length = length.max(Duration::zero());
        Self {
            scheduled_start: start,
            scheduled_end: start + length,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.scheduled_start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.scheduled_end
    }

    pub fn duration(&self) -> Duration {
        self.scheduled_end - self.scheduled_start
    }

    /// True when the window touches the half-open range `[from, to)`.
    /// Zero-length windows count if their instant falls inside the range.
    pub fn overlaps(&self, from: NaiveDateTime, to: NaiveDateTime) -> bool {
        if self.scheduled_start == self.scheduled_end {
            return self.scheduled_start >= from && self.scheduled_start < to;
        }
        self.scheduled_start < to && self.scheduled_end > from
    }
}

/// Everything needed to create a job
#[derive(Debug, Clone, PartialEq)]
pub struct JobDraft {
    pub customer: Customer,
    pub line_items: Vec<LineItem>,
    pub schedule: Schedule,
    pub dispatched_to: String,
    pub job_source: String,
    pub private_notes: String,
}

impl JobDraft {
    pub fn new(customer: Customer, schedule: Schedule) -> Self {
        Self {
            customer,
            line_items: Vec::new(),
            schedule,
            dispatched_to: String::new(),
            job_source: String::new(),
            private_notes: String::new(),
        }
    }

    pub fn with_line_item(mut self, item: LineItem) -> Self {
        self.line_items.push(item);
        self
    }

    pub fn with_dispatched_to(mut self, assignee: impl Into<String>) -> Self {
        self.dispatched_to = assignee.into();
        self
    }

    pub fn with_job_source(mut self, source: impl Into<String>) -> Self {
        self.job_source = source.into();
        self
    }

    pub fn with_private_notes(mut self, notes: impl Into<String>) -> Self {
        self.private_notes = notes.into();
        self
    }
}

/// Job aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    id: JobId,
    #[serde(flatten)]
    customer: Customer,
    line_items: Vec<LineItem>,
    #[serde(flatten)]
    schedule: Schedule,
    dispatched_to: String,
    job_source: String,
    private_notes: String,
    #[serde(flatten)]
    statuses: StatusBoard,
    payment_type: PaymentType,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new(draft: JobDraft) -> Self {
        Self::with_id(JobId::generate(), draft)
    }

    /// Create a job under a caller-chosen id
    pub fn with_id(id: JobId, draft: JobDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            customer: draft.customer,
            line_items: draft.line_items,
            schedule: draft.schedule,
            dispatched_to: draft.dispatched_to,
            job_source: draft.job_source,
            private_notes: draft.private_notes,
            statuses: StatusBoard::new(),
            payment_type: PaymentType::Unset,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &JobId {
        &self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn dispatched_to(&self) -> &str {
        &self.dispatched_to
    }

    pub fn job_source(&self) -> &str {
        &self.job_source
    }

    pub fn private_notes(&self) -> &str {
        &self.private_notes
    }

    pub fn statuses(&self) -> &StatusBoard {
        &self.statuses
    }

    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Sum of line-item prices; zero when there are none
    pub fn total(&self) -> Money {
        self.line_items.iter().map(|item| &item.price).sum()
    }

    /// Line-item descriptions joined with ", ", or [`NO_LINE_ITEMS`]
    pub fn line_item_summary(&self) -> String {
        if self.line_items.is_empty() {
            return NO_LINE_ITEMS.to_string();
        }
        self.line_items
            .iter()
            .map(|item| item.description.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Calendar title: `{customer} - ${total} - {line items}`
    pub fn title(&self) -> String {
        format!(
            "{} - ${} - {}",
            self.customer.name,
            self.total(),
            self.line_item_summary()
        )
    }

    /// Move a status track forward one step. Returns `false` and leaves the
    /// job untouched when the track is already terminal.
    pub fn advance(&mut self, track: StatusTrack) -> bool {
        let moved = self.statuses.advance(track);
        if moved {
            self.touch();
        }
        moved
    }

    pub fn is_terminal(&self, track: StatusTrack) -> bool {
        self.statuses.is_terminal(track)
    }

    pub fn status_label(&self, track: StatusTrack) -> &'static str {
        self.statuses.label(track)
    }

    /// Not gated on payment status: a method may be recorded before payment
    /// lands.
    pub fn set_payment_type(&mut self, payment_type: PaymentType) {
        self.payment_type = payment_type;
        self.touch();
    }

    pub fn update_customer(&mut self, customer: Customer) {
        self.customer = customer;
        self.touch();
    }

    pub fn add_line_item(&mut self, item: LineItem) {
        self.line_items.push(item);
        self.touch();
    }

    pub fn update_line_item(&mut self, index: usize, item: LineItem) -> JobResult<()> {
        let len = self.line_items.len();
        let slot = self
            .line_items
            .get_mut(index)
            .ok_or(JobError::LineItemOutOfRange { index, len })?;
        *slot = item;
        self.touch();
        Ok(())
    }

    pub fn remove_line_item(&mut self, index: usize) -> JobResult<LineItem> {
        if index >= self.line_items.len() {
            return Err(JobError::LineItemOutOfRange {
                index,
                len: self.line_items.len(),
            });
        }
        let removed = self.line_items.remove(index);
        self.touch();
        Ok(removed)
    }

    pub fn replace_line_items(&mut self, items: Vec<LineItem>) {
        self.line_items = items;
        self.touch();
    }

    pub fn reschedule(&mut self, schedule: Schedule) {
        self.schedule = schedule;
        self.touch();
    }

    pub fn set_dispatched_to(&mut self, assignee: impl Into<String>) {
        self.dispatched_to = assignee.into();
        self.touch();
    }

    pub fn set_job_source(&mut self, source: impl Into<String>) {
        self.job_source = source.into();
        self.touch();
    }

    pub fn set_private_notes(&mut self, notes: impl Into<String>) {
        self.private_notes = notes.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::jobs::domain::status::{
        DrivingStatus, PaymentStatus, ReviewStatus, StatusCycle,
    };
    use crate::shared::utils::datetime::parse_local_datetime;

    fn at(text: &str) -> NaiveDateTime {
        parse_local_datetime(text).unwrap()
    }

    fn john_doe_job(items: Vec<LineItem>) -> Job {
        let schedule = Schedule::new(at("2025-02-01T10:00"), at("2025-02-01T12:00")).unwrap();
        let mut draft = JobDraft::new(Customer::new("John Doe"), schedule);
        draft.line_items = items;
        Job::new(draft)
    }

    #[test]
    fn test_total_and_title_for_two_items() {
        let job = john_doe_job(vec![
            LineItem::parse("Window Cleaning", "199").unwrap(),
            LineItem::parse("Gutter Cleaning", "99").unwrap(),
        ]);

        assert_eq!(job.total(), Money::from_units(298));
        assert_eq!(
            job.title(),
            "John Doe - $298 - Window Cleaning, Gutter Cleaning"
        );
    }

    #[test]
    fn test_empty_job_totals_zero() {
        let job = john_doe_job(Vec::new());

        assert_eq!(job.total(), Money::ZERO);
        assert!(job.title().contains(NO_LINE_ITEMS));
        assert_eq!(job.title(), "John Doe - $0 - No line items");
    }

    #[test]
    fn test_total_uses_decimal_prices() {
        let job = john_doe_job(vec![
            LineItem::parse("Screen Repair", "19.99").unwrap(),
            LineItem::parse("Hard Water Treatment", "5.01").unwrap(),
            LineItem::parse("Travel", "0.10").unwrap(),
        ]);

        assert_eq!(job.total(), Money::parse("25.10").unwrap());
        assert_eq!(job.total().to_string(), "25.1");
    }

    #[test]
    fn test_malformed_price_is_rejected() {
        assert_eq!(
            LineItem::parse("Window Cleaning", "one ninety nine"),
            Err(JobError::MalformedPrice {
                value: "one ninety nine".to_string()
            })
        );
    }

    #[test]
    fn test_new_job_starts_at_initial_statuses() {
        let job = john_doe_job(Vec::new());

        assert_eq!(job.statuses().driving(), DrivingStatus::initial());
        assert_eq!(job.statuses().payment(), PaymentStatus::Unpaid);
        assert_eq!(job.payment_type(), PaymentType::Unset);
        for track in StatusTrack::ALL {
            assert!(!job.is_terminal(track));
        }
    }

    #[test]
    fn test_payment_status_advances_once() {
        let mut job = john_doe_job(Vec::new());

        assert!(job.advance(StatusTrack::Payment));
        assert_eq!(job.statuses().payment(), PaymentStatus::Paid);
        assert!(!job.advance(StatusTrack::Payment));
        assert_eq!(job.statuses().payment(), PaymentStatus::Paid);
    }

    #[test]
    fn test_review_status_terminal_after_one_advance() {
        let mut job = john_doe_job(Vec::new());

        job.advance(StatusTrack::Review);

        assert_eq!(job.statuses().review(), ReviewStatus::Sent);
        assert!(job.is_terminal(StatusTrack::Review));
        assert_eq!(job.status_label(StatusTrack::Review), "Sent");
    }

    #[test]
    fn test_driving_status_repeated_advance() {
        let mut job = john_doe_job(Vec::new());

        let observed: Vec<&str> = (0..4)
            .map(|_| {
                job.advance(StatusTrack::Driving);
                job.status_label(StatusTrack::Driving)
            })
            .collect();

        assert_eq!(observed, vec!["In Progress", "Arrived", "Arrived", "Arrived"]);
    }

    #[test]
    fn test_noop_advance_keeps_updated_at() {
        let mut job = john_doe_job(Vec::new());
        job.advance(StatusTrack::Review);
        let stamp = job.updated_at();

        assert!(!job.advance(StatusTrack::Review));
        assert_eq!(job.updated_at(), stamp);
    }

    #[test]
    fn test_payment_type_settable_while_unpaid() {
        let mut job = john_doe_job(Vec::new());

        job.set_payment_type(PaymentType::Zelle);

        assert_eq!(job.statuses().payment(), PaymentStatus::Unpaid);
        assert_eq!(job.payment_type(), PaymentType::Zelle);
    }

    #[test]
    fn test_line_item_editing() {
        let mut job = john_doe_job(vec![LineItem::parse("Window Cleaning", "199").unwrap()]);

        job.add_line_item(LineItem::blank());
        assert_eq!(job.line_items().len(), 2);
        assert_eq!(job.total(), Money::from_units(199));

        job.update_line_item(1, LineItem::parse("Screen Repair", "40").unwrap())
            .unwrap();
        assert_eq!(job.total(), Money::from_units(239));

        let removed = job.remove_line_item(0).unwrap();
        assert_eq!(removed.description, "Window Cleaning");
        assert_eq!(job.line_item_summary(), "Screen Repair");

        assert_eq!(
            job.remove_line_item(5),
            Err(JobError::LineItemOutOfRange { index: 5, len: 1 })
        );
        assert!(job.update_line_item(1, LineItem::blank()).is_err());
    }

    #[test]
    fn test_schedule_rejects_end_before_start() {
        let result = Schedule::new(at("2025-02-01T12:00"), at("2025-02-01T10:00"));
        assert!(matches!(result, Err(JobError::InvertedSchedule { .. })));

        let instant = Schedule::new(at("2025-02-01T12:00"), at("2025-02-01T12:00")).unwrap();
        assert_eq!(instant.duration(), Duration::zero());
    }

    #[test]
    fn test_schedule_overlap() {
        let schedule = Schedule::starting_at(at("2025-01-30T10:00"), Duration::hours(2));

        assert!(schedule.overlaps(at("2025-01-30T00:00"), at("2025-01-31T00:00")));
        assert!(schedule.overlaps(at("2025-01-30T11:00"), at("2025-01-30T11:30")));
        assert!(!schedule.overlaps(at("2025-01-30T12:00"), at("2025-01-30T13:00")));
        assert!(!schedule.overlaps(at("2025-01-29T00:00"), at("2025-01-30T10:00")));
    }

    #[test]
    fn test_job_wire_record() {
        let mut job = john_doe_job(vec![LineItem::parse("Window Cleaning", "199").unwrap()]);
        job.advance(StatusTrack::Job);

        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["customerName"], "John Doe");
        assert_eq!(value["lineItems"][0]["price"], "199");
        assert_eq!(value["scheduledStart"], "2025-02-01T10:00");
        assert_eq!(value["scheduledEnd"], "2025-02-01T12:00");
        assert_eq!(value["jobStatus"], "In Progress");
        assert_eq!(value["paymentType"], "");

        let restored: Job = serde_json::from_value(value).unwrap();
        assert_eq!(restored, job);
    }

    #[test]
    fn test_job_record_with_bad_price_is_rejected() {
        let job = john_doe_job(vec![LineItem::parse("Window Cleaning", "199").unwrap()]);
        let mut value = serde_json::to_value(&job).unwrap();
        value["lineItems"][0]["price"] = serde_json::json!("abc");

        assert!(serde_json::from_value::<Job>(value).is_err());
    }

    #[test]
    fn test_job_record_with_inverted_schedule_is_rejected() {
        let job = john_doe_job(Vec::new());
        let mut value = serde_json::to_value(&job).unwrap();
        value["scheduledEnd"] = serde_json::json!("2025-02-01T09:00");

        let err = serde_json::from_value::<Job>(value).unwrap_err();
        assert!(err.to_string().contains("is before scheduled start"), "{}", err);

        let schedule = serde_json::from_value::<Schedule>(serde_json::json!({
            "scheduledStart": "2025-02-01T10:00",
            "scheduledEnd": "2025-02-01T09:59",
        }));
        assert!(schedule.is_err());
    }

    #[test]
    fn test_total_of_largest_prices_does_not_overflow() {
        let items = vec![LineItem::new("Commercial Contract", Money::MAX_PRICE); 1000];
        let job = john_doe_job(items);

        assert_eq!(job.total().to_string(), "999999999999990");
        assert!(job.title().starts_with("John Doe - $999999999999990 - "));
    }
}
