/// Test data factories for creating jobs with sensible defaults
use chrono::{NaiveDate, NaiveDateTime};
use crewdesk_lib::modules::jobs::{
    Customer, Job, JobDraft, JobId, LineItem, Money, PaymentType, Schedule, StatusTrack,
};

pub fn at(text: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M").unwrap()
}

pub fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).unwrap()
}

/// Builder for test jobs
pub struct JobFactory {
    id: Option<JobId>,
    customer: Customer,
    line_items: Vec<LineItem>,
    start: NaiveDateTime,
    end: NaiveDateTime,
    dispatched_to: String,
    job_source: String,
    private_notes: String,
    payment_type: PaymentType,
    advances: Vec<StatusTrack>,
}

impl Default for JobFactory {
    fn default() -> Self {
        Self {
            id: None,
            customer: Customer::new("Test Customer"),
            line_items: Vec::new(),
            start: at("2025-01-30T10:00"),
            end: at("2025-01-30T12:00"),
            dispatched_to: String::new(),
            job_source: String::new(),
            private_notes: String::new(),
            payment_type: PaymentType::Unset,
            advances: Vec::new(),
        }
    }
}

impl JobFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minimal() -> Self {
        Self::default()
    }

    /// The job from the new-job form after a second line item was added
    pub fn complete() -> Self {
        Self::default()
            .with_customer(
                Customer::new("John Doe")
                    .with_phone("555-123-4567")
                    .with_email("john.doe@example.com")
                    .with_address("123 Main St, San Francisco, CA"),
            )
            .with_line_item("Window Cleaning", "199")
            .with_line_item("Gutter Cleaning", "99")
            .with_schedule("2025-02-01T10:00", "2025-02-01T12:00")
            .with_dispatched_to("Steven Radonich")
            .with_job_source("Online")
            .with_private_notes("Initially quoted $199, gave veteran's discount")
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(JobId::from(id));
        self
    }

    pub fn with_customer_name(mut self, name: &str) -> Self {
        self.customer.name = name.to_string();
        self
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = customer;
        self
    }

    pub fn with_line_item(mut self, description: &str, price: &str) -> Self {
        self.line_items
            .push(LineItem::new(description, Money::parse(price).unwrap()));
        self
    }

    pub fn with_schedule(mut self, start: &str, end: &str) -> Self {
        self.start = at(start);
        self.end = at(end);
        self
    }

    pub fn with_dispatched_to(mut self, assignee: &str) -> Self {
        self.dispatched_to = assignee.to_string();
        self
    }

    pub fn with_job_source(mut self, source: &str) -> Self {
        self.job_source = source.to_string();
        self
    }

    pub fn with_private_notes(mut self, notes: &str) -> Self {
        self.private_notes = notes.to_string();
        self
    }

    pub fn with_payment_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = payment_type;
        self
    }

    /// Advance `track` `times` times after the job is built
    pub fn advanced(mut self, track: StatusTrack, times: usize) -> Self {
        self.advances.extend(std::iter::repeat(track).take(times));
        self
    }

    pub fn draft(&self) -> JobDraft {
        let schedule = Schedule::new(self.start, self.end).unwrap();
        let mut draft = JobDraft::new(self.customer.clone(), schedule)
            .with_dispatched_to(self.dispatched_to.clone())
            .with_job_source(self.job_source.clone())
            .with_private_notes(self.private_notes.clone());
        draft.line_items = self.line_items.clone();
        draft
    }

    pub fn build(self) -> Job {
        let draft = self.draft();
        let mut job = match self.id {
            Some(id) => Job::with_id(id, draft),
            None => Job::new(draft),
        };

        if self.payment_type.is_set() {
            job.set_payment_type(self.payment_type);
        }
        for track in self.advances {
            job.advance(track);
        }

        job
    }
}
