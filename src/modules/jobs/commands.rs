use super::application::{CalendarEvent, JobService, JobSummary, JobUpdate, JobView};
use super::domain::{Customer, JobDraft, JobId, LineItem, PaymentType, Schedule, StatusTrack};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::datetime::{format_local_datetime, parse_local_datetime};
use crate::{log_debug, log_error, log_info};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerInput {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub customer_address: String,
}

impl From<CustomerInput> for Customer {
    fn from(input: CustomerInput) -> Self {
        Customer {
            name: input.customer_name,
            phone: input.customer_phone,
            email: input.customer_email,
            address: input.customer_address,
        }
    }
}

/// A line item row as typed into the form; the price is still text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItemInput {
    pub description: String,
    pub price: String,
}

impl TryFrom<LineItemInput> for LineItem {
    type Error = AppError;

    fn try_from(input: LineItemInput) -> Result<Self, Self::Error> {
        Ok(LineItem::parse(input.description, &input.price)?)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateJobRequest {
    #[serde(flatten)]
    pub customer: CustomerInput,
    pub line_items: Vec<LineItemInput>,
    pub scheduled_start: String,
    /// Defaults to the configured job length after the start
    pub scheduled_end: Option<String>,
    pub dispatched_to: String,
    pub job_source: String,
    pub private_notes: String,
}

impl From<&JobDraft> for CreateJobRequest {
    fn from(draft: &JobDraft) -> Self {
        Self {
            customer: CustomerInput {
                customer_name: draft.customer.name.clone(),
                customer_phone: draft.customer.phone.clone(),
                customer_email: draft.customer.email.clone(),
                customer_address: draft.customer.address.clone(),
            },
            line_items: draft
                .line_items
                .iter()
                .map(|item| LineItemInput {
                    description: item.description.clone(),
                    price: item.price.to_string(),
                })
                .collect(),
            scheduled_start: format_local_datetime(&draft.schedule.start()),
            scheduled_end: Some(format_local_datetime(&draft.schedule.end())),
            dispatched_to: draft.dispatched_to.clone(),
            job_source: draft.job_source.clone(),
            private_notes: draft.private_notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAddJobRequest {
    /// Calendar day, `YYYY-MM-DD`
    pub date: String,
    pub customer_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetJobRequest {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventsRequest {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceStatusRequest {
    pub id: String,
    /// `drivingStatus`, `jobStatus`, `reviewStatus` or `paymentStatus`
    pub track: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPaymentTypeRequest {
    pub id: String,
    pub payment_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateJobRequest {
    pub id: String,
    pub customer: Option<CustomerInput>,
    pub line_items: Option<Vec<LineItemInput>>,
    pub scheduled_start: Option<String>,
    pub scheduled_end: Option<String>,
    pub dispatched_to: Option<String>,
    pub job_source: Option<String>,
    pub private_notes: Option<String>,
    pub payment_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLineItemRequest {
    pub id: String,
    /// Omitted for a blank row
    pub line_item: Option<LineItemInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLineItemRequest {
    pub id: String,
    pub index: usize,
    pub line_item: LineItemInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveLineItemRequest {
    pub id: String,
    pub index: usize,
}

fn parse_line_items(inputs: Vec<LineItemInput>) -> AppResult<Vec<LineItem>> {
    inputs.into_iter().map(LineItem::try_from).collect()
}

fn parse_schedule(start: &str, end: &str) -> AppResult<Schedule> {
    let start = parse_local_datetime(start)?;
    let end = parse_local_datetime(end)?;
    Ok(Schedule::new(start, end)?)
}

fn build_update(request: UpdateJobRequest) -> AppResult<JobUpdate> {
    let schedule = match (request.scheduled_start, request.scheduled_end) {
        (Some(start), Some(end)) => Some(parse_schedule(&start, &end)?),
        (None, None) => None,
        _ => {
            return Err(AppError::InvalidInput(
                "scheduledStart and scheduledEnd must be edited together".to_string(),
            ))
        }
    };

    Ok(JobUpdate {
        customer: request.customer.map(Customer::from),
        line_items: request.line_items.map(parse_line_items).transpose()?,
        schedule,
        dispatched_to: request.dispatched_to,
        job_source: request.job_source,
        private_notes: request.private_notes,
        payment_type: request
            .payment_type
            .map(|raw| raw.parse::<PaymentType>())
            .transpose()?,
    })
}

/// Prefilled new-job form
pub fn get_new_job_form(job_service: &JobService) -> CreateJobRequest {
    CreateJobRequest::from(&job_service.new_job_draft())
}

async fn create_job_from_request(
    request: CreateJobRequest,
    job_service: &JobService,
) -> AppResult<JobView> {
    let start = parse_local_datetime(&request.scheduled_start)?;
    let schedule = match &request.scheduled_end {
        Some(end) => Schedule::new(start, parse_local_datetime(end)?)?,
        None => job_service.default_schedule(start),
    };

    let mut draft = JobDraft::new(Customer::from(request.customer), schedule)
        .with_dispatched_to(request.dispatched_to)
        .with_job_source(request.job_source)
        .with_private_notes(request.private_notes);
    draft.line_items = parse_line_items(request.line_items)?;

    job_service.create_job(draft).await
}

pub async fn create_job(
    request: CreateJobRequest,
    job_service: &JobService,
) -> Result<JobView, String> {
    let result = create_job_from_request(request, job_service).await;

    match &result {
        Ok(view) => log_info!("Job {} created from form", view.job.id()),
        Err(e) => log_error!("Failed to create job: {}", e),
    }

    result.map_err(|e| e.to_string())
}

pub async fn quick_add_job(
    request: QuickAddJobRequest,
    job_service: &JobService,
) -> Result<JobView, String> {
    let date = NaiveDate::parse_from_str(request.date.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::from(e).to_string())?;

    job_service
        .quick_add(date, request.customer_name)
        .await
        .map_err(|e| e.to_string())
}

pub async fn get_job(
    request: GetJobRequest,
    job_service: &JobService,
) -> Result<Option<JobView>, String> {
    job_service
        .get_job(&JobId::from(request.id))
        .await
        .map_err(|e| e.to_string())
}

pub async fn list_jobs(
    request: PaginationParams,
    job_service: &JobService,
) -> Result<PaginatedResult<JobSummary>, String> {
    job_service
        .list_jobs(&request)
        .await
        .map_err(|e| e.to_string())
}

pub async fn get_calendar_events(
    request: CalendarEventsRequest,
    job_service: &JobService,
) -> Result<Vec<CalendarEvent>, String> {
    let from = parse_local_datetime(&request.from).map_err(|e| AppError::from(e).to_string())?;
    let to = parse_local_datetime(&request.to).map_err(|e| AppError::from(e).to_string())?;

    job_service
        .calendar_events(from, to)
        .await
        .map_err(|e| e.to_string())
}

pub async fn advance_job_status(
    request: AdvanceStatusRequest,
    job_service: &JobService,
) -> Result<JobView, String> {
    log_debug!(
        "advance_job_status command called - job: {}, track: {}",
        request.id,
        request.track
    );

    let track: StatusTrack = request
        .track
        .parse()
        .map_err(|e| AppError::from(e).to_string())?;

    job_service
        .advance_status(&JobId::from(request.id), track)
        .await
        .map_err(|e| e.to_string())
}

pub async fn set_payment_type(
    request: SetPaymentTypeRequest,
    job_service: &JobService,
) -> Result<JobView, String> {
    let payment_type: PaymentType = request
        .payment_type
        .parse()
        .map_err(|e| AppError::from(e).to_string())?;

    job_service
        .set_payment_type(&JobId::from(request.id), payment_type)
        .await
        .map_err(|e| e.to_string())
}

pub async fn update_job(
    request: UpdateJobRequest,
    job_service: &JobService,
) -> Result<JobView, String> {
    let id = JobId::from(request.id.clone());
    let update = build_update(request).map_err(|e| e.to_string())?;

    job_service
        .update_job(&id, update)
        .await
        .map_err(|e| e.to_string())
}

pub async fn add_line_item(
    request: AddLineItemRequest,
    job_service: &JobService,
) -> Result<JobView, String> {
    let item = match request.line_item {
        Some(input) => LineItem::try_from(input).map_err(|e| e.to_string())?,
        None => LineItem::blank(),
    };

    job_service
        .add_line_item(&JobId::from(request.id), item)
        .await
        .map_err(|e| e.to_string())
}

pub async fn update_line_item(
    request: UpdateLineItemRequest,
    job_service: &JobService,
) -> Result<JobView, String> {
    let item = LineItem::try_from(request.line_item).map_err(|e| e.to_string())?;

    job_service
        .update_line_item(&JobId::from(request.id), request.index, item)
        .await
        .map_err(|e| e.to_string())
}

pub async fn remove_line_item(
    request: RemoveLineItemRequest,
    job_service: &JobService,
) -> Result<JobView, String> {
    job_service
        .remove_line_item(&JobId::from(request.id), request.index)
        .await
        .map_err(|e| e.to_string())
}
