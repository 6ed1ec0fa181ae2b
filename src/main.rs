use crewdesk_lib::modules::jobs::commands::{self, CalendarEventsRequest};
use crewdesk_lib::shared::application::PaginationParams;
use crewdesk_lib::shared::utils::validation::MAX_PAGE_SIZE;

/// Usage: `crewdesk [FROM TO]`
///
/// With a range (`2025-01-30T00:00 2025-01-31T00:00`) prints the calendar
/// events in it, otherwise the first page of all jobs, as JSON.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let state = crewdesk_lib::run().await?;
    let service = state.job_service.as_ref();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let output = match args.as_slice() {
        [from, to] => {
            let request = CalendarEventsRequest {
                from: from.clone(),
                to: to.clone(),
            };
            let events = commands::get_calendar_events(request, service)
                .await
                .map_err(anyhow::Error::msg)?;
            serde_json::to_string_pretty(&events)?
        }
        [] => {
            let page = commands::list_jobs(PaginationParams::new(1, MAX_PAGE_SIZE), service)
                .await
                .map_err(anyhow::Error::msg)?;
            serde_json::to_string_pretty(&page)?
        }
        _ => anyhow::bail!("expected either no arguments or FROM TO"),
    };

    println!("{}", output);
    Ok(())
}
