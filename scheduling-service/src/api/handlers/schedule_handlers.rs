use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use shared::{ApiResponse, DomainError};

use crate::api::requests::{ScheduleRequest, SeedShiftRequest};
use crate::api::state::AppState;
use crate::domain::normalizer::{self, RawSeedShift};
use crate::domain::{calendar, scheduler, Durations, Horizon, Roster, SchedulerError};
use crate::infrastructure::config::Settings;
use crate::presentation::RosterSerialize;

/// Generate a duty roster for the requested date range. Synchronous from the
/// caller's perspective: the solver runs to completion on a `spawn_blocking`
/// thread so it doesn't stall the async runtime's other connections while a
/// solve is in flight, but there is no background job to poll -- the
/// response carries the finished roster or the solver's verdict.
#[utoipa::path(
    post,
    path = "/api/v1/schedules",
    request_body = ScheduleRequest,
    responses(
        (status = 200, description = "Roster generated", body = ApiResponse<RosterSerialize>),
        (status = 400, description = "Invalid date range, seed shift, or agent preferences"),
        (status = 422, description = "No feasible roster exists for the given constraints"),
        (status = 500, description = "Internal server error")
    ),
    tag = "schedules"
)]
pub async fn generate_schedule(
    State(state): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    tracing::info!(
        start_date = %request.start_date,
        end_date = %request.end_date,
        seeded_agents = request.seed_shifts.len(),
        "received schedule request"
    );

    let settings = state.settings.clone();

    let roster = tokio::task::spawn_blocking(move || build_roster(&settings, request))
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .map_err(map_scheduler_error)?;

    let response = ApiResponse::success("roster generated", RosterSerialize::from(roster));
    Ok((StatusCode::OK, Json(response)))
}

/// Calendar expansion, then normalization, then `scheduler::generate_roster`
/// -- the whole pipeline, run entirely off the async runtime.
fn build_roster(settings: &Settings, request: ScheduleRequest) -> Result<Roster, SchedulerError> {
    let current = calendar::expand(request.start_date, request.end_date)?;
    let previous = calendar::previous_week(request.start_date)?;
    let horizon = Horizon {
        current,
        previous,
        holidays: settings.roster.holiday_set(),
    };

    let agents = normalizer::normalize_agents(&settings.roster.agents, &horizon)?;

    let raw_seeds: Vec<RawSeedShift> = request
        .seed_shifts
        .into_iter()
        .flat_map(|(agent, shifts)| {
            shifts.into_iter().map(move |s: SeedShiftRequest| RawSeedShift {
                agent: agent.clone(),
                date: s.date,
                shift: s.shift,
            })
        })
        .collect();
    let seeds = normalizer::normalize_seeds(&raw_seeds, &agents, &horizon)?;

    let durations = Durations::from_decimal_hours(&settings.roster.durations);

    scheduler::generate_roster(&agents, &horizon, &durations, &seeds)
}

/// Converts the scheduler's error taxonomy to `shared::DomainError`, then to
/// an HTTP status. `NoSolution` logs at `warn` -- it's the solver's own
/// verdict, not a caller mistake, and worth seeing in the service logs even
/// though it isn't a 5xx. It travels as `DomainError::InternalError` but
/// keeps its own 422 so a caller can tell "your input was malformed" apart
/// from "no roster exists for this input". The other variants are
/// `InvalidInput` and get a plain 400; the `tower_http` trace layer already
/// records those at the access-log level, so the handler doesn't log them
/// again.
fn map_scheduler_error(err: SchedulerError) -> (StatusCode, String) {
    let is_no_solution = matches!(err, SchedulerError::NoSolution);
    let domain_err: DomainError = err.into();

    let status = if is_no_solution {
        tracing::warn!(error = %domain_err, "solver found no feasible roster");
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        match domain_err {
            DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    };

    (status, domain_err.to_string())
}
