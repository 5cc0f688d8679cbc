use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

/// A pinned (day, shift) pair from the previous week, keyed by agent name in
/// `ScheduleRequest::seed_shifts`. `date` must fall in the seven days
/// immediately before `start_date`; the normalizer drops anything else
/// silently.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SeedShiftRequest {
    pub date: NaiveDate,
    pub shift: String,
}

/// `POST /api/v1/schedules` request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScheduleRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub seed_shifts: HashMap<String, Vec<SeedShiftRequest>>,
}
