use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{DayLabel, Roster};

/// One assigned (day, shift) pair in the wire response. `day_of_week` is
/// `chrono`'s own weekday name -- the thin rendering the ambient stack gets
/// for free, not the locale-dependent rendering this service leaves to its
/// caller.
#[derive(Debug, Serialize, ToSchema)]
pub struct AssignedShiftSerialize {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub shift: String,
}

impl From<(DayLabel, crate::domain::Shift)> for AssignedShiftSerialize {
    fn from((day, shift): (DayLabel, crate::domain::Shift)) -> Self {
        Self {
            date: day.date,
            day_of_week: day.date.weekday().to_string(),
            shift: shift.as_str().to_string(),
        }
    }
}

/// The solved roster, restricted to the requested range -- domain `Roster`
/// projected to an API-facing shape: agent name -> ordered shifts.
#[derive(Debug, Serialize, ToSchema)]
pub struct RosterSerialize {
    pub assignments: HashMap<String, Vec<AssignedShiftSerialize>>,
}

impl From<Roster> for RosterSerialize {
    fn from(roster: Roster) -> Self {
        let assignments = roster
            .assignments
            .into_iter()
            .map(|(agent, shifts)| {
                let shifts = shifts.into_iter().map(AssignedShiftSerialize::from).collect();
                (agent, shifts)
            })
            .collect();
        Self { assignments }
    }
}
