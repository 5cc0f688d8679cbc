//! Input Normalizer: turns raw, loosely-typed configuration (agent records as
//! they arrive from config/the request) into the typed `Agent`/`SeedShift`
//! values the rest of the scheduler trusts.

use std::collections::{BTreeSet, HashSet};

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use super::error::SchedulerError;
use super::model::{Agent, DayLabel, Horizon, Preferences, SeedShift, Shift};

/// Raw, pre-normalization agent record -- shift names are opaque strings,
/// dates are plain `NaiveDate`s, nothing has been checked against the
/// horizon yet. Doubles as the config-file shape the `config` crate
/// deserializes the agent roster into.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAgent {
    pub name: String,
    #[serde(default)]
    pub preferred: Vec<String>,
    #[serde(default)]
    pub avoid: Vec<String>,
    #[serde(default)]
    pub unavailable: Vec<NaiveDate>,
    #[serde(default)]
    pub training: Vec<NaiveDate>,
    #[serde(default)]
    pub leave: Option<(NaiveDate, NaiveDate)>,
    #[serde(default)]
    pub exclusions: Vec<NaiveDate>,
    #[serde(default)]
    pub restrictions: Vec<String>,
}

/// A raw seed shift as supplied by the caller: (agent name, previous-week
/// date, shift name).
#[derive(Debug, Clone)]
pub struct RawSeedShift {
    pub agent: String,
    pub date: NaiveDate,
    pub shift: String,
}

fn shift_set(names: &[String]) -> BTreeSet<Shift> {
    names.iter().filter_map(|n| Shift::from_name(n)).collect()
}

/// Keep only the dates that land somewhere in the horizon (current or
/// previous week), mapping each to its `DayLabel`; dates outside the horizon
/// are silently dropped.
fn dates_in_horizon(dates: &[NaiveDate], horizon_dates: &HashSet<NaiveDate>) -> HashSet<DayLabel> {
    dates
        .iter()
        .filter(|d| horizon_dates.contains(d))
        .map(|d| DayLabel::new(*d))
        .collect()
}

/// Normalize a single raw agent against the horizon.
///
/// Fails with `InconsistentPreferences` if `preferred` and `avoid` overlap.
pub fn normalize_agent(raw: &RawAgent, horizon: &Horizon) -> Result<Agent, SchedulerError> {
    let horizon_dates: HashSet<NaiveDate> = horizon.all_days().iter().map(|d| d.date).collect();
    let current_dates: HashSet<NaiveDate> = horizon.current.iter().map(|d| d.date).collect();

    let preferred = shift_set(&raw.preferred);
    let avoid = shift_set(&raw.avoid);
    let overlap: Vec<Shift> = preferred.intersection(&avoid).copied().collect();
    if !overlap.is_empty() {
        return Err(SchedulerError::InconsistentPreferences {
            agent: raw.name.clone(),
            shifts: overlap.iter().map(|s| s.as_str().to_string()).collect(),
        });
    }

    let mut unavailable = dates_in_horizon(&raw.unavailable, &horizon_dates);
    let training = dates_in_horizon(&raw.training, &horizon_dates);
    let exclusions = dates_in_horizon(&raw.exclusions, &horizon_dates);
    let restrictions = shift_set(&raw.restrictions);

    let leave = raw.leave.map(|(start, end)| {
        (DayLabel::new(start), DayLabel::new(end))
    });

    // If the leave starts on a Monday, the preceding Saturday/Sunday are
    // also unavailable -- but only the ones that actually fall in the
    // requested range, not the seed week.
    if let Some((start, _)) = raw.leave {
        if start.weekday().num_days_from_monday() == 0 {
            let saturday = start - chrono::Duration::days(2);
            let sunday = start - chrono::Duration::days(1);
            if current_dates.contains(&saturday) {
                unavailable.insert(DayLabel::new(saturday));
            }
            if current_dates.contains(&sunday) {
                unavailable.insert(DayLabel::new(sunday));
            }
        }
    }

    Ok(Agent {
        name: raw.name.clone(),
        preferences: Preferences { preferred, avoid },
        unavailable,
        training,
        leave,
        exclusions,
        restrictions,
    })
}

pub fn normalize_agents(raws: &[RawAgent], horizon: &Horizon) -> Result<Vec<Agent>, SchedulerError> {
    raws.iter().map(|raw| normalize_agent(raw, horizon)).collect()
}

/// Validate and normalize seed shifts.
///
/// Unknown agent or unknown shift name fails with `InvalidSeed`. A seed whose
/// day is not in `horizon.previous` is dropped silently.
pub fn normalize_seeds(
    raws: &[RawSeedShift],
    agents: &[Agent],
    horizon: &Horizon,
) -> Result<Vec<SeedShift>, SchedulerError> {
    let known_agents: HashSet<&str> = agents.iter().map(|a| a.name.as_str()).collect();
    let previous_dates: HashSet<NaiveDate> = horizon.previous.iter().map(|d| d.date).collect();

    let mut seeds = Vec::new();
    for raw in raws {
        if !known_agents.contains(raw.agent.as_str()) {
            return Err(SchedulerError::InvalidSeed {
                reason: format!("unknown agent '{}'", raw.agent),
            });
        }
        let shift = Shift::from_name(&raw.shift).ok_or_else(|| SchedulerError::InvalidSeed {
            reason: format!("unknown shift '{}'", raw.shift),
        })?;
        if !previous_dates.contains(&raw.date) {
            continue;
        }
        seeds.push(SeedShift {
            agent: raw.agent.clone(),
            day: DayLabel::new(raw.date),
            shift,
        });
    }
    Ok(seeds)
}
