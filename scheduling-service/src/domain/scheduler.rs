//! Top-level orchestration: Variable Space -> Constraint Engine -> Objective
//! Builder -> Solver Driver -> Result Projector. This is the one function
//! the rest of the service calls; everything above it is implementation
//! detail.

use good_lp::{default_solver, ProblemVariables, SolverModel};

use super::constraints::{hard_constraints, soft_constraints};
use super::error::SchedulerError;
use super::model::{Agent, Durations, Horizon, Roster, SeedShift};
use super::objective;
use super::projector;
use super::solver;
use super::variables::VariableSpace;

/// `agents` and `durations` are already the normalized, horizon-scoped
/// typed values the Input Normalizer produces; callers own that conversion.
pub fn generate_roster(
    agents: &[Agent],
    horizon: &Horizon,
    durations: &Durations,
    seeds: &[SeedShift],
) -> Result<Roster, SchedulerError> {
    let mut vars = ProblemVariables::new();
    let space = VariableSpace::build(&mut vars, agents, horizon);

    let mut constraints = hard_constraints(&space, agents, horizon, durations, seeds);
    let soft = soft_constraints(&mut vars, &space, agents, horizon, durations);
    constraints.extend(soft.constraints);

    let objective = objective::build(&space, agents, horizon, &soft.dev);

    let model = vars
        .maximise(objective)
        .using(default_solver)
        .set_time_limit(solver::TIME_LIMIT_SECONDS);

    let solution = solver::solve(model, constraints)?;
    Ok(projector::project(&space, &solution, agents, horizon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar;
    use crate::domain::model::{Preferences, Shift};
    use chrono::NaiveDate;
    use std::collections::{BTreeSet, HashMap, HashSet};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plain_agent(name: &str) -> Agent {
        Agent {
            name: name.to_string(),
            preferences: Preferences::default(),
            unavailable: HashSet::new(),
            training: HashSet::new(),
            leave: None,
            exclusions: HashSet::new(),
            restrictions: BTreeSet::new(),
        }
    }

    fn flat_durations() -> Durations {
        Durations {
            day: 80,
            night: 100,
            control_desk: 70,
            conge: 80,
        }
    }

    /// E1: minimal feasible week -- coverage, rest, and cap invariants hold.
    #[test]
    fn minimal_feasible_week_satisfies_universal_invariants() {
        let horizon = Horizon {
            current: calendar::expand(date(2026, 2, 9), date(2026, 2, 15)).unwrap(),
            previous: calendar::previous_week(date(2026, 2, 9)).unwrap(),
            holidays: HashSet::new(),
        };
        let agents = vec![plain_agent("A"), plain_agent("B"), plain_agent("C")];
        let durations = flat_durations();

        let roster = generate_roster(&agents, &horizon, &durations, &[]).expect("feasible roster");

        for agent in &agents {
            let shifts = roster.shifts_for(&agent.name);
            // P2: at least one shift over the horizon.
            assert!(!shifts.is_empty(), "{} has no shifts", agent.name);

            let mut by_day: HashMap<NaiveDate, usize> = HashMap::new();
            for (day, _) in shifts {
                *by_day.entry(day.date).or_insert(0) += 1;
            }
            // P1: at most one shift per day.
            assert!(by_day.values().all(|&count| count <= 1));
        }

        // P3/P4: exactly one Day and one Night agent every day; no ControlDesk
        // on the weekend.
        for day in &horizon.current {
            let mut day_count = 0;
            let mut night_count = 0;
            for agent in &agents {
                for (d, s) in roster.shifts_for(&agent.name) {
                    if d.date != day.date {
                        continue;
                    }
                    match s {
                        Shift::Day => day_count += 1,
                        Shift::Night => night_count += 1,
                        Shift::ControlDesk => {
                            assert!(!day.is_weekend(), "ControlDesk scheduled on a weekend");
                        }
                    }
                }
            }
            assert_eq!(day_count, 1, "expected exactly one Day agent on {}", day.date);
            assert_eq!(night_count, 1, "expected exactly one Night agent on {}", day.date);
        }
    }

    /// E5: two agents, mutually exclusive restrictions, no feasible roster.
    #[test]
    fn over_constrained_restrictions_yield_no_solution() {
        let horizon = Horizon {
            current: calendar::expand(date(2026, 2, 9), date(2026, 2, 15)).unwrap(),
            previous: calendar::previous_week(date(2026, 2, 9)).unwrap(),
            holidays: HashSet::new(),
        };
        let mut a = plain_agent("A");
        a.restrictions.insert(Shift::Night);
        let mut b = plain_agent("B");
        b.restrictions.insert(Shift::Day);
        let agents = vec![a, b];
        let durations = flat_durations();

        let result = generate_roster(&agents, &horizon, &durations, &[]);
        assert!(matches!(result, Err(SchedulerError::NoSolution)));
    }
}
