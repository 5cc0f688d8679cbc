//! Result Projector: reads solved Boolean values back out of the variable
//! space and materialises the per-agent, current-horizon-only `Roster`.

use good_lp::Solution;

use super::model::{Agent, DayLabel, Horizon, Roster, Shift};
use super::variables::VariableSpace;

/// Values within this of 1.0 are treated as "assigned" -- MILP solvers
/// return exact 0/1 for binary variables modulo floating-point noise.
const ASSIGNED_THRESHOLD: f64 = 0.5;

pub fn project<S: Solution>(
    space: &VariableSpace,
    solution: &S,
    agents: &[Agent],
    horizon: &Horizon,
) -> Roster {
    let mut roster = Roster::default();
    for (a, agent) in agents.iter().enumerate() {
        let mut shifts: Vec<(DayLabel, Shift)> = Vec::new();
        for day in &horizon.current {
            let d = space.day_idx(day).expect("current day missing from variable space");
            for &s in &Shift::ALL {
                let value = solution.value(space.var(a, d, s));
                if value >= ASSIGNED_THRESHOLD {
                    shifts.push((*day, s));
                }
            }
        }
        roster.assignments.insert(agent.name.clone(), shifts);
    }
    roster
}
