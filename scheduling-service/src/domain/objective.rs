//! Objective Builder: the weighted linear objective maximised by the solver
//! -- preference bonus, flat bonus for unpreferenced shifts, a hard-banned
//! but still-penalised avoid term, minus the weekend-balance deviation.

use std::collections::HashMap;

use good_lp::{Expression, Variable};

use super::model::{Agent, Horizon, Shift};
use super::variables::VariableSpace;

const W_PREF: f64 = 100.0;
const W_OTHER: f64 = 1.0;
const W_AVOID: f64 = 250.0;

pub fn build(
    space: &VariableSpace,
    agents: &[Agent],
    horizon: &Horizon,
    dev: &HashMap<String, Variable>,
) -> Expression {
    let mut expr = Expression::from(0.0);

    for (a, agent) in agents.iter().enumerate() {
        for day in &horizon.current {
            let d = space.day_idx(day).expect("current day missing from variable space");
            for &s in &Shift::ALL {
                let v = space.var(a, d, s);
                let weight = if agent.preferences.preferred.contains(&s) {
                    W_PREF
                } else if agent.preferences.avoid.contains(&s) {
                    -W_AVOID
                } else {
                    W_OTHER
                };
                expr = expr + v * weight;
            }
        }

        if let Some(&dev_a) = dev.get(&agent.name) {
            expr = expr - dev_a;
        }
    }

    expr
}
