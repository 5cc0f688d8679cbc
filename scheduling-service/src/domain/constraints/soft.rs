//! Soft constraints S1-S5. Unlike `super::hard`, these also allocate
//! auxiliary variables (balance bounds, weekend indicators, deviation
//! terms) into the caller's `ProblemVariables` -- `VariableSpace` itself
//! stays read-only here. The returned `SoftModel` carries both the
//! constraint list and the `dev_a` handles the Objective Builder needs.

use std::collections::HashMap;

use good_lp::{variable, Constraint, Expression, ProblemVariables, Variable};

use crate::domain::calendar;
use crate::domain::model::{Agent, DayLabel, Durations, Horizon, Shift};
use crate::domain::variables::VariableSpace;

/// Everything `super::objective` needs out of the soft-constraint pass.
pub struct SoftModel {
    pub constraints: Vec<Constraint>,
    /// Per-agent weekend-imbalance deviation (S5), subtracted in the objective.
    pub dev: HashMap<String, Variable>,
}

fn sum_shifts(space: &VariableSpace, agent: usize, day: usize) -> [Variable; 3] {
    [
        space.var(agent, day, Shift::Day),
        space.var(agent, day, Shift::Night),
        space.var(agent, day, Shift::ControlDesk),
    ]
}

/// H_a over an arbitrary day slice: worked-shift hours plus weekday leave
/// credit, feeding both the workload-balance and weekend-balance softs.
fn workload_expr(
    space: &VariableSpace,
    agent_idx: usize,
    agent: &Agent,
    days: &[DayLabel],
    durations: &Durations,
) -> Expression {
    let mut expr = Expression::from(0.0);
    for day in days {
        let d = space.day_idx(day).expect("day missing from variable space");
        for &s in &Shift::ALL {
            expr = expr + space.var(agent_idx, d, s) * (durations.of(s) as f64);
        }
        if agent.is_on_leave(day) && !day.is_weekend() {
            expr = expr + durations.conge as f64;
        }
    }
    expr
}

/// S1/S2: push `max_a H_a - min_a H_a <= delta` over some partition of days,
/// allocating a fresh `(h_max, h_min)` pair per partition group.
fn workload_balance(
    vars: &mut ProblemVariables,
    space: &VariableSpace,
    agents: &[Agent],
    groups: &[Vec<DayLabel>],
    durations: &Durations,
    delta_tenths: f64,
    label: &str,
) -> Vec<Constraint> {
    let mut out = Vec::new();
    for (g, group) in groups.iter().enumerate() {
        if group.is_empty() {
            continue;
        }
        let h_max = vars.add(variable().min(0.0).name(format!("h_max_{label}_{g}")));
        let h_min = vars.add(variable().min(0.0).name(format!("h_min_{label}_{g}")));
        for (a, agent) in agents.iter().enumerate() {
            let h_a = workload_expr(space, a, agent, group, durations);
            out.push(h_a.clone().leq(h_max));
            out.push(Expression::from(h_min).leq(h_a));
        }
        out.push((Expression::from(h_max) - h_min).leq(delta_tenths));
    }
    out
}

/// S3: at most 3 Night shifts per ISO week per agent.
fn night_cap_per_week(space: &VariableSpace, agents: &[Agent], weeks: &[Vec<DayLabel>]) -> Vec<Constraint> {
    let mut out = Vec::new();
    for week in weeks {
        for (a, _) in agents.iter().enumerate() {
            let mut expr = Expression::from(0.0);
            for day in week {
                let d = space.day_idx(day).expect("week day missing from variable space");
                expr = expr + space.var(a, d, Shift::Night);
            }
            out.push(expr.leq(3.0));
        }
    }
    out
}

/// S4: Day + ControlDesk hours capped at 36h (360 tenths) per ISO week.
fn day_and_cdp_hour_cap_per_week(
    space: &VariableSpace,
    agents: &[Agent],
    weeks: &[Vec<DayLabel>],
    durations: &Durations,
) -> Vec<Constraint> {
    let mut out = Vec::new();
    for week in weeks {
        for (a, _) in agents.iter().enumerate() {
            let mut expr = Expression::from(0.0);
            for day in week {
                let d = space.day_idx(day).expect("week day missing from variable space");
                expr = expr + space.var(a, d, Shift::Day) * (durations.day as f64);
                expr = expr + space.var(a, d, Shift::ControlDesk) * (durations.control_desk as f64);
            }
            out.push(expr.leq(360.0));
        }
    }
    out
}

/// S5: weekend balance. Builds `works_sat`/`works_sun`/`full_weekend`
/// booleans per agent per (Sat,Sun) pair, sums `full_weekend` into `W_a`,
/// and bounds the L1 deviation of `W_a` from the fleet target with `dev_a`.
fn weekend_balance(
    vars: &mut ProblemVariables,
    space: &VariableSpace,
    agents: &[Agent],
    horizon: &Horizon,
) -> (Vec<Constraint>, HashMap<String, Variable>) {
    let mut out = Vec::new();
    let mut weekends: Vec<(DayLabel, DayLabel)> = Vec::new();
    let days = &horizon.current;
    for i in 0..days.len().saturating_sub(1) {
        if days[i].is_saturday() && days[i + 1].is_sunday() {
            weekends.push((days[i], days[i + 1]));
        }
    }

    let num_agents = agents.len().max(1) as i64;
    let target = (2 * weekends.len() as i64) / num_agents;

    let mut full_weekend_by_agent: Vec<Vec<Variable>> = vec![Vec::new(); agents.len()];

    for (w, (sat, sun)) in weekends.iter().enumerate() {
        let sat_idx = space.day_idx(sat).expect("weekend saturday missing from variable space");
        let sun_idx = space.day_idx(sun).expect("weekend sunday missing from variable space");
        for (a, _) in agents.iter().enumerate() {
            let [sat_day, sat_night, _] = sum_shifts(space, a, sat_idx);
            let [sun_day, sun_night, _] = sum_shifts(space, a, sun_idx);

            let works_sat = vars.add(variable().binary().name(format!("works_sat_{a}_{w}")));
            let works_sun = vars.add(variable().binary().name(format!("works_sun_{a}_{w}")));
            let full_weekend = vars.add(variable().binary().name(format!("full_weekend_{a}_{w}")));

            out.push(Expression::from(works_sat).geq(sat_day));
            out.push(Expression::from(works_sat).geq(sat_night));
            out.push(Expression::from(works_sat).leq(sat_day + sat_night));

            out.push(Expression::from(works_sun).geq(sun_day));
            out.push(Expression::from(works_sun).geq(sun_night));
            out.push(Expression::from(works_sun).leq(sun_day + sun_night));

            out.push(Expression::from(full_weekend).leq(works_sat));
            out.push(Expression::from(full_weekend).leq(works_sun));
            out.push(Expression::from(full_weekend).geq(works_sat + works_sun - 1.0));

            full_weekend_by_agent[a].push(full_weekend);
        }
    }

    let mut dev = HashMap::with_capacity(agents.len());
    for (a, agent) in agents.iter().enumerate() {
        let w_a = full_weekend_by_agent[a]
            .iter()
            .fold(Expression::from(0.0), |acc, &v| acc + v);
        let dev_a = vars.add(variable().min(0.0).name(format!("dev_{a}")));
        out.push((w_a.clone() - dev_a).leq(target as f64));
        out.push((Expression::from(target as f64) - w_a - dev_a).leq(0.0));
        dev.insert(agent.name.clone(), dev_a);
    }

    (out, dev)
}


pub fn soft_constraints(
    vars: &mut ProblemVariables,
    space: &VariableSpace,
    agents: &[Agent],
    horizon: &Horizon,
    durations: &Durations,
) -> SoftModel {
    let weeks = calendar::group_by_iso_week(&horizon.current);
    let months = calendar::split_by_month(&horizon.current);

    let mut constraints = Vec::new();
    constraints.extend(workload_balance(
        vars,
        space,
        agents,
        std::slice::from_ref(&horizon.current),
        durations,
        240.0,
        "global",
    ));
    constraints.extend(workload_balance(vars, space, agents, &months, durations, 240.0, "month"));
    constraints.extend(night_cap_per_week(space, agents, &weeks));
    constraints.extend(day_and_cdp_hour_cap_per_week(space, agents, &weeks, durations));

    let (weekend_constraints, dev) = weekend_balance(vars, space, agents, horizon);
    constraints.extend(weekend_constraints);

    SoftModel { constraints, dev }
}
