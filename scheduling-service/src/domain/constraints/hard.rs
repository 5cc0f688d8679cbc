//! Hard constraints H1-H13. Each function returns the `Constraint`s it
//! contributes; `hard_constraints` concatenates all of them. Every hard
//! constraint here must hold in any feasible solution (contrast with the
//! soft/balancing constraints in `super::soft`, which are either tight
//! bounds an implementer may relax, or auxiliary machinery feeding the
//! objective).

use good_lp::{Constraint, Expression};

use crate::domain::calendar;
use crate::domain::model::{Agent, Durations, Horizon, SeedShift, Shift};
use crate::domain::variables::VariableSpace;

fn sum_vars(vars: impl IntoIterator<Item = good_lp::Variable>) -> Expression {
    vars.into_iter()
        .fold(Expression::from(0.0), |acc, v| acc + v)
}

/// H1: at most one shift per day per agent.
fn h1_one_shift_per_day(space: &VariableSpace, agents: &[Agent], horizon: &Horizon) -> Vec<Constraint> {
    let mut out = Vec::new();
    for (a, _) in agents.iter().enumerate() {
        for day in &horizon.current {
            let d = space.day_idx(day).expect("current day missing from variable space");
            let sum = sum_vars(Shift::ALL.iter().map(|&s| space.var(a, d, s)));
            out.push(sum.leq(1.0));
        }
    }
    out
}

/// H2: every agent works at least one shift over the current horizon.
fn h2_at_least_one_shift(space: &VariableSpace, agents: &[Agent], horizon: &Horizon) -> Vec<Constraint> {
    let mut out = Vec::new();
    for (a, _) in agents.iter().enumerate() {
        let mut expr = Expression::from(0.0);
        for day in &horizon.current {
            let d = space.day_idx(day).expect("current day missing from variable space");
            for &s in &Shift::ALL {
                expr = expr + space.var(a, d, s);
            }
        }
        out.push(expr.geq(1.0));
    }
    out
}

/// H3: exactly one agent covers each (day, shift), except ControlDesk which
/// drops to zero coverage on weekends and holidays.
fn h3_coverage(space: &VariableSpace, agents: &[Agent], horizon: &Horizon) -> Vec<Constraint> {
    let mut out = Vec::new();
    for day in &horizon.current {
        let d = space.day_idx(day).expect("current day missing from variable space");
        for &s in &Shift::ALL {
            let sum = sum_vars((0..agents.len()).map(|a| space.var(a, d, s)));
            if s == Shift::ControlDesk && (day.is_weekend() || day.is_holiday(&horizon.holidays)) {
                out.push(sum.eq(0.0));
            } else {
                out.push(sum.eq(1.0));
            }
        }
    }
    out
}

/// H4: a Night shift forbids Day/ControlDesk the following day. Scoped so
/// the boundary pair (last previous-week day, first current day) is covered
/// too -- that is the entire reason the previous week is a variable-space
/// axis at all.
fn h4_post_night_rest(space: &VariableSpace, agents: &[Agent], horizon: &Horizon) -> Vec<Constraint> {
    let mut out = Vec::new();
    let current_dates: std::collections::HashSet<_> =
        horizon.current.iter().map(|d| d.date).collect();
    for i in 0..space.days.len().saturating_sub(1) {
        let next = space.days[i + 1];
        if !current_dates.contains(&next.date) {
            continue;
        }
        for (a, _) in agents.iter().enumerate() {
            let night = space.var(a, i, Shift::Night);
            let next_day = space.var(a, i + 1, Shift::Day);
            let next_cdp = space.var(a, i + 1, Shift::ControlDesk);
            // night + next_day <= 1  and  night + next_cdp <= 1
            out.push((night + next_day).leq(1.0));
            out.push((night + next_cdp).leq(1.0));
        }
    }
    out
}

/// H5: seed shifts are pinned to 1.
fn h5_seed_pinning(space: &VariableSpace, seeds: &[SeedShift]) -> Vec<Constraint> {
    seeds
        .iter()
        .filter_map(|seed| {
            let a = space.agent_idx(&seed.agent)?;
            let d = space.day_idx(&seed.day)?;
            Some(Expression::from(space.var(a, d, seed.shift)).eq(1.0))
        })
        .collect()
}

/// H6: ControlDesk capped at two per ISO week.
fn h6_control_desk_cap(space: &VariableSpace, agents: &[Agent], horizon: &Horizon) -> Vec<Constraint> {
    let mut out = Vec::new();
    for week in calendar::group_by_iso_week(&horizon.current) {
        for (a, _) in agents.iter().enumerate() {
            let sum = sum_vars(week.iter().map(|day| {
                let d = space.day_idx(day).expect("week day missing from variable space");
                space.var(a, d, Shift::ControlDesk)
            }));
            out.push(sum.leq(2.0));
        }
    }
    out
}

/// H7: unavailability (unavailable/training/exclusions/leave, plus the
/// derived pre-leave weekend) bans every shift on that day. Scoped across
/// both current and previous-week days, since an agent's unavailable set can
/// legitimately include seed-week days.
fn h7_unavailability(space: &VariableSpace, agents: &[Agent]) -> Vec<Constraint> {
    let mut out = Vec::new();
    for (a, agent) in agents.iter().enumerate() {
        for (d, day) in space.days.iter().enumerate() {
            if agent.is_unavailable(day) {
                for &s in &Shift::ALL {
                    out.push(Expression::from(space.var(a, d, s)).eq(0.0));
                }
            }
        }
    }
    out
}

/// H8: Day shift capped at three per ISO week.
fn h8_day_shift_cap(space: &VariableSpace, agents: &[Agent], horizon: &Horizon) -> Vec<Constraint> {
    let mut out = Vec::new();
    for week in calendar::group_by_iso_week(&horizon.current) {
        for (a, _) in agents.iter().enumerate() {
            let sum = sum_vars(week.iter().map(|day| {
                let d = space.day_idx(day).expect("week day missing from variable space");
                space.var(a, d, Shift::Day)
            }));
            out.push(sum.leq(3.0));
        }
    }
    out
}

/// H9: no Night the day before unavailability or training.
fn h9_no_night_before_unavailability(
    space: &VariableSpace,
    agents: &[Agent],
    horizon: &Horizon,
) -> Vec<Constraint> {
    let mut out = Vec::new();
    for i in 0..horizon.current.len().saturating_sub(1) {
        let d = horizon.current[i];
        let next = horizon.current[i + 1];
        let d_idx = space.day_idx(&d).expect("current day missing from variable space");
        for (a, agent) in agents.iter().enumerate() {
            if agent.unavailable.contains(&next) || agent.training.contains(&next) {
                out.push(Expression::from(space.var(a, d_idx, Shift::Night)).eq(0.0));
            }
        }
    }
    out
}

/// H10: training neighborhood. The day before training may only carry
/// ControlDesk; the day after may only carry ControlDesk or Night.
fn h10_training_neighborhood(space: &VariableSpace, agents: &[Agent]) -> Vec<Constraint> {
    let mut out = Vec::new();
    for (a, agent) in agents.iter().enumerate() {
        for training_day in &agent.training {
            if let Some(d) = space.day_idx(training_day) {
                if d > 0 {
                    for &s in &Shift::ALL {
                        if s != Shift::ControlDesk {
                            out.push(Expression::from(space.var(a, d - 1, s)).eq(0.0));
                        }
                    }
                }
                if d + 1 < space.days.len() {
                    for &s in &Shift::ALL {
                        if s != Shift::ControlDesk && s != Shift::Night {
                            out.push(Expression::from(space.var(a, d + 1, s)).eq(0.0));
                        }
                    }
                }
            }
        }
    }
    out
}

/// H11: no Monday night after a full Sat+Sun night.
fn h11_no_monday_night_after_weekend(
    space: &VariableSpace,
    agents: &[Agent],
    horizon: &Horizon,
) -> Vec<Constraint> {
    let mut out = Vec::new();
    let days = &horizon.current;
    for i in 0..days.len().saturating_sub(2) {
        let (sat, sun, mon) = (days[i], days[i + 1], days[i + 2]);
        if !(sat.is_saturday() && sun.is_sunday() && mon.is_monday()) {
            continue;
        }
        let sat_idx = space.day_idx(&sat).unwrap();
        let sun_idx = space.day_idx(&sun).unwrap();
        let mon_idx = space.day_idx(&mon).unwrap();
        for (a, _) in agents.iter().enumerate() {
            let sat_night = space.var(a, sat_idx, Shift::Night);
            let sun_night = space.var(a, sun_idx, Shift::Night);
            let mon_night = space.var(a, mon_idx, Shift::Night);
            // sat_night + sun_night + mon_night <= 2: if both weekend nights
            // are worked (summing to 2), Monday night is forced to 0.
            out.push((sat_night + sun_night + mon_night).leq(2.0));
        }
    }
    out
}

/// H12: restricted shifts are banned for the whole horizon.
fn h12_restricted_shifts(space: &VariableSpace, agents: &[Agent], horizon: &Horizon) -> Vec<Constraint> {
    let mut out = Vec::new();
    for (a, agent) in agents.iter().enumerate() {
        for &s in &agent.restrictions {
            for day in &horizon.current {
                let d = space.day_idx(day).expect("current day missing from variable space");
                out.push(Expression::from(space.var(a, d, s)).eq(0.0));
            }
        }
    }
    out
}

/// H13: `avoid` shifts are a hard ban (the `avoid` weight in the objective
/// is a defensive penalty that never actually fires in a feasible solution).
fn h13_hard_avoid(space: &VariableSpace, agents: &[Agent], horizon: &Horizon) -> Vec<Constraint> {
    let mut out = Vec::new();
    for (a, agent) in agents.iter().enumerate() {
        for &s in &agent.preferences.avoid {
            for day in &horizon.current {
                let d = space.day_idx(day).expect("current day missing from variable space");
                out.push(Expression::from(space.var(a, d, s)).eq(0.0));
            }
        }
    }
    out
}


pub fn hard_constraints(
    space: &VariableSpace,
    agents: &[Agent],
    horizon: &Horizon,
    _durations: &Durations,
    seeds: &[SeedShift],
) -> Vec<Constraint> {
    let mut out = Vec::new();
    out.extend(h1_one_shift_per_day(space, agents, horizon));
    out.extend(h2_at_least_one_shift(space, agents, horizon));
    out.extend(h3_coverage(space, agents, horizon));
    out.extend(h4_post_night_rest(space, agents, horizon));
    out.extend(h5_seed_pinning(space, seeds));
    out.extend(h6_control_desk_cap(space, agents, horizon));
    out.extend(h7_unavailability(space, agents));
    out.extend(h8_day_shift_cap(space, agents, horizon));
    out.extend(h9_no_night_before_unavailability(space, agents, horizon));
    out.extend(h10_training_neighborhood(space, agents));
    out.extend(h11_no_monday_night_after_weekend(space, agents, horizon));
    out.extend(h12_restricted_shifts(space, agents, horizon));
    out.extend(h13_hard_avoid(space, agents, horizon));
    out
}
