//! Variable Space: the 3-D Boolean decision matrix `x[a,d,s]` over agents x
//! days (current u previous) x shifts. This module only allocates variables
//! into a caller-owned `ProblemVariables`; it asserts nothing. The lookup
//! (`VariableSpace`) is kept separate from the `ProblemVariables` builder so
//! the builder can later be consumed by the solver while the lookup is still
//! needed by the projector.

use std::collections::HashMap;

use chrono::NaiveDate;
use good_lp::{variable, ProblemVariables, Variable};

use super::model::{Agent, DayLabel, Horizon, Shift};

pub struct VariableSpace {
    /// x[a,d,s] keyed by (agent index, day index into `days`, shift).
    x: HashMap<(usize, usize, Shift), Variable>,
    pub agent_index: HashMap<String, usize>,
    pub day_index: HashMap<NaiveDate, usize>,
    /// Chronological, previous week first then current range.
    pub days: Vec<DayLabel>,
}

impl VariableSpace {
    pub fn build(vars: &mut ProblemVariables, agents: &[Agent], horizon: &Horizon) -> Self {
        let days = horizon.all_days();
        let day_index: HashMap<NaiveDate, usize> = days
            .iter()
            .enumerate()
            .map(|(i, d)| (d.date, i))
            .collect();
        let agent_index: HashMap<String, usize> = agents
            .iter()
            .enumerate()
            .map(|(i, a)| (a.name.clone(), i))
            .collect();

        let mut x = HashMap::with_capacity(agents.len() * days.len() * Shift::ALL.len());
        for a in 0..agents.len() {
            for d in 0..days.len() {
                for s in Shift::ALL {
                    let name = format!("x_{}_{}_{:?}", agents[a].name, days[d].date, s);
                    let v = vars.add(variable().binary().name(name));
                    x.insert((a, d, s), v);
                }
            }
        }

        Self {
            x,
            agent_index,
            day_index,
            days,
        }
    }

    pub fn var(&self, agent: usize, day: usize, shift: Shift) -> Variable {
        *self
            .x
            .get(&(agent, day, shift))
            .expect("variable space accessed with out-of-range index")
    }

    pub fn day_idx(&self, day: &DayLabel) -> Option<usize> {
        self.day_index.get(&day.date).copied()
    }

    pub fn agent_idx(&self, name: &str) -> Option<usize> {
        self.agent_index.get(name).copied()
    }

    pub fn num_agents(&self) -> usize {
        self.agent_index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar;
    use crate::domain::model::{Horizon, Preferences};
    use std::collections::{BTreeSet, HashSet};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn agent(name: &str) -> Agent {
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

    #[test]
    fn allocates_one_variable_per_agent_day_shift() {
        let horizon = Horizon {
            current: calendar::expand(date(2026, 2, 9), date(2026, 2, 15)).unwrap(),
            previous: calendar::previous_week(date(2026, 2, 9)).unwrap(),
            holidays: HashSet::new(),
        };
        let agents = vec![agent("A"), agent("B")];
        let mut vars = ProblemVariables::new();
        let space = VariableSpace::build(&mut vars, &agents, &horizon);

        assert_eq!(space.days.len(), 14);
        for a in 0..2 {
            for d in 0..14 {
                for s in Shift::ALL {
                    let _ = space.var(a, d, s);
                }
            }
        }
    }
}
