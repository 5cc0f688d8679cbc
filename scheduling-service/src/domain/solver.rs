//! Solver Driver: hands the assembled model to the MILP backend with a
//! wall-clock bound and normalises every non-feasible outcome into
//! `NoSolution`. Accepts anything the backend reports as solved; the
//! specifics of optimal-vs-feasible are the backend's concern, not ours.

use good_lp::{Constraint, SolverModel};

use super::error::SchedulerError;

/// The solver driver's wall-clock bound.
pub const TIME_LIMIT_SECONDS: f64 = 120.0;

/// Apply every constraint to `model` and solve it. Generic over the
/// backend-specific model type so call sites never have to name it --
/// `good_lp::default_solver` picks the concrete type, and it flows through
/// via inference.
pub fn solve<P: SolverModel>(model: P, constraints: Vec<Constraint>) -> Result<P::Solution, SchedulerError> {
    let model = constraints.into_iter().fold(model, |m, c| m.with(c));
    model.solve().map_err(|_| SchedulerError::NoSolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use good_lp::{constraint, default_solver, variables, Solution};

    #[test]
    fn solves_a_trivial_feasible_model() {
        let mut vars = variables!();
        let x = vars.add(good_lp::variable().binary());
        let model = vars.maximise(x).using(default_solver);
        let solution = solve(model, vec![constraint!(x <= 1)]).unwrap();
        assert_eq!(solution.value(x), 1.0);
    }

    #[test]
    fn reports_no_solution_when_infeasible() {
        let mut vars = variables!();
        let x = vars.add(good_lp::variable().binary());
        let model = vars.maximise(x).using(default_solver);
        let err = solve(model, vec![constraint!(x >= 2)]).unwrap_err();
        assert!(matches!(err, SchedulerError::NoSolution));
    }
}
