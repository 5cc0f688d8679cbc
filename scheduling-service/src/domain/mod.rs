//! The constraint-programming scheduler core. Calendar -> Input Normalizer
//! -> Variable Space -> Constraint Engine -> Objective Builder -> Solver
//! Driver -> Result Projector, orchestrated by `scheduler::generate_roster`.

pub mod calendar;
pub mod constraints;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod objective;
pub mod projector;
pub mod scheduler;
pub mod solver;
pub mod variables;

pub use error::{SchedulerError, SchedulerResult};
pub use model::{Agent, DayLabel, Durations, Horizon, Preferences, Roster, SeedShift, Shift};
pub use scheduler::generate_roster;
