pub mod schedule_serializer;

pub use schedule_serializer::{AssignedShiftSerialize, RosterSerialize};
