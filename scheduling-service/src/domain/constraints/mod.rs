pub mod hard;
pub mod soft;

pub use hard::hard_constraints;
pub use soft::{soft_constraints, SoftModel};
