pub mod group;
pub mod membership;
pub mod staff;

pub use group::{GroupSerializer, ResolvedGroupSerializer};
pub use membership::MembershipSerializer;
pub use staff::StaffSerializer;
