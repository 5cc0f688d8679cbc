pub mod group_request;
pub mod membership_request;
pub mod staff_request;

pub use group_request::{CreateGroupRequest, UpdateGroupRequest};
pub use membership_request::AddMemberRequest;
pub use staff_request::{CreateStaffRequest, UpdateStaffRequest};
