pub mod group_repository;
pub mod membership_repository;
pub mod staff_repository;

pub use group_repository::GroupRepository;
pub use membership_repository::MembershipRepository;
pub use staff_repository::StaffRepository;
