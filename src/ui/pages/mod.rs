//! Routable pages hosted by the application shell

pub mod describe_project;
pub mod landing;
pub mod user;

pub use describe_project::{DescribeProjectMsg, DescribeProjectState};
pub use landing::{LandingMsg, LandingState};
pub use user::list::{UserListMsg, UserListState};
