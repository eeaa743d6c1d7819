pub mod helpers;
pub mod list;
