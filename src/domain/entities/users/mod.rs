//! 사용자 도메인 엔티티

pub mod user;

pub use user::{ProfileDetails, User, UserStatus};
