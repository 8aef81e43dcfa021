//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`]를 통해 `users` 컬렉션을 관리합니다.

pub mod user_repo;

pub use user_repo::{is_duplicate_key_error, RepositoryError, UserRepository};
