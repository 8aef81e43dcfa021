//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 MongoDB 컬렉션 핸들을 보유하며, 서비스 생성 시 명시적으로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(&database.get_database());
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
