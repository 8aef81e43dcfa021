//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 전역 싱글톤이 아니라 `AppState`와 미들웨어 생성자를 통해 주입됩니다.
//! 테스트에서는 같은 trait을 구현한 대역(stub)으로 교체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{auth::TokenService, users::{MongoUserService, UserService}};
//!
//! let user_service: Arc<dyn UserService> = Arc::new(MongoUserService::new(user_repo, policy));
//! let token_service = Arc::new(TokenService::from_config());
//! ```

pub mod users;
pub mod auth;
