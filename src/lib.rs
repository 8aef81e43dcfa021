//! 사용자 관리 API
//!
//! 회원가입, 프로필 조회, 비밀번호 변경을 제공하는 HTTP 서비스입니다.
//! 모든 응답은 `status` 필드를 가진 하나의 JSON 엔벨로프로 통일되며,
//! 실패는 [`core::ApiError`] 하나로 수렴해 같은 경로로 렌더링됩니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 검증 게이트, 에러 정규화
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (UserService trait)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_management_api::handlers::users::AppState;
//! use user_management_api::services::users::MongoUserService;
//!
//! let service = Arc::new(MongoUserService::new(user_repo, policy.clone()));
//! let state = web::Data::new(AppState::new(service, policy));
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
