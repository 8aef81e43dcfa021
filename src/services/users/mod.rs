//! 사용자 관리 서비스 모듈
//!
//! 핸들러가 의존하는 [`UserService`] 계약과, 도메인 실패를 표현하는
//! [`UserServiceError`]를 정의합니다. 기본 구현은 MongoDB 기반의
//! [`MongoUserService`]입니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일 중복 방지 (유니크 인덱스 + 사전 조회)
//! - 응답 DTO에 비밀번호 해시 미포함

use async_trait::async_trait;
use thiserror::Error;

use crate::core::errors::ApiError;
use crate::domain::dto::users::request::ValidatedRegistration;
use crate::domain::dto::users::response::{UserProfile, UserSummary};

pub mod user_service;

pub use user_service::MongoUserService;

/// 사용자 서비스가 반환하는 실패
///
/// 핸들러는 메시지 문자열이 아니라 이 판별자(discriminant)로 분기합니다.
#[derive(Error, Debug)]
pub enum UserServiceError {
    /// 이미 등록된 이메일
    #[error("User already registered")]
    AlreadyRegistered,

    /// 서비스가 직접 분류한 실패. 핸들러는 그대로 전달합니다.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Password hashing error: {0}")]
    Hashing(String),
}

/// 사용자 도메인 작업 계약
#[async_trait]
pub trait UserService: Send + Sync {
    /// 검증된 정보로 사용자를 등록합니다.
    async fn register_user(
        &self,
        registration: ValidatedRegistration,
    ) -> Result<UserSummary, UserServiceError>;

    /// 사용자 프로필을 조회합니다.
    async fn get_user_profile(&self, user_id: &str) -> Result<UserProfile, UserServiceError>;

    /// 현재 비밀번호를 확인한 뒤 새 비밀번호로 변경합니다.
    async fn change_password(
        &self,
        user_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), UserServiceError>;
}
