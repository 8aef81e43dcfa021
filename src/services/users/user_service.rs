//! # MongoDB 기반 사용자 서비스
//!
//! [`UserService`] 계약의 기본 구현입니다.
//!
//! ## 보안
//!
//! - **bcrypt 해싱**: 환경별 cost ([`PasswordConfig::bcrypt_cost`]).
//!   72바이트를 넘는 입력은 잘라내지 않고 거부합니다.
//! - **중복 방지**: 이메일 사전 조회 후, 경쟁 상태는 유니크 인덱스가 잡아냄
//! - **민감 정보 제거**: 엔티티는 DTO로 변환한 뒤에만 밖으로 나감

use async_trait::async_trait;
use bcrypt::{non_truncating_hash, non_truncating_verify, BcryptError};

use crate::config::PasswordConfig;
use crate::core::errors::ApiError;
use crate::domain::dto::users::request::ValidatedRegistration;
use crate::domain::dto::users::response::{UserProfile, UserSummary};
use crate::domain::entities::users::User;
use crate::domain::models::password_policy::PasswordPolicy;
use crate::domain::models::validation::FieldViolation;
use crate::repositories::users::{RepositoryError, UserRepository};
use crate::utils::string_utils::redact_email;

use super::{UserService, UserServiceError};

impl From<RepositoryError> for UserServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::DuplicateKey(_) => UserServiceError::AlreadyRegistered,
            RepositoryError::Database(e) => UserServiceError::Database(e.to_string()),
        }
    }
}

pub struct MongoUserService {
    user_repo: UserRepository,
    password_policy: PasswordPolicy,
}

impl MongoUserService {
    pub fn new(user_repo: UserRepository, password_policy: PasswordPolicy) -> Self {
        Self {
            user_repo,
            password_policy,
        }
    }

    fn hash_password(password: &str, field: &str) -> Result<String, UserServiceError> {
        let hash_start = std::time::Instant::now();
        let password_hash = hash_with_cost(password, PasswordConfig::bcrypt_cost(), field)?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        Ok(password_hash)
    }

    async fn find_existing(&self, user_id: &str) -> Result<User, UserServiceError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()).into())
    }
}

#[async_trait]
impl UserService for MongoUserService {
    async fn register_user(
        &self,
        registration: ValidatedRegistration,
    ) -> Result<UserSummary, UserServiceError> {
        let email = normalize_email(&registration.email);

        if self.user_repo.find_by_email(&email).await?.is_some() {
            log::info!("Duplicate registration for email: {}", redact_email(&email));
            return Err(UserServiceError::AlreadyRegistered);
        }

        let password_hash = Self::hash_password(&registration.password, "password")?;

        let user = User::new_local(
            email,
            registration.username,
            registration.name,
            password_hash,
            registration.profile,
        );

        let created = self.user_repo.insert(user).await?;

        Ok(UserSummary::from(&created))
    }

    async fn get_user_profile(&self, user_id: &str) -> Result<UserProfile, UserServiceError> {
        let user = self.find_existing(user_id).await?;
        Ok(UserProfile::from(user))
    }

    async fn change_password(
        &self,
        user_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), UserServiceError> {
        let user = self.find_existing(user_id).await?;

        if !password_matches(current_password, &user.password_hash)? {
            log::info!("Password change rejected for user {}: current password mismatch", user_id);
            return Err(ApiError::BadRequest("Current password is incorrect".to_string()).into());
        }

        let violations = new_password_violations(&self.password_policy, new_password);
        if !violations.is_empty() {
            return Err(ApiError::Validation(violations).into());
        }

        let Some(id) = user.id.as_ref() else {
            return Err(ApiError::NotFound("User not found".to_string()).into());
        };

        let password_hash = Self::hash_password(new_password, "newPassword")?;
        if !self.user_repo.update_password_hash(id, &password_hash).await? {
            return Err(ApiError::NotFound("User not found".to_string()).into());
        }

        log::info!("Password changed for user: {}", user_id);

        Ok(())
    }
}

/// 잘림 없는 bcrypt 해시. 72바이트 초과 입력은 `field`의 검증 위반이 됩니다.
fn hash_with_cost(password: &str, cost: u32, field: &str) -> Result<String, UserServiceError> {
    non_truncating_hash(password, cost).map_err(|e| match e {
        BcryptError::Truncation(_) => ApiError::Validation(vec![FieldViolation::new(
            field,
            "Password must be at most 72 bytes long",
        )])
        .into(),
        other => UserServiceError::Hashing(other.to_string()),
    })
}

/// 72바이트를 넘는 입력은 저장된 해시와 일치할 수 없으므로 불일치로 처리합니다.
fn password_matches(password: &str, password_hash: &str) -> Result<bool, UserServiceError> {
    match non_truncating_verify(password, password_hash) {
        Ok(matches) => Ok(matches),
        Err(BcryptError::Truncation(_)) => Ok(false),
        Err(e) => Err(UserServiceError::Hashing(e.to_string())),
    }
}

/// 이메일은 소문자로 저장합니다.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn new_password_violations(policy: &PasswordPolicy, new_password: &str) -> Vec<FieldViolation> {
    policy
        .check(new_password)
        .into_iter()
        .map(|message| FieldViolation::new("newPassword", message))
        .collect()
}
