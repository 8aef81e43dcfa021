//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 인증 | 설명 | 상태 코드 |
//! |--------|------|------|------|-----------|
//! | `POST` | `/createUser` | X | 회원가입 | 201 Created |
//! | `GET` | `/getUserProfile` | O | 내 프로필 조회 | 200 OK |
//! | `PUT` | `/user/update` | O | 프로필 수정 (미구현) | 501 Not Implemented |
//! | `PUT` | `/change-password` | O | 비밀번호 변경 | 200 OK |
//!
//! 경로와 인증 미들웨어 연결은 [`crate::routes`]에서 담당합니다.
//! 인증이 필요한 엔드포인트의 사용자 ID는 요청 본문이나 경로가 아니라
//! 인증 미들웨어가 저장한 [`AuthenticatedUser`]에서만 가져옵니다.

use std::sync::Arc;

use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::errors::{ApiError, ApiResult};
use crate::domain::dto::users::request::{
    validate_registration, ChangePasswordRequest, RegisterUserRequest,
};
use crate::domain::dto::users::response::{DataResponse, MessageResponse, RegisterUserResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::password_policy::PasswordPolicy;
use crate::services::users::{UserService, UserServiceError};
use crate::utils::string_utils::redact_email;

/// 핸들러가 공유하는 불변 상태
///
/// 서버 시작 시 한 번 구성되어 `web::Data`로 모든 워커에 공유됩니다.
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub password_policy: PasswordPolicy,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserService>, password_policy: PasswordPolicy) -> Self {
        Self {
            user_service,
            password_policy,
        }
    }
}

/// 회원가입
///
/// 검증 게이트를 통과한 요청만 서비스에 전달합니다.
/// 분류되지 않은 실패는 원인을 첨부한 500 에러가 됩니다.
pub async fn register_user(
    state: web::Data<AppState>,
    payload: web::Json<RegisterUserRequest>,
) -> ApiResult<HttpResponse> {
    let registration = validate_registration(payload.into_inner(), &state.password_policy)
        .map_err(ApiError::Validation)?;

    log::info!("Registration attempt for email: {}", redact_email(&registration.email));

    let user = state
        .user_service
        .register_user(registration)
        .await
        .map_err(|err| match err {
            UserServiceError::Api(api_error) => api_error,
            UserServiceError::AlreadyRegistered => {
                ApiError::Conflict("Email is already registered".to_string())
            }
            other => ApiError::internal_with_cause("Failed to register user", other),
        })?;

    log::info!("User registered successfully: {}", user.id);

    Ok(HttpResponse::Created().json(RegisterUserResponse::new(user)))
}

pub async fn get_user_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<HttpResponse> {
    let profile = state
        .user_service
        .get_user_profile(&user.user_id)
        .await
        .map_err(|err| match err {
            UserServiceError::Api(api_error) => api_error,
            other => {
                log::debug!("프로필 조회 실패 (user {}): {}", user.user_id, other);
                ApiError::internal("Failed to retrieve user profile")
            }
        })?;

    Ok(HttpResponse::Ok().json(DataResponse::new(profile)))
}

/// 프로필 수정 자리 표시자. 본문은 읽지 않습니다.
pub async fn update_user_profile(_user: AuthenticatedUser) -> ApiResult<HttpResponse> {
    Err(ApiError::NotImplemented("Not implemented yet".to_string()))
}

pub async fn change_password(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<ChangePasswordRequest>,
) -> ApiResult<HttpResponse> {
    let Some((current_password, new_password)) = payload.credentials() else {
        return Err(ApiError::BadRequest(
            "Current password and new password are required".to_string(),
        ));
    };

    state
        .user_service
        .change_password(&user.user_id, current_password, new_password)
        .await
        .map_err(|err| match err {
            UserServiceError::Api(api_error) => api_error,
            other => {
                log::debug!("비밀번호 변경 실패 (user {}): {}", user.user_id, other);
                ApiError::internal("Failed to change password")
            }
        })?;

    Ok(HttpResponse::Ok().json(MessageResponse::success("Password changed successfully")))
}

/// 파싱할 수 없는 JSON 본문을 에러 엔벨로프로 변환합니다.
///
/// `web::JsonConfig::error_handler`에 등록합니다.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패 ({} {}): {}", req.method(), req.path(), err);
    ApiError::BadRequest("Invalid request body".to_string()).into()
}
