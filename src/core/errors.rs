//! # API Error Handling System
//!
//! 모든 엔드포인트가 공유하는 단일 에러 싱크입니다.
//! 핸들러는 실패를 감지한 지점에서 [`ApiError`]를 만들어 `Err`로 반환하고,
//! Actix-Web이 [`actix_web::ResponseError::error_response`]를 호출하여
//! 통일된 에러 엔벨로프로 렌더링합니다.
//!
//! ## 에러 분류
//!
//! | ApiError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `Validation` | 400 Bad Request | 필드 단위 입력 검증 실패 (위반 목록 전체 포함) |
//! | `BadRequest` | 400 Bad Request | 필수 값 누락, 파싱 불가능한 본문 |
//! | `Unauthorized` | 401 Unauthorized | 인증 정보 없음/무효 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `Conflict` | 409 Conflict | 이메일 중복 등 도메인 유일성 위반 |
//! | `NotImplemented` | 501 Not Implemented | 아직 구현되지 않은 기능 |
//! | `Internal` | 500 Internal Server Error | 분류되지 않은 모든 실패 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "status": "error",
//!   "message": "Validation Error",
//!   "details": {
//!     "errors": [
//!       { "field": "email", "message": "Email is required" }
//!     ]
//!   }
//! }
//! ```
//!
//! `Internal` 에러의 원인(cause)은 서버 로그에만 기록됩니다.
//! 개발 환경에서만 `details.cause`로 응답에 포함됩니다.

use std::error::Error as StdError;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::ErrorReportingConfig;
use crate::domain::dto::users::response::ErrorResponse;
use crate::domain::models::validation::FieldViolation;

/// 내부 에러 원인 타입
pub type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

/// 사용자에게 노출되는 모든 실패를 표현하는 에러 타입
///
/// 한 번 생성되면 변경되거나 재시도되지 않고 곧바로 에러 싱크로 전달됩니다.
#[derive(Error, Debug)]
pub enum ApiError {
    /// 입력 검증 실패 (400)
    ///
    /// 첫 번째 위반만이 아니라 발견된 모든 위반을 담습니다.
    #[error("Validation Error")]
    Validation(Vec<FieldViolation>),

    /// 잘못된 요청 (400)
    #[error("{0}")]
    BadRequest(String),

    /// 인증 실패 (401)
    #[error("{0}")]
    Unauthorized(String),

    /// 리소스 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 도메인 충돌 (409)
    #[error("{0}")]
    Conflict(String),

    /// 의도적으로 비워 둔 기능 (501)
    #[error("{0}")]
    NotImplemented(String),

    /// 분류되지 않은 실패 (500)
    ///
    /// `message`는 항상 일반적인 문구여야 합니다. `cause`는 디버깅용 컨텍스트입니다.
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        cause: Option<BoxedCause>,
    },
}

impl ApiError {
    /// 원인 없이 500 에러를 생성합니다.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            cause: None,
        }
    }

    /// 원본 에러를 디버그 컨텍스트로 첨부한 500 에러를 생성합니다.
    pub fn internal_with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ApiError::Internal {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 사용자에게 보여줄 메시지
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// 구조화된 상세 정보
    ///
    /// `expose_internal`이 `false`이면 내부 원인은 절대 포함되지 않습니다.
    pub fn details(&self, expose_internal: bool) -> Option<Value> {
        match self {
            ApiError::Validation(violations) => Some(json!({ "errors": violations })),
            ApiError::Internal {
                cause: Some(cause), ..
            } if expose_internal => Some(json!({ "cause": cause.to_string() })),
            _ => None,
        }
    }

    /// 에러 엔벨로프를 생성합니다.
    pub fn to_envelope(&self, expose_internal: bool) -> ErrorResponse {
        ErrorResponse::new(self.message(), self.details(expose_internal))
    }

    fn log(&self) {
        match self {
            ApiError::Internal {
                message,
                cause: Some(cause),
            } => log::error!("{}: {}", message, cause),
            ApiError::Internal { message, cause: None } => log::error!("{}", message),
            other => log::debug!("요청 실패 ({}): {}", other.status_code(), other),
        }
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        ApiError::status_code(self)
    }

    /// 모든 `ApiError`를 통일된 에러 엔벨로프로 렌더링하는 단일 종착점
    fn error_response(&self) -> HttpResponse {
        self.log();

        let expose_internal = ErrorReportingConfig::expose_internal_details();
        HttpResponse::build(ApiError::status_code(self)).json(self.to_envelope(expose_internal))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    #[derive(Debug, Error)]
    #[error("connection reset by peer")]
    struct SocketError;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Validation(vec![]).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::BadRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Unauthorized("x".into()).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Conflict("x".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::NotImplemented("x".into()).status_code(),
            StatusCode::NOT_IMPLEMENTED
        );
        assert_eq!(
            ApiError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_details_list_every_violation() {
        let error = ApiError::Validation(vec![
            FieldViolation::new("email", "Email is required"),
            FieldViolation::new("password", "Password is required"),
        ]);

        let envelope = serde_json::to_value(error.to_envelope(false)).unwrap();

        assert_eq!(envelope["status"], "error");
        assert_eq!(envelope["message"], "Validation Error");
        assert_eq!(envelope["details"]["errors"][0]["field"], "email");
        assert_eq!(envelope["details"]["errors"][1]["field"], "password");
    }

    #[test]
    fn test_internal_cause_hidden_unless_exposed() {
        let error = ApiError::internal_with_cause("Failed to register user", SocketError);

        let hidden = serde_json::to_value(error.to_envelope(false)).unwrap();
        assert_eq!(hidden["message"], "Failed to register user");
        assert!(hidden.get("details").is_none());
        assert!(!hidden.to_string().contains("connection reset"));

        let exposed = serde_json::to_value(error.to_envelope(true)).unwrap();
        assert_eq!(exposed["details"]["cause"], "connection reset by peer");
    }

    #[test]
    fn test_internal_source_is_preserved() {
        let error = ApiError::internal_with_cause("Failed to register user", SocketError);
        assert!(StdError::source(&error).is_some());

        let error = ApiError::internal("Failed to change password");
        assert!(StdError::source(&error).is_none());
    }

    #[actix_web::test]
    async fn test_error_response_renders_envelope() {
        let response = ApiError::Conflict("Email is already registered".into()).error_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = to_bytes(response.into_body()).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value,
            json!({ "status": "error", "message": "Email is already registered" })
        );
    }
}
