//! 응답 엔벨로프
//!
//! 모든 엔드포인트는 성공이든 실패든 `status` 필드를 가진 JSON 하나를 반환합니다.
//!
//! ```json
//! { "status": "success", "message": "User registered successfully", "user": { "id": "...", "status": "pending" } }
//! { "status": "success", "data": { ... } }
//! { "status": "success", "message": "Password changed successfully" }
//! { "status": "error", "message": "Validation Error", "details": { "errors": [ ... ] } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::user_response::UserSummary;

/// 엔벨로프 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// 회원가입 성공 응답 (201)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserResponse {
    pub status: ResponseStatus,
    pub message: String,
    pub user: UserSummary,
}

impl RegisterUserResponse {
    pub fn new(user: UserSummary) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: "User registered successfully".to_string(),
            user,
        }
    }
}

/// 데이터를 그대로 감싸는 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub status: ResponseStatus,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            data,
        }
    }
}

/// 확인 메시지만 담는 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub status: ResponseStatus,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
        }
    }
}

/// 에러 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserStatus;
    use serde_json::json;

    #[test]
    fn test_register_response_shape() {
        let response = RegisterUserResponse::new(UserSummary {
            id: "abc".to_string(),
            status: UserStatus::Pending,
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "status": "success",
                "message": "User registered successfully",
                "user": { "id": "abc", "status": "pending" }
            })
        );
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let value = serde_json::to_value(ErrorResponse::new("Not implemented yet", None)).unwrap();
        assert_eq!(value, json!({ "status": "error", "message": "Not implemented yet" }));
    }
}
