use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::errors::ApiError;

/// 인증 미들웨어가 검증한 호출자 정보
///
/// 핸들러는 이 값을 다시 계산하지 않고 요청 확장(extensions)에서 꺼내 씁니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 사용자 역할 목록
    pub roles: Vec<String>,
}

/// ActixWeb FromRequest trait 구현
///
/// 미들웨어를 거치지 않은 요청에서 추출하면 401 에러 엔벨로프가 반환됩니다.
impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(ApiError::Unauthorized(
                "Authentication required".to_string(),
            ))),
        }
    }
}
