//! JWT 액세스 토큰 검증 서비스
//!
//! 토큰 발급은 별도의 인증 서비스가 담당하며, 이 서비스는 공유 시크릿(HS256)으로
//! 서명된 토큰을 검증하고 클레임을 추출하는 역할만 합니다.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use crate::config::JwtConfig;
use crate::core::errors::ApiError;
use crate::domain::models::token::TokenClaims;

pub struct TokenService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// `JWT_SECRET` 설정으로 생성
    pub fn from_config() -> Self {
        Self::new(&JwtConfig::secret())
    }

    /// 서명과 만료 시간을 검증하고 클레임을 반환합니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, ApiError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    ApiError::Unauthorized("Token has expired".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    ApiError::Unauthorized("Invalid token".to_string())
                }
            })
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, ApiError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(ApiError::Unauthorized(
                "Invalid authorization header format".to_string(),
            )),
        }
    }
}
