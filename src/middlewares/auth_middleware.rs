//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// JWT 인증 미들웨어
///
/// 감싼 라우트는 모두 인증이 필요합니다.
pub struct AuthMiddleware {
    token_service: Arc<TokenService>,
}

impl AuthMiddleware {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::Value;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::domain::models::token::TokenClaims;

    const SECRET: &str = "middleware-test-secret";

    fn sign(sub: &str, expires_in: Duration) -> String {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: sub.to_string(),
            roles: vec!["user".to_string()],
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap()
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    macro_rules! protected_app {
        () => {
            test::init_service(
                App::new().service(
                    web::resource("/me")
                        .wrap(AuthMiddleware::new(Arc::new(TokenService::new(SECRET))))
                        .route(web::get().to(whoami)),
                ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let app = protected_app!();
        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", sign("user-42", Duration::hours(1)))))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "user-42");
    }

    #[actix_web::test]
    async fn test_missing_header_returns_envelope() {
        let app = protected_app!();
        let req = test::TestRequest::get().uri("/me").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Authentication required");
    }

    #[actix_web::test]
    async fn test_expired_and_malformed_tokens_are_rejected() {
        let app = protected_app!();

        let expired = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", sign("user-42", Duration::hours(-2)))))
            .to_request();
        let resp = test::call_service(&app, expired).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Token has expired");

        let basic = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_request();
        let resp = test::call_service(&app, basic).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
