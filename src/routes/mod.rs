//! 라우트 구성
//!
//! 공개 라우트와 인증이 필요한 라우트를 분리해서 등록합니다.
//! 경로는 기존 클라이언트와의 호환을 위해 버전 접두사 없이 노출됩니다.

use std::sync::Arc;

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use crate::services::auth::TokenService;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig, token_service: Arc<TokenService>) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg, token_service);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig, token_service: Arc<TokenService>) {
    // Public routes
    cfg.service(
        web::resource("/createUser").route(web::post().to(handlers::users::register_user)),
    );

    // Protected routes (리소스 단위 인증)
    cfg.service(
        web::resource("/getUserProfile")
            .wrap(AuthMiddleware::new(token_service.clone()))
            .route(web::get().to(handlers::users::get_user_profile)),
    );
    cfg.service(
        web::resource("/user/update")
            .wrap(AuthMiddleware::new(token_service.clone()))
            .route(web::put().to(handlers::users::update_user_profile)),
    );
    cfg.service(
        web::resource("/change-password")
            .wrap(AuthMiddleware::new(token_service))
            .route(web::put().to(handlers::users::change_password)),
    );
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_management_api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
