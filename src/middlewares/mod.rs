//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <jwt>` 헤더 추출 및 검증
//! - 검증된 사용자 정보를 request extension에 저장
//! - 실패 시 핸들러를 호출하지 않고 401 에러 엔벨로프 반환
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .service(
//!         web::resource("/getUserProfile")
//!             .wrap(AuthMiddleware::new(token_service.clone()))
//!             .route(web::get().to(get_user_profile))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
