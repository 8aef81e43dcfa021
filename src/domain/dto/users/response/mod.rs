//! # 사용자 관련 응답 DTO 모듈
//!
//! - [`user_response`] - 엔티티에서 민감 정보를 제거한 사용자 표현
//! - [`envelope`] - 모든 엔드포인트가 공유하는 성공/에러 엔벨로프

pub mod envelope;
pub mod user_response;

pub use envelope::{DataResponse, ErrorResponse, MessageResponse, RegisterUserResponse, ResponseStatus};
pub use user_response::{UserProfile, UserSummary};
