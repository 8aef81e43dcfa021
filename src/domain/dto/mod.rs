//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 계약을 정의합니다.
//!
//! | 역할 | 모듈 |
//! |------|------|
//! | HTTP 요청 본문 매핑 | `users::request` |
//! | HTTP 응답 본문 매핑 | `users::response` |
//! | 입력값 유효성 검증 | `validator` crate + 설정 기반 정책 |
//!
//! 엔티티는 직접 직렬화하지 않고 항상 응답 DTO로 변환합니다.

pub mod users;

pub use users::*;
