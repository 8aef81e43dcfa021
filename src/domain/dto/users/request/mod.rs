//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문을 Rust 타입으로 변환합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (serde)
//! 2. **형식 검증**: 이메일, 길이, 패턴 등 (validator + 정책 검사)
//! 3. **비즈니스 검증**: 이메일 중복 등 (서비스 계층)
//!
//! 검증 실패는 `ApiError::Validation`으로 변환되어 400 응답이 됩니다.

pub mod change_password;
pub mod register_user;

pub use change_password::ChangePasswordRequest;
pub use register_user::{validate_registration, ProfileRequest, RegisterUserRequest, ValidatedRegistration};
