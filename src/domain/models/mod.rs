//! # Domain Models Module
//!
//! 영속성과 무관한 도메인 값 객체들을 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): MongoDB에 저장되는 식별 가능한 객체 (`User`)
//! - **Models** (`./`): 값 자체가 중요한 불변 객체 (`PasswordPolicy`, `FieldViolation`, `TokenClaims`)
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 인증 미들웨어가 주입하는 호출자 정보
//! - [`password_policy`] - 설정 가능한 비밀번호 정책
//! - [`validation`] - 필드 단위 검증 위반과 `validator` 에러 평탄화
//! - [`token`] - JWT 클레임

pub mod auth;
pub mod password_policy;
pub mod token;
pub mod validation;

pub use auth::AuthenticatedUser;
pub use password_policy::PasswordPolicy;
pub use token::TokenClaims;
pub use validation::{collect_violations, FieldViolation};
