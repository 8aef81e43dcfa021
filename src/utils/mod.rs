//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 로그용 이메일 마스킹
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::redact_email;
//!
//! log::info!("Registration attempt for email: {}", redact_email(&email));
//! ```

pub mod string_utils;
