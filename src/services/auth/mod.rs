//! 인증 관련 서비스
//!
//! - [`token_service`] - Bearer 토큰 검증 및 클레임 추출

pub mod token_service;

pub use token_service::TokenService;
