//! 애플리케이션 설정 모듈
//!
//! 환경 변수 기반 설정을 제공합니다. `main`에서 `PROFILE`에 맞는 `.env` 파일을
//! 먼저 로드한 뒤 이 모듈의 함수들이 값을 읽습니다.
//!
//! # Modules
//!
//! - [`data_config`] - 실행 환경, 서버, MongoDB, bcrypt, 에러 노출 정책
//! - [`auth_config`] - JWT 시크릿, 비밀번호 정책
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::config::{PasswordPolicyConfig, ServerConfig};
//!
//! let policy = PasswordPolicyConfig::load();
//! let bind_address = ServerConfig::bind_address();
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
