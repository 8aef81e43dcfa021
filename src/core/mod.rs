//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 핵심 기능을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **ApiError**: 사용자에게 노출되는 모든 실패의 단일 표현
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 에러 엔벨로프 자동 렌더링
//! - **원인 보존**: 예상치 못한 에러는 일반 메시지로 감싸고 원본은 로그에만 남김

pub mod errors;

pub use errors::{ApiError, ApiResult};
