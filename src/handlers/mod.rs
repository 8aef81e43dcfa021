//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 검증 게이트, 에러 정규화    ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직 (UserService trait)   ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리 규칙
//!
//! 모든 핸들러는 `Result<HttpResponse, ApiError>`를 반환합니다.
//! 성공 엔벨로프 하나 또는 [`ApiError`](crate::core::ApiError) 하나로 끝나며,
//! 에러 렌더링은 `ResponseError::error_response`가 단독으로 담당합니다.
//!
//! 서비스 실패는 다음 순서로 분류됩니다.
//!
//! 1. 서비스가 이미 분류한 `ApiError`는 그대로 전달
//! 2. 알려진 도메인 실패(이메일 중복)는 해당 `ApiError`로 변환
//! 3. 나머지는 엔드포인트별 일반 메시지의 500 에러로 감싸기

pub mod users;
