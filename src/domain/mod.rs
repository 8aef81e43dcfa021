//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 타입들을 모아둔 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB 문서와 매핑되는 영속 객체
//! ├── DTOs          - 요청/응답 데이터 계약, 검증 게이트
//! └── Models        - 값 객체 (비밀번호 정책, 검증 위반, 인증 정보)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;
pub mod models;
