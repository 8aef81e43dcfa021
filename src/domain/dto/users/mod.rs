//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/                    # 클라이언트 → 서버 요청 DTO
//! │   ├── register_user.rs       # 회원가입 요청 + 검증 게이트
//! │   └── change_password.rs     # 비밀번호 변경 요청
//! └── response/                   # 서버 → 클라이언트 응답 DTO
//!     ├── user_response.rs       # UserSummary, UserProfile
//!     └── envelope.rs            # 공통 응답 엔벨로프
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
