//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1로 매핑되는 영속 엔티티를 정의합니다.
//!
//! - **BSON 직렬화**: `serde`와 `mongodb::bson`을 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **민감 정보 격리**: 엔티티는 응답으로 직접 직렬화하지 않고 DTO로 변환
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new_local(email, username, name, password_hash, None);
//! let saved = user_repo.insert(user).await?;
//! ```

pub mod users;
