//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서입니다.
//! 비밀번호는 해시로만 저장되며, 이 엔티티는 절대 그대로 응답에 노출되지 않습니다.
//! 응답은 항상 [`crate::domain::dto::users::response`]의 DTO로 변환해서 내보냅니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 계정 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// 가입 직후, 이메일 인증 전
    Pending,
    /// 정상 사용 중
    Active,
    /// 관리자에 의해 정지됨
    Suspended,
}

/// 선택 입력 프로필 정보
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique, 소문자로 정규화)
    pub email: String,
    /// 사용자명
    pub username: String,
    /// 표시 이름
    pub name: String,
    /// bcrypt 해시
    pub password_hash: String,
    pub status: UserStatus,
    /// 사용자 역할
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileDetails>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자를 생성합니다.
    ///
    /// 이메일 인증 전이므로 `Pending` 상태와 기본 역할 `user`로 시작합니다.
    pub fn new_local(
        email: String,
        username: String,
        name: String,
        password_hash: String,
        profile: Option<ProfileDetails>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            username,
            name,
            password_hash,
            status: UserStatus::Pending,
            roles: vec!["user".to_string()],
            profile,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
