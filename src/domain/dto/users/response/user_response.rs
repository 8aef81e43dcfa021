//! 사용자 응답 DTO
//!
//! 엔티티에서 민감한 정보(비밀번호 해시)를 제거한 공개 표현입니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{ProfileDetails, User, UserStatus};

/// 회원가입 직후 반환되는 최소 정보
///
/// 비밀번호나 토큰 등 자격 증명은 절대 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub status: UserStatus,
}

/// 프로필 조회 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub username: String,
    pub name: String,
    pub status: UserStatus,
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileDetails>,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            status: user.status,
        }
    }
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        let id = user.id_string().unwrap_or_default();
        let User {
            email,
            username,
            name,
            status,
            roles,
            profile,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            email,
            username,
            name,
            status,
            roles,
            profile,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn stored_user() -> User {
        let mut user = User::new_local(
            "user@example.com".to_string(),
            "john_doe".to_string(),
            "John Doe".to_string(),
            "$2b$04$abcdefghijklmnopqrstuv".to_string(),
            None,
        );
        user.id = Some(ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap());
        user
    }

    #[test]
    fn test_summary_has_only_id_and_status() {
        let summary = UserSummary::from(&stored_user());
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "id": "507f1f77bcf86cd799439011", "status": "pending" })
        );
    }

    #[test]
    fn test_profile_never_contains_password_hash() {
        let profile = UserProfile::from(stored_user());
        let json = serde_json::to_string(&profile).unwrap();

        assert!(!json.contains("password"));
        assert!(!json.contains("$2b$"));
        assert_eq!(profile.id, "507f1f77bcf86cd799439011");
        assert!(profile.created_at.ends_with('Z'));
    }
}
