//! 비밀번호 변경 요청 DTO
//!
//! `PUT /change-password` 본문입니다. 검증 게이트를 거치지 않고
//! 핸들러에서 두 값의 존재 여부만 즉시 확인합니다.

use std::fmt;

use serde::Deserialize;

/// 비밀번호 변경 요청 구조체
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub current_password: Option<String>,
    #[serde(default)]
    pub new_password: Option<String>,
}

impl ChangePasswordRequest {
    /// 두 값이 모두 있고 빈 문자열이 아닐 때만 `(current, new)`를 반환합니다.
    ///
    /// 공백도 비밀번호의 일부이므로 trim 하지 않습니다.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let current = self.current_password.as_deref().filter(|p| !p.is_empty())?;
        let new = self.new_password.as_deref().filter(|p| !p.is_empty())?;
        Some((current, new))
    }
}

impl fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordRequest")
            .field("current_password", &self.current_password.as_ref().map(|_| "[REDACTED]"))
            .field("new_password", &self.new_password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ChangePasswordRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_reads_camel_case_fields() {
        let request = parse(json!({ "currentPassword": "OldPass123", "newPassword": "NewPass456" }));
        assert_eq!(request.credentials(), Some(("OldPass123", "NewPass456")));
    }

    #[test]
    fn test_missing_or_empty_values_yield_none() {
        assert!(parse(json!({})).credentials().is_none());
        assert!(parse(json!({ "currentPassword": "OldPass123" })).credentials().is_none());
        assert!(parse(json!({ "newPassword": "NewPass456" })).credentials().is_none());
        assert!(parse(json!({ "currentPassword": "", "newPassword": "NewPass456" }))
            .credentials()
            .is_none());
        assert!(parse(json!({ "currentPassword": null, "newPassword": null }))
            .credentials()
            .is_none());
    }

    #[test]
    fn test_whitespace_passwords_are_kept_verbatim() {
        let request = parse(json!({ "currentPassword": "        ", "newPassword": " New Pass 1 " }));
        assert_eq!(request.credentials(), Some(("        ", " New Pass 1 ")));
    }

    #[test]
    fn test_debug_output_redacts_passwords() {
        let request = parse(json!({ "currentPassword": "OldPass123", "newPassword": "NewPass456" }));
        let debug = format!("{:?}", request);
        assert!(!debug.contains("OldPass123"));
        assert!(!debug.contains("NewPass456"));
    }
}
